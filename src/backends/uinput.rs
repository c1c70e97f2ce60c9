//! Virtual mouse output via uinput.

use crate::action::MouseButton;
use crate::device::PointerOutput;
use crate::error::OutputError;
use crate::event::Phase;
use evdev::uinput::{VirtualDevice, VirtualDeviceBuilder};
use evdev::{AttributeSet, EventType, InputEvent, Key, RelativeAxisType};

fn key_of(button: MouseButton) -> Key {
    match button {
        MouseButton::Left => Key::BTN_LEFT,
        MouseButton::Middle => Key::BTN_MIDDLE,
        MouseButton::Right => Key::BTN_RIGHT,
    }
}

/// The synthetic pointing device the host sees.
///
/// Declares the three mouse buttons plus relative X/Y motion. Created once
/// per process; sessions borrow it across restarts, so the host never sees
/// the mouse disappear when the pedal is replugged.
pub struct UinputMouse {
    device: VirtualDevice,
}

impl UinputMouse {
    pub fn create(name: &str) -> Result<Self, OutputError> {
        let mut keys = AttributeSet::<Key>::new();
        keys.insert(Key::BTN_LEFT);
        keys.insert(Key::BTN_MIDDLE);
        keys.insert(Key::BTN_RIGHT);

        let mut axes = AttributeSet::<RelativeAxisType>::new();
        axes.insert(RelativeAxisType::REL_X);
        axes.insert(RelativeAxisType::REL_Y);

        let device = VirtualDeviceBuilder::new()
            .map_err(OutputError::Create)?
            .name(name)
            .with_keys(&keys)
            .map_err(OutputError::Create)?
            .with_relative_axes(&axes)
            .map_err(OutputError::Create)?
            .build()
            .map_err(OutputError::Create)?;

        Ok(Self { device })
    }
}

impl PointerOutput for UinputMouse {
    fn button(&mut self, button: MouseButton, phase: Phase) -> Result<(), OutputError> {
        let value = match phase {
            Phase::Press => 1,
            Phase::Release => 0,
        };
        let event = InputEvent::new(EventType::KEY, key_of(button).code(), value);
        self.device.emit(&[event]).map_err(OutputError::Emit)
    }

    fn motion(&mut self, dx: i32, dy: i32) -> Result<(), OutputError> {
        let events = [
            InputEvent::new(EventType::RELATIVE, RelativeAxisType::REL_X.0, dx),
            InputEvent::new(EventType::RELATIVE, RelativeAxisType::REL_Y.0, dy),
        ];
        self.device.emit(&events).map_err(OutputError::Emit)
    }
}
