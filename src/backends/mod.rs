//! Input and output backends.
//!
//! Implementations of the [`EventSource`](crate::device::EventSource) and
//! [`PointerOutput`](crate::device::PointerOutput) seams:
//!
//! - [`evdev_input`] — enumeration and blocking reads from `/dev/input`.
//! - [`uinput`] — the virtual mouse the translator emits through.
//! - [`synthetic`] — scriptable in-memory doubles for tests and demos.
//!
//! Most users should not touch these directly; the binary wires the evdev
//! source and the uinput mouse into a [`Session`](crate::session::Session).

pub mod evdev_input;
pub mod synthetic;
pub mod uinput;
