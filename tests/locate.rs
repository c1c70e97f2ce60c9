//! Discovery behavior against scripted enumerations.

use pedalmap::{
    locate, DeviceEntry, DeviceIdentity, DeviceMeta, Enumerator, Locator, RetryPolicy, Waiter,
};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

const PEDAL: DeviceIdentity = DeviceIdentity::new(0x05f3, 0x00ff, 0x0100);

fn entry(path: &str, vendor: u16, product: u16, version: u16) -> DeviceEntry {
    DeviceEntry {
        path: PathBuf::from(path),
        meta: DeviceMeta {
            vendor,
            product,
            version,
            ..Default::default()
        },
    }
}

/// Enumerator that replays a fixed sequence of scans, then keeps
/// returning the last one.
struct ScriptedScans {
    scans: VecDeque<Vec<DeviceEntry>>,
    last: Vec<DeviceEntry>,
}

impl ScriptedScans {
    fn new(scans: Vec<Vec<DeviceEntry>>) -> Self {
        Self {
            scans: scans.into(),
            last: Vec::new(),
        }
    }
}

impl Enumerator for ScriptedScans {
    fn scan(&mut self) -> Vec<DeviceEntry> {
        if let Some(scan) = self.scans.pop_front() {
            self.last = scan;
        }
        self.last.clone()
    }
}

/// Waiter that records requested delays instead of sleeping.
struct RecordingWaiter(Rc<RefCell<Vec<Duration>>>);

impl Waiter for RecordingWaiter {
    fn wait(&mut self, delay: Duration) {
        self.0.borrow_mut().push(delay);
    }
}

#[test]
fn locate_reports_absence_as_none() {
    let entries = vec![
        entry("/dev/input/event0", 0x046d, 0xc52b, 0x0111),
        entry("/dev/input/event1", 0x0001, 0x0001, 0xab41),
    ];
    assert!(locate(&entries, &PEDAL).is_none());
}

#[test]
fn locate_requires_all_three_fields_to_match() {
    let entries = vec![
        entry("/dev/input/event0", 0x05f3, 0x00ff, 0x0200),
        entry("/dev/input/event1", 0x05f3, 0x00fe, 0x0100),
        entry("/dev/input/event2", 0x05f4, 0x00ff, 0x0100),
    ];
    assert!(locate(&entries, &PEDAL).is_none());
}

#[test]
fn locate_returns_the_matching_node() {
    let entries = vec![
        entry("/dev/input/event0", 0x046d, 0xc52b, 0x0111),
        entry("/dev/input/event3", 0x05f3, 0x00ff, 0x0100),
    ];
    let found = locate(&entries, &PEDAL).unwrap();
    assert_eq!(found.path, PathBuf::from("/dev/input/event3"));
}

#[test]
fn first_entry_in_scan_order_wins_on_duplicates() {
    let entries = vec![
        entry("/dev/input/event2", 0x05f3, 0x00ff, 0x0100),
        entry("/dev/input/event7", 0x05f3, 0x00ff, 0x0100),
    ];
    let found = locate(&entries, &PEDAL).unwrap();
    assert_eq!(found.path, PathBuf::from("/dev/input/event2"));
}

#[test]
fn wait_for_returns_immediately_when_present() {
    let scans = ScriptedScans::new(vec![vec![entry("/dev/input/event5", 0x05f3, 0x00ff, 0x0100)]]);
    let waits = Rc::new(RefCell::new(Vec::new()));
    let mut locator = Locator::new(
        scans,
        RetryPolicy::default(),
        RecordingWaiter(waits.clone()),
    );

    let found = locator.wait_for(&PEDAL);
    assert_eq!(found.path, PathBuf::from("/dev/input/event5"));
    assert!(waits.borrow().is_empty());
}

#[test]
fn wait_for_retries_with_the_policy_delay_until_the_device_appears() {
    let scans = ScriptedScans::new(vec![
        vec![],
        vec![entry("/dev/input/event0", 0x046d, 0xc52b, 0x0111)],
        vec![
            entry("/dev/input/event0", 0x046d, 0xc52b, 0x0111),
            entry("/dev/input/event6", 0x05f3, 0x00ff, 0x0100),
        ],
    ]);
    let waits = Rc::new(RefCell::new(Vec::new()));
    let policy = RetryPolicy {
        delay: Duration::from_secs(5),
    };
    let mut locator = Locator::new(scans, policy, RecordingWaiter(waits.clone()));

    let found = locator.wait_for(&PEDAL);
    assert_eq!(found.path, PathBuf::from("/dev/input/event6"));
    assert_eq!(
        waits.borrow().as_slice(),
        &[Duration::from_secs(5), Duration::from_secs(5)]
    );
}
