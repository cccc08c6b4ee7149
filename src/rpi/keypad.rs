use std::io;
use std::path::Path;

use evdev::{Device, Key};

use crate::Keypad;
use crate::game::Direction;

/// Keypad bindings: KP8/KP2/KP4/KP6 as arrows, checked in this order.
const BINDINGS: [(Key, Direction); 4] = [
    (Key::KEY_KP8, Direction::Up),
    (Key::KEY_KP2, Direction::Down),
    (Key::KEY_KP4, Direction::Left),
    (Key::KEY_KP6, Direction::Right),
];

/// Numeric keypad over the Linux event device interface.
///
/// Polled once per tick: reads the currently held keys rather than the
/// event stream, so a slow tick never backs up input. When several
/// direction keys are held at once the first match in [`BINDINGS`] wins.
pub struct EvdevKeypad {
    device: Device,
}

impl EvdevKeypad {
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        Ok(Self {
            device: Device::open(path)?,
        })
    }
}

impl Keypad for EvdevKeypad {
    type Error = io::Error;

    fn read_direction(&mut self) -> io::Result<Option<Direction>> {
        let held = self.device.get_key_state()?;
        Ok(BINDINGS
            .iter()
            .find(|(key, _)| held.contains(*key))
            .map(|&(_, direction)| direction))
    }
}
