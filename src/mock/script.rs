use std::collections::VecDeque;
use std::convert::Infallible;

use thiserror::Error;

use crate::Keypad;
use crate::game::Direction;

/// Error when parsing an input script.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("invalid input token: '{0}'")]
pub struct ParseError(char);

/// A scriptable keypad that replays one input per tick.
///
/// Script format, one character per tick:
/// - `u`, `d`, `l`, `r` — that direction is held
/// - `.` — no key held
/// - whitespace is ignored
///
/// New script can be appended at any time; once it runs out the keypad
/// reports no key held.
#[derive(Debug, Clone, Default)]
pub struct ScriptedKeypad {
    pending: VecDeque<Option<Direction>>,
}

impl ScriptedKeypad {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_script(script: &str) -> Result<Self, ParseError> {
        let mut keypad = Self::new();
        keypad.push_script(script)?;
        Ok(keypad)
    }

    /// Parse and queue additional script.
    ///
    /// A parse error leaves already-queued inputs untouched.
    pub fn push_script(&mut self, script: &str) -> Result<(), ParseError> {
        let inputs = parse_script(script)?;
        self.pending.extend(inputs);
        Ok(())
    }

    pub fn remaining(&self) -> usize {
        self.pending.len()
    }
}

impl Keypad for ScriptedKeypad {
    type Error = Infallible;

    fn read_direction(&mut self) -> Result<Option<Direction>, Infallible> {
        Ok(self.pending.pop_front().flatten())
    }
}

fn parse_script(script: &str) -> Result<Vec<Option<Direction>>, ParseError> {
    script
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c.to_ascii_lowercase() {
            'u' => Ok(Some(Direction::Up)),
            'd' => Ok(Some(Direction::Down)),
            'l' => Ok(Some(Direction::Left)),
            'r' => Ok(Some(Direction::Right)),
            '.' => Ok(None),
            other => Err(ParseError(other)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replays_one_input_per_tick() {
        let mut keypad = ScriptedKeypad::from_script("ur .d").unwrap();
        assert_eq!(keypad.read_direction(), Ok(Some(Direction::Up)));
        assert_eq!(keypad.read_direction(), Ok(Some(Direction::Right)));
        assert_eq!(keypad.read_direction(), Ok(None));
        assert_eq!(keypad.read_direction(), Ok(Some(Direction::Down)));
    }

    #[test]
    fn exhausted_script_reports_no_key() {
        let mut keypad = ScriptedKeypad::new();
        assert_eq!(keypad.read_direction(), Ok(None));
    }

    #[test]
    fn parse_error_names_the_token() {
        let result = ScriptedKeypad::from_script("u.x");
        assert_eq!(result.unwrap_err(), ParseError('x'));
    }

    #[test]
    fn parse_error_does_not_modify_state() {
        let mut keypad = ScriptedKeypad::from_script("u.").unwrap();
        assert!(keypad.push_script("l?r").is_err());
        assert_eq!(keypad.remaining(), 2, "queued inputs survive a bad push");
    }
}
