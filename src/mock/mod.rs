mod script;
mod strip;
mod terminal;

pub use script::{ParseError, ScriptedKeypad};
pub use strip::{MockStrip, ShowError};
pub use terminal::{TerminalError, TerminalStrip};
