//! Mapping of raw prompt input to actions.

use crate::models::constants::{CMD_ADD, CMD_LIST, CMD_QUIT, CMD_REMOVE};

/// The closed set of actions recognized at the main prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    List,
    Add,
    Remove,
    Quit,
}

impl Action {
    /// Interpret one line of input.
    ///
    /// Exact, case-sensitive match only: no trimming, no aliases.
    /// `None` means the input is unrecognized.
    pub fn interpret(raw: &str) -> Option<Action> {
        match raw {
            CMD_LIST => Some(Action::List),
            CMD_ADD => Some(Action::Add),
            CMD_REMOVE => Some(Action::Remove),
            CMD_QUIT => Some(Action::Quit),
            _ => None,
        }
    }
}
