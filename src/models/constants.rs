/// Lowest accepted age (inclusive).
pub const MIN_AGE: i64 = 1;

/// Highest accepted age (inclusive).
pub const MAX_AGE: i64 = 99;

/// Keywords recognized at the main prompt.
pub const CMD_LIST: &str = "list";
pub const CMD_ADD: &str = "add";
pub const CMD_REMOVE: &str = "remove";
pub const CMD_QUIT: &str = "quit";
