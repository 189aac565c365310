//! Colorized console output.

use colored::Colorize;

use crate::models::constants::{CMD_ADD, CMD_LIST, CMD_QUIT, CMD_REMOVE};
use crate::models::UserRecord;

/// Report a completed operation.
pub fn success(text: &str) {
    println!("{} {}", "✔".green().bold(), text.green());
}

/// Report a failed operation.
pub fn error(text: &str) {
    println!("{} {}", "✖".red().bold(), text.red());
}

/// Neutral informational line.
pub fn info(text: &str) {
    println!("{} {}", "ℹ".blue().bold(), text.blue());
}

/// Fixed startup text, printed once before the loop starts.
pub fn banner() {
    println!();
    info("Welcome to the UsersApp!");
    println!("{}", "=".repeat(36));
    info("Available actions");
    println!();
    println!("{CMD_LIST} – show all users");
    println!("{CMD_ADD} – add new user to the list");
    println!("{CMD_REMOVE} – remove user from the list");
    println!("{CMD_QUIT} – quit the app");
    println!();
}

/// Aligned two-column rendering of the store contents.
pub fn render_table(records: &[UserRecord]) {
    let name_width = records
        .iter()
        .map(|user| user.name.len())
        .chain(std::iter::once("name".len()))
        .max()
        .unwrap_or(4);

    let header = format!("{:<name_width$}  {}", "name", "age");
    println!("{}", header.bold());
    println!("{}", "-".repeat(name_width + 5));
    for user in records {
        println!("{:<name_width$}  {}", user.name, user.age);
    }
}
