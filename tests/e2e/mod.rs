//! End-to-end tests for full interactive sessions.
//!
//! Each test scripts a complete terminal session through `App::run` and
//! asserts the final store state and clean termination.

use std::collections::VecDeque;

use anyhow::Result;
use usersapp::app::App;
use usersapp::prompt::Prompter;

/// Prompter that replays a fixed script of answers.
struct ScriptedPrompter {
    answers: VecDeque<String>,
}

impl ScriptedPrompter {
    fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn read_text(&mut self, _message: &str) -> Result<String> {
        self.answers
            .pop_front()
            .ok_or_else(|| anyhow::anyhow!("script exhausted"))
    }
}

fn run_session(answers: &[&str]) -> App<ScriptedPrompter> {
    let mut app = App::new(ScriptedPrompter::new(answers));
    app.run().expect("session should end via quit");
    app
}

#[test]
fn test_empty_session_list_then_quit() {
    let app = run_session(&["list", "quit"]);
    assert!(app.store().is_empty());
}

#[test]
fn test_add_list_remove_roundtrip() {
    let app = run_session(&[
        "add", "john", "30", //
        "add", "ann", "25", //
        "list", //
        "remove", "John", //
        "quit",
    ]);

    let users = app.store().list_all();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].name, "Ann");
    assert_eq!(users[0].age, 25);
}

#[test]
fn test_remove_matches_normalized_name_only() {
    // "ann" is stored as "Ann": removing "Ann" succeeds, a second
    // removal with the raw lowercase form finds nothing.
    let app = run_session(&[
        "add", "ann", "25", //
        "remove", "Ann", //
        "remove", "ann", //
        "quit",
    ]);

    assert!(app.store().is_empty());
}

#[test]
fn test_duplicate_names_removed_first_match_first() {
    let app = run_session(&[
        "add", "ann", "25", //
        "add", "ANN", "52", //
        "remove", "Ann", //
        "quit",
    ]);

    let users = app.store().list_all();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].age, 52);
}

#[test]
fn test_invalid_entries_never_reach_the_store() {
    let app = run_session(&[
        "add", "", "30", // empty name
        "add", "ann", "150", // age above range
        "add", "bob", "0", // age below range
        "add", "eve", "abc", // non-numeric age
        "quit",
    ]);

    assert!(app.store().is_empty());
}

#[test]
fn test_session_survives_garbage_commands() {
    let app = run_session(&[
        "LIST", // case-sensitive: unrecognized
        " add", // padded: unrecognized
        "help", //
        "add", "ann", "25", //
        "quit",
    ]);

    assert_eq!(app.store().len(), 1);
}
