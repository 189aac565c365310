//! The interaction loop.

use anyhow::Result;
use tracing::debug;

use crate::interpreter::Action;
use crate::prompt::Prompter;
use crate::store::UserStore;
use crate::ui;
use crate::validation;

/// Drives the read-command, dispatch, report cycle until `quit`.
///
/// Owns the store for the lifetime of the process; every mutation goes
/// through this loop.
pub struct App<P: Prompter> {
    store: UserStore,
    prompter: P,
}

impl<P: Prompter> App<P> {
    pub fn new(prompter: P) -> Self {
        Self {
            store: UserStore::new(),
            prompter,
        }
    }

    /// Run until the user quits.
    ///
    /// Operation failures (invalid data, name not found) are reported
    /// and the loop continues; only input-channel loss escapes as an
    /// error.
    pub fn run(&mut self) -> Result<()> {
        loop {
            let answer = self.prompter.read_text("How can I help you?")?;

            match Action::interpret(&answer) {
                Some(Action::List) => self.list(),
                Some(Action::Add) => self.add()?,
                Some(Action::Remove) => self.remove()?,
                Some(Action::Quit) => {
                    ui::info("Bye bye!");
                    return Ok(());
                }
                None => {
                    debug!(input = %answer, "unrecognized action");
                    ui::error("Unknown action");
                }
            }
        }
    }

    fn list(&self) {
        ui::info("Users data");

        let users = self.store.list_all();
        if users.is_empty() {
            println!("No data...");
        } else {
            ui::render_table(&users);
        }
    }

    fn add(&mut self) -> Result<()> {
        let name = self.prompter.read_text("Enter name")?;
        let age = self.prompter.read_text("Enter age")?;

        let candidate =
            validation::parse_age(&age).and_then(|age| validation::validate(&name, age));

        match candidate {
            Ok(record) => {
                self.store.add(record);
                ui::success("User added successfully");
            }
            Err(cause) => {
                debug!(%cause, "rejected user");
                ui::error("Invalid data");
            }
        }

        Ok(())
    }

    fn remove(&mut self) -> Result<()> {
        let name = self.prompter.read_text("Enter name")?;

        match self.store.remove(&name) {
            Ok(()) => ui::success("User removed successfully"),
            Err(_) => ui::error("User not found"),
        }

        Ok(())
    }

    /// Read-only view of the store.
    pub fn store(&self) -> &UserStore {
        &self.store
    }
}
