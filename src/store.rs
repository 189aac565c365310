//! In-memory ordered store of user records.

use thiserror::Error;
use tracing::debug;

use crate::models::UserRecord;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("user not found")]
    NotFound,
}

/// Ordered collection of validated records.
///
/// Insertion order is preserved and duplicate names may coexist; removal
/// takes the first match. The store lives exactly as long as the loop
/// that owns it.
#[derive(Debug, Default)]
pub struct UserStore {
    data: Vec<UserRecord>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a validated record. Validation happens upstream, so this
    /// cannot fail.
    pub fn add(&mut self, record: UserRecord) {
        debug!(name = %record.name, age = record.age, "adding user");
        self.data.push(record);
    }

    /// Remove the first record whose stored name exactly equals `name`.
    ///
    /// Stored names are already normalized; the match is case-sensitive
    /// against that normalized form.
    pub fn remove(&mut self, name: &str) -> Result<(), StoreError> {
        match self.data.iter().position(|user| user.name == name) {
            Some(index) => {
                self.data.remove(index);
                debug!(name, "removed user");
                Ok(())
            }
            None => Err(StoreError::NotFound),
        }
    }

    /// A snapshot of the current contents, not a live view.
    pub fn list_all(&self) -> Vec<UserRecord> {
        self.data.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }
}
