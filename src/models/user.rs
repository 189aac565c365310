/// A validated user record.
///
/// Only constructed through `validation::validate`, which enforces the
/// name and age invariants and stores the name in normalized form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub name: String,
    pub age: u8,
}
