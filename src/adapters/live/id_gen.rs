//! Random scratch workspace ids.

use uuid::Uuid;

use crate::ports::IdGenerator;

/// Hands out a fresh v4 UUID per call.
///
/// Each build names its scratch workspace `implementor-<id>`, so two
/// invocations sharing a scratch root never write into the same directory.
/// Ids are hyphenated lowercase hex and safe as a path component.
#[derive(Debug, Default, Clone, Copy)]
pub struct LiveIdGenerator;

impl LiveIdGenerator {
    /// Creates the generator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl IdGenerator for LiveIdGenerator {
    fn generate_id(&self) -> String {
        Uuid::new_v4().hyphenated().to_string()
    }
}
