//! ID generator port for producing unique identifiers.

/// Generates unique identifiers.
///
/// Scratch workspaces are named from these IDs so that concurrent
/// invocations never share a directory.
pub trait IdGenerator: Send + Sync {
    /// Generates a new unique identifier string.
    fn generate_id(&self) -> String;
}
