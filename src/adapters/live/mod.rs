//! Live adapters for real external interactions.

pub mod archive;
pub mod compiler;
pub mod filesystem;
pub mod id_gen;
