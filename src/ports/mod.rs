//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the synthesizer and an external
//! facility (type metadata, filesystem, compiler, archive writer, IDs).
//! Implementations live in `src/adapters/`.

pub mod archive;
pub mod compiler;
pub mod filesystem;
pub mod id_gen;
pub mod metadata;

pub use archive::{ArchiveEntry, ArchiveWriter};
pub use compiler::{CompileOutput, CompileRequest, JavaCompiler};
pub use filesystem::FileSystem;
pub use id_gen::IdGenerator;
pub use metadata::TypeMetadata;
