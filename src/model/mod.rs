//! Type metadata model shared by the metadata facility and the synthesizer.
//!
//! These types mirror the slice of JVM reflection data the implementor needs:
//! type references, access modifiers, and declarations of types, methods and
//! constructors.

mod decl;
mod modifiers;
mod target;
mod type_ref;

pub use decl::{Catalog, ConstructorDecl, MethodDecl, TypeDecl, TypeKind};
pub use modifiers::Modifiers;
pub use target::{TargetType, TypeShape, ENUM_BASE, OBJECT_ROOT};
pub use type_ref::{Primitive, TypeParseError, TypeRef};
