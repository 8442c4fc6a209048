//! Catalog declarations: the serialized form of type metadata.

use serde::{Deserialize, Serialize};

use super::modifiers::Modifiers;
use super::type_ref::TypeRef;

/// The kind of a declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    /// A class.
    Class,
    /// An interface.
    Interface,
    /// An enum; always final.
    Enum,
}

/// A method declared on a type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDecl {
    /// Method name.
    pub name: String,
    /// Parameter types, in order.
    #[serde(default)]
    pub params: Vec<TypeRef>,
    /// Declared result type.
    #[serde(default = "TypeRef::void")]
    pub returns: TypeRef,
    /// Declared checked exceptions.
    #[serde(default)]
    pub throws: Vec<TypeRef>,
    /// Declared modifiers.
    #[serde(default)]
    pub modifiers: Modifiers,
    /// Interface default method: has a body, so never abstract.
    #[serde(default)]
    pub default: bool,
}

impl MethodDecl {
    /// Returns `true` if the method has no body.
    #[must_use]
    pub fn is_abstract(&self) -> bool {
        self.modifiers.contains(Modifiers::ABSTRACT)
    }
}

/// A constructor declared on a class.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConstructorDecl {
    /// Parameter types, in order.
    #[serde(default)]
    pub params: Vec<TypeRef>,
    /// Declared checked exceptions.
    #[serde(default)]
    pub throws: Vec<TypeRef>,
    /// Declared modifiers.
    #[serde(default)]
    pub modifiers: Modifiers,
}

/// One type described in a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDecl {
    /// Binary qualified name (`$` separates nested types).
    pub name: String,
    /// Class, interface or enum.
    #[serde(default = "default_kind")]
    pub kind: TypeKind,
    /// Declared modifiers.
    #[serde(default)]
    pub modifiers: Modifiers,
    /// Direct superclass; classes without one extend `java.lang.Object`.
    #[serde(default)]
    pub superclass: Option<String>,
    /// Directly implemented or extended interfaces.
    #[serde(default)]
    pub interfaces: Vec<String>,
    /// Declared methods.
    #[serde(default)]
    pub methods: Vec<MethodDecl>,
    /// Declared constructors; `None` means the implicit default constructor.
    #[serde(default)]
    pub constructors: Option<Vec<ConstructorDecl>>,
}

fn default_kind() -> TypeKind {
    TypeKind::Class
}

/// A document of type declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// The declared types.
    #[serde(default)]
    pub types: Vec<TypeDecl>,
}
