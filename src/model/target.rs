//! The resolved type an implementation is synthesized for.

use super::modifiers::Modifiers;

/// Binary name of the universal enum base type, which can never be implemented.
pub const ENUM_BASE: &str = "java.lang.Enum";

/// Binary name of the root of every class hierarchy.
pub const OBJECT_ROOT: &str = "java.lang.Object";

/// The structural shape of a resolved type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeShape {
    /// A class (abstract or concrete, including enums).
    Class,
    /// An interface.
    Interface,
    /// A primitive or `void`.
    Primitive,
    /// An array type.
    Array,
}

/// A type resolved through the metadata facility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetType {
    /// Binary qualified name, e.g. `java.util.Map$Entry`.
    pub qualified_name: String,
    /// What kind of type this is.
    pub shape: TypeShape,
    /// Declared modifiers.
    pub modifiers: Modifiers,
}

impl TargetType {
    /// Creates a target from its parts.
    #[must_use]
    pub fn new(qualified_name: impl Into<String>, shape: TypeShape, modifiers: Modifiers) -> Self {
        Self { qualified_name: qualified_name.into(), shape, modifiers }
    }

    /// The simple name: the last segment after any package or enclosing type.
    #[must_use]
    pub fn simple_name(&self) -> &str {
        let tail = self.qualified_name.rsplit('.').next().unwrap_or(&self.qualified_name);
        tail.rsplit('$').next().unwrap_or(tail)
    }

    /// The package, or `None` for the default package, primitives and arrays.
    #[must_use]
    pub fn package(&self) -> Option<&str> {
        match self.shape {
            TypeShape::Primitive | TypeShape::Array => None,
            TypeShape::Class | TypeShape::Interface => {
                self.qualified_name.rsplit_once('.').map(|(package, _)| package)
            }
        }
    }

    /// Returns `true` for interfaces.
    #[must_use]
    pub fn is_interface(&self) -> bool {
        self.shape == TypeShape::Interface
    }

    /// Returns `true` for the universal enum base type.
    #[must_use]
    pub fn is_enum_base(&self) -> bool {
        self.qualified_name == ENUM_BASE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_package_and_simple_name() {
        let t = TargetType::new("java.util.Map$Entry", TypeShape::Interface, Modifiers::PUBLIC);
        assert_eq!(t.package(), Some("java.util"));
        assert_eq!(t.simple_name(), "Entry");
    }

    #[test]
    fn default_package_has_no_package() {
        let t = TargetType::new("Shape", TypeShape::Class, Modifiers::ABSTRACT);
        assert_eq!(t.package(), None);
        assert_eq!(t.simple_name(), "Shape");
    }

    #[test]
    fn arrays_have_no_package() {
        let t = TargetType::new("java.lang.String[]", TypeShape::Array, Modifiers::FINAL);
        assert_eq!(t.package(), None);
    }
}
