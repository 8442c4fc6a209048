//! Minimal legal return statements for stub bodies.

use std::fmt;

use crate::model::{Primitive, TypeRef};

/// What a stub returns for a given result type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultValue {
    /// `void`: a bare `return;`.
    Nothing,
    /// Any reference or array type.
    Null,
    /// `boolean`.
    False,
    /// Every numeric primitive, `char` included.
    Zero,
}

impl DefaultValue {
    /// Picks the default for a declared result type.
    #[must_use]
    pub fn for_type(ty: &TypeRef) -> Self {
        match ty {
            TypeRef::Primitive(Primitive::Void) => DefaultValue::Nothing,
            TypeRef::Array(_) | TypeRef::Named(_) => DefaultValue::Null,
            TypeRef::Primitive(Primitive::Boolean) => DefaultValue::False,
            TypeRef::Primitive(
                Primitive::Byte
                | Primitive::Char
                | Primitive::Short
                | Primitive::Int
                | Primitive::Long
                | Primitive::Float
                | Primitive::Double,
            ) => DefaultValue::Zero,
        }
    }

    /// The returned expression, if any.
    #[must_use]
    pub fn expression(self) -> Option<&'static str> {
        match self {
            DefaultValue::Nothing => None,
            DefaultValue::Null => Some("null"),
            DefaultValue::False => Some("false"),
            DefaultValue::Zero => Some("0"),
        }
    }
}

/// Renders the complete return statement, e.g. `return 0;`.
impl fmt::Display for DefaultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.expression() {
            Some(expr) => write!(f, "return {expr};"),
            None => f.write_str("return;"),
        }
    }
}
