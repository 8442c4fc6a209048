//! Type references as they appear in signatures.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A JVM primitive type, including the `void` marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    /// The "no value" result marker.
    Void,
    /// `boolean`
    Boolean,
    /// `byte`
    Byte,
    /// `char`
    Char,
    /// `short`
    Short,
    /// `int`
    Int,
    /// `long`
    Long,
    /// `float`
    Float,
    /// `double`
    Double,
}

impl Primitive {
    /// All primitives, `void` included.
    pub const ALL: [Primitive; 9] = [
        Primitive::Void,
        Primitive::Boolean,
        Primitive::Byte,
        Primitive::Char,
        Primitive::Short,
        Primitive::Int,
        Primitive::Long,
        Primitive::Float,
        Primitive::Double,
    ];

    /// The Java keyword naming this primitive.
    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            Primitive::Void => "void",
            Primitive::Boolean => "boolean",
            Primitive::Byte => "byte",
            Primitive::Char => "char",
            Primitive::Short => "short",
            Primitive::Int => "int",
            Primitive::Long => "long",
            Primitive::Float => "float",
            Primitive::Double => "double",
        }
    }

    /// Looks up a primitive by its keyword.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.keyword() == keyword)
    }
}

/// Error produced when a type string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed type name `{input}`: {reason}")]
pub struct TypeParseError {
    /// The rejected input.
    pub input: String,
    /// Why it was rejected.
    pub reason: &'static str,
}

/// A reference to a type in a member signature.
///
/// Named types keep their binary name (`a.b.Outer$Inner`); generic arguments
/// are erased when parsing, so `java.util.List<String>` and `java.util.List`
/// are the same reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TypeRef {
    /// A primitive or `void`.
    Primitive(Primitive),
    /// An array of the element type.
    Array(Box<TypeRef>),
    /// A class or interface, by binary name.
    Named(String),
}

impl TypeRef {
    /// Shorthand for the `void` result type.
    #[must_use]
    pub fn void() -> Self {
        TypeRef::Primitive(Primitive::Void)
    }

    /// Shorthand for a named reference type.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        TypeRef::Named(name.into())
    }

    /// Returns `true` for primitives (and `void`).
    #[must_use]
    pub fn is_primitive(&self) -> bool {
        matches!(self, TypeRef::Primitive(_))
    }

    /// The name as it must be written in Java source: nested types use `.`,
    /// arrays use `[]` suffixes.
    #[must_use]
    pub fn source_name(&self) -> String {
        match self {
            TypeRef::Primitive(p) => p.keyword().to_string(),
            TypeRef::Array(element) => format!("{}[]", element.source_name()),
            TypeRef::Named(name) => name.replace('$', "."),
        }
    }

    /// The name in binary form, suitable for lookups and round-tripping.
    #[must_use]
    pub fn binary_name(&self) -> String {
        match self {
            TypeRef::Primitive(p) => p.keyword().to_string(),
            TypeRef::Array(element) => format!("{}[]", element.binary_name()),
            TypeRef::Named(name) => name.clone(),
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source_name())
    }
}

/// Removes every `<...>` group, including nested ones, and all whitespace.
fn erase_generics(input: &str) -> Result<String, &'static str> {
    let mut erased = String::with_capacity(input.len());
    let mut depth = 0usize;
    for ch in input.chars() {
        match ch {
            '<' => depth += 1,
            '>' => depth = depth.checked_sub(1).ok_or("unbalanced `>`")?,
            c if depth == 0 && !c.is_whitespace() => erased.push(c),
            _ => {}
        }
    }
    if depth != 0 {
        return Err("unbalanced `<`");
    }
    Ok(erased)
}

fn is_binary_name(name: &str) -> bool {
    !name.is_empty()
        && name.split('.').all(|segment| {
            let mut chars = segment.chars();
            chars.next().is_some_and(|c| c.is_alphabetic() || c == '_' || c == '$')
                && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
        })
}

impl FromStr for TypeRef {
    type Err = TypeParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let fail = |reason| TypeParseError { input: input.to_string(), reason };

        let erased = erase_generics(input).map_err(fail)?;
        let mut base = erased.as_str();
        let mut dimensions = 0usize;
        if let Some(rest) = base.strip_suffix("...") {
            base = rest;
            dimensions += 1;
        }
        while let Some(rest) = base.strip_suffix("[]") {
            base = rest;
            dimensions += 1;
        }

        let mut ty = if let Some(primitive) = Primitive::from_keyword(base) {
            TypeRef::Primitive(primitive)
        } else if is_binary_name(base) {
            TypeRef::Named(base.to_string())
        } else {
            return Err(fail("expected a primitive keyword or a qualified name"));
        };

        if dimensions > 0 && ty == TypeRef::void() {
            return Err(fail("`void` cannot be an array element"));
        }
        for _ in 0..dimensions {
            ty = TypeRef::Array(Box::new(ty));
        }
        Ok(ty)
    }
}

impl TryFrom<String> for TypeRef {
    type Error = TypeParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TypeRef> for String {
    fn from(value: TypeRef) -> Self {
        value.binary_name()
    }
}
