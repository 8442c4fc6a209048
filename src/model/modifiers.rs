//! JVM access modifiers as a bit set.

use std::fmt;
use std::ops::BitOr;

use serde::{Deserialize, Serialize};

/// A set of Java modifiers, stored with the JVM access-flag bit layout.
///
/// Serialized as a list of keywords, e.g. `[public, abstract]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Modifiers(u16);

impl Modifiers {
    /// No modifiers.
    pub const NONE: Self = Self(0);
    /// `public`
    pub const PUBLIC: Self = Self(0x0001);
    /// `private`
    pub const PRIVATE: Self = Self(0x0002);
    /// `protected`
    pub const PROTECTED: Self = Self(0x0004);
    /// `static`
    pub const STATIC: Self = Self(0x0008);
    /// `final`
    pub const FINAL: Self = Self(0x0010);
    /// `synchronized`
    pub const SYNCHRONIZED: Self = Self(0x0020);
    /// `volatile`
    pub const VOLATILE: Self = Self(0x0040);
    /// `transient`; on methods the same bit marks varargs.
    pub const TRANSIENT: Self = Self(0x0080);
    /// Varargs marker for methods and constructors.
    pub const VARARGS: Self = Self(0x0080);
    /// `native`
    pub const NATIVE: Self = Self(0x0100);
    /// `interface`
    pub const INTERFACE: Self = Self(0x0200);
    /// `abstract`
    pub const ABSTRACT: Self = Self(0x0400);
    /// `strictfp`
    pub const STRICT: Self = Self(0x0800);

    /// Modifiers that never appear on a generated member or type header.
    pub const NON_EMITTABLE: Self =
        Self(Self::ABSTRACT.0 | Self::TRANSIENT.0 | Self::INTERFACE.0);

    /// Keywords in the order Java source conventionally lists them.
    const KEYWORDS: [(Modifiers, &'static str); 12] = [
        (Self::PUBLIC, "public"),
        (Self::PROTECTED, "protected"),
        (Self::PRIVATE, "private"),
        (Self::ABSTRACT, "abstract"),
        (Self::STATIC, "static"),
        (Self::FINAL, "final"),
        (Self::TRANSIENT, "transient"),
        (Self::VOLATILE, "volatile"),
        (Self::SYNCHRONIZED, "synchronized"),
        (Self::NATIVE, "native"),
        (Self::STRICT, "strictfp"),
        (Self::INTERFACE, "interface"),
    ];

    /// Builds a set from raw access-flag bits.
    #[must_use]
    pub const fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    /// The raw access-flag bits.
    #[must_use]
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Returns `true` if every bit of `other` is set.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns a copy with the bits of `other` cleared.
    #[must_use]
    pub const fn without(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Returns `true` if no modifier is set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The modifiers that survive onto generated code.
    #[must_use]
    pub const fn emittable(self) -> Self {
        self.without(Self::NON_EMITTABLE)
    }

    /// Parses one keyword. `varargs` is accepted as an alias of the transient bit.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        if keyword == "varargs" {
            return Some(Self::VARARGS);
        }
        Self::KEYWORDS.iter().find(|(_, kw)| *kw == keyword).map(|(m, _)| *m)
    }

    /// The keywords of the set bits, in source order.
    #[must_use]
    pub fn keywords(self) -> Vec<&'static str> {
        Self::KEYWORDS.iter().filter(|(m, _)| self.contains(*m)).map(|(_, kw)| *kw).collect()
    }
}

impl BitOr for Modifiers {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.keywords().join(" "))
    }
}

impl TryFrom<Vec<String>> for Modifiers {
    type Error = String;

    fn try_from(keywords: Vec<String>) -> Result<Self, Self::Error> {
        keywords.iter().try_fold(Self::NONE, |acc, kw| {
            Self::from_keyword(kw).map(|m| acc | m).ok_or_else(|| format!("unknown modifier `{kw}`"))
        })
    }
}

impl From<Modifiers> for Vec<String> {
    fn from(value: Modifiers) -> Self {
        value.keywords().into_iter().map(String::from).collect()
    }
}
