//! Synthesis obligations and their deduplication.
//!
//! Two member obligations are the same obligation when their names and
//! parameter-type sequences match. The result type is deliberately not part
//! of the key: an override with a covariant return and the method it
//! overrides are one obligation, and whichever copy is inserted first is kept.

use std::collections::HashSet;

use crate::model::{ConstructorDecl, MethodDecl, Modifiers, TypeRef};

/// Identity of a member obligation: name plus parameter types.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SignatureKey {
    /// Member name.
    pub name: String,
    /// Parameter types, in order.
    pub params: Vec<TypeRef>,
}

/// One abstract member the generated type must implement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberObligation {
    /// Member name.
    pub name: String,
    /// Parameter types, in order.
    pub params: Vec<TypeRef>,
    /// Declared result type.
    pub returns: TypeRef,
    /// Declared checked exceptions.
    pub throws: Vec<TypeRef>,
    /// Declared modifiers.
    pub modifiers: Modifiers,
}

impl MemberObligation {
    /// The deduplication key.
    #[must_use]
    pub fn key(&self) -> SignatureKey {
        SignatureKey { name: self.name.clone(), params: self.params.clone() }
    }
}

impl From<&MethodDecl> for MemberObligation {
    fn from(method: &MethodDecl) -> Self {
        Self {
            name: method.name.clone(),
            params: method.params.clone(),
            returns: method.returns.clone(),
            throws: method.throws.clone(),
            modifiers: method.modifiers,
        }
    }
}

/// One accessible constructor the generated class forwards to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructorObligation {
    /// Parameter types, in order.
    pub params: Vec<TypeRef>,
    /// Declared checked exceptions.
    pub throws: Vec<TypeRef>,
    /// Declared modifiers.
    pub modifiers: Modifiers,
}

impl From<&ConstructorDecl> for ConstructorObligation {
    fn from(ctor: &ConstructorDecl) -> Self {
        Self { params: ctor.params.clone(), throws: ctor.throws.clone(), modifiers: ctor.modifiers }
    }
}

/// Member obligations keyed by [`SignatureKey`], in first-insertion order.
#[derive(Debug, Clone, Default)]
pub struct ObligationSet {
    keys: HashSet<SignatureKey>,
    members: Vec<MemberObligation>,
}

impl ObligationSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `obligation` unless one with the same key is present.
    ///
    /// Returns `true` if it was inserted.
    pub fn insert(&mut self, obligation: MemberObligation) -> bool {
        if self.keys.insert(obligation.key()) {
            self.members.push(obligation);
            true
        } else {
            false
        }
    }

    /// Returns `true` if an obligation with this key is present.
    #[must_use]
    pub fn contains(&self, key: &SignatureKey) -> bool {
        self.keys.contains(key)
    }

    /// Number of distinct obligations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if there are no obligations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterates obligations in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, MemberObligation> {
        self.members.iter()
    }
}

impl<'a> IntoIterator for &'a ObligationSet {
    type Item = &'a MemberObligation;
    type IntoIter = std::slice::Iter<'a, MemberObligation>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<MemberObligation> for ObligationSet {
    fn extend<T: IntoIterator<Item = MemberObligation>>(&mut self, iter: T) {
        for obligation in iter {
            self.insert(obligation);
        }
    }
}
