//! Type surface collection: which members and constructors a target exposes.

use std::collections::HashSet;

use tracing::debug;

use crate::error::{ImplError, StructuralReason};
use crate::model::{ConstructorDecl, MethodDecl, Modifiers, TargetType, TypeShape};
use crate::obligation::{MemberObligation, ObligationSet};
use crate::ports::metadata::TypeMetadata;

/// Everything synthesis needs to know about a target's members.
#[derive(Debug, Clone)]
pub struct TypeSurface {
    /// Deduplicated abstract members.
    pub members: ObligationSet,
    /// Every declared constructor, private ones included.
    pub constructors: Vec<ConstructorDecl>,
}

/// Rejects targets that can never be implemented.
///
/// # Errors
///
/// Returns [`ImplError::Structural`] for primitives, arrays, the enum base
/// type and final types.
pub fn validate(target: &TargetType) -> Result<(), ImplError> {
    let reason = match target.shape {
        TypeShape::Primitive => Some(StructuralReason::Primitive),
        TypeShape::Array => Some(StructuralReason::Array),
        _ if target.is_enum_base() => Some(StructuralReason::EnumBase),
        _ if target.modifiers.contains(Modifiers::FINAL) => Some(StructuralReason::Final),
        TypeShape::Class | TypeShape::Interface => None,
    };
    match reason {
        Some(reason) => Err(ImplError::Structural { name: target.qualified_name.clone(), reason }),
        None => Ok(()),
    }
}

/// The target followed by each superclass up to the root.
///
/// # Errors
///
/// Returns [`ImplError::Resolution`] if a superclass cannot be resolved, or
/// [`ImplError::InheritanceCycle`] if the chain revisits a type.
pub fn ancestors(
    metadata: &dyn TypeMetadata,
    target: &TargetType,
) -> Result<Vec<TargetType>, ImplError> {
    let mut visited = HashSet::from([target.qualified_name.clone()]);
    let mut chain = vec![target.clone()];
    let mut next = metadata.superclass_of(target)?;
    while let Some(parent) = next {
        if !visited.insert(parent.qualified_name.clone()) {
            return Err(ImplError::InheritanceCycle { name: parent.qualified_name });
        }
        next = metadata.superclass_of(&parent)?;
        chain.push(parent);
    }
    Ok(chain)
}

fn abstract_members(methods: &[MethodDecl]) -> impl Iterator<Item = MemberObligation> + '_ {
    methods.iter().filter(|m| m.is_abstract()).map(MemberObligation::from)
}

/// Collects the abstract members of `target`.
///
/// Publicly reachable members come first; then each class in the ancestor
/// chain contributes the abstract members it declares itself, which surfaces
/// protected and package-private obligations the public query cannot see.
///
/// # Errors
///
/// Returns [`ImplError::Resolution`] if an ancestor cannot be resolved.
pub fn collect_members(
    metadata: &dyn TypeMetadata,
    target: &TargetType,
) -> Result<ObligationSet, ImplError> {
    let mut members = ObligationSet::new();
    members.extend(abstract_members(&metadata.members(target)?));

    for ancestor in ancestors(metadata, target)? {
        let declared = metadata.declared_members(&ancestor)?;
        members.extend(abstract_members(&declared));
    }
    Ok(members)
}

/// Validates `target` and collects its surface.
///
/// # Errors
///
/// Returns [`ImplError::Structural`] before touching metadata if the target
/// cannot be implemented, or [`ImplError::Resolution`] if an ancestor is unknown.
pub fn collect(metadata: &dyn TypeMetadata, target: &TargetType) -> Result<TypeSurface, ImplError> {
    validate(target)?;

    let members = collect_members(metadata, target)?;
    let constructors = metadata.constructors(target)?;
    debug!(
        target = %target.qualified_name,
        members = members.len(),
        constructors = constructors.len(),
        "collected type surface"
    );
    Ok(TypeSurface { members, constructors })
}
