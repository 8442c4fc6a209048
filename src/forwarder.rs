//! Constructor forwarding for class targets.

use crate::error::ImplError;
use crate::model::{ConstructorDecl, Modifiers, TargetType};
use crate::obligation::ConstructorObligation;

/// Returns `true` if a subclass may call this constructor.
#[must_use]
pub fn is_eligible(ctor: &ConstructorDecl) -> bool {
    !ctor.modifiers.contains(Modifiers::PRIVATE)
}

/// Selects the constructors the generated class forwards to.
///
/// Interfaces never have constructor obligations.
///
/// # Errors
///
/// Returns [`ImplError::NoAccessibleConstructor`] for a class whose declared
/// constructors are all private (or which declares none at all).
pub fn forwarders(
    target: &TargetType,
    declared: &[ConstructorDecl],
) -> Result<Vec<ConstructorObligation>, ImplError> {
    if target.is_interface() {
        return Ok(Vec::new());
    }
    let eligible: Vec<_> =
        declared.iter().filter(|c| is_eligible(c)).map(ConstructorObligation::from).collect();
    if eligible.is_empty() {
        return Err(ImplError::NoAccessibleConstructor { name: target.qualified_name.clone() });
    }
    Ok(eligible)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{TypeRef, TypeShape};

    fn ctor(modifiers: Modifiers, params: &[&str]) -> ConstructorDecl {
        ConstructorDecl {
            params: params.iter().map(|p| p.parse().unwrap()).collect(),
            throws: Vec::new(),
            modifiers,
        }
    }

    #[test]
    fn skips_private_constructors() {
        let target = TargetType::new("a.Base", TypeShape::Class, Modifiers::ABSTRACT);
        let declared = [
            ctor(Modifiers::PRIVATE, &[]),
            ctor(Modifiers::PROTECTED, &["int"]),
            ctor(Modifiers::NONE, &["java.lang.String"]),
        ];
        let chosen = forwarders(&target, &declared).unwrap();
        assert_eq!(chosen.len(), 2);
        assert_eq!(chosen[0].params, vec!["int".parse::<TypeRef>().unwrap()]);
    }

    #[test]
    fn only_private_constructors_is_an_error() {
        let target = TargetType::new("a.Singleton", TypeShape::Class, Modifiers::PUBLIC);
        let declared = [ctor(Modifiers::PRIVATE, &[])];
        assert!(matches!(
            forwarders(&target, &declared),
            Err(ImplError::NoAccessibleConstructor { .. })
        ));
        assert!(forwarders(&target, &[]).is_err());
    }

    #[test]
    fn interfaces_are_exempt() {
        let target = TargetType::new(
            "a.Api",
            TypeShape::Interface,
            Modifiers::PUBLIC | Modifiers::INTERFACE | Modifiers::ABSTRACT,
        );
        assert!(forwarders(&target, &[]).unwrap().is_empty());
    }
}
