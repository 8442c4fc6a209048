//! Type metadata port: the read-only reflection facility.

use crate::error::ImplError;
use crate::model::{ConstructorDecl, MethodDecl, TargetType};

/// Answers structural questions about types.
///
/// This stands in for a runtime reflection facility; the synthesizer only
/// ever reads through it.
pub trait TypeMetadata: Send + Sync {
    /// Resolves a type by binary name. Primitive keywords and `[]`-suffixed
    /// names resolve to primitive and array shapes.
    ///
    /// # Errors
    ///
    /// Returns [`ImplError::Resolution`] if the type is unknown.
    fn resolve(&self, name: &str) -> Result<TargetType, ImplError>;

    /// Public methods of the type, including those inherited from every
    /// superclass and superinterface.
    ///
    /// # Errors
    ///
    /// Returns [`ImplError::Resolution`] if an ancestor is unknown.
    fn members(&self, target: &TargetType) -> Result<Vec<MethodDecl>, ImplError>;

    /// Methods declared directly on the type, of any visibility.
    ///
    /// # Errors
    ///
    /// Returns [`ImplError::Resolution`] if the type is unknown.
    fn declared_members(&self, target: &TargetType) -> Result<Vec<MethodDecl>, ImplError>;

    /// The direct superclass, or `None` for interfaces and the root class.
    ///
    /// # Errors
    ///
    /// Returns [`ImplError::Resolution`] if the superclass is unknown.
    fn superclass_of(&self, target: &TargetType) -> Result<Option<TargetType>, ImplError>;

    /// Constructors declared on the type; empty for interfaces.
    ///
    /// # Errors
    ///
    /// Returns [`ImplError::Resolution`] if the type is unknown.
    fn constructors(&self, target: &TargetType) -> Result<Vec<ConstructorDecl>, ImplError>;
}
