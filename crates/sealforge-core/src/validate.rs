//! Closedness gate run before any variant is read.

use crate::error::GenerationError;
use crate::model::{DeclarationKind, HierarchyDeclaration, Modifier};

/// Checks that `declaration` is a sealed class or sealed interface.
///
/// # Errors
///
/// Returns [`GenerationError::NotClosedHierarchy`] naming the declaration's
/// kind otherwise.
pub fn validate_closed(declaration: &HierarchyDeclaration) -> Result<(), GenerationError> {
    let closable = matches!(
        declaration.kind,
        DeclarationKind::Class | DeclarationKind::Interface
    );
    if closable && declaration.has_modifier(&Modifier::Sealed) {
        Ok(())
    } else {
        Err(GenerationError::NotClosedHierarchy {
            kind: declaration.kind,
            name: declaration.name.clone(),
        })
    }
}
