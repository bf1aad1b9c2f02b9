//! Error types for sealforge

use thiserror::Error;

use crate::model::{DeclarationKind, QualifiedName};

/// Main error type for generation operations.
///
/// Every variant names the declaration it belongs to so a diagnostic built
/// from it is actionable on its own.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The annotated declaration is not a sealed class or sealed interface.
    #[error(
        "{kind} `{name}` cannot be specialized: only a sealed class or sealed interface is supported"
    )]
    NotClosedHierarchy {
        kind: DeclarationKind,
        name: QualifiedName,
    },

    /// A variant has a shape the synthesizer cannot reproduce.
    #[error("variant `{variant}` of `{declaration}` has an unsupported shape: {reason}")]
    UnsupportedVariantShape {
        declaration: QualifiedName,
        variant: String,
        reason: String,
    },

    /// A placeholder is used inside a type argument instead of as a whole parameter type.
    #[error(
        "parameter `{parameter}` of `{declaration}.{variant}` nests the placeholder inside `{ty}`; only whole parameter types can be specialized"
    )]
    NestedPlaceholderUsage {
        declaration: QualifiedName,
        variant: String,
        parameter: String,
        ty: String,
    },

    /// Two bindings of one declaration produce the same generated name.
    #[error("bindings of `{declaration}` generate `{generated}` more than once: {bindings}")]
    GeneratedNameCollision {
        declaration: QualifiedName,
        generated: QualifiedName,
        bindings: String,
    },

    /// A collaborator failed to persist generated output.
    #[error("failed to emit `{target}`: {source}")]
    Emit {
        target: String,
        #[source]
        source: std::io::Error,
    },

    /// The declaration model could not be obtained from the front end.
    #[error("declaration manifest error: {0}")]
    Manifest(String),
}

impl GenerationError {
    /// Returns the declaration this error is attributed to, if any.
    pub fn declaration(&self) -> Option<&QualifiedName> {
        match self {
            GenerationError::NotClosedHierarchy { name, .. } => Some(name),
            GenerationError::UnsupportedVariantShape { declaration, .. }
            | GenerationError::NestedPlaceholderUsage { declaration, .. }
            | GenerationError::GeneratedNameCollision { declaration, .. } => Some(declaration),
            GenerationError::Emit { .. } | GenerationError::Manifest(_) => None,
        }
    }
}

/// Result type alias for generation operations
pub type Result<T> = std::result::Result<T, GenerationError>;
