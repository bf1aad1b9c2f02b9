//! Error types for the file back end.

use std::io;
use std::path::PathBuf;

use sealforge_core::GenerationError;
use thiserror::Error;

/// Failures of the renderers, the emitter and the manifest reader.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("JSON error in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid manifest: {0}")]
    Manifest(#[source] serde_json::Error),

    #[error("failed to serialize manifest: {0}")]
    Serialize(#[source] serde_json::Error),

    /// A second write to a path already produced in the same pass.
    #[error("{path} was already written in this pass; refusing to overwrite it")]
    DuplicateOutput { path: PathBuf },
}

impl RenderError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        RenderError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<RenderError> for GenerationError {
    fn from(error: RenderError) -> Self {
        match error {
            RenderError::Io { path, source } => GenerationError::Emit {
                target: path.display().to_string(),
                source,
            },
            RenderError::DuplicateOutput { path } => GenerationError::Emit {
                target: path.display().to_string(),
                source: io::Error::new(
                    io::ErrorKind::AlreadyExists,
                    "output already written in this pass",
                ),
            },
            other => GenerationError::Manifest(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, RenderError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn json_error() -> serde_json::Error {
        serde_json::from_str::<u32>("\"text\"").unwrap_err()
    }

    #[test]
    fn test_serialization_is_not_reported_as_invalid_manifest() {
        let message = RenderError::Serialize(json_error()).to_string();
        assert!(message.starts_with("failed to serialize manifest"), "{message}");
        assert!(!message.contains("invalid manifest"));
    }

    #[test]
    fn test_duplicate_output_becomes_emit_error() {
        let error: GenerationError = RenderError::DuplicateOutput {
            path: PathBuf::from("com/example/StringUIState.kt"),
        }
        .into();
        match error {
            GenerationError::Emit { target, source } => {
                assert_eq!(target, "com/example/StringUIState.kt");
                assert_eq!(source.kind(), io::ErrorKind::AlreadyExists);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
