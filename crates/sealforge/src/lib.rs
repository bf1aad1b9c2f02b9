//! Sealforge - specialized sealed hierarchies from one generic declaration
//!
//! Write the hierarchy once with [`Extensive`] standing in for the payload
//! type and list the concrete types you need. Sealforge generates one
//! hierarchy per type.
//!
//! # Example
//!
//! ```rust
//! use sealforge::prelude::*;
//!
//! #[extensive_sealed(model(ty = String), model(ty = u32, name = "count"))]
//! #[derive(Debug, Clone, PartialEq)]
//! pub enum UiState {
//!     Success(Extensive),
//!     Loading,
//!     Error { message: String },
//! }
//!
//! let state = StringUiState::Success("posters".to_string());
//! assert_eq!(state, StringUiState::Success("posters".into()));
//!
//! let count = CountUiState::Success(3);
//! assert!(matches!(count, CountUiState::Success(3)));
//! ```

// User-facing macro
pub use sealforge_macros::extensive_sealed;

// Engine
pub use sealforge_core::model;
pub use sealforge_core::{
    CollectingEmitter, DeclarationOutcome, DeclarationSource, DeclarationStatus, Diagnostic,
    Emitter, Generation, GenerationError, GenerationReport, Generator, Severity,
};

// Configuration
pub use sealforge_config::{
    ConfigError, GeneratorConfig, NameCollisionPolicy, NestedPlaceholderPolicy, OutputConfig,
    WorkerCount,
};

// File back end
pub use sealforge_render::{FileEmitter, JsonManifest, KotlinRenderer, RenderError};

#[cfg(feature = "console")]
pub mod console;

mod generation;
pub use generation::{
    load_config, run_generation, run_generation_with, CONFIG_FILE, DEPENDENCY_MANIFEST,
};

/// Placeholder for the payload type of a generic hierarchy.
///
/// Only meaningful inside an enum annotated with
/// [`#[extensive_sealed]`](extensive_sealed): every field of this type is
/// replaced by the model type in the generated enums.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Extensive;

pub mod prelude {
    pub use super::extensive_sealed;
    pub use super::Extensive;
    pub use super::{GenerationReport, Generator, GeneratorConfig};
}
