//! Sealforge Render - file back end for the specialization engine
//!
//! - [`KotlinRenderer`]: Kotlin source for a generated hierarchy
//! - [`keep_rules`]: ProGuard/R8 rules that keep generated variants reflectable
//! - [`FileEmitter`]: an [`Emitter`](sealforge_core::Emitter) writing both to disk
//! - [`JsonManifest`]: a [`DeclarationSource`](sealforge_core::DeclarationSource)
//!   reading declarations from JSON

pub mod error;
pub mod file_emitter;
pub mod keep_rules;
pub mod kotlin;
pub mod manifest;

pub use error::RenderError;
pub use file_emitter::{FileEmitter, OutputDependencies};
pub use kotlin::{KotlinRenderer, GENERATED_HEADER};
pub use manifest::JsonManifest;
