//! Sealforge Core - specialization engine for generic sealed hierarchies
//!
//! This crate turns a sealed hierarchy whose variants mention a placeholder
//! type into one concrete hierarchy per requested binding:
//! - Declaration model shared by front ends and back ends
//! - Validation of the annotated declaration
//! - Binding extraction, naming, placeholder substitution and synthesis
//! - Keep rules for reflection-based tooling
//! - The [`Generator`] pass that drives all of the above
//!
//! Front ends supply declarations through [`DeclarationSource`]; back ends
//! receive the results through [`Emitter`].

pub mod binding;
pub mod emit;
pub mod error;
pub mod generator;
pub mod model;
pub mod naming;
pub mod retention;
pub mod substitute;
pub mod synthesize;
pub mod validate;

pub use emit::{CollectingEmitter, DeclarationSource, Diagnostic, Emitter, Severity};
pub use error::{GenerationError, Result};
pub use generator::{
    DeclarationOutcome, DeclarationStatus, Generation, GenerationReport, Generator, ReportEntry,
};
pub use sealforge_config::{
    GeneratorConfig, NameCollisionPolicy, NestedPlaceholderPolicy, WorkerCount,
};
