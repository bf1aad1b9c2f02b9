//! Generation pass over every discovered hierarchy declaration.
//!
//! Logging levels:
//! - **INFO**: Pass start/end with declaration counts
//! - **DEBUG**: Per-declaration processing and skips
//! - **WARN**: Diagnostics and tolerated name collisions

mod report;

use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use sealforge_config::{GeneratorConfig, NameCollisionPolicy, WorkerCount};
use tracing::{debug, info, warn};

use crate::binding::extract_bindings;
use crate::emit::{Diagnostic, Emitter};
use crate::error::GenerationError;
use crate::model::{
    GeneratedHierarchy, HierarchyDeclaration, RetentionDirective, SpecializationBinding,
};
use crate::naming::{find_name_collisions, generated_name};
use crate::retention::retention_directives;
use crate::substitute::specialize_variants;
use crate::synthesize::synthesize;
use crate::validate::validate_closed;

pub use report::{DeclarationStatus, GenerationReport, ReportEntry};

/// Everything generated for one source declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    /// One hierarchy per binding, in binding order.
    pub hierarchies: Vec<GeneratedHierarchy>,
    /// Keep rules in binding order, then variant order.
    pub directives: Vec<RetentionDirective>,
}

/// Result of processing one declaration, before anything is emitted.
#[derive(Debug)]
pub enum DeclarationOutcome {
    Generated(Generation),
    /// The declaration requested no bindings.
    Skipped,
    Failed(GenerationError),
}

/// Turns generic sealed hierarchies into specialized ones.
///
/// # Example
///
/// ```
/// use sealforge_core::{CollectingEmitter, Generator};
/// use sealforge_core::model::{
///     ConstructorParameter, HierarchyDeclaration, RawBinding, TypeName, TypeRef,
///     VariantDeclaration,
/// };
///
/// let ui_state = HierarchyDeclaration::sealed_interface("com.example.UIState")
///     .with_variant(
///         VariantDeclaration::class("Success")
///             .with_parameter(ConstructorParameter::new("payload", TypeRef::Placeholder)),
///     )
///     .with_variant(VariantDeclaration::object("Loading"))
///     .with_binding(RawBinding::unnamed(TypeName::new("kotlin.String")));
///
/// let mut emitter = CollectingEmitter::new();
/// let report = Generator::default().run(&[ui_state], &mut emitter);
///
/// assert_eq!(report.hierarchy_count(), 1);
/// assert_eq!(emitter.hierarchies[0].name.as_str(), "com.example.StringUIState");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(config: GeneratorConfig) -> Self {
        Generator { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Processes one declaration without emitting anything.
    ///
    /// Pure: the same declaration always yields the same outcome.
    pub fn process(&self, declaration: &HierarchyDeclaration) -> DeclarationOutcome {
        match self.try_process(declaration) {
            Ok(Some(generation)) => DeclarationOutcome::Generated(generation),
            Ok(None) => DeclarationOutcome::Skipped,
            Err(error) => DeclarationOutcome::Failed(error),
        }
    }

    fn try_process(
        &self,
        declaration: &HierarchyDeclaration,
    ) -> Result<Option<Generation>, GenerationError> {
        validate_closed(declaration)?;

        let bindings = extract_bindings(declaration);
        if bindings.is_empty() {
            return Ok(None);
        }
        self.check_name_collisions(declaration, &bindings)?;

        let mut hierarchies = Vec::with_capacity(bindings.len());
        let mut directives = Vec::new();
        for binding in &bindings {
            let name = generated_name(declaration, binding);
            let variants =
                specialize_variants(declaration, binding, self.config.nested_placeholders)?;
            let hierarchy = synthesize(
                declaration,
                binding,
                name,
                variants,
                &self.config.trigger_annotation,
            );
            directives.extend(retention_directives(&hierarchy));
            hierarchies.push(hierarchy);
        }

        Ok(Some(Generation {
            hierarchies,
            directives,
        }))
    }

    fn check_name_collisions(
        &self,
        declaration: &HierarchyDeclaration,
        bindings: &[SpecializationBinding],
    ) -> Result<(), GenerationError> {
        let collisions = find_name_collisions(declaration, bindings);
        for (generated, group) in collisions {
            let listed = group
                .iter()
                .map(|binding| format!("({binding})"))
                .collect::<Vec<_>>()
                .join(", ");
            match self.config.name_collisions {
                NameCollisionPolicy::Reject => {
                    return Err(GenerationError::GeneratedNameCollision {
                        declaration: declaration.name.clone(),
                        generated,
                        bindings: listed,
                    });
                }
                NameCollisionPolicy::Allow => {
                    warn!(
                        event = "name_collision",
                        declaration = %declaration.name,
                        generated = %generated,
                        bindings = %listed,
                    );
                }
            }
        }
        Ok(())
    }

    /// Runs a full pass and hands the results to `emitter`.
    ///
    /// Declarations are processed according to the configured worker count and
    /// emitted afterwards in input order, so the emitted output never depends
    /// on scheduling. A failing declaration, or a failing emit, is reported as
    /// a diagnostic and the pass continues.
    pub fn run<E: Emitter>(
        &self,
        declarations: &[HierarchyDeclaration],
        emitter: &mut E,
    ) -> GenerationReport {
        info!(
            event = "generate_start",
            declaration_count = declarations.len(),
            workers = ?self.config.worker_count,
        );

        let outcomes = self.process_all(declarations);

        let mut report = GenerationReport::default();
        for (declaration, outcome) in declarations.iter().zip(outcomes) {
            let status = emit_outcome(declaration, outcome, emitter);
            report.push(declaration.name.clone(), status);
        }

        info!(
            event = "generate_end",
            generated = report.generated_count(),
            hierarchies = report.hierarchy_count(),
            skipped = report.skipped_count(),
            failed = report.failed_count(),
        );
        report
    }

    fn process_all(&self, declarations: &[HierarchyDeclaration]) -> Vec<DeclarationOutcome> {
        if !self.config.worker_count.is_parallel() {
            return self.process_sequential(declarations);
        }
        match self.config.worker_count {
            WorkerCount::Count(threads) => {
                match ThreadPoolBuilder::new().num_threads(threads).build() {
                    Ok(pool) => pool.install(|| self.process_parallel(declarations)),
                    Err(error) => {
                        warn!(
                            event = "worker_pool_unavailable",
                            threads,
                            error = %error,
                        );
                        self.process_sequential(declarations)
                    }
                }
            }
            _ => self.process_parallel(declarations),
        }
    }

    fn process_sequential(&self, declarations: &[HierarchyDeclaration]) -> Vec<DeclarationOutcome> {
        declarations.iter().map(|d| self.process(d)).collect()
    }

    fn process_parallel(&self, declarations: &[HierarchyDeclaration]) -> Vec<DeclarationOutcome> {
        declarations.par_iter().map(|d| self.process(d)).collect()
    }
}

fn emit_outcome<E: Emitter>(
    declaration: &HierarchyDeclaration,
    outcome: DeclarationOutcome,
    emitter: &mut E,
) -> DeclarationStatus {
    match outcome {
        DeclarationOutcome::Skipped => {
            debug!(
                event = "declaration_skipped",
                declaration = %declaration.name,
            );
            DeclarationStatus::Skipped
        }
        DeclarationOutcome::Failed(error) => {
            let diagnostic = Diagnostic::from_error(&error, declaration);
            warn!(event = "declaration_failed", "{}", diagnostic);
            emitter.report_diagnostic(diagnostic);
            DeclarationStatus::Failed(error)
        }
        DeclarationOutcome::Generated(generation) => {
            debug!(
                event = "declaration_processed",
                declaration = %declaration.name,
                bindings = generation.hierarchies.len(),
            );

            let mut emitted = Vec::with_capacity(generation.hierarchies.len());
            let mut emit_failures = 0;
            for hierarchy in &generation.hierarchies {
                match emitter.emit(hierarchy, &declaration.origin) {
                    Ok(()) => emitted.push(hierarchy.name.clone()),
                    Err(error) => {
                        emit_failures += 1;
                        report_emit_failure(declaration, &error, emitter);
                    }
                }
            }
            if let Err(error) = emitter.emit_retention(
                &declaration.name,
                &generation.directives,
                &declaration.origin,
            ) {
                emit_failures += 1;
                report_emit_failure(declaration, &error, emitter);
            }

            DeclarationStatus::Generated {
                hierarchies: emitted,
                directives: generation.directives.len(),
                emit_failures,
            }
        }
    }
}

fn report_emit_failure<E: Emitter>(
    declaration: &HierarchyDeclaration,
    error: &GenerationError,
    emitter: &mut E,
) {
    let diagnostic = Diagnostic::from_error(error, declaration);
    warn!(event = "emit_failed", "{}", diagnostic);
    emitter.report_diagnostic(diagnostic);
}
