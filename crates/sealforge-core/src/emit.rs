//! Interfaces to the front end and to the rendering back end.
//!
//! The core never touches files. A [`DeclarationSource`] supplies resolved
//! declarations and an [`Emitter`] persists whatever the generator produces.

use std::fmt;

use crate::error::GenerationError;
use crate::model::{
    DeclarationHandle, DeclarationKind, GeneratedHierarchy, HierarchyDeclaration, QualifiedName,
    RetentionDirective,
};

/// Diagnostic severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        })
    }
}

/// A message attributed to one source declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub declaration: QualifiedName,
    pub kind: DeclarationKind,
}

impl Diagnostic {
    pub fn new(
        severity: Severity,
        message: impl Into<String>,
        declaration: &HierarchyDeclaration,
    ) -> Self {
        Diagnostic {
            severity,
            message: message.into(),
            declaration: declaration.name.clone(),
            kind: declaration.kind,
        }
    }

    /// Builds an error diagnostic from a generation error.
    pub fn from_error(error: &GenerationError, declaration: &HierarchyDeclaration) -> Self {
        Self::new(Severity::Error, error.to_string(), declaration)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} (in {} `{}`)",
            self.severity, self.message, self.kind, self.declaration
        )
    }
}

/// Front-end capability: enumerate every hierarchy declaration to process.
pub trait DeclarationSource {
    /// Returns resolved declarations, bindings included, in front-end order.
    fn list_hierarchy_declarations(&self) -> Result<Vec<HierarchyDeclaration>, GenerationError>;
}

impl DeclarationSource for Vec<HierarchyDeclaration> {
    fn list_hierarchy_declarations(&self) -> Result<Vec<HierarchyDeclaration>, GenerationError> {
        Ok(self.clone())
    }
}

/// Back-end capability: persist generated output and surface diagnostics.
pub trait Emitter {
    /// Persists one generated hierarchy.
    ///
    /// `origin` identifies the defining source of the declaration the hierarchy
    /// was specialized from; only changes to that source should invalidate the
    /// output.
    fn emit(
        &mut self,
        hierarchy: &GeneratedHierarchy,
        origin: &DeclarationHandle,
    ) -> Result<(), GenerationError>;

    /// Persists the keep rules of every binding of one source declaration.
    fn emit_retention(
        &mut self,
        source: &QualifiedName,
        directives: &[RetentionDirective],
        origin: &DeclarationHandle,
    ) -> Result<(), GenerationError>;

    /// Surfaces a diagnostic to the user.
    fn report_diagnostic(&mut self, diagnostic: Diagnostic);
}

/// An emitter that keeps everything in memory.
#[derive(Debug, Default)]
pub struct CollectingEmitter {
    pub hierarchies: Vec<GeneratedHierarchy>,
    pub retention: Vec<(QualifiedName, Vec<RetentionDirective>)>,
    pub diagnostics: Vec<Diagnostic>,
}

impl CollectingEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the diagnostics with error severity.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
    }

    /// Returns all emitted keep rules in emission order.
    pub fn all_directives(&self) -> impl Iterator<Item = &RetentionDirective> {
        self.retention.iter().flat_map(|(_, directives)| directives)
    }
}

impl Emitter for CollectingEmitter {
    fn emit(
        &mut self,
        hierarchy: &GeneratedHierarchy,
        _origin: &DeclarationHandle,
    ) -> Result<(), GenerationError> {
        self.hierarchies.push(hierarchy.clone());
        Ok(())
    }

    fn emit_retention(
        &mut self,
        source: &QualifiedName,
        directives: &[RetentionDirective],
        _origin: &DeclarationHandle,
    ) -> Result<(), GenerationError> {
        self.retention.push((source.clone(), directives.to_vec()));
        Ok(())
    }

    fn report_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}
