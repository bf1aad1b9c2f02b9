//! Summary of a generation pass.

use crate::error::GenerationError;
use crate::model::QualifiedName;

/// What happened to one declaration.
#[derive(Debug)]
pub enum DeclarationStatus {
    Generated {
        /// Hierarchies the emitter accepted, in binding order.
        hierarchies: Vec<QualifiedName>,
        /// Number of keep rules produced.
        directives: usize,
        /// Emits that failed; each one was reported as a diagnostic.
        emit_failures: usize,
    },
    Skipped,
    Failed(GenerationError),
}

#[derive(Debug)]
pub struct ReportEntry {
    pub declaration: QualifiedName,
    pub status: DeclarationStatus,
}

/// Per-declaration results of [`Generator::run`](super::Generator::run), in input order.
#[derive(Debug, Default)]
pub struct GenerationReport {
    pub entries: Vec<ReportEntry>,
}

impl GenerationReport {
    pub(super) fn push(&mut self, declaration: QualifiedName, status: DeclarationStatus) {
        self.entries.push(ReportEntry {
            declaration,
            status,
        });
    }

    /// Finds the entry for a declaration.
    pub fn entry(&self, declaration: &str) -> Option<&ReportEntry> {
        self.entries
            .iter()
            .find(|entry| entry.declaration.as_str() == declaration)
    }

    pub fn generated_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e.status, DeclarationStatus::Generated { .. }))
            .count()
    }

    pub fn skipped_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e.status, DeclarationStatus::Skipped))
            .count()
    }

    pub fn failed_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e.status, DeclarationStatus::Failed(_)))
            .count()
    }

    /// Total number of hierarchies handed to the emitter successfully.
    pub fn hierarchy_count(&self) -> usize {
        self.entries
            .iter()
            .map(|e| match &e.status {
                DeclarationStatus::Generated { hierarchies, .. } => hierarchies.len(),
                _ => 0,
            })
            .sum()
    }

    /// Returns true if any declaration failed or any emit failed.
    pub fn has_errors(&self) -> bool {
        self.entries.iter().any(|e| match &e.status {
            DeclarationStatus::Generated { emit_failures, .. } => *emit_failures > 0,
            DeclarationStatus::Skipped => false,
            DeclarationStatus::Failed(_) => true,
        })
    }

    /// Iterates over the errors of failed declarations.
    pub fn errors(&self) -> impl Iterator<Item = (&QualifiedName, &GenerationError)> {
        self.entries.iter().filter_map(|e| match &e.status {
            DeclarationStatus::Failed(error) => Some((&e.declaration, error)),
            _ => None,
        })
    }
}
