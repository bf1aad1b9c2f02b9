//! An [`Emitter`] that writes Kotlin sources and keep rules to disk.
//!
//! Every written file is recorded together with the source files it was
//! derived from, so a build tool can tell which outputs to invalidate.
//! Hierarchy files are aggregating: a change to the defining source
//! invalidates them. Keep-rule files are isolating.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use sealforge_config::OutputConfig;
use sealforge_core::model::{
    DeclarationHandle, GeneratedHierarchy, QualifiedName, RetentionDirective,
};
use sealforge_core::{Diagnostic, Emitter, GenerationError, Severity};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::error::{RenderError, Result};
use crate::keep_rules;
use crate::kotlin::KotlinRenderer;

/// Build dependencies of one written file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputDependencies {
    /// Whether changes anywhere in `sources` must invalidate the output.
    pub aggregating: bool,
    /// Source files the output was derived from.
    pub sources: BTreeSet<PathBuf>,
}

/// Writes generated output below a root directory.
#[derive(Debug)]
pub struct FileEmitter {
    root: PathBuf,
    keep_rules_directory: PathBuf,
    renderer: KotlinRenderer,
    dependencies: BTreeMap<PathBuf, OutputDependencies>,
    diagnostics: Vec<Diagnostic>,
}

impl FileEmitter {
    /// Creates an emitter with default output settings.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_config(root, &OutputConfig::default())
    }

    pub fn with_config(root: impl Into<PathBuf>, config: &OutputConfig) -> Self {
        FileEmitter {
            root: root.into(),
            keep_rules_directory: PathBuf::from(&config.keep_rules_directory),
            renderer: KotlinRenderer::from_config(config),
            dependencies: BTreeMap::new(),
            diagnostics: Vec::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Outputs written so far, keyed by path relative to the root.
    pub fn dependencies(&self) -> &BTreeMap<PathBuf, OutputDependencies> {
        &self.dependencies
    }

    /// Diagnostics reported so far, in report order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Persists the recorded dependencies as pretty-printed JSON.
    pub fn write_dependency_manifest(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(&self.dependencies).map_err(|source| {
            RenderError::Json {
                path: path.to_path_buf(),
                source,
            }
        })?;
        write_file(path, &json)
    }

    /// Writes one output and records its sources.
    ///
    /// A path already written by this emitter is left untouched and reported
    /// as [`RenderError::DuplicateOutput`], so colliding generated names lose
    /// no output silently.
    fn write_output(
        &mut self,
        relative: PathBuf,
        contents: &str,
        origin: &DeclarationHandle,
        aggregating: bool,
    ) -> Result<()> {
        if self.dependencies.contains_key(&relative) {
            warn!(
                event = "output_overwritten",
                path = %relative.display(),
            );
            return Err(RenderError::DuplicateOutput { path: relative });
        }

        let path = self.root.join(&relative);
        write_file(&path, contents)?;

        let sources = origin.source_file().map(Path::to_path_buf).into_iter().collect();
        debug!(
            event = "output_written",
            path = %relative.display(),
            bytes = contents.len(),
            aggregating,
        );
        self.dependencies.insert(
            relative,
            OutputDependencies {
                aggregating,
                sources,
            },
        );
        Ok(())
    }
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| RenderError::io(parent, e))?;
    }
    fs::write(path, contents).map_err(|e| RenderError::io(path, e))
}

impl Emitter for FileEmitter {
    fn emit(
        &mut self,
        hierarchy: &GeneratedHierarchy,
        origin: &DeclarationHandle,
    ) -> std::result::Result<(), GenerationError> {
        let source = self.renderer.render(hierarchy);
        self.write_output(KotlinRenderer::file_path(hierarchy), &source, origin, true)?;
        Ok(())
    }

    fn emit_retention(
        &mut self,
        source: &QualifiedName,
        directives: &[RetentionDirective],
        origin: &DeclarationHandle,
    ) -> std::result::Result<(), GenerationError> {
        let relative = self.keep_rules_directory.join(keep_rules::file_name(source));
        let rules = keep_rules::render(source, directives);
        self.write_output(relative, &rules, origin, false)?;
        Ok(())
    }

    fn report_diagnostic(&mut self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            Severity::Error => error!(event = "diagnostic", "{}", diagnostic),
            Severity::Warning => warn!(event = "diagnostic", "{}", diagnostic),
            Severity::Info => info!(event = "diagnostic", "{}", diagnostic),
        }
        self.diagnostics.push(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sealforge_core::model::{
        DeclarationKind, GeneratedVariant, Modifier, SpecializationBinding, Supertype, TypeName,
        VariantDeclaration,
    };

    fn hierarchy() -> GeneratedHierarchy {
        let name = QualifiedName::new("com.example.IntUIState");
        GeneratedHierarchy {
            variants: vec![GeneratedVariant {
                declaration: VariantDeclaration::object("Loading"),
                supertype: Supertype::Implements(name.clone()),
            }],
            name,
            source: QualifiedName::new("com.example.UIState"),
            kind: DeclarationKind::Interface,
            modifiers: vec![Modifier::Sealed],
            annotations: Vec::new(),
            binding: SpecializationBinding::new(None, TypeName::new("kotlin.Int")),
        }
    }

    #[test]
    fn test_emit_writes_file_and_records_source() {
        let dir = tempfile::tempdir().unwrap();
        let mut emitter = FileEmitter::new(dir.path());
        let origin = DeclarationHandle::file("src/UIState.kt");

        emitter.emit(&hierarchy(), &origin).unwrap();

        let relative = PathBuf::from("com/example/IntUIState.kt");
        let written = fs::read_to_string(dir.path().join(&relative)).unwrap();
        assert!(written.contains("object Loading : IntUIState"));

        let deps = &emitter.dependencies()[&relative];
        assert!(deps.aggregating);
        assert_eq!(
            deps.sources.iter().cloned().collect::<Vec<_>>(),
            vec![PathBuf::from("src/UIState.kt")]
        );
    }

    #[test]
    fn test_detached_origin_records_no_sources() {
        let dir = tempfile::tempdir().unwrap();
        let mut emitter = FileEmitter::new(dir.path());

        emitter
            .emit_retention(
                &QualifiedName::new("com.example.UIState"),
                &[],
                &DeclarationHandle::detached(),
            )
            .unwrap();

        let relative = PathBuf::from("META-INF/proguard/sealforge-com.example.UIState.pro");
        assert!(dir.path().join(&relative).is_file());
        let deps = &emitter.dependencies()[&relative];
        assert!(!deps.aggregating);
        assert!(deps.sources.is_empty());
    }

    #[test]
    fn test_unwritable_root_maps_to_emit_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();

        let mut emitter = FileEmitter::new(&blocker);
        let error = emitter
            .emit(&hierarchy(), &DeclarationHandle::detached())
            .unwrap_err();
        assert!(matches!(error, GenerationError::Emit { .. }));
        assert!(emitter.dependencies().is_empty());
    }

    #[test]
    fn test_second_write_to_same_path_is_refused() {
        let dir = tempfile::tempdir().unwrap();
        let mut emitter = FileEmitter::new(dir.path());
        let origin = DeclarationHandle::file("src/UIState.kt");

        emitter.emit(&hierarchy(), &origin).unwrap();
        let mut other = hierarchy();
        other.binding = SpecializationBinding::new(None, TypeName::new("kotlin.Long"));
        let error = emitter.emit(&other, &origin).unwrap_err();

        assert!(matches!(error, GenerationError::Emit { .. }));
        let written = fs::read_to_string(dir.path().join("com/example/IntUIState.kt")).unwrap();
        assert!(written.contains("`kotlin.Int`"));
        assert_eq!(emitter.dependencies().len(), 1);
    }
}
