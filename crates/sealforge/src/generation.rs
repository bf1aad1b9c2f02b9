//! File-to-file generation entry point that hides all internal wiring.

use std::io;
use std::path::Path;

use sealforge_config::{ConfigError, GeneratorConfig};
use sealforge_core::{GenerationReport, Generator};
use sealforge_render::{FileEmitter, JsonManifest, RenderError};
use tracing::{info, warn};

/// Configuration file read by [`run_generation`], relative to the working directory.
pub const CONFIG_FILE: &str = "sealforge.toml";

/// File name of the build-dependency record written into the output directory.
pub const DEPENDENCY_MANIFEST: &str = "sealforge-dependencies.json";

/// Generates Kotlin sources and keep rules for every declaration in a JSON manifest.
///
/// Settings come from `sealforge.toml` when present, defaults otherwise. A
/// config file that exists but does not load is logged and ignored.
pub fn run_generation(
    manifest: impl AsRef<Path>,
    out_dir: impl AsRef<Path>,
) -> Result<GenerationReport, RenderError> {
    let config = load_config(CONFIG_FILE).unwrap_or_else(|error| {
        warn!(
            event = "config_invalid",
            path = CONFIG_FILE,
            error = %error,
        );
        GeneratorConfig::default()
    });
    run_generation_with(&config, manifest, out_dir)
}

/// Loads `path`, treating a missing file as the default configuration.
pub fn load_config(path: impl AsRef<Path>) -> Result<GeneratorConfig, ConfigError> {
    match GeneratorConfig::load(path) {
        Err(ConfigError::Io(error)) if error.kind() == io::ErrorKind::NotFound => {
            Ok(GeneratorConfig::default())
        }
        other => other,
    }
}

/// Like [`run_generation`], with explicit settings.
///
/// Declaration failures do not make this fail; they are listed in the
/// returned report. Only an unreadable manifest or an unwritable dependency
/// record is an error.
pub fn run_generation_with(
    config: &GeneratorConfig,
    manifest: impl AsRef<Path>,
    out_dir: impl AsRef<Path>,
) -> Result<GenerationReport, RenderError> {
    let manifest = manifest.as_ref();
    let out_dir = out_dir.as_ref();

    let declarations = JsonManifest::from_file(manifest)?.declarations;

    let mut emitter = FileEmitter::with_config(out_dir, &config.output);
    let report = Generator::new(config.clone()).run(&declarations, &mut emitter);
    emitter.write_dependency_manifest(out_dir.join(DEPENDENCY_MANIFEST))?;

    info!(
        event = "generation_written",
        manifest = %manifest.display(),
        out_dir = %out_dir.display(),
        files = emitter.dependencies().len(),
        diagnostics = emitter.diagnostics().len(),
    );
    Ok(report)
}
