//! Configuration system for sealforge.
//!
//! Load generator configuration from TOML or YAML files to control how
//! placeholders, name collisions, parallelism and output are handled without
//! code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use sealforge_config::{GeneratorConfig, NestedPlaceholderPolicy, WorkerCount};
//!
//! let config = GeneratorConfig::from_toml_str(r#"
//!     trigger_annotation = "ExtensiveSealed"
//!     nested_placeholders = "preserve"
//!     worker_count = { count = 4 }
//!
//!     [output]
//!     keep_rules_directory = "proguard"
//! "#).unwrap();
//!
//! assert_eq!(config.nested_placeholders, NestedPlaceholderPolicy::Preserve);
//! assert_eq!(config.worker_count, WorkerCount::Count(4));
//! assert_eq!(config.output.keep_rules_directory, "proguard");
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use sealforge_config::GeneratorConfig;
//!
//! let config = GeneratorConfig::load("sealforge.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Annotation that marks a hierarchy for specialization unless overridden.
pub const DEFAULT_TRIGGER_ANNOTATION: &str = "ExtensiveSealed";

/// Directory (relative to the output root) that receives keep-rule files.
pub const DEFAULT_KEEP_RULES_DIRECTORY: &str = "META-INF/proguard";

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main generator configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct GeneratorConfig {
    /// Name of the annotation that requests specialization.
    ///
    /// Matched against both the simple and the qualified annotation name, and
    /// never copied onto generated hierarchies.
    #[serde(default = "default_trigger_annotation")]
    pub trigger_annotation: String,

    /// What to do with a placeholder nested inside a type argument.
    #[serde(default)]
    pub nested_placeholders: NestedPlaceholderPolicy,

    /// What to do when two bindings resolve to the same generated name.
    #[serde(default)]
    pub name_collisions: NameCollisionPolicy,

    /// Number of worker threads used to process declarations.
    #[serde(default)]
    pub worker_count: WorkerCount,

    /// Output rendering configuration.
    #[serde(default)]
    pub output: OutputConfig,
}

fn default_trigger_annotation() -> String {
    DEFAULT_TRIGGER_ANNOTATION.to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            trigger_annotation: default_trigger_annotation(),
            nested_placeholders: NestedPlaceholderPolicy::default(),
            name_collisions: NameCollisionPolicy::default(),
            worker_count: WorkerCount::default(),
            output: OutputConfig::default(),
        }
    }
}

impl GeneratorConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or
    /// describes an invalid configuration.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks values that deserialize fine but cannot drive a generation pass.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trigger_annotation.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "trigger_annotation must not be empty".to_string(),
            ));
        }
        if self.worker_count == WorkerCount::Count(0) {
            return Err(ConfigError::Invalid(
                "worker_count must be at least 1".to_string(),
            ));
        }
        if self.output.indent_width == 0 {
            return Err(ConfigError::Invalid(
                "output.indent_width must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Sets the trigger annotation name.
    pub fn with_trigger_annotation(mut self, name: impl Into<String>) -> Self {
        self.trigger_annotation = name.into();
        self
    }

    /// Sets the nested placeholder policy.
    pub fn with_nested_placeholders(mut self, policy: NestedPlaceholderPolicy) -> Self {
        self.nested_placeholders = policy;
        self
    }

    /// Sets the name collision policy.
    pub fn with_name_collisions(mut self, policy: NameCollisionPolicy) -> Self {
        self.name_collisions = policy;
        self
    }

    /// Sets the worker count.
    pub fn with_worker_count(mut self, count: WorkerCount) -> Self {
        self.worker_count = count;
        self
    }

    /// Replaces the output configuration.
    pub fn with_output(mut self, output: OutputConfig) -> Self {
        self.output = output;
        self
    }
}

/// Handling of a placeholder that appears inside another type's arguments,
/// e.g. `List<Extensive>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NestedPlaceholderPolicy {
    /// Report the usage and skip the declaration.
    #[default]
    Reject,

    /// Leave the nested placeholder untouched.
    Preserve,
}

/// Handling of bindings that resolve to the same generated name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NameCollisionPolicy {
    /// Report the collision and skip the declaration.
    #[default]
    Reject,

    /// Generate every binding anyway and let the back end report the clash.
    ///
    /// File output refuses the second write to a path; Rust enums collide at
    /// compile time.
    Allow,
}

/// Worker thread configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkerCount {
    /// Use the global rayon pool.
    #[default]
    Auto,

    /// Process declarations on the calling thread.
    None,

    /// Dedicated pool with a specific number of threads.
    Count(usize),
}

impl WorkerCount {
    /// Returns true if declarations may be processed concurrently.
    pub fn is_parallel(&self) -> bool {
        !matches!(self, WorkerCount::None | WorkerCount::Count(1))
    }
}

/// Output rendering configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct OutputConfig {
    /// Directory for keep-rule files, relative to the output root.
    #[serde(default = "default_keep_rules_directory")]
    pub keep_rules_directory: String,

    /// Spaces per indentation level in rendered sources.
    #[serde(default = "default_indent_width")]
    pub indent_width: usize,

    /// Whether rendered sources start with a "generated, do not modify" header.
    #[serde(default = "default_file_header")]
    pub file_header: bool,
}

fn default_keep_rules_directory() -> String {
    DEFAULT_KEEP_RULES_DIRECTORY.to_string()
}

fn default_indent_width() -> usize {
    4
}

fn default_file_header() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            keep_rules_directory: default_keep_rules_directory(),
            indent_width: default_indent_width(),
            file_header: default_file_header(),
        }
    }
}
