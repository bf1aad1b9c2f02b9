//! JSON declaration manifests.
//!
//! A manifest is what a front end hands over when it cannot call the
//! generator in-process: every annotated hierarchy, already resolved.
//!
//! ```json
//! {
//!   "declarations": [
//!     {
//!       "name": "com.example.UIState",
//!       "kind": "interface",
//!       "modifiers": ["sealed"],
//!       "variants": [
//!         {
//!           "name": "Success",
//!           "kind": "class",
//!           "parameters": [{ "name": "data", "ty": "placeholder" }]
//!         },
//!         { "name": "Loading", "kind": "object" }
//!       ],
//!       "configuration": [{ "ty": { "path": "kotlin.String" } }],
//!       "origin": "src/main/kotlin/com/example/UIState.kt"
//!     }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use sealforge_core::model::HierarchyDeclaration;
use sealforge_core::{DeclarationSource, GenerationError};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{RenderError, Result};

/// Declarations read from a JSON manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JsonManifest {
    #[serde(default)]
    pub declarations: Vec<HierarchyDeclaration>,
}

impl JsonManifest {
    pub fn new(declarations: Vec<HierarchyDeclaration>) -> Self {
        JsonManifest { declarations }
    }

    /// Reads a manifest file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| RenderError::io(path, e))?;
        let manifest: JsonManifest =
            serde_json::from_str(&contents).map_err(|source| RenderError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        debug!(
            event = "manifest_loaded",
            path = %path.display(),
            declarations = manifest.declarations.len(),
        );
        Ok(manifest)
    }

    /// Parses a manifest from a JSON string.
    pub fn from_json_str(s: &str) -> Result<Self> {
        serde_json::from_str(s).map_err(RenderError::Manifest)
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(RenderError::Serialize)
    }
}

impl DeclarationSource for JsonManifest {
    fn list_hierarchy_declarations(
        &self,
    ) -> std::result::Result<Vec<HierarchyDeclaration>, GenerationError> {
        Ok(self.declarations.clone())
    }
}
