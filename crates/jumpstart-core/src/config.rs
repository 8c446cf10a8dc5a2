//! Project layout configuration (`jumpstart.yaml`)
//!
//! Every key is optional. Without a file the defaults describe the stock
//! Jumpstart boilerplate:
//!
//! ```yaml
//! source_dir: src
//! extension: php
//! entry_point: src/plugin.php
//! placeholder_namespace: Jumpstart
//! manifest_file: composer.json
//! ask_author_email: false
//! require:
//!   php: ">=7.4"
//! require_dev:
//!   phpunit/phpunit: "^9.6"
//! ```

use crate::error::ScaffoldError;
use crate::questionnaire::QuestionnaireOptions;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// File looked up in the project root when no explicit config is given
pub const CONFIG_FILE: &str = "jumpstart.yaml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaffoldConfig {
    /// Directory holding the boilerplate sources, relative to the project root
    pub source_dir: PathBuf,

    /// Extension of the files to rewrite (without the dot)
    pub extension: String,

    /// File renamed to `<plugin_slug>.<extension>` after rewriting
    pub entry_point: PathBuf,

    /// Namespace declared by the boilerplate (`namespace Jumpstart;`)
    pub placeholder_namespace: String,

    /// Manifest written to the project root
    pub manifest_file: String,

    /// Ask for the author email as a separate question
    pub ask_author_email: bool,

    /// Runtime dependencies pinned in the manifest
    pub require: BTreeMap<String, String>,

    /// Development dependencies pinned in the manifest
    pub require_dev: BTreeMap<String, String>,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("src"),
            extension: "php".to_string(),
            entry_point: PathBuf::from("src/plugin.php"),
            placeholder_namespace: "Jumpstart".to_string(),
            manifest_file: "composer.json".to_string(),
            ask_author_email: false,
            require: BTreeMap::from([
                ("php".to_string(), ">=7.4".to_string()),
                ("composer/installers".to_string(), "^2.0".to_string()),
            ]),
            require_dev: BTreeMap::from([
                ("phpunit/phpunit".to_string(), "^9.6".to_string()),
                ("squizlabs/php_codesniffer".to_string(), "^3.7".to_string()),
                ("wp-coding-standards/wpcs".to_string(), "^3.0".to_string()),
            ]),
        }
    }
}

impl ScaffoldConfig {
    /// Load `path`, which must exist
    pub fn from_file(path: &Path) -> Result<Self, ScaffoldError> {
        let content = std::fs::read_to_string(path).map_err(|e| ScaffoldError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let config = serde_yaml::from_str(&content).map_err(|e| ScaffoldError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Load `<root>/jumpstart.yaml` if present, defaults otherwise
    pub fn load(root: &Path) -> Result<Self, ScaffoldError> {
        let path = root.join(CONFIG_FILE);
        if path.is_file() {
            Self::from_file(&path)
        } else {
            tracing::debug!(root = %root.display(), "no {} found, using defaults", CONFIG_FILE);
            Ok(Self::default())
        }
    }

    /// Absolute source directory for a project root
    pub fn source_path(&self, root: &Path) -> PathBuf {
        root.join(&self.source_dir)
    }

    pub fn questionnaire_options(&self) -> QuestionnaireOptions {
        QuestionnaireOptions {
            ask_author_email: self.ask_author_email,
        }
    }
}
