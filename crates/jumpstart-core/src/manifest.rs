//! Generated `composer.json` for the new plugin

use crate::config::ScaffoldConfig;
use crate::error::ScaffoldError;
use crate::metadata::PluginMetadata;
use crate::questionnaire::suggest::NAMESPACE_DELIMITER;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Composer package type of a WordPress plugin
pub const PACKAGE_TYPE: &str = "wordpress-plugin";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Manifest {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
    pub license: String,
    pub authors: Vec<Author>,
    pub require: BTreeMap<String, String>,
    #[serde(rename = "require-dev")]
    pub require_dev: BTreeMap<String, String>,
    pub autoload: Autoload,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Autoload {
    #[serde(rename = "psr-4")]
    pub psr4: BTreeMap<String, String>,
}

impl Manifest {
    /// Pretty-printed JSON, newline-terminated
    pub fn to_json(&self) -> Result<String, ScaffoldError> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }
}

/// Map the metadata onto the manifest structure
pub fn build(metadata: &PluginMetadata, config: &ScaffoldConfig) -> Manifest {
    let source_dir = config
        .source_dir
        .to_string_lossy()
        .replace('\\', "/")
        .trim_end_matches('/')
        .to_string();

    Manifest {
        name: metadata.package.clone(),
        description: metadata.description.clone(),
        kind: PACKAGE_TYPE.to_string(),
        homepage: non_empty(&metadata.url),
        license: metadata.license.clone(),
        authors: author(metadata).into_iter().collect(),
        require: config.require.clone(),
        require_dev: config.require_dev.clone(),
        autoload: Autoload {
            psr4: BTreeMap::from([(
                format!("{}{}", metadata.namespace, NAMESPACE_DELIMITER),
                format!("{}/", source_dir),
            )]),
        },
    }
}

/// Write the manifest to `<root>/<config.manifest_file>`
pub fn write_manifest(
    root: &Path,
    manifest: &Manifest,
    config: &ScaffoldConfig,
) -> Result<PathBuf, ScaffoldError> {
    let path = root.join(&config.manifest_file);
    let json = manifest.to_json()?;
    std::fs::write(&path, json).map_err(|source| ScaffoldError::Io {
        path: path.clone(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "wrote manifest");
    Ok(path)
}

/// Author block; the email comes from the dedicated answer when it was asked,
/// otherwise from a trailing `<email>` in the author answer.
fn author(metadata: &PluginMetadata) -> Option<Author> {
    let (name, embedded_email) = split_author(&metadata.author);
    let email = metadata
        .author_email
        .as_deref()
        .and_then(non_empty)
        .or(embedded_email);
    let homepage = non_empty(&metadata.author_url);

    if name.is_empty() && email.is_none() && homepage.is_none() {
        return None;
    }
    Some(Author {
        name,
        email,
        homepage,
    })
}

/// `Jane Doe <jane@acme.test>` -> (`Jane Doe`, `jane@acme.test`)
fn split_author(author: &str) -> (String, Option<String>) {
    let author = author.trim();
    if let Some(rest) = author.strip_suffix('>') {
        if let Some((name, email)) = rest.rsplit_once('<') {
            return (name.trim().to_string(), non_empty(email.trim()));
        }
    }
    (author.to_string(), None)
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
