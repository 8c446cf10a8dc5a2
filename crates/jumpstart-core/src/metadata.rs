//! The plugin metadata record collected by the questionnaire

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one question / one metadata field
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Package,
    Namespace,
    PluginName,
    PluginSlug,
    Version,
    Description,
    Url,
    Author,
    AuthorEmail,
    AuthorUrl,
    License,
}

impl Field {
    /// Every field, in questionnaire order
    pub const ALL: [Field; 11] = [
        Field::Package,
        Field::Namespace,
        Field::PluginName,
        Field::PluginSlug,
        Field::Version,
        Field::Description,
        Field::Url,
        Field::Author,
        Field::AuthorEmail,
        Field::AuthorUrl,
        Field::License,
    ];

    /// Key used in `{{key}}` tokens and answer files
    pub fn key(&self) -> &'static str {
        match self {
            Field::Package => "package",
            Field::Namespace => "namespace",
            Field::PluginName => "plugin_name",
            Field::PluginSlug => "plugin_slug",
            Field::Version => "version",
            Field::Description => "description",
            Field::Url => "url",
            Field::Author => "author",
            Field::AuthorEmail => "author_email",
            Field::AuthorUrl => "author_url",
            Field::License => "license",
        }
    }

    /// Question text shown to the user
    pub fn label(&self) -> &'static str {
        match self {
            Field::Package => "Package (<vendor>/<name>)",
            Field::Namespace => "PHP namespace (<Vendor>\\<Name>)",
            Field::PluginName => "Plugin name",
            Field::PluginSlug => "Plugin slug",
            Field::Version => "Version (x.x.x)",
            Field::Description => "Description",
            Field::Url => "URL",
            Field::Author => "Author",
            Field::AuthorEmail => "Author email",
            Field::AuthorUrl => "Author URL",
            Field::License => "License",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Completed answers describing the new plugin.
///
/// Produced once by [`crate::questionnaire::Questionnaire::run`]; every later
/// stage only borrows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginMetadata {
    pub package: String,
    pub namespace: String,
    pub plugin_name: String,
    pub plugin_slug: String,
    pub version: String,
    pub description: String,
    pub url: String,
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_email: Option<String>,
    pub author_url: String,
    pub license: String,
}

impl PluginMetadata {
    /// Value of a field, `None` only for an author email that was never asked
    pub fn get(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::Package => &self.package,
            Field::Namespace => &self.namespace,
            Field::PluginName => &self.plugin_name,
            Field::PluginSlug => &self.plugin_slug,
            Field::Version => &self.version,
            Field::Description => &self.description,
            Field::Url => &self.url,
            Field::Author => &self.author,
            Field::AuthorEmail => return self.author_email.as_deref(),
            Field::AuthorUrl => &self.author_url,
            Field::License => &self.license,
        };
        Some(value)
    }

    /// `(field, value)` pairs for every field present in the record
    pub fn entries(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        Field::ALL
            .iter()
            .filter_map(move |field| self.get(*field).map(|value| (*field, value)))
    }

    /// `({{key}}, value)` substitution pairs
    pub fn tokens(&self) -> Vec<(String, &str)> {
        self.entries()
            .map(|(field, value)| (format!("{{{{{}}}}}", field.key()), value))
            .collect()
    }

    /// YAML mapping in the same shape an answers file uses
    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    /// Human-readable listing of every answer, one per line
    pub fn summary(&self) -> String {
        self.entries()
            .map(|(field, value)| format!("{}: {}", field.label(), value))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
