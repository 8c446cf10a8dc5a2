//! Answer validation rules
//!
//! Every rule returns the accepted input unchanged, or a [`ValidationError`]
//! carrying the reason shown to the user before the question is asked again.

use crate::error::ValidationError;
use crate::metadata::Field;
use regex::Regex;
use std::sync::LazyLock;

/// Longest accepted description, in characters
pub const MAX_DESCRIPTION_LEN: usize = 150;

static PACKAGE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9_.-]+/[a-z0-9_.-]+$").unwrap());

static NAMESPACE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_-]+\\[a-zA-Z0-9_-]+$").unwrap());

static SLUG_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-z0-9_-]+$").unwrap());

static VERSION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.[0-9]+\.[0-9]+(-[a-z0-9_-]+)?$").unwrap());

/// A validation rule for one field
pub type Rule = fn(&str) -> Result<String, ValidationError>;

/// The rule for a field, or `None` when any input is accepted verbatim
pub fn rule_for(field: Field) -> Option<Rule> {
    match field {
        Field::Package => Some(package),
        Field::Namespace => Some(namespace),
        Field::PluginSlug => Some(slug),
        Field::Version => Some(version),
        Field::Description => Some(description),
        Field::Url => Some(url),
        Field::AuthorUrl => Some(author_url),
        Field::PluginName | Field::Author | Field::AuthorEmail | Field::License => None,
    }
}

/// Validate a raw answer for `field`
pub fn validate(field: Field, raw: &str) -> Result<String, ValidationError> {
    match rule_for(field) {
        Some(rule) => rule(raw),
        None => Ok(raw.to_string()),
    }
}

pub fn package(value: &str) -> Result<String, ValidationError> {
    if !PACKAGE_PATTERN.is_match(value) {
        return Err(ValidationError::new(
            Field::Package,
            "Package must be in the format <vendor>/<name>, each containing only lowercase letters, numbers, '.', '-' or '_'",
        ));
    }
    Ok(value.to_string())
}

pub fn namespace(value: &str) -> Result<String, ValidationError> {
    if !NAMESPACE_PATTERN.is_match(value) {
        return Err(ValidationError::new(
            Field::Namespace,
            "Namespace must be in the format <Vendor>\\<Name>, each containing only letters, numbers, '-' or '_'",
        ));
    }
    Ok(value.to_string())
}

pub fn slug(value: &str) -> Result<String, ValidationError> {
    if !SLUG_PATTERN.is_match(value) {
        return Err(ValidationError::new(
            Field::PluginSlug,
            "Slug must contain only lowercase letters, numbers, '-' or '_'",
        ));
    }
    Ok(value.to_string())
}

pub fn version(value: &str) -> Result<String, ValidationError> {
    if !VERSION_PATTERN.is_match(value) {
        return Err(ValidationError::new(
            Field::Version,
            "Version must be in the format x.x.x, optionally followed by a hyphen and a pre-release suffix, e.g. 1.0.0-alpha",
        ));
    }
    Ok(value.to_string())
}

pub fn description(value: &str) -> Result<String, ValidationError> {
    if value.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(ValidationError::new(
            Field::Description,
            "Description must be at most 150 characters",
        ));
    }
    Ok(value.to_string())
}

pub fn url(value: &str) -> Result<String, ValidationError> {
    check_url(Field::Url, value)
}

pub fn author_url(value: &str) -> Result<String, ValidationError> {
    check_url(Field::AuthorUrl, value)
}

// Only looks for a scheme substring, not a full URL parse.
fn check_url(field: Field, value: &str) -> Result<String, ValidationError> {
    if value.is_empty() {
        return Ok(String::new());
    }
    if !value.contains("http://") && !value.contains("https://") {
        return Err(ValidationError::new(field, "Please enter a valid URL"));
    }
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn accepts(field: Field, values: &[&str]) {
        for value in values {
            assert_eq!(
                validate(field, value).as_deref(),
                Ok(*value),
                "{} should accept {:?}",
                field,
                value
            );
        }
    }

    fn rejects(field: Field, values: &[&str]) {
        for value in values {
            let err = validate(field, value).unwrap_err();
            assert_eq!(err.field, field);
            assert!(!err.reason.is_empty());
        }
    }

    #[test]
    fn test_package() {
        accepts(
            Field::Package,
            &["acme/widget", "my-vendor/my_plugin", "a.b/c.d", "0/9"],
        );
        rejects(
            Field::Package,
            &["", "acme", "Acme/Widget", "acme/widget/extra", "acme/", "/widget", "acme widget/x"],
        );
    }

    #[test]
    fn test_namespace() {
        accepts(Field::Namespace, &["Acme\\Widget", "my-vendor\\My_Plugin2"]);
        rejects(
            Field::Namespace,
            &["", "Acme", "Acme/Widget", "Acme\\Widget\\Extra", "Acme\\Wid.get", "\\Widget"],
        );
    }

    #[test]
    fn test_slug() {
        accepts(Field::PluginSlug, &["widget", "my_cool-plugin2"]);
        rejects(Field::PluginSlug, &["", "Widget", "my plugin", "my.plugin"]);
    }

    #[test]
    fn test_version() {
        accepts(Field::Version, &["1.0.0", "10.20.30", "1.0.0-alpha", "2.1.0-rc_1"]);
        rejects(
            Field::Version,
            &["", "1.0", "v1.0.0", "1.0.0-", "1.0.0-Beta", "1.0.0.0", "1.0.0-alpha.1"],
        );
    }

    #[test]
    fn test_description_length() {
        let exact = "x".repeat(MAX_DESCRIPTION_LEN);
        let multibyte = "é".repeat(MAX_DESCRIPTION_LEN);
        accepts(Field::Description, &["", "A short description", exact.as_str(), multibyte.as_str()]);
        let over = "x".repeat(MAX_DESCRIPTION_LEN + 1);
        rejects(Field::Description, &[over.as_str()]);
    }

    #[test]
    fn test_url_is_a_loose_substring_check() {
        accepts(
            Field::Url,
            &["", "https://acme.test", "http://acme.test/x", "see https://acme.test"],
        );
        rejects(Field::Url, &["acme.test", "ftp://acme.test", "https:/acme.test"]);
        accepts(Field::AuthorUrl, &["", "https://jane.test"]);
        rejects(Field::AuthorUrl, &["jane.test"]);
    }

    #[test]
    fn test_unvalidated_fields_pass_verbatim() {
        for field in [Field::PluginName, Field::Author, Field::AuthorEmail, Field::License] {
            assert!(rule_for(field).is_none());
            accepts(field, &["", "  anything goes  ", "Jane Doe <jane@acme.test>"]);
        }
    }
}
