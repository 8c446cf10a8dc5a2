//! Default values derived from earlier answers

use crate::identity::Identity;

/// License suggested when the user has no preference
pub const DEFAULT_LICENSE: &str = "GPL-3.0+";

/// Version suggested for a fresh plugin
pub const DEFAULT_VERSION: &str = "1.0.0";

/// Separator between the vendor and name segments of a PHP namespace
pub const NAMESPACE_DELIMITER: char = '\\';

/// `acme/widget` -> `Acme\Widget`
///
/// Only the first two `/`-separated segments are used, so `a/b/c` gives
/// `A\B` and a package without a slash gives `<Vendor>\`.
/// The result is not validated; the user can still override it.
pub fn namespace(package: &str) -> String {
    let mut segments = package.split('/');
    let vendor = segments.next().unwrap_or_default();
    let name = segments.next().unwrap_or_default();
    format!(
        "{}{}{}",
        capitalize(vendor),
        NAMESPACE_DELIMITER,
        capitalize(name)
    )
}

/// `acme/widget` -> `Widget`
pub fn plugin_name(package: &str) -> String {
    let name = package.split_once('/').map_or(package, |(_, name)| name);
    capitalize(name)
}

/// `My Cool Plugin!` -> `my_cool_plugin`
pub fn plugin_slug(plugin_name: &str) -> String {
    plugin_name
        .replace(' ', "_")
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect::<String>()
        .to_lowercase()
}

/// Author suggestion from the identity source.
///
/// With `with_email` the email is folded in as `Name <email>`; this is the
/// form used when no separate email question is asked.
pub fn author(identity: &Identity, with_email: bool) -> String {
    match (&identity.name, &identity.email) {
        (Some(name), Some(email)) if with_email => format!("{} <{}>", name, email),
        (Some(name), _) => name.clone(),
        (None, _) => String::new(),
    }
}

pub fn author_email(identity: &Identity) -> String {
    identity.email.clone().unwrap_or_default()
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
