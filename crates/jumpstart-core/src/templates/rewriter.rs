//! In-place token substitution for boilerplate files

use crate::metadata::PluginMetadata;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

/// Replace every `{{key}}` token with its metadata value and swap the first
/// `namespace <placeholder>;` declaration for the real namespace.
///
/// Substitution is a single left-to-right pass over `content`: inserted
/// values are never scanned again, so an answer containing `{{license}}`
/// lands verbatim.
///
/// Returns the new content and the number of substitutions made.
pub fn render(content: &str, metadata: &PluginMetadata, placeholder_namespace: &str) -> (String, usize) {
    let values: HashMap<&str, &str> = metadata
        .entries()
        .map(|(field, value)| (field.key(), value))
        .collect();

    let mut rendered = String::with_capacity(content.len());
    let placeholder = format!("namespace {};", placeholder_namespace);

    let replacements = match content.find(&placeholder) {
        Some(at) => {
            let before = substitute(&content[..at], &values, &mut rendered);
            rendered.push_str(&format!("namespace {};", metadata.namespace));
            let after = substitute(&content[at + placeholder.len()..], &values, &mut rendered);
            before + 1 + after
        }
        None => substitute(content, &values, &mut rendered),
    };

    (rendered, replacements)
}

/// Append `content` to `out` with known tokens replaced
fn substitute(content: &str, values: &HashMap<&str, &str>, out: &mut String) -> usize {
    let mut replacements = 0;
    let mut rest = content;

    while let Some(open) = rest.find("{{") {
        out.push_str(&rest[..open]);
        let tail = &rest[open + 2..];
        let value = tail
            .find("}}")
            .and_then(|close| values.get(&tail[..close]).map(|value| (close, *value)));

        match value {
            Some((close, value)) => {
                out.push_str(value);
                replacements += 1;
                rest = &tail[close + 2..];
            }
            None => {
                out.push_str("{{");
                rest = tail;
            }
        }
    }
    out.push_str(rest);

    replacements
}

/// Rewrite the file at `path` in place
pub fn rewrite(path: &Path, metadata: &PluginMetadata, placeholder_namespace: &str) -> io::Result<usize> {
    let content = fs::read_to_string(path)?;
    let (rendered, replacements) = render(&content, metadata, placeholder_namespace);
    fs::write(path, rendered)?;
    tracing::debug!(path = %path.display(), replacements, "rewrote file");
    Ok(replacements)
}
