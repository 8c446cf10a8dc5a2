//! Boilerplate rewriting
//!
//! This module provides:
//! - Discovery of boilerplate files under the source directory
//! - Token substitution for a single file
//! - The batch pass over a project root, including the entry-point rename

pub mod rewriter;
pub mod walker;

use crate::config::ScaffoldConfig;
use crate::error::ScaffoldError;
use crate::metadata::PluginMetadata;
use std::io;
use std::path::{Path, PathBuf};

pub use rewriter::{render, rewrite};
pub use walker::{collect_sorted, walk};

/// Result of rewriting one file
#[derive(Debug)]
pub enum FileStatus {
    Rewritten { replacements: usize },
    Failed(io::Error),
}

#[derive(Debug)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub status: FileStatus,
}

impl FileOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self.status, FileStatus::Failed(_))
    }
}

/// What happened to the entry-point file
#[derive(Debug)]
pub enum EntryPoint {
    Renamed { from: PathBuf, to: PathBuf },
    NotFound(PathBuf),
    Failed { path: PathBuf, error: io::Error },
}

/// Per-file outcomes of [`apply`]
#[derive(Debug)]
pub struct ApplyReport {
    pub files: Vec<FileOutcome>,
    pub entry_point: EntryPoint,
}

impl ApplyReport {
    pub fn rewritten(&self) -> usize {
        self.files.iter().filter(|f| !f.is_failure()).count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &FileOutcome> {
        self.files.iter().filter(|f| f.is_failure())
    }

    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some() || matches!(self.entry_point, EntryPoint::Failed { .. })
    }
}

/// Rewrite every boilerplate file under `root` and rename the entry point.
///
/// A missing source directory aborts before anything is touched. After that
/// the pass is best-effort: a file that cannot be read or written is recorded
/// as failed and the remaining files are still processed.
pub fn apply(
    root: &Path,
    metadata: &PluginMetadata,
    config: &ScaffoldConfig,
) -> Result<ApplyReport, ScaffoldError> {
    let source_dir = config.source_path(root);
    if !source_dir.is_dir() {
        return Err(ScaffoldError::MissingSourceDir(source_dir));
    }

    let (paths, walk_errors) = walker::collect_sorted(&source_dir, &config.extension);
    tracing::debug!(
        source_dir = %source_dir.display(),
        files = paths.len(),
        "rewriting boilerplate"
    );

    let mut files: Vec<FileOutcome> = walk_errors
        .into_iter()
        .map(|e| {
            let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| source_dir.clone());
            tracing::warn!(path = %path.display(), error = %e, "could not walk entry");
            FileOutcome {
                path,
                status: FileStatus::Failed(e.into()),
            }
        })
        .collect();

    for path in paths {
        let status = match rewriter::rewrite(&path, metadata, &config.placeholder_namespace) {
            Ok(replacements) => FileStatus::Rewritten { replacements },
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "could not rewrite file");
                FileStatus::Failed(e)
            }
        };
        files.push(FileOutcome { path, status });
    }

    let entry_point = rename_entry_point(root, metadata, config);

    Ok(ApplyReport { files, entry_point })
}

/// Rename the entry point to `<plugin_slug>.<extension>` in its own directory
fn rename_entry_point(root: &Path, metadata: &PluginMetadata, config: &ScaffoldConfig) -> EntryPoint {
    let from = root.join(&config.entry_point);
    if !from.is_file() {
        return EntryPoint::NotFound(from);
    }

    let file_name = format!("{}.{}", metadata.plugin_slug, config.extension);
    let to = match from.parent() {
        Some(parent) => parent.join(file_name),
        None => root.join(file_name),
    };

    if to.exists() && !same_file(&from, &to) {
        let error = io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{} already exists", to.display()),
        );
        tracing::warn!(from = %from.display(), to = %to.display(), "entry point target exists");
        return EntryPoint::Failed { path: from, error };
    }

    match std::fs::rename(&from, &to) {
        Ok(()) => {
            tracing::debug!(from = %from.display(), to = %to.display(), "renamed entry point");
            EntryPoint::Renamed { from, to }
        }
        Err(error) => EntryPoint::Failed { path: from, error },
    }
}

/// Whether both paths resolve to the same file, which is also the case for a
/// case-only rename on a case-insensitive filesystem
fn same_file(a: &Path, b: &Path) -> bool {
    match (std::fs::canonicalize(a), std::fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::tests::widget;
    use std::fs;
    use tempfile::TempDir;

    fn boilerplate() -> TempDir {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src");
        fs::create_dir_all(src.join("Admin")).unwrap();
        fs::write(
            src.join("plugin.php"),
            "<?php\n/**\n * Plugin Name: {{plugin_name}}\n * Version: {{version}}\n */\nnamespace Jumpstart;\n",
        )
        .unwrap();
        fs::write(
            src.join("Admin/Settings.php"),
            "<?php\nnamespace Jumpstart;\n\nclass Settings { const SLUG = '{{plugin_slug}}'; }\n",
        )
        .unwrap();
        fs::write(src.join("Admin/notes.txt"), "{{package}}").unwrap();
        dir
    }

    #[test]
    fn test_apply_rewrites_and_renames() {
        let dir = boilerplate();
        let src = dir.path().join("src");

        let report = apply(dir.path(), &widget(), &ScaffoldConfig::default()).unwrap();

        assert_eq!(report.files.len(), 2);
        assert_eq!(report.rewritten(), 2);
        assert!(!report.has_failures());

        match &report.entry_point {
            EntryPoint::Renamed { from, to } => {
                assert_eq!(from, &src.join("plugin.php"));
                assert_eq!(to, &src.join("widget.php"));
            }
            other => panic!("unexpected entry point outcome: {:?}", other),
        }
        assert!(!src.join("plugin.php").exists());

        let main = fs::read_to_string(src.join("widget.php")).unwrap();
        assert!(main.contains("Plugin Name: Widget"));
        assert!(main.contains("namespace Acme\\Widget;"));

        let settings = fs::read_to_string(src.join("Admin/Settings.php")).unwrap();
        assert!(settings.contains("const SLUG = 'widget';"));

        // other extensions are left alone
        assert_eq!(
            fs::read_to_string(src.join("Admin/notes.txt")).unwrap(),
            "{{package}}"
        );
    }

    #[test]
    fn test_apply_continues_past_a_failing_file() {
        let dir = boilerplate();
        let src = dir.path().join("src");
        fs::write(src.join("Admin/Broken.php"), [0xc3, 0x28]).unwrap();
        fs::write(src.join("Admin/View.php"), "{{plugin_name}}").unwrap();

        let report = apply(dir.path(), &widget(), &ScaffoldConfig::default()).unwrap();

        assert_eq!(report.files.len(), 4);
        assert_eq!(report.rewritten(), 3);
        let failures: Vec<_> = report.failures().collect();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].path, src.join("Admin/Broken.php"));
        assert!(report.has_failures());
        assert_eq!(fs::read_to_string(src.join("Admin/View.php")).unwrap(), "Widget");
    }

    #[test]
    fn test_apply_continues_past_an_unwritable_file() {
        let dir = boilerplate();
        let src = dir.path().join("src");
        let locked = src.join("Admin/Locked.php");
        fs::write(&locked, "{{plugin_slug}}").unwrap();
        let mut permissions = fs::metadata(&locked).unwrap().permissions();
        permissions.set_readonly(true);
        fs::set_permissions(&locked, permissions).unwrap();

        // privileged users write through read-only permissions
        if fs::OpenOptions::new().write(true).open(&locked).is_ok() {
            return;
        }

        let report = apply(dir.path(), &widget(), &ScaffoldConfig::default()).unwrap();

        assert_eq!(report.files.len(), 3);
        assert_eq!(report.rewritten(), 2);
        let failures: Vec<_> = report.failures().collect();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].path, locked);
        assert!(matches!(
            &failures[0].status,
            FileStatus::Failed(e) if e.kind() == io::ErrorKind::PermissionDenied
        ));
        assert_eq!(fs::read_to_string(&locked).unwrap(), "{{plugin_slug}}");
        assert!(src.join("widget.php").is_file());
    }

    #[test]
    fn test_apply_keeps_existing_entry_point_target() {
        let dir = boilerplate();
        let src = dir.path().join("src");
        fs::write(src.join("widget.php"), "<?php // existing\n").unwrap();

        let report = apply(dir.path(), &widget(), &ScaffoldConfig::default()).unwrap();

        match &report.entry_point {
            EntryPoint::Failed { path, error } => {
                assert_eq!(path, &src.join("plugin.php"));
                assert_eq!(error.kind(), io::ErrorKind::AlreadyExists);
            }
            other => panic!("unexpected entry point outcome: {:?}", other),
        }
        assert!(report.has_failures());
        assert_eq!(
            fs::read_to_string(src.join("widget.php")).unwrap(),
            "<?php // existing\n"
        );
        assert!(fs::read_to_string(src.join("plugin.php"))
            .unwrap()
            .contains("Plugin Name: Widget"));
    }

    #[test]
    fn test_apply_entry_point_already_named_after_slug() {
        let dir = boilerplate();
        let src = dir.path().join("src");
        let metadata = PluginMetadata {
            plugin_slug: "plugin".to_string(),
            ..widget()
        };

        let report = apply(dir.path(), &metadata, &ScaffoldConfig::default()).unwrap();

        assert!(matches!(report.entry_point, EntryPoint::Renamed { .. }));
        assert!(src.join("plugin.php").is_file());
        assert!(!report.has_failures());
    }

    #[test]
    fn test_apply_without_source_dir_is_fatal() {
        let dir = TempDir::new().unwrap();

        let err = apply(dir.path(), &widget(), &ScaffoldConfig::default()).unwrap_err();

        assert!(matches!(err, ScaffoldError::MissingSourceDir(ref p) if p == &dir.path().join("src")));
    }

    #[test]
    fn test_apply_without_entry_point() {
        let dir = boilerplate();
        fs::remove_file(dir.path().join("src/plugin.php")).unwrap();

        let report = apply(dir.path(), &widget(), &ScaffoldConfig::default()).unwrap();

        assert!(matches!(report.entry_point, EntryPoint::NotFound(_)));
        assert_eq!(report.rewritten(), 1);
    }

    #[test]
    fn test_apply_sample_boilerplate() {
        const SAMPLE: &[(&str, &str)] = &[
            (
                "jumpstart.yaml",
                include_str!("../../../../templates/wordpress-plugin/jumpstart.yaml"),
            ),
            (
                "src/plugin.php",
                include_str!("../../../../templates/wordpress-plugin/src/plugin.php"),
            ),
            (
                "src/Bootstrap.php",
                include_str!("../../../../templates/wordpress-plugin/src/Bootstrap.php"),
            ),
            (
                "src/Settings.php",
                include_str!("../../../../templates/wordpress-plugin/src/Settings.php"),
            ),
        ];
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("src")).unwrap();
        for (path, content) in SAMPLE {
            fs::write(dir.path().join(path), content).unwrap();
        }

        let config = ScaffoldConfig::load(dir.path()).unwrap();
        assert_eq!(config, ScaffoldConfig::default());
        let report = apply(dir.path(), &widget(), &config).unwrap();

        assert_eq!(report.rewritten(), 3);
        for name in ["widget.php", "Bootstrap.php", "Settings.php"] {
            let content = fs::read_to_string(dir.path().join("src").join(name)).unwrap();
            assert!(!content.contains("{{"), "{} still has tokens", name);
            assert!(content.contains("namespace Acme\\Widget;"));
        }
        let main = fs::read_to_string(dir.path().join("src/widget.php")).unwrap();
        assert!(main.contains("Plugin URI:        https://acme.test/widget"));
    }

    #[test]
    fn test_apply_with_custom_layout() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("inc")).unwrap();
        fs::write(dir.path().join("inc/Core.inc"), "namespace Boilerplate;").unwrap();
        fs::write(dir.path().join("main.inc"), "").unwrap();

        let config = ScaffoldConfig {
            source_dir: PathBuf::from("inc"),
            extension: "inc".to_string(),
            entry_point: PathBuf::from("main.inc"),
            placeholder_namespace: "Boilerplate".to_string(),
            ..ScaffoldConfig::default()
        };

        let report = apply(dir.path(), &widget(), &config).unwrap();

        assert_eq!(report.rewritten(), 1);
        assert_eq!(
            fs::read_to_string(dir.path().join("inc/Core.inc")).unwrap(),
            "namespace Acme\\Widget;"
        );
        assert!(dir.path().join("widget.inc").is_file());
    }
}
