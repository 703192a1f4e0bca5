//! Template file discovery.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glob::Pattern;
use walkdir::WalkDir;

use crate::config::Config;

/// Walk `source_root` and collect every file matching the configured
/// include globs and none of the ignore globs. Globs match the path
/// relative to `source_root`. The result is sorted for deterministic
/// catalog output.
pub fn scan_templates(config: &Config) -> Result<Vec<PathBuf>> {
    let includes = compile_patterns(&config.includes, "includes")?;
    let ignores = compile_patterns(&config.ignores, "ignores")?;
    let base = Path::new(&config.source_root);

    let mut files: Vec<PathBuf> = WalkDir::new(base)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            let relative = entry.path().strip_prefix(base).unwrap_or(entry.path());
            includes.iter().any(|p| p.matches_path(relative))
                && !ignores.iter().any(|p| p.matches_path(relative))
        })
        .map(|entry| entry.into_path())
        .collect();

    files.sort();
    files.dedup();
    Ok(files)
}

fn compile_patterns(patterns: &[String], field: &str) -> Result<Vec<Pattern>> {
    patterns
        .iter()
        .map(|pattern| {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in '{}': \"{}\"", field, pattern))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;

    use super::*;

    fn write(root: &Path, relative: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "<html></html>").unwrap();
    }

    #[test]
    fn finds_templates_by_include_glob() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "index.html");
        write(dir.path(), "app/detail.html");
        write(dir.path(), "app/app.js");

        let config = Config {
            source_root: dir.path().to_string_lossy().into_owned(),
            ..Config::default()
        };
        let files = scan_templates(&config).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["app/detail.html".to_string(), "index.html".to_string()]);
    }

    #[test]
    fn ignore_globs_drop_matches() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "index.html");
        write(dir.path(), "vendor/lib.html");

        let config = Config {
            source_root: dir.path().to_string_lossy().into_owned(),
            ignores: vec!["vendor/**".to_string()],
            ..Config::default()
        };
        let files = scan_templates(&config).unwrap();
        assert_eq!(files, vec![dir.path().join("index.html")]);
    }
}
