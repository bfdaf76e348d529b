use glob::{MatchOptions, Pattern, PatternError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A directory entry selected for padding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub path: PathBuf,
    pub name: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("Suffix cannot be empty")]
    EmptySuffix,
    #[error("Invalid suffix '{suffix}': {source}")]
    InvalidSuffix {
        suffix: String,
        #[source]
        source: PatternError,
    },
    #[error("Failed to list directory {path}: {source}")]
    ReadDir {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Matches file names ending in `.<suffix>`; `<name>` may be empty, so a
/// file called `.txt` is selected for suffix `txt`.
#[derive(Debug, Clone)]
pub struct SuffixFilter {
    pattern: Pattern,
}

impl SuffixFilter {
    pub fn new(suffix: &str) -> Result<Self, ScanError> {
        if suffix.is_empty() {
            return Err(ScanError::EmptySuffix);
        }
        // The suffix is escaped so it only ever matches literally.
        let pattern = Pattern::new(&format!("*.{}", Pattern::escape(suffix))).map_err(|source| {
            ScanError::InvalidSuffix {
                suffix: suffix.to_string(),
                source,
            }
        })?;
        Ok(SuffixFilter { pattern })
    }

    pub fn matches(&self, name: &str) -> bool {
        self.pattern.matches_with(name, MATCH_OPTIONS)
    }
}

/// List regular files directly inside `dir` whose names pass `filter`,
/// leaving out `exclude`. Order follows the directory listing.
pub fn collect_targets(
    dir: &Path,
    filter: &SuffixFilter,
    exclude: &Path,
) -> Result<Vec<Target>, ScanError> {
    let read_dir_error = |source| ScanError::ReadDir {
        path: dir.display().to_string(),
        source,
    };
    let excluded = identity(exclude);
    let mut targets = Vec::new();

    for entry in fs::read_dir(dir).map_err(read_dir_error)? {
        let entry = entry.map_err(read_dir_error)?;
        let path = entry.path();
        let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
            debug!(path = %path.display(), "skipping non UTF-8 file name");
            continue;
        };
        if !filter.matches(&name) {
            continue;
        }
        match fs::metadata(&path) {
            Ok(meta) if meta.is_file() => {}
            _ => {
                debug!(path = %path.display(), "skipping entry that is not a regular file");
                continue;
            }
        }
        if identity(&path) == excluded {
            debug!(path = %path.display(), "skipping source file");
            continue;
        }
        targets.push(Target { path, name });
    }

    Ok(targets)
}

/// Canonical form of `path` for identity checks, or the path as given when
/// it cannot be resolved.
fn identity(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    fn names(targets: &[Target]) -> Vec<String> {
        let mut names: Vec<String> = targets.iter().map(|t| t.name.clone()).collect();
        names.sort();
        names
    }

    #[test]
    fn suffix_filter_is_literal_and_anchored() {
        let filter = SuffixFilter::new("txt").unwrap();
        assert!(filter.matches("b.txt"));
        assert!(filter.matches("archive.tar.txt"));
        assert!(filter.matches(".hidden.txt"));
        assert!(filter.matches(".txt"));

        assert!(!filter.matches("notes.txt.bak"));
        assert!(!filter.matches("B.TXT"));
        assert!(!filter.matches("btxt"));
        assert!(!filter.matches("a.ttxt"));
    }

    #[test]
    fn suffix_filter_rejects_empty_suffix() {
        assert!(matches!(SuffixFilter::new(""), Err(ScanError::EmptySuffix)));
    }

    #[test]
    fn suffix_filter_escapes_glob_characters() {
        let filter = SuffixFilter::new("[ab]*").unwrap();
        assert!(filter.matches("x.[ab]*"));
        assert!(!filter.matches("x.a"));
        assert!(!filter.matches("x.bcd"));
    }

    #[test]
    fn collects_matching_files_only() {
        let temp = assert_fs::TempDir::new().unwrap();
        temp.child("b.txt").write_str("abc").unwrap();
        temp.child("c.txt").write_str("").unwrap();
        temp.child("d.log").write_str("log").unwrap();
        temp.child("nested/e.txt").write_str("deep").unwrap();
        let source = temp.child("payload.bin");
        source.write_str("AB").unwrap();

        let filter = SuffixFilter::new("txt").unwrap();
        let targets = collect_targets(temp.path(), &filter, source.path()).unwrap();
        assert_eq!(names(&targets), vec!["b.txt", "c.txt"]);
        assert!(targets.iter().all(|t| t.path.parent() == Some(temp.path())));
    }

    #[test]
    fn excludes_source_even_when_it_matches() {
        let temp = assert_fs::TempDir::new().unwrap();
        let source = temp.child("a.txt");
        source.write_str("AB").unwrap();
        temp.child("b.txt").write_str("abc").unwrap();

        let filter = SuffixFilter::new("txt").unwrap();
        let targets = collect_targets(temp.path(), &filter, source.path()).unwrap();
        assert_eq!(names(&targets), vec!["b.txt"]);
    }

    #[test]
    fn skips_directories_named_like_targets() {
        let temp = assert_fs::TempDir::new().unwrap();
        temp.child("folder.txt").create_dir_all().unwrap();
        temp.child("b.txt").write_str("abc").unwrap();
        let source = temp.child("payload.bin");
        source.write_str("AB").unwrap();

        let filter = SuffixFilter::new("txt").unwrap();
        let targets = collect_targets(temp.path(), &filter, source.path()).unwrap();
        assert_eq!(names(&targets), vec!["b.txt"]);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let temp = assert_fs::TempDir::new().unwrap();
        let filter = SuffixFilter::new("txt").unwrap();
        let result = collect_targets(&temp.path().join("absent"), &filter, Path::new("a.txt"));
        assert!(matches!(result, Err(ScanError::ReadDir { .. })));
    }
}
