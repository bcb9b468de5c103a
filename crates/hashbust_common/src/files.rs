//! Glob-based discovery of source and target files.

use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobMatcher};
use walkdir::WalkDir;

/// Errors that can occur while expanding a glob pattern.
#[derive(Debug, thiserror::Error)]
pub enum FileMatchError {
    /// The glob pattern itself is malformed.
    #[error("invalid glob pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// The offending pattern.
        pattern: String,
        /// Description of the syntax problem.
        reason: String,
    },

    /// A directory visited during expansion could not be read.
    #[error("failed to read {path} while matching '{pattern}': {source}")]
    Unreadable {
        /// The pattern being expanded.
        pattern: String,
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

/// Expands `pattern` into the regular files it matches.
///
/// The pattern is split into a literal base directory and a glob tail. The
/// tail supports `*`, `?`, `[...]`, `**` and `{a,b}` alternation; `*` never
/// crosses a `/`. The base is walked with entries sorted by file name, so the
/// result order is stable. Directories are skipped, and hidden entries below
/// the base only match when the tail names a leading dot explicitly. A pattern
/// that matches nothing, or whose base does not exist, yields an empty list.
pub fn match_files(pattern: &str) -> Result<Vec<PathBuf>, FileMatchError> {
    let Some((base, tail)) = split_base(pattern) else {
        let path = PathBuf::from(pattern);
        return Ok(if path.is_file() { vec![path] } else { Vec::new() });
    };

    let matcher = compile(pattern, tail)?;
    if !base.is_dir() {
        return Ok(Vec::new());
    }

    let dot_allowed = tail.split('/').any(|segment| segment.starts_with('.'));
    let max_depth = if tail.contains("**") {
        usize::MAX
    } else {
        tail.split('/').count()
    };

    let walker = WalkDir::new(&base)
        .min_depth(1)
        .max_depth(max_depth)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || dot_allowed || !is_hidden(e.file_name()));

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| unreadable(pattern, &base, e))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry.path().strip_prefix(&base).unwrap_or(entry.path());
        if matcher.is_match(relative) {
            files.push(display_path(entry.into_path()));
        }
    }
    Ok(files)
}

/// Splits `pattern` at the first segment holding a glob metacharacter.
///
/// Returns `None` when the whole pattern is literal.
fn split_base(pattern: &str) -> Option<(PathBuf, &str)> {
    let mut offset = 0;
    for segment in pattern.split('/') {
        if segment.contains(['*', '?', '[', '{']) {
            let base = &pattern[..offset];
            let base = if base.is_empty() { "." } else { base };
            return Some((PathBuf::from(base), &pattern[offset..]));
        }
        offset += segment.len() + 1;
    }
    None
}

fn compile(pattern: &str, tail: &str) -> Result<GlobMatcher, FileMatchError> {
    GlobBuilder::new(tail)
        .literal_separator(true)
        .build()
        .map(|glob| glob.compile_matcher())
        .map_err(|e| FileMatchError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.kind().to_string(),
        })
}

fn is_hidden(name: &std::ffi::OsStr) -> bool {
    name.to_str().is_some_and(|n| n.starts_with('.'))
}

fn unreadable(pattern: &str, base: &Path, e: walkdir::Error) -> FileMatchError {
    let path = e.path().unwrap_or(base).to_path_buf();
    let source = e
        .into_io_error()
        .unwrap_or_else(|| std::io::Error::other("filesystem loop detected"));
    FileMatchError::Unreadable {
        pattern: pattern.to_string(),
        path,
        source,
    }
}

/// Drops the `./` a walk from the current directory prefixes onto every entry.
fn display_path(path: PathBuf) -> PathBuf {
    match path.strip_prefix(".") {
        Ok(stripped) => stripped.to_path_buf(),
        Err(_) => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern_in(dir: &std::path::Path, tail: &str) -> String {
        format!("{}/{}", dir.display(), tail)
    }

    #[test]
    fn matches_only_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("app.js"), "a").unwrap();
        std::fs::create_dir(dir.path().join("nested.js")).unwrap();

        let files = match_files(&pattern_in(dir.path(), "*.js")).unwrap();
        assert_eq!(files, vec![dir.path().join("app.js")]);
    }

    #[test]
    fn star_does_not_cross_directories() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("vendor")).unwrap();
        std::fs::write(dir.path().join("app.js"), "a").unwrap();
        std::fs::write(dir.path().join("vendor/lib.js"), "b").unwrap();

        let files = match_files(&pattern_in(dir.path(), "*.js")).unwrap();
        assert_eq!(files, vec![dir.path().join("app.js")]);
    }

    #[test]
    fn recursive_pattern() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("css/vendor")).unwrap();
        std::fs::write(dir.path().join("css/site.css"), "a").unwrap();
        std::fs::write(dir.path().join("css/vendor/reset.css"), "b").unwrap();
        std::fs::write(dir.path().join("css/notes.txt"), "c").unwrap();

        let files = match_files(&pattern_in(dir.path(), "**/*.css")).unwrap();
        assert_eq!(
            files,
            vec![
                dir.path().join("css/site.css"),
                dir.path().join("css/vendor/reset.css"),
            ]
        );
    }

    #[test]
    fn brace_alternation() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("app.js"), "a").unwrap();
        std::fs::write(dir.path().join("site.css"), "b").unwrap();
        std::fs::write(dir.path().join("logo.png"), "c").unwrap();

        let files = match_files(&pattern_in(dir.path(), "*.{js,css}")).unwrap();
        assert_eq!(
            files,
            vec![dir.path().join("app.js"), dir.path().join("site.css")]
        );
    }

    #[test]
    fn recursive_brace_alternation() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("views/admin")).unwrap();
        std::fs::write(dir.path().join("views/index.html"), "a").unwrap();
        std::fs::write(dir.path().join("views/admin/panel.php"), "b").unwrap();
        std::fs::write(dir.path().join("views/admin/logo.svg"), "c").unwrap();

        let files = match_files(&pattern_in(dir.path(), "views/**/*.{html,php}")).unwrap();
        assert_eq!(
            files,
            vec![
                dir.path().join("views/admin/panel.php"),
                dir.path().join("views/index.html"),
            ]
        );
    }

    #[test]
    fn hidden_files_need_explicit_dot() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".hidden.js"), "a").unwrap();

        assert!(match_files(&pattern_in(dir.path(), "*.js")).unwrap().is_empty());
        assert_eq!(
            match_files(&pattern_in(dir.path(), ".*.js")).unwrap(),
            vec![dir.path().join(".hidden.js")]
        );
    }

    #[test]
    fn hidden_files_in_plain_directory() {
        let dir = tempfile::tempdir().unwrap();
        let plain = dir.path().join("assets");
        std::fs::create_dir(&plain).unwrap();
        std::fs::write(plain.join(".hidden.js"), "a").unwrap();
        std::fs::write(plain.join("shown.js"), "b").unwrap();

        assert_eq!(
            match_files(&pattern_in(&plain, "*.js")).unwrap(),
            vec![plain.join("shown.js")]
        );
        assert_eq!(
            match_files(&pattern_in(&plain, ".*.js")).unwrap(),
            vec![plain.join(".hidden.js")]
        );
    }

    #[test]
    fn hidden_directories_are_not_descended() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join(".cache")).unwrap();
        std::fs::write(dir.path().join(".cache/old.js"), "a").unwrap();
        std::fs::write(dir.path().join("app.js"), "b").unwrap();

        assert_eq!(
            match_files(&pattern_in(dir.path(), "**/*.js")).unwrap(),
            vec![dir.path().join("app.js")]
        );
    }

    #[test]
    fn literal_pattern_names_one_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "a").unwrap();

        assert_eq!(
            match_files(&pattern_in(dir.path(), "index.html")).unwrap(),
            vec![dir.path().join("index.html")]
        );
        assert!(match_files(&pattern_in(dir.path(), "missing.html"))
            .unwrap()
            .is_empty());
    }

    #[test]
    fn no_matches_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let files = match_files(&pattern_in(dir.path(), "*.png")).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn missing_base_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let files = match_files(&pattern_in(dir.path(), "absent/*.js")).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn invalid_pattern_errors() {
        let err = match_files("dist/[*.js").unwrap_err();
        assert!(matches!(err, FileMatchError::InvalidPattern { .. }));
        assert!(err.to_string().contains("dist/[*.js"));
    }
}
