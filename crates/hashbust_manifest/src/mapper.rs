//! Derivation of hashed asset paths and manifest keys.
//!
//! Given an asset's absolute path and its digest fragment, the mapper computes
//! three strings:
//!
//! - the manifest key, i.e. the text searched for in target files;
//! - the manifest value, i.e. the text written in its place;
//! - the hashed path relative to the public root, used for the rename.
//!
//! In URL mode the key is the full path below the public root and the value is
//! prefixed with the URL. In relative mode only the parent directory name and
//! file name form the key.

use std::path::{Path, PathBuf};

/// The `{dir, base, ext}` components of a `/`-separated path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedPath<'a> {
    /// Everything before the last separator (`/` for files in the root).
    pub dir: &'a str,
    /// The file name.
    pub base: &'a str,
    /// The final extension including its dot, or `""` when there is none.
    pub ext: &'a str,
}

impl<'a> ParsedPath<'a> {
    /// Splits `path` into directory, file name and extension.
    ///
    /// A leading dot in the file name does not start an extension, so
    /// `.htaccess` has none.
    pub fn parse(path: &'a str) -> Self {
        let (dir, base) = match path.rfind('/') {
            Some(0) => ("/", &path[1..]),
            Some(idx) => (&path[..idx], &path[idx + 1..]),
            None => ("", path),
        };
        let ext = match base.rfind('.') {
            Some(idx) if idx > 0 => &base[idx..],
            _ => "",
        };
        Self { dir, base, ext }
    }
}

/// How manifest keys and values are formed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MappingMode {
    /// Values are the URL (no trailing slash) followed by the hashed path.
    Url(String),
    /// Keys are `parent-dir/file`, values are the same with the digest inserted.
    Relative,
}

/// Result of mapping one source asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedPath {
    /// Text searched for in target files.
    pub key: String,
    /// Replacement text written into target files.
    pub value: String,
    /// Hashed path below the public root, with a leading `/`.
    pub hashed_relative: String,
}

/// Maps asset paths below a public root to their cache-busted forms.
#[derive(Debug, Clone)]
pub struct PathMapper {
    public_root: String,
    mode: MappingMode,
}

impl PathMapper {
    /// Creates a mapper for `public_root`.
    ///
    /// `Some(url)` selects URL mode with `url` used verbatim as the prefix; it
    /// is expected to carry no trailing slash, as `resolve_config` produces.
    pub fn new(public_root: impl Into<String>, url: Option<&str>) -> Self {
        let mode = match url {
            Some(u) => MappingMode::Url(u.to_string()),
            None => MappingMode::Relative,
        };
        Self {
            public_root: public_root.into(),
            mode,
        }
    }

    /// Returns the active mapping mode.
    pub fn mode(&self) -> &MappingMode {
        &self.mode
    }

    /// Maps the asset at absolute `path` whose digest fragment is `digest`.
    pub fn map(&self, path: &str, digest: &str) -> MappedPath {
        let parsed = ParsedPath::parse(path);
        let original = self.strip_root(path);
        let hashed_relative = insert_digest(original, parsed.ext, digest);

        match &self.mode {
            MappingMode::Url(url) => MappedPath {
                key: original.to_string(),
                value: format!("{url}{hashed_relative}"),
                hashed_relative,
            },
            MappingMode::Relative => {
                let dir = self.strip_root(parsed.dir);
                let parent = dir.rsplit('/').next().unwrap_or(dir);
                let joined = format!("{parent}/{}", parsed.base);
                let key = joined.trim_start_matches('/').to_string();
                let value = insert_digest(&key, parsed.ext, digest);
                MappedPath {
                    key,
                    value,
                    hashed_relative,
                }
            }
        }
    }

    /// Absolute rename destination for a hashed path below the public root.
    pub fn destination(&self, hashed_relative: &str) -> PathBuf {
        Path::new(&self.public_root).join(hashed_relative.trim_start_matches('/'))
    }

    fn strip_root<'p>(&self, path: &'p str) -> &'p str {
        path.strip_prefix(self.public_root.as_str()).unwrap_or(path)
    }
}

/// Inserts `.{digest}` immediately before `ext` at the end of `path`.
///
/// Without an extension the digest is appended as a `.{digest}` suffix.
pub fn insert_digest(path: &str, ext: &str, digest: &str) -> String {
    match path.strip_suffix(ext) {
        Some(stem) if !ext.is_empty() => format!("{stem}.{digest}{ext}"),
        _ => format!("{path}.{digest}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_nested_path() {
        let p = ParsedPath::parse("/site/dist/css/app.min.css");
        assert_eq!(p.dir, "/site/dist/css");
        assert_eq!(p.base, "app.min.css");
        assert_eq!(p.ext, ".css");
    }

    #[test]
    fn parse_root_file() {
        let p = ParsedPath::parse("/app.js");
        assert_eq!(p.dir, "/");
        assert_eq!(p.base, "app.js");
    }

    #[test]
    fn parse_dotfile_and_extensionless() {
        assert_eq!(ParsedPath::parse("/a/.htaccess").ext, "");
        assert_eq!(ParsedPath::parse("/a/LICENSE").ext, "");
        assert_eq!(ParsedPath::parse("/a/.env.local").ext, ".local");
    }

    #[test]
    fn insert_digest_before_final_extension() {
        assert_eq!(insert_digest("/css/app.min.css", ".css", "abc1234"), "/css/app.min.abc1234.css");
        assert_eq!(insert_digest("app.js", ".js", "2cf24db"), "app.2cf24db.js");
    }

    #[test]
    fn insert_digest_without_extension() {
        assert_eq!(insert_digest("/fonts/icons", "", "abcd"), "/fonts/icons.abcd");
    }

    #[test]
    fn insert_digest_only_touches_final_extension() {
        // The directory also contains ".js"; only the file's own extension moves.
        assert_eq!(insert_digest("/app.js/app.js", ".js", "ffff"), "/app.js/app.ffff.js");
    }

    #[test]
    fn relative_mode_file_in_root() {
        let mapper = PathMapper::new("/site/dist", None);
        let mapped = mapper.map("/site/dist/app.js", "2cf24db");
        assert_eq!(mapped.key, "app.js");
        assert_eq!(mapped.value, "app.2cf24db.js");
        assert_eq!(mapped.hashed_relative, "/app.2cf24db.js");
        assert_eq!(
            mapper.destination(&mapped.hashed_relative),
            PathBuf::from("/site/dist/app.2cf24db.js")
        );
    }

    #[test]
    fn relative_mode_uses_only_parent_dir() {
        let mapper = PathMapper::new("/site/public", None);
        let mapped = mapper.map("/site/public/assets/css/site.css", "1234abc");
        assert_eq!(mapped.key, "css/site.css");
        assert_eq!(mapped.value, "css/site.1234abc.css");
        assert_eq!(mapped.hashed_relative, "/assets/css/site.1234abc.css");
        assert_eq!(
            mapper.destination(&mapped.hashed_relative),
            PathBuf::from("/site/public/assets/css/site.1234abc.css")
        );
    }

    #[test]
    fn url_mode_keeps_full_relative_path() {
        let mapper = PathMapper::new("/site/dist", Some("https://cdn.example.com"));
        assert_eq!(
            mapper.mode(),
            &MappingMode::Url("https://cdn.example.com".to_string())
        );
        let mapped = mapper.map("/site/dist/app.js", "2cf24db");
        assert_eq!(mapped.key, "/app.js");
        assert_eq!(mapped.value, "https://cdn.example.com/app.2cf24db.js");
    }

    #[test]
    fn url_mode_nested() {
        let mapper = PathMapper::new("/site/dist", Some("https://cdn.example.com"));
        let mapped = mapper.map("/site/dist/js/vendor/lib.js", "beef");
        assert_eq!(mapped.key, "/js/vendor/lib.js");
        assert_eq!(mapped.value, "https://cdn.example.com/js/vendor/lib.beef.js");
    }

    #[test]
    fn no_url_selects_relative_mode() {
        let mapper = PathMapper::new("/site/dist", None);
        assert_eq!(mapper.mode(), &MappingMode::Relative);
    }

    #[test]
    fn url_is_not_renormalized() {
        let mapper = PathMapper::new("/site/dist", Some(" https://cdn.example.com/static"));
        assert_eq!(
            mapper.mode(),
            &MappingMode::Url(" https://cdn.example.com/static".to_string())
        );
        let mapped = mapper.map("/site/dist/app.js", "2cf24db");
        assert_eq!(mapped.value, " https://cdn.example.com/static/app.2cf24db.js");
    }
}
