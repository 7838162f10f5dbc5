//! Normalized path handling for cross-platform compatibility

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A path normalized to use forward slashes internally.
///
/// Solutions discovered on Windows shares and on Unix checkouts are reported
/// the same way: all paths are stored with forward slashes and converted to
/// platform-native format only at I/O boundaries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct NormalizedPath {
    /// Internal representation always uses forward slashes
    inner: String,
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    ///
    /// Converts backslashes to forward slashes for internal storage.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path_str = path.as_ref().to_string_lossy();
        Self {
            inner: path_str.replace('\\', "/"),
        }
    }

    /// Resolve `path` against `base`.
    ///
    /// A blank `path` yields `base`, an absolute `path` is kept as is, and a
    /// relative one is joined onto `base`. Windows verbatim prefixes (`\\?\`)
    /// are stripped so diagnostics stay readable.
    pub fn absolutize(path: impl AsRef<Path>, base: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let base = base.as_ref();
        let resolved: PathBuf = if path.as_os_str().to_string_lossy().trim().is_empty() {
            base.to_path_buf()
        } else if path.is_absolute() {
            path.to_path_buf()
        } else {
            base.join(path)
        };
        Self::new(dunce::simplified(&resolved))
    }

    /// Get the internal normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// True if the path holds no characters at all.
    pub fn is_empty(&self) -> bool {
        self.inner.trim().is_empty()
    }

    /// Convert to a platform-native PathBuf for I/O operations.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Join this path with a segment.
    pub fn join(&self, segment: &str) -> Self {
        let segment_normalized = segment.replace('\\', "/");
        let joined = if self.inner.ends_with('/') {
            format!("{}{}", self.inner, segment_normalized)
        } else {
            format!("{}/{}", self.inner, segment_normalized)
        };
        Self { inner: joined }
    }

    /// Get the file name component.
    pub fn file_name(&self) -> Option<&str> {
        let trimmed = self.inner.trim_end_matches('/');
        trimmed.rsplit('/').next().filter(|name| !name.is_empty())
    }

    /// Get the file name without its final extension.
    pub fn file_stem(&self) -> Option<&str> {
        let name = self.file_name()?;
        match name.rfind('.') {
            Some(idx) if idx > 0 => Some(&name[..idx]),
            _ => Some(name),
        }
    }

    /// Get the extension if present.
    pub fn extension(&self) -> Option<&str> {
        self.file_name().and_then(|name| {
            let idx = name.rfind('.')?;
            if idx == 0 {
                None
            } else {
                Some(&name[idx + 1..])
            }
        })
    }

    /// Check the extension, ignoring ASCII case (`Foo.SLN` has extension `sln`).
    pub fn has_extension(&self, extension: &str) -> bool {
        let wanted = extension.trim_start_matches('.');
        self.extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case(wanted))
    }

    /// Check the file name, ignoring ASCII case.
    pub fn has_file_name(&self, name: &str) -> bool {
        self.file_name()
            .is_some_and(|own| own.eq_ignore_ascii_case(name))
    }
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<&str> for NormalizedPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NormalizedPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<PathBuf> for NormalizedPath {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}

impl From<&Path> for NormalizedPath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}

impl From<NormalizedPath> for String {
    fn from(p: NormalizedPath) -> Self {
        p.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_stem_strips_only_last_extension() {
        let path = NormalizedPath::new("C:\\src\\Alloy.Site.sln");
        assert_eq!(path.file_stem(), Some("Alloy.Site"));
    }

    #[test]
    fn file_stem_keeps_dotfiles() {
        let path = NormalizedPath::new("/repo/.gitignore");
        assert_eq!(path.file_stem(), Some(".gitignore"));
    }

    #[test]
    fn has_extension_ignores_case_and_leading_dot() {
        let path = NormalizedPath::new("/repo/Alloy.SLN");
        assert!(path.has_extension("sln"));
        assert!(path.has_extension(".sln"));
        assert!(!path.has_extension("csproj"));
    }

    #[test]
    fn absolutize_blank_uses_base() {
        let path = NormalizedPath::absolutize("  ", "/work");
        assert_eq!(path.as_str(), "/work");
    }

    #[test]
    fn serde_round_trips_through_string() {
        let path: NormalizedPath = serde_json::from_str(r#""a\\b""#).unwrap();
        assert_eq!(path.as_str(), "a/b");
        assert_eq!(serde_json::to_string(&path).unwrap(), r#""a/b""#);
    }
}
