//! The filesystem seam used by discovery
//!
//! Every directory listing, existence check and file read a discovery step
//! performs goes through [`Probe`]. [`LocalProbe`] talks to the real disk;
//! tests wrap it to observe or forbid access.

use crate::{Error, NormalizedPath, Result, io};
use std::cell::Cell;
use std::fs;
use walkdir::{DirEntry, WalkDir};

/// Read-only view of a filesystem.
///
/// Listings are sorted by name so that "first match" is stable between runs.
/// Name comparisons in the provided methods ignore ASCII case.
pub trait Probe {
    /// Files directly inside `dir`.
    fn files(&self, dir: &NormalizedPath) -> Result<Vec<NormalizedPath>>;

    /// Subdirectories directly inside `dir`.
    fn dirs(&self, dir: &NormalizedPath) -> Result<Vec<NormalizedPath>>;

    fn is_dir(&self, path: &NormalizedPath) -> bool;

    fn read_text(&self, path: &NormalizedPath) -> Result<String>;

    fn read_bytes(&self, path: &NormalizedPath) -> Result<Vec<u8>>;

    /// Search the tree under `root` for a file called `file_name`.
    ///
    /// The shallowest match wins; ties go to the first in name order.
    fn find_file(&self, root: &NormalizedPath, file_name: &str) -> Option<NormalizedPath>;

    /// First file directly inside `dir` with the given extension.
    fn first_with_extension(
        &self,
        dir: &NormalizedPath,
        extension: &str,
    ) -> Result<Option<NormalizedPath>> {
        Ok(self
            .files(dir)?
            .into_iter()
            .find(|file| file.has_extension(extension)))
    }

    /// The file called `file_name` directly inside `dir`, if there is one.
    ///
    /// An unreadable directory counts as not containing the file.
    fn file_named(&self, dir: &NormalizedPath, file_name: &str) -> Option<NormalizedPath> {
        self.files(dir)
            .ok()?
            .into_iter()
            .find(|file| file.has_file_name(file_name))
    }
}

/// [`Probe`] backed by the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalProbe;

impl LocalProbe {
    pub fn new() -> Self {
        Self
    }

    fn entries(
        &self,
        dir: &NormalizedPath,
        keep: impl Fn(&fs::FileType) -> bool,
    ) -> Result<Vec<NormalizedPath>> {
        let native = dir.to_native();
        let mut entries = Vec::new();
        for entry in fs::read_dir(&native).map_err(|e| Error::io(&native, e))? {
            let entry = entry.map_err(|e| Error::io(&native, e))?;
            // Follow symlinks so a linked project directory still counts.
            let file_type = match fs::metadata(entry.path()) {
                Ok(meta) => meta.file_type(),
                Err(_) => continue,
            };
            if keep(&file_type) {
                entries.push(dir.join(&entry.file_name().to_string_lossy()));
            }
        }
        entries.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        Ok(entries)
    }
}

impl Probe for LocalProbe {
    fn files(&self, dir: &NormalizedPath) -> Result<Vec<NormalizedPath>> {
        self.entries(dir, |t| t.is_file())
    }

    fn dirs(&self, dir: &NormalizedPath) -> Result<Vec<NormalizedPath>> {
        self.entries(dir, |t| t.is_dir())
    }

    fn is_dir(&self, path: &NormalizedPath) -> bool {
        path.to_native().is_dir()
    }

    fn read_text(&self, path: &NormalizedPath) -> Result<String> {
        io::read_text(path)
    }

    fn read_bytes(&self, path: &NormalizedPath) -> Result<Vec<u8>> {
        io::read_bytes(path)
    }

    fn find_file(&self, root: &NormalizedPath, file_name: &str) -> Option<NormalizedPath> {
        let mut best: Option<(usize, NormalizedPath)> = None;
        // Nothing below the shallowest match so far can win.
        let depth_limit = Cell::new(usize::MAX);
        let walker = WalkDir::new(root.to_native())
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || (e.depth() <= depth_limit.get() && !is_ignored(e)));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::debug!(%root, %err, "Skipping unreadable entry");
                    continue;
                }
            };
            if !entry.file_type().is_file()
                || !entry
                    .file_name()
                    .to_string_lossy()
                    .eq_ignore_ascii_case(file_name)
            {
                continue;
            }
            if best.as_ref().is_none_or(|(depth, _)| entry.depth() < *depth) {
                depth_limit.set(entry.depth());
                best = Some((entry.depth(), NormalizedPath::new(entry.path())));
            }
        }

        best.map(|(_, path)| path)
    }
}

/// Directories that never hold a solution's own files: tool state, build
/// intermediates and front-end dependencies.
const IGNORED_DIRS: &[&str] = &[".git", ".vs", "node_modules", "obj"];

fn is_ignored(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && IGNORED_DIRS
            .iter()
            .any(|dir| entry.file_name().to_string_lossy().eq_ignore_ascii_case(dir))
}
