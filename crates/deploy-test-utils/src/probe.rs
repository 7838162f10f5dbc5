//! A [`Probe`] that counts every filesystem access.

use deploy_fs::{LocalProbe, NormalizedPath, Probe, Result};
use std::cell::Cell;

/// Wraps another probe and counts each call that reaches the filesystem.
///
/// Use for: asserting that a step short-circuited (override supplied, or the
/// run already failed) without touching the disk.
#[derive(Debug, Default)]
pub struct CountingProbe<P = LocalProbe> {
    inner: P,
    calls: Cell<usize>,
}

impl CountingProbe<LocalProbe> {
    pub fn new() -> Self {
        Self::wrap(LocalProbe::new())
    }
}

impl<P: Probe> CountingProbe<P> {
    pub fn wrap(inner: P) -> Self {
        Self {
            inner,
            calls: Cell::new(0),
        }
    }

    /// Number of filesystem calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn reset(&self) {
        self.calls.set(0);
    }

    fn tick(&self) {
        self.calls.set(self.calls.get() + 1);
    }
}

impl<P: Probe> Probe for CountingProbe<P> {
    fn files(&self, dir: &NormalizedPath) -> Result<Vec<NormalizedPath>> {
        self.tick();
        self.inner.files(dir)
    }

    fn dirs(&self, dir: &NormalizedPath) -> Result<Vec<NormalizedPath>> {
        self.tick();
        self.inner.dirs(dir)
    }

    fn is_dir(&self, path: &NormalizedPath) -> bool {
        self.tick();
        self.inner.is_dir(path)
    }

    fn read_text(&self, path: &NormalizedPath) -> Result<String> {
        self.tick();
        self.inner.read_text(path)
    }

    fn read_bytes(&self, path: &NormalizedPath) -> Result<Vec<u8>> {
        self.tick();
        self.inner.read_bytes(path)
    }

    fn find_file(&self, root: &NormalizedPath, file_name: &str) -> Option<NormalizedPath> {
        self.tick();
        self.inner.find_file(root, file_name)
    }
}
