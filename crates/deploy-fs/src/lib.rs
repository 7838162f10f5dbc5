//! Read-only filesystem layer for deployment settings discovery
//!
//! Provides normalized paths, text and byte reading, the [`Probe`] seam
//! through which every discovery step touches the disk, and format-agnostic
//! configuration loading. Nothing in this crate writes to the filesystem.

pub mod config;
pub mod error;
pub mod io;
pub mod path;
pub mod probe;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use path::NormalizedPath;
pub use probe::{LocalProbe, Probe};
