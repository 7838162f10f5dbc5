//! The settings object threaded through one resolution run

use crate::error::ResolveError;
use deploy_fs::NormalizedPath;
use serde::{Serialize, Serializer};
use std::fmt;
use std::path::Path;

/// Caller-supplied overrides plus everything discovered so far.
///
/// Fields the caller fills in (non-blank strings, positive numbers) are
/// honored verbatim; the rest are discovered by [`Resolver`](crate::Resolver).
/// After a run, `None` means "unresolved".
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Context {
    /// Root directory to scan. Blank means the working directory; made
    /// absolute once at the start of a run.
    pub current_directory: NormalizedPath,
    pub project_name: Option<String>,
    pub web_project_name: Option<String>,
    pub project_url: Option<String>,
    pub framework_version: Option<f64>,
    /// CMS platform major version
    pub episerver_version: Option<u32>,
    #[serde(rename = "diagnostic", serialize_with = "serialize_failure")]
    failure: Option<ResolveError>,
}

impl Context {
    pub fn new(current_directory: impl AsRef<Path>) -> Self {
        Self {
            current_directory: NormalizedPath::new(current_directory),
            ..Self::default()
        }
    }

    pub fn with_project_name(mut self, name: impl Into<String>) -> Self {
        self.project_name = Some(name.into());
        self
    }

    pub fn with_web_project_name(mut self, name: impl Into<String>) -> Self {
        self.web_project_name = Some(name.into());
        self
    }

    pub fn with_project_url(mut self, url: impl Into<String>) -> Self {
        self.project_url = Some(url.into());
        self
    }

    pub fn with_framework_version(mut self, version: f64) -> Self {
        self.framework_version = Some(version);
        self
    }

    pub fn with_episerver_version(mut self, version: u32) -> Self {
        self.episerver_version = Some(version);
        self
    }

    /// True once any step has failed. Never reset within a run.
    pub fn exit_at_next_check(&self) -> bool {
        self.failure.is_some()
    }

    /// The failure that stopped discovery, if any.
    pub fn failure(&self) -> Option<&ResolveError> {
        self.failure.as_ref()
    }

    /// Record a failure. Only the first one sticks.
    pub fn fail(&mut self, failure: ResolveError) {
        if self.failure.is_none() {
            self.failure = Some(failure);
        }
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn or_dash<T: fmt::Display>(value: &Option<T>) -> String {
            value
                .as_ref()
                .map(ToString::to_string)
                .unwrap_or_else(|| "-".to_string())
        }

        write!(
            f,
            "dir={} project={} web={} url={} framework={} episerver={}",
            self.current_directory,
            or_dash(&self.project_name),
            or_dash(&self.web_project_name),
            or_dash(&self.project_url),
            or_dash(&self.framework_version),
            or_dash(&self.episerver_version),
        )?;
        if let Some(failure) = &self.failure {
            write!(f, " failed={:?}", failure.kind())?;
        }
        Ok(())
    }
}

fn serialize_failure<S: Serializer>(
    failure: &Option<ResolveError>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    failure
        .as_ref()
        .map(ToString::to_string)
        .serialize(serializer)
}

/// The absolute root directory of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Root(NormalizedPath);

impl Root {
    /// Resolve `dir` against an explicit `base`: blank means `base`,
    /// relative paths are joined onto it.
    pub fn resolve(dir: &NormalizedPath, base: impl AsRef<Path>) -> Self {
        Self(NormalizedPath::absolutize(dir, base))
    }

    /// Like [`Root::resolve`], using the process working directory as base.
    /// The working directory is only consulted when `dir` is not absolute.
    pub fn from_current_dir(dir: &NormalizedPath) -> deploy_fs::Result<Self> {
        if !dir.is_empty() && dir.to_native().is_absolute() {
            return Ok(Self(NormalizedPath::absolutize(dir, "")));
        }
        let cwd = std::env::current_dir()
            .map_err(|source| deploy_fs::Error::WorkingDirectory { source })?;
        Ok(Self::resolve(dir, cwd))
    }

    pub fn path(&self) -> &NormalizedPath {
        &self.0
    }
}
