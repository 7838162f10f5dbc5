//! Error types for deploy-resolve
//!
//! [`Error`] covers loading settings and configuration files. Discovery
//! itself never returns `Error`: a step that cannot proceed produces a
//! [`ResolveError`], which the resolver records in the context.

use deploy_fs::NormalizedPath;
use serde::Serialize;
use std::fmt::Display;

/// Result type for deploy-resolve operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while loading settings or resolver configuration
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Filesystem or config parse error from deploy-fs
    #[error(transparent)]
    Fs(#[from] deploy_fs::Error),
}

/// The four ways discovery can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// An expected file or directory is absent
    MissingResource,
    /// Several candidates where exactly one is required
    AmbiguousResource,
    /// Text is present but does not parse as the expected type
    MalformedValue,
    /// A document is present but lacks the required element or attribute
    MissingElement,
}

/// Why a discovery step could not produce its value.
///
/// The `Display` text is the one-line diagnostic shown to the user,
/// naming the setting to supply where one would help.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ResolveError {
    #[error("Working directory is unavailable: {message}")]
    WorkingDirectory { message: String },

    #[error("No solution file (*.{extension}) found in {dir}")]
    SolutionNotFound {
        dir: NormalizedPath,
        extension: String,
    },

    #[error("No web project found in {dir}; set `web_project_name` to the web project directory")]
    WebProjectNotFound { dir: NormalizedPath },

    #[error(
        "Several web projects found in {dir}; set `web_project_name` to one of: {}",
        .candidates.join(", ")
    )]
    AmbiguousWebProject {
        dir: NormalizedPath,
        candidates: Vec<String>,
    },

    #[error("Web project directory {path} does not exist")]
    WebProjectMissing { path: NormalizedPath },

    #[error("No project file (*.{extension}) found in {dir}")]
    ManifestNotFound {
        dir: NormalizedPath,
        extension: String,
    },

    #[error("Neither {cms_config} nor {web_config} found in {dir}; set `project_url` explicitly")]
    CmsConfigNotFound {
        dir: NormalizedPath,
        cms_config: String,
        web_config: String,
    },

    #[error("No <siteSettings> element in {path}; set `project_url` explicitly")]
    SiteSettingsMissing { path: NormalizedPath },

    #[error("<siteSettings> in {path} has no siteUrl attribute; set `project_url` explicitly")]
    SiteUrlMissing { path: NormalizedPath },

    #[error("No <TargetFrameworkVersion> element in {path}; set `framework_version` explicitly")]
    FrameworkVersionMissing { path: NormalizedPath },

    #[error(
        "Target framework version '{value}' in {path} is not a decimal number; set `framework_version` explicitly"
    )]
    MalformedFrameworkVersion { path: NormalizedPath, value: String },

    #[error("Could not read {path}: {message}")]
    Unreadable { path: NormalizedPath, message: String },

    #[error("Could not parse {path}: {message}")]
    MalformedDocument { path: NormalizedPath, message: String },
}

impl ResolveError {
    pub fn unreadable(path: &NormalizedPath, cause: impl Display) -> Self {
        Self::Unreadable {
            path: path.clone(),
            message: cause.to_string(),
        }
    }

    pub fn malformed(path: &NormalizedPath, cause: impl Display) -> Self {
        Self::MalformedDocument {
            path: path.clone(),
            message: cause.to_string(),
        }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            Self::WorkingDirectory { .. }
            | Self::SolutionNotFound { .. }
            | Self::WebProjectNotFound { .. }
            | Self::WebProjectMissing { .. }
            | Self::ManifestNotFound { .. }
            | Self::CmsConfigNotFound { .. }
            | Self::Unreadable { .. } => FailureKind::MissingResource,
            Self::AmbiguousWebProject { .. } => FailureKind::AmbiguousResource,
            Self::SiteSettingsMissing { .. }
            | Self::SiteUrlMissing { .. }
            | Self::FrameworkVersionMissing { .. } => FailureKind::MissingElement,
            Self::MalformedFrameworkVersion { .. } | Self::MalformedDocument { .. } => {
                FailureKind::MalformedValue
            }
        }
    }
}
