//! The five discovery steps.
//!
//! Each step is a function taking exactly the resolved inputs it depends
//! on plus the caller's override for its own field. A positive or non-blank
//! override short-circuits discovery (the project name step excepted; see
//! [`project_name::resolve`]).

pub mod framework_version;
pub mod platform_version;
pub mod project_name;
pub mod project_url;
pub mod web_project;

pub use web_project::WebProject;

use crate::config::ResolverConfig;
use crate::documents::ProjectManifest;
use crate::error::ResolveError;
use deploy_fs::{NormalizedPath, Probe};

/// Read a file, turning I/O failure into a missing-resource failure.
fn read_text<P: Probe + ?Sized>(probe: &P, path: &NormalizedPath) -> Result<String, ResolveError> {
    probe
        .read_text(path)
        .map_err(|err| ResolveError::unreadable(path, err))
}

/// Locate and parse the project manifest inside the web project.
fn load_manifest<P: Probe + ?Sized>(
    probe: &P,
    config: &ResolverConfig,
    web: &WebProject,
) -> Result<(NormalizedPath, ProjectManifest), ResolveError> {
    let not_found = || ResolveError::ManifestNotFound {
        dir: web.dir().clone(),
        extension: config.manifest_extension.clone(),
    };
    let path = probe
        .first_with_extension(web.dir(), &config.manifest_extension)
        .map_err(|err| ResolveError::unreadable(web.dir(), err))?
        .ok_or_else(not_found)?;

    let manifest =
        ProjectManifest::parse(&read_text(probe, &path)?).map_err(|err| ResolveError::malformed(&path, err))?;
    tracing::debug!(%path, "Parsed project manifest");
    Ok((path, manifest))
}
