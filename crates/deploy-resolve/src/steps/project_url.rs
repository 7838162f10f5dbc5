//! Base URL of the site

use super::{WebProject, load_manifest, read_text};
use crate::config::ResolverConfig;
use crate::documents::CmsConfig;
use crate::error::ResolveError;
use deploy_fs::Probe;

/// Determine the site URL.
///
/// Tried in order, each only when the previous yields nothing:
/// 1. `requested`, given a scheme if it has none (no disk access)
/// 2. `<CustomServerUrl>` in the project manifest
/// 3. the `siteUrl` of the CMS site settings, read from `episerver.config`
///    anywhere under the web project, else from its `web.config`
///
/// A missing manifest fails the run rather than skipping to step 3.
pub fn resolve<P: Probe + ?Sized>(
    probe: &P,
    config: &ResolverConfig,
    web: &WebProject,
    requested: Option<&str>,
) -> Result<String, ResolveError> {
    if let Some(url) = requested {
        return Ok(with_scheme(url, &config.url_scheme));
    }

    let (manifest_path, manifest) = load_manifest(probe, config, web)?;
    if let Some(url) = manifest.custom_server_url() {
        tracing::debug!(path = %manifest_path, url, "Project URL from project manifest");
        return Ok(url.to_string());
    }

    let path = probe
        .find_file(web.dir(), &config.cms_config)
        .or_else(|| probe.file_named(web.dir(), &config.web_config))
        .ok_or_else(|| ResolveError::CmsConfigNotFound {
            dir: web.dir().clone(),
            cms_config: config.cms_config.clone(),
            web_config: config.web_config.clone(),
        })?;

    let cms = CmsConfig::parse(&read_text(probe, &path)?)
        .map_err(|err| ResolveError::malformed(&path, err))?;
    let settings = cms
        .site_settings()
        .ok_or_else(|| ResolveError::SiteSettingsMissing { path: path.clone() })?;
    let url = settings
        .site_url()
        .ok_or_else(|| ResolveError::SiteUrlMissing { path: path.clone() })?;

    tracing::debug!(%path, url, "Project URL from CMS site settings");
    Ok(url.to_string())
}

/// Prefix `scheme` unless `url` already starts with `http://`, `https://`
/// or `scheme` itself (any case).
pub fn with_scheme(url: &str, scheme: &str) -> String {
    let lower = url.to_ascii_lowercase();
    let own_scheme = scheme.to_ascii_lowercase();
    let has_scheme = ["http://", "https://", own_scheme.as_str()]
        .into_iter()
        .any(|prefix| lower.starts_with(prefix));
    if has_scheme {
        url.to_string()
    } else {
        format!("{scheme}{url}")
    }
}
