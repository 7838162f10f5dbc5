//! Target .NET framework version from the project manifest

use super::{WebProject, load_manifest};
use crate::config::ResolverConfig;
use crate::error::ResolveError;
use deploy_fs::Probe;

/// Read `<TargetFrameworkVersion>` (e.g. `v4.5`) as a decimal number.
pub fn resolve<P: Probe + ?Sized>(
    probe: &P,
    config: &ResolverConfig,
    web: &WebProject,
    requested: Option<f64>,
) -> Result<f64, ResolveError> {
    if let Some(version) = requested {
        return Ok(version);
    }

    let (path, manifest) = load_manifest(probe, config, web)?;
    let raw = manifest
        .target_framework_version()
        .ok_or_else(|| ResolveError::FrameworkVersionMissing { path: path.clone() })?;

    let version = parse_version(raw).ok_or_else(|| ResolveError::MalformedFrameworkVersion {
        path: path.clone(),
        value: raw.to_string(),
    })?;
    tracing::debug!(%path, version, "Framework version from project manifest");
    Ok(version)
}

/// Parse `v4.5` or `4.5` as `4.5`.
///
/// Only plain decimals are accepted: three-part versions such as `4.7.2`,
/// trailing garbage, exponents and `inf`/`NaN` are rejected.
pub fn parse_version(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    let number = raw.strip_prefix(['v', 'V']).unwrap_or(raw);

    let is_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    let (whole, fraction) = match number.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (number, None),
    };
    if !is_digits(whole) || !fraction.is_none_or(is_digits) {
        return None;
    }
    number.parse().ok()
}
