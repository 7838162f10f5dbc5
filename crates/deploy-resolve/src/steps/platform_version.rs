//! Installed CMS platform major version

use super::{WebProject, read_text};
use crate::assembly;
use crate::config::ResolverConfig;
use crate::context::Root;
use crate::documents::PackageManifest;
use crate::error::ResolveError;
use deploy_fs::Probe;

/// Find the CMS major version.
///
/// The platform assembly anywhere under the root is checked first, then the
/// core package entry in the web project's `packages.config`. Finding
/// neither is not a failure: the result is simply `None`. A
/// `packages.config` that cannot be read or parsed does fail.
pub fn resolve<P: Probe + ?Sized>(
    probe: &P,
    config: &ResolverConfig,
    root: &Root,
    web: &WebProject,
    requested: Option<u32>,
) -> Result<Option<u32>, ResolveError> {
    if let Some(version) = requested {
        return Ok(Some(version));
    }

    if let Some(major) = from_assembly(probe, config, root) {
        return Ok(Some(major));
    }

    let Some(path) = probe.file_named(web.dir(), &config.package_manifest) else {
        tracing::debug!(dir = %web.dir(), "No platform assembly or package manifest");
        return Ok(None);
    };
    let manifest = PackageManifest::parse(&read_text(probe, &path)?)
        .map_err(|err| ResolveError::malformed(&path, err))?;

    let major = manifest
        .find(&config.core_package_id)
        .and_then(|package| package.major_version());
    match major {
        Some(major) => tracing::debug!(%path, major, "Platform version from package manifest"),
        None => tracing::debug!(%path, package = %config.core_package_id, "Core package not listed"),
    }
    Ok(major)
}

fn from_assembly<P: Probe + ?Sized>(
    probe: &P,
    config: &ResolverConfig,
    root: &Root,
) -> Option<u32> {
    let path = probe.find_file(root.path(), &config.platform_assembly)?;
    let image = match probe.read_bytes(&path) {
        Ok(image) => image,
        Err(err) => {
            tracing::warn!(%path, %err, "Could not read platform assembly");
            return None;
        }
    };

    match assembly::file_version(&image) {
        Some(version) if version.major > 0 => {
            tracing::debug!(%path, %version, "Platform version from assembly");
            Some(u32::from(version.major))
        }
        Some(version) => {
            tracing::debug!(%path, %version, "Platform assembly has no major version");
            None
        }
        None => {
            tracing::debug!(%path, "Platform assembly has no version resource");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::steps::web_project;
    use deploy_fs::LocalProbe;
    use deploy_test_utils::{CountingProbe, TestSolution};

    fn run(solution: &TestSolution) -> Result<Option<u32>, ResolveError> {
        let config = ResolverConfig::default();
        let root = Root::resolve(&solution.root_path(), "/");
        let web = web_project::resolve(&LocalProbe, &config, &root, None).unwrap();
        resolve(&LocalProbe, &config, &root, &web, None)
    }

    #[test]
    fn major_from_package_manifest() {
        let solution = TestSolution::new().with_packages(
            "Foo.Web",
            &[
                ("EPiServer.Framework", "11.3.0"),
                ("EPiServer.CMS.Core", "11.3.0"),
            ],
        );
        assert_eq!(run(&solution).unwrap(), Some(11));
    }

    #[test]
    fn assembly_wins_over_package_manifest() {
        let solution = TestSolution::new()
            .with_packages("Foo.Web", &[("EPiServer.CMS.Core", "11.3.0")])
            .with_assembly("Foo.Web/bin", (7, 19, 2, 0));
        assert_eq!(run(&solution).unwrap(), Some(7));
    }

    #[test]
    fn assembly_is_found_anywhere_under_root() {
        let solution = TestSolution::new()
            .with_dir("Foo.Web")
            .with_assembly("packages/EPiServer.CMS.Core.10.10.4/lib/net45", (10, 10, 4, 0));
        assert_eq!(run(&solution).unwrap(), Some(10));
    }

    #[test]
    fn assembly_without_version_falls_back_to_packages() {
        let solution = TestSolution::new()
            .with_packages("Foo.Web", &[("EPiServer.CMS.Core", "9.12.2")])
            .with_file("Foo.Web/bin/EPiServer.dll", b"MZ not really a binary");
        assert_eq!(run(&solution).unwrap(), Some(9));
    }

    #[test]
    fn zero_major_versions_are_unresolved() {
        let solution = TestSolution::new()
            .with_packages("Foo.Web", &[("EPiServer.CMS.Core", "0.9.0")])
            .with_assembly("Foo.Web/bin", (0, 9, 0, 0));
        assert_eq!(run(&solution).unwrap(), None);
    }

    #[test]
    fn zero_major_assembly_falls_back_to_packages() {
        let solution = TestSolution::new()
            .with_packages("Foo.Web", &[("EPiServer.CMS.Core", "11.3.0")])
            .with_assembly("Foo.Web/bin", (0, 0, 0, 0));
        assert_eq!(run(&solution).unwrap(), Some(11));
    }

    #[test]
    fn nothing_found_is_unresolved_without_failure() {
        let solution = TestSolution::new().with_dir("Foo.Web");
        assert_eq!(run(&solution).unwrap(), None);
    }

    #[test]
    fn core_package_missing_from_manifest() {
        let solution =
            TestSolution::new().with_packages("Foo.Web", &[("EPiServer.Framework", "11.3.0")]);
        assert_eq!(run(&solution).unwrap(), None);
    }

    #[test]
    fn malformed_package_manifest_fails() {
        let solution = TestSolution::new().with_file("Foo.Web/packages.config", "<packages>");
        assert!(matches!(
            run(&solution),
            Err(ResolveError::MalformedDocument { .. })
        ));
    }

    #[test]
    fn requested_version_needs_no_disk_access() {
        let solution = TestSolution::new().with_dir("Foo.Web");
        let config = ResolverConfig::default();
        let root = Root::resolve(&solution.root_path(), "/");
        let web = web_project::resolve(&LocalProbe, &config, &root, None).unwrap();
        let probe = CountingProbe::new();

        assert_eq!(resolve(&probe, &config, &root, &web, Some(12)).unwrap(), Some(12));
        assert_eq!(probe.calls(), 0);
    }
}
