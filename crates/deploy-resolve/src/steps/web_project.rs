//! Web project directory inside the root

use crate::config::ResolverConfig;
use crate::context::Root;
use crate::error::ResolveError;
use deploy_fs::{NormalizedPath, Probe};

/// Name used when the root directory is itself the web project.
pub const ROOT_PROJECT: &str = ".";

/// A web project directory known to exist.
///
/// Only [`resolve`] constructs one, so the steps that read the web project
/// cannot run before it has been found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebProject {
    name: String,
    dir: NormalizedPath,
}

impl WebProject {
    /// Directory name relative to the root, or `"."` for the root itself.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dir(&self) -> &NormalizedPath {
        &self.dir
    }
}

/// Determine the web project and check that its directory exists.
///
/// Without a `requested` name: a root holding `web.config` is its own web
/// project, otherwise exactly one subdirectory whose name contains the web
/// marker (any case) must exist.
pub fn resolve<P: Probe + ?Sized>(
    probe: &P,
    config: &ResolverConfig,
    root: &Root,
    requested: Option<&str>,
) -> Result<WebProject, ResolveError> {
    let name = match requested {
        Some(name) => name.to_string(),
        None => discover(probe, config, root)?,
    };

    // An absolute name replaces the root rather than extending it.
    let dir = if name == ROOT_PROJECT {
        root.path().clone()
    } else {
        NormalizedPath::absolutize(&name, root.path())
    };
    if !probe.is_dir(&dir) {
        return Err(ResolveError::WebProjectMissing { path: dir });
    }

    tracing::debug!(%dir, %name, "Resolved web project");
    Ok(WebProject { name, dir })
}

fn discover<P: Probe + ?Sized>(
    probe: &P,
    config: &ResolverConfig,
    root: &Root,
) -> Result<String, ResolveError> {
    let dir = root.path();
    if probe.file_named(dir, &config.web_config).is_some() {
        tracing::debug!(%dir, "Root directory holds {}", config.web_config);
        return Ok(ROOT_PROJECT.to_string());
    }

    let marker = config.web_project_marker.to_lowercase();
    let mut candidates: Vec<String> = probe
        .dirs(dir)
        .map_err(|err| ResolveError::unreadable(dir, err))?
        .iter()
        .filter_map(|sub| sub.file_name())
        .filter(|name| name.to_lowercase().contains(&marker))
        .map(str::to_string)
        .collect();

    match candidates.len() {
        0 => Err(ResolveError::WebProjectNotFound { dir: dir.clone() }),
        1 => Ok(candidates.remove(0)),
        _ => Err(ResolveError::AmbiguousWebProject {
            dir: dir.clone(),
            candidates,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FailureKind;
    use deploy_fs::LocalProbe;
    use deploy_test_utils::TestSolution;
    use deploy_test_utils::documents;
    use pretty_assertions::assert_eq;

    fn run(solution: &TestSolution, requested: Option<&str>) -> Result<WebProject, ResolveError> {
        let root = Root::resolve(&solution.root_path(), "/");
        resolve(&LocalProbe, &ResolverConfig::default(), &root, requested)
    }

    #[test]
    fn single_web_directory() {
        let solution = TestSolution::new()
            .with_dir("Foo.Web")
            .with_dir("Foo.Core");
        let web = run(&solution, None).unwrap();
        assert_eq!(web.name(), "Foo.Web");
        assert_eq!(web.dir(), &solution.root_path().join("Foo.Web"));
    }

    #[test]
    fn marker_match_ignores_case() {
        let solution = TestSolution::new().with_dir("alloy.website");
        assert_eq!(run(&solution, None).unwrap().name(), "alloy.website");
    }

    #[test]
    fn root_with_web_config_is_the_web_project() {
        let solution = TestSolution::new()
            .with_file("Web.config", documents::web_config())
            .with_dir("Foo.Web");
        let web = run(&solution, None).unwrap();
        assert_eq!(web.name(), ".");
        assert_eq!(web.dir(), &solution.root_path());
    }

    #[test]
    fn several_candidates_are_ambiguous() {
        let solution = TestSolution::new().with_dir("Foo.Web").with_dir("Foo.Web2");
        let err = run(&solution, None).unwrap_err();
        assert_eq!(err.kind(), FailureKind::AmbiguousResource);
        match err {
            ResolveError::AmbiguousWebProject { candidates, .. } => {
                assert_eq!(candidates, vec!["Foo.Web", "Foo.Web2"]);
            }
            other => panic!("expected AmbiguousWebProject, got {other:?}"),
        }
    }

    #[test]
    fn no_candidates() {
        let solution = TestSolution::new().with_dir("Foo.Core");
        let err = run(&solution, None).unwrap_err();
        assert!(matches!(err, ResolveError::WebProjectNotFound { .. }));
        assert!(err.to_string().contains("web_project_name"));
    }

    #[test]
    fn files_matching_marker_are_not_candidates() {
        let solution = TestSolution::new().with_file("Web.sln", "");
        assert!(matches!(
            run(&solution, None),
            Err(ResolveError::WebProjectNotFound { .. })
        ));
    }

    #[test]
    fn requested_name_skips_discovery() {
        let solution = TestSolution::new()
            .with_dir("Foo.Web")
            .with_dir("Foo.Web2")
            .with_dir("src/Site");
        let web = run(&solution, Some("src/Site")).unwrap();
        assert_eq!(web.name(), "src/Site");
    }

    #[test]
    fn absolute_requested_name_replaces_root() {
        let solution = TestSolution::new().with_dir("Foo.Web");
        let elsewhere = TestSolution::new().with_dir("Site");
        let site = elsewhere.root_path().join("Site");

        let web = run(&solution, Some(site.as_str())).unwrap();

        assert_eq!(web.dir(), &site);
        assert_eq!(web.name(), site.as_str());
    }

    #[test]
    fn requested_name_must_exist() {
        let solution = TestSolution::new().with_dir("Foo.Web");
        let err = run(&solution, Some("Bar.Web")).unwrap_err();
        match err {
            ResolveError::WebProjectMissing { path } => {
                assert!(path.as_str().ends_with("/Bar.Web"));
            }
            other => panic!("expected WebProjectMissing, got {other:?}"),
        }
    }
}
