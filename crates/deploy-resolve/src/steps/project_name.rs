//! Project name from the solution file in the root directory

use crate::config::ResolverConfig;
use crate::context::Root;
use crate::error::ResolveError;
use deploy_fs::Probe;

/// Find the solution file and derive the project name from it.
///
/// The solution scan always runs, even when `requested` is set: a root
/// without a solution file fails the run, and the caller keeps its requested
/// name. With a solution present, `requested` wins over the file's stem.
/// Several solution files are not disambiguated; the first in name order is
/// used.
pub fn resolve<P: Probe + ?Sized>(
    probe: &P,
    config: &ResolverConfig,
    root: &Root,
    requested: Option<&str>,
) -> Result<String, ResolveError> {
    let dir = root.path();
    let solution = match probe.first_with_extension(dir, &config.solution_extension) {
        Ok(found) => found,
        Err(err) => {
            tracing::debug!(%dir, %err, "Could not list root directory");
            None
        }
    };
    let solution = solution.ok_or_else(|| ResolveError::SolutionNotFound {
        dir: dir.clone(),
        extension: config.solution_extension.clone(),
    })?;

    if let Some(name) = requested {
        tracing::debug!(%solution, name, "Using requested project name");
        return Ok(name.to_string());
    }

    let name = solution.file_stem().unwrap_or_default().to_string();
    tracing::debug!(%solution, %name, "Project name from solution file");
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use deploy_fs::LocalProbe;
    use deploy_test_utils::TestSolution;

    fn root_of(solution: &TestSolution) -> Root {
        Root::resolve(&solution.root_path(), "/")
    }

    #[test]
    fn name_is_solution_stem() {
        let solution = TestSolution::new().with_solution("Foo");
        let name = resolve(&LocalProbe, &ResolverConfig::default(), &root_of(&solution), None);
        assert_eq!(name.unwrap(), "Foo");
    }

    #[test]
    fn first_solution_in_name_order_wins() {
        let solution = TestSolution::new()
            .with_solution("Zeta")
            .with_solution("Alpha.Site");
        let name = resolve(&LocalProbe, &ResolverConfig::default(), &root_of(&solution), None);
        assert_eq!(name.unwrap(), "Alpha.Site");
    }

    #[test]
    fn requested_name_wins_over_stem() {
        let solution = TestSolution::new().with_solution("Foo");
        let name = resolve(
            &LocalProbe,
            &ResolverConfig::default(),
            &root_of(&solution),
            Some("Bar"),
        );
        assert_eq!(name.unwrap(), "Bar");
    }

    #[test]
    fn missing_solution_fails_even_with_requested_name() {
        let solution = TestSolution::new().with_file("README.md", "# Alloy");
        let err = resolve(
            &LocalProbe,
            &ResolverConfig::default(),
            &root_of(&solution),
            Some("Bar"),
        )
        .unwrap_err();
        assert!(matches!(err, ResolveError::SolutionNotFound { .. }));
    }

    #[test]
    fn missing_root_directory_is_a_missing_solution() {
        let solution = TestSolution::new();
        let root = Root::resolve(&solution.root_path().join("gone"), "/");
        let err = resolve(&LocalProbe, &ResolverConfig::default(), &root, None).unwrap_err();
        assert!(err.to_string().contains("gone"));
    }
}
