//! The orchestrator running the discovery steps in order

use crate::config::ResolverConfig;
use crate::context::{Context, Root};
use crate::error::ResolveError;
use crate::steps::{framework_version, platform_version, project_name, project_url, web_project};
use deploy_fs::{LocalProbe, Probe};
use std::path::Path;

/// Runs project name, web project, project URL, framework version and
/// platform version discovery, in that order, over one [`Context`].
///
/// The first failing step stops the run: its [`ResolveError`] is recorded in
/// the context and logged, and every later field is left unresolved. A
/// context that has already failed is not probed at all.
#[derive(Debug, Default)]
pub struct Resolver<P = LocalProbe> {
    probe: P,
    config: ResolverConfig,
}

impl Resolver<LocalProbe> {
    pub fn new() -> Self {
        Self::with_probe(LocalProbe::new())
    }
}

impl<P: Probe> Resolver<P> {
    pub fn with_probe(probe: P) -> Self {
        Self {
            probe,
            config: ResolverConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub fn probe(&self) -> &P {
        &self.probe
    }

    /// Resolve with a relative or blank `current_directory` taken against
    /// the process working directory.
    pub fn resolve(&self, context: &mut Context) {
        match Root::from_current_dir(&context.current_directory) {
            Ok(root) => self.run_at(context, root),
            Err(err) => {
                // Nothing runs, so every field ends up unresolved.
                Requested::take(context);
                self.record(
                    context,
                    ResolveError::WorkingDirectory {
                        message: err.to_string(),
                    },
                );
            }
        }
    }

    /// Resolve with a relative or blank `current_directory` taken against
    /// `base`.
    pub fn resolve_in(&self, context: &mut Context, base: impl AsRef<Path>) {
        let root = Root::resolve(&context.current_directory, base);
        self.run_at(context, root);
    }

    fn run_at(&self, context: &mut Context, root: Root) {
        context.current_directory = root.path().clone();
        let requested = Requested::take(context);

        if let Some(failure) = context.failure() {
            tracing::debug!(%failure, "Context already failed; skipping discovery");
            return;
        }

        tracing::debug!(root = %root.path(), "Resolving deployment settings");
        if let Err(err) = self.run(context, &root, requested) {
            self.record(context, err);
        }
        tracing::info!(%context, "Resolution finished");
    }

    fn run(
        &self,
        context: &mut Context,
        root: &Root,
        requested: Requested,
    ) -> Result<(), ResolveError> {
        let (probe, config) = (&self.probe, &self.config);

        match project_name::resolve(probe, config, root, requested.project_name.as_deref()) {
            Ok(name) => context.project_name = Some(name),
            Err(err) => {
                context.project_name = requested.project_name;
                return Err(err);
            }
        }

        let web =
            web_project::resolve(probe, config, root, requested.web_project_name.as_deref())?;
        context.web_project_name = Some(web.name().to_string());

        context.project_url = Some(project_url::resolve(
            probe,
            config,
            &web,
            requested.project_url.as_deref(),
        )?);

        context.framework_version = Some(framework_version::resolve(
            probe,
            config,
            &web,
            requested.framework_version,
        )?);

        context.episerver_version =
            platform_version::resolve(probe, config, root, &web, requested.episerver_version)?;

        Ok(())
    }

    fn record(&self, context: &mut Context, failure: ResolveError) {
        tracing::warn!(kind = ?failure.kind(), "{failure}");
        context.fail(failure);
    }
}

/// Overrides lifted out of the context at the start of a run.
///
/// Taking them leaves every field unresolved, so a step that never runs
/// leaves its field `None`.
#[derive(Debug, Default)]
struct Requested {
    project_name: Option<String>,
    web_project_name: Option<String>,
    project_url: Option<String>,
    framework_version: Option<f64>,
    episerver_version: Option<u32>,
}

impl Requested {
    fn take(context: &mut Context) -> Self {
        fn non_blank(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.trim().is_empty())
        }

        Self {
            project_name: non_blank(context.project_name.take()),
            web_project_name: non_blank(context.web_project_name.take()),
            project_url: non_blank(context.project_url.take()),
            framework_version: context.framework_version.take().filter(|v| *v > 0.0),
            episerver_version: context.episerver_version.take().filter(|v| *v > 0),
        }
    }
}
