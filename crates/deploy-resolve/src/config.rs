//! Resolver configuration and caller-supplied settings
//!
//! Both load from TOML, JSON or YAML through [`deploy_fs::ConfigStore`];
//! every field is optional in the file.

use crate::Result;
use crate::context::Context;
use deploy_fs::{ConfigStore, NormalizedPath};
use serde::{Deserialize, Deserializer, Serialize};

/// File names, extensions and identifiers the discovery steps look for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Extension of the solution file in the root directory
    pub solution_extension: String,
    /// Extension of the project manifest in the web project directory
    pub manifest_extension: String,
    /// Substring (any case) that marks a subdirectory as the web project
    pub web_project_marker: String,
    pub web_config: String,
    pub cms_config: String,
    pub package_manifest: String,
    pub platform_assembly: String,
    /// Package id whose version gives the CMS major version
    pub core_package_id: String,
    /// Prefixed to a requested URL that has no scheme
    pub url_scheme: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            solution_extension: "sln".to_string(),
            manifest_extension: "csproj".to_string(),
            web_project_marker: "Web".to_string(),
            web_config: "web.config".to_string(),
            cms_config: "episerver.config".to_string(),
            package_manifest: "packages.config".to_string(),
            platform_assembly: "EPiServer.dll".to_string(),
            core_package_id: "EPiServer.CMS.Core".to_string(),
            url_scheme: "http://".to_string(),
        }
    }
}

impl ResolverConfig {
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        Ok(ConfigStore::new().load(path)?)
    }
}

/// Values the caller already knows, as read from a settings file.
///
/// Non-positive version numbers mean "unset", matching the command-line
/// convention of passing `-1` or `0` for "discover it".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub current_directory: Option<String>,
    pub project_name: Option<String>,
    pub web_project_name: Option<String>,
    pub project_url: Option<String>,
    #[serde(deserialize_with = "positive_decimal")]
    pub framework_version: Option<f64>,
    #[serde(deserialize_with = "positive_integer")]
    pub episerver_version: Option<u32>,
}

impl Settings {
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        Ok(ConfigStore::new().load(path)?)
    }
}

impl From<Settings> for Context {
    fn from(settings: Settings) -> Self {
        let mut context = Context::new(settings.current_directory.unwrap_or_default());
        context.project_name = settings.project_name;
        context.web_project_name = settings.web_project_name;
        context.project_url = settings.project_url;
        context.framework_version = settings.framework_version;
        context.episerver_version = settings.episerver_version;
        context
    }
}

fn positive_decimal<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.filter(|v| *v > 0.0))
}

fn positive_integer<'de, D>(deserializer: D) -> std::result::Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<i64>::deserialize(deserializer)?
        .filter(|v| *v > 0)
        .and_then(|v| u32::try_from(v).ok()))
}
