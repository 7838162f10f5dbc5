//! CMS site configuration (`episerver.config` or `web.config`)

use super::DocumentError;
use super::xml::Element;

const SITE_SETTINGS: &[&str] = &["sites", "site", "siteSettings"];

/// The site section of an EPiServer configuration file.
///
/// `episerver.config` has `<episerver>` as its root; in `web.config` the
/// same section sits under `<configuration>`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CmsConfig {
    site_settings: Option<SiteSettings>,
}

/// The first `<siteSettings>` element of the first configured site.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteSettings {
    site_url: Option<String>,
}

impl CmsConfig {
    pub fn parse(content: &str) -> Result<Self, DocumentError> {
        let root = Element::parse(content)?;
        let section = match root.name() {
            "episerver" => Some(&root),
            "configuration" => root.first(&["episerver"]),
            other => {
                return Err(DocumentError::UnexpectedRoot {
                    expected: "episerver",
                    found: other.to_string(),
                });
            }
        };

        let site_settings = section
            .and_then(|episerver| episerver.first(SITE_SETTINGS))
            .map(|element| SiteSettings {
                site_url: element
                    .attribute("siteUrl")
                    .filter(|url| !url.trim().is_empty())
                    .map(str::to_string),
            });

        Ok(Self { site_settings })
    }

    pub fn site_settings(&self) -> Option<&SiteSettings> {
        self.site_settings.as_ref()
    }
}

impl SiteSettings {
    pub fn site_url(&self) -> Option<&str> {
        self.site_url.as_deref()
    }
}
