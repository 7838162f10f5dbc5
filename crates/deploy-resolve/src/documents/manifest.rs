//! MSBuild project files (`*.csproj`)

use super::DocumentError;
use super::xml::Element;

const TARGET_FRAMEWORK_VERSION: &[&str] = &["PropertyGroup", "TargetFrameworkVersion"];

const CUSTOM_SERVER_URL: &[&str] = &[
    "ProjectExtensions",
    "VisualStudio",
    "FlavorProperties",
    "WebProjectProperties",
    "CustomServerUrl",
];

/// The parts of a web application project file discovery cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectManifest {
    target_framework_version: Option<String>,
    custom_server_url: Option<String>,
}

impl ProjectManifest {
    pub fn parse(content: &str) -> Result<Self, DocumentError> {
        let root = Element::parse(content)?;
        if root.name() != "Project" {
            return Err(DocumentError::UnexpectedRoot {
                expected: "Project",
                found: root.name().to_string(),
            });
        }

        Ok(Self {
            target_framework_version: root
                .first(TARGET_FRAMEWORK_VERSION)
                .map(|element| element.text().to_string()),
            // Visual Studio writes an empty element when no custom server is set.
            custom_server_url: root
                .first(CUSTOM_SERVER_URL)
                .map(Element::text)
                .filter(|url| !url.is_empty())
                .map(str::to_string),
        })
    }

    /// Raw `<TargetFrameworkVersion>` text, e.g. `v4.6.1`.
    pub fn target_framework_version(&self) -> Option<&str> {
        self.target_framework_version.as_deref()
    }

    pub fn custom_server_url(&self) -> Option<&str> {
        self.custom_server_url.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROJECT: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<Project ToolsVersion="15.0" xmlns="http://schemas.microsoft.com/developer/msbuild/2003">
  <PropertyGroup>
    <Configuration Condition=" '$(Configuration)' == '' ">Debug</Configuration>
  </PropertyGroup>
  <PropertyGroup>
    <TargetFrameworkVersion>v4.6.1</TargetFrameworkVersion>
  </PropertyGroup>
  <ProjectExtensions>
    <VisualStudio>
      <FlavorProperties GUID="{349c5851-65df-11da-9384-00065b846f21}">
        <WebProjectProperties>
          <CustomServerUrl>http://alloy.local</CustomServerUrl>
        </WebProjectProperties>
      </FlavorProperties>
    </VisualStudio>
  </ProjectExtensions>
</Project>"#;

    #[test]
    fn reads_both_values_from_namespaced_project() {
        let manifest = ProjectManifest::parse(PROJECT).unwrap();
        assert_eq!(manifest.target_framework_version(), Some("v4.6.1"));
        assert_eq!(manifest.custom_server_url(), Some("http://alloy.local"));
    }

    #[test]
    fn empty_custom_server_url_counts_as_absent() {
        let manifest = ProjectManifest::parse(
            "<Project><ProjectExtensions><VisualStudio><FlavorProperties><WebProjectProperties>\
             <CustomServerUrl></CustomServerUrl>\
             </WebProjectProperties></FlavorProperties></VisualStudio></ProjectExtensions></Project>",
        )
        .unwrap();
        assert_eq!(manifest.custom_server_url(), None);
    }

    #[test]
    fn custom_server_url_outside_web_project_properties_is_ignored() {
        let manifest =
            ProjectManifest::parse("<Project><CustomServerUrl>http://stray</CustomServerUrl></Project>")
                .unwrap();
        assert_eq!(manifest.custom_server_url(), None);
    }

    #[test]
    fn rejects_other_documents() {
        let err = ProjectManifest::parse("<configuration />").unwrap_err();
        assert!(err.to_string().contains("<Project>"));
    }
}
