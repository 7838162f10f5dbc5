//! NuGet package manifests (`packages.config`)

use super::DocumentError;
use super::xml::Element;

/// One `<package>` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageReference {
    pub id: String,
    pub version: String,
}

impl PackageReference {
    /// Leading numeric component of the version (`11` for `11.3.0`).
    /// A zero major version counts as no version.
    pub fn major_version(&self) -> Option<u32> {
        let major: u32 = self.version.trim().split('.').next()?.parse().ok()?;
        (major > 0).then_some(major)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageManifest {
    packages: Vec<PackageReference>,
}

impl PackageManifest {
    /// Entries missing either `id` or `version` are skipped.
    pub fn parse(content: &str) -> Result<Self, DocumentError> {
        let root = Element::parse(content)?;
        if root.name() != "packages" {
            return Err(DocumentError::UnexpectedRoot {
                expected: "packages",
                found: root.name().to_string(),
            });
        }

        let packages = root
            .select(&["package"])
            .into_iter()
            .filter_map(|package| {
                Some(PackageReference {
                    id: package.attribute("id")?.to_string(),
                    version: package.attribute("version")?.to_string(),
                })
            })
            .collect();

        Ok(Self { packages })
    }

    pub fn packages(&self) -> &[PackageReference] {
        &self.packages
    }

    pub fn find(&self, id: &str) -> Option<&PackageReference> {
        self.packages.iter().find(|package| package.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn finds_package_by_exact_id() {
        let manifest = PackageManifest::parse(
            r#"<?xml version="1.0" encoding="utf-8"?>
<packages>
  <package id="EPiServer.CMS.Core" version="11.3.0" targetFramework="net461" />
  <package id="EPiServer.CMS.Core.Extras" version="2.0.0" targetFramework="net461" />
  <package version="1.0.0" />
</packages>"#,
        )
        .unwrap();

        assert_eq!(manifest.packages().len(), 2);
        let core = manifest.find("EPiServer.CMS.Core").unwrap();
        assert_eq!(core.version, "11.3.0");
        assert!(manifest.find("episerver.cms.core").is_none());
    }

    #[rstest]
    #[case("11.3.0", Some(11))]
    #[case("7.5.394.2", Some(7))]
    #[case("12", Some(12))]
    #[case("0.9.0", None)]
    #[case("x.1", None)]
    #[case("", None)]
    fn major_version(#[case] version: &str, #[case] expected: Option<u32>) {
        let package = PackageReference {
            id: "EPiServer.CMS.Core".into(),
            version: version.into(),
        };
        assert_eq!(package.major_version(), expected);
    }

    #[test]
    fn rejects_other_documents() {
        assert!(PackageManifest::parse("<configuration />").is_err());
    }
}
