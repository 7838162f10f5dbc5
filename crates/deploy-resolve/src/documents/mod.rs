//! The three document shapes discovery reads.
//!
//! Each shape is a fixed record with explicitly pathed lookups rather than a
//! search for an element name anywhere in the tree. Element and attribute
//! names are matched by local name, so default namespaces (MSBuild,
//! EPiServer section schemas) do not get in the way.

mod cms_config;
mod manifest;
mod packages;
mod xml;

pub use cms_config::{CmsConfig, SiteSettings};
pub use manifest::ProjectManifest;
pub use packages::{PackageManifest, PackageReference};

/// Why a document could not be read into its shape.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("invalid XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("document has no root element")]
    Empty,

    #[error("element <{0}> is never closed")]
    Unclosed(String),

    #[error("expected <{expected}> as root element, found <{found}>")]
    UnexpectedRoot {
        expected: &'static str,
        found: String,
    },
}
