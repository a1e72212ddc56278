//! Page Content Bundles
//!
//! Marketing pages ship their copy as JSON bundles under `static/content/`.
//! The frontend loads them lazily; the server only serves them.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SiteError};

/// Product name appended to every document title
pub const SITE_NAME: &str = "Hostline";

/// One content section of a page
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub heading: String,
    pub body: String,

    /// Optional bullet points rendered under the body
    #[serde(default)]
    pub points: Vec<String>,
}

/// A lazily loaded page bundle
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageContent {
    /// URL slug, also the bundle file name
    pub slug: String,

    /// Short title used for the document head
    pub title: String,

    /// Meta description
    pub description: String,

    /// Hero headline
    pub headline: String,

    /// Hero sub-line
    #[serde(default)]
    pub summary: String,

    #[serde(default)]
    pub sections: Vec<Section>,
}

/// Head tags for a page
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub path: String,
}

impl PageMeta {
    /// Title as shown in the browser tab
    pub fn document_title(&self) -> String {
        if self.title.is_empty() {
            SITE_NAME.to_string()
        } else {
            format!("{} | {}", self.title, SITE_NAME)
        }
    }
}

impl PageContent {
    /// Parse and validate a bundle
    pub fn from_json(json: &str) -> Result<Self> {
        let content: Self = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    /// Reject bundles that would render an empty page shell
    pub fn validate(&self) -> Result<()> {
        if self.slug.trim().is_empty() {
            return Err(SiteError::Content("bundle has no slug".into()));
        }
        if self.title.trim().is_empty() {
            return Err(SiteError::Content(format!("bundle '{}' has no title", self.slug)));
        }
        if let Some(idx) = self.sections.iter().position(|s| s.heading.trim().is_empty()) {
            return Err(SiteError::Content(format!(
                "bundle '{}' section {} has no heading",
                self.slug, idx
            )));
        }
        Ok(())
    }

    pub fn meta(&self) -> PageMeta {
        PageMeta {
            title: self.title.clone(),
            description: self.description.clone(),
            path: format!("/{}", self.slug),
        }
    }

    /// Bundle path relative to the site root
    pub fn bundle_path(slug: &str) -> String {
        format!("/content/{slug}.json")
    }
}
