//! Shared types used across all pipeline stages.
//!
//! [`BrandConfig`] is the single input every renderer sees. [`Site`],
//! [`Organization`] and [`Visit`] are the persisted records; they are
//! serialized to JSON by the API in camelCase.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

use crate::palette::Palette;

/// Fully resolved brand input to a template renderer.
///
/// Built by the orchestrator after color resolution and copy generation.
/// Renderers trust every field; they never validate or default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandConfig {
    pub brand_name: String,
    /// Absent → templates render no logo element at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    pub colors: Palette,
    pub copy: MarketingCopy,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Absent → the primary action is a no-op (demo mode).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_url: Option<String>,
}

impl BrandConfig {
    /// Document title shared by every template: `"{brand} - {headline}"`.
    pub fn page_title(&self) -> String {
        format!("{} - {}", self.brand_name, self.copy.headline)
    }
}

/// Headline, subheadline and call-to-action label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketingCopy {
    pub headline: String,
    pub subheadline: String,
    pub cta: String,
}

/// Renderer output: a complete HTML document and the CSS embedded in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub html: String,
    pub css: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported template id {0:?}")]
pub struct UnknownTemplate(pub String);

/// The closed set of templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateId {
    T1,
    T2,
    T3,
    T4,
    T5,
    T6,
    T7,
}

impl TemplateId {
    pub const ALL: [TemplateId; 7] = [
        TemplateId::T1,
        TemplateId::T2,
        TemplateId::T3,
        TemplateId::T4,
        TemplateId::T5,
        TemplateId::T6,
        TemplateId::T7,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TemplateId::T1 => "t1",
            TemplateId::T2 => "t2",
            TemplateId::T3 => "t3",
            TemplateId::T4 => "t4",
            TemplateId::T5 => "t5",
            TemplateId::T6 => "t6",
            TemplateId::T7 => "t7",
        }
    }

    /// Identifier written to the `sites.template_id` column.
    ///
    /// The schema only admits `t1`..`t6`, so `t7` sites are stored under `t6`.
    /// The template that actually rendered the page is kept separately as
    /// `renderer_id`.
    pub fn storage_id(self) -> TemplateId {
        match self {
            TemplateId::T7 => TemplateId::T6,
            other => other,
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateId {
    type Err = UnknownTemplate;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TemplateId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownTemplate(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SiteStatus {
    Draft,
    Published,
}

impl SiteStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            SiteStatus::Draft => "draft",
            SiteStatus::Published => "published",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "draft" => Some(SiteStatus::Draft),
            "published" => Some(SiteStatus::Published),
            _ => None,
        }
    }
}

impl fmt::Display for SiteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A generated landing page as stored.
///
/// Brand fields are denormalized from the [`BrandConfig`] the page was
/// rendered from; `generated_html`/`generated_css` are the renderer output
/// verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    pub id: Uuid,
    pub org_id: Uuid,
    pub slug: String,
    /// Storage identifier, see [`TemplateId::storage_id`].
    pub template_id: TemplateId,
    /// Template that produced `generated_html`.
    pub renderer_id: TemplateId,
    pub logo_url: Option<String>,
    pub brand_name: String,
    pub industry: Option<String>,
    pub description: Option<String>,
    pub primary_color: String,
    pub secondary_color: String,
    pub accent_color: String,
    pub headline: String,
    pub subheadline: String,
    pub cta: String,
    pub cta_url: Option<String>,
    pub generated_html: String,
    pub generated_css: String,
    pub status: SiteStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Site {
    pub fn is_published(&self) -> bool {
        self.status == SiteStatus::Published
    }

    pub fn page_title(&self) -> String {
        format!("{} - {}", self.brand_name, self.headline)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: Uuid,
    pub owner_user_id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// One public page view. Written, never read by the generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visit {
    pub id: Uuid,
    pub site_id: Uuid,
    pub ts: DateTime<Utc>,
    pub source: String,
    pub user_agent: Option<String>,
}

/// Industries offered by the generation form. Free text is accepted too.
pub const INDUSTRIES: &[&str] = &[
    "Technology",
    "Healthcare",
    "Finance",
    "E-commerce",
    "Education",
    "Real Estate",
    "Food & Beverage",
    "Travel & Tourism",
    "Fitness & Wellness",
    "Entertainment",
    "Professional Services",
    "Non-profit",
    "Casino & Gaming",
    "Other",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_id_parses_all_known_ids() {
        for id in TemplateId::ALL {
            assert_eq!(id.as_str().parse::<TemplateId>().unwrap(), id);
        }
    }

    #[test]
    fn template_id_rejects_unknown() {
        let err = "t8".parse::<TemplateId>().unwrap_err();
        assert_eq!(err, UnknownTemplate("t8".to_string()));
        assert!("T1".parse::<TemplateId>().is_err());
        assert!("".parse::<TemplateId>().is_err());
    }

    #[test]
    fn t7_is_stored_as_t6() {
        assert_eq!(TemplateId::T7.storage_id(), TemplateId::T6);
        for id in &TemplateId::ALL[..6] {
            assert_eq!(id.storage_id(), *id);
        }
    }

    #[test]
    fn template_id_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&TemplateId::T3).unwrap(), r#""t3""#);
        let id: TemplateId = serde_json::from_str(r#""t7""#).unwrap();
        assert_eq!(id, TemplateId::T7);
    }

    #[test]
    fn site_status_roundtrip_through_str() {
        for status in [SiteStatus::Draft, SiteStatus::Published] {
            assert_eq!(SiteStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(SiteStatus::parse("archived"), None);
    }

    #[test]
    fn industries_list_ends_with_other() {
        assert_eq!(INDUSTRIES.len(), 14);
        assert_eq!(INDUSTRIES.last(), Some(&"Other"));
    }
}
