//! Site generation.
//!
//! Turns one authenticated request into one persisted draft [`Site`]:
//!
//! ```text
//! validate → organization → colors → copy → render → slug + persist
//! ```
//!
//! Every step before the final insert is read-only apart from the
//! organization upsert, which is idempotent. A failure anywhere aborts the
//! request and leaves no site row behind. Logo color extraction is the only
//! failure that is absorbed (see [`ColorResolver`]).
//!
//! ## Request validation
//!
//! | Field | Rule |
//! |-------|------|
//! | `templateId` | one of `t1`..`t7` |
//! | `brandName` | at least 1 character |
//! | `industry` | at least 1 character |
//! | `description` | at least 10 characters |
//! | `logoUrl`, `ctaUrl` | empty/absent, or an absolute `http(s)` URL |
//! | `preferredColors.*` | `#RRGGBB` when present |

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use url::Url;

use crate::auth::Identity;
use crate::copywriter::{CopyError, CopyGenerator, CopyRequest};
use crate::palette::{ColorResolver, HexColor, PartialPalette};
use crate::slug;
use crate::store::{NewSite, StoreError, StoreHandle};
use crate::templates;
use crate::types::{BrandConfig, Site, TemplateId};

pub const MIN_DESCRIPTION_CHARS: usize = 10;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("invalid {field}: {message}")]
    Validation { field: &'static str, message: String },
    #[error("unsupported template {0:?}")]
    UnsupportedTemplate(String),
    #[error("failed to create organization: {0}")]
    Organization(#[source] StoreError),
    #[error("failed to create site: {0}")]
    Persist(#[source] StoreError),
    #[error("copy generation failed: {0}")]
    Copy(#[from] CopyError),
}

impl GenerateError {
    fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }
}

/// Body of `POST /api/generate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSiteRequest {
    pub template_id: String,
    pub brand_name: String,
    pub industry: String,
    #[serde(default)]
    pub logo_url: Option<String>,
    pub description: String,
    #[serde(default)]
    pub cta_url: Option<String>,
    #[serde(default)]
    pub preferred_colors: Option<PreferredColors>,
}

/// Raw color preferences as submitted; parsed into a [`PartialPalette`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreferredColors {
    #[serde(default)]
    pub primary: Option<String>,
    #[serde(default)]
    pub secondary: Option<String>,
    #[serde(default)]
    pub accent: Option<String>,
}

/// A request that passed every field rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidRequest {
    pub template: TemplateId,
    pub brand_name: String,
    pub industry: String,
    pub logo_url: Option<String>,
    pub description: String,
    pub cta_url: Option<String>,
    pub preferences: PartialPalette,
}

impl CreateSiteRequest {
    pub fn validate(self) -> Result<ValidRequest, GenerateError> {
        let template = self
            .template_id
            .parse::<TemplateId>()
            .map_err(|_| GenerateError::UnsupportedTemplate(self.template_id.clone()))?;

        let brand_name = required("brandName", &self.brand_name, 1)?;
        let industry = required("industry", &self.industry, 1)?;
        let description = required("description", &self.description, MIN_DESCRIPTION_CHARS)?;
        let logo_url = optional_url("logoUrl", self.logo_url.as_deref())?;
        let cta_url = optional_url("ctaUrl", self.cta_url.as_deref())?;

        let colors = self.preferred_colors.unwrap_or_default();
        let preferences = PartialPalette {
            primary: optional_color("preferredColors.primary", colors.primary.as_deref())?,
            secondary: optional_color("preferredColors.secondary", colors.secondary.as_deref())?,
            accent: optional_color("preferredColors.accent", colors.accent.as_deref())?,
        };

        Ok(ValidRequest {
            template,
            brand_name,
            industry,
            logo_url,
            description,
            cta_url,
            preferences,
        })
    }
}

fn required(field: &'static str, value: &str, min_chars: usize) -> Result<String, GenerateError> {
    let value = value.trim();
    if value.chars().count() < min_chars {
        let message = if min_chars == 1 {
            "is required".to_string()
        } else {
            format!("must be at least {min_chars} characters")
        };
        return Err(GenerateError::invalid(field, message));
    }
    Ok(value.to_string())
}

/// Empty → `None`; otherwise an absolute `http`/`https` URL.
pub fn optional_url(field: &'static str, value: Option<&str>) -> Result<Option<String>, GenerateError> {
    let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    let url = Url::parse(value).map_err(|e| GenerateError::invalid(field, e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(Some(value.to_string())),
        other => Err(GenerateError::invalid(
            field,
            format!("unsupported scheme {other:?}"),
        )),
    }
}

fn optional_color(
    field: &'static str,
    value: Option<&str>,
) -> Result<Option<HexColor>, GenerateError> {
    value
        .map(|v| HexColor::parse(v).map_err(|e| GenerateError::invalid(field, e.to_string())))
        .transpose()
}

/// Runs the generation pipeline against its collaborators.
#[derive(Clone)]
pub struct SiteGenerator {
    store: StoreHandle,
    resolver: Arc<ColorResolver>,
    copy: Arc<dyn CopyGenerator>,
}

impl SiteGenerator {
    pub fn new(store: StoreHandle, resolver: ColorResolver, copy: Arc<dyn CopyGenerator>) -> Self {
        Self {
            store,
            resolver: Arc::new(resolver),
            copy,
        }
    }

    pub fn store(&self) -> &StoreHandle {
        &self.store
    }

    /// Generate and persist a draft site for `identity`.
    pub async fn generate(
        &self,
        identity: &Identity,
        request: CreateSiteRequest,
    ) -> Result<Site, GenerateError> {
        let request = request.validate()?;
        tracing::info!(
            user = %identity.user_id,
            template = %request.template,
            brand = %request.brand_name,
            "generating site"
        );

        let owner = identity.user_id.clone();
        let org_name = identity.organization_name();
        let org = self
            .store
            .call(move |store| store.ensure_organization(&owner, &org_name))
            .await
            .map_err(GenerateError::Organization)?;
        tracing::debug!(org = %org.id, "organization resolved");

        let colors = self
            .resolver
            .resolve(request.logo_url.as_deref(), &request.preferences)
            .await;
        tracing::debug!(?colors, "palette resolved");

        let copy = self
            .copy
            .generate(&CopyRequest {
                brand_name: request.brand_name.clone(),
                industry: request.industry.clone(),
                description: request.description.clone(),
            })
            .await?;
        tracing::debug!(headline = %copy.headline, "copy generated");

        let brand = BrandConfig {
            brand_name: request.brand_name,
            logo_url: request.logo_url,
            colors,
            copy: copy.marketing_copy(),
            industry: Some(request.industry),
            description: Some(request.description),
            cta_url: request.cta_url,
        };
        let page = templates::render(request.template, &brand);
        let base_slug = slug::slugify(&brand.brand_name);

        let new = NewSite {
            org_id: org.id,
            renderer_id: request.template,
            brand,
            page,
        };
        let site = self
            .store
            .call(move |store| store.insert_site(&new, &base_slug))
            .await
            .map_err(GenerateError::Persist)?;

        tracing::info!(site = %site.id, slug = %site.slug, "site created");
        Ok(site)
    }
}
