//! Shared test utilities for the pagesmith test suite.
//!
//! Builders for the brand and site fixtures most tests start from, plus stub
//! implementations of the external collaborators (logo extraction, copy
//! generation) so orchestration can be exercised without the network.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let brand = brand_with(|b| b.cta_url = Some("https://acme.test".into()));
//! let generator = site_generator(FixedCopy::default());
//! ```

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use uuid::Uuid;

use crate::auth::Identity;
use crate::copywriter::{CopyError, CopyGenerator, CopyRequest, GeneratedCopy};
use crate::generate::{CreateSiteRequest, SiteGenerator};
use crate::palette::{ColorResolver, ExtractError, Palette, PaletteExtractor, PartialPalette};
use crate::store::{NewSite, Store, StoreHandle};
use crate::templates;
use crate::types::{BrandConfig, MarketingCopy, TemplateId};

// =========================================================================
// Brand fixtures
// =========================================================================

/// "Acme" with stock colors, no logo and no CTA target.
pub fn sample_brand() -> BrandConfig {
    BrandConfig {
        brand_name: "Acme".to_string(),
        logo_url: None,
        colors: Palette::stock(),
        copy: MarketingCopy {
            headline: "Launch faster".to_string(),
            subheadline: "Ship in days, not months".to_string(),
            cta: "Start now".to_string(),
        },
        industry: Some("Technology".to_string()),
        description: Some("A sample business description long enough.".to_string()),
        cta_url: None,
    }
}

/// [`sample_brand`] with one tweak applied.
pub fn brand_with(edit: impl FnOnce(&mut BrandConfig)) -> BrandConfig {
    let mut brand = sample_brand();
    edit(&mut brand);
    brand
}

/// A ready-to-insert site rendered with `template`.
pub fn new_site(org_id: Uuid, template: TemplateId, brand: BrandConfig) -> NewSite {
    let page = templates::render(template, &brand);
    NewSite {
        org_id,
        renderer_id: template,
        brand,
        page,
    }
}

pub fn identity(user_id: &str) -> Identity {
    Identity {
        user_id: user_id.to_string(),
        email: Some(format!("{user_id}@acme.test")),
    }
}

/// Valid generation request for "Acme" on `t1`.
pub fn create_request() -> CreateSiteRequest {
    CreateSiteRequest {
        template_id: "t1".to_string(),
        brand_name: "Acme".to_string(),
        industry: "Technology".to_string(),
        logo_url: None,
        description: "A sample business description long enough.".to_string(),
        cta_url: None,
        preferred_colors: None,
    }
}

// =========================================================================
// Collaborator stubs
// =========================================================================

/// Extractor that always fails, counting how often it was asked.
#[derive(Default)]
pub struct FailingExtractor {
    pub calls: AtomicUsize,
}

#[async_trait]
impl PaletteExtractor for FailingExtractor {
    async fn extract(&self, _logo_url: &str) -> Result<PartialPalette, ExtractError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(ExtractError::Status(404))
    }
}

/// Extractor that returns the same colors for every logo.
pub struct FixedExtractor(pub PartialPalette);

#[async_trait]
impl PaletteExtractor for FixedExtractor {
    async fn extract(&self, _logo_url: &str) -> Result<PartialPalette, ExtractError> {
        Ok(self.0.clone())
    }
}

/// Copy generator answering "H" / "S" / "C".
pub struct FixedCopy {
    pub copy: GeneratedCopy,
    pub calls: AtomicUsize,
}

impl Default for FixedCopy {
    fn default() -> Self {
        Self {
            copy: GeneratedCopy {
                headline: "H".to_string(),
                subheadline: "S".to_string(),
                cta: "C".to_string(),
                seo_keywords: vec!["acme".to_string()],
            },
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl CopyGenerator for FixedCopy {
    async fn generate(&self, _request: &CopyRequest) -> Result<GeneratedCopy, CopyError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.copy.clone())
    }
}

/// Copy generator whose upstream is always down.
pub struct FailingCopy;

#[async_trait]
impl CopyGenerator for FailingCopy {
    async fn generate(&self, _request: &CopyRequest) -> Result<GeneratedCopy, CopyError> {
        Err(CopyError::Status {
            status: 503,
            body: "unavailable".to_string(),
        })
    }
}

/// Generator over a fresh in-memory store, failing extraction and `copy`.
pub fn site_generator(copy: impl CopyGenerator + 'static) -> SiteGenerator {
    let store = StoreHandle::new(Store::open_in_memory().unwrap());
    let resolver = ColorResolver::new(Palette::stock(), Arc::new(FailingExtractor::default()));
    SiteGenerator::new(store, resolver, Arc::new(copy))
}
