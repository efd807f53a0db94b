//! Fixtures shared by the integration tests: an in-memory app with stub
//! copy and extraction services and two known bearer tokens.

#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::Arc;

use pagesmith::api::{AppState, SharedState};
use pagesmith::auth::TokenAuthenticator;
use pagesmith::config::{AuthConfig, TokenEntry};
use pagesmith::copywriter::{CopyError, CopyGenerator, CopyRequest, GeneratedCopy};
use pagesmith::generate::{CreateSiteRequest, SiteGenerator};
use pagesmith::palette::{ColorResolver, ExtractError, Palette, PaletteExtractor, PartialPalette};
use pagesmith::publish::Publisher;
use pagesmith::store::{Store, StoreHandle};

pub const ALICE_TOKEN: &str = "alice-token";
pub const BOB_TOKEN: &str = "bob-token";

/// Answers "H" / "S" / "C" for every brand.
pub struct StubCopy;

#[async_trait]
impl CopyGenerator for StubCopy {
    async fn generate(&self, _request: &CopyRequest) -> Result<GeneratedCopy, CopyError> {
        Ok(GeneratedCopy {
            headline: "H".to_string(),
            subheadline: "S".to_string(),
            cta: "C".to_string(),
            seo_keywords: Vec::new(),
        })
    }
}

/// Logo fetches always fail, as if the network were down.
pub struct OfflineExtractor;

#[async_trait]
impl PaletteExtractor for OfflineExtractor {
    async fn extract(&self, _logo_url: &str) -> Result<PartialPalette, ExtractError> {
        Err(ExtractError::Status(503))
    }
}

pub fn auth_config() -> AuthConfig {
    AuthConfig {
        tokens: vec![
            TokenEntry {
                token: ALICE_TOKEN.to_string(),
                user_id: "alice".to_string(),
                email: Some("alice@acme.test".to_string()),
            },
            TokenEntry {
                token: BOB_TOKEN.to_string(),
                user_id: "bob".to_string(),
                email: None,
            },
        ],
    }
}

pub fn generator() -> SiteGenerator {
    let store = StoreHandle::new(Store::open_in_memory().unwrap());
    let resolver = ColorResolver::new(Palette::stock(), Arc::new(OfflineExtractor));
    SiteGenerator::new(store, resolver, Arc::new(StubCopy))
}

pub fn app_state() -> SharedState {
    let generator = generator();
    let publisher = Publisher::new(generator.store().clone());
    Arc::new(AppState {
        generator,
        publisher,
        auth: Arc::new(TokenAuthenticator::from_config(&auth_config())),
    })
}

pub fn request(template: &str, brand: &str) -> CreateSiteRequest {
    CreateSiteRequest {
        template_id: template.to_string(),
        brand_name: brand.to_string(),
        industry: "Technology".to_string(),
        logo_url: None,
        description: "We build developer tools for small teams.".to_string(),
        cta_url: None,
        preferred_colors: None,
    }
}
