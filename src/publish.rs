//! Publication and retrieval of generated sites.
//!
//! Everything after generation goes through [`Publisher`]:
//!
//! - owner-scoped reads ([`Publisher::get_site`], [`Publisher::list_sites`]);
//! - the one status transition, `draft → published` ([`Publisher::publish`]);
//! - the public page by slug, which records a [`Visit`] per view;
//! - static package export.
//!
//! A site owned by someone else is reported exactly like a missing site, and
//! a draft is invisible on the public route. Callers cannot tell the cases
//! apart.
//!
//! ## Export package
//!
//! ```text
//! <dir>/
//! ├── index.html   # generated_html, verbatim
//! ├── styles.css   # generated_css, verbatim
//! └── site.json    # slug, brand, template ids, status, sha256 per file
//! ```

use chrono::Utc;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;
use thiserror::Error;
use uuid::Uuid;

use crate::auth::Identity;
use crate::store::{StoreError, StoreHandle};
use crate::types::{Site, SiteStatus, TemplateId, Visit};

/// Visit source recorded for every public page view.
pub const DIRECT_SOURCE: &str = "direct";

#[derive(Error, Debug)]
pub enum PublishError {
    #[error("Site not found")]
    NotFound,
    #[error(transparent)]
    Store(StoreError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<StoreError> for PublishError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound => PublishError::NotFound,
            other => PublishError::Store(other),
        }
    }
}

/// Title and description a public page is indexed under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMetadata {
    pub title: String,
    pub description: Option<String>,
}

impl PageMetadata {
    pub fn for_site(site: &Site) -> Self {
        Self {
            title: site.page_title(),
            description: site.description.clone(),
        }
    }
}

/// A published page ready to serve.
#[derive(Debug, Clone)]
pub struct PublicPage {
    pub site_id: Uuid,
    pub html: String,
    /// Quoted SHA-256 of `html`, usable as an HTTP `ETag`.
    pub etag: String,
    pub metadata: PageMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageFile {
    pub name: &'static str,
    #[serde(skip)]
    pub contents: String,
    pub sha256: String,
}

impl PackageFile {
    fn new(name: &'static str, contents: String) -> Self {
        let sha256 = sha256_hex(contents.as_bytes());
        Self {
            name,
            contents,
            sha256,
        }
    }
}

/// Manifest written as `site.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    pub slug: String,
    pub brand_name: String,
    pub template_id: TemplateId,
    pub renderer_id: TemplateId,
    pub status: SiteStatus,
    pub files: Vec<PackageFile>,
}

/// Static export of one site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    pub index: PackageFile,
    pub styles: PackageFile,
    pub manifest: PackageManifest,
}

impl Package {
    /// File name used when the page alone is downloaded.
    pub fn download_name(&self) -> String {
        format!("{}-landing-page.html", self.manifest.slug)
    }
}

pub fn sha256_hex(bytes: &[u8]) -> String {
    format!("{:x}", Sha256::digest(bytes))
}

/// Build the export package for `site`. Pure: stored output is copied as-is.
pub fn export_package(site: &Site) -> Package {
    let index = PackageFile::new("index.html", site.generated_html.clone());
    let styles = PackageFile::new("styles.css", site.generated_css.clone());
    let manifest = PackageManifest {
        slug: site.slug.clone(),
        brand_name: site.brand_name.clone(),
        template_id: site.template_id,
        renderer_id: site.renderer_id,
        status: site.status,
        files: vec![index.clone(), styles.clone()],
    };
    Package {
        index,
        styles,
        manifest,
    }
}

/// Write `package` into `dir`, creating it if needed.
pub fn write_package(package: &Package, dir: &Path) -> Result<(), PublishError> {
    fs::create_dir_all(dir)?;
    for file in [&package.index, &package.styles] {
        fs::write(dir.join(file.name), &file.contents)?;
    }
    let manifest = serde_json::to_string_pretty(&package.manifest)?;
    fs::write(dir.join("site.json"), manifest)?;
    Ok(())
}

/// Owner-scoped site access and the public route.
#[derive(Clone)]
pub struct Publisher {
    store: StoreHandle,
}

impl Publisher {
    pub fn new(store: StoreHandle) -> Self {
        Self { store }
    }

    pub async fn get_site(&self, identity: &Identity, id: Uuid) -> Result<Site, PublishError> {
        let owner = identity.user_id.clone();
        Ok(self
            .store
            .call(move |store| store.get_owned_site(id, &owner))
            .await?)
    }

    /// Newest first.
    pub async fn list_sites(&self, identity: &Identity) -> Result<Vec<Site>, PublishError> {
        let owner = identity.user_id.clone();
        Ok(self
            .store
            .call(move |store| store.list_owned_sites(&owner))
            .await?)
    }

    /// Mark a site published. Publishing twice is a no-op.
    pub async fn publish(&self, identity: &Identity, id: Uuid) -> Result<Site, PublishError> {
        let owner = identity.user_id.clone();
        Ok(self
            .store
            .call(move |store| store.publish_site(id, &owner))
            .await?)
    }

    pub async fn export(&self, identity: &Identity, id: Uuid) -> Result<Package, PublishError> {
        let site = self.get_site(identity, id).await?;
        tracing::debug!(site = %site.id, "exporting site");
        Ok(export_package(&site))
    }

    /// Serve a published site and record the view.
    ///
    /// A visit that cannot be written is logged; the page is served anyway.
    pub async fn public_page(
        &self,
        slug: &str,
        user_agent: Option<String>,
    ) -> Result<PublicPage, PublishError> {
        let slug = slug.to_string();
        let site = self
            .store
            .call(move |store| store.get_published_site(&slug))
            .await?;

        let visit = Visit {
            id: Uuid::new_v4(),
            site_id: site.id,
            ts: Utc::now(),
            source: DIRECT_SOURCE.to_string(),
            user_agent,
        };
        if let Err(e) = self.store.call(move |store| store.record_visit(&visit)).await {
            tracing::warn!(site = %site.id, error = %e, "failed to record visit");
        }

        let etag = format!("\"{}\"", sha256_hex(site.generated_html.as_bytes()));
        Ok(PublicPage {
            site_id: site.id,
            metadata: PageMetadata::for_site(&site),
            html: site.generated_html,
            etag,
        })
    }
}
