use chrono::Utc;
use rusqlite::{ErrorCode, params};
use thiserror::Error;
use uuid::Uuid;

use super::error::{Result, not_found};
use super::{Store, conversion_error, timestamp, timestamp_column, uuid_column};
use crate::slug;
use crate::types::{BrandConfig, RenderedPage, Site, SiteStatus, TemplateId};

/// Everything needed to write a freshly rendered site.
#[derive(Debug, Clone)]
pub struct NewSite {
    pub org_id: Uuid,
    /// The template that rendered `page`. Stored as-is in `renderer_id`; the
    /// `template_id` column gets [`TemplateId::storage_id`].
    pub renderer_id: TemplateId,
    pub brand: BrandConfig,
    pub page: RenderedPage,
}

const SITE_COLUMNS: &str = "s.id, s.org_id, s.slug, s.template_id, s.renderer_id, s.logo_url,
     s.brand_name, s.industry, s.description, s.primary_color, s.secondary_color,
     s.accent_color, s.headline, s.subheadline, s.cta, s.cta_url, s.generated_html,
     s.generated_css, s.status, s.created_at, s.updated_at";

impl Store {
    /// Insert a draft site under the first free slug derived from `base_slug`.
    ///
    /// Uniqueness is decided by the `sites.slug` UNIQUE index. The base is
    /// tried first; after a conflict the insert jumps straight past the
    /// highest `base-N` already stored.
    pub fn insert_site(&self, new: &NewSite, base_slug: &str) -> Result<Site> {
        let now = Utc::now();
        let id = Uuid::new_v4();
        let brand = &new.brand;

        let mut attempt = 1;
        loop {
            let slug = slug::candidate(base_slug, attempt);
            let result = self.conn().execute(
                "INSERT INTO sites (id, org_id, slug, template_id, renderer_id, logo_url,
                     brand_name, industry, description, primary_color, secondary_color,
                     accent_color, headline, subheadline, cta, cta_url, generated_html,
                     generated_css, status, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15,
                     ?16, ?17, ?18, ?19, ?20, ?20)",
                params![
                    id.to_string(),
                    new.org_id.to_string(),
                    slug,
                    new.renderer_id.storage_id().as_str(),
                    new.renderer_id.as_str(),
                    brand.logo_url,
                    brand.brand_name,
                    brand.industry,
                    brand.description,
                    brand.colors.primary.as_str(),
                    brand.colors.secondary.as_str(),
                    brand.colors.accent.as_str(),
                    brand.copy.headline,
                    brand.copy.subheadline,
                    brand.copy.cta,
                    brand.cta_url,
                    new.page.html,
                    new.page.css,
                    SiteStatus::Draft.as_str(),
                    timestamp(&now),
                ],
            );
            match result {
                Ok(_) => {
                    tracing::debug!(%id, slug, attempt, "inserted site");
                    return self.get_site(id);
                }
                Err(e) if is_slug_conflict(&e) => {
                    let next = self.highest_slug_attempt(base_slug)?.max(attempt) + 1;
                    tracing::debug!(slug, next, "slug taken, skipping to next free suffix");
                    attempt = next;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Highest attempt number among stored slugs derived from `base_slug`.
    fn highest_slug_attempt(&self, base_slug: &str) -> Result<u32> {
        // Slugs only hold `[a-z0-9-]`, so the prefix needs no LIKE escaping.
        let mut stmt = self
            .conn()
            .prepare("SELECT slug FROM sites WHERE slug LIKE ?1 || '%'")?;
        let slugs = stmt.query_map(params![slug::candidate_prefix(base_slug)], |row| {
            row.get::<_, String>(0)
        })?;
        let mut highest = 0;
        for stored in slugs {
            if let Some(n) = slug::attempt_of(base_slug, &stored?) {
                highest = highest.max(n);
            }
        }
        Ok(highest)
    }

    pub fn get_site(&self, id: Uuid) -> Result<Site> {
        self.conn()
            .query_row(
                &format!("SELECT {SITE_COLUMNS} FROM sites s WHERE s.id = ?1"),
                params![id.to_string()],
                row_to_site,
            )
            .map_err(not_found)
    }

    /// Any-status lookup by slug, for operator tooling.
    pub fn get_site_by_slug(&self, slug: &str) -> Result<Site> {
        self.conn()
            .query_row(
                &format!("SELECT {SITE_COLUMNS} FROM sites s WHERE s.slug = ?1"),
                params![slug],
                row_to_site,
            )
            .map_err(not_found)
    }

    /// A site the identity owns through its organization.
    ///
    /// Sites of other owners are indistinguishable from missing ones.
    pub fn get_owned_site(&self, id: Uuid, owner_user_id: &str) -> Result<Site> {
        self.conn()
            .query_row(
                &format!(
                    "SELECT {SITE_COLUMNS} FROM sites s
                     JOIN organizations o ON o.id = s.org_id
                     WHERE s.id = ?1 AND o.owner_user_id = ?2"
                ),
                params![id.to_string(), owner_user_id],
                row_to_site,
            )
            .map_err(not_found)
    }

    /// All sites of the identity, newest first.
    pub fn list_owned_sites(&self, owner_user_id: &str) -> Result<Vec<Site>> {
        let mut stmt = self.conn().prepare(&format!(
            "SELECT {SITE_COLUMNS} FROM sites s
             JOIN organizations o ON o.id = s.org_id
             WHERE o.owner_user_id = ?1
             ORDER BY s.created_at DESC, s.rowid DESC"
        ))?;
        let rows = stmt.query_map(params![owner_user_id], row_to_site)?;

        let mut sites = Vec::new();
        for row in rows {
            sites.push(row?);
        }
        Ok(sites)
    }

    /// Public lookup: only published sites are visible.
    pub fn get_published_site(&self, slug: &str) -> Result<Site> {
        self.conn()
            .query_row(
                &format!("SELECT {SITE_COLUMNS} FROM sites s WHERE s.slug = ?1 AND s.status = ?2"),
                params![slug, SiteStatus::Published.as_str()],
                row_to_site,
            )
            .map_err(not_found)
    }

    /// Flip an owned draft to published. Already-published sites are returned
    /// unchanged; there is no way back to draft.
    pub fn publish_site(&self, id: Uuid, owner_user_id: &str) -> Result<Site> {
        let updated = self.conn().execute(
            "UPDATE sites SET status = ?3, updated_at = ?4
             WHERE id = ?1 AND status = ?5
               AND org_id IN (SELECT id FROM organizations WHERE owner_user_id = ?2)",
            params![
                id.to_string(),
                owner_user_id,
                SiteStatus::Published.as_str(),
                timestamp(&Utc::now()),
                SiteStatus::Draft.as_str(),
            ],
        )?;
        if updated > 0 {
            tracing::info!(%id, "site published");
        }
        self.get_owned_site(id, owner_user_id)
    }
}

fn is_slug_conflict(e: &rusqlite::Error) -> bool {
    match e {
        rusqlite::Error::SqliteFailure(err, Some(message)) => {
            err.code == ErrorCode::ConstraintViolation && message.contains("sites.slug")
        }
        _ => false,
    }
}

#[derive(Error, Debug)]
#[error("unknown site status {0:?}")]
struct UnknownStatus(String);

fn row_to_site(row: &rusqlite::Row<'_>) -> rusqlite::Result<Site> {
    let template_col = |idx: usize| -> rusqlite::Result<TemplateId> {
        let text: String = row.get(idx)?;
        text.parse().map_err(|e| conversion_error(idx, e))
    };
    let status: String = row.get(18)?;
    let status = SiteStatus::parse(&status).ok_or_else(|| conversion_error(18, UnknownStatus(status)))?;

    Ok(Site {
        id: uuid_column(row, 0)?,
        org_id: uuid_column(row, 1)?,
        slug: row.get(2)?,
        template_id: template_col(3)?,
        renderer_id: template_col(4)?,
        logo_url: row.get(5)?,
        brand_name: row.get(6)?,
        industry: row.get(7)?,
        description: row.get(8)?,
        primary_color: row.get(9)?,
        secondary_color: row.get(10)?,
        accent_color: row.get(11)?,
        headline: row.get(12)?,
        subheadline: row.get(13)?,
        cta: row.get(14)?,
        cta_url: row.get(15)?,
        generated_html: row.get(16)?,
        generated_css: row.get(17)?,
        status,
        created_at: timestamp_column(row, 19)?,
        updated_at: timestamp_column(row, 20)?,
    })
}
