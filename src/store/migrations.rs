//! Schema migrations.
//!
//! Each migration is guarded by `PRAGMA user_version` so it runs exactly once
//! per database file.

use rusqlite::Connection;

use super::error::{Result, StoreError};

/// Current schema version. Bump this and add an `if current < N` block
/// whenever the schema changes.
const CURRENT_VERSION: u32 = 1;

/// v1: organizations, sites, visits.
///
/// `sites.template_id` only admits `t1`..`t6`; the template that rendered the
/// page is kept in `renderer_id`.
const V1_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS organizations (
    id            TEXT PRIMARY KEY NOT NULL,   -- UUID v4
    owner_user_id TEXT NOT NULL UNIQUE,
    name          TEXT NOT NULL,
    created_at    TEXT NOT NULL                -- RFC-3339
);

CREATE TABLE IF NOT EXISTS sites (
    id              TEXT PRIMARY KEY NOT NULL,
    org_id          TEXT NOT NULL REFERENCES organizations(id),
    slug            TEXT NOT NULL UNIQUE,
    template_id     TEXT NOT NULL CHECK (template_id IN ('t1', 't2', 't3', 't4', 't5', 't6')),
    renderer_id     TEXT NOT NULL CHECK (renderer_id IN ('t1', 't2', 't3', 't4', 't5', 't6', 't7')),
    logo_url        TEXT,
    brand_name      TEXT NOT NULL,
    industry        TEXT,
    description     TEXT,
    primary_color   TEXT NOT NULL,
    secondary_color TEXT NOT NULL,
    accent_color    TEXT NOT NULL,
    headline        TEXT NOT NULL,
    subheadline     TEXT NOT NULL,
    cta             TEXT NOT NULL,
    cta_url         TEXT,
    generated_html  TEXT NOT NULL,
    generated_css   TEXT NOT NULL,
    status          TEXT NOT NULL DEFAULT 'draft' CHECK (status IN ('draft', 'published')),
    created_at      TEXT NOT NULL,
    updated_at      TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_sites_org ON sites(org_id, created_at);

CREATE TABLE IF NOT EXISTS visits (
    id         TEXT PRIMARY KEY NOT NULL,
    site_id    TEXT NOT NULL REFERENCES sites(id),
    ts         TEXT NOT NULL,
    source     TEXT NOT NULL,
    user_agent TEXT
);

CREATE INDEX IF NOT EXISTS idx_visits_site ON visits(site_id);
"#;

/// Run all pending migrations against the open connection.
pub fn run_migrations(conn: &Connection) -> Result<()> {
    let current: u32 = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;

    tracing::debug!(
        current_version = current,
        target_version = CURRENT_VERSION,
        "checking database migrations"
    );

    if current < 1 {
        tracing::info!("applying migration v1 (organizations, sites, visits)");
        conn.execute_batch(V1_SQL)
            .map_err(|e| StoreError::Migration(e.to_string()))?;
        conn.pragma_update(None, "user_version", 1)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrations_are_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        run_migrations(&conn).unwrap();
        let version: u32 = conn
            .pragma_query_value(None, "user_version", |row| row.get(0))
            .unwrap();
        assert_eq!(version, CURRENT_VERSION);
    }

    #[test]
    fn schema_rejects_t7_as_storage_id() {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        conn.execute(
            "INSERT INTO organizations VALUES ('o', 'u', 'n', '2024-01-01T00:00:00Z')",
            [],
        )
        .unwrap();
        let insert = |template: &str| {
            conn.execute(
                "INSERT INTO sites (id, org_id, slug, template_id, renderer_id, brand_name,
                     primary_color, secondary_color, accent_color, headline, subheadline, cta,
                     generated_html, generated_css, created_at, updated_at)
                 VALUES (?1, 'o', ?1, ?2, 't7', 'b', '#000000', '#000000', '#000000',
                     'h', 's', 'c', '', '', 'now', 'now')",
                rusqlite::params![format!("site-{template}"), template],
            )
        };
        assert!(insert("t6").is_ok());
        assert!(insert("t7").is_err());
    }
}
