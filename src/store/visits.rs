use rusqlite::params;
use uuid::Uuid;

use super::error::Result;
use super::{Store, timestamp};
use crate::types::Visit;

impl Store {
    /// Append one public page view.
    pub fn record_visit(&self, visit: &Visit) -> Result<()> {
        self.conn().execute(
            "INSERT INTO visits (id, site_id, ts, source, user_agent)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                visit.id.to_string(),
                visit.site_id.to_string(),
                timestamp(&visit.ts),
                visit.source,
                visit.user_agent,
            ],
        )?;
        Ok(())
    }

    pub fn count_visits(&self, site_id: Uuid) -> Result<u64> {
        let count: i64 = self.conn().query_row(
            "SELECT COUNT(*) FROM visits WHERE site_id = ?1",
            params![site_id.to_string()],
            |row| row.get(0),
        )?;
        Ok(count as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{new_site, sample_brand};
    use crate::types::TemplateId;
    use chrono::Utc;

    #[test]
    fn visits_are_appended() {
        let store = Store::open_in_memory().unwrap();
        let org = store.ensure_organization("u1", "Org").unwrap();
        let site = store
            .insert_site(&new_site(org.id, TemplateId::T1, sample_brand()), "acme")
            .unwrap();
        assert_eq!(store.count_visits(site.id).unwrap(), 0);

        for agent in [Some("curl/8"), None] {
            store
                .record_visit(&Visit {
                    id: Uuid::new_v4(),
                    site_id: site.id,
                    ts: Utc::now(),
                    source: "direct".to_string(),
                    user_agent: agent.map(str::to_string),
                })
                .unwrap();
        }
        assert_eq!(store.count_visits(site.id).unwrap(), 2);
    }

    #[test]
    fn visit_requires_existing_site() {
        let store = Store::open_in_memory().unwrap();
        let result = store.record_visit(&Visit {
            id: Uuid::new_v4(),
            site_id: Uuid::new_v4(),
            ts: Utc::now(),
            source: "direct".to_string(),
            user_agent: None,
        });
        assert!(result.is_err());
    }
}
