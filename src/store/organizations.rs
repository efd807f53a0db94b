use chrono::Utc;
use rusqlite::params;
use uuid::Uuid;

use super::error::{Result, not_found};
use super::{Store, timestamp, timestamp_column, uuid_column};
use crate::types::Organization;

impl Store {
    /// Return the identity's organization, creating it on first use.
    ///
    /// Safe under concurrent first requests: the loser's insert is a no-op
    /// against the UNIQUE owner column, and both read back the same row.
    pub fn ensure_organization(&self, owner_user_id: &str, name: &str) -> Result<Organization> {
        let inserted = self.conn().execute(
            "INSERT INTO organizations (id, owner_user_id, name, created_at)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(owner_user_id) DO NOTHING",
            params![
                Uuid::new_v4().to_string(),
                owner_user_id,
                name,
                timestamp(&Utc::now()),
            ],
        )?;
        if inserted > 0 {
            tracing::info!(owner = owner_user_id, name, "created organization");
        }
        self.get_organization_by_owner(owner_user_id)
    }

    pub fn get_organization_by_owner(&self, owner_user_id: &str) -> Result<Organization> {
        self.conn()
            .query_row(
                "SELECT id, owner_user_id, name, created_at
                 FROM organizations WHERE owner_user_id = ?1",
                params![owner_user_id],
                row_to_organization,
            )
            .map_err(not_found)
    }
}

fn row_to_organization(row: &rusqlite::Row<'_>) -> rusqlite::Result<Organization> {
    Ok(Organization {
        id: uuid_column(row, 0)?,
        owner_user_id: row.get(1)?,
        name: row.get(2)?,
        created_at: timestamp_column(row, 3)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{StoreError, StoreHandle};

    #[test]
    fn ensure_creates_once() {
        let store = Store::open_in_memory().unwrap();
        let first = store.ensure_organization("u1", "jane's Organization").unwrap();
        let second = store.ensure_organization("u1", "other name").unwrap();
        assert_eq!(first, second);
        assert_eq!(second.name, "jane's Organization");

        let count: i64 = store
            .conn()
            .query_row("SELECT COUNT(*) FROM organizations", [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_first_requests_share_one_organization() {
        let handle = StoreHandle::new(Store::open_in_memory().unwrap());
        let ensure = |name: &'static str| {
            let handle = handle.clone();
            async move {
                handle
                    .call(move |store| store.ensure_organization("u1", name))
                    .await
            }
        };
        let (a, b, c) = tokio::join!(ensure("A"), ensure("B"), ensure("C"));
        let (a, b, c) = (a.unwrap(), b.unwrap(), c.unwrap());
        assert_eq!(a, b);
        assert_eq!(b, c);

        let count: i64 = handle
            .call(|store| {
                Ok(store
                    .conn()
                    .query_row("SELECT COUNT(*) FROM organizations", [], |r| r.get(0))?)
            })
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn organizations_are_per_owner() {
        let store = Store::open_in_memory().unwrap();
        let a = store.ensure_organization("a", "A").unwrap();
        let b = store.ensure_organization("b", "B").unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn missing_owner_is_not_found() {
        let store = Store::open_in_memory().unwrap();
        assert!(matches!(
            store.get_organization_by_owner("nobody"),
            Err(StoreError::NotFound)
        ));
    }
}
