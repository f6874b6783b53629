use crate::Result;

use std::collections::BTreeMap;

use sqlx::{Row, SqliteConnection};

/// Checkbox state. Only checked keys are stored; absence means unchecked.
pub struct CheckedItemRepository;

impl CheckedItemRepository {
    pub async fn load_all(conn: &mut SqliteConnection) -> Result<BTreeMap<String, bool>> {
        let rows = sqlx::query("SELECT key FROM checked_items")
            .fetch_all(&mut *conn)
            .await?;

        let mut map = BTreeMap::new();
        for row in rows {
            map.insert(row.try_get("key")?, true);
        }
        Ok(map)
    }

    pub async fn replace_all(
        conn: &mut SqliteConnection,
        checked: &BTreeMap<String, bool>,
    ) -> Result<()> {
        sqlx::query("DELETE FROM checked_items")
            .execute(&mut *conn)
            .await?;

        for (key, value) in checked {
            if *value {
                Self::insert(conn, key).await?;
            }
        }
        Ok(())
    }

    /// Single-key fast path for checkbox toggles.
    pub async fn set(conn: &mut SqliteConnection, key: &str, checked: bool) -> Result<()> {
        if checked {
            Self::insert(conn, key).await
        } else {
            sqlx::query("DELETE FROM checked_items WHERE key = ?")
                .bind(key)
                .execute(&mut *conn)
                .await?;
            Ok(())
        }
    }

    /// Remove a batch of keys (clearing one shift window's checks).
    pub async fn remove_keys(conn: &mut SqliteConnection, keys: &[String]) -> Result<()> {
        for key in keys {
            sqlx::query("DELETE FROM checked_items WHERE key = ?")
                .bind(key)
                .execute(&mut *conn)
                .await?;
        }
        Ok(())
    }

    async fn insert(conn: &mut SqliteConnection, key: &str) -> Result<()> {
        sqlx::query("INSERT OR IGNORE INTO checked_items (key) VALUES (?)")
            .bind(key)
            .execute(&mut *conn)
            .await?;
        Ok(())
    }
}
