use crate::{DbError, Result};

use duty_core::{HandoverItem, Task, TrashedItem};

use chrono::{DateTime, Utc};
use sqlx::{Row, SqliteConnection};

/// The archived-handover list. Timestamps are stored as unix milliseconds.
pub struct TrashRepository;

impl TrashRepository {
    pub async fn load_all(conn: &mut SqliteConnection) -> Result<Vec<TrashedItem>> {
        let rows = sqlx::query(
            r#"
              SELECT id, label, subtext, link, notes, status_id, trashed_at
              FROM trashed_items
              ORDER BY position ASC
              "#,
        )
        .fetch_all(&mut *conn)
        .await?;

        rows.into_iter()
            .map(|row| {
                let mut task = Task::new(
                    row.try_get::<String, _>("id")?,
                    row.try_get::<String, _>("label")?,
                );
                task.subtext = row.try_get("subtext")?;
                task.link = row.try_get("link")?;
                task.notes = row.try_get("notes")?;

                let status_id: String = row.try_get("status_id")?;
                let millis: i64 = row.try_get("trashed_at")?;
                let trashed_at = DateTime::<Utc>::from_timestamp_millis(millis)
                    .ok_or_else(|| DbError::decode(format!("invalid trashed_at: {millis}")))?;

                Ok(TrashedItem::new(
                    HandoverItem::new(task, status_id),
                    trashed_at,
                ))
            })
            .collect()
    }

    pub async fn replace_all(conn: &mut SqliteConnection, items: &[TrashedItem]) -> Result<()> {
        sqlx::query("DELETE FROM trashed_items")
            .execute(&mut *conn)
            .await?;

        for (position, trashed) in items.iter().enumerate() {
            let task = &trashed.item.task;
            sqlx::query(
                r#"
                  INSERT INTO trashed_items (
                      id, position, label, subtext, link, notes, status_id, trashed_at
                  ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
                  "#,
            )
            .bind(&task.id)
            .bind(position as i64)
            .bind(&task.label)
            .bind(&task.subtext)
            .bind(&task.link)
            .bind(&task.notes)
            .bind(&trashed.item.status_id)
            .bind(trashed.trashed_at.timestamp_millis())
            .execute(&mut *conn)
            .await?;
        }

        Ok(())
    }

    /// Drop entries archived at or before the cutoff. Returns the number of
    /// rows removed.
    pub async fn delete_older_than(
        conn: &mut SqliteConnection,
        cutoff: DateTime<Utc>,
    ) -> Result<u64> {
        let result = sqlx::query("DELETE FROM trashed_items WHERE trashed_at <= ?")
            .bind(cutoff.timestamp_millis())
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected())
    }
}
