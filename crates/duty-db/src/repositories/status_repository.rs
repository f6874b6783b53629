use crate::Result;

use duty_core::StatusConfig;

use sqlx::{Row, SqliteConnection};

pub struct StatusRepository;

impl StatusRepository {
    pub async fn load_all(conn: &mut SqliteConnection) -> Result<Vec<StatusConfig>> {
        let rows = sqlx::query(
            r#"
              SELECT id, label, color, is_done
              FROM statuses
              ORDER BY position ASC
              "#,
        )
        .fetch_all(&mut *conn)
        .await?;

        rows.into_iter()
            .map(|row| {
                Ok(StatusConfig {
                    id: row.try_get("id")?,
                    label: row.try_get("label")?,
                    color: row.try_get("color")?,
                    is_done: row.try_get("is_done")?,
                })
            })
            .collect()
    }

    pub async fn replace_all(
        conn: &mut SqliteConnection,
        statuses: &[StatusConfig],
    ) -> Result<()> {
        sqlx::query("DELETE FROM statuses")
            .execute(&mut *conn)
            .await?;

        for (position, status) in statuses.iter().enumerate() {
            sqlx::query(
                r#"
                  INSERT INTO statuses (id, label, color, is_done, position)
                  VALUES (?, ?, ?, ?, ?)
                  "#,
            )
            .bind(&status.id)
            .bind(&status.label)
            .bind(&status.color)
            .bind(status.is_done)
            .bind(position as i64)
            .execute(&mut *conn)
            .await?;
        }

        Ok(())
    }

    pub async fn count(conn: &mut SqliteConnection) -> Result<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS n FROM statuses")
            .fetch_one(&mut *conn)
            .await?;
        Ok(row.try_get("n")?)
    }
}
