use crate::Result;

use duty_core::WorkRecord;

use sqlx::{Row, SqliteConnection};

/// The flat, globally ordered work-record list.
pub struct WorkRecordRepository;

impl WorkRecordRepository {
    pub async fn load_all(conn: &mut SqliteConnection) -> Result<Vec<WorkRecord>> {
        let rows = sqlx::query(
            r#"
              SELECT id, title, content, link, group_id
              FROM work_records
              ORDER BY position ASC
              "#,
        )
        .fetch_all(&mut *conn)
        .await?;

        rows.into_iter()
            .map(|row| {
                Ok(WorkRecord {
                    id: row.try_get("id")?,
                    title: row.try_get("title")?,
                    content: row.try_get("content")?,
                    link: row.try_get("link")?,
                    group_id: row.try_get("group_id")?,
                })
            })
            .collect()
    }

    pub async fn replace_all(conn: &mut SqliteConnection, records: &[WorkRecord]) -> Result<()> {
        sqlx::query("DELETE FROM work_records")
            .execute(&mut *conn)
            .await?;

        for (position, record) in records.iter().enumerate() {
            sqlx::query(
                r#"
                  INSERT INTO work_records (id, position, title, content, link, group_id)
                  VALUES (?, ?, ?, ?, ?, ?)
                  "#,
            )
            .bind(&record.id)
            .bind(position as i64)
            .bind(&record.title)
            .bind(&record.content)
            .bind(&record.link)
            .bind(&record.group_id)
            .execute(&mut *conn)
            .await?;
        }

        Ok(())
    }
}
