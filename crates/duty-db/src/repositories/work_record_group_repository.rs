use crate::Result;

use duty_core::WorkRecordGroup;

use sqlx::{Row, SqliteConnection};

pub struct WorkRecordGroupRepository;

impl WorkRecordGroupRepository {
    pub async fn load_all(conn: &mut SqliteConnection) -> Result<Vec<WorkRecordGroup>> {
        let rows = sqlx::query(
            r#"
              SELECT id, title
              FROM work_record_groups
              ORDER BY position ASC
              "#,
        )
        .fetch_all(&mut *conn)
        .await?;

        rows.into_iter()
            .map(|row| {
                Ok(WorkRecordGroup::new(
                    row.try_get::<String, _>("id")?,
                    row.try_get::<String, _>("title")?,
                ))
            })
            .collect()
    }

    pub async fn replace_all(
        conn: &mut SqliteConnection,
        groups: &[WorkRecordGroup],
    ) -> Result<()> {
        sqlx::query("DELETE FROM work_record_groups")
            .execute(&mut *conn)
            .await?;

        for (position, group) in groups.iter().enumerate() {
            sqlx::query(
                r#"
                  INSERT INTO work_record_groups (id, title, position)
                  VALUES (?, ?, ?)
                  "#,
            )
            .bind(&group.id)
            .bind(&group.title)
            .bind(position as i64)
            .execute(&mut *conn)
            .await?;
        }

        Ok(())
    }
}
