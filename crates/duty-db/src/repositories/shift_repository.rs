use crate::Result;

use duty_core::ShiftSection;

use sqlx::{Row, SqliteConnection};

/// Persistence for shift-section metadata. The sections' task lists live in
/// the tasks table and are attached by the board store.
pub struct ShiftRepository;

impl ShiftRepository {
    pub async fn load_all(conn: &mut SqliteConnection) -> Result<Vec<ShiftSection>> {
        let rows = sqlx::query(
            r#"
              SELECT id, title, time_range, color
              FROM shift_sections
              ORDER BY position ASC
              "#,
        )
        .fetch_all(&mut *conn)
        .await?;

        rows.into_iter()
            .map(|row| {
                Ok(ShiftSection::new(
                    row.try_get::<String, _>("id")?,
                    row.try_get::<String, _>("title")?,
                    row.try_get::<String, _>("time_range")?,
                    row.try_get::<String, _>("color")?,
                ))
            })
            .collect()
    }

    pub async fn replace_all(
        conn: &mut SqliteConnection,
        sections: &[ShiftSection],
    ) -> Result<()> {
        sqlx::query("DELETE FROM shift_sections")
            .execute(&mut *conn)
            .await?;

        for (position, section) in sections.iter().enumerate() {
            sqlx::query(
                r#"
                  INSERT INTO shift_sections (id, title, time_range, color, position)
                  VALUES (?, ?, ?, ?, ?)
                  "#,
            )
            .bind(&section.id)
            .bind(&section.title)
            .bind(&section.time_range)
            .bind(&section.color)
            .bind(position as i64)
            .execute(&mut *conn)
            .await?;
        }

        Ok(())
    }
}
