use crate::Result;

use duty_core::{ContainerId, HandoverItem, Task};

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqliteConnection};

/// Persistence for the ordered task lists. Writes are whole-container
/// replacements: the stored list is a snapshot mirror of the in-memory one.
pub struct TaskRepository;

impl TaskRepository {
    pub async fn load_container(
        conn: &mut SqliteConnection,
        container: &ContainerId,
    ) -> Result<Vec<Task>> {
        let rows = sqlx::query(
            r#"
              SELECT id, label, subtext, link, notes, is_header,
                     show_on_days, show_in_months
              FROM tasks
              WHERE container = ?
              ORDER BY position ASC
              "#,
        )
        .bind(container.as_db_str())
        .fetch_all(&mut *conn)
        .await?;

        rows.into_iter().map(task_from_row).collect()
    }

    pub async fn load_handover(conn: &mut SqliteConnection) -> Result<Vec<HandoverItem>> {
        let rows = sqlx::query(
            r#"
              SELECT id, label, subtext, link, notes, is_header,
                     show_on_days, show_in_months, status_id
              FROM tasks
              WHERE container = ?
              ORDER BY position ASC
              "#,
        )
        .bind(ContainerId::Handover.as_db_str())
        .fetch_all(&mut *conn)
        .await?;

        rows.into_iter()
            .map(|row| {
                let status_id: Option<String> = row.try_get("status_id")?;
                let task = task_from_row(row)?;
                Ok(HandoverItem::new(task, status_id.unwrap_or_default()))
            })
            .collect()
    }

    pub async fn replace_container(
        conn: &mut SqliteConnection,
        container: &ContainerId,
        tasks: &[Task],
    ) -> Result<()> {
        let container_str = container.as_db_str();

        sqlx::query("DELETE FROM tasks WHERE container = ?")
            .bind(&container_str)
            .execute(&mut *conn)
            .await?;

        for (position, task) in tasks.iter().enumerate() {
            insert_task(conn, &container_str, position as i64, task, None).await?;
        }

        Ok(())
    }

    pub async fn replace_handover(
        conn: &mut SqliteConnection,
        items: &[HandoverItem],
    ) -> Result<()> {
        let container_str = ContainerId::Handover.as_db_str();

        sqlx::query("DELETE FROM tasks WHERE container = ?")
            .bind(&container_str)
            .execute(&mut *conn)
            .await?;

        for (position, item) in items.iter().enumerate() {
            insert_task(
                conn,
                &container_str,
                position as i64,
                &item.task,
                Some(&item.status_id),
            )
            .await?;
        }

        Ok(())
    }
}

async fn insert_task(
    conn: &mut SqliteConnection,
    container: &str,
    position: i64,
    task: &Task,
    status_id: Option<&str>,
) -> Result<()> {
    let show_on_days = encode_days(task.show_on_days.as_deref());
    let show_in_months = encode_days(task.show_in_months.as_deref());

    sqlx::query(
        r#"
          INSERT INTO tasks (
              id, container, position, label, subtext, link, notes,
              is_header, show_on_days, show_in_months, status_id
          ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
          "#,
    )
    .bind(&task.id)
    .bind(container)
    .bind(position)
    .bind(&task.label)
    .bind(&task.subtext)
    .bind(&task.link)
    .bind(&task.notes)
    .bind(task.is_header)
    .bind(show_on_days)
    .bind(show_in_months)
    .bind(status_id)
    .execute(&mut *conn)
    .await?;

    Ok(())
}

fn task_from_row(row: SqliteRow) -> Result<Task> {
    Ok(Task {
        id: row.try_get("id")?,
        label: row.try_get("label")?,
        subtext: row.try_get("subtext")?,
        link: row.try_get("link")?,
        notes: row.try_get("notes")?,
        is_header: row.try_get("is_header")?,
        show_on_days: decode_days(row.try_get("show_on_days")?)?,
        show_in_months: decode_days(row.try_get("show_in_months")?)?,
    })
}

fn encode_days(days: Option<&[u8]>) -> Option<String> {
    days.map(|values| {
        values
            .iter()
            .map(u8::to_string)
            .collect::<Vec<_>>()
            .join(",")
    })
}

fn decode_days(stored: Option<String>) -> Result<Option<Vec<u8>>> {
    match stored {
        None => Ok(None),
        Some(s) => s
            .split(',')
            .filter(|part| !part.is_empty())
            .map(|part| {
                part.parse::<u8>()
                    .map_err(|_| crate::DbError::decode(format!("invalid day/month list: {s:?}")))
            })
            .collect::<Result<Vec<u8>>>()
            .map(Some),
    }
}
