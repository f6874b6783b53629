use crate::repositories::checked_item_repository::CheckedItemRepository;
use crate::repositories::shift_repository::ShiftRepository;
use crate::repositories::status_repository::StatusRepository;
use crate::repositories::task_repository::TaskRepository;
use crate::repositories::trash_repository::TrashRepository;
use crate::repositories::work_record_group_repository::WorkRecordGroupRepository;
use crate::repositories::work_record_repository::WorkRecordRepository;
use crate::Result;

use duty_core::records::RecordSet;
use duty_core::{
    BoardState, ContainerId, HandoverItem, ShiftSection, StatusConfig, Task, TrashedItem,
    WorkRecord, WorkRecordGroup,
};

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

/// Snapshot persistence for the whole board.
///
/// Every operation reads one consistent snapshot and every save replaces the
/// affected sections inside a single transaction, which is what makes the
/// store last-write-wins: whatever a client (or a gesture handler) writes
/// simply overwrites the stored section.
#[derive(Clone)]
pub struct BoardStore {
    pool: SqlitePool,
}

impl BoardStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    // ---------------------------------------------------------------- loads

    pub async fn load_board(&self) -> Result<BoardState> {
        let mut conn = self.pool.acquire().await?;

        let basic_tasks = TaskRepository::load_container(&mut conn, &ContainerId::Basic).await?;
        let mut shift_sections = ShiftRepository::load_all(&mut conn).await?;
        for section in &mut shift_sections {
            section.tasks = TaskRepository::load_container(
                &mut conn,
                &ContainerId::Shift(section.id.clone()),
            )
            .await?;
        }
        let handover_items = TaskRepository::load_handover(&mut conn).await?;
        let status_configs = StatusRepository::load_all(&mut conn).await?;
        let checked_items = CheckedItemRepository::load_all(&mut conn).await?;
        let trashed_items = TrashRepository::load_all(&mut conn).await?;

        Ok(BoardState {
            basic_tasks,
            shift_sections,
            handover_items,
            status_configs,
            checked_items,
            trashed_items,
        })
    }

    pub async fn load_records(&self) -> Result<RecordSet> {
        let mut conn = self.pool.acquire().await?;
        let records = WorkRecordRepository::load_all(&mut conn).await?;
        let groups = WorkRecordGroupRepository::load_all(&mut conn).await?;
        Ok(RecordSet::new(records, groups))
    }

    // ---------------------------------------------------------------- saves

    /// Write the given containers from the board snapshot, all in one
    /// transaction: one state write per affected container, committed
    /// together.
    pub async fn save_containers(
        &self,
        board: &BoardState,
        containers: &[ContainerId],
    ) -> Result<()> {
        let mut tx = self.pool.begin().await?;
        for container in containers {
            match container {
                ContainerId::Basic => {
                    TaskRepository::replace_container(&mut tx, container, &board.basic_tasks)
                        .await?;
                }
                ContainerId::Handover => {
                    TaskRepository::replace_handover(&mut tx, &board.handover_items).await?;
                }
                ContainerId::Shift(id) => {
                    let tasks = board
                        .shift_section(id)
                        .map(|s| s.tasks.as_slice())
                        .unwrap_or_default();
                    TaskRepository::replace_container(&mut tx, container, tasks).await?;
                }
            }
        }
        tx.commit().await?;
        Ok(())
    }

    /// Replace the config section: basic tasks, shift sections, statuses.
    pub async fn save_config(
        &self,
        basic: &[Task],
        shifts: &[ShiftSection],
        statuses: &[StatusConfig],
    ) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        TaskRepository::replace_container(&mut tx, &ContainerId::Basic, basic).await?;

        // Drop task rows of shifts that no longer exist before rewriting the
        // shift list.
        let existing = ShiftRepository::load_all(&mut tx).await?;
        for section in &existing {
            if !shifts.iter().any(|s| s.id == section.id) {
                TaskRepository::replace_container(
                    &mut tx,
                    &ContainerId::Shift(section.id.clone()),
                    &[],
                )
                .await?;
            }
        }

        ShiftRepository::replace_all(&mut tx, shifts).await?;
        for section in shifts {
            TaskRepository::replace_container(
                &mut tx,
                &ContainerId::Shift(section.id.clone()),
                &section.tasks,
            )
            .await?;
        }

        StatusRepository::replace_all(&mut tx, statuses).await?;

        tx.commit().await?;
        Ok(())
    }

    /// Replace the operational state section: checked map + handover list.
    pub async fn save_state(
        &self,
        checked: &BTreeMap<String, bool>,
        handover: &[HandoverItem],
    ) -> Result<()> {
        let mut tx = self.pool.begin().await?;
        CheckedItemRepository::replace_all(&mut tx, checked).await?;
        TaskRepository::replace_handover(&mut tx, handover).await?;
        tx.commit().await?;
        Ok(())
    }

    pub async fn save_handover(&self, handover: &[HandoverItem]) -> Result<()> {
        let mut tx = self.pool.begin().await?;
        TaskRepository::replace_handover(&mut tx, handover).await?;
        tx.commit().await?;
        Ok(())
    }

    /// Archiving moves an item between the handover list and the trash; both
    /// halves commit together.
    pub async fn save_handover_and_trash(
        &self,
        handover: &[HandoverItem],
        trash: &[TrashedItem],
    ) -> Result<()> {
        let mut tx = self.pool.begin().await?;
        TaskRepository::replace_handover(&mut tx, handover).await?;
        TrashRepository::replace_all(&mut tx, trash).await?;
        tx.commit().await?;
        Ok(())
    }

    pub async fn save_statuses(&self, statuses: &[StatusConfig]) -> Result<()> {
        let mut tx = self.pool.begin().await?;
        StatusRepository::replace_all(&mut tx, statuses).await?;
        tx.commit().await?;
        Ok(())
    }

    /// Status replacement can re-point handover items at a fallback status;
    /// both lists commit together.
    pub async fn save_statuses_and_handover(
        &self,
        statuses: &[StatusConfig],
        handover: &[HandoverItem],
    ) -> Result<()> {
        let mut tx = self.pool.begin().await?;
        StatusRepository::replace_all(&mut tx, statuses).await?;
        TaskRepository::replace_handover(&mut tx, handover).await?;
        tx.commit().await?;
        Ok(())
    }

    /// Write every board section in one transaction (config reset).
    pub async fn save_board(&self, board: &BoardState) -> Result<()> {
        self.save_config(
            &board.basic_tasks,
            &board.shift_sections,
            &board.status_configs,
        )
        .await?;
        self.save_state(&board.checked_items, &board.handover_items)
            .await?;
        self.save_trash(&board.trashed_items).await?;
        Ok(())
    }

    pub async fn save_trash(&self, trash: &[TrashedItem]) -> Result<()> {
        let mut tx = self.pool.begin().await?;
        TrashRepository::replace_all(&mut tx, trash).await?;
        tx.commit().await?;
        Ok(())
    }

    pub async fn save_checked(&self, checked: &BTreeMap<String, bool>) -> Result<()> {
        let mut tx = self.pool.begin().await?;
        CheckedItemRepository::replace_all(&mut tx, checked).await?;
        tx.commit().await?;
        Ok(())
    }

    /// Single-checkbox fast path.
    pub async fn set_checked(&self, key: &str, checked: bool) -> Result<()> {
        let mut conn = self.pool.acquire().await?;
        CheckedItemRepository::set(&mut conn, key, checked).await
    }

    pub async fn remove_checked_keys(&self, keys: &[String]) -> Result<()> {
        let mut tx = self.pool.begin().await?;
        CheckedItemRepository::remove_keys(&mut tx, keys).await?;
        tx.commit().await?;
        Ok(())
    }

    pub async fn save_records(&self, records: &[WorkRecord]) -> Result<()> {
        let mut tx = self.pool.begin().await?;
        WorkRecordRepository::replace_all(&mut tx, records).await?;
        tx.commit().await?;
        Ok(())
    }

    pub async fn save_groups(&self, groups: &[WorkRecordGroup]) -> Result<()> {
        let mut tx = self.pool.begin().await?;
        WorkRecordGroupRepository::replace_all(&mut tx, groups).await?;
        tx.commit().await?;
        Ok(())
    }

    /// Replace records and groups together (group deletion rewrites both).
    pub async fn save_record_set(&self, set: &RecordSet) -> Result<()> {
        let mut tx = self.pool.begin().await?;
        WorkRecordRepository::replace_all(&mut tx, &set.records).await?;
        WorkRecordGroupRepository::replace_all(&mut tx, &set.groups).await?;
        tx.commit().await?;
        Ok(())
    }

    // ----------------------------------------------------------- lifecycle

    /// Background retention pass; returns removed row count.
    pub async fn purge_trash_older_than(&self, cutoff: DateTime<Utc>) -> Result<u64> {
        let mut conn = self.pool.acquire().await?;
        TrashRepository::delete_older_than(&mut conn, cutoff).await
    }

    /// Seed the built-in defaults on first start (empty status table means a
    /// brand-new database). Returns whether seeding happened.
    pub async fn seed_defaults_if_empty(&self) -> Result<bool> {
        {
            let mut conn = self.pool.acquire().await?;
            if StatusRepository::count(&mut conn).await? > 0 {
                return Ok(false);
            }
        }

        let defaults = BoardState::with_defaults();
        self.save_config(
            &defaults.basic_tasks,
            &defaults.shift_sections,
            &defaults.status_configs,
        )
        .await?;
        Ok(true)
    }
}
