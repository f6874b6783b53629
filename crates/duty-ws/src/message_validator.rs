use crate::{Result as WsErrorResult, WsError};

use std::panic::Location;

use duty_config::ValidationConfig;
use duty_core::{StatusConfig, TaskPatch, WorkRecord};
use error_location::ErrorLocation;

/// Validates client-supplied content against the configured size limits.
pub struct MessageValidator;

impl MessageValidator {
    #[track_caller]
    pub fn validate_string(
        value: &str,
        field_name: &str,
        max_length: usize,
    ) -> WsErrorResult<()> {
        if value.chars().count() > max_length {
            return Err(WsError::ValidationError {
                message: format!("{field_name} exceeds maximum length ({max_length})"),
                field: Some(field_name.to_string()),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(())
    }

    #[track_caller]
    pub fn validate_task_patch(patch: &TaskPatch, config: &ValidationConfig) -> WsErrorResult<()> {
        if let Some(ref label) = patch.label {
            Self::validate_string(label, "label", config.max_label_length)?;
        }
        if let Some(ref subtext) = patch.subtext {
            Self::validate_string(subtext, "subtext", config.max_text_length)?;
        }
        if let Some(ref link) = patch.link {
            Self::validate_string(link, "link", config.max_text_length)?;
        }
        if let Some(ref notes) = patch.notes {
            Self::validate_string(notes, "notes", config.max_text_length)?;
        }
        if let Some(ref days) = patch.show_on_days {
            Self::validate_range(days, "showOnDays", 0, 6)?;
        }
        if let Some(ref months) = patch.show_in_months {
            Self::validate_range(months, "showInMonths", 1, 12)?;
        }
        Ok(())
    }

    #[track_caller]
    pub fn validate_statuses(
        statuses: &[StatusConfig],
        config: &ValidationConfig,
    ) -> WsErrorResult<()> {
        for status in statuses {
            Self::validate_string(&status.label, "label", config.max_label_length)?;
        }
        Ok(())
    }

    #[track_caller]
    pub fn validate_record(record: &WorkRecord, config: &ValidationConfig) -> WsErrorResult<()> {
        Self::validate_string(&record.title, "title", config.max_label_length)?;
        Self::validate_string(&record.content, "content", config.max_text_length)?;
        if let Some(ref link) = record.link {
            Self::validate_string(link, "link", config.max_text_length)?;
        }
        Ok(())
    }

    #[track_caller]
    pub fn validate_container_capacity(
        current_len: usize,
        config: &ValidationConfig,
    ) -> WsErrorResult<()> {
        if current_len >= config.max_items_per_container {
            return Err(WsError::ValidationError {
                message: format!(
                    "container is full ({} items max)",
                    config.max_items_per_container
                ),
                field: None,
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(())
    }

    #[track_caller]
    fn validate_range(values: &[u8], field_name: &str, min: u8, max: u8) -> WsErrorResult<()> {
        if values.iter().any(|v| *v < min || *v > max) {
            return Err(WsError::ValidationError {
                message: format!("{field_name} values must be within {min}-{max}"),
                field: Some(field_name.to_string()),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(())
    }
}
