use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// A single checklist entry.
///
/// Tasks live in exactly one container (basic, handover or a shift section).
/// `show_on_days` / `show_in_months` restrict when the task is listed to
/// clients; an absent predicate means "always".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub subtext: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    /// Markdown notes, rendered by clients in a popup.
    #[serde(default)]
    pub notes: Option<String>,
    /// Header tasks are non-interactive dividers.
    #[serde(default)]
    pub is_header: bool,
    /// Days of week the task is shown (0 = Sunday .. 6 = Saturday).
    #[serde(default)]
    pub show_on_days: Option<Vec<u8>>,
    /// Months of year the task is shown (1 = January .. 12 = December).
    #[serde(default)]
    pub show_in_months: Option<Vec<u8>>,
}

impl Task {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            subtext: None,
            link: None,
            notes: None,
            is_header: false,
            show_on_days: None,
            show_in_months: None,
        }
    }

    /// Whether the task is visible on the given weekday and month.
    pub fn is_visible_on(&self, weekday: Weekday, month: u32) -> bool {
        if let Some(ref days) = self.show_on_days
            && !days.contains(&(weekday.num_days_from_sunday() as u8))
        {
            return false;
        }
        if let Some(ref months) = self.show_in_months
            && !months.contains(&(month as u8))
        {
            return false;
        }
        true
    }

    pub fn apply_patch(&mut self, patch: TaskPatch) {
        if let Some(label) = patch.label {
            self.label = label;
        }
        if let Some(subtext) = patch.subtext {
            self.subtext = none_if_empty(subtext);
        }
        if let Some(link) = patch.link {
            self.link = none_if_empty(link);
        }
        if let Some(notes) = patch.notes {
            self.notes = none_if_empty(notes);
        }
        if let Some(is_header) = patch.is_header {
            self.is_header = is_header;
        }
        if let Some(days) = patch.show_on_days {
            self.show_on_days = if days.is_empty() { None } else { Some(days) };
        }
        if let Some(months) = patch.show_in_months {
            self.show_in_months = if months.is_empty() {
                None
            } else {
                Some(months)
            };
        }
    }
}

/// Partial task update. `Some("")` on a text field clears it; an empty
/// day/month list clears the predicate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub subtext: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub is_header: Option<bool>,
    #[serde(default)]
    pub show_on_days: Option<Vec<u8>>,
    #[serde(default)]
    pub show_in_months: Option<Vec<u8>>,
}

fn none_if_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}
