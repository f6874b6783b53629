//! Built-in seed content: the four duty shift windows, the default status
//! set, and a minimal basic checklist. Stations replace these through the
//! config endpoints.

use crate::models::shift::ShiftSection;
use crate::models::status::StatusConfig;
use crate::models::task::Task;

pub const SHIFT_MORNING: &str = "shift_0812";
pub const SHIFT_AFTERNOON: &str = "shift_1218";
pub const SHIFT_EVENING: &str = "shift_1822";
pub const SHIFT_NIGHT: &str = "shift_2206";

pub fn default_statuses() -> Vec<StatusConfig> {
    vec![
        StatusConfig::new("status_pending", "Pending", "#94a3b8"),
        StatusConfig::new("status_progress", "In progress", "#3b82f6"),
        StatusConfig::new("status_urgent", "Urgent", "#ef4444"),
        StatusConfig::done("status_done", "Done", "#10b981"),
    ]
}

pub fn default_shift_sections() -> Vec<ShiftSection> {
    vec![
        ShiftSection::new(SHIFT_MORNING, "08-12 duty", "08:00 - 12:00", "#2563eb"),
        ShiftSection::new(SHIFT_AFTERNOON, "12-18 duty", "12:00 - 18:00", "#16a34a"),
        ShiftSection::new(SHIFT_EVENING, "18-22 duty", "18:00 - 22:00", "#ea580c"),
        ShiftSection::new(SHIFT_NIGHT, "22-06 watch", "22:00 - 06:00", "#4f46e5"),
    ]
}

pub fn default_basic_tasks() -> Vec<Task> {
    vec![
        Task::new("basic_radio_check", "Check radio volume"),
        Task::new("basic_dispatch_login", "Log into the dispatch system"),
        Task::new("basic_vehicle_keys", "Verify vehicles and keys"),
        Task::new("basic_sign_on", "Sign on duty, count radios and tablets"),
        Task::new("basic_sign_off", "Sign handover, count radios and tablets"),
    ]
}

/// The shift window covering the given hour of day (0-23).
pub fn shift_for_hour(hour: u32) -> &'static str {
    match hour {
        8..=11 => SHIFT_MORNING,
        12..=17 => SHIFT_AFTERNOON,
        18..=21 => SHIFT_EVENING,
        _ => SHIFT_NIGHT,
    }
}
