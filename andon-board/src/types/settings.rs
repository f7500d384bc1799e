//! Display settings passed through to the host's card renderer

use serde::{Deserialize, Serialize};

/// Flags controlling which optional item attributes a consuming card
/// renderer shows. The board core stores these and hands them back verbatim;
/// it never interprets them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DisplaySettings {
    #[serde(default = "on")]
    pub show_due_date: bool,
    #[serde(default = "on")]
    pub show_status: bool,
    #[serde(default = "on")]
    pub show_assignee: bool,
    #[serde(default = "on")]
    pub show_column_type: bool,
}

fn on() -> bool {
    true
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            show_due_date: true,
            show_status: true,
            show_assignee: true,
            show_column_type: true,
        }
    }
}
