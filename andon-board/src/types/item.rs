//! Item type

use super::ids::{ColumnId, ItemId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A draggable card belonging to exactly one column at a time.
///
/// Only `column_id` and the card's relative order ever change inside the
/// board core. Everything after `column_type` is display payload handed back
/// to the host's card renderer unchanged; fields the core does not model are
/// kept in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Item {
    pub id: ItemId,
    /// The column this item currently resides in
    pub column_id: ColumnId,
    /// The kind tag compared against a target column's accept set
    pub column_type: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    /// Any further display attributes, passed through untouched
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Item {
    /// Create a new item
    pub fn new(
        id: impl Into<ItemId>,
        column_id: impl Into<ColumnId>,
        column_type: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            column_id: column_id.into(),
            column_type: column_type.into(),
            title: title.into(),
            due_date: None,
            status: None,
            assignee: None,
            extra: serde_json::Map::new(),
        }
    }

    /// Set the due date
    pub fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Set the status
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Set the assignee
    pub fn with_assignee(mut self, assignee: impl Into<String>) -> Self {
        self.assignee = Some(assignee.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extra_fields_roundtrip() {
        let json = r#"{
            "id": "i1",
            "column_id": "todo",
            "column_type": "Buy",
            "title": "Order steel",
            "priority": "high"
        }"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.extra["priority"], "high");

        let back = serde_json::to_value(&item).unwrap();
        assert_eq!(back["priority"], "high");
    }

    #[test]
    fn test_optional_fields_omitted() {
        let item = Item::new("i1", "todo", "Buy", "Order steel");
        let json = serde_json::to_string(&item).unwrap();
        assert!(!json.contains("due_date"));
        assert!(!json.contains("assignee"));
    }
}
