//! Column type

use super::ids::ColumnId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A named drop-target bucket on the board.
///
/// Columns are created and destroyed by the external collaborator; the board
/// core only reorders the in-memory sequence. `accepts` lists the item kinds
/// the column takes — an empty set accepts everything.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    /// Display flag passed through to the host's renderer.
    #[serde(default = "default_active")]
    pub active: bool,
    /// Item kinds this column accepts. Empty = accepts all.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub accepts: BTreeSet<String>,
}

fn default_active() -> bool {
    true
}

impl Column {
    /// Create a column that accepts every item kind
    pub fn new(id: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            active: true,
            accepts: BTreeSet::new(),
        }
    }

    /// Restrict the column to the given item kinds
    pub fn with_accepts<I, S>(mut self, kinds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.accepts = kinds.into_iter().map(Into::into).collect();
        self
    }

    /// Set the display flag
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Check whether an item of the given kind may reside in this column
    pub fn accepts_kind(&self, kind: &str) -> bool {
        crate::accept::can_accept(&self.accepts, kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_everything() {
        let column = Column::new("todo", "To Do");
        assert!(column.active);
        assert!(column.accepts_kind("Buy"));
        assert!(column.accepts_kind("Sell"));
    }

    #[test]
    fn test_with_accepts_restricts() {
        let column = Column::new("buying", "Buying").with_accepts(["Buy"]);
        assert!(column.accepts_kind("Buy"));
        assert!(!column.accepts_kind("Sell"));
    }

    #[test]
    fn test_deserialize_defaults() {
        let column: Column = serde_json::from_str(r#"{"id":"a","title":"A"}"#).unwrap();
        assert!(column.active);
        assert!(column.accepts.is_empty());
    }
}
