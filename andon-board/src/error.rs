//! Error types for the board core

use thiserror::Error;

/// Result type for board operations
pub type Result<T> = std::result::Result<T, BoardError>;

/// Errors that can occur in board operations
///
/// These surface only at the seams where the host hands data in: seeding a
/// board and persisting stored preferences. Drag-gesture paths never produce
/// errors; invalid gestures degrade to no-ops.
#[derive(Debug, Error)]
pub enum BoardError {
    /// Item references a column that is not part of the board
    #[error("item '{item_id}' references unknown column: {column_id}")]
    UnknownColumnReference { item_id: String, column_id: String },

    /// Duplicate ID
    #[error("duplicate {entity} ID: {id}")]
    DuplicateId { entity: String, id: String },

    /// Storage error from the injected order store
    #[error(transparent)]
    Store(#[from] andon_store::StoreError),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl BoardError {
    /// Create a duplicate ID error
    pub fn duplicate_id(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::DuplicateId {
            entity: entity.into(),
            id: id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BoardError::duplicate_id("column", "todo");
        assert_eq!(err.to_string(), "duplicate column ID: todo");
    }

    #[test]
    fn test_unknown_column_reference_display() {
        let err = BoardError::UnknownColumnReference {
            item_id: "i1".into(),
            column_id: "gone".into(),
        };
        assert_eq!(
            err.to_string(),
            "item 'i1' references unknown column: gone"
        );
    }
}
