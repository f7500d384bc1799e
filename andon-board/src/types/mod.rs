//! Core types for the board engine

mod column;
mod ids;
mod item;
mod settings;

// Re-export all types
pub use column::Column;
pub use ids::{ColumnId, ItemId, UserId};
pub use item::Item;
pub use settings::DisplaySettings;
