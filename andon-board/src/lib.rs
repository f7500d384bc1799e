//! Kanban board core: data model, ordering engine and projections
//!
//! This crate holds the committed side of the board engine. The host seeds a
//! [`BoardState`] with collaborator-provided columns and items, renders the
//! per-column projections, and commits drop gestures through the `move_*`
//! operations. The drag session layer lives in `andon-drag`.
//!
//! ## Overview
//!
//! - **Order is array position** — the ordered column sequence and the flat
//!   item list are the sole sources of visual order; there is no rank field
//! - **Illegal moves are no-ops** — type-gated or malformed gestures leave
//!   the state untouched instead of raising
//! - **Projections are derived** — per-column views are recomputed from the
//!   flat list on every call, never cached
//! - **Column order can persist** — [`ColumnOrder`] mirrors one user's column
//!   arrangement through the `andon-store` port, merging stored order against
//!   the live configuration on read

pub mod accept;
mod column_order;
mod error;
pub mod ordering;
pub mod projection;
mod state;
pub mod types;

pub use column_order::ColumnOrder;
pub use error::{BoardError, Result};
pub use state::BoardState;

// Re-export commonly used types
pub use types::{Column, ColumnId, DisplaySettings, Item, ItemId, UserId};
