//! Per-column item views derived from the flat item list

use crate::types::{ColumnId, Item};

/// The items residing in the given column, in flat-list order.
///
/// This is recomputed from the flat source of truth on every call; there is
/// no cached per-column array that could drift out of sync.
pub fn items_for_column<'a>(items: &'a [Item], column_id: &ColumnId) -> Vec<&'a Item> {
    items.iter().filter(|i| &i.column_id == column_id).collect()
}
