//! Committed board state and the drop-commit operations
//!
//! `BoardState` owns the ordered column sequence and the flat item list, the
//! two sources of visual order. All drop commits go through the `move_*`
//! methods, which refuse illegal gestures by returning `false` and leaving
//! the state untouched.

use crate::accept::can_accept;
use crate::error::{BoardError, Result};
use crate::ordering::{move_within_list, reassign_column};
use crate::projection::items_for_column;
use crate::types::{Column, ColumnId, Item, ItemId};
use std::collections::BTreeSet;
use tracing::debug;

/// The committed, in-memory board: ordered columns plus the flat item list.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardState {
    columns: Vec<Column>,
    items: Vec<Item>,
}

impl BoardState {
    /// Seed a board from collaborator-provided columns and items.
    ///
    /// Rejects duplicate IDs and items referencing columns that are not part
    /// of the board; these invariants then hold for the life of the board
    /// because no operation can break them.
    pub fn new(columns: Vec<Column>, items: Vec<Item>) -> Result<Self> {
        let mut column_ids = BTreeSet::new();
        for column in &columns {
            if !column_ids.insert(column.id.clone()) {
                return Err(BoardError::duplicate_id("column", column.id.as_str()));
            }
        }

        let mut item_ids = BTreeSet::new();
        for item in &items {
            if !item_ids.insert(item.id.clone()) {
                return Err(BoardError::duplicate_id("item", item.id.as_str()));
            }
            if !column_ids.contains(&item.column_id) {
                return Err(BoardError::UnknownColumnReference {
                    item_id: item.id.to_string(),
                    column_id: item.column_id.to_string(),
                });
            }
        }

        Ok(Self { columns, items })
    }

    /// The ordered column sequence.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// The flat item list, in display order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Find a column by ID.
    pub fn find_column(&self, id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|c| &c.id == id)
    }

    /// Find an item by ID.
    pub fn find_item(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|i| &i.id == id)
    }

    /// The items residing in the given column, in order.
    pub fn items_in(&self, column_id: &ColumnId) -> Vec<&Item> {
        items_for_column(&self.items, column_id)
    }

    /// A column's 0-based position and the total column count.
    pub fn column_position(&self, id: &ColumnId) -> Option<(usize, usize)> {
        let index = self.columns.iter().position(|c| &c.id == id)?;
        Some((index, self.columns.len()))
    }

    /// An item's 0-based position within its column and that column's item
    /// count.
    pub fn item_position(&self, id: &ItemId) -> Option<(usize, usize)> {
        let item = self.find_item(id)?;
        let siblings = self.items_in(&item.column_id);
        let index = siblings.iter().position(|i| &i.id == id)?;
        Some((index, siblings.len()))
    }

    /// Whether the given column's accept set takes the given item's kind.
    ///
    /// False when either side is missing, so hover legality checks degrade
    /// to "not a valid target" rather than panicking.
    pub fn item_accepted_by_column(&self, item_id: &ItemId, column_id: &ColumnId) -> bool {
        let (Some(item), Some(column)) = (self.find_item(item_id), self.find_column(column_id))
        else {
            return false;
        };
        can_accept(&column.accepts, &item.column_type)
    }

    /// Reorder the column sequence to follow `order`. IDs not present on the
    /// board are skipped; live columns missing from `order` keep their
    /// relative order at the end. Items are untouched.
    pub fn reorder_columns(&mut self, order: &[ColumnId]) {
        let mut reordered: Vec<Column> = Vec::with_capacity(self.columns.len());
        for id in order {
            if let Some(column) = self.find_column(id) {
                reordered.push(column.clone());
            }
        }
        for column in &self.columns {
            if !reordered.iter().any(|c| c.id == column.id) {
                reordered.push(column.clone());
            }
        }
        self.columns = reordered;
    }

    /// Commit a column-over-column drop: move the dragged column to the
    /// hovered column's position. Items are untouched. Returns `true` if the
    /// column order changed.
    pub fn move_column_over(&mut self, active: &ColumnId, over: &ColumnId) -> bool {
        if active == over {
            return false;
        }
        let (Some(from), Some(to)) = (
            self.columns.iter().position(|c| &c.id == active),
            self.columns.iter().position(|c| &c.id == over),
        ) else {
            return false;
        };

        self.columns = move_within_list(&self.columns, from, to);
        debug!(column = %active, from, to, "committed column reorder");
        true
    }

    /// Commit an item-over-item drop.
    ///
    /// Across columns the dragged item takes on the hovered item's column and
    /// is moved within the flat list to the hovered index minus one, so the
    /// drop lands above the hovered card. Within a column it is a plain move
    /// to the hovered index. Illegal target kinds and self-drops are no-ops.
    /// Returns `true` if anything changed.
    pub fn move_item_over_item(&mut self, active: &ItemId, over: &ItemId) -> bool {
        if active == over {
            return false;
        }
        let (Some(from), Some(over_index)) = (
            self.items.iter().position(|i| &i.id == active),
            self.items.iter().position(|i| &i.id == over),
        ) else {
            return false;
        };

        let target_column = self.items[over_index].column_id.clone();
        if self.items[from].column_id == target_column {
            self.items = move_within_list(&self.items, from, over_index);
            debug!(item = %active, from, to = over_index, "committed item reorder");
            return true;
        }

        if !self.item_accepted_by_column(active, &target_column) {
            return false;
        }

        let mut items = self.items.clone();
        items[from] = reassign_column(items[from].clone(), &target_column);
        self.items = move_within_list(&items, from, over_index.saturating_sub(1));
        debug!(item = %active, column = %target_column, "committed cross-column item move");
        true
    }

    /// Commit an item dropped on a column body (no card under the pointer):
    /// reassign the item to that column, leaving the flat order untouched.
    /// Dropping on the item's own column, an unknown column, or a column that
    /// rejects the item's kind is a no-op. Returns `true` if anything
    /// changed.
    pub fn move_item_to_column(&mut self, active: &ItemId, over: &ColumnId) -> bool {
        let Some(from) = self.items.iter().position(|i| &i.id == active) else {
            return false;
        };
        if self.find_column(over).is_none() || self.items[from].column_id == *over {
            return false;
        }
        if !self.item_accepted_by_column(active, over) {
            return false;
        }

        self.items[from] = reassign_column(self.items[from].clone(), over);
        debug!(item = %active, column = %over, "committed item column reassignment");
        true
    }
}
