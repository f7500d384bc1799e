//! Live-region announcement formatting
//!
//! Pure functions mapping drag lifecycle events to human-readable sentences
//! for assistive technology. Positions are 1-based and counts always reflect
//! the pre-mutation board, so the announcer runs before the commit. Missing
//! board entities yield `None` rather than a panic; the host simply says
//! nothing.

use crate::session::{DragEntity, DropTarget};
use andon_board::BoardState;

/// Announcement for a pick-up.
pub fn pick_up(board: &BoardState, entity: &DragEntity) -> Option<String> {
    match entity {
        DragEntity::Column(id) => {
            let column = board.find_column(id)?;
            let (index, total) = board.column_position(id)?;
            Some(format!(
                "Picked up Column {} at position: {} of {}",
                column.title,
                index + 1,
                total
            ))
        }
        DragEntity::Item { id, .. } => {
            let item = board.find_item(id)?;
            let column = board.find_column(&item.column_id)?;
            let (index, count) = board.item_position(id)?;
            Some(format!(
                "Picked up Item {} at position: {} of {} in column {}",
                item.title,
                index + 1,
                count,
                column.title
            ))
        }
    }
}

/// Announcement for a hover change.
pub fn drag_over(
    board: &BoardState,
    entity: &DragEntity,
    target: &DropTarget,
) -> Option<String> {
    movement(board, entity, target, "was moved over")
}

/// Announcement for a drop.
pub fn drag_end(board: &BoardState, entity: &DragEntity, target: &DropTarget) -> Option<String> {
    movement(board, entity, target, "was dropped into")
}

/// Announcement for a cancelled gesture, or `None` if there was none.
pub fn drag_cancel(entity: Option<&DragEntity>) -> Option<String> {
    entity.map(|e| format!("Dragging {} cancelled.", e.kind()))
}

fn movement(
    board: &BoardState,
    entity: &DragEntity,
    target: &DropTarget,
    verb: &str,
) -> Option<String> {
    match (entity, target) {
        (DragEntity::Column(active), DropTarget::Column(over)) => {
            let dragged = board.find_column(active)?;
            let hovered = board.find_column(over)?;
            let (index, total) = board.column_position(over)?;
            Some(format!(
                "Column {} {} {} at position {} of {}",
                dragged.title,
                verb,
                hovered.title,
                index + 1,
                total
            ))
        }
        (DragEntity::Item { id, source_column }, DropTarget::Item(over)) => {
            let hovered = board.find_item(over)?;
            let column = board.find_column(&hovered.column_id)?;
            let (index, count) = board.item_position(over)?;
            if hovered.column_id == *source_column {
                Some(format!(
                    "Item {} position {} of {} in column {}",
                    verb,
                    index + 1,
                    count,
                    column.title
                ))
            } else {
                let dragged = board.find_item(id)?;
                Some(format!(
                    "Item {} {} column {} in position {} of {}",
                    dragged.title,
                    verb,
                    column.title,
                    index + 1,
                    count
                ))
            }
        }
        (DragEntity::Item { id, source_column }, DropTarget::Column(over)) => {
            // Hovering a column body lands the item at the end of that
            // column; over its own column nothing would move, so say nothing.
            if over == source_column {
                return None;
            }
            let dragged = board.find_item(id)?;
            let column = board.find_column(over)?;
            let landing = board.items_in(over).len() + 1;
            Some(format!(
                "Item {} {} column {} in position {} of {}",
                dragged.title, verb, column.title, landing, landing
            ))
        }
        (DragEntity::Column(_), DropTarget::Item(_)) => None,
    }
}
