//! Pure list-surgery operations
//!
//! Everything here is framework-free and never panics: reordering a UI list
//! must never crash the session, so invalid indices are clamped or treated as
//! no-ops instead.

use crate::types::{ColumnId, Item};

/// Remove the element at `from` and reinsert it at `to`, shifting the
/// elements in between. Returns a new vector; all other elements keep their
/// relative order.
///
/// An out-of-range `from` returns an unchanged copy. `to` is clamped to the
/// end of the list.
pub fn move_within_list<T: Clone>(list: &[T], from: usize, to: usize) -> Vec<T> {
    let mut moved = list.to_vec();
    if from >= moved.len() {
        return moved;
    }
    let element = moved.remove(from);
    let to = to.min(moved.len());
    moved.insert(to, element);
    moved
}

/// Return the item with its `column_id` replaced. Ordering is untouched.
pub fn reassign_column(item: Item, target: &ColumnId) -> Item {
    Item {
        column_id: target.clone(),
        ..item
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_forward() {
        assert_eq!(move_within_list(&[1, 2, 3, 4], 0, 2), vec![2, 3, 1, 4]);
    }

    #[test]
    fn test_move_backward() {
        assert_eq!(move_within_list(&[1, 2, 3, 4], 3, 0), vec![4, 1, 2, 3]);
    }

    #[test]
    fn test_move_to_same_index_is_identity() {
        assert_eq!(move_within_list(&[1, 2, 3], 1, 1), vec![1, 2, 3]);
    }

    #[test]
    fn test_out_of_range_from_is_noop() {
        assert_eq!(move_within_list(&[1, 2, 3], 7, 0), vec![1, 2, 3]);
    }

    #[test]
    fn test_out_of_range_to_clamps_to_end() {
        assert_eq!(move_within_list(&[1, 2, 3], 0, 9), vec![2, 3, 1]);
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(move_within_list::<i32>(&[], 0, 0), Vec::<i32>::new());
    }

    #[test]
    fn test_reassign_column_only_touches_column_id() {
        let item = Item::new("i1", "todo", "Buy", "Order steel");
        let moved = reassign_column(item.clone(), &ColumnId::from_string("done"));
        assert_eq!(moved.column_id, ColumnId::from_string("done"));
        assert_eq!(moved.id, item.id);
        assert_eq!(moved.title, item.title);
    }
}
