//! Property-based tests for the ordering engine
//!
//! These pin the guarantees the drag layer leans on: list surgery never
//! panics, never loses or invents elements, and a same-index move is an
//! identity.

use andon_board::ordering::move_within_list;
use proptest::prelude::*;

proptest! {
    /// Property: moving an element onto its own index returns the list
    /// unchanged.
    #[test]
    fn test_same_index_move_is_identity(
        list in prop::collection::vec(any::<u32>(), 0..32),
        index in 0usize..40,
    ) {
        let moved = move_within_list(&list, index, index);
        prop_assert_eq!(moved, list);
    }

    /// Property: a move reorders but never changes the multiset of elements.
    #[test]
    fn test_move_preserves_multiset(
        list in prop::collection::vec(any::<u32>(), 0..32),
        from in 0usize..40,
        to in 0usize..40,
    ) {
        let moved = move_within_list(&list, from, to);
        prop_assert_eq!(moved.len(), list.len());

        let mut sorted_before = list.clone();
        let mut sorted_after = moved;
        sorted_before.sort_unstable();
        sorted_after.sort_unstable();
        prop_assert_eq!(sorted_after, sorted_before);
    }

    /// Property: out-of-range indices are clamped or ignored, never a panic,
    /// and an out-of-range `from` leaves the list unchanged.
    #[test]
    fn test_invalid_indices_degrade_to_noop(
        list in prop::collection::vec(any::<u32>(), 0..8),
        from in 0usize..64,
        to in 0usize..64,
    ) {
        let moved = move_within_list(&list, from, to);
        if from >= list.len() {
            prop_assert_eq!(moved, list);
        } else {
            prop_assert_eq!(moved.len(), list.len());
        }
    }

    /// Property: elements other than the moved one keep their relative order.
    #[test]
    fn test_other_elements_stay_stable(
        list in prop::collection::vec(any::<u32>(), 1..16),
        from in 0usize..16,
        to in 0usize..16,
    ) {
        prop_assume!(from < list.len());

        // Tag with the original index so every element is distinct
        let tagged: Vec<(usize, u32)> = list.into_iter().enumerate().collect();
        let moved = move_within_list(&tagged, from, to);

        let mut rest_before = tagged.clone();
        rest_before.remove(from);

        let rest_after: Vec<(usize, u32)> = moved
            .into_iter()
            .filter(|element| *element != tagged[from])
            .collect();

        prop_assert_eq!(rest_after, rest_before);
    }
}
