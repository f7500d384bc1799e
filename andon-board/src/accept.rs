//! Drop legality predicate

use std::collections::BTreeSet;

/// Decide whether a column with the given accept set may take an item of the
/// given kind.
///
/// An empty set accepts anything. Used both to suppress a drop target during
/// hover and as the hard gate before a cross-column move commits; a failing
/// predicate turns the move into a no-op, never an error.
pub fn can_accept(accepts: &BTreeSet<String>, column_type: &str) -> bool {
    accepts.is_empty() || accepts.contains(column_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(kinds: &[&str]) -> BTreeSet<String> {
        kinds.iter().map(|k| k.to_string()).collect()
    }

    #[test]
    fn test_empty_set_accepts_anything() {
        assert!(can_accept(&BTreeSet::new(), "Buy"));
        assert!(can_accept(&BTreeSet::new(), ""));
    }

    #[test]
    fn test_mismatched_kind_rejected() {
        assert!(!can_accept(&set(&["Buy"]), "Sell"));
    }

    #[test]
    fn test_matching_kind_accepted() {
        assert!(can_accept(&set(&["Buy", "Sell"]), "Sell"));
    }
}
