//! Floating overlay projection for the active drag

use andon_board::{Column, Item};

/// The single dragged entity, for the host's floating ghost layer.
///
/// The overlay tracks the pointer independently of the live lists, so the
/// dragged visual element does not jump when the underlying projection
/// changes during hover.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Overlay<'a> {
    Column(&'a Column),
    Item(&'a Item),
}

impl Overlay<'_> {
    /// The title to render in the ghost.
    pub fn title(&self) -> &str {
        match self {
            Self::Column(column) => &column.title,
            Self::Item(item) => &item.title,
        }
    }
}
