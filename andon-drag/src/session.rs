//! Drag session state machine
//!
//! A session tracks exactly one in-progress gesture:
//! `Idle → PickedUp → Hovering → Idle`. Hovering never mutates committed
//! board state; the commit happens in the controller when the gesture ends.
//! The session is destroyed at drop or cancel and never outlives a gesture.

use andon_board::{ColumnId, ItemId};

/// The entity currently being dragged.
///
/// For items the source column is captured at pick-up and dropped with the
/// session, so announcement phrasing and cross-column detection never rely on
/// state outside the gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragEntity {
    Column(ColumnId),
    Item {
        id: ItemId,
        source_column: ColumnId,
    },
}

impl DragEntity {
    /// Create an item entity, capturing its source column.
    pub fn item(id: impl Into<ItemId>, source_column: impl Into<ColumnId>) -> Self {
        Self::Item {
            id: id.into(),
            source_column: source_column.into(),
        }
    }

    /// Create a column entity.
    pub fn column(id: impl Into<ColumnId>) -> Self {
        Self::Column(id.into())
    }

    /// The entity kind as it reads in announcements.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Column(_) => "column",
            Self::Item { .. } => "item",
        }
    }
}

/// The drop-target candidate under the pointer or keyboard cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    Column(ColumnId),
    Item(ItemId),
}

impl DropTarget {
    /// Create a column target.
    pub fn column(id: impl Into<ColumnId>) -> Self {
        Self::Column(id.into())
    }

    /// Create an item target.
    pub fn item(id: impl Into<ItemId>) -> Self {
        Self::Item(id.into())
    }
}

/// A discrete drag lifecycle event, as produced by whatever input sensor the
/// host platform provides. The state machine reacts only to these, so
/// pointer, touch and keyboard paths are equivalent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragEvent {
    Start(DragEntity),
    Over(Option<DropTarget>),
    End(Option<DropTarget>),
    Cancel,
}

/// The ephemeral state of the one active gesture.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DragSession {
    /// No active drag. Entered at construction and after every drop or
    /// cancel.
    #[default]
    Idle,
    /// A gesture has started but nothing is hovered yet.
    PickedUp { entity: DragEntity },
    /// The gesture has a current drop-target candidate.
    Hovering { entity: DragEntity, over: DropTarget },
}

impl DragSession {
    /// True while a gesture is in progress.
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    /// The dragged entity, if a gesture is in progress.
    pub fn entity(&self) -> Option<&DragEntity> {
        match self {
            Self::Idle => None,
            Self::PickedUp { entity } | Self::Hovering { entity, .. } => Some(entity),
        }
    }

    /// The current hover candidate, if any.
    pub fn hover_target(&self) -> Option<&DropTarget> {
        match self {
            Self::Hovering { over, .. } => Some(over),
            _ => None,
        }
    }

    /// Start a gesture. Only one drag may be active at a time; returns
    /// `false` without touching the session if one already is.
    pub fn begin(&mut self, entity: DragEntity) -> bool {
        if self.is_active() {
            return false;
        }
        *self = Self::PickedUp { entity };
        true
    }

    /// Update the hover candidate. `None` drops back to `PickedUp`. Returns
    /// `false` if no gesture is in progress.
    pub fn hover(&mut self, over: Option<DropTarget>) -> bool {
        let Some(entity) = self.entity().cloned() else {
            return false;
        };
        *self = match over {
            Some(over) => Self::Hovering { entity, over },
            None => Self::PickedUp { entity },
        };
        true
    }

    /// End the gesture, returning the dragged entity and resetting to
    /// `Idle`. Used by both the commit and cancel paths.
    pub fn finish(&mut self) -> Option<DragEntity> {
        let entity = self.entity().cloned();
        *self = Self::Idle;
        entity
    }
}
