//! Board controller: the in-process API the host UI drives
//!
//! Owns the committed board, the one drag session, the optional persisted
//! column order and the display settings, and implements [`DragHandler`] so
//! any sensor can feed it gestures. Rendering stays with the host: it pulls
//! ordered columns and per-column projections from here and surfaces the
//! returned announcement strings through its live region.

use crate::announce;
use crate::handler::DragHandler;
use crate::overlay::Overlay;
use crate::session::{DragEntity, DragSession, DropTarget};
use andon_board::{BoardState, Column, ColumnId, ColumnOrder, DisplaySettings, Item};
use tracing::{trace, warn};

/// Host callback fired with the full item list after every committed item
/// mutation, so the external store can be brought up to date.
pub type DataChangeCallback = Box<dyn FnMut(&[Item])>;

/// Drag-aware wrapper around a [`BoardState`].
pub struct BoardController {
    board: BoardState,
    session: DragSession,
    settings: DisplaySettings,
    column_order: Option<ColumnOrder>,
    on_data_change: Option<DataChangeCallback>,
}

impl BoardController {
    /// Create a controller over a seeded board.
    pub fn new(board: BoardState) -> Self {
        Self {
            board,
            session: DragSession::default(),
            settings: DisplaySettings::default(),
            column_order: None,
            on_data_change: None,
        }
    }

    /// Attach a persisted column order. The stored order is applied to the
    /// board immediately (merged against the live columns) and every
    /// committed column reorder is mirrored back to the store.
    pub fn with_column_order(mut self, order: ColumnOrder) -> Self {
        let merged = order.load(self.board.columns());
        self.board.reorder_columns(&merged);
        self.column_order = Some(order);
        self
    }

    /// Set the display settings handed back to the host's card renderer.
    pub fn with_display_settings(mut self, settings: DisplaySettings) -> Self {
        self.settings = settings;
        self
    }

    /// Register the data-change callback.
    pub fn with_on_data_change(mut self, callback: impl FnMut(&[Item]) + 'static) -> Self {
        self.on_data_change = Some(Box::new(callback));
        self
    }

    /// The committed board.
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    /// The ordered column sequence.
    pub fn columns(&self) -> &[Column] {
        self.board.columns()
    }

    /// The items residing in the given column, in order.
    pub fn items_in(&self, column_id: &ColumnId) -> Vec<&Item> {
        self.board.items_in(column_id)
    }

    /// The display settings, uninterpreted.
    pub fn settings(&self) -> &DisplaySettings {
        &self.settings
    }

    /// The current drag session.
    pub fn session(&self) -> &DragSession {
        &self.session
    }

    /// The dragged entity for the host's floating ghost layer, while a drag
    /// is active.
    pub fn overlay(&self) -> Option<Overlay<'_>> {
        match self.session.entity()? {
            DragEntity::Column(id) => self.board.find_column(id).map(Overlay::Column),
            DragEntity::Item { id, .. } => self.board.find_item(id).map(Overlay::Item),
        }
    }

    /// Whether the active drag may drop on the given target. Hosts use this
    /// to suppress illegal drop targets while hovering; the same check gates
    /// the commit. False when no drag is active.
    pub fn drop_allowed(&self, target: &DropTarget) -> bool {
        self.session
            .entity()
            .is_some_and(|entity| self.allowed(entity, target))
    }

    fn allowed(&self, entity: &DragEntity, target: &DropTarget) -> bool {
        match (entity, target) {
            (DragEntity::Column(active), DropTarget::Column(over)) => {
                self.board.find_column(active).is_some() && self.board.find_column(over).is_some()
            }
            (DragEntity::Item { id, .. }, DropTarget::Item(over)) => {
                let (Some(dragged), Some(hovered)) =
                    (self.board.find_item(id), self.board.find_item(over))
                else {
                    return false;
                };
                dragged.column_id == hovered.column_id
                    || self.board.item_accepted_by_column(id, &hovered.column_id)
            }
            (DragEntity::Item { id, .. }, DropTarget::Column(over)) => {
                let Some(dragged) = self.board.find_item(id) else {
                    return false;
                };
                dragged.column_id == *over || self.board.item_accepted_by_column(id, over)
            }
            (DragEntity::Column(_), DropTarget::Item(_)) => false,
        }
    }

    fn notify_data_change(&mut self) {
        if let Some(callback) = self.on_data_change.as_mut() {
            callback(self.board.items());
        }
    }
}

impl DragHandler for BoardController {
    fn on_drag_start(&mut self, entity: DragEntity) -> Option<String> {
        if !self.session.begin(entity.clone()) {
            return None;
        }
        announce::pick_up(&self.board, &entity)
    }

    fn on_drag_over(&mut self, target: Option<DropTarget>) -> Option<String> {
        if !self.session.hover(target.clone()) {
            return None;
        }
        trace!(?target, "hover target changed");
        let target = target?;
        announce::drag_over(&self.board, self.session.entity()?, &target)
    }

    fn on_drag_end(&mut self, target: Option<DropTarget>) -> Option<String> {
        let entity = self.session.finish()?;
        let Some(target) = target else {
            // Released outside every valid target: nothing committed
            return announce::drag_cancel(Some(&entity));
        };
        if !self.allowed(&entity, &target) {
            return announce::drag_cancel(Some(&entity));
        }

        // Counts in the announcement reflect the pre-mutation board
        let message = announce::drag_end(&self.board, &entity, &target);

        match (&entity, &target) {
            (DragEntity::Column(active), DropTarget::Column(over)) => {
                if self.board.move_column_over(active, over) {
                    // The visual order has committed; a failed write must
                    // not roll it back
                    if let Some(order) = &self.column_order {
                        if let Err(error) = order.save(self.board.columns()) {
                            warn!(%error, "failed to persist column order");
                        }
                    }
                }
            }
            (DragEntity::Item { id, .. }, DropTarget::Item(over)) => {
                if self.board.move_item_over_item(id, over) {
                    self.notify_data_change();
                }
            }
            (DragEntity::Item { id, .. }, DropTarget::Column(over)) => {
                if self.board.move_item_to_column(id, over) {
                    self.notify_data_change();
                }
            }
            (DragEntity::Column(_), DropTarget::Item(_)) => {}
        }

        message
    }

    fn on_drag_cancel(&mut self) -> Option<String> {
        let entity = self.session.finish();
        announce::drag_cancel(entity.as_ref())
    }
}

impl std::fmt::Debug for BoardController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoardController")
            .field("board", &self.board)
            .field("session", &self.session)
            .field("settings", &self.settings)
            .field("column_order", &self.column_order)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn setup() -> BoardController {
        let columns = vec![
            Column::new("todo", "To Do"),
            Column::new("done", "Done"),
        ];
        let items = vec![
            Item::new("i1", "todo", "Work", "First"),
            Item::new("i2", "done", "Work", "Second"),
        ];
        BoardController::new(BoardState::new(columns, items).unwrap())
    }

    #[test]
    fn test_full_gesture_commits_and_announces() {
        let mut controller = setup();

        let picked = controller.on_drag_start(DragEntity::item("i1", "todo"));
        assert_eq!(
            picked.as_deref(),
            Some("Picked up Item First at position: 1 of 1 in column To Do")
        );

        let over = controller.on_drag_over(Some(DropTarget::item("i2")));
        assert_eq!(
            over.as_deref(),
            Some("Item First was moved over column Done in position 1 of 1")
        );

        let dropped = controller.on_drag_end(Some(DropTarget::item("i2")));
        assert_eq!(
            dropped.as_deref(),
            Some("Item First was dropped into column Done in position 1 of 1")
        );

        assert!(!controller.session().is_active());
        let done: Vec<&str> = controller
            .items_in(&ColumnId::from_string("done"))
            .iter()
            .map(|i| i.id.as_str())
            .collect();
        assert_eq!(done, vec!["i1", "i2"]);
    }

    #[test]
    fn test_drop_without_target_cancels() {
        let mut controller = setup();
        controller.on_drag_start(DragEntity::item("i1", "todo"));

        let message = controller.on_drag_end(None);
        assert_eq!(message.as_deref(), Some("Dragging item cancelled."));
        assert_eq!(
            controller.board().find_item(&"i1".into()).unwrap().column_id,
            ColumnId::from_string("todo")
        );
    }

    #[test]
    fn test_cancel_restores_nothing_and_resets() {
        let mut controller = setup();
        let snapshot = controller.board().clone();

        controller.on_drag_start(DragEntity::column("done"));
        controller.on_drag_over(Some(DropTarget::column("todo")));
        let message = controller.on_drag_cancel();

        assert_eq!(message.as_deref(), Some("Dragging column cancelled."));
        assert!(!controller.session().is_active());
        assert_eq!(controller.board(), &snapshot);
    }

    #[test]
    fn test_cancel_without_drag_says_nothing() {
        let mut controller = setup();
        assert_eq!(controller.on_drag_cancel(), None);
    }

    #[test]
    fn test_second_start_is_ignored() {
        let mut controller = setup();
        assert!(controller.on_drag_start(DragEntity::item("i1", "todo")).is_some());
        assert!(controller.on_drag_start(DragEntity::item("i2", "done")).is_none());
        assert_eq!(
            controller.session().entity(),
            Some(&DragEntity::item("i1", "todo"))
        );
    }

    #[test]
    fn test_data_change_fires_only_on_commit() {
        let seen: Arc<Mutex<Vec<usize>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();

        let columns = vec![
            Column::new("todo", "To Do"),
            Column::new("done", "Done"),
        ];
        let items = vec![Item::new("i1", "todo", "Work", "First")];
        let mut controller = BoardController::new(BoardState::new(columns, items).unwrap())
            .with_on_data_change(move |items| sink.lock().unwrap().push(items.len()));

        // Hover alone never mutates
        controller.on_drag_start(DragEntity::item("i1", "todo"));
        controller.on_drag_over(Some(DropTarget::column("done")));
        assert!(seen.lock().unwrap().is_empty());

        controller.on_drag_end(Some(DropTarget::column("done")));
        assert_eq!(*seen.lock().unwrap(), vec![1]);
    }

    #[test]
    fn test_type_gate_refuses_with_cancel_announcement() {
        let columns = vec![
            Column::new("any", "Anything"),
            Column::new("buying", "Buying").with_accepts(["Buy"]),
        ];
        let items = vec![Item::new("s1", "any", "Sell", "Sell order")];
        let mut controller = BoardController::new(BoardState::new(columns, items).unwrap());

        controller.on_drag_start(DragEntity::item("s1", "any"));
        assert!(!controller.drop_allowed(&DropTarget::column("buying")));

        let message = controller.on_drag_end(Some(DropTarget::column("buying")));
        assert_eq!(message.as_deref(), Some("Dragging item cancelled."));
        assert_eq!(
            controller.board().find_item(&"s1".into()).unwrap().column_id,
            ColumnId::from_string("any")
        );
    }

    #[test]
    fn test_overlay_tracks_active_drag() {
        let mut controller = setup();
        assert!(controller.overlay().is_none());

        controller.on_drag_start(DragEntity::item("i1", "todo"));
        match controller.overlay() {
            Some(Overlay::Item(item)) => assert_eq!(item.title, "First"),
            other => panic!("expected item overlay, got {other:?}"),
        }

        controller.on_drag_cancel();
        assert!(controller.overlay().is_none());

        controller.on_drag_start(DragEntity::column("done"));
        assert_eq!(controller.overlay().map(|o| o.title().to_string()), Some("Done".to_string()));
    }

    #[test]
    fn test_display_settings_are_handed_back_verbatim() {
        let settings = DisplaySettings {
            show_due_date: false,
            ..DisplaySettings::default()
        };
        let controller = setup().with_display_settings(settings);
        assert_eq!(controller.settings(), &settings);
    }
}
