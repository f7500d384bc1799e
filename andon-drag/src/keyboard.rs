//! Keyboard sensor adapter
//!
//! Gives every pointer-driven gesture a discrete keyboard path: Space/Enter
//! picks up the focused entity, the arrow keys move the hover target one
//! position or one column at a time, Space/Enter again commits and Escape
//! cancels. The sensor owns only a focus cursor; everything else goes
//! through the same [`DragHandler`] calls a pointer sensor would make, so
//! the session state machine stays input-modality agnostic.

use crate::controller::BoardController;
use crate::handler::DragHandler;
use crate::session::{DragEntity, DropTarget};

/// The keys the sensor understands, already decoded by the host's input
/// layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Space or Enter: pick up when idle, commit when dragging.
    Activate,
    /// Escape: cancel the active drag.
    Cancel,
    Up,
    Down,
    Left,
    Right,
}

/// Focus cursor over the board: a column index plus an optional item row.
/// `None` for the row means the column header/body itself is focused.
#[derive(Debug, Clone, Default)]
pub struct KeyboardSensor {
    focus_column: usize,
    focus_item: Option<usize>,
}

impl KeyboardSensor {
    /// Create a sensor focused on the first column header.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current cursor as (column index, optional item row), for the
    /// host's focus highlight.
    pub fn focus(&self) -> (usize, Option<usize>) {
        (self.focus_column, self.focus_item)
    }

    /// Feed one key press. Returns the announcement produced by whichever
    /// drag handler call the key translated into, if any.
    pub fn handle_key(&mut self, key: Key, controller: &mut BoardController) -> Option<String> {
        if controller.columns().is_empty() {
            return None;
        }
        self.clamp(controller);

        if controller.session().is_active() {
            self.handle_drag_key(key, controller)
        } else {
            self.handle_focus_key(key, controller)
        }
    }

    fn handle_focus_key(&mut self, key: Key, controller: &mut BoardController) -> Option<String> {
        match key {
            Key::Activate => {
                let entity = self.focused_entity(controller)?;
                controller.on_drag_start(entity)
            }
            Key::Left => {
                if self.focus_column > 0 {
                    self.focus_column -= 1;
                    self.clamp_row(controller);
                }
                None
            }
            Key::Right => {
                if self.focus_column + 1 < controller.columns().len() {
                    self.focus_column += 1;
                    self.clamp_row(controller);
                }
                None
            }
            Key::Down => {
                let count = self.row_count(controller);
                self.focus_item = match self.focus_item {
                    None if count > 0 => Some(0),
                    Some(row) if row + 1 < count => Some(row + 1),
                    other => other,
                };
                None
            }
            Key::Up => {
                self.focus_item = match self.focus_item {
                    None | Some(0) => None,
                    Some(row) => Some(row - 1),
                };
                None
            }
            Key::Cancel => None,
        }
    }

    fn handle_drag_key(&mut self, key: Key, controller: &mut BoardController) -> Option<String> {
        match key {
            Key::Cancel => controller.on_drag_cancel(),
            Key::Activate => {
                let target = self.target(controller);
                controller.on_drag_end(target)
            }
            Key::Up | Key::Down | Key::Left | Key::Right => {
                let dragging_column = matches!(
                    controller.session().entity(),
                    Some(DragEntity::Column(_))
                );
                let moved = if dragging_column {
                    self.move_column_cursor(key, controller)
                } else {
                    self.move_item_cursor(key, controller)
                };
                if !moved {
                    return None;
                }
                let target = self.target(controller);
                controller.on_drag_over(target)
            }
        }
    }

    fn move_column_cursor(&mut self, key: Key, controller: &BoardController) -> bool {
        self.focus_item = None;
        match key {
            Key::Left if self.focus_column > 0 => {
                self.focus_column -= 1;
                true
            }
            Key::Right if self.focus_column + 1 < controller.columns().len() => {
                self.focus_column += 1;
                true
            }
            _ => false,
        }
    }

    fn move_item_cursor(&mut self, key: Key, controller: &BoardController) -> bool {
        match key {
            Key::Down => {
                let count = self.row_count(controller);
                match self.focus_item {
                    None if count > 0 => {
                        self.focus_item = Some(0);
                        true
                    }
                    Some(row) if row + 1 < count => {
                        self.focus_item = Some(row + 1);
                        true
                    }
                    _ => false,
                }
            }
            Key::Up => match self.focus_item {
                Some(0) => {
                    self.focus_item = None;
                    true
                }
                Some(row) => {
                    self.focus_item = Some(row - 1);
                    true
                }
                None => false,
            },
            Key::Left | Key::Right => self.seek_column(key == Key::Right, controller),
            _ => false,
        }
    }

    /// Scan left or right for the nearest column the dragged item may drop
    /// into, skipping columns whose accept set rejects it.
    fn seek_column(&mut self, rightward: bool, controller: &BoardController) -> bool {
        let step: isize = if rightward { 1 } else { -1 };
        let count = controller.columns().len() as isize;

        let mut candidate = self.focus_column as isize + step;
        while candidate >= 0 && candidate < count {
            let column_id = controller.columns()[candidate as usize].id.clone();
            if controller.drop_allowed(&DropTarget::Column(column_id)) {
                self.focus_column = candidate as usize;
                self.clamp_row(controller);
                return true;
            }
            candidate += step;
        }
        false
    }

    fn focused_entity(&self, controller: &BoardController) -> Option<DragEntity> {
        let column = controller.columns().get(self.focus_column)?;
        match self.focus_item {
            None => Some(DragEntity::Column(column.id.clone())),
            Some(row) => {
                controller
                    .items_in(&column.id)
                    .get(row)
                    .map(|item| DragEntity::Item {
                        id: item.id.clone(),
                        source_column: column.id.clone(),
                    })
            }
        }
    }

    fn target(&self, controller: &BoardController) -> Option<DropTarget> {
        let column = controller.columns().get(self.focus_column)?;
        match self.focus_item {
            None => Some(DropTarget::Column(column.id.clone())),
            Some(row) => controller
                .items_in(&column.id)
                .get(row)
                .map(|item| DropTarget::Item(item.id.clone())),
        }
    }

    fn row_count(&self, controller: &BoardController) -> usize {
        controller
            .columns()
            .get(self.focus_column)
            .map(|column| controller.items_in(&column.id).len())
            .unwrap_or(0)
    }

    fn clamp(&mut self, controller: &BoardController) {
        let count = controller.columns().len();
        if self.focus_column >= count {
            self.focus_column = count.saturating_sub(1);
        }
        self.clamp_row(controller);
    }

    fn clamp_row(&mut self, controller: &BoardController) {
        let count = self.row_count(controller);
        self.focus_item = match self.focus_item {
            Some(_) if count == 0 => None,
            Some(row) => Some(row.min(count - 1)),
            None => None,
        };
    }
}
