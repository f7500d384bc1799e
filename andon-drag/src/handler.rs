//! The drag-event capability interface

use crate::session::{DragEntity, DragEvent, DropTarget};

/// Reactions to drag lifecycle events.
///
/// Whatever input layer the host platform provides (pointer, touch, the
/// keyboard sensor shipped here) reduces its gestures to these four calls,
/// keeping the session state machine and the ordering engine decoupled from
/// any sensor. Each handler returns the live-region announcement the host
/// should surface, if any.
pub trait DragHandler {
    /// A drag gesture started on the given entity.
    fn on_drag_start(&mut self, entity: DragEntity) -> Option<String>;

    /// The drop-target candidate changed. `None` means the pointer left all
    /// valid targets.
    fn on_drag_over(&mut self, target: Option<DropTarget>) -> Option<String>;

    /// The gesture ended over the given target. `None` commits nothing.
    fn on_drag_end(&mut self, target: Option<DropTarget>) -> Option<String>;

    /// The gesture was cancelled explicitly.
    fn on_drag_cancel(&mut self) -> Option<String>;

    /// Dispatch a [`DragEvent`] to the matching handler.
    fn on_drag_event(&mut self, event: DragEvent) -> Option<String> {
        match event {
            DragEvent::Start(entity) => self.on_drag_start(entity),
            DragEvent::Over(target) => self.on_drag_over(target),
            DragEvent::End(target) => self.on_drag_end(target),
            DragEvent::Cancel => self.on_drag_cancel(),
        }
    }
}
