//! Drag session layer for the board engine
//!
//! Sits on top of `andon-board` and turns discrete input events into
//! committed board mutations and live-region announcements:
//!
//! - [`DragSession`] — the state machine for the one active gesture
//! - [`DragHandler`] — the capability interface any input sensor drives
//! - [`BoardController`] — owns board, session, display settings, the
//!   optional persisted column order and the host's data-change callback
//! - [`announce`] — pure formatting of drag events for assistive technology
//! - [`KeyboardSensor`] — a discrete-key sensor giving every pointer gesture
//!   a keyboard equivalent
//!
//! The host renders from the controller's projections, feeds it gestures
//! through [`DragHandler`], and surfaces every returned string through its
//! live-announcement mechanism.

pub mod announce;
mod controller;
mod handler;
mod keyboard;
mod overlay;
mod session;

pub use controller::{BoardController, DataChangeCallback};
pub use handler::DragHandler;
pub use keyboard::{Key, KeyboardSensor};
pub use overlay::Overlay;
pub use session::{DragEntity, DragEvent, DragSession, DropTarget};
