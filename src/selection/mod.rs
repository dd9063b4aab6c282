//! Interactive box selection
//!
//! A [`SelectionGroupEditor`] holds the committed [`SelectionBox`]es and at
//! most one [`EditableBox`] that the user is dragging out or resizing.

pub mod selection_box;
pub mod editable;
pub mod state;
pub mod editor;
pub mod picker;
pub mod controls;

// Re-exports
pub use selection_box::{SelectionBox, SelectionGroup};
pub use editable::EditableBox;
pub use state::EditState;
pub use editor::SelectionGroupEditor;
pub use picker::{CursorPick, pick_cursor, update_cursor_from_ray};
pub use controls::{SelectionBindings, SelectionControls, SelectionAction, ModifierKey};
