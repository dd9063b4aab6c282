//! Edit state of a selection group

use super::editable::EditableBox;

/// Where the active box stands relative to the committed boxes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditState {
    /// No active box. `parked` holds the active index while editing is off
    Empty { parked: Option<usize> },
    /// A dynamic box that has not been committed yet. `previous` is the
    /// index that was active when it was started.
    CreatingNew { active: EditableBox, previous: Option<usize> },
    /// A static box mirroring committed slot `index`
    EditingExisting { active: EditableBox, index: usize },
    /// A dynamic box resizing committed slot `index`
    ResumedEdit { active: EditableBox, index: usize },
}

impl Default for EditState {
    fn default() -> Self {
        EditState::Empty { parked: None }
    }
}

impl EditState {
    pub fn active(&self) -> Option<&EditableBox> {
        match self {
            EditState::Empty { .. } => None,
            EditState::CreatingNew { active, .. }
            | EditState::EditingExisting { active, .. }
            | EditState::ResumedEdit { active, .. } => Some(active),
        }
    }

    pub fn active_mut(&mut self) -> Option<&mut EditableBox> {
        match self {
            EditState::Empty { .. } => None,
            EditState::CreatingNew { active, .. }
            | EditState::EditingExisting { active, .. }
            | EditState::ResumedEdit { active, .. } => Some(active),
        }
    }

    /// Committed slot the active box belongs to
    pub fn index(&self) -> Option<usize> {
        match self {
            EditState::Empty { parked } => *parked,
            EditState::CreatingNew { .. } => None,
            EditState::EditingExisting { index, .. } | EditState::ResumedEdit { index, .. } => Some(*index),
        }
    }

    /// Short name for log output
    pub fn name(&self) -> &'static str {
        match self {
            EditState::Empty { .. } => "empty",
            EditState::CreatingNew { .. } => "creating",
            EditState::EditingExisting { .. } => "editing",
            EditState::ResumedEdit { .. } => "resizing",
        }
    }

    /// Whether the committed slot at `index` is currently being resized
    pub fn is_resizing(&self, index: usize) -> bool {
        matches!(self, EditState::ResumedEdit { index: i, .. } if *i == index)
    }
}
