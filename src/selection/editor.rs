//! Group of selection boxes with one box open for interactive editing

use crate::core::types::{IVec3, Mat4, Vec3};
use crate::render::{BoxRenderer, BoxStyle};
use super::editable::EditableBox;
use super::selection_box::{SelectionBox, SelectionGroup};
use super::state::EditState;

/// Committed selection boxes plus the box the user is currently working on.
///
/// Every operation is total: calls that do not apply to the current state
/// are ignored.
#[derive(Clone, Debug)]
pub struct SelectionGroupEditor {
    boxes: Vec<SelectionBox>,
    state: EditState,
    editable: bool,
    cursor_position: IVec3,
    hover_index: Option<usize>,
}

impl Default for SelectionGroupEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionGroupEditor {
    /// Empty, editable group
    pub fn new() -> Self {
        Self {
            boxes: Vec::new(),
            state: EditState::default(),
            editable: true,
            cursor_position: IVec3::ZERO,
            hover_index: None,
        }
    }

    /// Committed boxes in insertion order
    pub fn boxes(&self) -> &[SelectionBox] {
        &self.boxes
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    pub fn state(&self) -> &EditState {
        &self.state
    }

    pub fn active_box(&self) -> Option<&EditableBox> {
        self.state.active()
    }

    /// Committed slot the active box belongs to
    pub fn active_box_index(&self) -> Option<usize> {
        self.state.index()
    }

    pub fn cursor_position(&self) -> IVec3 {
        self.cursor_position
    }

    pub fn hover_index(&self) -> Option<usize> {
        self.hover_index
    }

    /// Is the selection open for editing.
    /// This is not whether a box is being modified.
    pub fn editable(&self) -> bool {
        self.editable
    }

    pub fn set_editable(&mut self, editable: bool) {
        self.editable = editable;
        let index = self.state.index();
        self.state = match index {
            Some(index) if editable => self.existing(index),
            _ => EditState::Empty { parked: index },
        };
        log::debug!("Selection editable={} ({})", editable, self.state.name());
        self.check_invariants();
    }

    /// Move the cursor; an active box drags its free edges along
    pub fn update_cursor(&mut self, position: IVec3, hover_index: Option<usize>) {
        self.cursor_position = position;
        self.hover_index = match hover_index {
            Some(index) if index >= self.boxes.len() => {
                log::warn!("Hover index {} out of range for {} boxes", index, self.boxes.len());
                None
            }
            other => other,
        };
        if let Some(active) = self.state.active_mut() {
            active.set_active_point(position);
        }
    }

    /// Primary select action.
    ///
    /// Starts a box, commits a box being dragged, picks another committed
    /// box, or grabs the active one for resizing. Returns the cursor position
    /// only when a resize starts.
    pub fn toggle_box_select(&mut self, add_modifier: bool) -> Option<IVec3> {
        if !self.editable {
            return None;
        }

        let mut resumed = None;
        self.state = match std::mem::take(&mut self.state) {
            EditState::Empty { parked } => self.creating(parked),
            EditState::EditingExisting { mut active, index } => {
                if self.hover_index == Some(index) {
                    active.unlock(self.cursor_position);
                    resumed = Some(self.cursor_position);
                    EditState::ResumedEdit { active, index }
                } else if let Some(hover) = self.hover_index {
                    self.existing(hover)
                } else if add_modifier {
                    self.creating(Some(index))
                } else {
                    self.boxes.clear();
                    self.creating(None)
                }
            }
            dynamic @ (EditState::CreatingNew { .. } | EditState::ResumedEdit { .. }) => {
                self.commit(dynamic)
            }
        };

        log::debug!(
            "Box select toggled ({}), {} committed",
            self.state.name(),
            self.boxes.len()
        );
        self.check_invariants();
        resumed
    }

    /// Lock a box that is being dragged in its current shape
    pub fn disable_box_select(&mut self) {
        if !self.editable {
            return;
        }
        if matches!(self.state, EditState::CreatingNew { .. } | EditState::ResumedEdit { .. }) {
            let state = std::mem::take(&mut self.state);
            self.state = self.commit(state);
            log::debug!("Box select finished, {} committed", self.boxes.len());
            self.check_invariants();
        }
    }

    /// Drop the active box.
    ///
    /// A committed active box is removed and its neighbour becomes active. A
    /// box still being created hands focus back to the box that was active
    /// before it.
    pub fn deselect_active(&mut self) {
        if !self.editable {
            return;
        }

        self.state = match std::mem::take(&mut self.state) {
            EditState::EditingExisting { index, .. } | EditState::ResumedEdit { index, .. } => {
                self.boxes.remove(index);
                // Indices after the removed box have shifted
                self.hover_index = None;
                if self.boxes.is_empty() {
                    EditState::Empty { parked: None }
                } else {
                    let index = if index >= 1 { index - 1 } else { index };
                    self.existing(index)
                }
            }
            EditState::CreatingNew { active, previous: Some(index) } => {
                EditState::ResumedEdit { active, index }
            }
            other => other,
        };

        log::debug!("Deselected active box ({}), {} committed", self.state.name(), self.boxes.len());
        self.check_invariants();
    }

    /// Release every box
    pub fn deselect_all(&mut self) {
        self.boxes.clear();
        self.state = EditState::default();
        self.hover_index = None;
        log::debug!("Deselected all boxes");
    }

    /// Draw committed boxes, then the active box on top.
    ///
    /// The committed copy of the active box is skipped while editable.
    pub fn render(&self, renderer: &mut impl BoxRenderer, transform: &Mat4, camera_position: Option<Vec3>) {
        let skip = if self.editable { self.state.index() } else { None };
        for (index, selection) in self.boxes.iter().enumerate() {
            if Some(index) == skip {
                continue;
            }
            let style = if Some(index) == self.hover_index {
                BoxStyle::Hovered
            } else {
                BoxStyle::Committed
            };
            renderer.draw_box(&selection.world_bounds(), style, transform, camera_position);
        }

        if let Some(active) = self.state.active() {
            let style = if active.is_static() {
                BoxStyle::ActiveStatic
            } else {
                BoxStyle::ActiveDynamic
            };
            renderer.draw_box(&active.selection_box().world_bounds(), style, transform, camera_position);
        }
    }

    /// Closest committed box along a ray.
    ///
    /// A box being resized is left out so the cursor passes through its
    /// stale committed copy. Ties go to the earlier box.
    pub fn closest_intersection(&self, origin: Vec3, direction: Vec3) -> (Option<usize>, Option<&SelectionBox>) {
        let mut closest: Option<(usize, f32)> = None;
        for (index, selection) in self.boxes.iter().enumerate() {
            if self.editable && self.state.is_resizing(index) {
                continue;
            }
            if let Some(distance) = selection.intersects_vector(origin, direction) {
                if closest.is_none_or(|(_, best)| distance < best) {
                    closest = Some((index, distance));
                }
            }
        }

        match closest {
            Some((index, _)) => (Some(index), self.boxes.get(index)),
            None => (None, None),
        }
    }

    /// Like [`closest_intersection`](Self::closest_intersection) but also
    /// returns the hit distance
    pub fn closest_hit(&self, origin: Vec3, direction: Vec3) -> Option<(usize, f32)> {
        let (index, selection) = self.closest_intersection(origin, direction);
        let distance = selection?.intersects_vector(origin, direction)?;
        Some((index?, distance))
    }

    /// Copy of the committed boxes
    pub fn selection_group(&self) -> SelectionGroup {
        self.boxes.iter().copied().collect()
    }

    /// Replace the committed boxes, dropping any edit in progress
    pub fn set_selection_group(&mut self, group: SelectionGroup) {
        self.boxes = group.into_boxes();
        self.state = EditState::default();
        self.hover_index = None;
        log::debug!("Selection group replaced with {} boxes", self.boxes.len());
    }

    /// Replace the committed boxes from JSON
    pub fn try_set_selection_group_json(&mut self, json: &str) -> crate::core::Result<()> {
        let group = SelectionGroup::from_json(json)?;
        self.set_selection_group(group);
        Ok(())
    }

    fn creating(&self, previous: Option<usize>) -> EditState {
        EditState::CreatingNew {
            active: EditableBox::from_cursor(self.cursor_position),
            previous,
        }
    }

    fn existing(&self, index: usize) -> EditState {
        EditState::EditingExisting {
            active: EditableBox::locked(&self.boxes[index]),
            index,
        }
    }

    /// Lock a dynamic box and write it into the committed list
    fn commit(&mut self, state: EditState) -> EditState {
        let (mut active, index) = match state {
            EditState::CreatingNew { active, .. } => (active, None),
            EditState::ResumedEdit { active, index } => (active, Some(index)),
            other => return other,
        };

        active.lock();
        let index = match index {
            Some(index) => {
                self.boxes[index] = active.selection_box();
                index
            }
            None => {
                self.boxes.push(active.selection_box());
                self.boxes.len() - 1
            }
        };
        EditState::EditingExisting { active, index }
    }

    fn check_invariants(&self) {
        let len = self.boxes.len();
        debug_assert!(self.state.index().is_none_or(|i| i < len), "active index out of range");
        if let EditState::CreatingNew { previous, .. } = &self.state {
            debug_assert!(previous.is_none_or(|i| i < len), "previous index out of range");
        }
        if let EditState::EditingExisting { active, index } = &self.state {
            debug_assert!(active.is_static());
            debug_assert!(self.boxes[*index] == active.selection_box());
        }
        debug_assert!(self.hover_index.is_none_or(|i| i < len), "hover index out of range");
    }
}
