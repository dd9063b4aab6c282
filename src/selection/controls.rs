//! Keyboard and mouse bindings for selection editing

use serde::{Deserialize, Serialize};
use winit::event::MouseButton;
use winit::keyboard::{KeyCode, ModifiersState};

use crate::core::input::InputState;
use crate::core::types::IVec3;
use super::editor::SelectionGroupEditor;
use super::picker::CursorPick;

/// Modifier key that can be bound to an action
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModifierKey {
    Control,
    Shift,
    Alt,
    Super,
}

impl ModifierKey {
    pub fn is_held(self, modifiers: ModifiersState) -> bool {
        match self {
            ModifierKey::Control => modifiers.control_key(),
            ModifierKey::Shift => modifiers.shift_key(),
            ModifierKey::Alt => modifiers.alt_key(),
            ModifierKey::Super => modifiers.super_key(),
        }
    }
}

/// Input bound to each editor action
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionBindings {
    /// Start, commit, pick or resize a box
    pub toggle: MouseButton,
    /// Held while toggling to keep existing boxes
    pub add_modifier: ModifierKey,
    /// Remove the active box
    pub deselect_active: KeyCode,
    /// Remove every box
    pub deselect_all: KeyCode,
    /// Lock the box being dragged
    pub finish: KeyCode,
}

impl Default for SelectionBindings {
    fn default() -> Self {
        Self {
            toggle: MouseButton::Left,
            add_modifier: ModifierKey::Control,
            deselect_active: KeyCode::Delete,
            deselect_all: KeyCode::Escape,
            finish: KeyCode::Enter,
        }
    }
}

/// Editor action triggered by input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionAction {
    Toggle { add: bool },
    /// Toggle that grabbed the active box; resizing starts from `anchor`
    ResumeResize { anchor: IVec3 },
    DeselectActive,
    DeselectAll,
    Finish,
}

/// Applies one frame of input to a selection editor
#[derive(Clone, Debug, Default)]
pub struct SelectionControls {
    bindings: SelectionBindings,
    resize_anchor: Option<IVec3>,
}

impl SelectionControls {
    pub fn new(bindings: SelectionBindings) -> Self {
        Self {
            bindings,
            resize_anchor: None,
        }
    }

    pub fn bindings(&self) -> &SelectionBindings {
        &self.bindings
    }

    /// Cursor position at which the current resize started
    pub fn resize_anchor(&self) -> Option<IVec3> {
        self.resize_anchor
    }

    /// Feed the frame's cursor pick and button presses to the editor.
    ///
    /// Returns the actions taken, in the order they were applied.
    pub fn apply(
        &mut self,
        editor: &mut SelectionGroupEditor,
        input: &InputState,
        pick: Option<CursorPick>,
    ) -> Vec<SelectionAction> {
        let mut actions = Vec::new();

        if let Some(pick) = pick {
            editor.update_cursor(pick.position, pick.hover_index);
        }

        if input.is_key_just_pressed(self.bindings.deselect_all) {
            editor.deselect_all();
            actions.push(SelectionAction::DeselectAll);
        }
        if input.is_key_just_pressed(self.bindings.deselect_active) {
            editor.deselect_active();
            actions.push(SelectionAction::DeselectActive);
        }
        if input.is_key_just_pressed(self.bindings.finish) {
            editor.disable_box_select();
            actions.push(SelectionAction::Finish);
        }
        if input.is_mouse_button_just_pressed(self.bindings.toggle) {
            let add = self.bindings.add_modifier.is_held(input.modifiers());
            match editor.toggle_box_select(add) {
                Some(anchor) => {
                    self.resize_anchor = Some(anchor);
                    actions.push(SelectionAction::ResumeResize { anchor });
                }
                None => actions.push(SelectionAction::Toggle { add }),
            }
        }

        if editor.active_box().is_none_or(|b| b.is_static()) {
            self.resize_anchor = None;
        }

        for action in &actions {
            log::debug!("Selection input: {:?}", action);
        }
        actions
    }

    /// Window lost focus: lock whatever is being dragged
    pub fn focus_lost(&mut self, editor: &mut SelectionGroupEditor) {
        editor.disable_box_select();
        self.resize_anchor = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::SelectionBox;

    fn pick(x: i32, hover: Option<usize>) -> Option<CursorPick> {
        Some(CursorPick { position: IVec3::new(x, 0, 0), hover_index: hover })
    }

    fn click(input: &mut InputState) {
        input.end_frame();
        input.release_mouse(MouseButton::Left);
        input.press_mouse(MouseButton::Left);
    }

    #[test]
    fn test_click_drag_click() {
        let mut editor = SelectionGroupEditor::new();
        let mut controls = SelectionControls::default();
        let mut input = InputState::new();

        click(&mut input);
        let actions = controls.apply(&mut editor, &input, pick(0, None));
        assert_eq!(actions, vec![SelectionAction::Toggle { add: false }]);

        input.end_frame();
        assert!(controls.apply(&mut editor, &input, pick(3, None)).is_empty());

        click(&mut input);
        controls.apply(&mut editor, &input, pick(3, None));
        assert_eq!(editor.boxes(), &[SelectionBox::new(IVec3::ZERO, IVec3::new(3, 0, 0))]);
    }

    #[test]
    fn test_add_modifier_from_input() {
        let mut editor = SelectionGroupEditor::new();
        let mut controls = SelectionControls::default();
        let mut input = InputState::new();
        input.set_modifiers(ModifiersState::CONTROL);

        click(&mut input);
        let actions = controls.apply(&mut editor, &input, pick(0, None));
        assert_eq!(actions, vec![SelectionAction::Toggle { add: true }]);
    }

    #[test]
    fn test_resume_resize_records_anchor() {
        let mut editor = SelectionGroupEditor::new();
        editor.update_cursor(IVec3::ZERO, None);
        editor.toggle_box_select(false);
        editor.update_cursor(IVec3::new(2, 0, 0), None);
        editor.toggle_box_select(false);

        let mut controls = SelectionControls::default();
        let mut input = InputState::new();

        click(&mut input);
        let actions = controls.apply(&mut editor, &input, pick(2, Some(0)));
        assert_eq!(actions, vec![SelectionAction::ResumeResize { anchor: IVec3::new(2, 0, 0) }]);
        assert_eq!(controls.resize_anchor(), Some(IVec3::new(2, 0, 0)));

        controls.focus_lost(&mut editor);
        assert_eq!(controls.resize_anchor(), None);
        assert!(editor.active_box().unwrap().is_static());
    }

    #[test]
    fn test_keys() {
        let mut editor = SelectionGroupEditor::new();
        editor.set_selection_group(
            vec![SelectionBox::voxel(IVec3::ZERO), SelectionBox::voxel(IVec3::ONE)].into(),
        );
        let mut controls = SelectionControls::default();
        let mut input = InputState::new();

        input.press_key(KeyCode::Escape);
        let actions = controls.apply(&mut editor, &input, None);
        assert_eq!(actions, vec![SelectionAction::DeselectAll]);
        assert!(editor.is_empty());

        input.end_frame();
        input.press_key(KeyCode::Delete);
        input.press_key(KeyCode::Enter);
        let actions = controls.apply(&mut editor, &input, None);
        assert_eq!(actions, vec![SelectionAction::DeselectActive, SelectionAction::Finish]);
    }

    #[test]
    fn test_bindings_serde() {
        let json = serde_json::to_string(&SelectionBindings::default()).unwrap();
        let parsed: SelectionBindings = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, SelectionBindings::default());

        let custom: SelectionBindings = serde_json::from_str(r#"{ "add_modifier": "Shift" }"#).unwrap();
        assert_eq!(custom.add_modifier, ModifierKey::Shift);
        assert_eq!(custom.toggle, MouseButton::Left);
    }
}
