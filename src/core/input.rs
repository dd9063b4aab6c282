//! Input state tracking
//!
//! The window layer forwards key, button, cursor and modifier changes through
//! the `press_*`/`release_*`/`move_cursor`/`set_modifiers` methods.

use std::collections::HashSet;
use winit::event::MouseButton;
use winit::keyboard::{KeyCode, ModifiersState};

use crate::core::types::Vec2;

/// Tracks keyboard and mouse input state between frames
#[derive(Debug, Default)]
pub struct InputState {
    /// Currently pressed keys
    keys_pressed: HashSet<KeyCode>,
    /// Keys pressed this frame
    keys_just_pressed: HashSet<KeyCode>,
    /// Currently pressed mouse buttons
    mouse_buttons: HashSet<MouseButton>,
    /// Mouse buttons pressed this frame
    mouse_just_pressed: HashSet<MouseButton>,
    /// Current cursor position in window pixels
    cursor_position: Vec2,
    /// Whether the cursor moved this frame
    cursor_moved: bool,
    /// Held modifier keys
    modifiers: ModifiersState,
}

impl InputState {
    /// Create new input state
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press (repeat presses do not re-trigger)
    pub fn press_key(&mut self, key: KeyCode) {
        if self.keys_pressed.insert(key) {
            self.keys_just_pressed.insert(key);
        }
    }

    /// Record a key release
    pub fn release_key(&mut self, key: KeyCode) {
        self.keys_pressed.remove(&key);
    }

    /// Record a mouse button press
    pub fn press_mouse(&mut self, button: MouseButton) {
        if self.mouse_buttons.insert(button) {
            self.mouse_just_pressed.insert(button);
        }
    }

    /// Record a mouse button release
    pub fn release_mouse(&mut self, button: MouseButton) {
        self.mouse_buttons.remove(&button);
    }

    /// Record a cursor move
    pub fn move_cursor(&mut self, position: Vec2) {
        self.cursor_moved |= position != self.cursor_position;
        self.cursor_position = position;
    }

    /// Replace the held modifiers
    pub fn set_modifiers(&mut self, modifiers: ModifiersState) {
        self.modifiers = modifiers;
    }

    /// Call at end of frame to reset per-frame state
    pub fn end_frame(&mut self) {
        self.keys_just_pressed.clear();
        self.mouse_just_pressed.clear();
        self.cursor_moved = false;
    }

    /// Check if key is currently pressed
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed.contains(&key)
    }

    /// Check if key was just pressed this frame
    pub fn is_key_just_pressed(&self, key: KeyCode) -> bool {
        self.keys_just_pressed.contains(&key)
    }

    /// Check if mouse button is pressed
    pub fn is_mouse_button_pressed(&self, button: MouseButton) -> bool {
        self.mouse_buttons.contains(&button)
    }

    /// Check if mouse button was just pressed this frame
    pub fn is_mouse_button_just_pressed(&self, button: MouseButton) -> bool {
        self.mouse_just_pressed.contains(&button)
    }

    /// Get current cursor position
    pub fn cursor_position(&self) -> Vec2 {
        self.cursor_position
    }

    /// Whether the cursor moved since the last `end_frame`
    pub fn cursor_moved(&self) -> bool {
        self.cursor_moved
    }

    /// Held modifier keys
    pub fn modifiers(&self) -> ModifiersState {
        self.modifiers
    }
}
