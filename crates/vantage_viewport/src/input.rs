//! Per-frame input snapshot.
//!
//! The host drains its event queue into a `FrameInput` once per frame;
//! the interaction loop only ever reads the snapshot. Wheel delta is
//! accumulated across events and consumed once per frame.

use std::collections::HashSet;

use vantage_math::Vec2;

/// Mouse buttons, numbered the way the host reports them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseButton {
    Left = 0,
    Middle = 1,
    Right = 2,
}

/// Input state for one frame.
#[derive(Clone, Debug, Default)]
pub struct FrameInput {
    mouse_pos: Vec2,
    mouse_delta: Vec2,
    buttons: [bool; 3],
    prev_buttons: [bool; 3],
    keys: HashSet<String>,
    prev_keys: HashSet<String>,
    wheel: f64,
    /// True while a text field elsewhere in the host has focus. Gates
    /// viewport hotkeys.
    pub text_input_focused: bool,
}

impl FrameInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Roll over to the next frame: current button/key state becomes the
    /// previous state, deltas and wheel are zeroed. Call before feeding
    /// this frame's events.
    pub fn next_frame(&mut self) {
        self.prev_buttons = self.buttons;
        self.prev_keys = self.keys.clone();
        self.mouse_delta = Vec2::ZERO;
        self.wheel = 0.0;
    }

    /// Feed an absolute mouse position; the delta accumulates.
    pub fn on_mouse_move(&mut self, pos: Vec2) {
        self.mouse_delta += pos - self.mouse_pos;
        self.mouse_pos = pos;
    }

    /// Feed a raw motion delta (pointer-lock mode).
    pub fn on_mouse_motion(&mut self, delta: Vec2) {
        self.mouse_delta += delta;
    }

    pub fn on_button(&mut self, button: MouseButton, down: bool) {
        self.buttons[button as usize] = down;
    }

    pub fn on_key(&mut self, name: &str, down: bool) {
        if down {
            self.keys.insert(name.to_string());
        } else {
            self.keys.remove(name);
        }
    }

    pub fn on_wheel(&mut self, delta: f64) {
        self.wheel += delta;
    }

    pub fn mouse_position(&self) -> Vec2 {
        self.mouse_pos
    }

    pub fn mouse_delta(&self) -> Vec2 {
        self.mouse_delta
    }

    /// Button held this frame.
    pub fn button(&self, button: MouseButton) -> bool {
        self.buttons[button as usize]
    }

    /// Button went down this frame (edge).
    pub fn button_pressed(&self, button: MouseButton) -> bool {
        self.buttons[button as usize] && !self.prev_buttons[button as usize]
    }

    /// Button went up this frame (edge).
    pub fn button_released(&self, button: MouseButton) -> bool {
        !self.buttons[button as usize] && self.prev_buttons[button as usize]
    }

    /// Key held this frame.
    pub fn key(&self, name: &str) -> bool {
        self.keys.contains(name)
    }

    /// Key went down this frame (edge).
    pub fn key_pressed(&self, name: &str) -> bool {
        self.keys.contains(name) && !self.prev_keys.contains(name)
    }

    /// Wheel delta accumulated since the last frame.
    pub fn wheel(&self) -> f64 {
        self.wheel
    }
}
