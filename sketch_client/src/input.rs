//! Keyboard and mouse handling

use glam::Vec2;
use winit::keyboard::{Key, NamedKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Respawn,
}

/// Map a pressed key to an action
pub fn handle_key(key: &Key) -> Option<KeyAction> {
    match key {
        Key::Named(NamedKey::Escape) => Some(KeyAction::Quit),
        Key::Character(c) if c.eq_ignore_ascii_case("r") => Some(KeyAction::Respawn),
        _ => None,
    }
}

/// Tracks a left-button drag and turns cursor motion into pan deltas
#[derive(Debug, Clone, Default)]
pub struct DragState {
    dragging: bool,
    last_cursor: Option<Vec2>,
}

impl DragState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self) {
        self.dragging = true;
    }

    pub fn release(&mut self) {
        self.dragging = false;
    }

    /// Record a new cursor position; returns how far it moved while dragging
    pub fn cursor_moved(&mut self, pos: Vec2) -> Option<Vec2> {
        let delta = match (self.dragging, self.last_cursor) {
            (true, Some(last)) => Some(pos - last),
            _ => None,
        };
        self.last_cursor = Some(pos);
        delta.filter(|d| *d != Vec2::ZERO)
    }

    /// The cursor left the window; the next position starts a fresh delta
    pub fn cursor_left(&mut self) {
        self.last_cursor = None;
    }
}
