//! A recording editor surface for integration tests.

use std::path::PathBuf;

use rtags_bridge::editor::EditorSurface;
use rtags_bridge::rtags::{Location, Position};

/// An editor surface that records every call so tests can assert on the
/// exact routing a command produced.
#[derive(Debug)]
pub struct RecordingSurface {
    /// The cursor position the surface reports.
    pub position: Position,
    /// Every jump the adapter issued.
    pub jumps: Vec<Location>,
    /// Every location list the adapter displayed.
    pub lists: Vec<Vec<Location>>,
    /// Every preview the adapter displayed.
    pub previews: Vec<String>,
    /// Every message the adapter printed.
    pub messages: Vec<String>,
}

impl RecordingSurface {
    /// Creates a surface whose cursor sits at `position`.
    pub fn at(position: Position) -> Self {
        Self {
            position,
            jumps: Vec::new(),
            lists: Vec::new(),
            previews: Vec::new(),
            messages: Vec::new(),
        }
    }

    /// Creates a surface with a fixed default cursor.
    pub fn new() -> Self {
        Self::at(Position::new("/src/main.cpp", 10, 4))
    }

    /// Total number of display calls recorded.
    pub fn call_count(&self) -> usize {
        self.jumps.len() + self.lists.len() + self.previews.len() + self.messages.len()
    }
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorSurface for RecordingSurface {
    fn current_position(&self) -> Position {
        self.position.clone()
    }

    fn current_path(&self) -> PathBuf {
        self.position.path.clone()
    }

    fn jump_to(&mut self, location: &Location) {
        self.jumps.push(location.clone());
    }

    fn show_locations(&mut self, locations: &[Location]) {
        self.lists.push(locations.to_vec());
    }

    fn show_preview(&mut self, text: &str) {
        self.previews.push(text.to_string());
    }

    fn show_message(&mut self, text: &str) {
        self.messages.push(text.to_string());
    }
}
