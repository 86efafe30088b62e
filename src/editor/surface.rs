//! The editor surface contract.
//!
//! The original design wrapped the host editor in a dynamically typed
//! shim; here the six capabilities the bridge actually consumes are an
//! explicit trait, so any host binding (and any test double) can satisfy
//! them without the bridge knowing which editor it lives in.

use std::path::PathBuf;

use crate::rtags::{Location, Position};

/// The capabilities a host editor provides to the bridge.
///
/// The bridge only ever calls these; it never implements cursor or
/// window handling itself. Display methods take `&mut self` because a
/// surface typically mutates host state (quickfix list, preview window).
pub trait EditorSurface {
    /// Returns the current cursor location.
    fn current_position(&self) -> Position;

    /// Returns the path of the file in the current buffer.
    fn current_path(&self) -> PathBuf;

    /// Moves the cursor to the given location.
    fn jump_to(&mut self, location: &Location);

    /// Shows multiple locations in a quickfix/location-list style view.
    fn show_locations(&mut self, locations: &[Location]);

    /// Shows read-only multi-line text in a preview view.
    fn show_preview(&mut self, text: &str);

    /// Prints a one-shot message to the user.
    fn show_message(&mut self, text: &str);
}

/// A surface backed by the terminal, used by the headless CLI binary.
///
/// Locations and previews go to stdout; messages go to stderr so query
/// output stays clean for scripting.
#[derive(Debug)]
pub struct TerminalSurface {
    position: Position,
}

impl TerminalSurface {
    /// Creates a terminal surface acting as a cursor at `position`.
    pub fn new(position: Position) -> Self {
        Self { position }
    }
}

impl EditorSurface for TerminalSurface {
    fn current_position(&self) -> Position {
        self.position.clone()
    }

    fn current_path(&self) -> PathBuf {
        self.position.path.clone()
    }

    fn jump_to(&mut self, location: &Location) {
        println!("{}", location.position);
    }

    fn show_locations(&mut self, locations: &[Location]) {
        for location in locations {
            println!("{location}");
        }
    }

    fn show_preview(&mut self, text: &str) {
        println!("{text}");
    }

    fn show_message(&mut self, text: &str) {
        eprintln!("{text}");
    }
}
