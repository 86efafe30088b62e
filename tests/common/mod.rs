//! Common test helpers and utilities.

#![allow(dead_code)]

pub mod fake_rc;
pub mod surface;

// Re-export for convenience
pub use fake_rc::FakeRc;
pub use surface::RecordingSurface;
