//! rtags-bridge
//!
//! An editor-agnostic bridge between a text editor and the rtags source
//! indexing daemon. User-invoked editor commands (jump to definition,
//! find references, class hierarchy, dependency queries, include-file
//! lookup) are forwarded to the daemon through its `rc` query client,
//! and the responses are routed back to the editor's display surfaces
//! (cursor jump, quickfix list, preview, message).
//!
//! The bridge holds no index and parses no source code; the daemon owns
//! all of that. What the bridge owns is the resilient request/response
//! path: query construction, per-request timeouts, response parsing, and
//! result-shape routing.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐  EditorSurface  ┌─────────────────┐
//! │   Host editor   │◄───────────────►│  EditorAdapter  │
//! │ (or terminal)   │                 │ + CommandRegistry│
//! └─────────────────┘                 └────────┬────────┘
//!                                              │
//!                                       ┌──────▼──────┐
//!                                       │ RtagsClient │
//!                                       └──────┬──────┘
//!                                              │ rc CLI
//!                                       ┌──────▼──────┐
//!                                       │ rtags daemon│
//!                                       │    (rdm)    │
//!                                       └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`error`] - Error types for the entire application
//! - [`rtags`] - Daemon client implementation
//! - [`editor`] - Editor adapter, surface contract, command registry
//! - [`config`] - Deployment configuration
//!
//! # Example
//!
//! ```ignore
//! use rtags_bridge::editor::{CommandRegistry, EditorAdapter, TerminalSurface};
//! use rtags_bridge::rtags::{Position, RtagsClient};
//!
//! let client = RtagsClient::builder().rc_command("rc").build();
//! let surface = TerminalSurface::new(Position::new("/src/main.cpp", 12, 5));
//! let mut adapter = EditorAdapter::new(surface, client);
//! let registry = CommandRegistry::new();
//! registry.dispatch(&mut adapter, "jump-to", &[]).await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod editor;
pub mod error;
pub mod rtags;

// Re-export commonly used types at the crate root
pub use error::{Error, Result};
