//! Editor integration module.
//!
//! This module translates user-invoked editor commands into daemon
//! queries and routes the results back to the host editor's display
//! surfaces.
//!
//! # Architecture
//!
//! The editor module is organized into:
//! - `surface`: the capability contract a host editor must satisfy
//! - `adapter`: command handlers and result routing
//! - `registry`: the explicit command registration table
//!
//! The host side of the contract is deliberately tiny: six operations
//! (read cursor, read path, jump, list, preview, message). Everything a
//! command does funnels into exactly one of those calls per invocation.

pub mod adapter;
pub mod registry;
pub mod surface;

pub use adapter::{EditorAdapter, complete_dependency_filter};
pub use registry::{Arity, CommandRegistry, CommandSpec, Completion};
pub use surface::{EditorSurface, TerminalSurface};
