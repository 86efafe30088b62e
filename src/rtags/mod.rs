//! rtags daemon client module.
//!
//! This module implements the client side of the bridge: it issues
//! queries against the rtags daemon through its `rc` command-line front
//! end and parses the textual responses into structured results.
//!
//! # Architecture
//!
//! The rtags module is organized into:
//! - `client`: the daemon client, one operation per query kind
//! - `types`: positions, locations, and the dependency-filter enumeration
//!
//! The client owns the transport completely: any failure to reach or be
//! understood by the daemon surfaces as an [`RtagsError`], never as a raw
//! process error, so the editor layer only ever routes results.

pub mod client;
pub mod types;

use crate::error::RtagsError;

/// Result type for daemon-client operations.
pub type RtagsResult<T> = std::result::Result<T, RtagsError>;

pub use client::{RtagsClient, RtagsClientBuilder, RtagsClientConfig};
pub use types::{DependencyFilter, Location, Position};
