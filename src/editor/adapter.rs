//! The editor adapter: command handlers and result routing.
//!
//! Each handler follows the same stateless request/route sequence: read
//! the cursor or path from the surface, issue exactly one daemon query,
//! and funnel the outcome into exactly one surface call. The only state
//! carried across invocations is the include-file completion history.
//!
//! A failed query never propagates out of a handler; it is rendered as a
//! single user message, because a plugin failure must never destabilize
//! the host editor session.

use std::collections::BTreeSet;

use tracing::warn;

use crate::error::RtagsError;
use crate::rtags::types::DependencyFilter;
use crate::rtags::{Location, RtagsClient};

use super::surface::EditorSurface;

/// Returns the dependency-filter keywords starting with `lead`.
///
/// Case-sensitive prefix match over the fixed enumeration, in its fixed
/// order; the empty lead returns the full enumeration. Pure function,
/// no I/O.
pub fn complete_dependency_filter(lead: &str) -> Vec<&'static str> {
    DependencyFilter::ALL
        .into_iter()
        .map(DependencyFilter::as_str)
        .filter(|keyword| keyword.starts_with(lead))
        .collect()
}

/// Translates user-invoked editor commands into daemon queries and
/// routes the results to the host surface.
pub struct EditorAdapter<S: EditorSurface> {
    surface: S,
    client: RtagsClient,
    /// Symbols previously passed to the include-file command, kept for
    /// the session to seed command-line completion.
    include_history: BTreeSet<String>,
}

impl<S: EditorSurface> EditorAdapter<S> {
    /// Creates an adapter bridging `surface` to `client`.
    pub fn new(surface: S, client: RtagsClient) -> Self {
        Self {
            surface,
            client,
            include_history: BTreeSet::new(),
        }
    }

    /// Returns the host surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Consumes the adapter and returns the host surface.
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Finds all references to the symbol under the cursor.
    pub async fn find_references(&mut self) {
        let pos = self.surface.current_position();
        match self.client.find_references(&pos).await {
            Ok(locations) => self.route_locations(&locations, "No references found"),
            Err(e) => self.report_failure(&e),
        }
    }

    /// Finds virtual overrides of the function under the cursor.
    pub async fn find_virtuals(&mut self) {
        let pos = self.surface.current_position();
        match self.client.find_virtuals(&pos).await {
            Ok(locations) => self.route_locations(&locations, "No virtual overrides found"),
            Err(e) => self.report_failure(&e),
        }
    }

    /// Jumps to whatever the symbol under the cursor points at, falling
    /// back to a list when the target is ambiguous.
    pub async fn jump_to(&mut self) {
        let pos = self.surface.current_position();
        match self.client.follow_location(&pos).await {
            Ok(locations) => self.route_locations(&locations, "Nothing found at cursor"),
            Err(e) => self.report_failure(&e),
        }
    }

    /// Shows the daemon's description of the symbol under the cursor.
    pub async fn symbol_info(&mut self) {
        let pos = self.surface.current_position();
        match self.client.symbol_info(&pos).await {
            Ok(lines) if lines.is_empty() => {
                self.surface.show_message("Could not find symbol info");
            }
            Ok(lines) => self.surface.show_message(&lines.join("\n")),
            Err(e) => self.report_failure(&e),
        }
    }

    /// Shows the preprocessed source of the current file in a preview.
    pub async fn preprocess(&mut self) {
        let path = self.surface.current_path();
        match self.client.preprocess_file(&path).await {
            Ok(text) => self.surface.show_preview(&text),
            Err(e) => self.report_failure(&e),
        }
    }

    /// Looks up the include line providing the given symbol and shows it
    /// as a message.
    ///
    /// The symbol is recorded into the completion history before the
    /// query. An empty daemon answer means "no suitable include"; that is
    /// reported with a literal fallback message, not as a failure. A
    /// missing argument is rejected with a message before any daemon
    /// call.
    pub async fn find_include_file(&mut self, args: &[String]) {
        let Some(symbol) = args.first() else {
            self.surface.show_message("Must give an argument");
            return;
        };
        self.include_history.insert(symbol.clone());

        let path = self.surface.current_path();
        match self.client.include_file(&path, symbol).await {
            Ok(result) if result.is_empty() => self.surface.show_message("No include found"),
            Ok(result) => self.surface.show_message(&result),
            Err(e) => self.report_failure(&e),
        }
    }

    /// Shows the class hierarchy around the symbol under the cursor in a
    /// preview, or a message when the daemon found none.
    pub async fn class_hierarchy(&mut self) {
        let pos = self.surface.current_position();
        match self.client.class_hierarchy(&pos).await {
            Ok(text) if text.is_empty() => {
                self.surface.show_message("Could not find class hierarchy");
            }
            Ok(text) => self.surface.show_preview(&text),
            Err(e) => self.report_failure(&e),
        }
    }

    /// Shows the dependency relations of the current file in a preview.
    ///
    /// The optional first argument selects the relation kind and is
    /// passed to the daemon unvalidated; absence means the daemon's
    /// default relation.
    pub async fn dependencies(&mut self, args: &[String]) {
        let filter = args.first().map(String::as_str).unwrap_or("");
        let path = self.surface.current_path();
        match self.client.dependencies(&path, filter).await {
            Ok(text) if text.is_empty() => {
                self.surface.show_message("Could not find file dependencies");
            }
            Ok(text) => self.surface.show_preview(&text),
            Err(e) => self.report_failure(&e),
        }
    }

    /// Returns the include-file completion candidates recorded this
    /// session. The host performs any prefix filtering itself.
    pub fn complete_include_file(&self) -> Vec<String> {
        self.include_history.iter().cloned().collect()
    }

    /// Routes a location result by shape: nothing, a direct jump, or a
    /// list.
    fn route_locations(&mut self, locations: &[Location], not_found: &str) {
        match locations {
            [] => self.surface.show_message(not_found),
            [single] => self.surface.jump_to(single),
            many => self.surface.show_locations(many),
        }
    }

    /// Renders a transport failure as exactly one user message.
    fn report_failure(&mut self, error: &RtagsError) {
        warn!(%error, "rtags query failed");
        self.surface.show_message(&format!("rtags: {error}"));
    }
}
