//! Value types for rtags daemon queries.
//!
//! This module provides the location grammar shared with the daemon:
//! `rc` addresses source positions as `path:line:column` and answers
//! location queries with one such location per output line, optionally
//! followed by the source text at that position.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::RtagsError;

use super::RtagsResult;

/// A cursor location: file path plus 1-indexed line and column.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    /// Path to the source file.
    pub path: PathBuf,
    /// Line number (1-indexed).
    pub line: u32,
    /// Column number (1-indexed).
    pub column: u32,
}

impl Position {
    /// Creates a new position.
    pub fn new(path: impl Into<PathBuf>, line: u32, column: u32) -> Self {
        Self {
            path: path.into(),
            line,
            column,
        }
    }
}

impl fmt::Display for Position {
    /// Formats the position in the daemon's `path:line:column` grammar.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.path.display(), self.line, self.column)
    }
}

/// One entry of a location result: a position plus the optional source
/// context the daemon echoes after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// Where the match is.
    pub position: Position,
    /// The source line at the match, when the daemon provided it.
    pub context: Option<String>,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.context {
            Some(context) => write!(f, "{}\t{}", self.position, context),
            None => write!(f, "{}", self.position),
        }
    }
}

/// Parses one `rc` output line into a [`Location`].
///
/// The line grammar is `path:line:column:` optionally followed by
/// whitespace and the source text at that location. Line and column must
/// be positive integers.
///
/// ## Errors
/// Returns [`RtagsError::MalformedOutput`] when the line does not match
/// the grammar.
pub fn parse_location_line(line: &str) -> RtagsResult<Location> {
    let malformed = || RtagsError::MalformedOutput(line.to_string());

    // Split off the numeric fields from the right so paths containing
    // ':' still parse. Everything after the column separator is context.
    let mut parts = line.splitn(2, '\t');
    let head = parts.next().ok_or_else(malformed)?;
    let tab_context = parts.next();

    // head is "path:line:column:" or "path:line:column: context"
    let (head, inline_context) = match head.find(": ") {
        Some(idx) => (&head[..idx + 1], Some(head[idx + 2..].to_string())),
        None => (head, None),
    };

    let head = head.strip_suffix(':').unwrap_or(head);
    let mut fields = head.rsplitn(3, ':');

    let column: u32 = fields
        .next()
        .and_then(|s| s.parse().ok())
        .ok_or_else(malformed)?;
    let (line_no, path): (u32, &str) = match (fields.next(), fields.next()) {
        (Some(l), Some(p)) => (l.parse().map_err(|_| malformed())?, p),
        _ => return Err(malformed()),
    };

    if line_no == 0 || column == 0 || path.is_empty() {
        return Err(malformed());
    }

    let context = tab_context
        .map(|c| c.trim_end().to_string())
        .or(inline_context)
        .filter(|c| !c.is_empty());

    Ok(Location {
        position: Position::new(path, line_no, column),
        context,
    })
}

/// Parses a block of `rc` output into a location list, one location per
/// non-empty line, preserving the daemon's order.
///
/// ## Errors
/// Returns [`RtagsError::MalformedOutput`] on the first unparseable line.
pub fn parse_location_lines(output: &str) -> RtagsResult<Vec<Location>> {
    output
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .map(parse_location_line)
        .collect()
}

/// The fixed set of dependency relations understood by the daemon's
/// `--dependencies` query.
///
/// The client itself never validates filter strings against this set;
/// the enumeration exists to seed command-line completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyFilter {
    /// Files the given file includes.
    Includes,
    /// Files that include the given file.
    IncludedBy,
    /// Files the given file depends on.
    DependsOn,
    /// Files depending on the given file.
    DependedOn,
    /// Transitive dependency tree.
    TreeDependsOn,
    /// The daemon's raw dependency table.
    Raw,
}

impl DependencyFilter {
    /// All filters in the daemon's documented order.
    pub const ALL: [DependencyFilter; 6] = [
        DependencyFilter::Includes,
        DependencyFilter::IncludedBy,
        DependencyFilter::DependsOn,
        DependencyFilter::DependedOn,
        DependencyFilter::TreeDependsOn,
        DependencyFilter::Raw,
    ];

    /// The filter keyword as the daemon spells it.
    pub fn as_str(self) -> &'static str {
        match self {
            DependencyFilter::Includes => "includes",
            DependencyFilter::IncludedBy => "included-by",
            DependencyFilter::DependsOn => "depends-on",
            DependencyFilter::DependedOn => "depended-on",
            DependencyFilter::TreeDependsOn => "tree-depends-on",
            DependencyFilter::Raw => "raw",
        }
    }
}

impl fmt::Display for DependencyFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DependencyFilter {
    type Err = RtagsError;

    fn from_str(s: &str) -> RtagsResult<Self> {
        DependencyFilter::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| RtagsError::MalformedOutput(format!("unknown dependency filter: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_display() {
        let pos = Position::new("/src/main.cpp", 12, 5);
        assert_eq!(pos.to_string(), "/src/main.cpp:12:5");
    }

    #[test]
    fn test_parse_location_line_with_tab_context() {
        let loc = parse_location_line("/src/foo.cpp:42:9:\tint foo();").unwrap();
        assert_eq!(loc.position, Position::new("/src/foo.cpp", 42, 9));
        assert_eq!(loc.context.as_deref(), Some("int foo();"));
    }

    #[test]
    fn test_parse_location_line_with_space_context() {
        let loc = parse_location_line("/src/foo.cpp:42:9: int foo();").unwrap();
        assert_eq!(loc.position, Position::new("/src/foo.cpp", 42, 9));
        assert_eq!(loc.context.as_deref(), Some("int foo();"));
    }

    #[test]
    fn test_parse_location_line_without_context() {
        let loc = parse_location_line("/src/foo.cpp:42:9:").unwrap();
        assert_eq!(loc.position, Position::new("/src/foo.cpp", 42, 9));
        assert_eq!(loc.context, None);
    }

    #[test]
    fn test_parse_location_line_malformed() {
        assert!(parse_location_line("not a location").is_err());
        assert!(parse_location_line("/src/foo.cpp:0:1:").is_err());
        assert!(parse_location_line("/src/foo.cpp:1:0:").is_err());
        assert!(parse_location_line("/src/foo.cpp:abc:1:").is_err());
    }

    #[test]
    fn test_parse_location_lines_preserves_order_and_skips_blanks() {
        let output = "/a.cpp:1:1:\tfirst\n\n/b.cpp:2:2:\tsecond\n";
        let locs = parse_location_lines(output).unwrap();
        assert_eq!(locs.len(), 2);
        assert_eq!(locs[0].position.path, PathBuf::from("/a.cpp"));
        assert_eq!(locs[1].position.path, PathBuf::from("/b.cpp"));
    }

    #[test]
    fn test_parse_location_lines_empty_output() {
        assert!(parse_location_lines("").unwrap().is_empty());
        assert!(parse_location_lines("\n\n").unwrap().is_empty());
    }

    #[test]
    fn test_dependency_filter_round_trip() {
        for filter in DependencyFilter::ALL {
            assert_eq!(filter.as_str().parse::<DependencyFilter>().unwrap(), filter);
        }
        assert!("bogus".parse::<DependencyFilter>().is_err());
    }
}
