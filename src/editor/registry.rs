//! The command registration table.
//!
//! Instead of decorator-style registration against a particular host,
//! the bridge builds an explicit table once at startup: command name,
//! argument arity, and the completion source the host should consult.
//! Hosts iterate [`CommandRegistry::specs`] to register their own
//! bindings, then route invocations through [`CommandRegistry::dispatch`].

use crate::error::CommandError;

use super::adapter::{EditorAdapter, complete_dependency_filter};
use super::surface::EditorSurface;

/// How many arguments a command accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// No arguments.
    None,
    /// Zero or one argument.
    Optional,
    /// Exactly one argument.
    Required,
}

/// Which completion source a command's argument draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The session's include-file history.
    IncludeHistory,
    /// The fixed dependency-filter enumeration.
    DependencyFilter,
}

/// Metadata for one user-invocable command.
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    /// The command name as the user invokes it.
    pub name: &'static str,
    /// Argument arity, enforced before any daemon call.
    pub arity: Arity,
    /// Completion source for the argument, when the command takes one.
    pub completion: Option<Completion>,
}

/// The full command table, built once during initialization.
#[derive(Debug)]
pub struct CommandRegistry {
    specs: [CommandSpec; 8],
}

impl CommandRegistry {
    /// Builds the registry.
    pub fn new() -> Self {
        Self {
            specs: [
                CommandSpec {
                    name: "find-references",
                    arity: Arity::None,
                    completion: None,
                },
                CommandSpec {
                    name: "find-virtuals",
                    arity: Arity::None,
                    completion: None,
                },
                CommandSpec {
                    name: "jump-to",
                    arity: Arity::None,
                    completion: None,
                },
                CommandSpec {
                    name: "symbol-info",
                    arity: Arity::None,
                    completion: None,
                },
                CommandSpec {
                    name: "preprocess",
                    arity: Arity::None,
                    completion: None,
                },
                CommandSpec {
                    name: "find-include-file",
                    arity: Arity::Required,
                    completion: Some(Completion::IncludeHistory),
                },
                CommandSpec {
                    name: "class-hierarchy",
                    arity: Arity::None,
                    completion: None,
                },
                CommandSpec {
                    name: "dependencies",
                    arity: Arity::Optional,
                    completion: Some(Completion::DependencyFilter),
                },
            ],
        }
    }

    /// Returns every registered command, in registration order.
    pub fn specs(&self) -> &[CommandSpec] {
        &self.specs
    }

    /// Looks up a command by name.
    pub fn lookup(&self, name: &str) -> Option<&CommandSpec> {
        self.specs.iter().find(|spec| spec.name == name)
    }

    /// Returns completion candidates for a command's argument.
    ///
    /// The host passes the argument lead typed so far; commands without
    /// a completion source complete to nothing. The include history is
    /// returned whole (the host prefix-filters it itself), matching the
    /// original completion contract.
    pub fn complete<S: EditorSurface>(
        &self,
        adapter: &EditorAdapter<S>,
        command: &str,
        lead: &str,
    ) -> Vec<String> {
        match self.lookup(command).and_then(|spec| spec.completion) {
            Some(Completion::IncludeHistory) => adapter.complete_include_file(),
            Some(Completion::DependencyFilter) => complete_dependency_filter(lead)
                .into_iter()
                .map(str::to_string)
                .collect(),
            None => Vec::new(),
        }
    }

    /// Routes a named invocation to the matching adapter handler.
    ///
    /// Unknown names and arity violations are rejected here, before any
    /// daemon call. Daemon failures never surface through dispatch; the
    /// adapter renders them as user messages.
    ///
    /// ## Errors
    /// Returns [`CommandError`] for unknown commands and arity
    /// violations.
    pub async fn dispatch<S: EditorSurface>(
        &self,
        adapter: &mut EditorAdapter<S>,
        name: &str,
        args: &[String],
    ) -> Result<(), CommandError> {
        let spec = self
            .lookup(name)
            .ok_or_else(|| CommandError::UnknownCommand(name.to_string()))?;

        match spec.arity {
            Arity::None if !args.is_empty() => {
                return Err(CommandError::TooManyArguments {
                    command: spec.name.to_string(),
                    max: 0,
                });
            }
            Arity::Optional | Arity::Required if args.len() > 1 => {
                return Err(CommandError::TooManyArguments {
                    command: spec.name.to_string(),
                    max: 1,
                });
            }
            Arity::Required if args.is_empty() => {
                return Err(CommandError::MissingArgument {
                    command: spec.name.to_string(),
                });
            }
            _ => {}
        }

        match spec.name {
            "find-references" => adapter.find_references().await,
            "find-virtuals" => adapter.find_virtuals().await,
            "jump-to" => adapter.jump_to().await,
            "symbol-info" => adapter.symbol_info().await,
            "preprocess" => adapter.preprocess().await,
            "find-include-file" => adapter.find_include_file(args).await,
            "class-hierarchy" => adapter.class_hierarchy().await,
            "dependencies" => adapter.dependencies(args).await,
            _ => unreachable!("registry specs and dispatch arms must match"),
        }

        Ok(())
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}
