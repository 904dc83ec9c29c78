//! Error taxonomy for formatting operations.
//!
//! Every failure is user-correctable (`NoSelection`, `NoCursor`), a
//! programming error in the caller's wiring (`UnknownStyle`,
//! `UnknownTheme`), or a problem reported by a collaborator (template
//! engine, theme file, host). There are no retries anywhere: each
//! operation is a one-shot user-triggered transform, re-run by the user
//! after correcting the precondition.

use std::path::PathBuf;

use thiserror::Error;

/// A failure reported by the host while mutating the document.
///
/// The core never interprets the message; it either aborts the current
/// action with it or, during theme application, records it and moves on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("host call failed: {0}")]
pub struct HostError(pub String);

impl HostError {
    /// Creates a host error from any message.
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Error type for formatting operations.
#[derive(Debug, Error)]
pub enum FormatError {
    /// A styling action ran with nothing selected.
    #[error("nothing is selected; select some text first")]
    NoSelection,

    /// An insertion action ran with no cursor placed.
    #[error("no cursor is placed; click where the block should go first")]
    NoCursor,

    /// A style name missing from the registry. Indicates broken caller
    /// wiring, not user error.
    #[error("unknown style name {0:?}")]
    UnknownStyle(String),

    /// A theme name missing from the preset table.
    #[error("unknown theme name {0:?}")]
    UnknownTheme(String),

    /// Template rendering failed.
    #[error("template rendering failed: {0}")]
    Template(#[from] minijinja::Error),

    /// A theme definition could not be parsed.
    #[error("theme definition is invalid: {0}")]
    ThemeParse(#[from] serde_yaml::Error),

    /// A theme file could not be read from disk.
    #[error("failed to read theme file {path:?}: {message}")]
    ThemeFile { path: PathBuf, message: String },

    /// The host rejected a mutation.
    #[error(transparent)]
    Host(#[from] HostError),
}
