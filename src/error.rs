//! Error type shared by construction, loading and interpretation.

use thiserror::Error;

/// Everything that can go wrong while building or running an [`LSystem`](crate::LSystem).
///
/// Expansion and interpretation are deterministic, so none of these are transient:
/// each one points at a defect in the caller's input.
#[derive(Debug, Error)]
pub enum LSystemError {
    /// An action table names something outside the six known action kinds.
    #[error("unknown action kind '{name}' for symbol '{symbol}'")]
    UnknownActionKind { symbol: char, name: String },

    /// A `restore_state` symbol was reached with nothing saved.
    #[error("stack underflow: restore_state at symbol index {index} with no saved state")]
    StackUnderflow { index: usize },

    /// A rule or action key was not exactly one character.
    #[error("symbol key '{key}' must be exactly one character")]
    InvalidSymbol { key: String },

    /// A required definition field was absent.
    #[error("definition is missing required field '{0}'")]
    MissingField(&'static str),

    #[error("failed to read definition: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse definition: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LSystemError>;
