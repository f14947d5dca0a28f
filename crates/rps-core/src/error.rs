//! Error types
//!
//! Three layers, from least to most severe:
//! - [`InputError`]: bad user input, always answered with a re-prompt
//! - [`ValidationError`]: a broken invariant, fatal for the call path
//! - [`GameError`]: what a session or the menu loop can end with

use thiserror::Error;

/// Rejected user input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Name cannot be empty.")]
    EmptyName,

    #[error("Whitespaces are not allowed in the name.")]
    WhitespaceInName,

    #[error("unknown menu option '{0}'")]
    InvalidMenuOption(String),

    #[error("unknown mode option '{0}'")]
    InvalidModeOption(String),

    #[error("unknown attack option '{0}'")]
    InvalidAttackOption(String),
}

/// Values that must never reach the game rules
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid fight outcome code {0}")]
    InvalidOutcome(i8),

    #[error("invalid game mode '{0}'")]
    InvalidMode(String),

    #[error("invalid enemy level {0}")]
    InvalidLevel(u32),
}

/// Score file errors
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed score line {line}: '{content}'")]
    MalformedLine { line: usize, content: String },

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Ways a session or the menu loop can stop early
#[derive(Debug, Error)]
pub enum GameError {
    /// The user asked to leave, or input ran out
    #[error("player quit the game")]
    UserQuit,

    #[error("console error: {0}")]
    Io(#[from] std::io::Error),

    #[error("score file error: {0}")]
    Score(#[from] ScoreError),

    #[error("broken game invariant: {0}")]
    Invariant(#[from] ValidationError),
}
