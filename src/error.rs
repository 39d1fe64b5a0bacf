//! Error types for the IRC message layer.
//!
//! Parsing a message never panics and dispatch never fails: structural
//! problems are reported as a [`MessageParseError`] that is attached to the
//! produced [`Message`](crate::Message) instead of aborting.

use thiserror::Error;

/// Convenience type alias for Results using [`MessageParseError`].
pub type Result<T, E = MessageParseError> = std::result::Result<T, E>;

/// Errors encountered when turning wire data into a message.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum MessageParseError {
    /// The line was empty (or only whitespace and line terminators).
    #[error("empty message")]
    EmptyMessage,

    /// The command token was missing.
    #[error("missing command")]
    MissingCommand,

    /// A numeric command token was not exactly three ASCII digits.
    #[error("invalid numeric command: {0:?}")]
    InvalidNumeric(String),

    /// The raw line could not be split into prefix, command and parameters.
    #[error("malformed line at position {position}: {context}")]
    MalformedLine {
        /// Byte position where splitting failed.
        position: usize,
        /// Description of what was being parsed.
        context: String,
    },
}

/// Errors encountered when loading a registry configuration.
#[cfg(feature = "serde")]
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration was not valid TOML or did not match the schema.
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
}
