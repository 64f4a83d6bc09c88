//! Error types for drycontact.
//!
//! Uses `thiserror` for ergonomic error definitions.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by card and port operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CardError {
    #[error("bit position {0} is out of range (0-7)")]
    InvalidBitPosition(u8),

    #[error("port {index} is out of range (card has {ports} ports)")]
    PortOutOfRange { index: usize, ports: usize },

    #[error("pin {pin} is out of range (card has {pins} pins)")]
    PinOutOfRange { pin: u32, pins: u32 },
}

/// Result type alias for card operations.
pub type CardResult<T> = Result<T, CardError>;

/// Errors from parsing a textual card operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OpError {
    #[error("unknown operation: {0}")]
    Unknown(String),

    #[error("missing argument for '{0}'")]
    MissingArgument(String),

    #[error("invalid port assignment: {0}")]
    InvalidPortAssignment(String),

    #[error("invalid state byte: {0}")]
    InvalidStateByte(String),

    #[error(transparent)]
    Pins(#[from] crate::types::PinError),
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not determine configuration directory")]
    DirectoryNotFound,

    #[error("failed to read {path}: {reason}")]
    ReadFailed { path: PathBuf, reason: String },

    #[error("failed to write {path}: {reason}")]
    WriteFailed { path: PathBuf, reason: String },

    #[error("invalid configuration format: {0}")]
    InvalidFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Card profile errors.
#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("profile '{0}' not found")]
    NotFound(String),

    #[error("profile '{0}' already exists")]
    AlreadyExists(String),

    #[error("invalid profile: {0}")]
    Invalid(String),

    #[error("failed to save profile: {0}")]
    SaveFailed(String),

    #[error(transparent)]
    Pins(#[from] crate::types::PinError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type alias for profile operations.
pub type ProfileResult<T> = Result<T, ProfileError>;

/// Top-level error for command handlers.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Card(#[from] CardError),

    #[error(transparent)]
    Op(#[from] OpError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Profile(#[from] ProfileError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for command handlers.
pub type CliResult<T> = Result<T, CliError>;
