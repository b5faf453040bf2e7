//! Application error types using thiserror
//!
//! Error hierarchy:
//! - VersionError: Debian version strings that cannot be decomposed
//! - ConstraintError: Dependency constraint lines that do not match the grammar
//! - InputError: A ConstraintError located in a specific input file
//! - ConfigError: Issues with CLI configuration
//! - IoError: File system operation failures

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Malformed constraint in one of the input files
    #[error(transparent)]
    Input(#[from] InputError),

    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// IO related errors
    #[error(transparent)]
    Io(#[from] IoError),
}

/// Errors raised while decomposing a Debian version string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    /// The text before the first `:` is not a non-negative integer
    #[error("invalid epoch '{epoch}' in version '{version}'")]
    InvalidEpoch { version: String, epoch: String },
}

/// Errors raised while parsing a dependency constraint line
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstraintError {
    /// The line does not match the package/operator grammar
    #[error("invalid constraint '{line}': {message}")]
    Parse { line: String, message: String },

    /// A version inside the constraint could not be parsed
    #[error("invalid constraint '{line}': {source}")]
    Version {
        line: String,
        #[source]
        source: VersionError,
    },
}

/// A constraint error attributed to a line of an input file
#[derive(Error, Debug)]
#[error("{path}:{line_number}: {source}")]
pub struct InputError {
    pub path: PathBuf,
    pub line_number: usize,
    #[source]
    pub source: ConstraintError,
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Not enough positional arguments
    #[error("Usage: {program} output_deps_file input1_deps_file input2_deps_file ...")]
    Usage { program: String },

    /// Conflicting options
    #[error("conflicting options: {message}")]
    ConflictingOptions { message: String },
}

/// Errors related to IO operations
#[derive(Error, Debug)]
pub enum IoError {
    /// Failed to read an input file
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the output file
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A background read task panicked or was cancelled
    #[error("input task for {path} did not complete: {message}")]
    Task { path: PathBuf, message: String },
}

impl VersionError {
    /// Creates a new InvalidEpoch error
    pub fn invalid_epoch(version: impl Into<String>, epoch: impl Into<String>) -> Self {
        VersionError::InvalidEpoch {
            version: version.into(),
            epoch: epoch.into(),
        }
    }
}

impl ConstraintError {
    /// Creates a new Parse error
    pub fn parse(line: impl Into<String>, message: impl Into<String>) -> Self {
        ConstraintError::Parse {
            line: line.into(),
            message: message.into(),
        }
    }

    /// Creates a new Version error
    pub fn version(line: impl Into<String>, source: VersionError) -> Self {
        ConstraintError::Version {
            line: line.into(),
            source,
        }
    }
}

impl InputError {
    /// Attributes a constraint error to a file and 1-based line number
    pub fn new(path: impl Into<PathBuf>, line_number: usize, source: ConstraintError) -> Self {
        InputError {
            path: path.into(),
            line_number,
            source,
        }
    }
}

impl ConfigError {
    /// Creates a new Usage error for the given program name
    pub fn usage(program: impl Into<String>) -> Self {
        ConfigError::Usage {
            program: program.into(),
        }
    }
}

impl IoError {
    /// Creates a new Read error
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IoError::Read {
            path: path.into(),
            source,
        }
    }

    /// Creates a new Write error
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IoError::Write {
            path: path.into(),
            source,
        }
    }

    /// Creates a new Task error
    pub fn task(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        IoError::Task {
            path: path.into(),
            message: message.into(),
        }
    }
}
