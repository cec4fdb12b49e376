//! Error handling for the stempel application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for stempel operations.
///
/// This enum represents all possible errors that can occur while resolving
/// project configuration or bundling templates. It implements the standard
/// Error trait through thiserror's derive macro.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    Io(#[from] io::Error),

    /// Represents errors in the caller-supplied project options
    #[error("Configuration error: {0}.")]
    Config(String),

    /// Publishing requires a source-control repository reference
    #[error("NPM publishing is enabled for '{name}' but no repository is configured.")]
    MissingRepository { name: String },

    /// Represents errors during template bundling or bundle parsing
    #[error("Template bundle error: {0}.")]
    Bundle(String),
}

/// Convenience type alias for Results with stempel's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{}", err);
    std::process::exit(1);
}
