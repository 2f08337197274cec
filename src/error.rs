//! Error handling for the gen-mq application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for gen-mq operations.
///
/// Structural problems (a configuration document that does not match the
/// expected shape) surface as `ConfigError` at load time, before any of the
/// value checks the reader and writer perform on their call arguments.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors that occur during configuration parsing or processing
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Represents structurally valid but semantically unusable input
    /// (empty project name, empty template set and the like)
    #[error("Value error: {0}.")]
    ValueError(String),

    /// Represents errors that occur during placeholder substitution
    #[error("Template error: {0}.")]
    TemplateError(String),

    /// Represents post-write validation failures on generated files
    #[error("Validation error: {0}.")]
    ValidationError(String),

    /// The target project directory already exists; generation never
    /// overwrites or merges into an existing project
    #[error("Project directory '{pro_name}' already exists.")]
    ProjectExistsError { pro_name: String },

    /// Represents errors raised by the interactive selection prompt
    #[error("Prompt error: {0}.")]
    PromptError(String),
}

/// Convenience type alias for Results with gen-mq's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
