//! gen-mq is a project scaffolding generator for C message queue skeletons.
//! Given a project name and a type (posix or sysv), it loads the configured
//! templates, substitutes `${PRO}` and `${YEAR}` into each and writes the
//! results into a freshly created project directory.

/// Command-line interface module for the gen-mq application
pub mod cli;

/// Configuration handling for gen-mq
/// Loads conf/project.yaml and exposes per-type (module, template) pairs
pub mod config;

/// Common constants shared across modules
pub mod constants;

/// Error types and handling for the gen-mq application
pub mod error;

/// Generation orchestration
/// Combines configuration, reader and writer into one pipeline
pub mod generator;

/// Logger setup
pub mod logger;

/// User input and interaction handling
pub mod prompt;

/// Template reading keyed by output module name
pub mod reader;

/// Placeholder substitution engine
pub mod renderer;

/// Template writing, permission setting and post-write validation
pub mod writer;
