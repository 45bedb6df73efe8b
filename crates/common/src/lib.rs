//! Common utilities, constants, and resources used across the minievm codebase.
//!
//! This crate provides shared functionality for the minievm toolkit: hex encoding, resolving a
//! bytecode target given on the command line, and small file helpers.

/// Constants used throughout the minievm codebase.
pub mod constants;

/// Error types for the common crate
pub mod error;

/// Utilities for turning user input into bytecode.
pub mod input;

/// General utility functions and types for common tasks.
pub mod utils;

pub use error::Error;
