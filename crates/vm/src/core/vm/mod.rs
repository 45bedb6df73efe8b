//! Virtual Machine implementation.
//!
//! This module provides the core VM struct and its execution logic,
//! organized into submodules for better maintainability.

mod config;
mod core;
mod dispatch;
mod execution;

/// Opcode handlers organized by category.
pub mod handlers;

pub use self::core::VM;
pub use config::{ExecutionConfig, ExecutionConfigBuilder, OpcodePolicy, MAX_STACK_DEPTH};
pub use execution::{ExecutionResult, Instruction, State};
