//! The Disassembler module provides functionality to convert minievm bytecode
//! into human-readable assembly instructions.
//!
//! Each instruction is rendered on its own line as `offset NAME immediate`, where the immediate
//! column is only filled for PUSH1 through PUSH32.

/// Error types for the disassembler module
pub mod error;

mod core;
mod interfaces;

// re-export the public interface
pub use crate::core::disassemble;
pub use error::Error;
pub use interfaces::{DisassemblerArgs, DisassemblerArgsBuilder};
