//! minievm virtual machine implementation
//!
//! This crate provides a small stack machine with 256-bit words, a growable linear memory and a
//! fixed instruction set drawn from the EVM's arithmetic, comparison, bitwise, stack and memory
//! opcodes.

/// Core VM implementation, including memory, stack, word arithmetic, and opcodes
pub mod core;

/// Error types for the VM
pub mod error;

pub use error::Error;
