//! Opcode handlers organized by category.
//!
//! Each submodule contains handler functions for related opcodes. Handlers may assume the
//! dispatcher has already checked that the stack holds enough operands.

/// Arithmetic operations: ADD, MUL, SUB, DIV, MOD
pub mod arithmetic;

/// Bitwise operations: AND, OR, XOR, NOT, SHL, SHR
pub mod bitwise;

/// Comparison operations: LT, GT, EQ
pub mod comparison;

/// Memory operations: MSTORE, MSTORE8
pub mod memory;

/// Stack operations: POP, PUSH0-PUSH32
pub mod stack;
