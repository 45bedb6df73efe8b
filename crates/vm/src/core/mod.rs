/// Memory implementation for VM memory management
pub mod memory;

/// Opcode definitions and metadata
pub mod opcodes;

/// Stack implementation for the VM
pub mod stack;

/// Core virtual machine implementation
pub mod vm;

/// Modular 256-bit word arithmetic
pub mod word;
