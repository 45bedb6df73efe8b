use alloy::primitives::U256;

/// Errors that terminate execution of a [`VM`](crate::core::vm::VM).
///
/// None of these are recoverable from inside the machine. Once a step fails the instance should
/// be discarded, or explicitly [`reset`](crate::core::vm::VM::reset).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An operation needed more operands than the stack holds. Raised before anything is popped.
    #[error("stack underflow: {opcode} requires {required} operand(s), found {available}")]
    StackUnderflow {
        /// Name of the opcode that failed
        opcode: &'static str,
        /// Operands the opcode consumes
        required: usize,
        /// Operands present on the stack
        available: usize,
    },

    /// A push would grow the stack past the configured depth limit.
    #[error("stack overflow (max {limit})")]
    StackOverflow {
        /// The configured depth limit
        limit: usize,
    },

    /// An unrecognized opcode was fetched while running under
    /// [`OpcodePolicy::Strict`](crate::core::vm::OpcodePolicy::Strict).
    #[error("invalid opcode 0x{opcode:02x} at offset {offset}")]
    InvalidOpcode {
        /// The opcode byte
        opcode: u8,
        /// Position of the opcode in the bytecode
        offset: usize,
    },

    /// A memory offset does not fit the host address space.
    #[error("invalid memory offset: {0:#x}")]
    InvalidMemoryOffset(U256),

    /// A store would grow memory past the configured byte limit.
    #[error("memory limit exceeded: {required} bytes required, limit is {limit}")]
    MemoryLimitExceeded {
        /// Memory size the store needs
        required: usize,
        /// The configured byte limit
        limit: usize,
    },

    /// The host allocator refused to grow memory.
    #[error("failed to allocate {required} bytes of memory")]
    OutOfMemory {
        /// Memory size the store needs
        required: usize,
    },

    /// `run` executed the configured number of steps without reaching the end of the bytecode.
    #[error("step limit of {0} exceeded")]
    StepLimitExceeded(u64),
}
