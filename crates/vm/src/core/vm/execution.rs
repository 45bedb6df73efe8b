use crate::core::{memory::Memory, stack::Stack, word::Word};

/// [`ExecutionResult`] is the outcome of running a program to completion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExecutionResult {
    /// The final operand stack, ordered bottom to top.
    pub stack: Vec<Word>,

    /// The final contents of memory.
    pub memory: Vec<u8>,

    /// The final instruction pointer value after execution.
    pub instruction: usize,

    /// The number of instructions executed.
    pub steps: u64,
}

/// [`State`] is the state of the VM after executing a single instruction. It is returned by the
/// [`VM::step`](super::VM::step) function, and can be used to trace execution.
#[derive(Clone, Debug)]
pub struct State {
    /// The instruction that was just executed.
    pub last_instruction: Instruction,

    /// The current state of the operand stack.
    pub stack: Stack,

    /// The current state of memory.
    pub memory: Memory,
}

/// [`Instruction`] is a single executed instruction, along with the stack values it consumed and
/// produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instruction {
    /// The position of this instruction in the bytecode.
    pub instruction: usize,

    /// The opcode value of the instruction.
    pub opcode: u8,

    /// The values this instruction popped, top first.
    pub inputs: Vec<Word>,

    /// The values this instruction pushed, top first.
    pub outputs: Vec<Word>,
}
