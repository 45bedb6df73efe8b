#[cfg(feature = "step-tracing")]
use std::time::Instant;

use tracing::debug;
#[cfg(feature = "step-tracing")]
use tracing::trace;

use crate::{
    core::{memory::Memory, opcodes::OpCodeInfo, stack::Stack},
    error::Error,
};

use super::{
    config::ExecutionConfig,
    dispatch::{check_stack, JUMP_TABLE},
    execution::{ExecutionResult, Instruction, State},
};

/// The [`VM`] struct represents a single interpreter instance. \
/// It owns one immutable program along with the [`Stack`] and [`Memory`] that program mutates.
#[derive(Clone, Debug)]
pub struct VM {
    /// The operand stack that holds values during execution.
    pub stack: Stack,

    /// The linear memory written by store instructions.
    pub memory: Memory,

    /// The current instruction pointer (program counter), zero-based.
    pub instruction: usize,

    /// The bytecode being executed.
    pub bytecode: Vec<u8>,

    /// The policy this instance runs under.
    pub config: ExecutionConfig,

    /// The number of instructions executed so far.
    pub steps: u64,

    /// The time when execution started (only available with step-tracing feature).
    #[cfg(feature = "step-tracing")]
    pub start_time: Instant,
}

impl VM {
    /// Creates a new [`VM`] instance for the given bytecode with the default, permissive
    /// [`ExecutionConfig`].
    ///
    /// ```
    /// use minievm_vm::core::vm::VM;
    ///
    /// let vm = VM::new(&[0x60, 0x02]);
    /// assert_eq!(vm.instruction, 0);
    /// assert!(vm.stack.is_empty());
    /// ```
    pub fn new(bytecode: &[u8]) -> VM {
        VM::with_config(bytecode, ExecutionConfig::default())
    }

    /// Creates a new [`VM`] instance for the given bytecode, running under `config`.
    pub fn with_config(bytecode: &[u8], config: ExecutionConfig) -> VM {
        VM {
            stack: Stack::new(),
            memory: Memory::with_limit(config.memory_limit),
            instruction: 0,
            bytecode: bytecode.to_vec(),
            config,
            steps: 0,
            #[cfg(feature = "step-tracing")]
            start_time: Instant::now(),
        }
    }

    /// Whether the instruction pointer has run off the end of the bytecode.
    pub fn is_finished(&self) -> bool {
        self.instruction >= self.bytecode.len()
    }

    /// Fetches the opcode at the instruction pointer and advances past it. Returns `None` once
    /// the bytecode is exhausted.
    ///
    /// ```
    /// use minievm_vm::core::vm::VM;
    ///
    /// let mut vm = VM::new(&[0x01]);
    /// assert_eq!(vm.next_instruction(), Some(0x01));
    /// assert_eq!(vm.instruction, 1);
    /// assert_eq!(vm.next_instruction(), None);
    /// ```
    pub fn next_instruction(&mut self) -> Option<u8> {
        let opcode = self.bytecode.get(self.instruction).copied()?;
        self.instruction += 1;
        Some(opcode)
    }

    /// Executes the next instruction in the bytecode. Returns information about the instruction
    /// executed, or `None` if there was nothing left to execute.
    fn _step(&mut self) -> Result<Option<Instruction>, Error> {
        let last_instruction = self.instruction;
        let Some(opcode) = self.next_instruction() else {
            return Ok(None);
        };
        self.steps += 1;

        #[cfg(feature = "step-tracing")]
        let start_time = Instant::now();

        let handler = match JUMP_TABLE[opcode as usize] {
            Some(handler) => handler,
            None if self.config.is_strict() => {
                return Err(Error::InvalidOpcode { opcode, offset: last_instruction });
            }
            None => {
                debug!(
                    pc = last_instruction,
                    opcode = %format!("{opcode:#04x}"),
                    "skipping unknown opcode"
                );
                return Ok(Some(Instruction {
                    instruction: last_instruction,
                    opcode,
                    inputs: Vec::new(),
                    outputs: Vec::new(),
                }));
            }
        };

        let opcode_info = OpCodeInfo::from(opcode);
        check_stack(self, &opcode_info)?;
        let inputs = self.stack.peek_n(opcode_info.inputs() as usize);

        // if step-tracing feature is enabled, print the current operation
        #[cfg(feature = "step-tracing")]
        trace!(
            pc = last_instruction,
            opcode = opcode_info.name(),
            inputs = ?inputs
                .iter()
                .map(|x| format!("{x:#x}"))
                .collect::<Vec<String>>(),
            "executing opcode"
        );

        // execute the operation
        handler(self, opcode)?;

        let outputs = self.stack.peek_n(opcode_info.outputs() as usize);

        #[cfg(feature = "step-tracing")]
        trace!(
            pc = last_instruction,
            opcode = opcode_info.name(),
            outputs = ?outputs
                .iter()
                .map(|x| format!("{x:#x}"))
                .collect::<Vec<String>>(),
            elapsed = ?Instant::now().duration_since(start_time),
            ops_per_sec = (self.steps as f64 / self.start_time.elapsed().as_secs_f64()),
            mem_size = self.memory.size(),
            stack_size = self.stack.size(),
            "done executing opcode"
        );

        Ok(Some(Instruction { instruction: last_instruction, opcode, inputs, outputs }))
    }

    /// Executes the next instruction in the VM and returns a snapshot of the VM state after
    /// executing the instruction. Returns `None` once the bytecode is exhausted.
    ///
    /// ```
    /// use minievm_vm::core::{vm::VM, word::Word};
    ///
    /// let mut vm = VM::new(&[0x60, 0x02, 0x19]);
    ///
    /// let state = vm.step().unwrap().expect("PUSH1 executes");
    /// assert_eq!(state.last_instruction.instruction, 0);
    /// assert_eq!(state.stack.peek(0), Word::from(2));
    ///
    /// let state = vm.step().unwrap().expect("NOT executes");
    /// assert_eq!(state.last_instruction.inputs, vec![Word::from(2)]);
    ///
    /// assert!(vm.step().unwrap().is_none());
    /// ```
    pub fn step(&mut self) -> Result<Option<State>, Error> {
        let Some(instruction) = self._step()? else {
            return Ok(None);
        };

        Ok(Some(State {
            last_instruction: instruction,
            stack: self.stack.clone(),
            memory: self.memory.clone(),
        }))
    }

    /// View the next n instructions without executing them
    ///
    /// ```
    /// use minievm_vm::core::vm::VM;
    ///
    /// let vm = VM::new(&[0x60, 0x01, 0x50]);
    ///
    /// let states = vm.peek(5).unwrap();
    /// assert_eq!(states.len(), 2);
    /// assert_eq!(vm.instruction, 0);
    /// ```
    pub fn peek(&self, n: usize) -> Result<Vec<State>, Error> {
        let mut states = Vec::new();
        let mut vm_clone = self.clone();

        for _ in 0..n {
            match vm_clone.step()? {
                Some(state) => states.push(state),
                None => break,
            }
        }

        Ok(states)
    }

    /// Resets the VM state for a new execution of the same bytecode.
    ///
    /// ```
    /// use minievm_vm::core::vm::VM;
    ///
    /// let mut vm = VM::new(&[0x60, 0x01]);
    /// vm.run().expect("execution failed");
    /// assert_eq!(vm.stack.size(), 1);
    ///
    /// vm.reset();
    /// assert_eq!(vm.instruction, 0);
    /// assert!(vm.stack.is_empty());
    /// ```
    pub fn reset(&mut self) {
        self.stack = Stack::new();
        self.memory = Memory::with_limit(self.config.memory_limit);
        self.instruction = 0;
        self.steps = 0;
    }

    /// Executes the code until the instruction pointer reaches the end of the bytecode.
    ///
    /// ```
    /// use minievm_vm::core::{vm::VM, word::Word};
    ///
    /// let mut vm = VM::new(&[0x60, 0x02, 0x60, 0x03, 0x01]);
    /// let result = vm.run().expect("execution failed");
    /// assert_eq!(result.stack, vec![Word::from(5)]);
    /// ```
    pub fn run(&mut self) -> Result<ExecutionResult, Error> {
        debug!(size = self.bytecode.len(), "running bytecode");

        while !self.is_finished() {
            if let Some(limit) = self.config.step_limit {
                if self.steps >= limit {
                    return Err(Error::StepLimitExceeded(limit));
                }
            }

            if let Err(e) = self._step() {
                debug!(pc = self.instruction, "execution failed: {e}");
                return Err(e);
            }
        }

        debug!(
            steps = self.steps,
            stack_size = self.stack.size(),
            mem_size = self.memory.size(),
            "execution finished"
        );

        Ok(ExecutionResult {
            stack: self.stack.to_vec(),
            memory: self.memory.memory.clone(),
            instruction: self.instruction,
            steps: self.steps,
        })
    }
}
