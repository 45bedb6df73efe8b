use crate::{
    core::{opcodes, word::Word},
    error::Error,
};

use super::super::core::VM;

/// POP - Remove item from stack
pub fn pop(vm: &mut VM, _: u8) -> Result<(), Error> {
    vm.stack.pop()?;
    Ok(())
}

/// PUSH0 - Push 0 onto stack
pub fn push0(vm: &mut VM, _: u8) -> Result<(), Error> {
    vm.stack.push(Word::ZERO);
    Ok(())
}

/// PUSH1-PUSH32 - Push N bytes onto stack
///
/// The immediate is read big-endian. Bytes past the end of the bytecode read as zero, so a
/// truncated immediate is padded on the right.
pub fn push_n(vm: &mut VM, opcode: u8) -> Result<(), Error> {
    // Get the number of bytes to push
    let num_bytes = opcodes::push_size(opcode);

    // Copy whatever part of the immediate exists into the high end of its slot
    let start = vm.instruction.min(vm.bytecode.len());
    let end = vm.instruction.saturating_add(num_bytes).min(vm.bytecode.len());
    let available = &vm.bytecode[start..end];

    let mut bytes = [0u8; 32];
    let slot = 32 - num_bytes;
    bytes[slot..slot + available.len()].copy_from_slice(available);
    vm.instruction = vm.instruction.saturating_add(num_bytes);

    // Push the bytes to the stack
    vm.stack.push(Word::from_be_bytes(bytes));
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::core::{vm::VM, word::Word};

    #[test]
    fn test_pop() {
        let result = VM::new(&[0x60, 0x01, 0x50]).run().expect("execution failed");
        assert!(result.stack.is_empty());
    }

    #[test]
    fn test_push0() {
        let result = VM::new(&[0x5f]).run().expect("execution failed");
        assert_eq!(result.stack, vec![Word::ZERO]);
        assert_eq!(result.instruction, 1);
    }

    #[test]
    fn test_push32() {
        let mut bytecode = vec![0x7f];
        bytecode.extend(1..=32u8);
        let result = VM::new(&bytecode).run().expect("execution failed");
        let expected: [u8; 32] = std::array::from_fn(|i| i as u8 + 1);
        assert_eq!(result.stack, vec![Word::from_be_bytes(expected)]);
        assert_eq!(result.instruction, 33);
    }

    #[test]
    fn test_push_truncated() {
        let result = VM::new(&[0x63, 0xde, 0xad]).run().expect("execution failed");
        assert_eq!(result.stack, vec![Word::from(0xdead0000u32)]);
        assert_eq!(result.instruction, 5);
    }
}
