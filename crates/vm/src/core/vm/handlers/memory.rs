use crate::{core::memory::Memory, error::Error};

use super::super::core::VM;

/// MSTORE - Save word to memory
pub fn mstore(vm: &mut VM, _: u8) -> Result<(), Error> {
    let offset = vm.stack.pop()?;
    let value = vm.stack.pop()?;

    vm.memory.store32(Memory::offset(offset)?, value)
}

/// MSTORE8 - Save byte to memory
pub fn mstore8(vm: &mut VM, _: u8) -> Result<(), Error> {
    let offset = vm.stack.pop()?;
    let value = vm.stack.pop()?;

    vm.memory.store8(Memory::offset(offset)?, value)
}

#[cfg(test)]
mod tests {
    use crate::{
        core::{vm::VM, word::Word},
        error::Error,
    };

    #[test]
    fn test_mstore() {
        let mut vm = VM::new(&[0x60, 0x02, 0x60, 0x20, 0x52]);
        let result = vm.run().expect("execution failed");
        assert!(result.stack.is_empty());
        assert_eq!(result.memory.len(), 0x40);
        let mut expected = vec![0u8; 32];
        expected[31] = 0x02;
        assert_eq!(&result.memory[0x20..0x40], expected.as_slice());
        assert!(result.memory[..0x20].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_mstore8() {
        let mut vm = VM::new(&[0x61, 0x12, 0x34, 0x60, 0x20, 0x53]);
        let result = vm.run().expect("execution failed");
        assert_eq!(result.memory.len(), 0x40);
        assert_eq!(result.memory[0x20], 0x34);
        assert!(result.memory[0x21..].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_mstore_unaddressable_offset() {
        let mut bytecode = vec![0x60, 0x01, 0x7f];
        bytecode.extend([0xff; 32]);
        bytecode.push(0x52);
        let mut vm = VM::new(&bytecode);
        assert_eq!(vm.run(), Err(Error::InvalidMemoryOffset(Word::MAX)));
        assert_eq!(vm.memory.size(), 0);
    }
}
