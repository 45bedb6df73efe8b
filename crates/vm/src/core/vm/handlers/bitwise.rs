use crate::{core::word, error::Error};

use super::super::core::VM;

/// AND - Bitwise AND operation
pub fn and(vm: &mut VM, _: u8) -> Result<(), Error> {
    let a = vm.stack.pop()?;
    let b = vm.stack.pop()?;
    vm.stack.push(word::and(a, b));
    Ok(())
}

/// OR - Bitwise OR operation
pub fn or(vm: &mut VM, _: u8) -> Result<(), Error> {
    let a = vm.stack.pop()?;
    let b = vm.stack.pop()?;
    vm.stack.push(word::or(a, b));
    Ok(())
}

/// XOR - Bitwise XOR operation
pub fn xor(vm: &mut VM, _: u8) -> Result<(), Error> {
    let a = vm.stack.pop()?;
    let b = vm.stack.pop()?;
    vm.stack.push(word::xor(a, b));
    Ok(())
}

/// NOT - Bitwise NOT operation
pub fn not(vm: &mut VM, _: u8) -> Result<(), Error> {
    let a = vm.stack.pop()?;
    vm.stack.push(word::not(a));
    Ok(())
}

/// SHL - Shift left operation. Shifts the top of stack by the value beneath it.
pub fn shl(vm: &mut VM, _: u8) -> Result<(), Error> {
    let value = vm.stack.pop()?;
    let shift = vm.stack.pop()?;
    vm.stack.push(word::shl(value, shift));
    Ok(())
}

/// SHR - Logical shift right operation. Shifts the top of stack by the value beneath it.
pub fn shr(vm: &mut VM, _: u8) -> Result<(), Error> {
    let value = vm.stack.pop()?;
    let shift = vm.stack.pop()?;
    vm.stack.push(word::shr(value, shift));
    Ok(())
}
