use crate::{core::word, error::Error};

use super::super::core::VM;

/// LT - Less than comparison
pub fn lt(vm: &mut VM, _: u8) -> Result<(), Error> {
    let a = vm.stack.pop()?;
    let b = vm.stack.pop()?;
    vm.stack.push(word::lt(a, b));
    Ok(())
}

/// GT - Greater than comparison
pub fn gt(vm: &mut VM, _: u8) -> Result<(), Error> {
    let a = vm.stack.pop()?;
    let b = vm.stack.pop()?;
    vm.stack.push(word::gt(a, b));
    Ok(())
}

/// EQ - Equality comparison
pub fn eq(vm: &mut VM, _: u8) -> Result<(), Error> {
    let a = vm.stack.pop()?;
    let b = vm.stack.pop()?;
    vm.stack.push(word::eq(a, b));
    Ok(())
}
