use crate::{core::word, error::Error};

use super::super::core::VM;

/// ADD - Addition operation
pub fn add(vm: &mut VM, _: u8) -> Result<(), Error> {
    let a = vm.stack.pop()?;
    let b = vm.stack.pop()?;
    vm.stack.push(word::add(a, b));
    Ok(())
}

/// MUL - Multiplication operation
pub fn mul(vm: &mut VM, _: u8) -> Result<(), Error> {
    let a = vm.stack.pop()?;
    let b = vm.stack.pop()?;
    vm.stack.push(word::mul(a, b));
    Ok(())
}

/// SUB - Subtraction operation, top of stack minus the value beneath it
pub fn sub(vm: &mut VM, _: u8) -> Result<(), Error> {
    let a = vm.stack.pop()?;
    let b = vm.stack.pop()?;
    vm.stack.push(word::sub(a, b));
    Ok(())
}

/// DIV - Integer division operation, the divisor is the top of stack
pub fn div(vm: &mut VM, _: u8) -> Result<(), Error> {
    let denominator = vm.stack.pop()?;
    let numerator = vm.stack.pop()?;
    vm.stack.push(word::div(denominator, numerator));
    Ok(())
}

/// MOD - Modulo operation, the modulus is the top of stack
pub fn modulo(vm: &mut VM, _: u8) -> Result<(), Error> {
    let modulus = vm.stack.pop()?;
    let a = vm.stack.pop()?;
    vm.stack.push(word::rem(modulus, a));
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::core::{vm::VM, word::Word};

    fn run(bytecode: &[u8]) -> Vec<Word> {
        VM::new(bytecode).run().expect("execution failed").stack
    }

    #[test]
    fn test_add() {
        assert_eq!(run(&[0x60, 0x02, 0x60, 0x03, 0x01]), vec![Word::from(5)]);
    }

    #[test]
    fn test_add_wraps() {
        let mut bytecode = vec![0x7f];
        bytecode.extend([0xff; 32]);
        bytecode.extend([0x60, 0x02, 0x01]);
        assert_eq!(run(&bytecode), vec![Word::from(1)]);
    }

    #[test]
    fn test_mul() {
        assert_eq!(run(&[0x60, 0x02, 0x60, 0x03, 0x02]), vec![Word::from(6)]);
    }

    #[test]
    fn test_sub() {
        assert_eq!(run(&[0x60, 0x02, 0x60, 0x03, 0x03]), vec![Word::from(1)]);
        assert_eq!(run(&[0x60, 0x03, 0x60, 0x02, 0x03]), vec![Word::MAX]);
    }

    #[test]
    fn test_div() {
        assert_eq!(run(&[0x60, 0x06, 0x60, 0x02, 0x04]), vec![Word::from(3)]);
        assert_eq!(run(&[0x60, 0x06, 0x60, 0x00, 0x04]), vec![Word::ZERO]);
        assert_eq!(run(&[0x60, 0x07, 0x60, 0x02, 0x04]), vec![Word::from(3)]);
    }

    #[test]
    fn test_mod() {
        assert_eq!(run(&[0x60, 0x07, 0x60, 0x03, 0x06]), vec![Word::from(1)]);
        assert_eq!(run(&[0x60, 0x07, 0x5f, 0x06]), vec![Word::ZERO]);
    }
}
