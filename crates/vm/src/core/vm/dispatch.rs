use crate::{
    core::opcodes::{self, OpCodeInfo},
    error::Error,
};

use super::{core::VM, handlers};

/// An opcode handler. Receives the opcode byte so one handler can serve a family of opcodes.
pub(crate) type Handler = fn(&mut VM, u8) -> Result<(), Error>;

/// Maps every opcode byte to its handler. `None` marks an unrecognized opcode.
pub(crate) const JUMP_TABLE: [Option<Handler>; 256] = {
    let mut table: [Option<Handler>; 256] = [None; 256];

    table[opcodes::ADD as usize] = Some(handlers::arithmetic::add as Handler);
    table[opcodes::MUL as usize] = Some(handlers::arithmetic::mul as Handler);
    table[opcodes::SUB as usize] = Some(handlers::arithmetic::sub as Handler);
    table[opcodes::DIV as usize] = Some(handlers::arithmetic::div as Handler);
    table[opcodes::MOD as usize] = Some(handlers::arithmetic::modulo as Handler);

    table[opcodes::LT as usize] = Some(handlers::comparison::lt as Handler);
    table[opcodes::GT as usize] = Some(handlers::comparison::gt as Handler);
    table[opcodes::EQ as usize] = Some(handlers::comparison::eq as Handler);

    table[opcodes::AND as usize] = Some(handlers::bitwise::and as Handler);
    table[opcodes::OR as usize] = Some(handlers::bitwise::or as Handler);
    table[opcodes::XOR as usize] = Some(handlers::bitwise::xor as Handler);
    table[opcodes::NOT as usize] = Some(handlers::bitwise::not as Handler);
    table[opcodes::SHL as usize] = Some(handlers::bitwise::shl as Handler);
    table[opcodes::SHR as usize] = Some(handlers::bitwise::shr as Handler);

    table[opcodes::POP as usize] = Some(handlers::stack::pop as Handler);
    table[opcodes::MSTORE as usize] = Some(handlers::memory::mstore as Handler);
    table[opcodes::MSTORE8 as usize] = Some(handlers::memory::mstore8 as Handler);

    table[opcodes::PUSH0 as usize] = Some(handlers::stack::push0 as Handler);
    let mut opcode = opcodes::PUSH1;
    while opcode <= opcodes::PUSH32 {
        table[opcode as usize] = Some(handlers::stack::push_n as Handler);
        opcode += 1;
    }

    table
};

/// Checks that the stack can feed `info` and absorb its outputs, before anything is popped.
pub(crate) fn check_stack(vm: &VM, info: &OpCodeInfo) -> Result<(), Error> {
    let available = vm.stack.size();
    let required = info.inputs() as usize;
    if available < required {
        return Err(Error::StackUnderflow { opcode: info.name(), required, available });
    }

    if let Some(limit) = vm.config.stack_limit {
        if available - required + info.outputs() as usize > limit {
            return Err(Error::StackOverflow { limit });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_matches_opcode_info() {
        for opcode in 0..=u8::MAX {
            assert_eq!(
                JUMP_TABLE[opcode as usize].is_some(),
                opcodes::is_known(opcode),
                "dispatch table disagrees with opcode table for {opcode:#04x}"
            );
        }
    }
}
