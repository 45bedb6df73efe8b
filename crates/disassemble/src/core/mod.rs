use std::time::Instant;

use crate::{error::Error, interfaces::DisassemblerArgs};
use minievm_common::utils::strings::encode_hex;
use minievm_vm::core::opcodes::{opcode_name, push_size};
use tracing::{debug, info, warn};

/// Disassembles bytecode into readable assembly instructions
///
/// This function takes a program and converts it into a string representation of the
/// equivalent assembly code. PUSH1 through PUSH32 consume the following bytes as their
/// immediate; a push cut short by the end of the bytecode shows only the bytes present.
///
/// # Arguments
///
/// * `args` - Arguments specifying the target and disassembly options
///
/// # Returns
///
/// A string containing the disassembled bytecode in assembly format
pub fn disassemble(args: DisassemblerArgs) -> Result<String, Error> {
    // init
    let start_time = Instant::now();
    let mut program_counter = 0;
    let mut asm = String::new();

    // get the bytecode from the target
    let start_fetch_time = Instant::now();
    let bytecode = args.get_bytecode()?;
    debug!("fetching target bytecode took {:?}", start_fetch_time.elapsed());

    // iterate over the bytecode, disassembling each instruction
    let start_disassemble_time = Instant::now();
    while program_counter < bytecode.len() {
        let offset = program_counter;
        let opcode = bytecode[offset];
        program_counter += 1;

        // handle PUSH1 -> PUSH32, which carry the next N bytes as an immediate
        let byte_count_to_push = push_size(opcode);
        let end = (program_counter + byte_count_to_push).min(bytecode.len());
        let pushed_bytes = encode_hex(&bytecode[program_counter..end]);
        if end - program_counter < byte_count_to_push {
            warn!(
                "{} at offset {} is truncated: expected {} byte(s), found {}",
                opcode_name(opcode),
                offset,
                byte_count_to_push,
                end - program_counter
            );
        }
        program_counter = end;

        asm.push_str(
            format!(
                "{} {} {}\n",
                if args.decimal_counter { offset.to_string() } else { format!("{offset:06x}") },
                opcode_name(opcode),
                pushed_bytes
            )
            .as_str(),
        );
    }
    debug!("disassembly took {:?}", start_disassemble_time.elapsed());

    info!("disassembled {} bytes successfully", bytecode.len());
    debug!("disassembly took {:?}", start_time.elapsed());
    Ok(asm)
}
