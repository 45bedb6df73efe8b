use clap::Parser;
use derive_builder::Builder;
use minievm_common::input::get_bytecode_from_target;

use crate::error::Error;

/// Arguments for the `disassemble` command
#[derive(Debug, Clone, Parser, Builder)]
#[clap(
    about = "Disassembles minievm bytecode to assembly",
    override_usage = "minievm disassemble <TARGET> [OPTIONS]"
)]
pub struct DisassemblerArgs {
    /// The target to disassemble, either a file or bytecode.
    #[clap(required = true)]
    pub target: String,

    /// Whether to use base-10 for the program counter.
    #[clap(long = "decimal-counter", short = 'd')]
    pub decimal_counter: bool,
}

impl DisassemblerArgs {
    /// Resolves the target into raw bytecode.
    pub fn get_bytecode(&self) -> Result<Vec<u8>, Error> {
        Ok(get_bytecode_from_target(&self.target)?)
    }
}

impl DisassemblerArgsBuilder {
    /// Creates a builder with every field set to its default.
    pub fn new() -> Self {
        Self { target: Some(String::new()), decimal_counter: Some(false) }
    }
}
