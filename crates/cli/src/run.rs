use clap::Parser;
use minievm_common::input::get_bytecode_from_target;
use minievm_config::Configuration;
use minievm_vm::core::vm::{ExecutionConfig, ExecutionResult, OpcodePolicy, VM};
use tracing::{debug, info};

use crate::{error::Error, output::OutputFormat};

/// Arguments for the `run` command
#[derive(Debug, Clone, Parser)]
#[clap(
    about = "Executes bytecode and prints the final stack and memory",
    override_usage = "minievm run <TARGET> [OPTIONS]"
)]
pub(crate) struct RunArgs {
    /// The target to execute, either a file or bytecode.
    #[clap(required = true)]
    pub(crate) target: String,

    /// Fail on unrecognized opcodes instead of skipping them.
    #[clap(long)]
    pub(crate) strict: bool,

    /// Maximum operand stack depth.
    #[clap(long = "stack-limit", value_name = "DEPTH")]
    pub(crate) stack_limit: Option<usize>,

    /// Maximum memory size in bytes.
    #[clap(long = "memory-limit", value_name = "BYTES")]
    pub(crate) memory_limit: Option<usize>,

    /// Maximum number of instructions to execute.
    #[clap(long = "step-limit", value_name = "STEPS")]
    pub(crate) step_limit: Option<u64>,

    /// How to print the result.
    #[clap(long, short, value_name = "FORMAT", default_value_t = OutputFormat::Text)]
    pub(crate) output: OutputFormat,
}

impl RunArgs {
    /// The persisted defaults, with any limit passed on the command line taking precedence.
    pub(crate) fn execution_config(&self, configuration: &Configuration) -> ExecutionConfig {
        let mut config = configuration.execution_config();

        if self.strict {
            config.opcode_policy = OpcodePolicy::Strict;
        }
        if self.stack_limit.is_some() {
            config.stack_limit = self.stack_limit;
        }
        if self.memory_limit.is_some() {
            config.memory_limit = self.memory_limit;
        }
        if self.step_limit.is_some() {
            config.step_limit = self.step_limit;
        }

        config
    }
}

/// Resolves the target and runs it to completion.
pub(crate) fn run(args: &RunArgs, configuration: &Configuration) -> Result<ExecutionResult, Error> {
    let bytecode = get_bytecode_from_target(&args.target)?;
    let config = args.execution_config(configuration);
    debug!(?config, "executing {} bytes", bytecode.len());

    let result = VM::with_config(&bytecode, config).run()?;
    info!("executed {} instruction(s)", result.steps);

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use minievm_vm::core::word::Word;

    fn parse(args: &[&str]) -> RunArgs {
        RunArgs::try_parse_from(std::iter::once("run").chain(args.iter().copied()))
            .expect("failed to parse args")
    }

    #[test]
    fn test_flags_override_configuration() {
        let configuration = Configuration {
            strict_opcodes: false,
            stack_limit: Some(16),
            memory_limit: Some(1024),
            step_limit: None,
        };
        let args = parse(&["0x00", "--strict", "--stack-limit", "4", "--step-limit", "10"]);
        let config = args.execution_config(&configuration);

        assert_eq!(config.opcode_policy, OpcodePolicy::Strict);
        assert_eq!(config.stack_limit, Some(4));
        assert_eq!(config.memory_limit, Some(1024));
        assert_eq!(config.step_limit, Some(10));
    }

    #[test]
    fn test_configuration_strictness_is_kept() {
        let configuration = Configuration { strict_opcodes: true, ..Default::default() };
        let config = parse(&["0x00"]).execution_config(&configuration);
        assert!(config.is_strict());
    }

    #[test]
    fn test_run_target() {
        let result =
            run(&parse(&["6002600303"]), &Configuration::default()).expect("execution failed");
        assert_eq!(result.stack, vec![Word::from(1)]);
    }

    #[test]
    fn test_run_strict_rejects_unknown_opcode() {
        let result = run(&parse(&["60fe", "--strict"]), &Configuration::default());
        assert!(result.is_ok());

        let result = run(&parse(&["fe", "--strict"]), &Configuration::default());
        assert!(matches!(
            result,
            Err(Error::ExecutionError(minievm_vm::Error::InvalidOpcode { opcode: 0xfe, offset: 0 }))
        ));
    }

    #[test]
    fn test_run_bad_target() {
        let result = run(&parse(&["0x123"]), &Configuration::default());
        assert!(matches!(result, Err(Error::InputError(_))));
    }
}
