pub(crate) mod error;
pub(crate) mod log_args;
pub(crate) mod output;
pub(crate) mod run;

use error::Error;
use log_args::LogArgs;
use output::render;
use run::{run, RunArgs};
use tracing::{debug, warn};

use clap::{Parser, Subcommand};

use minievm_config::{config, ConfigArgs, Configuration};
use minievm_disassembler::{disassemble, DisassemblerArgs};

#[derive(Debug, Parser)]
#[clap(name = "minievm", version)]
pub(crate) struct Arguments {
    #[clap(subcommand)]
    pub(crate) sub: Subcommands,

    #[clap(flatten)]
    logs: LogArgs,
}

#[derive(Debug, Subcommand)]
#[clap(about = "minievm executes and disassembles bytecode for a minimal 256-bit stack machine.")]
pub(crate) enum Subcommands {
    #[clap(name = "run", about = "Execute bytecode and print the final stack and memory")]
    Run(RunArgs),

    #[clap(name = "disassemble", about = "Disassemble bytecode to assembly")]
    Disassemble(DisassemblerArgs),

    #[clap(name = "config", about = "Display and edit the current configuration")]
    Config(ConfigArgs),
}

fn main() -> Result<(), Error> {
    let args = Arguments::parse();

    // setup logging
    if let Err(e) = args.logs.init_tracing() {
        eprintln!("failed to initialize logging: {e}");
    }

    match args.sub {
        Subcommands::Run(cmd) => {
            let configuration = Configuration::load().unwrap_or_else(|e| {
                warn!("failed to load configuration, using defaults: {}", e);
                Configuration::default()
            });
            debug!(?configuration, "loaded configuration");

            let result = run(&cmd, &configuration)?;
            print!("{}", render(&result, cmd.output)?);
        }

        Subcommands::Disassemble(cmd) => {
            let assembly = disassemble(cmd)?;
            print!("{assembly}");
        }

        Subcommands::Config(cmd) => {
            config(cmd)?;
        }
    }

    Ok(())
}
