use std::fmt::{self, Display, Write};

use clap::ValueEnum;
use colored::Colorize;
use minievm_common::utils::{
    hex::ToLowerHex,
    strings::{encode_hex, encode_hex_reduced},
};
use minievm_vm::core::{memory::WORD_SIZE, vm::ExecutionResult};
use serde::Serialize;

use crate::error::Error;

/// How `run` prints its result.
#[derive(Debug, Copy, Clone, ValueEnum, Eq, PartialEq)]
pub(crate) enum OutputFormat {
    /// Human readable listing
    Text,
    /// A single JSON object
    Json,
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// The JSON shape of an [`ExecutionResult`]. Words are full-width hex, memory is one hex string.
#[derive(Debug, Serialize)]
struct ExecutionReport {
    stack: Vec<String>,
    memory: String,
    memory_size: usize,
    instruction: usize,
    steps: u64,
}

impl From<&ExecutionResult> for ExecutionReport {
    fn from(result: &ExecutionResult) -> Self {
        ExecutionReport {
            stack: result.stack.iter().map(|word| word.to_lower_hex()).collect(),
            memory: result.memory.to_lower_hex(),
            memory_size: result.memory.len(),
            instruction: result.instruction,
            steps: result.steps,
        }
    }
}

/// Renders `result` in the requested format.
pub(crate) fn render(result: &ExecutionResult, format: OutputFormat) -> Result<String, Error> {
    match format {
        OutputFormat::Json => {
            Ok(serde_json::to_string_pretty(&ExecutionReport::from(result))? + "\n")
        }
        OutputFormat::Text => Ok(render_text(result)),
    }
}

/// The stack bottom to top, one word per line, followed by memory in 32-byte rows.
fn render_text(result: &ExecutionResult) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{} ({} items, bottom to top)", "stack".bold(), result.stack.len());
    for (index, word) in result.stack.iter().enumerate() {
        let _ = writeln!(out, "  {index:>4}: {}", encode_hex_reduced(*word));
    }

    let _ = writeln!(out, "{} ({} bytes)", "memory".bold(), result.memory.len());
    for (row, chunk) in result.memory.chunks(WORD_SIZE).enumerate() {
        let _ = writeln!(out, "  {:#06x}: {}", row * WORD_SIZE, encode_hex(chunk));
    }

    out
}
