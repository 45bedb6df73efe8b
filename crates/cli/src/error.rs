#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
    #[error("{0}")]
    Generic(String),
    #[error("IO error: {0}")]
    IOError(#[from] std::io::Error),
    #[error("Serde error: {0}")]
    SerdeError(#[from] serde_json::Error),
    #[error("Input error: {0}")]
    InputError(#[from] minievm_common::Error),
    #[error("Config error: {0}")]
    ConfigError(#[from] minievm_config::error::Error),
    #[error("Execution error: {0}")]
    ExecutionError(#[from] minievm_vm::Error),
    #[error("Disassemble error: {0}")]
    DisassembleError(#[from] minievm_disassembler::Error),
}
