use derive_builder::Builder;

/// Stack depth a production EVM enforces. The VM itself is unbounded unless configured.
pub const MAX_STACK_DEPTH: usize = 1024;

/// How the dispatcher treats opcode bytes it does not recognize.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OpcodePolicy {
    /// Unrecognized opcodes are no-ops that consume no immediate bytes.
    #[default]
    Lenient,
    /// Unrecognized opcodes fail with [`Error::InvalidOpcode`](crate::Error::InvalidOpcode).
    Strict,
}

/// Policy knobs for a single [`VM`](super::VM) instance. The default is the permissive core
/// machine: lenient opcodes and no limits.
///
/// ```
/// use minievm_vm::core::vm::{ExecutionConfigBuilder, OpcodePolicy, MAX_STACK_DEPTH};
///
/// let config = ExecutionConfigBuilder::default()
///     .opcode_policy(OpcodePolicy::Strict)
///     .stack_limit(MAX_STACK_DEPTH)
///     .build()
///     .expect("failed to build config");
///
/// assert_eq!(config.stack_limit, Some(1024));
/// assert_eq!(config.memory_limit, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder)]
#[builder(default)]
pub struct ExecutionConfig {
    /// Treatment of unrecognized opcodes.
    pub opcode_policy: OpcodePolicy,

    /// Maximum operand stack depth.
    #[builder(setter(strip_option))]
    pub stack_limit: Option<usize>,

    /// Maximum memory size in bytes.
    #[builder(setter(strip_option))]
    pub memory_limit: Option<usize>,

    /// Maximum number of instructions a single `run` may execute.
    #[builder(setter(strip_option))]
    pub step_limit: Option<u64>,
}

impl ExecutionConfig {
    /// Whether unrecognized opcodes are rejected.
    pub fn is_strict(&self) -> bool {
        self.opcode_policy == OpcodePolicy::Strict
    }
}
