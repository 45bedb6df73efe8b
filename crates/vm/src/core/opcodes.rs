//! Opcodes understood by the VM, and their metadata.
//!
//! The table layout is partially adapted from https://github.com/bluealloy/revm

/// Information about opcode, such as name, and stack inputs and outputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OpCodeInfo {
    /// Name
    name: &'static str,
    /// Stack inputs.
    inputs: u8,
    /// Stack outputs.
    outputs: u8,
    /// Bytes of immediate data following the opcode in the bytecode.
    immediate: u8,
}

impl OpCodeInfo {
    /// Creates a new opcode info with the given name and default values.
    pub const fn new(name: &'static str) -> Self {
        Self { name, inputs: 0, outputs: 0, immediate: 0 }
    }

    /// Returns the name of the opcode.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the number of stack inputs.
    #[inline]
    pub const fn inputs(&self) -> u8 {
        self.inputs
    }

    /// Returns the number of stack outputs.
    #[inline]
    pub const fn outputs(&self) -> u8 {
        self.outputs
    }

    /// Returns the number of immediate bytes the opcode consumes.
    #[inline]
    pub const fn immediate(&self) -> u8 {
        self.immediate
    }
}

impl From<u8> for OpCodeInfo {
    #[inline]
    fn from(opcode: u8) -> Self {
        OPCODE_INFO_TABLE[opcode as usize].unwrap_or(OpCodeInfo::new("unknown"))
    }
}

/// Sets the number of stack inputs and outputs.
#[inline]
pub const fn stack_io(mut op: OpCodeInfo, inputs: u8, outputs: u8) -> OpCodeInfo {
    op.inputs = inputs;
    op.outputs = outputs;
    op
}

/// Sets the number of immediate bytes.
#[inline]
pub const fn immediate(mut op: OpCodeInfo, size: u8) -> OpCodeInfo {
    op.immediate = size;
    op
}

macro_rules! opcodes {
    ($($val:literal => $name:ident => $($modifier:ident $(( $($modifier_arg:expr),* ))?),*);* $(;)?) => {
        // create a constant for each opcode
        $(
            #[doc = concat!("The `", stringify!($val), "` (\"", stringify!($name),"\") opcode.")]
            pub const $name: u8 = $val;
        )*

        /// Maps each opcode to its info. Unrecognized opcodes map to `None`.
        pub const OPCODE_INFO_TABLE: [Option<OpCodeInfo>; 256] = {
            let mut map = [None; 256];
            let mut prev: u8 = 0;
            $(
                let val: u8 = $val;
                assert!(val == 0 || val > prev, "opcodes must be sorted in ascending order");
                prev = val;
                let info = OpCodeInfo::new(
                    stringify!($name)
                );
                $(
                let info = $modifier(info, $($($modifier_arg),*)?);
                )*
                map[$val] = Some(info);
            )*
            let _ = prev;
            map
        };

        /// Maps each opcode to its name. (So we dont need to load [`OpCodeInfo`] to get the name)
        pub const OPCODE_NAME_TABLE: [&'static str; 256] = {
            let mut map = ["unknown"; 256];
            $(
                map[$val] = stringify!($name);
            )*
            map
        };
    }
}

/// Get the name of an opcode.
///
/// ```
/// use minievm_vm::core::opcodes::opcode_name;
///
/// assert_eq!(opcode_name(0x01), "ADD");
/// assert_eq!(opcode_name(0x7f), "PUSH32");
/// assert_eq!(opcode_name(0xfe), "unknown");
/// ```
#[inline]
pub fn opcode_name(opcode: u8) -> &'static str {
    OPCODE_NAME_TABLE[opcode as usize]
}

/// Whether the VM recognizes the opcode. Unrecognized opcodes are no-ops unless running strict.
#[inline]
pub fn is_known(opcode: u8) -> bool {
    OPCODE_INFO_TABLE[opcode as usize].is_some()
}

/// Number of immediate bytes a PUSH opcode reads from the bytecode, zero for anything else.
///
/// ```
/// use minievm_vm::core::opcodes::{push_size, PUSH0, PUSH1, PUSH32, ADD};
///
/// assert_eq!(push_size(PUSH0), 0);
/// assert_eq!(push_size(PUSH1), 1);
/// assert_eq!(push_size(PUSH32), 32);
/// assert_eq!(push_size(ADD), 0);
/// ```
#[inline]
pub fn push_size(opcode: u8) -> usize {
    OpCodeInfo::from(opcode).immediate() as usize
}

opcodes! {
    0x01 => ADD => stack_io(2, 1);
    0x02 => MUL => stack_io(2, 1);
    0x03 => SUB => stack_io(2, 1);
    0x04 => DIV => stack_io(2, 1);
    0x06 => MOD => stack_io(2, 1);

    0x10 => LT => stack_io(2, 1);
    0x11 => GT => stack_io(2, 1);
    0x14 => EQ => stack_io(2, 1);
    0x16 => AND => stack_io(2, 1);
    0x17 => OR => stack_io(2, 1);
    0x18 => XOR => stack_io(2, 1);
    0x19 => NOT => stack_io(1, 1);
    0x1b => SHL => stack_io(2, 1);
    0x1c => SHR => stack_io(2, 1);

    0x50 => POP => stack_io(1, 0);
    0x52 => MSTORE => stack_io(2, 0);
    0x53 => MSTORE8 => stack_io(2, 0);

    0x5f => PUSH0 => stack_io(0, 1);
    0x60 => PUSH1 => stack_io(0, 1), immediate(1);
    0x61 => PUSH2 => stack_io(0, 1), immediate(2);
    0x62 => PUSH3 => stack_io(0, 1), immediate(3);
    0x63 => PUSH4 => stack_io(0, 1), immediate(4);
    0x64 => PUSH5 => stack_io(0, 1), immediate(5);
    0x65 => PUSH6 => stack_io(0, 1), immediate(6);
    0x66 => PUSH7 => stack_io(0, 1), immediate(7);
    0x67 => PUSH8 => stack_io(0, 1), immediate(8);
    0x68 => PUSH9 => stack_io(0, 1), immediate(9);
    0x69 => PUSH10 => stack_io(0, 1), immediate(10);
    0x6a => PUSH11 => stack_io(0, 1), immediate(11);
    0x6b => PUSH12 => stack_io(0, 1), immediate(12);
    0x6c => PUSH13 => stack_io(0, 1), immediate(13);
    0x6d => PUSH14 => stack_io(0, 1), immediate(14);
    0x6e => PUSH15 => stack_io(0, 1), immediate(15);
    0x6f => PUSH16 => stack_io(0, 1), immediate(16);
    0x70 => PUSH17 => stack_io(0, 1), immediate(17);
    0x71 => PUSH18 => stack_io(0, 1), immediate(18);
    0x72 => PUSH19 => stack_io(0, 1), immediate(19);
    0x73 => PUSH20 => stack_io(0, 1), immediate(20);
    0x74 => PUSH21 => stack_io(0, 1), immediate(21);
    0x75 => PUSH22 => stack_io(0, 1), immediate(22);
    0x76 => PUSH23 => stack_io(0, 1), immediate(23);
    0x77 => PUSH24 => stack_io(0, 1), immediate(24);
    0x78 => PUSH25 => stack_io(0, 1), immediate(25);
    0x79 => PUSH26 => stack_io(0, 1), immediate(26);
    0x7a => PUSH27 => stack_io(0, 1), immediate(27);
    0x7b => PUSH28 => stack_io(0, 1), immediate(28);
    0x7c => PUSH29 => stack_io(0, 1), immediate(29);
    0x7d => PUSH30 => stack_io(0, 1), immediate(30);
    0x7e => PUSH31 => stack_io(0, 1), immediate(31);
    0x7f => PUSH32 => stack_io(0, 1), immediate(32);
}
