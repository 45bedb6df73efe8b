use fancy_regex::Regex;
use lazy_static::lazy_static;

lazy_static! {
    /// The following regex is used to validate raw bytecode given as a hex string
    pub static ref BYTECODE_REGEX: Regex =
        Regex::new(r"^(0x)?[0-9a-fA-F]*$").expect("failed to compile regex");
}
