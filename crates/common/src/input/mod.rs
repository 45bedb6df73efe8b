use std::fs;

use tracing::{debug, error};

use crate::{
    constants::BYTECODE_REGEX,
    utils::{io::file::short_path, strings::decode_hex},
    Error,
};

/// Given a target, determines whether it is raw bytecode or a file path, and returns the
/// bytecode for the target.
///
/// Raw bytecode is a hex string, with or without a `0x` prefix. Anything else is treated as a
/// path to a file containing such a string; line breaks and surrounding whitespace in the file
/// are ignored.
///
/// ```
/// use minievm_common::input::get_bytecode_from_target;
///
/// assert_eq!(get_bytecode_from_target("0x600150").unwrap(), vec![0x60, 0x01, 0x50]);
/// assert!(get_bytecode_from_target("/nonexistent/file.hex").is_err());
/// ```
pub fn get_bytecode_from_target(target: &str) -> Result<Vec<u8>, Error> {
    if BYTECODE_REGEX.is_match(target).unwrap_or(false) {
        debug!("target is raw bytecode");
        return decode_hex(target).map_err(|e| Error::ParseError(e.to_string()));
    }

    // Target is a file path, so we need to read the bytecode from the file.
    let contents = fs::read_to_string(target).map_err(|e| {
        error!("failed to open file '{}' .", &target);
        Error::FilesystemError(e)
    })?;

    let contents: String = contents.split_whitespace().collect();
    if BYTECODE_REGEX.is_match(&contents).unwrap_or(false) {
        debug!(path = %short_path(target), "read bytecode from file");
        decode_hex(&contents).map_err(|e| {
            error!("file '{}' doesn't contain valid bytecode.", &target);
            Error::ParseError(format!("file '{target}': {e}"))
        })
    } else {
        error!("file '{}' doesn't contain valid bytecode.", &target);
        Err(Error::ParseError(format!("file '{target}' doesn't contain valid bytecode.")))
    }
}
