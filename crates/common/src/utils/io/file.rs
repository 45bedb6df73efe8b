use std::{
    env, fs,
    path::{Path, PathBuf},
};

use eyre::Result;

/// Convert a long path to a short path.
///
/// ```no_run
/// use minievm_common::utils::io::file::short_path;
///
/// let path = "/some/long/path/that/is/cwd/something.json";
/// let short_path = short_path(path);
/// assert_eq!(short_path, "./something.json");
/// ```
pub fn short_path(path: &str) -> String {
    match env::current_dir() {
        Ok(dir) => path.replace(&dir.to_string_lossy().into_owned(), "."),
        Err(_) => path.to_owned(),
    }
}

/// Write contents to a file on the disc, creating parent directories as needed
///
/// ```no_run
/// use minievm_common::utils::io::file::write_file;
///
/// let path = "/tmp/test.txt";
/// let contents = "Hello, World!";
/// let result = write_file(path, contents);
/// ```
pub fn write_file(path_str: &str, contents: &str) -> Result<()> {
    let path = Path::new(path_str);

    // Create the directory if it doesn't exist
    fs::create_dir_all(path.parent().ok_or_else(|| eyre::eyre!("unable to create directory"))?)?;
    fs::write(path, contents)?;

    Ok(())
}

/// Read contents from a file on the disc
///
/// ```no_run
/// use minievm_common::utils::io::file::read_file;
///
/// let path = "/tmp/test.txt";
/// let contents = read_file(path);
/// ```
pub fn read_file(path: &str) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}

/// Delete a file or directory from the disc. Returns `false` if nothing was removed.
///
/// ```no_run
/// use minievm_common::utils::io::file::delete_path;
///
/// let path = "/tmp/test.txt";
/// let result = delete_path(path);
/// ```
pub fn delete_path(path: &str) -> bool {
    let path = PathBuf::from(path);
    if path.is_dir() {
        fs::remove_dir_all(path).is_ok()
    } else {
        fs::remove_file(path).is_ok()
    }
}
