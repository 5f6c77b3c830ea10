//! Input/output path checks run before any file is read or written.

use std::ffi::OsStr;
use std::path::Path;

use crate::error::{Error, Result};

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|e| e.eq_ignore_ascii_case(ext))
}

/// The input must end in `.log` (any case) and exist as a file.
/// The extension is checked first.
pub fn validate_input(path: &Path) -> Result<()> {
    if !has_extension(path, "log") {
        return Err(Error::InvalidInputExtension(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(Error::InputNotFound(path.to_path_buf()));
    }
    Ok(())
}

/// The output must end in `.json` (any case). It need not exist yet.
pub fn validate_output(path: &Path) -> Result<()> {
    if !has_extension(path, "json") {
        return Err(Error::InvalidOutputExtension(path.to_path_buf()));
    }
    Ok(())
}
