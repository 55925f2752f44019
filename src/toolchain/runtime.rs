use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::compiler::error::CompileError;
use crate::compiler::output::RUNTIME_HEADER;

/// Runtime support header included by every generated unit.
pub const RUNTIME_HEADER_SOURCE: &str = include_str!("../../runtime/jagle.hpp");

/// Writes the runtime header into directory unless a header of that name is already there.
/// Returns the path when the header was written by this call.
pub fn install_runtime_header(directory: &Path) -> Result<Option<PathBuf>, CompileError> {
    let path = directory.join(RUNTIME_HEADER);
    if path.exists() {
        debug!("Using existing runtime header {}", path.display());
        return Ok(None);
    }

    fs::write(&path, RUNTIME_HEADER_SOURCE)?;
    debug!("Installed runtime header {}", path.display());
    Ok(Some(path))
}
