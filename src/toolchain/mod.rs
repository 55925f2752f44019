pub mod build_command;
pub mod config;
pub mod runtime;

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use log::{debug, warn};

use crate::compiler::error::CompileError;
use crate::compiler::output::destination_directory;

pub use self::build_command::BuildCommand;
pub use self::config::{TranspilerConfig, DEFAULT_CONFIG_FILE};
pub use self::runtime::install_runtime_header;

/// Path of the generated C++ source for a target, `<target>.cpp`.
pub fn generated_source_path(target: &Path) -> PathBuf {
    let mut path = OsString::from(target.as_os_str());
    path.push(".cpp");
    PathBuf::from(path)
}

/// Toolchain turns a generated C++ source into an executable with the external compiler.
pub struct Toolchain {
    command: BuildCommand,
    keep_source: bool
}

impl Toolchain {
    pub fn new(config: &TranspilerConfig) -> Result<Self, CompileError> {
        Ok(Self {
            command: config.build_command()?,
            keep_source: config.compiler.keep_source
        })
    }

    /// Installs the runtime header next to the source and runs the build command.
    /// The exit status of the external compiler is returned untouched.
    ///
    /// Unless keep_source is set the source and a header installed by this call are removed
    /// afterwards, whatever the outcome of the build.
    pub fn build(&self, source: &Path, target: &Path) -> Result<ExitStatus, CompileError> {
        let installed_header = install_runtime_header(destination_directory(source))?;

        let status = self.command.execute(source, target);

        if !self.keep_source {
            remove_generated(source);
            if let Some(header) = installed_header {
                remove_generated(&header);
            }
        }

        status
    }
}

fn remove_generated(path: &Path) {
    match fs::remove_file(path) {
        Ok(_) => debug!("Removed {}", path.display()),
        Err(error) => warn!("Could not remove {}: {}", path.display(), error),
    }
}
