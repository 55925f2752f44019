use std::fs;
use std::path::Path;
use std::str::FromStr;

use log::{debug, warn};
use serde::Deserialize;

use super::build_command::BuildCommand;
use crate::compiler::error::CompileError;

/// Configuration file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "jagle.toml";

/// Build command used when the configuration does not define one.
pub const DEFAULT_BUILD_COMMAND: &str = "g++ -std=c++17 -o {target} {source}";

/// Contents of jagle.toml
///
/// # Example:
///     [compiler]
///     cmd = "clang++ -std=c++17 -O2 -o {target} {source}"
///     keep_source = true
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TranspilerConfig {
    #[serde(default)]
    pub compiler: CompilerSection,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompilerSection {
    /// External compiler invocation, see BuildCommand for the placeholders
    #[serde(default = "default_build_command")]
    pub cmd: String,

    /// Keep the generated C++ source after the external compiler ran
    #[serde(default)]
    pub keep_source: bool,
}

fn default_build_command() -> String { String::from(DEFAULT_BUILD_COMMAND) }

impl Default for CompilerSection {
    fn default() -> Self {
        Self {
            cmd: default_build_command(),
            keep_source: false,
        }
    }
}

impl TranspilerConfig {
    pub fn from_toml(text: &str) -> Result<Self, CompileError> {
        toml::from_str(text)
            .map_err(|error| CompileError::Config(error.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self, CompileError> {
        let text = fs::read_to_string(path)
            .map_err(|error| CompileError::Config(format!("Could not read {}: {}", path.display(), error)))?;
        debug!("Loaded configuration from {}", path.display());
        Self::from_toml(&text)
    }

    /// An explicitly given configuration must exist. Without one the default file is used
    /// if present, otherwise the built in defaults.
    pub fn load_or_default(explicit: Option<&Path>, default: &Path) -> Result<Self, CompileError> {
        match explicit {
            Some(path) => Self::load(path),
            None if default.exists() => Self::load(default),
            None => {
                warn!("No {} found, using default configuration", default.display());
                Ok(Self::default())
            }
        }
    }

    /// Validated build command of this configuration
    pub fn build_command(&self) -> Result<BuildCommand, CompileError> {
        BuildCommand::from_str(&self.compiler.cmd)
            .map_err(|error| CompileError::Config(error.to_string()))
    }
}
