use std::path::Path;
use std::process::{Command, ExitStatus};
use std::str::FromStr;

use log::info;
use regex::Regex;
use simple_error::SimpleError;

use crate::compiler::error::CompileError;

const SOURCE_PLACEHOLDER: &str = "{source}";
const TARGET_PLACEHOLDER: &str = "{target}";

/// BuildCommand is the validated shell template used to invoke the external C++ compiler.
///
/// # Placeholders
///   + {source}: path of the generated C++ source, required
///   + {target}: path of the executable to produce
#[derive(Debug, Clone, PartialEq)]
pub struct BuildCommand {
    template: String
}

impl FromStr for BuildCommand {
    type Err = SimpleError;

    /// Convert string to BuildCommand
    /// Syntax: any shell command, braces only as {source} or {target}
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        if input.trim().is_empty() {
            bail!("Build command must not be empty")
        }

        let re = Regex::new(r"\{(?P<placeholder>[^{}]*)\}")
            .map_err(|error| SimpleError::new(error.to_string()))?;

        for caps in re.captures_iter(input) {
            let placeholder = caps.name("placeholder")
                .map(|m| m.as_str())
                .unwrap_or_default();
            if placeholder != "source" && placeholder != "target" {
                return Err(SimpleError::new(format!("Unknown placeholder '{{{}}}' in build command, expected {} or {}",
                    placeholder, SOURCE_PLACEHOLDER, TARGET_PLACEHOLDER)));
            }
        }

        if !input.contains(SOURCE_PLACEHOLDER) {
            bail!("Build command must reference the generated source with {source}")
        }

        Ok(Self {
            template: String::from(input)
        })
    }
}

impl BuildCommand {
    /// Substitutes the placeholders. Paths are inserted as they are, a path containing spaces
    /// has to be quoted in the template.
    pub fn render(&self, source: &Path, target: &Path) -> String {
        self.template
            .replace(SOURCE_PLACEHOLDER, &source.display().to_string())
            .replace(TARGET_PLACEHOLDER, &target.display().to_string())
    }

    /// Runs the rendered command through the platform shell and waits for it.
    pub fn execute(&self, source: &Path, target: &Path) -> Result<ExitStatus, CompileError> {
        let command = self.render(source, target);
        info!("Running {}", command);
        Ok(shell(&command).status()?)
    }
}

#[cfg(windows)]
fn shell(command: &str) -> Command {
    let mut shell = Command::new("cmd");
    shell.arg("/C").arg(command);
    shell
}

#[cfg(not(windows))]
fn shell(command: &str) -> Command {
    let mut shell = Command::new("sh");
    shell.arg("-c").arg(command);
    shell
}
