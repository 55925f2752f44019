use std::path::{Path, PathBuf};

use clap::Parser;
use log::{error, info};

use jagle_transpiler::{Compiler, CompileError, CppGenerator, PestJagleParser};
use jagle_transpiler::toolchain::{generated_source_path, Toolchain, TranspilerConfig, DEFAULT_CONFIG_FILE};

// Basic Compiler Configuration
type PARSER = PestJagleParser;
type GENERATOR = CppGenerator;

/// Command Line interface struct
/// Describes possible arguments using the clap library
#[derive(Parser)]
#[clap(name = "jagle", about = "Translates Jagle programs to C++ and builds them")]
struct TranspilerCLIOptions {
    /// Path of file to transpile. Jagle source files end in .jgl
    #[clap(parse(from_os_str))]
    path: PathBuf,

    /// Executable to build, the generated source is written to <target>.cpp
    #[clap(parse(from_os_str))]
    target: PathBuf,

    // Configuration

    /// Configuration file, default is jagle.toml in the working directory
    #[clap(short, long, parse(from_os_str))]
    config: Option<PathBuf>,

    // Flags

    /// Also write the generated source to stdout
    #[clap(long, action)]
    echo: bool,

    /// Stop after writing the generated source
    #[clap(long, action)]
    no_build: bool
}

/// Runs the whole pipeline and returns the exit code of the process.
fn run(cli_args: &TranspilerCLIOptions) -> Result<exitcode::ExitCode, CompileError> {
    // Configuration errors surface before anything is written
    let config = TranspilerConfig::load_or_default(cli_args.config.as_deref(), Path::new(DEFAULT_CONFIG_FILE))?;
    let toolchain = Toolchain::new(&config)?;

    let source_path = generated_source_path(&cli_args.target);
    let compiler: Compiler<PARSER, GENERATOR> = Compiler::default();
    compiler.compile_and_save(&cli_args.path, &source_path, cli_args.echo)?;

    if cli_args.no_build {
        return Ok(exitcode::OK);
    }

    info!("Compiling {}", source_path.display());
    let status = toolchain.build(&source_path, &cli_args.target)?;
    match status.code() {
        Some(exitcode::OK) => {
            info!("Build success! {}", cli_args.target.display());
            Ok(exitcode::OK)
        },
        // External compiler failures are passed through unmodified
        Some(code) => {
            error!("Build failed with exit code {}", code);
            Ok(code)
        },
        None => {
            error!("Build was terminated by a signal");
            Ok(exitcode::SOFTWARE)
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Parse Command line arguments
    let cli_args = TranspilerCLIOptions::parse();

    if !cli_args.path.exists() {
        error!("Source file {} does not exist", cli_args.path.display());
        std::process::exit(exitcode::NOINPUT);
    }

    match run(&cli_args) {
        Ok(code) => std::process::exit(code),
        Err(why) => {
            error!("{}", why);
            std::process::exit(why.exit_code());
        }
    }
}
