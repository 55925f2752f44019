pub mod ast;
pub mod backend;
pub mod parser;
pub mod output;
pub mod error;

use std::path::Path;
use std::fs;

use log::info;

// Interface Definitions
use self::parser::AstParser;
use self::backend::BackEndGenerator;
use self::output::{TranslationUnit, write_artifact};
use self::error::CompileError;

// Concrete Definitions Re-Export
pub use self::backend::CppGenerator;
pub use self::parser::PestJagleParser;

/// Compiler ties a parser to a backend. Compilation is all or nothing, a source that fails
/// to parse never reaches the generator and never produces an artifact.
pub struct Compiler<P: AstParser, G: BackEndGenerator> {
    parser: P,
    generator: G
}

impl<P: AstParser, G: BackEndGenerator> Compiler<P, G> {
    pub fn default() -> Self {
        Compiler {
            parser: P::default(),
            generator: G::default()
        }
    }

    pub fn new(parser: P, generator: G) -> Self {
        Compiler {
            parser,
            generator
        }
    }

    pub fn compile_str(self, source: &str) -> Result<TranslationUnit, CompileError> {
        info!("Parsing source");
        let program = self.parser.parse(source)?;

        info!("Generating {} top level statements", program.statements.len());
        Ok(self.generator.generate(&program))
    }

    pub fn compile(self, source_filename: &Path) -> Result<TranslationUnit, CompileError> {
        let source_str = fs::read_to_string(source_filename)?;
        self.compile_str(source_str.as_str())
    }

    pub fn compile_and_save(self, source_filename: &Path, dest_filename: &Path, echo: bool) -> Result<(), CompileError> {
        let unit = self.compile(source_filename)?;
        write_artifact(&unit, dest_filename, echo)
    }
}
