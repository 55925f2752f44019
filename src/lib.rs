// External Modules
extern crate pest;
#[macro_use]
extern crate pest_derive;
#[macro_use]
extern crate simple_error;

// Internal Modules
pub mod compiler;
pub mod toolchain;

pub use compiler::{Compiler, CppGenerator, PestJagleParser};
pub use compiler::error::CompileError;
pub use compiler::output::TranslationUnit;

// Compiler types to use
type PARSER = PestJagleParser;
type GENERATOR = CppGenerator;

/// Translates Jagle source text into a C++ translation unit.
pub fn transpile(source: &str) -> Result<TranslationUnit, CompileError> {
    let compiler: Compiler<PARSER, GENERATOR> = Compiler::default();
    compiler.compile_str(source)
}
