use super::ast::Program;
use super::error::CompileError;
pub mod jagle_pest_parser;

/// Parser handles interpretation of high-level tokens into the intermediate
/// representation. Put another way the parser turns a source string into an
/// abstract syntax tree.
pub trait AstParser {
    /// Creates a default configuration of an AstParser
    fn default() -> Self;

    /// Parse a source string into a Program. Fails on the first syntax error.
    fn parse(self, source: &str) -> Result<Program, CompileError>;
}

// Concrete Definition Export
pub use self::jagle_pest_parser::PestJagleParser;
