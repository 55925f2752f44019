mod cpp_generator;
mod translation_context;
pub(crate) mod identifiers;

use super::ast::Program;
use super::output::TranslationUnit;

// Abstract Definitions

/// BackEndGenerator takes a Program and generates a TranslationUnit
pub trait BackEndGenerator {
    /// Generate default generator configuration
    fn default() -> Self;

    /// Generate the translation unit of a program. The program has passed the parser so
    /// every shape is known, generation can not fail.
    fn generate(self, program: &Program) -> TranslationUnit;
}

// Concrete Definition Export
pub use self::cpp_generator::CppGenerator;
