mod artifact;

use std::fmt;

use super::backend::identifiers::{DATA_CURSOR, DATA_POOL};

pub use self::artifact::{write_artifact, destination_directory};

/// Name of the runtime support header every generated unit includes.
pub const RUNTIME_HEADER: &str = "jagle.hpp";

/// TranslationUnit is the generated C++ program before it is written.
///
/// Generators only fill the sections, the layout of the final text is decided here.
/// # Section Order
///   + runtime support include
///   + global data pool and its read cursor
///   + function prototypes
///   + function bodies
///   + entry point wrapping the top level statements
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TranslationUnit {
    /// Data pool entries, one C++ initialiser each
    pub data_pool: Vec<String>,

    /// One `<signature>;\n` per function
    pub prototypes: Vec<String>,

    /// One `<signature> {\n<body>}\n` per function
    pub bodies: Vec<String>,

    /// Translated top level statements
    pub statements: String,
}

impl fmt::Display for TranslationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "#include \"{}\"", RUNTIME_HEADER)?;
        writeln!(f)?;

        writeln!(f, "// Global data")?;
        writeln!(f, "std::size_t {} = 0;", DATA_CURSOR)?;
        writeln!(f, "std::vector<std::variant<int, float, std::string>> {} = {{", DATA_POOL)?;
        if !self.data_pool.is_empty() {
            writeln!(f, "{}", self.data_pool.join(", "))?;
        }
        writeln!(f, "}};")?;
        writeln!(f)?;

        writeln!(f, "// Function declarations")?;
        write!(f, "{}", self.prototypes.concat())?;
        writeln!(f)?;

        writeln!(f, "// Function definitions")?;
        write!(f, "{}", self.bodies.join("\n"))?;
        writeln!(f)?;

        writeln!(f, "// Main program")?;
        writeln!(f, "int main(int argc, char* argv[]) {{")?;
        write!(f, "{}", self.statements)?;
        // Terminates a line left open by a print with a trailing separator
        writeln!(f, "std::cout << std::endl;")?;
        writeln!(f)?;
        writeln!(f, "return 0;")?;
        writeln!(f, "}}")
    }
}
