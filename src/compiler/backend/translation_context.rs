use super::identifiers::step_identifier;
use super::super::output::TranslationUnit;

/// TranslationContext holds everything a generator accumulates while walking one program.
///
/// # Buffers
///   + statements: translated top level statements, the body of the entry point.
///   + data_pool: entries of every data statement in encounter order.
///   + prototypes / bodies: one entry each per function definition, both built from the same
///     signature.
///
/// A context lives for exactly one compilation, it is consumed by finalize.
pub struct TranslationContext {
    statements: Vec<String>,
    data_pool: Vec<String>,
    prototypes: Vec<String>,
    bodies: Vec<String>,
    step_count: u64
}

impl TranslationContext {
    pub fn new() -> Self {
        Self {
            statements: vec![],
            data_pool: vec![],
            prototypes: vec![],
            bodies: vec![],
            step_count: 0
        }
    }

    /// Appends code to the entry point
    pub fn push_statement(&mut self, code: String) {
        self.statements.push(code);
    }

    /// Appends an entry to the global data pool. Entries are never reordered.
    pub fn push_data(&mut self, entry: String) {
        self.data_pool.push(entry);
    }

    /// Records a function definition. The prototype and the body share the signature text so
    /// they can not disagree on name, return type or parameters.
    pub fn push_function(&mut self, signature: String, body: String) {
        self.prototypes.push(format!("{};\n", signature));
        self.bodies.push(format!("{} {{\n{}}}\n", signature, body));
    }

    /// Generates a new unique identifier for the step value of a for loop.
    pub fn next_step_identifier(&mut self) -> String {
        self.step_count += 1;
        step_identifier(self.step_count)
    }

    /// Moves all buffers into a TranslationUnit, consumes self in the process.
    pub fn finalize(self) -> TranslationUnit {
        TranslationUnit {
            data_pool: self.data_pool,
            prototypes: self.prototypes,
            bodies: self.bodies,
            statements: self.statements.concat()
        }
    }
}
