/// Literals are defined constants within a program. See Expression for more detail on their usage.
/// They are divided by their representation in text.
///
/// The source spelling is kept as written so it can be emitted verbatim, `1.0` stays `1.0`.
///
/// Note: signed literals are stored in the AST as a unary operation. For example
/// -32 <=> UNARY_OP{UnaryOperation::NEGATE, Literal::INTEGER("32")}
/// Data statements are the exception, see DataItem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    /// Form: %d
    INTEGER(String),

    /// Form: %d.%d(e[+-]%d)?
    FLOAT(String),

    /// Form: "%c*"
    /// Holds the text between the quotes, escape sequences untouched.
    STRING(String),
}

impl Literal {
    /// Spelling of the literal inside an expression.
    pub fn expression_text(&self) -> String {
        match self {
            Literal::INTEGER(text) | Literal::FLOAT(text) => text.clone(),
            Literal::STRING(text) => format!("\"{}\"", text),
        }
    }

    /// Spelling of the literal as an element of the global data pool.
    /// The pool holds `std::variant<int, float, std::string>` so floats need the `f` suffix
    /// and strings are constructed explicitly.
    pub fn data_pool_text(&self) -> String {
        match self {
            Literal::INTEGER(text) => text.clone(),
            Literal::FLOAT(text) => format!("{}f", text),
            Literal::STRING(text) => format!("std::string(\"{}\")", text),
        }
    }
}
