use enum_assoc::Assoc;

/// Unary Operations are mathematical symbolic functions with one argument.
/// The same signs are used to prefix literals in data statements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Assoc)]
#[func(pub const fn symbol(&self) -> &'static str)]
#[allow(non_camel_case_types)]
pub enum UnaryOperation {
    #[assoc(symbol = "!")]
    NOT,        // ! <rhs>
    #[assoc(symbol = "+")]
    PLUS,       // + <rhs>
    #[assoc(symbol = "-")]
    NEGATE,     // - <rhs>
}

/// Arithmetic operations with two arguments. Exponentiation is not part of this set as it
/// has no operator in the target language, see Expression::EXPONENT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Assoc)]
#[func(pub const fn symbol(&self) -> &'static str)]
#[allow(non_camel_case_types)]
pub enum BinaryOperation {
    #[assoc(symbol = "+")]
    ADD,            // <lhs> + <rhs>
    #[assoc(symbol = "-")]
    SUB,            // <lhs> - <rhs>
    #[assoc(symbol = "*")]
    MUL,            // <lhs> * <rhs>
    #[assoc(symbol = "/")]
    DIV,            // <lhs> / <rhs>
    #[assoc(symbol = "%")]
    MOD,            // <lhs> % <rhs>
}

/// Comparisons between two arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Assoc)]
#[func(pub const fn symbol(&self) -> &'static str)]
#[allow(non_camel_case_types)]
pub enum RelationalOperation {
    #[assoc(symbol = "==")]
    EQUAL,          // <lhs> == <rhs>
    #[assoc(symbol = "!=")]
    NOT_EQUAL,      // <lhs> != <rhs>
    #[assoc(symbol = "<")]
    LESS_THAN,      // <lhs> <  <rhs>
    #[assoc(symbol = ">")]
    GREATER_THAN,   // <lhs> >  <rhs>
    #[assoc(symbol = "<=")]
    LESS_EQUAL,     // <lhs> <= <rhs>
    #[assoc(symbol = ">=")]
    GREATER_EQUAL,  // <lhs> >= <rhs>
}

/// Boolean connectives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Assoc)]
#[func(pub const fn symbol(&self) -> &'static str)]
#[allow(non_camel_case_types)]
pub enum LogicalOperation {
    #[assoc(symbol = "&&")]
    AND,            // <lhs> and <rhs>
    #[assoc(symbol = "||")]
    OR,             // <lhs> or <rhs>
}
