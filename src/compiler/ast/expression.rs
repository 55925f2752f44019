use super::literals::Literal;
use super::operators::{BinaryOperation, LogicalOperation, RelationalOperation, UnaryOperation};

#[derive(Debug, Clone, PartialEq)]
#[allow(non_camel_case_types)]
pub enum Expression {
    /// Literal is a constant value used within an expression.
    /// # Example:
    ///     a: int = 4
    ///              ^ -> Literal
    LITERAL(Literal),

    /// Identifier is a string sequence naming a variable.
    /// # Example:
    ///     print hello
    ///           ^^^^^ -> Identifier
    IDENTIFIER(String),

    /// Arithmetic operation with two arguments.
    ///
    /// # Syntax:
    ///     <lhs> <op> <rhs>
    ///
    /// # Example:
    ///     x = 40 + 2
    ///            ^ -> Binary Operator
    BINARY_OP {
        op: BinaryOperation,
        lhs: Box<Expression>,
        rhs: Box<Expression>
    },

    /// Exponentiation binds tighter than any other operator.
    ///
    /// # Syntax:
    ///     <base> ^ <power>
    EXPONENT {
        base: Box<Expression>,
        power: Box<Expression>
    },

    /// Comparison of two arguments.
    ///
    /// # Example:
    ///     if x <= 10 then
    ///          ^^ -> Relational Operator
    RELATIONAL {
        op: RelationalOperation,
        lhs: Box<Expression>,
        rhs: Box<Expression>
    },

    /// Boolean connective of two arguments, the loosest binding operator.
    ///
    /// # Example:
    ///     if x > 1 and x < 5 then
    ///              ^^^ -> Logical Operator
    LOGICAL {
        op: LogicalOperation,
        lhs: Box<Expression>,
        rhs: Box<Expression>
    },

    /// Unary operation is an expression operation with only one argument
    ///
    /// # Example:
    ///     x = -y
    ///         ^ -> Unary Operator
    UNARY_OP {
        op: UnaryOperation,
        expression: Box<Expression>
    },

    /// Function Call expressions call a user defined function with argument expressions.
    ///
    /// # Syntax:
    ///     <identifier>( (<expression>, )* )
    ///
    /// # Example:
    ///     print square(3)
    ///           ^^^^^^^^^ -> Function Call
    FUNC_CALL {
        identifier: String,
        arguments: Vec<Expression>
    },

    /// Built-in text to number conversion.
    ///
    /// # Syntax:
    ///     val(<expression>)
    VAL {
        expression: Box<Expression>
    },

    /// Parenthesised expression, kept so the emitted code groups the same way.
    GROUPED(Box<Expression>),
}
