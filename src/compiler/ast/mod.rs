pub mod literals;
pub mod operators;
pub mod datatype;
pub mod expression;
pub mod statement;

pub use self::{
    literals::Literal,
    datatype::VariableType,
    expression::Expression,
    operators::{
        UnaryOperation,
        BinaryOperation,
        RelationalOperation,
        LogicalOperation
    },
    statement::{
        Statement,
        VariableDeclaration,
        Assignment,
        LoopInitialization,
        DataItem,
        Parameter
    }
};

/// Intermediate Representation of the compiler model.
/// A program is the ordered list of its top level statements, nested statements live
/// inside the blocks of their parent Statement.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Statement>
}

impl Program {
    pub fn new(statements: Vec<Statement>) -> Self {
        Self {
            statements
        }
    }
}
