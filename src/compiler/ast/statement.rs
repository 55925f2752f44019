use super::datatype::VariableType;
use super::expression::Expression;
use super::literals::Literal;
use super::operators::UnaryOperation;

/// Declaration of a typed variable with an optional initial value.
///
/// # Syntax:
///     <identifier> : <datatype> (= <expression>)?
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclaration {
    pub identifier: String,
    pub datatype: VariableType,
    pub expression: Option<Expression>
}

/// Assignment of a new value to an existing variable.
///
/// # Syntax:
///     <identifier> = <expression>
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub identifier: String,
    pub expression: Expression
}

/// The clause introducing the loop control variable of a for statement.
#[derive(Debug, Clone, PartialEq)]
#[allow(non_camel_case_types)]
pub enum LoopInitialization {
    DECLARATION(VariableDeclaration),
    ASSIGNMENT(Assignment),
}

impl LoopInitialization {
    pub fn identifier(&self) -> &str {
        match self {
            LoopInitialization::DECLARATION(declaration) => &declaration.identifier,
            LoopInitialization::ASSIGNMENT(assignment) => &assignment.identifier,
        }
    }
}

/// A single entry of a data statement. The sign is only valid on numeric literals.
#[derive(Debug, Clone, PartialEq)]
pub struct DataItem {
    pub sign: Option<UnaryOperation>,
    pub literal: Literal
}

/// Function parameters carry an identifier and a datatype.
///
/// # Example:
///     fn add(x: int, y: int): int
///            ^^^^^^ -> Parameter
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub identifier: String,
    pub datatype: VariableType
}

#[derive(Debug, Clone, PartialEq)]
#[allow(non_camel_case_types)]
pub enum Statement {
    /// # Example:
    ///     a: int = 1
    VARIABLE_DECL(VariableDeclaration),

    /// # Example:
    ///     a = a + 1
    ASSIGNMENT(Assignment),

    /// Print statement writes expressions to stdout of the generated program.
    /// A trailing separator suppresses the line feed.
    ///
    /// # Syntax:
    ///     print (<expression> ((,|;) <expression>)*)? (,|;)?
    ///
    /// # Example:
    ///     print "x = "; x     -> 'x = 4\n'
    ///     print "no newline";
    PRINT {
        items: Vec<Expression>,
        trailing_separator: bool
    },

    /// Counting loop. The step sign is only known at run time, see the generator.
    ///
    /// # Syntax:
    ///     for <initialization> to <expression> (step <expression>)?
    ///         ...
    ///     next
    ///
    /// # Example:
    ///     for i: int = 10 to 1 step -1
    ///         print i
    ///     next
    FOR_LOOP {
        initialization: LoopInitialization,
        limit: Expression,
        step: Option<Expression>,
        body: Vec<Statement>
    },

    /// Branch statement conditionally runs a section of code. If an else section is defined it
    /// runs on a false condition.
    ///
    /// # Syntax:
    ///     if <expression> then
    ///         ...
    ///     (else
    ///         ...)?
    ///     end
    BRANCH {
        condition: Expression,
        if_branch: Vec<Statement>,
        else_branch: Option<Vec<Statement>>
    },

    /// Appends literals to the global data pool, produces no code in place.
    ///
    /// # Example:
    ///     data 1, -2, 3.5, "four"
    DATA(Vec<DataItem>),

    /// Reads the next entry of the data pool into a variable.
    READ {
        identifier: String
    },

    /// Rewinds the data pool cursor to the first entry.
    RESTORE,

    /// Prompts the user for a value.
    ///
    /// # Syntax:
    ///     input ("<prompt>" (,|;))? <identifier> (optional)? (default <expression>)?
    INPUT {
        prompt: Option<String>,
        identifier: String,
        allow_empty: bool,
        default: Option<Expression>
    },

    /// Functions are callable sections of code that have defined 0 or more parameters and
    /// an optional return type.
    ///
    /// # Syntax:
    ///     fn <identifier>( (<parameter>, )* ) (: <datatype>)?
    ///         ...
    ///     end
    FUNCTION {
        identifier: String,
        parameters: Vec<Parameter>,
        return_type: Option<VariableType>,
        body: Vec<Statement>
    },

    /// Function call whose result is discarded.
    /// Holds an Expression::FUNC_CALL.
    FUNC_CALL(Expression),

    /// # Syntax:
    ///     return <expression>?
    RETURN {
        expression: Option<Expression>
    },
}
