use std::str::FromStr;

use log::debug;
use pest::iterators::{Pair, Pairs};

use crate::pest::Parser;
use super::AstParser;
use super::super::error::CompileError;
use super::super::ast::{
    Program,
    Statement,
    Expression,
    Literal,
    VariableType,
    VariableDeclaration,
    Assignment,
    LoopInitialization,
    DataItem,
    Parameter,
    BinaryOperation,
    RelationalOperation,
    LogicalOperation,
    UnaryOperation
};

/// Jagle Parser parses a string into a series of tokens.
/// These tokens are defined as a Context-Free-Grammar in the src/jagle.pest file.
/// The tokens generated from this parser are then formalised into the typed
/// abstract syntax tree.
#[derive(Parser)]
#[grammar = "jagle.pest"]
struct JagleParser;

/// PestJagleParser is a concrete AstParser.
/// It uses the pest library to generate a token sequence from a source string
/// that is then converted into a Program.
pub struct PestJagleParser;

/// Takes the next token of a sequence the grammar guarantees to be there.
fn next_pair<'i>(pairs: &mut Pairs<'i, Rule>, context: &str) -> Result<Pair<'i, Rule>, CompileError> {
    pairs.next()
        .ok_or_else(|| CompileError::internal(format!("Missing token while parsing {}", context)))
}

fn unexpected(pair: &Pair<Rule>) -> CompileError {
    CompileError::internal(format!("Unprocessed pest rule: {:?} '{}'", pair.as_rule(), pair.as_str()))
}

impl PestJagleParser {

    /// Parses source string into a Program.
    fn parse_into_program(&self, source: &str) -> Result<Program, CompileError> {
        let mut pairs = JagleParser::parse(Rule::program, source)
            .map_err(|error| CompileError::Syntax(error.to_string()))?;

        let program = next_pair(&mut pairs, "program")?;
        let statement_list = program.into_inner()
            .find(|pair| pair.as_rule() == Rule::statement_list)
            .ok_or_else(|| CompileError::internal("Program should start with statement list."))?;

        let statements = self.parse_pair_statement_list(statement_list)?;
        debug!("Parsed {} top level statements", statements.len());

        Ok(Program::new(statements))
    }

    /// Parses a pest token pair into a list of statements
    fn parse_pair_statement_list(&self, pair: Pair<Rule>) -> Result<Vec<Statement>, CompileError> {
        pair.into_inner()
            .map(|statement| self.parse_pair_statement(statement))
            .collect()
    }

    /// Parses all pest statement pairs into a valid Statement
    fn parse_pair_statement(&self, pair: Pair<Rule>) -> Result<Statement, CompileError> {
        match pair.as_rule() {
            Rule::variable_decl_stmt => { Ok(Statement::VARIABLE_DECL(self.parse_pair_variable_declaration(pair)?)) },
            Rule::assignment_stmt =>    { Ok(Statement::ASSIGNMENT(self.parse_pair_assignment(pair)?)) },
            Rule::func_call_stmt =>     {
                let call = next_pair(&mut pair.into_inner(), "function call statement")?;
                Ok(Statement::FUNC_CALL(self.parse_pair_function_call(call)?))
            },
            Rule::func_def =>           { self.parse_pair_function(pair) },
            Rule::for_stmt =>           { self.parse_pair_for_statement(pair) },
            Rule::if_stmt =>            { self.parse_pair_if_statement(pair) },
            Rule::print_stmt =>         { self.parse_pair_print_statement(pair) },
            Rule::data_stmt =>          { self.parse_pair_data_statement(pair) },
            Rule::read_stmt =>          {
                let identifier = self.parse_pair_identifier(next_pair(&mut pair.into_inner(), "read statement")?)?;
                Ok(Statement::READ { identifier })
            },
            Rule::restore_stmt =>       { Ok(Statement::RESTORE) },
            Rule::input_stmt =>         { self.parse_pair_input_statement(pair) },
            Rule::return_stmt =>        {
                let expression = pair.into_inner().next()
                    .map(|expression| self.parse_pair_expression(expression))
                    .transpose()?;
                Ok(Statement::RETURN { expression })
            },
            _ => { Err(unexpected(&pair)) }
        }
    }

    /// Parses all pest expression pairs into a valid Expression
    fn parse_pair_expression(&self, pair: Pair<Rule>) -> Result<Expression, CompileError> {
        match pair.as_rule() {
            Rule::logical |
            Rule::relational |
            Rule::additive |
            Rule::multiplicative => { self.parse_pair_binary_expression(pair) },
            Rule::unary =>          { self.parse_pair_unary_expression(pair) },
            Rule::exponent =>       { self.parse_pair_exponent_expression(pair) },
            Rule::integer |
            Rule::float |
            Rule::string =>         { Ok(Expression::LITERAL(self.parse_pair_literal(pair)?)) },
            Rule::identifier =>     { Ok(Expression::IDENTIFIER(self.parse_pair_identifier(pair)?)) },
            Rule::func_call =>      { self.parse_pair_function_call(pair) },
            Rule::val_func =>       {
                let expression = self.parse_pair_expression(next_pair(&mut pair.into_inner(), "val")?)?;
                Ok(Expression::VAL { expression: Box::new(expression) })
            },
            Rule::grouped =>        {
                let expression = self.parse_pair_expression(next_pair(&mut pair.into_inner(), "group")?)?;
                Ok(Expression::GROUPED(Box::new(expression)))
            },
            _ => { Err(unexpected(&pair)) }
        }
    }

    /// Parses a pest token pair into an AST literal
    fn parse_pair_literal(&self, pair: Pair<Rule>) -> Result<Literal, CompileError> {
        match pair.as_rule() {
            Rule::integer => { Ok(Literal::INTEGER(String::from(pair.as_str()))) },
            Rule::float =>   { Ok(Literal::FLOAT(String::from(pair.as_str()))) },
            Rule::string =>  { Ok(Literal::STRING(self.parse_pair_string_content(pair)?)) },
            _ => { Err(unexpected(&pair)) }
        }
    }

    /// Strings are compound atomic, the only inner token is the text between the quotes.
    fn parse_pair_string_content(&self, pair: Pair<Rule>) -> Result<String, CompileError> {
        let content = next_pair(&mut pair.into_inner(), "string")?;
        Ok(String::from(content.as_str()))
    }

    /// Parses a pest token pair into an AST identifier
    fn parse_pair_identifier(&self, pair: Pair<Rule>) -> Result<String, CompileError> {
        match pair.as_rule() {
            Rule::identifier => Ok(String::from(pair.as_str())),
            _ => Err(unexpected(&pair))
        }
    }

    fn parse_pair_variable_type(&self, pair: Pair<Rule>) -> Result<VariableType, CompileError> {
        VariableType::from_str(pair.as_str())
            .map_err(|_| CompileError::internal(format!("Unknown datatype '{}'", pair.as_str())))
    }

    /// Parses a declaration, shared by declaration statements and for loop headers
    fn parse_pair_variable_declaration(&self, pair: Pair<Rule>) -> Result<VariableDeclaration, CompileError> {
        let mut pair = pair.into_inner();
        let identifier = self.parse_pair_identifier(next_pair(&mut pair, "declaration")?)?;
        let datatype = self.parse_pair_variable_type(next_pair(&mut pair, "declaration")?)?;
        let expression = pair.next()
            .map(|expression| self.parse_pair_expression(expression))
            .transpose()?;

        Ok(VariableDeclaration {
            identifier,
            datatype,
            expression,
        })
    }

    /// Parses an assignment, shared by assignment statements and for loop headers
    fn parse_pair_assignment(&self, pair: Pair<Rule>) -> Result<Assignment, CompileError> {
        let mut pair = pair.into_inner();
        let identifier = self.parse_pair_identifier(next_pair(&mut pair, "assignment")?)?;
        let expression = self.parse_pair_expression(next_pair(&mut pair, "assignment")?)?;

        Ok(Assignment {
            identifier,
            expression,
        })
    }

    /// Parses a pest token pair into an AST binary expression
    fn parse_pair_binary_expression(&self, pair: Pair<Rule>) -> Result<Expression, CompileError> {
        let mut pair = pair.into_inner();

        // Convert linear list of binary operations of equal precedence
        // Into AST tree of binary operations
        let mut lhs = self.parse_pair_expression(next_pair(&mut pair, "binary expression")?)?;
        while let Some(op) = pair.next() {
            let rhs = Box::new(self.parse_pair_expression(next_pair(&mut pair, "binary expression")?)?);
            let boxed_lhs = Box::new(lhs);

            lhs = if let Some(op) = self.parse_pair_binary_op(&op) {
                Expression::BINARY_OP { op, lhs: boxed_lhs, rhs }
            } else if let Some(op) = self.parse_pair_relational_op(&op) {
                Expression::RELATIONAL { op, lhs: boxed_lhs, rhs }
            } else if let Some(op) = self.parse_pair_logical_op(&op) {
                Expression::LOGICAL { op, lhs: boxed_lhs, rhs }
            } else {
                return Err(unexpected(&op));
            };
        }

        Ok(lhs)
    }

    /// Parses a pest token pair into an AST unary expression
    fn parse_pair_unary_expression(&self, pair: Pair<Rule>) -> Result<Expression, CompileError> {
        let mut pair = pair.into_inner();
        let operator_or_exponent = next_pair(&mut pair, "unary expression")?;
        // Unary
        if pair.peek().is_some() {
            let op = self.parse_pair_unary_op(&operator_or_exponent)
                .ok_or_else(|| unexpected(&operator_or_exponent))?;
            let expression = self.parse_pair_expression(next_pair(&mut pair, "unary expression")?)?;

            Ok(Expression::UNARY_OP {
                op,
                expression: Box::new(expression),
            })
        // Skip as exponent
        } else {
            self.parse_pair_expression(operator_or_exponent)
        }
    }

    /// Parses a pest token pair into an AST exponent, the power may itself be signed
    fn parse_pair_exponent_expression(&self, pair: Pair<Rule>) -> Result<Expression, CompileError> {
        let mut pair = pair.into_inner();
        let base = self.parse_pair_expression(next_pair(&mut pair, "exponent")?)?;

        match pair.next() {
            Some(_pow) => {
                let power = self.parse_pair_expression(next_pair(&mut pair, "exponent")?)?;
                Ok(Expression::EXPONENT {
                    base: Box::new(base),
                    power: Box::new(power),
                })
            },
            None => Ok(base)
        }
    }

    /// Parses a pest token pair into an AST function call expression
    fn parse_pair_function_call(&self, pair: Pair<Rule>) -> Result<Expression, CompileError> {
        let mut pair = pair.into_inner();
        let identifier = self.parse_pair_identifier(next_pair(&mut pair, "function call")?)?;
        let arguments = pair
            .map(|argument| self.parse_pair_expression(argument))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Expression::FUNC_CALL {
            identifier,
            arguments,
        })
    }

    /// Parses a pest token pair into an AST for statement
    fn parse_pair_for_statement(&self, pair: Pair<Rule>) -> Result<Statement, CompileError> {
        let mut pair = pair.into_inner();
        let initialization = next_pair(&mut pair, "for statement")?;
        let initialization = match initialization.as_rule() {
            Rule::loop_declaration => LoopInitialization::DECLARATION(self.parse_pair_variable_declaration(initialization)?),
            Rule::loop_assignment => LoopInitialization::ASSIGNMENT(self.parse_pair_assignment(initialization)?),
            _ => return Err(unexpected(&initialization)),
        };
        let limit = self.parse_pair_expression(next_pair(&mut pair, "for statement")?)?;

        let mut step = None;
        let mut body = None;
        for item in pair {
            match item.as_rule() {
                Rule::for_step => {
                    step = Some(self.parse_pair_expression(next_pair(&mut item.into_inner(), "for step")?)?);
                },
                Rule::statement_list => {
                    body = Some(self.parse_pair_statement_list(item)?);
                },
                // Name after `next` is only decoration
                Rule::identifier => {},
                _ => return Err(unexpected(&item)),
            }
        }

        Ok(Statement::FOR_LOOP {
            initialization,
            limit,
            step,
            body: body.ok_or_else(|| CompileError::internal("For statement without a body"))?,
        })
    }

    /// Parses a pest token pair into an AST if statement
    fn parse_pair_if_statement(&self, pair: Pair<Rule>) -> Result<Statement, CompileError> {
        let mut pair = pair.into_inner();
        let condition = self.parse_pair_expression(next_pair(&mut pair, "if statement")?)?;
        let if_branch = self.parse_pair_statement_list(next_pair(&mut pair, "if statement")?)?;
        let else_branch = pair.next()
            .map(|branch| self.parse_pair_statement_list(branch))
            .transpose()?;

        Ok(Statement::BRANCH {
            condition,
            if_branch,
            else_branch,
        })
    }

    /// Parses a pest token pair into an AST print statement.
    /// The line feed is suppressed when the last token of the list is a separator.
    fn parse_pair_print_statement(&self, pair: Pair<Rule>) -> Result<Statement, CompileError> {
        let print_list = next_pair(&mut pair.into_inner(), "print statement")?;

        let mut items = Vec::new();
        let mut trailing_separator = false;
        for item in print_list.into_inner() {
            match item.as_rule() {
                Rule::print_separator => {
                    trailing_separator = true;
                },
                _ => {
                    items.push(self.parse_pair_expression(item)?);
                    trailing_separator = false;
                }
            }
        }

        Ok(Statement::PRINT {
            items,
            trailing_separator,
        })
    }

    /// Parses a pest token pair into an AST data statement
    fn parse_pair_data_statement(&self, pair: Pair<Rule>) -> Result<Statement, CompileError> {
        let items = pair.into_inner()
            .map(|item| self.parse_pair_data_item(item))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Statement::DATA(items))
    }

    /// A data item is an optionally signed literal, the sign belongs to this item only.
    fn parse_pair_data_item(&self, pair: Pair<Rule>) -> Result<DataItem, CompileError> {
        let mut sign = None;
        for item in pair.into_inner() {
            match item.as_rule() {
                Rule::data_sign => {
                    sign = Some(match item.as_str() {
                        "-" => UnaryOperation::NEGATE,
                        _ => UnaryOperation::PLUS,
                    });
                },
                Rule::integer |
                Rule::float |
                Rule::string => {
                    return Ok(DataItem {
                        sign,
                        literal: self.parse_pair_literal(item)?,
                    });
                },
                _ => return Err(unexpected(&item)),
            }
        }

        Err(CompileError::internal("Data item without a literal"))
    }

    /// Parses a pest token pair into an AST input statement.
    /// Supplying a default value implies that empty input is accepted.
    fn parse_pair_input_statement(&self, pair: Pair<Rule>) -> Result<Statement, CompileError> {
        let mut prompt = None;
        let mut identifier = None;
        let mut allow_empty = false;
        let mut default = None;

        for item in pair.into_inner() {
            match item.as_rule() {
                Rule::string => {
                    prompt = Some(self.parse_pair_string_content(item)?);
                },
                Rule::identifier => {
                    identifier = Some(self.parse_pair_identifier(item)?);
                },
                Rule::allow_empty => {
                    allow_empty = true;
                },
                Rule::input_default => {
                    let expression = next_pair(&mut item.into_inner(), "input default")?;
                    default = Some(self.parse_pair_expression(expression)?);
                },
                _ => return Err(unexpected(&item)),
            }
        }

        Ok(Statement::INPUT {
            prompt,
            identifier: identifier.ok_or_else(|| CompileError::internal("Input statement without a variable"))?,
            allow_empty: allow_empty || default.is_some(),
            default,
        })
    }

    /// Parses a pest token pair into an AST function statement
    fn parse_pair_function(&self, pair: Pair<Rule>) -> Result<Statement, CompileError> {
        let mut pair = pair.into_inner();
        let identifier = self.parse_pair_identifier(next_pair(&mut pair, "function")?)?;

        let mut parameters = Vec::new();
        let mut return_type = None;
        let mut body = None;
        for item in pair {
            match item.as_rule() {
                Rule::parameter => {
                    parameters.push(self.parse_pair_function_parameter(item)?);
                },
                Rule::variable_type => {
                    return_type = Some(self.parse_pair_variable_type(item)?);
                },
                Rule::statement_list => {
                    body = Some(self.parse_pair_statement_list(item)?);
                },
                _ => return Err(unexpected(&item)),
            }
        }

        Ok(Statement::FUNCTION {
            identifier,
            parameters,
            return_type,
            body: body.ok_or_else(|| CompileError::internal("Function without a body"))?,
        })
    }

    /// Parses a pest token pair into an AST function parameter.
    /// Function parameters are defined in the function definition.
    fn parse_pair_function_parameter(&self, pair: Pair<Rule>) -> Result<Parameter, CompileError> {
        let mut pair = pair.into_inner();
        let identifier = self.parse_pair_identifier(next_pair(&mut pair, "parameter")?)?;
        let datatype = self.parse_pair_variable_type(next_pair(&mut pair, "parameter")?)?;

        Ok(Parameter {
            identifier,
            datatype,
        })
    }

    /// Parses a pest token pair into an AST Unary Operation
    fn parse_pair_unary_op(&self, pair: &Pair<Rule>) -> Option<UnaryOperation> {
        match pair.as_rule() {
            Rule::unary_not => Some(UnaryOperation::NOT),
            Rule::unary_plus => Some(UnaryOperation::PLUS),
            Rule::unary_neg => Some(UnaryOperation::NEGATE),
            _ => None,
        }
    }

    /// Parses a pest token pair into an AST arithmetic Binary Operation
    fn parse_pair_binary_op(&self, pair: &Pair<Rule>) -> Option<BinaryOperation> {
        match pair.as_rule() {
            Rule::add => Some(BinaryOperation::ADD),
            Rule::sub => Some(BinaryOperation::SUB),
            Rule::mul => Some(BinaryOperation::MUL),
            Rule::div => Some(BinaryOperation::DIV),
            Rule::modulus => Some(BinaryOperation::MOD),
            _ => None,
        }
    }

    fn parse_pair_relational_op(&self, pair: &Pair<Rule>) -> Option<RelationalOperation> {
        match pair.as_rule() {
            Rule::equal => Some(RelationalOperation::EQUAL),
            Rule::not_equal => Some(RelationalOperation::NOT_EQUAL),
            Rule::less_than => Some(RelationalOperation::LESS_THAN),
            Rule::greater_than => Some(RelationalOperation::GREATER_THAN),
            Rule::less_equal => Some(RelationalOperation::LESS_EQUAL),
            Rule::greater_equal => Some(RelationalOperation::GREATER_EQUAL),
            _ => None,
        }
    }

    fn parse_pair_logical_op(&self, pair: &Pair<Rule>) -> Option<LogicalOperation> {
        match pair.as_rule() {
            Rule::and => Some(LogicalOperation::AND),
            Rule::or => Some(LogicalOperation::OR),
            _ => None,
        }
    }
}

/// AstParser Trait Concrete Implementation
impl AstParser for PestJagleParser {

    /// PestJagleParser has no configuration the
    /// default is just instantiation
    fn default() -> Self {
        Self
    }

    /// Parse processes a source string into a Program
    fn parse(self, source: &str) -> Result<Program, CompileError> {
        self.parse_into_program(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> Vec<Statement> {
        PestJagleParser::default().parse(source).unwrap().statements
    }

    fn int(text: &str) -> Expression {
        Expression::LITERAL(Literal::INTEGER(String::from(text)))
    }

    fn ident(name: &str) -> Expression {
        Expression::IDENTIFIER(String::from(name))
    }

    fn assigned_expression(source: &str) -> Expression {
        match parse(source).remove(0) {
            Statement::ASSIGNMENT(assignment) => assignment.expression,
            other => panic!("Expected assignment, found {:?}", other),
        }
    }

    #[test]
    fn test_variable_declarations() {
        assert_eq!(vec![Statement::VARIABLE_DECL(VariableDeclaration {
            identifier: String::from("a"),
            datatype: VariableType::INT,
            expression: Some(int("1")),
        })], parse("a: int = 1"));

        assert_eq!(vec![Statement::VARIABLE_DECL(VariableDeclaration {
            identifier: String::from("b"),
            datatype: VariableType::FLOAT,
            expression: Some(Expression::LITERAL(Literal::FLOAT(String::from("1.0")))),
        })], parse("b: float = 1.0"));

        assert_eq!(vec![Statement::VARIABLE_DECL(VariableDeclaration {
            identifier: String::from("c"),
            datatype: VariableType::STR,
            expression: None,
        })], parse("c: str"));
    }

    #[test]
    fn test_multiplication_binds_tighter_than_addition() {
        assert_eq!(Expression::BINARY_OP {
            op: BinaryOperation::ADD,
            lhs: Box::new(int("1")),
            rhs: Box::new(Expression::BINARY_OP {
                op: BinaryOperation::MUL,
                lhs: Box::new(int("2")),
                rhs: Box::new(int("3")),
            }),
        }, assigned_expression("x = 1 + 2 * 3"));
    }

    #[test]
    fn test_left_associative_subtraction() {
        assert_eq!(Expression::BINARY_OP {
            op: BinaryOperation::SUB,
            lhs: Box::new(Expression::BINARY_OP {
                op: BinaryOperation::SUB,
                lhs: Box::new(int("8")),
                rhs: Box::new(int("4")),
            }),
            rhs: Box::new(int("2")),
        }, assigned_expression("x = 8 - 4 - 2"));
    }

    #[test]
    fn test_exponent_binds_tighter_than_unary() {
        assert_eq!(Expression::UNARY_OP {
            op: UnaryOperation::NEGATE,
            expression: Box::new(Expression::EXPONENT {
                base: Box::new(int("2")),
                power: Box::new(int("2")),
            }),
        }, assigned_expression("x = -2 ^ 2"));

        assert_eq!(Expression::EXPONENT {
            base: Box::new(ident("y")),
            power: Box::new(Expression::UNARY_OP {
                op: UnaryOperation::NEGATE,
                expression: Box::new(int("1")),
            }),
        }, assigned_expression("x = y ^ -1"));
    }

    #[test]
    fn test_logical_binds_loosest() {
        assert_eq!(Expression::LOGICAL {
            op: LogicalOperation::AND,
            lhs: Box::new(Expression::RELATIONAL {
                op: RelationalOperation::LESS_THAN,
                lhs: Box::new(ident("a")),
                rhs: Box::new(int("1")),
            }),
            rhs: Box::new(Expression::RELATIONAL {
                op: RelationalOperation::NOT_EQUAL,
                lhs: Box::new(ident("b")),
                rhs: Box::new(int("2")),
            }),
        }, assigned_expression("x = a < 1 and b <> 2"));
    }

    #[test]
    fn test_grouping_is_preserved() {
        assert_eq!(Expression::BINARY_OP {
            op: BinaryOperation::MUL,
            lhs: Box::new(Expression::GROUPED(Box::new(Expression::BINARY_OP {
                op: BinaryOperation::ADD,
                lhs: Box::new(int("1")),
                rhs: Box::new(int("2")),
            }))),
            rhs: Box::new(int("3")),
        }, assigned_expression("x = (1 + 2) * 3"));
    }

    #[test]
    fn test_val_and_function_call_expressions() {
        assert_eq!(Expression::VAL {
            expression: Box::new(Expression::LITERAL(Literal::STRING(String::from("12")))),
        }, assigned_expression("x = val(\"12\")"));

        assert_eq!(Expression::FUNC_CALL {
            identifier: String::from("add"),
            arguments: vec![int("1"), ident("y")],
        }, assigned_expression("x = add(1, y)"));
    }

    #[test]
    fn test_print_separators() {
        assert_eq!(vec![Statement::PRINT {
            items: vec![ident("a"), ident("b")],
            trailing_separator: true,
        }], parse("print a, b;"));

        assert_eq!(vec![Statement::PRINT {
            items: vec![ident("a"), ident("b")],
            trailing_separator: false,
        }], parse("print a; b"));

        assert_eq!(vec![Statement::PRINT {
            items: vec![],
            trailing_separator: false,
        }], parse("print"));
    }

    #[test]
    fn test_for_statement() {
        let source = "for i: int = 10 to 1 step -1\n    print i\nnext i\n";
        assert_eq!(vec![Statement::FOR_LOOP {
            initialization: LoopInitialization::DECLARATION(VariableDeclaration {
                identifier: String::from("i"),
                datatype: VariableType::INT,
                expression: Some(int("10")),
            }),
            limit: int("1"),
            step: Some(Expression::UNARY_OP {
                op: UnaryOperation::NEGATE,
                expression: Box::new(int("1")),
            }),
            body: vec![Statement::PRINT { items: vec![ident("i")], trailing_separator: false }],
        }], parse(source));
    }

    #[test]
    fn test_for_statement_with_assignment_and_no_step() {
        match parse("i: int\nfor i = 1 to n\nnext").remove(1) {
            Statement::FOR_LOOP { initialization, limit, step, body } => {
                assert_eq!(LoopInitialization::ASSIGNMENT(Assignment {
                    identifier: String::from("i"),
                    expression: int("1"),
                }), initialization);
                assert_eq!(ident("n"), limit);
                assert_eq!(None, step);
                assert!(body.is_empty());
            },
            other => panic!("Expected for loop, found {:?}", other),
        }
    }

    #[test]
    fn test_if_else_statement() {
        let source = "if x > 1 then\nprint 1\nelse\nprint 2\nend";
        assert_eq!(vec![Statement::BRANCH {
            condition: Expression::RELATIONAL {
                op: RelationalOperation::GREATER_THAN,
                lhs: Box::new(ident("x")),
                rhs: Box::new(int("1")),
            },
            if_branch: vec![Statement::PRINT { items: vec![int("1")], trailing_separator: false }],
            else_branch: Some(vec![Statement::PRINT { items: vec![int("2")], trailing_separator: false }]),
        }], parse(source));

        match parse("if x then\nend").remove(0) {
            Statement::BRANCH { else_branch, .. } => assert_eq!(None, else_branch),
            other => panic!("Expected branch, found {:?}", other),
        }
    }

    #[test]
    fn test_data_items_carry_their_own_sign() {
        assert_eq!(vec![Statement::DATA(vec![
            DataItem { sign: None, literal: Literal::INTEGER(String::from("1")) },
            DataItem { sign: Some(UnaryOperation::NEGATE), literal: Literal::INTEGER(String::from("2")) },
            DataItem { sign: None, literal: Literal::FLOAT(String::from("3.5")) },
            DataItem { sign: Some(UnaryOperation::PLUS), literal: Literal::FLOAT(String::from("4.0")) },
            DataItem { sign: None, literal: Literal::STRING(String::from("five")) },
        ])], parse("data 1, -2, 3.5, +4.0, \"five\""));
    }

    #[test]
    fn test_read_and_restore() {
        assert_eq!(vec![
            Statement::READ { identifier: String::from("x") },
            Statement::RESTORE,
        ], parse("read x\nrestore"));
    }

    #[test]
    fn test_input_statements() {
        assert_eq!(vec![Statement::INPUT {
            prompt: None,
            identifier: String::from("x"),
            allow_empty: false,
            default: None,
        }], parse("input x"));

        assert_eq!(vec![Statement::INPUT {
            prompt: Some(String::from("Age? ")),
            identifier: String::from("age"),
            allow_empty: true,
            default: None,
        }], parse("input \"Age? \", age optional"));

        assert_eq!(vec![Statement::INPUT {
            prompt: Some(String::from("Name")),
            identifier: String::from("name"),
            allow_empty: true,
            default: Some(Expression::LITERAL(Literal::STRING(String::from("bob")))),
        }], parse("input \"Name\"; name default \"bob\""));
    }

    #[test]
    fn test_function_definition_and_call() {
        let source = "fn add(x: int, y: float): float\nreturn x + y\nend\nadd(1, 2.0)\n";
        let statements = parse(source);

        assert_eq!(Statement::FUNCTION {
            identifier: String::from("add"),
            parameters: vec![
                Parameter { identifier: String::from("x"), datatype: VariableType::INT },
                Parameter { identifier: String::from("y"), datatype: VariableType::FLOAT },
            ],
            return_type: Some(VariableType::FLOAT),
            body: vec![Statement::RETURN {
                expression: Some(Expression::BINARY_OP {
                    op: BinaryOperation::ADD,
                    lhs: Box::new(ident("x")),
                    rhs: Box::new(ident("y")),
                }),
            }],
        }, statements[0]);

        assert_eq!(Statement::FUNC_CALL(Expression::FUNC_CALL {
            identifier: String::from("add"),
            arguments: vec![int("1"), Expression::LITERAL(Literal::FLOAT(String::from("2.0")))],
        }), statements[1]);
    }

    #[test]
    fn test_void_function_with_bare_return() {
        match parse("fn hello()\nreturn\nend").remove(0) {
            Statement::FUNCTION { parameters, return_type, body, .. } => {
                assert!(parameters.is_empty());
                assert_eq!(None, return_type);
                assert_eq!(vec![Statement::RETURN { expression: None }], body);
            },
            other => panic!("Expected function, found {:?}", other),
        }
    }

    #[test]
    fn test_keyword_prefixed_identifiers() {
        assert_eq!(vec![Statement::FUNC_CALL(Expression::FUNC_CALL {
            identifier: String::from("printer"),
            arguments: vec![int("1")],
        })], parse("printer(1)"));

        assert_eq!(vec![Statement::ASSIGNMENT(Assignment {
            identifier: String::from("total"),
            expression: int("3"),
        })], parse("total = 3"));

        // A keyword ends at any character that can not continue a name
        assert_eq!(vec![Statement::PRINT {
            items: vec![Expression::GROUPED(Box::new(int("1")))],
            trailing_separator: false,
        }], parse("print(1)"));
    }

    #[test]
    fn test_comments_blank_lines_and_case() {
        let source = "\n' leading comment\n\nPRINT 1 ' trailing comment\n\n\nRestore\n";
        assert_eq!(vec![
            Statement::PRINT { items: vec![int("1")], trailing_separator: false },
            Statement::RESTORE,
        ], parse(source));
    }

    #[test]
    fn test_empty_program() {
        assert!(parse("").is_empty());
        assert!(parse("\n\n").is_empty());
    }

    #[test]
    fn test_syntax_errors() {
        let errors = vec![
            "a: int = ",
            "a: bool = 1",
            "for i = 1 to 3\nprint i\n",
            "if x then\nprint x\n",
            "data",
            "print 1 +",
            "printx",
            "readme",
            "returnvalue",
            "inputx",
            "restorex",
            "for i: int = 1 tox\nnext",
            "if x thenx\nend",
        ];
        for source in errors {
            match PestJagleParser::default().parse(source) {
                Err(CompileError::Syntax(_)) => {},
                other => panic!("Expected syntax error for {:?}, found {:?}", source, other),
            }
        }
    }
}
