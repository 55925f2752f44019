use log::debug;

use super::BackEndGenerator;
use super::identifiers::{mangle_function, mangle_variable};
use super::translation_context::TranslationContext;

use super::super::ast::{
    Program,
    Statement,
    Expression,
    VariableDeclaration,
    Assignment,
    LoopInitialization,
    DataItem,
    Parameter,
    UnaryOperation
};
use super::super::ast::datatype::return_type_name;
use super::super::output::TranslationUnit;

/// Result of translating a single statement. Declarations such as functions and data only
/// record into the shared buffers and leave nothing in place.
#[allow(non_camel_case_types)]
enum Fragment {
    CODE(String),
    NONE
}

/// CppGenerator is a Backend for C++17
/// It walks the Program depth first and generates the text of a single translation unit.
///
/// # Implementation Details
///   + Every identifier is mangled, see identifiers. There is no scope tracking, functions
///     and variables live in disjoint name spaces by prefix alone.
///   + Blocks are emitted without indentation, each statement ends with a line feed.
///   + Operators keep the precedence of the source tree. Logical operations are always
///     parenthesised and grouped expressions keep their parentheses. Relational operations
///     share one level in the source but not in C++, a relational operand of a relational
///     operation is parenthesised.
///   + Top level statements form the body of `int main`, a bare return there returns 0.
pub struct CppGenerator {
    context: TranslationContext,
    in_function: bool
}

impl BackEndGenerator for CppGenerator {
    /// Creates a default configuration of CppGenerator
    fn default() -> Self {
        Self {
            context: TranslationContext::new(),
            in_function: false
        }
    }

    /// Generates a TranslationUnit from a Program
    fn generate(mut self, program: &Program) -> TranslationUnit {
        for statement in &program.statements {
            if let Fragment::CODE(code) = self.translate_statement(statement) {
                self.context.push_statement(code);
            }
        }

        let unit = self.context.finalize();
        debug!("Generated {} data entries and {} functions", unit.data_pool.len(), unit.bodies.len());
        unit
    }
}

impl CppGenerator {
    fn translate_statement(&mut self, statement: &Statement) -> Fragment {
        match statement {
            Statement::VARIABLE_DECL(declaration) => {
                Fragment::CODE(format!("{};\n", self.translate_declaration(declaration)))
            },
            Statement::ASSIGNMENT(assignment) => {
                Fragment::CODE(format!("{};\n", self.translate_assignment(assignment)))
            },
            Statement::PRINT { items, trailing_separator } => {
                Fragment::CODE(self.translate_print(items, *trailing_separator))
            },
            Statement::FOR_LOOP { initialization, limit, step, body } => {
                Fragment::CODE(self.translate_for_loop(initialization, limit, step, body))
            },
            Statement::BRANCH { condition, if_branch, else_branch } => {
                Fragment::CODE(self.translate_branch(condition, if_branch, else_branch))
            },
            Statement::DATA(items) => {
                self.translate_data(items);
                Fragment::NONE
            },
            Statement::READ { identifier } => {
                Fragment::CODE(format!("data_read({});\n", mangle_variable(identifier)))
            },
            Statement::RESTORE => {
                Fragment::CODE(String::from("data_restore();\n"))
            },
            Statement::INPUT { prompt, identifier, allow_empty, default } => {
                Fragment::CODE(self.translate_input(prompt, identifier, *allow_empty, default))
            },
            Statement::FUNCTION { identifier, parameters, return_type, body } => {
                let signature = format!("{} {}({})",
                    return_type_name(*return_type),
                    mangle_function(identifier),
                    self.translate_parameters(parameters)
                );
                // Functions get a fresh statement buffer, the body never reaches the entry point
                let enclosing = std::mem::replace(&mut self.in_function, true);
                let body = self.translate_block(body);
                self.in_function = enclosing;
                self.context.push_function(signature, body);
                Fragment::NONE
            },
            Statement::FUNC_CALL(call) => {
                Fragment::CODE(format!("{};\n", self.translate_expression(call)))
            },
            Statement::RETURN { expression } => {
                Fragment::CODE(match expression {
                    Some(expression) => format!("return {};\n", self.translate_expression(expression)),
                    None if self.in_function => String::from("return;\n"),
                    None => String::from("return 0;\n"),
                })
            },
        }
    }

    /// Translates a nested list of statements into one block of code
    fn translate_block(&mut self, statements: &[Statement]) -> String {
        let mut code = String::new();
        for statement in statements {
            if let Fragment::CODE(fragment) = self.translate_statement(statement) {
                code.push_str(&fragment);
            }
        }
        code
    }

    fn translate_declaration(&self, declaration: &VariableDeclaration) -> String {
        let datatype = declaration.datatype.target_name();
        let identifier = mangle_variable(&declaration.identifier);

        match &declaration.expression {
            Some(expression) => format!("{} {} = {}", datatype, identifier, self.translate_expression(expression)),
            None => format!("{} {}", datatype, identifier),
        }
    }

    fn translate_assignment(&self, assignment: &Assignment) -> String {
        format!("{} = {}", mangle_variable(&assignment.identifier), self.translate_expression(&assignment.expression))
    }

    /// Items are chained onto std::cout. A trailing separator leaves the line open.
    /// Relational items bind looser than `<<` in C++ and are parenthesised.
    fn translate_print(&self, items: &[Expression], trailing_separator: bool) -> String {
        let mut code = String::from("std::cout");
        for item in items {
            code.push_str(" << ");
            code.push_str(&self.translate_relational_operand(item));
        }

        if trailing_separator {
            code.push_str(";\n");
        } else {
            code.push_str(" << std::endl;\n");
        }
        code
    }

    /// The sign of the step is only known at run time. The step is evaluated once into its own
    /// variable, which then selects between a counting up and a counting down loop.
    ///
    /// # Generated Form
    ///     auto jagle_step_N = <step>;
    ///     if (jagle_step_N >= 0) {
    ///     for (<init>; <var> <= <limit>; <var> += jagle_step_N) {
    ///     <body>}
    ///     }
    ///     else {
    ///     for (<init>; <var> >= <limit>; <var> += jagle_step_N) {
    ///     <body>}
    ///     }
    fn translate_for_loop(&mut self, initialization: &LoopInitialization, limit: &Expression,
                          step: &Option<Expression>, body: &[Statement]) -> String {
        // Allocated before the body so nested loops number after their parent
        let step_identifier = self.context.next_step_identifier();

        let variable = mangle_variable(initialization.identifier());
        let init = match initialization {
            LoopInitialization::DECLARATION(declaration) => self.translate_declaration(declaration),
            LoopInitialization::ASSIGNMENT(assignment) => self.translate_assignment(assignment),
        };
        let limit = self.translate_expression(limit);
        let step = match step {
            Some(step) => self.translate_expression(step),
            None => String::from("1"),
        };
        let body = self.translate_block(body);

        format!(
            "auto {step_identifier} = {step};\n\
             if ({step_identifier} >= 0) {{\n\
             for ({init}; {variable} <= {limit}; {variable} += {step_identifier}) {{\n\
             {body}}}\n\
             }}\n\
             else {{\n\
             for ({init}; {variable} >= {limit}; {variable} += {step_identifier}) {{\n\
             {body}}}\n\
             }}\n"
        )
    }

    fn translate_branch(&mut self, condition: &Expression, if_branch: &[Statement],
                        else_branch: &Option<Vec<Statement>>) -> String {
        let condition = self.translate_expression(condition);
        let if_branch = self.translate_block(if_branch);

        match else_branch {
            Some(else_branch) => {
                let else_branch = self.translate_block(else_branch);
                format!("if ({}) {{\n{}}}\nelse {{\n{}}}\n", condition, if_branch, else_branch)
            },
            None => format!("if ({}) {{\n{}}}\n", condition, if_branch),
        }
    }

    /// Data entries are appended to the global pool, each with its own sign.
    fn translate_data(&mut self, items: &[DataItem]) {
        for item in items {
            let sign = item.sign.map(|sign| sign.symbol()).unwrap_or("");
            self.context.push_data(format!("{}{}", sign, item.literal.data_pool_text()));
        }
    }

    fn translate_input(&self, prompt: &Option<String>, identifier: &str, allow_empty: bool,
                       default: &Option<Expression>) -> String {
        let prompt = match prompt {
            Some(prompt) => format!("\"{}\"", prompt),
            None => String::from("\"?\""),
        };
        let variable = mangle_variable(identifier);

        match default {
            Some(default) => format!("prompt_input({}, {}, {}, {});\n",
                prompt, variable, allow_empty, self.translate_expression(default)),
            None => format!("prompt_input({}, {}, {});\n", prompt, variable, allow_empty),
        }
    }

    fn translate_parameters(&self, parameters: &[Parameter]) -> String {
        parameters.iter()
            .map(|parameter| format!("{} {}", parameter.datatype.target_name(), mangle_variable(&parameter.identifier)))
            .collect::<Vec<String>>()
            .join(", ")
    }

    fn translate_expression(&self, expression: &Expression) -> String {
        match expression {
            Expression::LITERAL(literal) => literal.expression_text(),
            Expression::IDENTIFIER(identifier) => mangle_variable(identifier),
            Expression::BINARY_OP { op, lhs, rhs } => {
                format!("{} {} {}", self.translate_expression(lhs), op.symbol(), self.translate_expression(rhs))
            },
            Expression::EXPONENT { base, power } => {
                format!("std::pow({}, {})", self.translate_expression(base), self.translate_expression(power))
            },
            Expression::RELATIONAL { op, lhs, rhs } => {
                format!("{} {} {}", self.translate_relational_operand(lhs), op.symbol(), self.translate_relational_operand(rhs))
            },
            Expression::LOGICAL { op, lhs, rhs } => {
                format!("({} {} {})", self.translate_expression(lhs), op.symbol(), self.translate_expression(rhs))
            },
            Expression::UNARY_OP { op, expression } => {
                let expression = self.translate_expression(expression);
                match op {
                    UnaryOperation::NOT => format!("!{}", expression),
                    UnaryOperation::PLUS | UnaryOperation::NEGATE => format!("{}({})", op.symbol(), expression),
                }
            },
            Expression::FUNC_CALL { identifier, arguments } => {
                let arguments = arguments.iter()
                    .map(|argument| self.translate_expression(argument))
                    .collect::<Vec<String>>()
                    .join(", ");
                format!("{}({})", mangle_function(identifier), arguments)
            },
            Expression::VAL { expression } => format!("val({})", self.translate_expression(expression)),
            Expression::GROUPED(expression) => format!("({})", self.translate_expression(expression)),
        }
    }

    /// Parenthesises relational operations. C++ ranks `<` above `==` and both below `<<`,
    /// the source ranks them equally and folds left.
    fn translate_relational_operand(&self, operand: &Expression) -> String {
        match operand {
            Expression::RELATIONAL { .. } => format!("({})", self.translate_expression(operand)),
            _ => self.translate_expression(operand),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::super::parser::{AstParser, PestJagleParser};

    fn generate(source: &str) -> TranslationUnit {
        let program = PestJagleParser::default().parse(source).unwrap();
        CppGenerator::default().generate(&program)
    }

    fn statements(source: &str) -> String {
        generate(source).statements
    }

    #[test]
    fn test_variable_declarations() {
        assert_eq!("int _jagle_a = 1;\n", statements("a: int = 1"));
        assert_eq!("float _jagle_b = 1.0;\n", statements("b: float = 1.0"));
        assert_eq!("std::string _jagle_c = \"xyzzy\";\n", statements("c: str = \"xyzzy\""));
        assert_eq!("int _jagle_d;\n", statements("d: int"));
    }

    #[test]
    fn test_assignment() {
        assert_eq!("_jagle_a = _jagle_a + 1;\n", statements("a = a + 1"));
    }

    #[test]
    fn test_print() {
        assert_eq!("std::cout << \"x = \" << _jagle_x << std::endl;\n", statements("print \"x = \"; x"));
        assert_eq!("std::cout << _jagle_a << _jagle_b;\n", statements("print a, b,"));
        assert_eq!("std::cout << std::endl;\n", statements("print"));
        assert_eq!("std::cout << (_jagle_a < _jagle_b) << std::endl;\n", statements("print a < b"));
        assert_eq!("std::cout << ((3 == _jagle_a) < 2) << std::endl;\n", statements("print 3 == a < 2"));
    }

    #[test]
    fn test_for_loop_form() {
        let expected = "auto jagle_step_1 = -(1);\n\
                        if (jagle_step_1 >= 0) {\n\
                        for (int _jagle_i = 10; _jagle_i <= 1; _jagle_i += jagle_step_1) {\n\
                        std::cout << _jagle_i << std::endl;\n\
                        }\n\
                        }\n\
                        else {\n\
                        for (int _jagle_i = 10; _jagle_i >= 1; _jagle_i += jagle_step_1) {\n\
                        std::cout << _jagle_i << std::endl;\n\
                        }\n\
                        }\n";
        assert_eq!(expected, statements("for i: int = 10 to 1 step -1\nprint i\nnext i"));
    }

    #[test]
    fn test_for_loop_step_evaluated_once() {
        let code = statements("i: int\nfor i = 1 to 10 step next_step()\nnext");
        assert_eq!(1, code.matches("_func_jagle_next_step()").count());
        assert_eq!(1, code.matches("<=").count());
        assert_eq!(1, code.matches(">= 10").count());
        assert!(code.starts_with("int _jagle_i;\nauto jagle_step_1 = _func_jagle_next_step();\n"));
        assert!(code.contains("for (_jagle_i = 1; _jagle_i <= 10; _jagle_i += jagle_step_1)"));
        assert!(code.contains("for (_jagle_i = 1; _jagle_i >= 10; _jagle_i += jagle_step_1)"));
    }

    #[test]
    fn test_for_loop_default_step() {
        assert!(statements("for i: int = 1 to 3\nnext").starts_with("auto jagle_step_1 = 1;\n"));
    }

    #[test]
    fn test_nested_and_sibling_loops_have_unique_steps() {
        let source = "for i: int = 1 to 3\nfor j: int = 1 to 3\nnext j\nnext i\nfor k: int = 1 to 3\nnext k";
        let code = statements(source);

        assert!(code.starts_with("auto jagle_step_1 = 1;\n"));
        assert_eq!(2, code.matches("auto jagle_step_2 = 1;\n").count());
        assert!(code.contains("_jagle_j += jagle_step_2"));
        assert!(code.contains("auto jagle_step_3 = 1;\n"));
        assert!(code.contains("_jagle_k += jagle_step_3"));
        assert!(!code.contains("jagle_step_4"));
    }

    #[test]
    fn test_branch() {
        assert_eq!("if (_jagle_x > 1) {\nstd::cout << 1 << std::endl;\n}\n",
                   statements("if x > 1 then\nprint 1\nend"));

        assert_eq!("if (_jagle_x) {\nstd::cout << 1 << std::endl;\n}\nelse {\nstd::cout << 2 << std::endl;\n}\n",
                   statements("if x then\nprint 1\nelse\nprint 2\nend"));
    }

    #[test]
    fn test_data_pool_keeps_encounter_order() {
        let unit = generate("data 1, -2, 3.5\nprint 0\ndata \"four\", +5");
        assert_eq!(vec!["1", "-2", "3.5f", "std::string(\"four\")", "+5"], unit.data_pool);
        assert_eq!("std::cout << 0 << std::endl;\n", unit.statements);
    }

    #[test]
    fn test_data_inside_function_reaches_pool() {
        let unit = generate("fn f()\ndata 9\nend");
        assert_eq!(vec!["9"], unit.data_pool);
        assert_eq!("void _func_jagle_f() {\n}\n", unit.bodies[0]);
    }

    #[test]
    fn test_read_and_restore() {
        assert_eq!("data_read(_jagle_x);\ndata_read(_jagle_y);\ndata_restore();\n",
                   statements("read x\nread y\nrestore"));
    }

    #[test]
    fn test_input() {
        assert_eq!("prompt_input(\"?\", _jagle_x, false);\n", statements("input x"));
        assert_eq!("prompt_input(\"Age? \", _jagle_age, true);\n", statements("input \"Age? \", age optional"));
        assert_eq!("prompt_input(\"Name\", _jagle_name, true, \"bob\");\n",
                   statements("input \"Name\"; name default \"bob\""));
    }

    #[test]
    fn test_function_prototype_matches_body() {
        let unit = generate("fn add(x: int, y: float): float\nreturn x + y\nend\nr: float = add(1, 2.0)");

        assert_eq!(vec!["float _func_jagle_add(int _jagle_x, float _jagle_y);\n"], unit.prototypes);
        assert_eq!(vec!["float _func_jagle_add(int _jagle_x, float _jagle_y) {\nreturn _jagle_x + _jagle_y;\n}\n"], unit.bodies);
        assert_eq!("float _jagle_r = _func_jagle_add(1, 2.0);\n", unit.statements);

        let signature = unit.prototypes[0].trim_end_matches(";\n");
        assert!(unit.bodies[0].starts_with(&format!("{} {{\n", signature)));
    }

    #[test]
    fn test_every_function_has_one_prototype_and_one_body() {
        let unit = generate("fn a()\nend\nfn b(): str\nreturn \"b\"\nend\nif 1 then\nfn c(n: int): int\nreturn n\nend\nend");

        assert_eq!(3, unit.prototypes.len());
        assert_eq!(3, unit.bodies.len());
        for (prototype, body) in unit.prototypes.iter().zip(unit.bodies.iter()) {
            assert!(body.starts_with(prototype.trim_end_matches(";\n")));
        }
        assert_eq!("if (1) {\n}\n", unit.statements);
    }

    #[test]
    fn test_void_function_and_calls() {
        let unit = generate("fn hello()\nprint \"hi\"\nreturn\nend\nhello()");
        assert_eq!(vec!["void _func_jagle_hello();\n"], unit.prototypes);
        assert_eq!("void _func_jagle_hello() {\nstd::cout << \"hi\" << std::endl;\nreturn;\n}\n", unit.bodies[0]);
        assert_eq!("_func_jagle_hello();\n", unit.statements);
    }

    #[test]
    fn test_function_and_variable_may_share_a_name() {
        assert_eq!("int _jagle_f = _func_jagle_f(_jagle_f);\n", statements("f: int = f(f)"));
    }

    #[test]
    fn test_expressions() {
        assert_eq!("_jagle_x = (_jagle_a < 1 && _jagle_b >= 2);\n", statements("x = a < 1 and b >= 2"));
        assert_eq!("_jagle_x = ((_jagle_a || _jagle_b) && _jagle_c);\n", statements("x = a or b && c"));
        assert_eq!("_jagle_x = -(std::pow(2, 2));\n", statements("x = -2 ^ 2"));
        assert_eq!("_jagle_x = std::pow(_jagle_y, -(1));\n", statements("x = y ^ -1"));
        assert_eq!("_jagle_x = !_jagle_y;\n", statements("x = not y"));
        assert_eq!("_jagle_x = +(_jagle_y) % 3;\n", statements("x = +y % 3"));
        assert_eq!("_jagle_x = (1 + 2) * 3;\n", statements("x = (1 + 2) * 3"));
        assert_eq!("_jagle_x = val(\"12\") / 2;\n", statements("x = val(\"12\") / 2"));
        assert_eq!("_jagle_x = (_jagle_a == 1) != _jagle_b;\n", statements("x = a = 1 <> b"));
    }

    #[test]
    fn test_relational_chain_keeps_source_order() {
        assert_eq!("_jagle_x = (_jagle_a == _jagle_b) < _jagle_c;\n", statements("x = a == b < c"));
        assert_eq!("_jagle_x = ((_jagle_a < _jagle_b) >= _jagle_c) != 0;\n", statements("x = a < b >= c <> 0"));
        assert_eq!("_jagle_x = _jagle_a == (_jagle_b < _jagle_c);\n", statements("x = a == (b < c)"));
        assert_eq!("_jagle_x = _jagle_a + 1 < _jagle_b * 2;\n", statements("x = a + 1 < b * 2"));
    }

    #[test]
    fn test_return_in_entry_point() {
        assert_eq!("return 0;\n", statements("return"));
        assert_eq!("if (_jagle_x) {\nreturn 0;\n}\n", statements("if x then\nreturn\nend"));
        assert_eq!("return _jagle_x;\n", statements("return x"));

        let unit = generate("fn f()\nif 1 then\nreturn\nend\nend\nreturn");
        assert_eq!("void _func_jagle_f() {\nif (1) {\nreturn;\n}\n}\n", unit.bodies[0]);
        assert_eq!("return 0;\n", unit.statements);
    }

    #[test]
    fn test_generators_do_not_share_state() {
        let source = "for i: int = 1 to 2\nnext\ndata 1";
        let first = generate(source);
        let second = generate(source);

        assert_eq!(first, second);
        assert!(second.statements.starts_with("auto jagle_step_1"));
        assert_eq!(1, second.data_pool.len());
    }
}
