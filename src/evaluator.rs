use crate::arithmetic::evaluate_binary_op;
use crate::ast::{BinaryOp, Operand, Stmt};
use crate::environment::Environment;
use crate::error::{ErrorKind, SnolError};
use crate::input::InputSource;
use crate::lexer::Lexer;
use crate::parser::Parser;
use crate::value::Value;
use std::fmt;

/// What a statement produced, for the caller to display or act on.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Silent,
    Printed(Printed),
    Exit,
    /// The input ran out while `BEG` was waiting for a value.
    EndOfInput,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Printed {
    pub name: Option<String>,
    pub value: Value,
}

impl fmt::Display for Printed {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "[{}] = {}", name, self.value),
            None => write!(f, "{}", self.value),
        }
    }
}

pub struct Evaluator {
    environment: Environment,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    pub fn new() -> Self {
        Self {
            environment: Environment::new(),
        }
    }

    pub fn with_environment(environment: Environment) -> Self {
        Self { environment }
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Tokenize, classify and execute one line.
    pub fn execute_line(
        &mut self,
        line: &str,
        input: &mut dyn InputSource,
    ) -> Result<Outcome, SnolError> {
        let mut lexer = Lexer::new(line.to_string());
        let tokens = lexer.scan_tokens();

        let mut parser = Parser::new(tokens);
        match parser.parse()? {
            Some(statement) => self.execute_statement(&statement, input),
            None => Ok(Outcome::Silent),
        }
    }

    pub fn execute_statement(
        &mut self,
        stmt: &Stmt,
        input: &mut dyn InputSource,
    ) -> Result<Outcome, SnolError> {
        match stmt {
            Stmt::Input { name, span } => {
                let Some(text) = input.read_value(name) else {
                    return Ok(Outcome::EndOfInput);
                };
                let text = text.trim();
                let value = Value::from_literal(text).ok_or_else(|| {
                    SnolError::new_with_help(
                        ErrorKind::InvalidNumber(text.to_string()),
                        span.clone(),
                        format!("`{}` expects an integer such as 42 or a float such as 4.2", name),
                    )
                })?;
                self.environment.assign(name, value);
                Ok(Outcome::Silent)
            }
            Stmt::Print { target, .. } => {
                let value = self.resolve(target)?;
                Ok(Outcome::Printed(Printed {
                    name: target.variable_name().map(str::to_string),
                    value,
                }))
            }
            Stmt::Exit { .. } => Ok(Outcome::Exit),
            Stmt::Expression { operand, .. } => {
                self.resolve(operand)?;
                Ok(Outcome::Silent)
            }
            Stmt::Arithmetic {
                left,
                operator,
                right,
                ..
            } => {
                // Result is discarded; only the errors matter
                self.evaluate(left, *operator, right)?;
                Ok(Outcome::Silent)
            }
            Stmt::Assign { name, value, .. } => {
                let value = self.resolve(value)?;
                self.environment.assign(name, value);
                Ok(Outcome::Silent)
            }
            Stmt::AssignArithmetic {
                name,
                left,
                operator,
                right,
                ..
            } => {
                let value = self.evaluate(left, *operator, right)?;
                self.environment.assign(name, value);
                Ok(Outcome::Silent)
            }
        }
    }

    fn evaluate(
        &self,
        left: &Operand,
        operator: BinaryOp,
        right: &Operand,
    ) -> Result<Value, SnolError> {
        let left_val = self.resolve(left)?;
        let right_val = self.resolve(right)?;
        evaluate_binary_op(operator, left_val, right_val)
            .map_err(|kind| kind.at(left.span().to(right.span())))
    }

    fn resolve(&self, operand: &Operand) -> Result<Value, SnolError> {
        match operand {
            Operand::Literal { value, .. } => Ok(*value),
            Operand::Variable { name, span } => self
                .environment
                .lookup(name)
                .map_err(|kind| {
                    kind.at(span.clone())
                        .with_help(format!("Assign it first, e.g. `{} = 0` or `BEG {}`", name, name))
                }),
        }
    }
}
