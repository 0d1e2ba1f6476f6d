use crate::ast::{BinaryOp, Operand, Stmt};
use crate::error::{ErrorKind, SnolError, Span};
use crate::lexer::{is_identifier, is_operand, is_operator, is_operator_or_assign, Keyword, Token};
use crate::value::Value;

/// Matches a line's tokens against the fixed set of statement shapes.
///
/// Shapes are checked in full before any operand is turned into an [`Operand`], so a
/// malformed line is always reported as a shape error and never as a lookup or
/// arithmetic error.
pub struct Parser {
    tokens: Vec<Token>,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// Classify the line. A blank line has no statement.
    pub fn parse(&mut self) -> Result<Option<Stmt>, SnolError> {
        let Some(first) = self.tokens.first() else {
            return Ok(None);
        };

        if let Some(keyword) = Keyword::from_lexeme(&first.lexeme) {
            return self.keyword_statement(keyword).map(Some);
        }

        if is_operand(&first.lexeme) {
            return match self.tokens.len() {
                1 => self.expression_statement(),
                3 => self.binary_statement(),
                5 => self.compound_assignment(),
                _ => Err(self.unknown_command()),
            }
            .map(Some);
        }

        if is_operator_or_assign(&first.lexeme) {
            return Err(self.unknown_command());
        }

        Err(SnolError::new_with_help(
            ErrorKind::UnknownWord(first.lexeme.clone()),
            first.span.clone(),
            "Variable names start with a letter and contain only letters and digits.".to_string(),
        ))
    }

    fn keyword_statement(&self, keyword: Keyword) -> Result<Stmt, SnolError> {
        match keyword {
            Keyword::Beg => {
                let [_, name] = self.tokens.as_slice() else {
                    return Err(self.unknown_command().with_help("Usage: BEG <variable>"));
                };
                if !is_identifier(&name.lexeme) {
                    return Err(self.unknown_command().with_help(format!(
                        "`{}` is not a valid variable name",
                        name.lexeme
                    )));
                }
                Ok(Stmt::Input {
                    name: name.lexeme.clone(),
                    span: self.span(),
                })
            }
            Keyword::Print => {
                let [_, target] = self.tokens.as_slice() else {
                    return Err(self
                        .unknown_command()
                        .with_help("Usage: PRINT <variable or number>"));
                };
                if !is_operand(&target.lexeme) {
                    return Err(self.unknown_command().with_help(format!(
                        "`{}` is neither a variable nor a number",
                        target.lexeme
                    )));
                }
                Ok(Stmt::Print {
                    target: self.operand(target)?,
                    span: self.span(),
                })
            }
            Keyword::Exit => {
                if self.tokens.len() != 1 {
                    return Err(self.unknown_command().with_help("EXIT! takes no arguments"));
                }
                Ok(Stmt::Exit { span: self.span() })
            }
        }
    }

    fn expression_statement(&self) -> Result<Stmt, SnolError> {
        Ok(Stmt::Expression {
            operand: self.operand(&self.tokens[0])?,
            span: self.span(),
        })
    }

    /// `a op b` or `a = b`.
    fn binary_statement(&self) -> Result<Stmt, SnolError> {
        let [left, middle, right] = self.tokens.as_slice() else {
            return Err(self.unknown_command());
        };

        if let Some(operator) = self.arithmetic_operator(middle) {
            if is_operand(&right.lexeme) {
                return Ok(Stmt::Arithmetic {
                    left: self.operand(left)?,
                    operator,
                    right: self.operand(right)?,
                    span: self.span(),
                });
            }
        } else if middle.lexeme == "=" && is_identifier(&left.lexeme) && is_operand(&right.lexeme) {
            return Ok(Stmt::Assign {
                name: left.lexeme.clone(),
                value: self.operand(right)?,
                span: self.span(),
            });
        }

        Err(self.unknown_command())
    }

    /// `a = b op c`.
    fn compound_assignment(&self) -> Result<Stmt, SnolError> {
        let [target, equals, left, operator, right] = self.tokens.as_slice() else {
            return Err(self.unknown_command());
        };

        let shape_matches = is_identifier(&target.lexeme)
            && equals.lexeme == "="
            && is_operand(&left.lexeme)
            && is_operand(&right.lexeme);

        match self.arithmetic_operator(operator) {
            Some(operator) if shape_matches => Ok(Stmt::AssignArithmetic {
                name: target.lexeme.clone(),
                left: self.operand(left)?,
                operator,
                right: self.operand(right)?,
                span: self.span(),
            }),
            _ => Err(self.unknown_command()),
        }
    }

    fn arithmetic_operator(&self, token: &Token) -> Option<BinaryOp> {
        if is_operator(&token.lexeme) {
            BinaryOp::from_lexeme(&token.lexeme)
        } else {
            None
        }
    }

    /// Turn a token already known to satisfy [`is_operand`] into an operand.
    fn operand(&self, token: &Token) -> Result<Operand, SnolError> {
        if is_identifier(&token.lexeme) {
            return Ok(Operand::Variable {
                name: token.lexeme.clone(),
                span: token.span.clone(),
            });
        }

        // Only an integer too large for 64 bits gets here.
        let value = Value::from_literal(&token.lexeme).ok_or_else(|| {
            SnolError::new_with_help(
                ErrorKind::InvalidNumber(token.lexeme.clone()),
                token.span.clone(),
                format!("Integers range from {} to {}.", i64::MIN, i64::MAX),
            )
        })?;

        Ok(Operand::Literal {
            value,
            span: token.span.clone(),
        })
    }

    fn span(&self) -> Span {
        match (self.tokens.first(), self.tokens.last()) {
            (Some(first), Some(last)) => first.span.to(&last.span),
            _ => Span::new(0, 0),
        }
    }

    fn unknown_command(&self) -> SnolError {
        SnolError::unknown_command(self.span())
    }
}
