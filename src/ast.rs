use crate::error::Span;
use crate::value::Value;
use std::fmt;

/// One classified input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// `BEG name`
    Input {
        name: String,
        span: Span,
    },
    /// `PRINT target`
    Print {
        target: Operand,
        span: Span,
    },
    /// `EXIT!`
    Exit {
        span: Span,
    },
    /// A lone variable or literal.
    Expression {
        operand: Operand,
        span: Span,
    },
    /// `a op b`, evaluated for its errors only.
    Arithmetic {
        left: Operand,
        operator: BinaryOp,
        right: Operand,
        span: Span,
    },
    /// `name = value`
    Assign {
        name: String,
        value: Operand,
        span: Span,
    },
    /// `name = a op b`
    AssignArithmetic {
        name: String,
        left: Operand,
        operator: BinaryOp,
        right: Operand,
        span: Span,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Variable { name: String, span: Span },
    Literal { value: Value, span: Span },
}

impl Operand {
    pub fn span(&self) -> &Span {
        match self {
            Operand::Variable { span, .. } => span,
            Operand::Literal { span, .. } => span,
        }
    }

    pub fn variable_name(&self) -> Option<&str> {
        match self {
            Operand::Variable { name, .. } => Some(name),
            Operand::Literal { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
}

impl BinaryOp {
    pub fn from_lexeme(lexeme: &str) -> Option<BinaryOp> {
        match lexeme {
            "+" => Some(BinaryOp::Add),
            "-" => Some(BinaryOp::Subtract),
            "*" => Some(BinaryOp::Multiply),
            "/" => Some(BinaryOp::Divide),
            "%" => Some(BinaryOp::Modulo),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            BinaryOp::Add => '+',
            BinaryOp::Subtract => '-',
            BinaryOp::Multiply => '*',
            BinaryOp::Divide => '/',
            BinaryOp::Modulo => '%',
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
