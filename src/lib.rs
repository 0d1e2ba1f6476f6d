// SNOL Language Interpreter Library
//
// A line-oriented interpreter for SNOL: integer and float variables, input and
// output statements, and one binary arithmetic operator per statement under
// strict type rules.

// Public modules
pub mod arithmetic;
pub mod ast;
pub mod environment;
pub mod error;
pub mod evaluator;
pub mod input;
pub mod lexer;
pub mod parser;
pub mod repl;
pub mod runner;
pub mod value;

// Re-export commonly used items
pub use arithmetic::evaluate_binary_op;
pub use ast::{BinaryOp, Operand, Stmt};
pub use environment::Environment;
pub use error::{ErrorKind, SnolError, Span};
pub use evaluator::{Evaluator, Outcome, Printed};
pub use input::InputSource;
pub use lexer::{Lexer, Token};
pub use parser::Parser;
pub use value::Value;

// Re-export main functions
pub use repl::{start as start_repl, ReplOptions};
pub use runner::{run, Termination};
