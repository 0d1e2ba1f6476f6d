use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    Int,
    Float,
}

/// Classify `text` against the literal grammar.
///
/// An integer is an optional `-` followed by one or more ASCII digits. A float
/// is an optional `-`, one or more digits, exactly one `.`, and one or more
/// digits. Nothing else is a literal: `5.`, `.5`, `+5`, `1e3` and a lone `-`
/// are all rejected.
pub fn literal_kind(text: &str) -> Option<LiteralKind> {
    let digits = text.strip_prefix('-').unwrap_or(text);
    let is_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());

    match digits.split_once('.') {
        None if is_digits(digits) => Some(LiteralKind::Int),
        Some((whole, fraction)) if is_digits(whole) && is_digits(fraction) => {
            Some(LiteralKind::Float)
        }
        _ => None,
    }
}

impl Value {
    /// Parse a literal, trying the integer grammar first and the float grammar second.
    /// Returns `None` when `text` is not a literal, or is an integer outside the `i64` range.
    pub fn from_literal(text: &str) -> Option<Value> {
        match literal_kind(text)? {
            LiteralKind::Int => text.parse::<i64>().ok().map(Value::Int),
            LiteralKind::Float => text.parse::<f64>().ok().map(Value::Float),
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
        }
    }

    pub fn kind(&self) -> LiteralKind {
        match self {
            Value::Int(_) => LiteralKind::Int,
            Value::Float(_) => LiteralKind::Float,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            // Fixed six decimal places
            Value::Float(n) => write!(f, "{:.6}", n),
        }
    }
}
