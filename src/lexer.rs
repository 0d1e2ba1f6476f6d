use crate::error::Span;
use crate::value::literal_kind;

pub const KEYWORDS: [&str; 3] = ["BEG", "PRINT", "EXIT!"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Beg,
    Print,
    Exit,
}

impl Keyword {
    pub fn from_lexeme(lexeme: &str) -> Option<Keyword> {
        match lexeme {
            "BEG" => Some(Keyword::Beg),
            "PRINT" => Some(Keyword::Print),
            "EXIT!" => Some(Keyword::Exit),
            _ => None,
        }
    }
}

pub fn is_keyword(lexeme: &str) -> bool {
    KEYWORDS.contains(&lexeme)
}

pub fn is_operator_char(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/' | '%')
}

/// True for a one-character arithmetic operator token.
pub fn is_operator(lexeme: &str) -> bool {
    let mut chars = lexeme.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if is_operator_char(c))
}

pub fn is_operator_or_assign(lexeme: &str) -> bool {
    lexeme == "=" || is_operator(lexeme)
}

/// Letters and digits, not starting with a digit, and not a keyword.
pub fn is_identifier(lexeme: &str) -> bool {
    let mut chars = lexeme.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric()) && !is_keyword(lexeme)
}

/// A token that can stand where a value is expected: a variable name or a literal.
pub fn is_operand(lexeme: &str) -> bool {
    is_identifier(lexeme) || literal_kind(lexeme).is_some()
}

/// A raw slice of the input line. What it means is decided by the parser.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub lexeme: String,
    pub span: Span,
}

impl Token {
    pub fn new(lexeme: String, span: Span) -> Self {
        Self { lexeme, span }
    }
}

pub struct Lexer {
    source: String,
    tokens: Vec<Token>,
    current: String,
    start: usize,
}

impl Lexer {
    pub fn new(source: String) -> Self {
        Self {
            source,
            tokens: Vec::new(),
            current: String::new(),
            start: 0,
        }
    }

    /// Split the line into tokens.
    ///
    /// Whitespace separates tokens, and each of `+ - * / % =` stands alone, with one
    /// exception for negative literals: a `-` keeps the current token open when the
    /// previously emitted token was an operator or `=`, and a token that starts with
    /// `-` keeps absorbing digits. The rule only looks at the previous token, so
    /// `5-3` after an `=` stays a single token.
    pub fn scan_tokens(&mut self) -> Vec<Token> {
        let source = std::mem::take(&mut self.source);

        for (pos, c) in source.char_indices() {
            if self.should_close(c) {
                self.emit(pos);
            }

            if c.is_whitespace() {
                continue;
            }

            if self.current.is_empty() {
                self.start = pos;
            }
            self.current.push(c);
        }
        self.emit(source.len());

        self.source = source;
        std::mem::take(&mut self.tokens)
    }

    fn should_close(&self, next: char) -> bool {
        if self.current.is_empty() {
            return false;
        }

        let after_operator = next == '-'
            && self
                .tokens
                .last()
                .is_some_and(|token| is_operator_or_assign(&token.lexeme));
        let negative_digits = self.current.starts_with('-') && next.is_ascii_digit();
        if after_operator || negative_digits {
            return false;
        }

        is_keyword(&self.current)
            || next.is_whitespace()
            || is_operator_char(next)
            || next == '='
            || is_operator_or_assign(&self.current)
    }

    fn emit(&mut self, end: usize) {
        if self.current.is_empty() {
            return;
        }
        let lexeme = std::mem::take(&mut self.current);
        self.tokens.push(Token::new(lexeme, Span::new(self.start, end)));
    }
}
