use ariadne::{Color, Config, Fmt, Label, Report, ReportKind, Source};
use std::fmt;
use std::io::{self, Write};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Smallest span covering both `self` and `other`.
    pub fn to(&self, other: &Span) -> Self {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    pub fn shifted(&self, offset: usize) -> Self {
        Self {
            start: self.start + offset,
            end: self.end + offset,
        }
    }
}

/// Every way a single statement can fail. None of these end the run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErrorKind {
    #[error("Unknown command! Does not match any valid command of the language.")]
    UnknownCommand,

    #[error("Unknown word! [{0}]")]
    UnknownWord(String),

    #[error("Error! [{0}] is not defined!")]
    UnknownVariable(String),

    #[error("Error! Please enter a valid number. [{0}] is not an integer or a float.")]
    InvalidNumber(String),

    #[error("Error! Operands must be of the same type in an arithmetic operation! (got {left} and {right})")]
    ArithmeticTypeError {
        left: &'static str,
        right: &'static str,
    },

    #[error("Error! Only integers can be used in a modulo operation!")]
    ArithmeticModuloError,

    #[error("Error! Division by zero.")]
    DivisionByZero,

    #[error("Error! Only integers and floating-point numbers can be used in an arithmetic operation!")]
    ArithmeticOpError,
}

impl ErrorKind {
    /// Attach the source location the error refers to.
    pub fn at(self, span: Span) -> SnolError {
        SnolError::new(self, span)
    }

    pub fn title(&self) -> &'static str {
        match self {
            ErrorKind::UnknownCommand => "Unknown Command",
            ErrorKind::UnknownWord(_) => "Unknown Word",
            ErrorKind::UnknownVariable(_) => "Unknown Variable",
            ErrorKind::InvalidNumber(_) => "Invalid Number",
            ErrorKind::ArithmeticTypeError { .. } => "Arithmetic Type Error",
            ErrorKind::ArithmeticModuloError => "Arithmetic Modulo Error",
            ErrorKind::DivisionByZero => "Division By Zero",
            ErrorKind::ArithmeticOpError => "Arithmetic Operation Error",
        }
    }

    fn color(&self) -> Color {
        match self {
            ErrorKind::UnknownCommand | ErrorKind::UnknownWord(_) => Color::Yellow,
            ErrorKind::UnknownVariable(_) | ErrorKind::InvalidNumber(_) => Color::Red,
            _ => Color::Magenta,
        }
    }

    fn label(&self) -> String {
        match self {
            ErrorKind::UnknownCommand => "this statement".to_string(),
            ErrorKind::UnknownWord(word) => format!("`{}` is not a keyword, variable or number", word),
            ErrorKind::UnknownVariable(name) => format!("`{}` has no value yet", name),
            ErrorKind::InvalidNumber(text) => format!("received `{}`", text),
            ErrorKind::ArithmeticTypeError { left, right } => {
                format!("{} and {} cannot be combined", left, right)
            }
            ErrorKind::ArithmeticModuloError => "modulo of floats".to_string(),
            ErrorKind::DivisionByZero => "the divisor is zero".to_string(),
            ErrorKind::ArithmeticOpError => "not a number".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SnolError {
    pub kind: ErrorKind,
    pub span: Span,
    pub help: Option<String>,
}

impl SnolError {
    pub fn new(kind: ErrorKind, span: Span) -> Self {
        Self {
            kind,
            span,
            help: None,
        }
    }

    pub fn new_with_help(kind: ErrorKind, span: Span, help: String) -> Self {
        Self {
            kind,
            span,
            help: Some(help),
        }
    }

    pub fn unknown_command(span: Span) -> Self {
        Self::new_with_help(
            ErrorKind::UnknownCommand,
            span,
            "Statements are `BEG x`, `PRINT x`, `EXIT!`, `x = y`, `x = y + z` or `y + z`."
                .to_string(),
        )
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Move the span by `offset` bytes, used when a line is reported inside its file.
    pub fn shifted(mut self, offset: usize) -> Self {
        self.span = self.span.shifted(offset);
        self
    }

    pub fn write_report<W: Write>(
        &self,
        source: &str,
        filename: Option<&str>,
        color: bool,
        writer: W,
    ) -> io::Result<()> {
        let filename = filename.unwrap_or("<repl>");

        let title = if color {
            format!("{}", self.kind.title().fg(self.kind.color()))
        } else {
            self.kind.title().to_string()
        };

        // Spans are byte offsets; ariadne labels count chars
        let char_offset = |byte: usize| {
            source
                .char_indices()
                .take_while(|(i, _)| *i < byte)
                .count()
        };
        let end = char_offset(self.span.end);
        let start = char_offset(self.span.start).min(end);

        let mut report_builder = Report::build(ReportKind::Error, filename, start)
            .with_config(Config::default().with_color(color))
            .with_message(format!("{}: {}", title, self.kind))
            .with_label(
                Label::new((filename, start..end))
                    .with_message(self.kind.label())
                    .with_color(self.kind.color()),
            );

        if let Some(ref help_text) = self.help {
            let help = if color {
                format!("{}", "help".fg(Color::Cyan))
            } else {
                "help".to_string()
            };
            report_builder = report_builder.with_note(format!("{}: {}", help, help_text));
        }

        report_builder
            .finish()
            .write((filename, Source::from(source)), writer)
    }
}

impl fmt::Display for SnolError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

impl std::error::Error for SnolError {}
