use crate::evaluator::{Evaluator, Outcome};
use crate::input::{InputSource, PromptedInput};
use std::io::{self, Write};

/// How a script run came to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// An `EXIT!` statement.
    Exit,
    /// `BEG` found no more input.
    EndOfInput,
    /// Every line was executed.
    EndOfScript,
}

/// Run a script on stdout, reading `BEG` values from stdin.
pub fn run(
    source: &str,
    filename: Option<&str>,
    evaluator: &mut Evaluator,
    color: bool,
) -> Termination {
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut sink = io::sink();
    let mut input = PromptedInput::new(&mut reader, &mut sink, false);

    let stdout = io::stdout();
    let mut writer = stdout.lock();

    match run_with(source, filename, evaluator, &mut input, &mut writer, color) {
        Ok(termination) => termination,
        Err(error) => {
            eprintln!("Error writing output: {}", error);
            Termination::EndOfScript
        }
    }
}

/// Execute `source` one line at a time. A failing line is reported against the whole
/// file and the run carries on with the next one.
pub fn run_with<W: Write>(
    source: &str,
    filename: Option<&str>,
    evaluator: &mut Evaluator,
    input: &mut dyn InputSource,
    writer: &mut W,
    color: bool,
) -> io::Result<Termination> {
    let mut offset = 0;

    for line in source.split_inclusive('\n') {
        let statement = line.trim_end_matches(['\n', '\r']);

        match evaluator.execute_line(statement, input) {
            Ok(Outcome::Silent) => {}
            Ok(Outcome::Printed(printed)) => writeln!(writer, "SNOL> {}", printed)?,
            Ok(Outcome::Exit) => return Ok(Termination::Exit),
            Ok(Outcome::EndOfInput) => return Ok(Termination::EndOfInput),
            Err(error) => {
                error
                    .shifted(offset)
                    .write_report(source, filename, color, &mut *writer)?
            }
        }

        offset += line.len();
    }

    Ok(Termination::EndOfScript)
}
