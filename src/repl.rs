use crate::evaluator::{Evaluator, Outcome};
use crate::input::{read_line, PromptedInput};
use std::io::{self, BufRead, Write};

const BANNER: &str =
    "The SNOL environment is now active, you may proceed with giving your commands.";
const OUTRO: &str = "Interpreter is now terminated...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplOptions {
    /// Skip the banner, prompts and outro, for piped input.
    pub quiet: bool,
    pub color: bool,
}

impl Default for ReplOptions {
    fn default() -> Self {
        Self {
            quiet: false,
            color: true,
        }
    }
}

pub fn start(options: ReplOptions) {
    start_with(Evaluator::new(), options);
}

/// Run the console on stdin/stdout, keeping whatever variables `evaluator` already holds.
pub fn start_with(mut evaluator: Evaluator, options: ReplOptions) {
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let stdout = io::stdout();
    let mut writer = stdout.lock();

    if let Err(error) = run_session(&mut evaluator, &mut reader, &mut writer, options) {
        eprintln!("Error writing output: {}", error);
    }
}

/// Read statements from `reader` until `EXIT!` or end of input.
///
/// `BEG` values are read from the same reader, so a session can be replayed from
/// a single stream of lines.
pub fn run_session<R: BufRead, W: Write>(
    evaluator: &mut Evaluator,
    reader: &mut R,
    writer: &mut W,
    options: ReplOptions,
) -> io::Result<()> {
    if !options.quiet {
        writeln!(writer, "{}", BANNER)?;
        writeln!(writer)?;
    }

    loop {
        if !options.quiet {
            write!(writer, "Command: ")?;
            writer.flush()?;
        }

        let Some(line) = read_line(&mut *reader) else {
            // EOF reached (Ctrl+D or piped input ended)
            if !options.quiet {
                writeln!(writer)?;
            }
            break;
        };

        let outcome = {
            let mut input = PromptedInput::new(&mut *reader, &mut *writer, !options.quiet);
            evaluator.execute_line(&line, &mut input)
        };

        let finished = match outcome {
            Ok(Outcome::Silent) => false,
            Ok(Outcome::Printed(printed)) => {
                writeln!(writer, "SNOL> {}", printed)?;
                false
            }
            Ok(Outcome::Exit) | Ok(Outcome::EndOfInput) => true,
            Err(error) => {
                error.write_report(&line, None, options.color, &mut *writer)?;
                false
            }
        };

        // Blank line between commands
        if !options.quiet {
            writeln!(writer)?;
        }
        if finished {
            break;
        }
    }

    if !options.quiet {
        writeln!(writer, "{}", OUTRO)?;
    }
    writer.flush()
}
