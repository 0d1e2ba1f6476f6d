use std::collections::VecDeque;
use std::io::{BufRead, Write};

/// Supplies the raw text for a `BEG` statement.
///
/// `None` means the input is exhausted; it ends the run rather than failing the
/// statement.
pub trait InputSource {
    fn read_value(&mut self, name: &str) -> Option<String>;
}

/// Reads one line per value from a buffered reader, optionally prompting on a writer.
pub struct PromptedInput<'a, R: BufRead, W: Write> {
    reader: &'a mut R,
    writer: &'a mut W,
    prompt: bool,
}

impl<'a, R: BufRead, W: Write> PromptedInput<'a, R, W> {
    pub fn new(reader: &'a mut R, writer: &'a mut W, prompt: bool) -> Self {
        Self {
            reader,
            writer,
            prompt,
        }
    }
}

impl<R: BufRead, W: Write> InputSource for PromptedInput<'_, R, W> {
    fn read_value(&mut self, name: &str) -> Option<String> {
        if self.prompt {
            let prompted = writeln!(self.writer, "SNOL> Please enter value for [{}]", name)
                .and_then(|_| write!(self.writer, "Input: "))
                .and_then(|_| self.writer.flush());
            if let Err(error) = prompted {
                eprintln!("Error writing prompt: {}", error);
            }
        }

        read_line(&mut *self.reader)
    }
}

/// Pre-recorded values, handed out front to back.
impl InputSource for VecDeque<String> {
    fn read_value(&mut self, _name: &str) -> Option<String> {
        self.pop_front()
    }
}

/// Read one line without its terminator. Bytes that are not UTF-8 are replaced rather
/// than rejected, so a garbled line still reaches the parser. Only end of input and
/// I/O failures yield `None`.
pub fn read_line<R: BufRead>(reader: &mut R) -> Option<String> {
    let mut buffer = Vec::new();
    match reader.read_until(b'\n', &mut buffer) {
        Ok(0) => None,
        Ok(_) => {
            let line = String::from_utf8_lossy(&buffer);
            Some(line.trim_end_matches(['\n', '\r']).to_string())
        }
        Err(error) => {
            eprintln!("Error reading input: {}", error);
            None
        }
    }
}
