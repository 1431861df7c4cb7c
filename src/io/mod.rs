//! Input/output abstractions
//!
//! Traits over terminal input and output so the interactive loop can be
//! driven by mock implementations in tests.

use std::io::{self, Write};

/// Trait for reading user input
pub trait InputReader {
    /// Read a line of input from the user with a prompt
    fn read_line(&mut self, prompt: &str) -> Result<String, io::Error>;
}

/// Trait for writing output to the user
pub trait OutputWriter {
    /// Write a message with a newline
    fn writeln(&mut self, message: &str);
}

/// Terminal I/O implementation using stdin/stdout
pub struct TerminalIO;

impl InputReader for TerminalIO {
    fn read_line(&mut self, prompt: &str) -> Result<String, io::Error> {
        print!("{} ", prompt);
        io::stdout().flush()?;
        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        Ok(input)
    }
}

impl OutputWriter for TerminalIO {
    fn writeln(&mut self, message: &str) {
        println!("{}", message);
    }
}

#[cfg(test)]
pub mod test_utils {
    use super::*;
    use std::collections::VecDeque;

    /// Scripted input for driving the game loop in tests
    pub struct ScriptedInput {
        lines: VecDeque<String>,
    }

    impl ScriptedInput {
        pub fn new(lines: &[&str]) -> Self {
            Self {
                lines: lines.iter().map(|s| s.to_string()).collect(),
            }
        }
    }

    impl InputReader for ScriptedInput {
        fn read_line(&mut self, _prompt: &str) -> Result<String, io::Error> {
            self.lines
                .pop_front()
                .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
        }
    }

    /// Captures everything the game prints
    #[derive(Default)]
    pub struct CapturedOutput {
        pub lines: Vec<String>,
    }

    impl CapturedOutput {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn contains(&self, needle: &str) -> bool {
            self.lines.iter().any(|line| line.contains(needle))
        }
    }

    impl OutputWriter for CapturedOutput {
        fn writeln(&mut self, message: &str) {
            self.lines.push(message.to_string());
        }
    }
}
