use console::style;
use std::io::{self, Write};

pub struct OutputHandler {
    debug: bool,
}

impl OutputHandler {
    pub fn new() -> Self {
        Self { debug: false }
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    /// The one stdout line of a run. Never styled or decorated: the game
    /// appends this stream to its phrase cache as-is.
    pub fn print_line(&mut self, line: &str) -> io::Result<()> {
        println!("{}", line);
        io::stdout().flush()
    }

    pub fn print_error(&mut self, content: &str) -> io::Result<()> {
        eprintln!(
            "{} {}",
            style("Error:").for_stderr().red().bold(),
            content
        );
        Ok(())
    }

    pub fn print_debug(&mut self, content: &str) -> io::Result<()> {
        if self.debug {
            eprintln!("{}", style(content).for_stderr().dim());
        }
        Ok(())
    }
}

impl Default for OutputHandler {
    fn default() -> Self {
        Self::new()
    }
}
