/// The single capability the scanner needs for lexical faults. Implementations
/// record the error; they must not fail back into the scanner.
pub trait ErrorReporter {
    fn report(&mut self, line: usize, message: &str);
}

/// Reporter used by the driver: prints to stderr and latches a flag the driver
/// checks once scanning is done. The scanner itself never looks at the flag.
pub struct ConsoleReporter {
    had_error: bool,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self { had_error: false }
    }

    pub fn had_error(&self) -> bool {
        self.had_error
    }

    /// Clears the flag so one bad line in the prompt does not poison the next.
    pub fn reset(&mut self) {
        self.had_error = false;
    }
}

impl ErrorReporter for ConsoleReporter {
    fn report(&mut self, line: usize, message: &str) {
        eprintln!("[line {line}] Error: {message}");
        self.had_error = true;
    }
}
