//! The prompt I/O boundary.

use std::io::{self, BufRead, Write};

/// Line-oriented I/O used by the prompt engine.
///
/// The engine's whole contract with the outside world: write a prompt, read
/// a line. `Ok(None)` from `read_line` means the stream is exhausted and the
/// session ends with `AskError::EndOfInput`. A backend that wants timeouts
/// or cancellation wraps its input source; the engine itself never bounds
/// the retry loop.
pub trait PromptBackend {
    /// Write without buffering; prompts end mid-line, before the cursor.
    fn print(&mut self, text: &str) -> io::Result<()>;

    /// Read one line, including nothing but the line terminator for an empty
    /// answer. `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>>;
}

/// Standard output and standard input.
#[derive(Debug, Clone, Copy, Default)]
pub struct Console;

impl Console {
    pub fn new() -> Self {
        Self
    }
}

impl PromptBackend for Console {
    fn print(&mut self, text: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        Ok((read > 0).then_some(line))
    }
}
