//! Scripted backend for testing prompts without user interaction.
//!
//! `TestBackend` feeds a fixed queue of input lines to the engine and
//! captures everything printed. When the queue runs out, the session ends
//! with `AskError::EndOfInput` - which also makes it the natural way to
//! bound the otherwise unbounded retry loop in non-interactive settings.
//!
//! # Example
//!
//! ```rust,ignore
//! use derive_ask::{Ask, Asker, TestBackend};
//!
//! #[derive(Ask, Debug, Default)]
//! struct Config {
//!     #[ask("Host")]
//!     host: Option<String>,
//! }
//!
//! let mut asker = Asker::with_backend(TestBackend::new().with_line("localhost"));
//! let config = asker.ask(Config::default()).unwrap();
//! assert_eq!(config.host.as_deref(), Some("localhost"));
//! ```

use std::collections::VecDeque;
use std::io;

use crate::PromptBackend;

/// A backend that replays pre-configured input lines and records output.
#[derive(Debug, Clone, Default)]
pub struct TestBackend {
    lines: VecDeque<String>,
    transcript: String,
}

impl TestBackend {
    /// Create a backend with no scripted input. Any read ends the session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue one input line.
    pub fn with_line(mut self, line: impl Into<String>) -> Self {
        self.lines.push_back(line.into());
        self
    }

    /// Queue several input lines at once.
    pub fn with_lines<I>(mut self, lines: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.lines.extend(lines.into_iter().map(Into::into));
        self
    }

    /// Everything the engine printed so far.
    pub fn transcript(&self) -> &str {
        &self.transcript
    }

    /// Input lines not yet consumed.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl PromptBackend for TestBackend {
    fn print(&mut self, text: &str) -> io::Result<()> {
        self.transcript.push_str(text);
        Ok(())
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}
