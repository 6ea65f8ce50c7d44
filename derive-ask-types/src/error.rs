/// Error type for prompting sessions.
///
/// Conversion failures and field resolution problems never surface here;
/// they are handled inside the retry loop and the per-field downgrade path.
#[derive(Debug, thiserror::Error)]
pub enum AskError {
    /// The input stream ended before a value was provided. Distinct from an
    /// empty line, which merely reprompts or accepts the default.
    #[error("input ended before a value was provided")]
    EndOfInput,

    /// The prompt backend failed to read or write.
    #[error("prompt I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AskError {
    /// Check if this error represents stream exhaustion.
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, Self::EndOfInput)
    }
}
