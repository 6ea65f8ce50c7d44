//! The prompt-retry engine.

use derive_ask_types::{Ask, AskError, Convert};

use crate::plan::{FieldPlan, PlanKind, RecordPlan};
use crate::{Align, AlignedText, Console, Converters, PromptBackend};

/// Labels are right-aligned into this many columns, so prompts line up at
/// the input cursor.
const PROMPT_WIDTH: usize = 40;

/// Asks a terminal user for the annotated fields of a record.
///
/// Owns the converter registry and the prompt backend. Register custom
/// converters during setup, then call [`Asker::ask`]; each call blocks until
/// the user has supplied a valid value for every relevant field, including
/// all nested records, depth-first in declaration order.
pub struct Asker<B = Console> {
    converters: Converters,
    backend: B,
}

impl Asker<Console> {
    /// An asker on standard input/output with the built-in converters.
    pub fn new() -> Self {
        Self::with_backend(Console::new())
    }
}

impl Default for Asker<Console> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: PromptBackend> Asker<B> {
    pub fn with_backend(backend: B) -> Self {
        Self {
            converters: Converters::default(),
            backend,
        }
    }

    /// Insert or replace the converter used for fields of type `T`.
    pub fn register<T: 'static>(&mut self, converter: impl Convert + 'static) {
        self.converters.register::<T>(converter);
    }

    pub fn converters(&self) -> &Converters {
        &self.converters
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Recover the backend, e.g. to inspect a test transcript.
    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Ask for every relevant field of `record` and return the updated
    /// record. A record with no annotated fields performs no I/O.
    pub fn ask<T: Ask>(&mut self, record: T) -> Result<T, AskError> {
        self.ask_labeled("", record)
    }

    /// Like [`Asker::ask`], printing a header line containing `label` before
    /// the first prompt (skipped when `label` is blank or nothing is asked).
    pub fn ask_labeled<T: Ask>(&mut self, label: &str, mut record: T) -> Result<T, AskError> {
        ask_record(&self.converters, &mut self.backend, label, &mut record)?;
        Ok(record)
    }

    /// One-off string prompt with no record involved. Empty input reprompts
    /// until something non-empty arrives.
    pub fn ask_string(&mut self, label: &str) -> Result<String, AskError> {
        read_value(&mut self.backend, label, None)
    }

    /// One-off string prompt with a default returned on empty input.
    pub fn ask_string_or(&mut self, label: &str, default: &str) -> Result<String, AskError> {
        read_value(&mut self.backend, label, Some(default))
    }
}

fn ask_record(
    converters: &Converters,
    backend: &mut dyn PromptBackend,
    label: &str,
    record: &mut dyn Ask,
) -> Result<(), AskError> {
    let plan = RecordPlan::resolve(record, converters);
    if plan.is_empty() {
        return Ok(());
    }

    if !label.trim().is_empty() {
        backend.print(&format!("\n{label} :\n"))?;
    }

    for field in plan.fields {
        ask_field(converters, backend, field)?;
    }
    Ok(())
}

fn ask_field(
    converters: &Converters,
    backend: &mut dyn PromptBackend,
    field: FieldPlan<'_>,
) -> Result<(), AskError> {
    let FieldPlan { name, label, kind } = field;
    match kind {
        PlanKind::Record(record) => {
            // nested mini-session; conversion and retries happen per-field
            // inside it
            ask_record(converters, backend, label.as_deref().unwrap_or(""), record)
        }
        PlanKind::Scalar {
            mut value,
            default_text,
            converter,
        } => {
            let label = label.as_deref().unwrap_or(name);
            loop {
                let raw = read_value(backend, label, default_text.as_deref())?;
                if Some(raw.as_str()) == default_text.as_deref() {
                    // the field already holds this value, no conversion
                    return Ok(());
                }
                match converter.convert(&raw) {
                    Ok(converted) => {
                        if let Err(error) = value.store(converted) {
                            // a custom converter boxed the wrong type; not
                            // retryable, the field keeps its old value
                            backend.print(&report_line(&error.to_string()))?;
                            log::warn!("field '{name}': {error}");
                        }
                        return Ok(());
                    }
                    Err(failure) => backend.print(&report_line(failure.message()))?,
                }
            }
        }
    }
}

/// Print a label (and default hint, if any), then read lines until one is
/// usable: the trimmed input when non-empty, the default on empty input, or
/// a complaint and another round when there is neither.
fn read_value(
    backend: &mut dyn PromptBackend,
    label: &str,
    default: Option<&str>,
) -> Result<String, AskError> {
    let mut prompt = String::from("\n");
    prompt.push_str(&aligned_label(label));
    if let Some(default) = default {
        prompt.push('\n');
        let hint = format!("[default: '{default}']");
        prompt.push_str(&format!("{hint:>w$}", w = PROMPT_WIDTH));
    }
    prompt.push_str(" : ");

    loop {
        backend.print(&prompt)?;
        let line = backend.read_line()?.ok_or(AskError::EndOfInput)?;
        let value = line.trim();
        if value.is_empty() {
            match default {
                Some(default) => return Ok(default.to_string()),
                None => {
                    backend.print(&report_line("There's no default value, please try again!"))?;
                }
            }
        } else {
            return Ok(value.to_string());
        }
    }
}

/// Right-aligned, word-wrapped label block without the trailing newline.
fn aligned_label(label: &str) -> String {
    let block = AlignedText::new(PROMPT_WIDTH, Align::Right, label).to_string();
    block.trim_end_matches('\n').to_string()
}

/// An error message indented under the prompt cursor.
fn report_line(message: &str) -> String {
    format!("{:w$}   {message}\n", "", w = PROMPT_WIDTH)
}
