//! # derive-ask
//!
//! Fill in the fields of a struct from interactive terminal prompts.
//!
//! Annotate the fields you want asked for, and the engine drives a
//! read-convert-retry loop over standard input: defaults are offered, invalid
//! input reprompts with the converter's message, and nested records are asked
//! for as their own sub-sessions.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use derive_ask::Ask;
//!
//! #[derive(Ask, Debug, Default)]
//! struct Profile {
//!     /// No default: the user must type a name.
//!     #[ask]
//!     name: Option<String>,
//!
//!     #[ask("How old are you?")]
//!     age: Option<i8>,
//!
//!     /// The current value (`false`) is offered as the default.
//!     #[ask("Are you sure?")]
//!     sure: bool,
//! }
//!
//! let profile = derive_ask::ask(Profile::default())?;
//! println!("{profile:?}");
//! ```
//!
//! ## Attribute forms
//!
//! - `#[ask]` - prompt with the field name as label
//! - `#[ask("label")]` / `#[ask(label = "...")]` - explicit label
//! - `#[ask(recursive)]` - descend into a nested `Ask` record
//! - `#[ask(converter = Path)]` - per-field converter override
//!
//! Fields without `#[ask]` are never prompted for. `Option<T>` fields are
//! mandatory while `None`; plain fields offer their current value and keep it
//! on empty input.
//!
//! ## Converters
//!
//! `String`, all signed and unsigned integer widths, `f32`/`f64` and `bool`
//! are handled out of the box. Register your own with [`Asker::register`] or
//! attach one to a single field with `#[ask(converter = ...)]`.
//!
//! The retry loop is unbounded by design: it is meant for a human at a
//! terminal. Programs feeding scripted input get [`AskError::EndOfInput`]
//! when the stream runs dry, which [`TestBackend`] relies on in tests.

// Re-export all types from derive-ask-types
pub use derive_ask_types::*;

// Re-export the derive macro
pub use derive_ask_macro::Ask;

mod convert;
pub use convert::{FALSE_WORDS, TRUE_WORDS, ToBool, ToNumber, ToText};

mod registry;
pub use registry::Converters;

mod plan;
pub use plan::{FieldPlan, RecordPlan};

mod asker;
pub use asker::Asker;

mod backend;
pub use backend::{Console, PromptBackend};

// Scripted backend for testing without user interaction
mod test_backend;
pub use test_backend::TestBackend;

mod aligned;
pub use aligned::{Align, AlignedText};

/// Ask for every annotated field of `record` on the console and return the
/// updated record.
pub fn ask<T: Ask>(record: T) -> Result<T, AskError> {
    Asker::new().ask(record)
}

/// Like [`ask`], with a header line printed before the first prompt.
pub fn ask_labeled<T: Ask>(label: &str, record: T) -> Result<T, AskError> {
    Asker::new().ask_labeled(label, record)
}
