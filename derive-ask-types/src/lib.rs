//! Core types for the derive-ask crate.
//!
//! This crate provides the foundational types for interactive record prompting:
//! - `Ask` trait - implemented (usually derived) by records that can be asked for
//! - `Field`, `FieldAccess` and `FieldValue` - handles into a record's fields
//! - `AskMeta` - the per-field configuration carried by the `#[ask(...)]` attribute
//! - `Convert` trait and `ConvertFailed` - raw-text-to-value conversion
//! - `TypeTag` - runtime type identity used for converter lookup and cycle checks

mod type_tag;
pub use type_tag::TypeTag;

mod meta;
pub use meta::AskMeta;

mod convert;
pub use convert::{Convert, ConvertFailed};

mod field;
pub use field::{Field, FieldAccess, FieldValue, OptionalScalar, Scalar, StoreError};

mod record;
pub use record::Ask;

mod error;
pub use error::AskError;
