//! Built-in converters.
//!
//! Each converter parses one line of trimmed input into its target type, or
//! fails with a message naming the expected type. That message is printed to
//! the user verbatim before reprompting.

use std::any::Any;
use std::marker::PhantomData;
use std::str::FromStr;

use derive_ask_types::{Convert, ConvertFailed, TypeTag};

/// Words accepted as `true`, compared case-insensitively.
pub const TRUE_WORDS: [&str; 4] = ["TRUE", "YES", "ON", "1"];

/// Words accepted as `false`, compared case-insensitively.
pub const FALSE_WORDS: [&str; 4] = ["FALSE", "NO", "OFF", "0"];

/// Identity converter for `String` fields. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToText;

impl Convert for ToText {
    fn convert(&self, raw: &str) -> Result<Box<dyn Any>, ConvertFailed> {
        Ok(Box::new(raw.to_string()))
    }
}

/// `FromStr`-based converter for numeric types.
#[derive(Debug, Clone, Copy)]
pub struct ToNumber<T> {
    _target: PhantomData<T>,
}

impl<T> ToNumber<T> {
    pub fn new() -> Self {
        Self {
            _target: PhantomData,
        }
    }
}

impl<T> Default for ToNumber<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FromStr + 'static> Convert for ToNumber<T> {
    fn convert(&self, raw: &str) -> Result<Box<dyn Any>, ConvertFailed> {
        raw.parse::<T>()
            .map(|value| Box::new(value) as Box<dyn Any>)
            .map_err(|_| ConvertFailed::new(format!("Invalid value for: {}", TypeTag::of::<T>())))
    }
}

/// Converter for `bool` fields, accepting the usual yes/no spellings.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToBool;

impl Convert for ToBool {
    fn convert(&self, raw: &str) -> Result<Box<dyn Any>, ConvertFailed> {
        let upper = raw.to_uppercase();
        if TRUE_WORDS.contains(&upper.as_str()) {
            Ok(Box::new(true))
        } else if FALSE_WORDS.contains(&upper.as_str()) {
            Ok(Box::new(false))
        } else {
            Err(ConvertFailed::new(format!(
                "Invalid boolean value, specify one of these: {}|{}",
                TRUE_WORDS.join("|"),
                FALSE_WORDS.join("|"),
            )))
        }
    }
}
