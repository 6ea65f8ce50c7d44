use std::any::Any;

use crate::TypeTag;

/// Error produced when raw input cannot be converted into the field's type.
///
/// The message names the expected type and is printed to the user verbatim,
/// triggering a reprompt of the same field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ConvertFailed {
    message: String,
}

impl ConvertFailed {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Parses a trimmed line of raw input into a target type.
///
/// Implementations are registered in a `Converters` registry keyed by
/// `TypeTag`, or attached to a single field with `#[ask(converter = ...)]`.
/// The boxed value must have the registered target type; the field handle
/// downcasts it when committing.
pub trait Convert {
    /// Convert raw input, or report failure with a user-facing message.
    fn convert(&self, raw: &str) -> Result<Box<dyn Any>, ConvertFailed>;

    /// Compatibility predicate consulted by the registry when no exact entry
    /// exists for `requested`. Entries are scanned in insertion order and the
    /// first claiming converter wins. The default claims nothing.
    fn matches(&self, requested: &TypeTag) -> bool {
        let _ = requested;
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_failed_displays_message() {
        let failure = ConvertFailed::new("Invalid value for: i8");
        assert_eq!(failure.to_string(), "Invalid value for: i8");
    }
}
