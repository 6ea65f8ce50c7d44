use std::any::Any;
use std::fmt::Display;

use crate::{Ask, AskMeta, TypeTag};

/// A converted value did not have the field's declared type.
///
/// Only reachable through a custom converter that boxes the wrong type; the
/// built-in converters always produce the tag they are registered under.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("converter produced a value that is not a {expected}")]
pub struct StoreError {
    pub expected: &'static str,
}

/// Typed get/set handle into one field of a record.
///
/// This is the single place where dynamically-typed behavior lives: the
/// prompt engine reads the default through `current_text` and commits
/// converted values through `store`, without knowing the concrete type.
pub trait FieldValue {
    /// Tag of the scalar type to convert into (the inner `T` of `Option<T>`).
    fn tag(&self) -> TypeTag;

    /// Textual rendering of the field's current value. `None` means the
    /// field has no default and input is mandatory.
    fn current_text(&self) -> Option<String>;

    /// Downcast and write a converted value into the field.
    fn store(&mut self, value: Box<dyn Any>) -> Result<(), StoreError>;
}

/// Handle for a plain field. Its current value is always a usable default.
pub struct Scalar<'a, T>(pub &'a mut T);

impl<T: Any + Display> FieldValue for Scalar<'_, T> {
    fn tag(&self) -> TypeTag {
        TypeTag::of::<T>()
    }

    fn current_text(&self) -> Option<String> {
        Some(self.0.to_string())
    }

    fn store(&mut self, value: Box<dyn Any>) -> Result<(), StoreError> {
        match value.downcast::<T>() {
            Ok(value) => {
                *self.0 = *value;
                Ok(())
            }
            Err(_) => Err(StoreError {
                expected: TypeTag::of::<T>().name(),
            }),
        }
    }
}

/// Handle for an `Option<T>` field. `None` marks a mandatory field: there is
/// no default, and the user is reprompted until a valid value arrives.
pub struct OptionalScalar<'a, T>(pub &'a mut Option<T>);

impl<T: Any + Display> FieldValue for OptionalScalar<'_, T> {
    fn tag(&self) -> TypeTag {
        TypeTag::of::<T>()
    }

    fn current_text(&self) -> Option<String> {
        self.0.as_ref().map(T::to_string)
    }

    fn store(&mut self, value: Box<dyn Any>) -> Result<(), StoreError> {
        match value.downcast::<T>() {
            Ok(value) => {
                *self.0 = Some(*value);
                Ok(())
            }
            Err(_) => Err(StoreError {
                expected: TypeTag::of::<T>().name(),
            }),
        }
    }
}

/// How the engine reaches a field's value.
pub enum FieldAccess<'a> {
    /// A convertible scalar, prompted for as a single line of text.
    Value(Box<dyn FieldValue + 'a>),

    /// A nested record, prompted for as its own sub-session.
    Record(&'a mut dyn Ask),
}

/// One annotated field of a record, as enumerated by `Ask::record_fields`.
pub struct Field<'a> {
    /// Declared field name, the fallback prompt label.
    pub name: &'static str,

    /// Configuration from the `#[ask(...)]` attribute.
    pub meta: AskMeta,

    /// Handle to the field's value.
    pub access: FieldAccess<'a>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_renders_and_stores() {
        let mut age: u8 = 30;
        let mut handle = Scalar(&mut age);
        assert_eq!(handle.tag(), TypeTag::of::<u8>());
        assert_eq!(handle.current_text(), Some("30".to_string()));
        handle.store(Box::new(31u8)).unwrap();
        assert_eq!(age, 31);
    }

    #[test]
    fn scalar_rejects_wrong_type() {
        let mut age: u8 = 30;
        let mut handle = Scalar(&mut age);
        let err = handle.store(Box::new("thirty".to_string())).unwrap_err();
        assert_eq!(err.expected, "u8");
        assert_eq!(age, 30);
    }

    #[test]
    fn optional_none_has_no_default() {
        let mut name: Option<String> = None;
        let mut handle = OptionalScalar(&mut name);
        assert_eq!(handle.tag(), TypeTag::of::<String>());
        assert_eq!(handle.current_text(), None);
        handle.store(Box::new("Alice".to_string())).unwrap();
        assert_eq!(name.as_deref(), Some("Alice"));
    }

    #[test]
    fn optional_some_renders_inner_value() {
        let mut count: Option<i64> = Some(42);
        let handle = OptionalScalar(&mut count);
        assert_eq!(handle.current_text(), Some("42".to_string()));
    }
}
