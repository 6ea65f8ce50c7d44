//! The converter registry.

use derive_ask_types::{Convert, TypeTag};

use crate::convert::{ToBool, ToNumber, ToText};

struct Entry {
    tag: TypeTag,
    converter: Box<dyn Convert>,
}

/// Maps a target type to the converter that parses raw input into it.
///
/// `default()` carries the built-in converters; `register` adds or replaces
/// entries. Registration is expected to happen during setup, before any
/// prompting starts - lookup during resolution is read-only.
pub struct Converters {
    entries: Vec<Entry>,
}

impl Converters {
    /// A registry with no converters at all, not even the built-ins.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert or replace the converter for `T`. Replacement keeps the entry's
    /// original position in the fallback scan order.
    pub fn register<T: 'static>(&mut self, converter: impl Convert + 'static) {
        let tag = TypeTag::of::<T>();
        match self.entries.iter_mut().find(|entry| entry.tag == tag) {
            Some(entry) => entry.converter = Box::new(converter),
            None => self.entries.push(Entry {
                tag,
                converter: Box::new(converter),
            }),
        }
    }

    /// Find a converter for the requested type: exact registration first,
    /// then the first entry (in insertion order) whose `matches` predicate
    /// claims the type. `None` means the field cannot be asked for.
    pub fn find(&self, requested: &TypeTag) -> Option<&dyn Convert> {
        if let Some(entry) = self.entries.iter().find(|entry| entry.tag == *requested) {
            return Some(entry.converter.as_ref());
        }
        self.entries
            .iter()
            .find(|entry| entry.converter.matches(requested))
            .map(|entry| entry.converter.as_ref())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Converters {
    fn default() -> Self {
        let mut converters = Self::empty();

        // text (no-op)
        converters.register::<String>(ToText);

        // integers
        converters.register::<i8>(ToNumber::<i8>::new());
        converters.register::<i16>(ToNumber::<i16>::new());
        converters.register::<i32>(ToNumber::<i32>::new());
        converters.register::<i64>(ToNumber::<i64>::new());
        converters.register::<u8>(ToNumber::<u8>::new());
        converters.register::<u16>(ToNumber::<u16>::new());
        converters.register::<u32>(ToNumber::<u32>::new());
        converters.register::<u64>(ToNumber::<u64>::new());

        // floats
        converters.register::<f32>(ToNumber::<f32>::new());
        converters.register::<f64>(ToNumber::<f64>::new());

        // boolean
        converters.register::<bool>(ToBool);

        converters
    }
}

#[cfg(test)]
mod tests {
    use std::any::Any;

    use derive_ask_types::ConvertFailed;

    use super::*;

    #[test]
    fn built_ins_cover_the_primitives() {
        let converters = Converters::default();
        for tag in [
            TypeTag::of::<String>(),
            TypeTag::of::<i8>(),
            TypeTag::of::<i64>(),
            TypeTag::of::<u64>(),
            TypeTag::of::<f32>(),
            TypeTag::of::<f64>(),
            TypeTag::of::<bool>(),
        ] {
            assert!(converters.find(&tag).is_some(), "missing converter: {tag}");
        }
    }

    #[test]
    fn unknown_type_is_a_soft_miss() {
        struct Unregistered;
        let converters = Converters::default();
        assert!(converters.find(&TypeTag::of::<Unregistered>()).is_none());
    }

    struct Yelling;

    impl Convert for Yelling {
        fn convert(&self, raw: &str) -> Result<Box<dyn Any>, ConvertFailed> {
            Ok(Box::new(raw.to_uppercase()))
        }
    }

    #[test]
    fn register_replaces_existing_entry() {
        let mut converters = Converters::default();
        let before = converters.len();
        converters.register::<String>(Yelling);
        assert_eq!(converters.len(), before);

        let converter = converters.find(&TypeTag::of::<String>()).unwrap();
        let value = converter.convert("quiet").unwrap();
        assert_eq!(*value.downcast::<String>().unwrap(), "QUIET");
    }

    struct Celsius(#[allow(dead_code)] f64);
    struct Fahrenheit(#[allow(dead_code)] f64);

    struct AnyTemperature;

    impl Convert for AnyTemperature {
        fn convert(&self, raw: &str) -> Result<Box<dyn Any>, ConvertFailed> {
            raw.parse::<f64>()
                .map(|degrees| Box::new(Celsius(degrees)) as Box<dyn Any>)
                .map_err(|_| ConvertFailed::new("Invalid value for: Celsius"))
        }

        fn matches(&self, requested: &TypeTag) -> bool {
            *requested == TypeTag::of::<Fahrenheit>()
        }
    }

    #[test]
    fn fallback_scan_uses_the_matches_predicate() {
        let mut converters = Converters::default();
        converters.register::<Celsius>(AnyTemperature);

        // no exact entry for Fahrenheit, but the Celsius entry claims it
        assert!(converters.find(&TypeTag::of::<Fahrenheit>()).is_some());
    }
}
