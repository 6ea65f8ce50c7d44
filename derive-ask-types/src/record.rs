use crate::{Field, TypeTag};

/// A record whose annotated fields can be filled in from user input.
///
/// This trait is typically derived with `#[derive(Ask)]`. Only fields
/// carrying an `#[ask(...)]` attribute are enumerated; everything else is
/// invisible to the prompt engine.
pub trait Ask {
    /// Handles to the annotated fields, in declaration order.
    fn record_fields(&mut self) -> Vec<Field<'_>>;

    /// The record's own type tag, used to reject self-referential recursive
    /// fields during resolution.
    fn tag(&self) -> TypeTag;
}
