use crate::Convert;

/// Per-field configuration carried by the `#[ask(...)]` attribute.
///
/// Produced by the `#[derive(Ask)]` macro; the `recursive` flag of the
/// attribute is consumed during expansion, where it selects the generated
/// `FieldAccess` variant.
pub struct AskMeta {
    /// Prompt label. Empty means "not specified": non-recursive fields fall
    /// back to the field name, recursive fields print no sub-header.
    pub label: &'static str,

    /// Explicit converter factory, overriding registry lookup.
    pub converter: Option<fn() -> Box<dyn Convert>>,
}

impl AskMeta {
    /// The explicit label, if one was given and is not blank.
    pub fn explicit_label(&self) -> Option<&'static str> {
        if self.label.trim().is_empty() {
            None
        } else {
            Some(self.label)
        }
    }
}

impl Default for AskMeta {
    fn default() -> Self {
        Self {
            label: "",
            converter: None,
        }
    }
}
