//! Field and record resolution.
//!
//! A `RecordPlan` is built fresh for every `ask` pass: each annotated field
//! is inspected, gets its label, default and converter resolved, and either
//! joins the plan or is downgraded to irrelevant with a warning. Downgrades
//! never abort sibling fields and never surface to the caller.

use std::any::Any;

use derive_ask_types::{Ask, Convert, ConvertFailed, Field, FieldAccess, FieldValue, TypeTag};

use crate::Converters;

pub(crate) enum PlanConverter<'a> {
    /// Instantiated from a `#[ask(converter = ...)]` override.
    Custom(Box<dyn Convert>),

    /// Borrowed from the registry.
    Shared(&'a dyn Convert),
}

impl PlanConverter<'_> {
    pub(crate) fn convert(&self, raw: &str) -> Result<Box<dyn Any>, ConvertFailed> {
        match self {
            Self::Custom(converter) => converter.convert(raw),
            Self::Shared(converter) => converter.convert(raw),
        }
    }
}

pub(crate) enum PlanKind<'a> {
    Scalar {
        value: Box<dyn FieldValue + 'a>,
        default_text: Option<String>,
        converter: PlanConverter<'a>,
    },
    Record(&'a mut dyn Ask),
}

/// One relevant field, ready to be prompted for.
pub struct FieldPlan<'a> {
    pub(crate) name: &'static str,
    pub(crate) label: Option<String>,
    pub(crate) kind: PlanKind<'a>,
}

impl<'a> FieldPlan<'a> {
    /// Resolve a single field. `None` means the field was downgraded to
    /// irrelevant: no converter could be found, or a recursive field's value
    /// has the owning record's own type and descending would never end.
    pub(crate) fn resolve(
        field: Field<'a>,
        owner: &TypeTag,
        converters: &'a Converters,
    ) -> Option<Self> {
        let Field { name, meta, access } = field;
        match access {
            FieldAccess::Record(record) => {
                if record.tag() == *owner {
                    log::warn!(
                        "skipping field '{name}': recursive value has the owning record's type \
                         '{owner}', descending would never end"
                    );
                    return None;
                }
                Some(Self {
                    name,
                    label: meta.explicit_label().map(str::to_string),
                    kind: PlanKind::Record(record),
                })
            }
            FieldAccess::Value(value) => {
                let converter = match meta.converter {
                    Some(factory) => PlanConverter::Custom(factory()),
                    None => match converters.find(&value.tag()) {
                        Some(converter) => PlanConverter::Shared(converter),
                        None => {
                            log::warn!(
                                "skipping field '{name}': no converter found for type '{}'",
                                value.tag()
                            );
                            return None;
                        }
                    },
                };
                let default_text = value.current_text();
                Some(Self {
                    name,
                    label: Some(meta.explicit_label().unwrap_or(name).to_string()),
                    kind: PlanKind::Scalar {
                        value,
                        default_text,
                        converter,
                    },
                })
            }
        }
    }

    /// The resolved prompt label. Recursive fields without an explicit label
    /// have none, and print no sub-header.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_recursive(&self) -> bool {
        matches!(self.kind, PlanKind::Record(_))
    }

    /// Textual rendering of the default value, if the field has one.
    pub fn default_text(&self) -> Option<&str> {
        match &self.kind {
            PlanKind::Scalar { default_text, .. } => default_text.as_deref(),
            PlanKind::Record(_) => None,
        }
    }
}

/// All relevant fields of one record, in declaration order.
pub struct RecordPlan<'a> {
    pub(crate) fields: Vec<FieldPlan<'a>>,
}

impl<'a> RecordPlan<'a> {
    /// Enumerate the record's annotated fields and resolve each one,
    /// retaining the relevant ones. Recursion into nested records is not
    /// done here; the engine descends when it reaches a recursive plan.
    pub fn resolve(record: &'a mut dyn Ask, converters: &'a Converters) -> Self {
        let owner = record.tag();
        let fields = record
            .record_fields()
            .into_iter()
            .filter_map(|field| FieldPlan::resolve(field, &owner, converters))
            .collect();
        Self { fields }
    }

    pub fn fields(&self) -> &[FieldPlan<'a>] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
