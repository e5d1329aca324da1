//! The style-declaration boundary: looking up a shorthand by name and
//! exploding it into longhands.

use super::diagnostics::DiagnosticSink;
use super::expander::{LonghandDeclaration, expand};
use super::properties::{BoxShorthand, Priority};
use super::value::{RawValue, ShorthandValue};
use crate::error::{Error, Result};

/// Read access to the declarations of one style rule.
pub trait StyleDeclaration {
    /// The parsed value declared for `name`, if any.
    fn value(&self, name: &str) -> Option<RawValue>;

    /// The priority declared for `name`. Undeclared properties are `Normal`.
    fn priority(&self, name: &str) -> Priority;
}

/// An ordered list of declarations, e.g. the body of one style rule.
///
/// Lookups are ASCII case-insensitive. When a name is declared more than
/// once the last declaration wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeclarationBlock {
    entries: Vec<(String, RawValue, Priority)>,
}

impl DeclarationBlock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(
        &mut self,
        name: impl Into<String>,
        value: impl Into<RawValue>,
        priority: Priority,
    ) {
        self.entries.push((name.into(), value.into(), priority));
    }

    /// Builder form of [`push`](Self::push).
    pub fn with(
        mut self,
        name: impl Into<String>,
        value: impl Into<RawValue>,
        priority: Priority,
    ) -> Self {
        self.push(name, value, priority);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Declared property names in source order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _, _)| name.as_str())
    }

    fn find(&self, name: &str) -> Option<&(String, RawValue, Priority)> {
        self.entries
            .iter()
            .rev()
            .find(|(declared, _, _)| declared.eq_ignore_ascii_case(name))
    }
}

impl StyleDeclaration for DeclarationBlock {
    fn value(&self, name: &str) -> Option<RawValue> {
        self.find(name).map(|(_, value, _)| value.clone())
    }

    fn priority(&self, name: &str) -> Priority {
        self.find(name)
            .map(|(_, _, priority)| *priority)
            .unwrap_or_default()
    }
}

/// Explode the box-edge shorthand `name` declared in `style` into its
/// four longhands.
///
/// `sequence` is the declaration's position in its stylesheet and is
/// copied onto every longhand. A value count outside 1..=4 is reported to
/// `sink` and yields `Ok` with no declarations.
pub fn explode_properties(
    style: &dyn StyleDeclaration,
    name: &str,
    sequence: u32,
    sink: &dyn DiagnosticSink,
) -> Result<Vec<LonghandDeclaration>> {
    let shorthand =
        BoxShorthand::from_name(name).ok_or_else(|| Error::UnsupportedProperty(name.to_string()))?;
    let raw = style
        .value(name)
        .ok_or_else(|| Error::MissingProperty(name.to_string()))?;
    let priority = style.priority(name);
    let value = ShorthandValue::classify(raw)?;

    Ok(expand(
        &value,
        shorthand.as_str(),
        priority,
        sequence,
        &shorthand.edge_names(),
        sink,
    ))
}
