//! Box-edge shorthand expansion (margin, padding, border-width/color/style).

use std::fmt;
use std::sync::Arc;

use super::declaration::{StyleDeclaration, explode_properties};
use super::diagnostics::{Diagnostic, DiagnosticSink, TracingSink};
use super::properties::{BoxShorthand, Edge, EdgeNames, Longhand, Priority};
use super::value::{PrimitiveValue, ShorthandValue};
use crate::error::Result;

/// One per-edge declaration produced from a shorthand.
///
/// All longhands from one shorthand share its `sequence` and `priority`, so
/// the cascade treats them as a single originating declaration.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LonghandDeclaration {
    pub property: Longhand,
    pub sequence: u32,
    pub value: PrimitiveValue,
    pub priority: Priority,
}

impl LonghandDeclaration {
    /// The edge this declaration applies to.
    #[inline]
    pub fn edge(&self) -> Edge {
        self.property.edge()
    }
}

/// Expand 1-4 values to [top, right, bottom, left] following CSS shorthand rules.
///
/// - 1 value: all sides
/// - 2 values: top/bottom, right/left
/// - 3 values: top, right/left, bottom
/// - 4 values: top, right, bottom, left
///
/// Any other count yields `None`.
pub fn expand_edges<T: Clone>(values: &[T]) -> Option<[T; 4]> {
    match values {
        [v] => Some([v.clone(), v.clone(), v.clone(), v.clone()]),
        [tb, rl] => Some([tb.clone(), rl.clone(), tb.clone(), rl.clone()]),
        [t, rl, b] => Some([t.clone(), rl.clone(), b.clone(), rl.clone()]),
        [t, r, b, l] => Some([t.clone(), r.clone(), b.clone(), l.clone()]),
        _ => None,
    }
}

/// Expand a shorthand value into its four longhand declarations.
///
/// Declarations come out in top, right, bottom, left order. A value count
/// outside 1..=4 reports one [`Diagnostic::MalformedValueCount`] naming
/// `property` to `sink` and returns no declarations.
pub fn expand(
    shorthand: &ShorthandValue,
    property: &str,
    priority: Priority,
    sequence: u32,
    names: &EdgeNames,
    sink: &dyn DiagnosticSink,
) -> Vec<LonghandDeclaration> {
    let Some(values) = expand_edges(shorthand.values()) else {
        sink.report(Diagnostic::MalformedValueCount {
            property: property.to_string(),
            count: shorthand.len(),
        });
        return Vec::new();
    };

    Edge::ALL
        .iter()
        .zip(values)
        .map(|(&edge, value)| LonghandDeclaration {
            property: names.get(edge),
            sequence,
            value,
            priority,
        })
        .collect()
}

/// Shorthand expansion bound to a diagnostic sink.
///
/// Holds no state besides the sink, so one instance can be built at startup
/// and shared across threads.
#[derive(Clone)]
pub struct Expander {
    sink: Arc<dyn DiagnosticSink>,
}

impl Expander {
    pub fn new(sink: Arc<dyn DiagnosticSink>) -> Self {
        Self { sink }
    }

    /// The sink diagnostics are reported to.
    pub fn sink(&self) -> &dyn DiagnosticSink {
        self.sink.as_ref()
    }

    /// Expand a value of one of the built-in shorthand families.
    pub fn expand(
        &self,
        shorthand: BoxShorthand,
        value: &ShorthandValue,
        priority: Priority,
        sequence: u32,
    ) -> Vec<LonghandDeclaration> {
        expand(
            value,
            shorthand.as_str(),
            priority,
            sequence,
            &shorthand.edge_names(),
            self.sink(),
        )
    }

    /// Expand with caller-supplied longhand names.
    pub fn expand_with(
        &self,
        property: &str,
        value: &ShorthandValue,
        priority: Priority,
        sequence: u32,
        names: &EdgeNames,
    ) -> Vec<LonghandDeclaration> {
        expand(value, property, priority, sequence, names, self.sink())
    }

    /// Look up shorthand `name` in `style` and expand it.
    ///
    /// See [`explode_properties`].
    pub fn explode(
        &self,
        style: &dyn StyleDeclaration,
        name: &str,
        sequence: u32,
    ) -> Result<Vec<LonghandDeclaration>> {
        explode_properties(style, name, sequence, self.sink())
    }
}

impl Default for Expander {
    fn default() -> Self {
        Self::new(Arc::new(TracingSink))
    }
}

impl fmt::Debug for Expander {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Expander").finish_non_exhaustive()
    }
}
