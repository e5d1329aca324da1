//! Parsed CSS values as handed over by an upstream value parser.
//!
//! A shorthand's value is either one primitive or a list of primitives.
//! Callers classify the untyped [`RawValue`] into a [`ShorthandValue`] at
//! the boundary; the expander only ever sees the classified form.

use std::ops::Deref;
use std::sync::Arc;

use cssparser::Token;

use crate::error::{Error, Result};

/// The concrete shape of a primitive component value.
///
/// The expander treats this as opaque and attaches it to longhands unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// A keyword such as `auto`, `solid` or `red`.
    Ident(String),
    /// A number with a unit, e.g. `10px` or `1.5em`.
    Dimension { value: f32, unit: String },
    /// A percentage, stored in percent (`50%` is `50.0`).
    Percentage(f32),
    /// A unitless number.
    Number(f32),
    /// A quoted string.
    QuotedString(String),
    /// A hash token, e.g. the `ff0000` of `#ff0000`.
    Hash(String),
}

impl Primitive {
    /// Convert a token from the upstream tokenizer into a primitive.
    ///
    /// Returns `None` for tokens that are not component values on their own
    /// (delimiters, commas, blocks and functions).
    pub fn from_token(token: &Token<'_>) -> Option<Self> {
        match token {
            Token::Ident(name) => Some(Primitive::Ident(name.to_string())),
            Token::Dimension { value, unit, .. } => Some(Primitive::dimension(*value, unit)),
            Token::Percentage { unit_value, .. } => {
                Some(Primitive::Percentage(unit_value * 100.0))
            }
            Token::Number { value, .. } => Some(Primitive::Number(*value)),
            Token::QuotedString(s) => Some(Primitive::QuotedString(s.to_string())),
            Token::Hash(h) | Token::IDHash(h) => Some(Primitive::Hash(h.to_string())),
            _ => None,
        }
    }

    /// A dimension with its unit ASCII-lowercased, as CSS units are
    /// case-insensitive.
    pub fn dimension(value: f32, unit: &str) -> Self {
        Primitive::Dimension {
            value,
            unit: unit.to_ascii_lowercase(),
        }
    }
}

/// A shared, immutable handle to a primitive value.
///
/// Cloning the handle shares the underlying value rather than copying it, so
/// several longhand declarations may point at the same instance. Equality
/// compares contents; use [`PrimitiveValue::ptr_eq`] for identity.
#[derive(Debug, Clone, PartialEq)]
pub struct PrimitiveValue(Arc<Primitive>);

impl PrimitiveValue {
    pub fn new(primitive: Primitive) -> Self {
        Self(Arc::new(primitive))
    }

    pub fn ident(name: impl Into<String>) -> Self {
        Self::new(Primitive::Ident(name.into()))
    }

    pub fn dimension(value: f32, unit: &str) -> Self {
        Self::new(Primitive::dimension(value, unit))
    }

    pub fn px(value: f32) -> Self {
        Self::dimension(value, "px")
    }

    pub fn number(value: f32) -> Self {
        Self::new(Primitive::Number(value))
    }

    /// A percentage given in percent (`percentage(50.0)` is `50%`).
    pub fn percentage(percent: f32) -> Self {
        Self::new(Primitive::Percentage(percent))
    }

    pub fn string(s: impl Into<String>) -> Self {
        Self::new(Primitive::QuotedString(s.into()))
    }

    pub fn hash(h: impl Into<String>) -> Self {
        Self::new(Primitive::Hash(h.into()))
    }

    #[inline]
    pub fn primitive(&self) -> &Primitive {
        &self.0
    }

    /// Whether two handles refer to the same value instance.
    #[inline]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }
}

impl Deref for PrimitiveValue {
    type Target = Primitive;

    fn deref(&self) -> &Primitive {
        &self.0
    }
}

impl From<Primitive> for PrimitiveValue {
    fn from(primitive: Primitive) -> Self {
        Self::new(primitive)
    }
}

/// An unclassified value from the upstream parser.
///
/// Upstream parsers may nest lists; only a flat list of primitives is a
/// valid box-edge shorthand value.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Primitive(PrimitiveValue),
    List(Vec<RawValue>),
}

impl From<PrimitiveValue> for RawValue {
    fn from(value: PrimitiveValue) -> Self {
        RawValue::Primitive(value)
    }
}

impl From<Vec<PrimitiveValue>> for RawValue {
    fn from(values: Vec<PrimitiveValue>) -> Self {
        RawValue::List(values.into_iter().map(RawValue::Primitive).collect())
    }
}

/// The value of a box-edge shorthand declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum ShorthandValue {
    Single(PrimitiveValue),
    List(Vec<PrimitiveValue>),
}

impl ShorthandValue {
    /// Classify an upstream value.
    ///
    /// Fails with [`Error::TypeMismatch`] if a list entry is itself a list,
    /// which means the upstream parser broke its contract.
    pub fn classify(raw: RawValue) -> Result<Self> {
        match raw {
            RawValue::Primitive(value) => Ok(ShorthandValue::Single(value)),
            RawValue::List(items) => items
                .into_iter()
                .enumerate()
                .map(|(index, item)| match item {
                    RawValue::Primitive(value) => Ok(value),
                    RawValue::List(_) => Err(Error::TypeMismatch { index }),
                })
                .collect::<Result<Vec<_>>>()
                .map(ShorthandValue::List),
        }
    }

    /// Number of supplied values.
    #[inline]
    pub fn len(&self) -> usize {
        self.values().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values().is_empty()
    }

    /// The value at `index`, if present.
    #[inline]
    pub fn item(&self, index: usize) -> Option<&PrimitiveValue> {
        self.values().get(index)
    }

    /// All supplied values in order. A `Single` is a one-element slice.
    pub fn values(&self) -> &[PrimitiveValue] {
        match self {
            ShorthandValue::Single(value) => std::slice::from_ref(value),
            ShorthandValue::List(values) => values,
        }
    }
}

impl From<PrimitiveValue> for ShorthandValue {
    fn from(value: PrimitiveValue) -> Self {
        ShorthandValue::Single(value)
    }
}

impl From<Vec<PrimitiveValue>> for ShorthandValue {
    fn from(values: Vec<PrimitiveValue>) -> Self {
        ShorthandValue::List(values)
    }
}

impl TryFrom<RawValue> for ShorthandValue {
    type Error = Error;

    fn try_from(raw: RawValue) -> Result<Self> {
        Self::classify(raw)
    }
}

#[cfg(test)]
mod tests {
    use cssparser::{Parser, ParserInput};

    use super::*;

    fn tokens(css: &str) -> Vec<Option<Primitive>> {
        let mut input = ParserInput::new(css);
        let mut parser = Parser::new(&mut input);
        let mut out = Vec::new();
        while let Ok(token) = parser.next() {
            out.push(Primitive::from_token(token));
        }
        out
    }

    #[test]
    fn test_classify_primitive_is_single() {
        let v = PrimitiveValue::px(10.0);
        let classified = ShorthandValue::classify(RawValue::Primitive(v.clone())).unwrap();
        assert_eq!(classified, ShorthandValue::Single(v));
        assert_eq!(classified.len(), 1);
    }

    #[test]
    fn test_classify_flat_list() {
        let raw = RawValue::from(vec![PrimitiveValue::px(1.0), PrimitiveValue::px(2.0)]);
        let classified = ShorthandValue::classify(raw).unwrap();
        assert_eq!(classified.len(), 2);
        assert_eq!(classified.item(1), Some(&PrimitiveValue::px(2.0)));
        assert_eq!(classified.item(2), None);
    }

    #[test]
    fn test_classify_nested_list_is_type_mismatch() {
        let raw = RawValue::List(vec![
            RawValue::Primitive(PrimitiveValue::px(1.0)),
            RawValue::List(vec![RawValue::Primitive(PrimitiveValue::px(2.0))]),
        ]);
        assert_eq!(
            ShorthandValue::classify(raw),
            Err(Error::TypeMismatch { index: 1 })
        );
    }

    #[test]
    fn test_single_exposes_one_element_slice() {
        let v = PrimitiveValue::ident("auto");
        let single = ShorthandValue::Single(v.clone());
        assert_eq!(single.values().len(), 1);
        assert!(PrimitiveValue::ptr_eq(&single.values()[0], &v));
    }

    #[test]
    fn test_empty_list() {
        let empty = ShorthandValue::List(Vec::new());
        assert!(empty.is_empty());
        assert_eq!(empty.item(0), None);
    }

    #[test]
    fn test_clone_shares_instance() {
        let v = PrimitiveValue::px(3.0);
        let w = v.clone();
        assert!(PrimitiveValue::ptr_eq(&v, &w));
        let other = PrimitiveValue::px(3.0);
        assert_eq!(v, other);
        assert!(!PrimitiveValue::ptr_eq(&v, &other));
    }

    #[test]
    fn test_dimension_unit_is_normalized() {
        let tokenized = tokens("1PX").remove(0).map(PrimitiveValue::new);
        assert_eq!(tokenized, Some(PrimitiveValue::dimension(1.0, "PX")));
        assert_eq!(tokenized, Some(PrimitiveValue::px(1.0)));
    }

    #[test]
    fn test_from_token() {
        assert_eq!(
            tokens("10PX auto 50% 2 \"x\" #fff , /"),
            vec![
                Some(Primitive::Dimension {
                    value: 10.0,
                    unit: "px".to_string()
                }),
                Some(Primitive::Ident("auto".to_string())),
                Some(Primitive::Percentage(50.0)),
                Some(Primitive::Number(2.0)),
                Some(Primitive::QuotedString("x".to_string())),
                Some(Primitive::Hash("fff".to_string())),
                None,
                None,
            ]
        );
    }
}
