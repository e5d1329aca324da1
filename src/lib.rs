//! # boxedge
//!
//! Expansion of CSS box-edge shorthands (`margin`, `padding`, `border-width`,
//! `border-color`, `border-style`) into their four per-edge longhands.
//!
//! One to four values map onto the edges of a box in clockwise order, with
//! omitted values mirrored from the opposite edge:
//!
//! | values | top | right | bottom | left |
//! |--------|-----|-------|--------|------|
//! | 1      | a   | a     | a      | a    |
//! | 2      | a   | b     | a      | b    |
//! | 3      | a   | b     | c      | b    |
//! | 4      | a   | b     | c      | d    |
//!
//! Any other count drops the declaration and reports a [`Diagnostic`].
//!
//! ## Quick Start
//!
//! ```
//! use boxedge::{BoxShorthand, CollectingSink, Priority, PrimitiveValue, ShorthandValue, ToCss};
//! use boxedge::expand;
//!
//! let value = ShorthandValue::List(vec![PrimitiveValue::px(1.0), PrimitiveValue::px(2.0)]);
//! let sink = CollectingSink::new();
//! let longhands = expand(
//!     &value,
//!     "padding",
//!     Priority::Important,
//!     0,
//!     &BoxShorthand::Padding.edge_names(),
//!     &sink,
//! );
//!
//! assert_eq!(longhands[1].to_css_string(), "padding-right: 2px !important");
//! assert!(sink.is_empty());
//! ```
//!
//! ## Working with Declarations
//!
//! [`explode_properties`] reads a shorthand from anything implementing
//! [`StyleDeclaration`], such as a [`DeclarationBlock`]:
//!
//! ```
//! use boxedge::{DeclarationBlock, Priority, PrimitiveValue, TracingSink, explode_properties};
//!
//! let block =
//!     DeclarationBlock::new().with("margin", PrimitiveValue::ident("auto"), Priority::Normal);
//! let longhands = explode_properties(&block, "margin", 3, &TracingSink).unwrap();
//! assert_eq!(longhands.len(), 4);
//! assert!(longhands.iter().all(|d| d.sequence == 3));
//! ```

pub mod error;
pub mod style;

pub use error::{Error, Result};
pub use style::{
    BoxShorthand, CollectingSink, DeclarationBlock, Diagnostic, DiagnosticSink, Edge, EdgeNames,
    Expander, Longhand, LonghandDeclaration, Primitive, PrimitiveValue, Priority, RawValue,
    ShorthandValue, StyleDeclaration, ToCss, TracingSink, expand, expand_edges,
    explode_properties,
};
