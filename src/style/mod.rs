//! Box-edge shorthand expansion.
//!
//! This module contains:
//! - The value model a shorthand declaration carries (single value or list)
//! - Shorthand and longhand property names for the box-edge families
//! - The expander turning one shorthand into four per-edge longhands
//! - Diagnostic sinks for malformed declarations
//! - ToCss serialization of values and declarations

mod declaration;
mod diagnostics;
mod expander;
mod properties;
mod to_css;
mod value;

pub trait ToCss {
    /// Write this value as CSS to the buffer.
    fn to_css(&self, buf: &mut String);

    /// Convert to a CSS string (convenience method).
    fn to_css_string(&self) -> String {
        let mut buf = String::new();
        self.to_css(&mut buf);
        buf
    }
}

// Re-export value model
pub use value::{Primitive, PrimitiveValue, RawValue, ShorthandValue};

// Re-export property names
pub use properties::{BoxShorthand, Edge, EdgeNames, Longhand, Priority};

// Re-export expansion
pub use expander::{Expander, LonghandDeclaration, expand, expand_edges};

// Re-export diagnostics
pub use diagnostics::{CollectingSink, Diagnostic, DiagnosticSink, TracingSink};

// Re-export the declaration boundary
pub use declaration::{DeclarationBlock, StyleDeclaration, explode_properties};
