//! ToCss implementations for values and longhand declarations.

use cssparser::{Token, serialize_identifier, serialize_name, serialize_string};

use super::ToCss;
use super::expander::LonghandDeclaration;
use super::value::{Primitive, PrimitiveValue};

// Writing into a String never fails, so fmt::Results below are discarded.

/// Numbers go through cssparser's serializer, which rounds f32 to six
/// significant digits the way the tokenizer's input was written.
fn write_numeric(token: &Token<'_>, buf: &mut String) {
    let _ = cssparser::ToCss::to_css(token, buf);
}

fn int_value(value: f32) -> Option<i32> {
    (value.fract() == 0.0 && value.abs() <= i32::MAX as f32).then_some(value as i32)
}

impl ToCss for Primitive {
    fn to_css(&self, buf: &mut String) {
        match self {
            Primitive::Ident(name) => {
                let _ = serialize_identifier(name, buf);
            }
            Primitive::Dimension { value, unit } => {
                let token = Token::Dimension {
                    has_sign: false,
                    value: *value,
                    int_value: int_value(*value),
                    unit: unit.as_str().into(),
                };
                write_numeric(&token, buf);
            }
            Primitive::Percentage(percent) => {
                let token = Token::Number {
                    has_sign: false,
                    value: *percent,
                    int_value: int_value(*percent),
                };
                write_numeric(&token, buf);
                buf.push('%');
            }
            Primitive::Number(value) => {
                let token = Token::Number {
                    has_sign: false,
                    value: *value,
                    int_value: int_value(*value),
                };
                write_numeric(&token, buf);
            }
            Primitive::QuotedString(s) => {
                let _ = serialize_string(s, buf);
            }
            Primitive::Hash(h) => {
                buf.push('#');
                let _ = serialize_name(h, buf);
            }
        }
    }
}

impl ToCss for PrimitiveValue {
    fn to_css(&self, buf: &mut String) {
        self.primitive().to_css(buf);
    }
}

impl ToCss for LonghandDeclaration {
    fn to_css(&self, buf: &mut String) {
        self.property.to_css(buf);
        buf.push_str(": ");
        self.value.to_css(buf);
        if self.priority.is_important() {
            buf.push(' ');
            self.priority.to_css(buf);
        }
    }
}

impl ToCss for [LonghandDeclaration] {
    fn to_css(&self, buf: &mut String) {
        for (i, decl) in self.iter().enumerate() {
            if i > 0 {
                buf.push(' ');
            }
            decl.to_css(buf);
            buf.push(';');
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PrimitiveValue {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_css_string())
    }
}
