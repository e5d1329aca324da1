//! Box-edge property names and the enum_property! macro.
//!
//! This module names the shorthands the expander understands, the four
//! edges of a box, and the per-edge longhand properties each shorthand
//! family expands into.

use super::ToCss;

/// Macro for defining CSS keyword enums with automatic ToCss implementation.
///
/// Inspired by lightningcss's `enum_property!` macro, this reduces boilerplate
/// for enums that map directly to CSS keywords.
///
/// # Example
///
/// ```ignore
/// enum_property! {
///     /// The four edges of a box.
///     pub enum Edge {
///         Top => "top",
///         Right => "right",
///         Bottom => "bottom",
///         Left => "left",
///     }
/// }
/// ```
macro_rules! enum_property {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $css:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)*];

            /// Returns the CSS keyword for this value.
            #[inline]
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $css,)*
                }
            }

            /// Parse a CSS keyword into this enum.
            #[inline]
            pub fn from_css(s: &str) -> Option<Self> {
                match s {
                    $($css => Some($name::$variant),)*
                    _ => None,
                }
            }
        }

        impl ToCss for $name {
            fn to_css(&self, buf: &mut String) {
                buf.push_str(self.as_str());
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        #[cfg(feature = "serde")]
        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }
    };
}

enum_property! {
    /// The four edges of a box, in the clockwise order shorthands list them.
    pub enum Edge {
        Top => "top",
        Right => "right",
        Bottom => "bottom",
        Left => "left",
    }
}

enum_property! {
    /// Box-edge shorthand properties.
    pub enum BoxShorthand {
        Margin => "margin",
        Padding => "padding",
        BorderWidth => "border-width",
        BorderColor => "border-color",
        BorderStyle => "border-style",
    }
}

enum_property! {
    /// Per-edge longhand properties produced by box-edge shorthands.
    pub enum Longhand {
        MarginTop => "margin-top",
        MarginRight => "margin-right",
        MarginBottom => "margin-bottom",
        MarginLeft => "margin-left",
        PaddingTop => "padding-top",
        PaddingRight => "padding-right",
        PaddingBottom => "padding-bottom",
        PaddingLeft => "padding-left",
        BorderTopWidth => "border-top-width",
        BorderRightWidth => "border-right-width",
        BorderBottomWidth => "border-bottom-width",
        BorderLeftWidth => "border-left-width",
        BorderTopColor => "border-top-color",
        BorderRightColor => "border-right-color",
        BorderBottomColor => "border-bottom-color",
        BorderLeftColor => "border-left-color",
        BorderTopStyle => "border-top-style",
        BorderRightStyle => "border-right-style",
        BorderBottomStyle => "border-bottom-style",
        BorderLeftStyle => "border-left-style",
    }
}

/// The longhand property names a shorthand family assigns to each edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeNames {
    pub top: Longhand,
    pub right: Longhand,
    pub bottom: Longhand,
    pub left: Longhand,
}

impl EdgeNames {
    pub const fn new(top: Longhand, right: Longhand, bottom: Longhand, left: Longhand) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// The longhand for one edge.
    #[inline]
    pub fn get(&self, edge: Edge) -> Longhand {
        match edge {
            Edge::Top => self.top,
            Edge::Right => self.right,
            Edge::Bottom => self.bottom,
            Edge::Left => self.left,
        }
    }

    /// The edge a longhand belongs to, if it is one of these names.
    pub fn edge_of(&self, longhand: Longhand) -> Option<Edge> {
        Edge::ALL.iter().copied().find(|&edge| self.get(edge) == longhand)
    }
}

impl BoxShorthand {
    /// Look up a shorthand by property name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|shorthand| shorthand.as_str().eq_ignore_ascii_case(name))
    }

    /// The longhands this shorthand expands into.
    pub const fn edge_names(self) -> EdgeNames {
        use Longhand::*;
        match self {
            BoxShorthand::Margin => {
                EdgeNames::new(MarginTop, MarginRight, MarginBottom, MarginLeft)
            }
            BoxShorthand::Padding => {
                EdgeNames::new(PaddingTop, PaddingRight, PaddingBottom, PaddingLeft)
            }
            BoxShorthand::BorderWidth => EdgeNames::new(
                BorderTopWidth,
                BorderRightWidth,
                BorderBottomWidth,
                BorderLeftWidth,
            ),
            BoxShorthand::BorderColor => EdgeNames::new(
                BorderTopColor,
                BorderRightColor,
                BorderBottomColor,
                BorderLeftColor,
            ),
            BoxShorthand::BorderStyle => EdgeNames::new(
                BorderTopStyle,
                BorderRightStyle,
                BorderBottomStyle,
                BorderLeftStyle,
            ),
        }
    }
}

impl Longhand {
    /// The shorthand family this longhand belongs to.
    pub fn shorthand(self) -> BoxShorthand {
        use Longhand::*;
        match self {
            MarginTop | MarginRight | MarginBottom | MarginLeft => BoxShorthand::Margin,
            PaddingTop | PaddingRight | PaddingBottom | PaddingLeft => BoxShorthand::Padding,
            BorderTopWidth | BorderRightWidth | BorderBottomWidth | BorderLeftWidth => {
                BoxShorthand::BorderWidth
            }
            BorderTopColor | BorderRightColor | BorderBottomColor | BorderLeftColor => {
                BoxShorthand::BorderColor
            }
            BorderTopStyle | BorderRightStyle | BorderBottomStyle | BorderLeftStyle => {
                BoxShorthand::BorderStyle
            }
        }
    }

    /// The edge this longhand applies to.
    pub fn edge(self) -> Edge {
        use Longhand::*;
        match self {
            MarginTop | PaddingTop | BorderTopWidth | BorderTopColor | BorderTopStyle => Edge::Top,
            MarginRight | PaddingRight | BorderRightWidth | BorderRightColor | BorderRightStyle => {
                Edge::Right
            }
            MarginBottom | PaddingBottom | BorderBottomWidth | BorderBottomColor
            | BorderBottomStyle => Edge::Bottom,
            MarginLeft | PaddingLeft | BorderLeftWidth | BorderLeftColor | BorderLeftStyle => {
                Edge::Left
            }
        }
    }
}

/// Declaration importance, carried unchanged from a shorthand onto its longhands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Priority {
    #[default]
    Normal,
    Important,
}

impl Priority {
    /// Parse the priority string a declaration carries (`""` or `"important"`).
    pub fn from_css(s: &str) -> Option<Self> {
        let s = s.trim();
        let s = s.strip_prefix('!').unwrap_or(s).trim_start();
        if s.is_empty() {
            Some(Priority::Normal)
        } else if s.eq_ignore_ascii_case("important") {
            Some(Priority::Important)
        } else {
            None
        }
    }

    #[inline]
    pub fn is_important(self) -> bool {
        self == Priority::Important
    }
}

impl ToCss for Priority {
    fn to_css(&self, buf: &mut String) {
        if self.is_important() {
            buf.push_str("!important");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorthand_lookup_ignores_case() {
        assert_eq!(BoxShorthand::from_name("padding"), Some(BoxShorthand::Padding));
        assert_eq!(BoxShorthand::from_name("Border-Width"), Some(BoxShorthand::BorderWidth));
        assert_eq!(BoxShorthand::from_name(" MARGIN "), Some(BoxShorthand::Margin));
        assert_eq!(BoxShorthand::from_name("border"), None);
        assert_eq!(BoxShorthand::from_name("padding-top"), None);
    }

    #[test]
    fn test_edge_names_per_family() {
        let names = BoxShorthand::BorderColor.edge_names();
        assert_eq!(names.get(Edge::Top).as_str(), "border-top-color");
        assert_eq!(names.get(Edge::Right).as_str(), "border-right-color");
        assert_eq!(names.get(Edge::Bottom).as_str(), "border-bottom-color");
        assert_eq!(names.get(Edge::Left).as_str(), "border-left-color");
    }

    #[test]
    fn test_edge_of() {
        let names = BoxShorthand::Margin.edge_names();
        assert_eq!(names.edge_of(Longhand::MarginBottom), Some(Edge::Bottom));
        assert_eq!(names.edge_of(Longhand::PaddingBottom), None);
    }

    #[test]
    fn test_every_longhand_has_one_family_and_edge() {
        for &longhand in Longhand::ALL {
            let family = longhand.shorthand();
            assert_eq!(family.edge_names().get(longhand.edge()), longhand);
            assert!(longhand.as_str().contains(longhand.edge().as_str()));
        }
        assert_eq!(Longhand::ALL.len(), BoxShorthand::ALL.len() * Edge::ALL.len());
    }

    #[test]
    fn test_priority_from_css() {
        assert_eq!(Priority::from_css(""), Some(Priority::Normal));
        assert_eq!(Priority::from_css("important"), Some(Priority::Important));
        assert_eq!(Priority::from_css("! IMPORTANT"), Some(Priority::Important));
        assert_eq!(Priority::from_css("urgent"), None);
    }

    #[test]
    fn test_priority_to_css() {
        assert_eq!(Priority::Normal.to_css_string(), "");
        assert_eq!(Priority::Important.to_css_string(), "!important");
    }
}
