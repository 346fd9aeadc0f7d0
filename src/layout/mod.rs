//! Converting [`MathList`](crate::atom::MathList)s to [`Display`](crate::display::Display) boxes which are ready to be drawn.
//!
//! Layout follows Appendix G of the TeXbook, with the parameters of the MATH table of an OpenType font
//! instead of the `\fontdimen`s of TeX.
//! Boxes are measured bottom-up, then positioned: every box is placed relative to its parent.
//!
//! While laying out a list, the type of every atom is needed to determine the spacing
//! between symbols (see [`spacing`]).

pub mod constants;
pub mod engine;
pub mod glyphs;
pub mod spacing;

use crate::atom::LineStyle;
use crate::color::RGBA;
use crate::dimensions::Unit;
use crate::font::{GlyphMetrics, MathFont};

pub use self::engine::typeset;

// NOTE: A limitation on derive(Clone) forces us to implement clone ourselves.
// cf discussion here: https://stegosaurusdormant.com/understanding-derive-clone/
/// Defines the math font to use, the style of the formula and the colours to draw it with.
pub struct LayoutSettings<'f, G> {
    /// Maths font, at the size of text and display style
    pub font : &'f MathFont<G>,
    /// Style of the formula
    pub style : LineStyle,
    /// Cramped formulas have their superscripts raised less
    pub cramped : bool,
    /// Colour of placeholders
    pub placeholder_color : RGBA,
    /// Colour of everything that has no colour of its own
    pub text_color : RGBA,
}

impl<'f, G> Clone for LayoutSettings<'f, G> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<'f, G> Copy for LayoutSettings<'f, G> {}

impl<'f, G> std::fmt::Debug for LayoutSettings<'f, G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutSettings")
            .field("font", self.font)
            .field("style", &self.style)
            .field("cramped", &self.cramped)
            .finish()
    }
}

impl<'f, G> LayoutSettings<'f, G> {
    /// Creates new settings: display style, not cramped, black text and blue placeholders
    pub fn new(font : &'f MathFont<G>) -> Self {
        Self {
            font,
            style : LineStyle::Display,
            cramped : false,
            placeholder_color : RGBA::BLUE,
            text_color : RGBA::BLACK,
        }
    }

    /// Same settings in `style`
    pub fn with_style(self, style : LineStyle) -> Self {
        LayoutSettings {
            style,
            ..self
        }
    }

    /// Same settings, cramped or not
    pub fn with_cramped(self, cramped : bool) -> Self {
        LayoutSettings {
            cramped,
            ..self
        }
    }

    /// Same settings with another colour for placeholders
    pub fn with_placeholder_color(self, placeholder_color : RGBA) -> Self {
        LayoutSettings {
            placeholder_color,
            ..self
        }
    }

    /// Same settings with another default text colour
    pub fn with_text_color(self, text_color : RGBA) -> Self {
        LayoutSettings {
            text_color,
            ..self
        }
    }

    /// Style of the scripts: display and text scripts are in script style
    fn script_style(self) -> LineStyle {
        match self.style {
            LineStyle::Display | LineStyle::Text => LineStyle::Script,
            LineStyle::Script | LineStyle::ScriptOfScript => LineStyle::ScriptOfScript,
        }
    }

    /// Settings of superscripts: cramped only if the base is
    fn superscript_variant(self) -> Self {
        LayoutSettings {
            style : self.script_style(),
            ..self
        }
    }

    /// Settings of subscripts, always cramped
    fn subscript_variant(self) -> Self {
        LayoutSettings {
            style : self.script_style(),
            cramped : true,
            ..self
        }
    }

    /// Settings of numerators, one style smaller and not cramped
    fn numerator(self) -> Self {
        LayoutSettings {
            style : self.style.inc(),
            cramped : false,
            ..self
        }
    }

    /// Settings of denominators, one style smaller and cramped
    fn denominator(self) -> Self {
        LayoutSettings {
            style : self.style.inc(),
            cramped : true,
            ..self
        }
    }

    fn cramped(self) -> Self {
        self.with_cramped(true)
    }
}

impl<'f, G : GlyphMetrics> LayoutSettings<'f, G> {
    /// The font scaled for the style: scripts use the script scale-down percentages of the MATH table.
    pub fn style_font(&self) -> MathFont<G> {
        font_for_style(self.font, self.style)
    }
}

/// `font` scaled for `style`
pub fn font_for_style<G : GlyphMetrics>(font : &MathFont<G>, style : LineStyle) -> MathFont<G> {
    let scale = match style {
        LineStyle::Display | LineStyle::Text => return font.clone(),
        LineStyle::Script => font.script_scale_down(),
        LineStyle::ScriptOfScript => font.script_script_scale_down(),
    };
    font.with_size(Unit::new(font.size().to_unitless() * scale))
}
