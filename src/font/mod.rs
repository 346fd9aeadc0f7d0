//! Everything layout needs to know about a math font.
//!
//! Two sources are combined:
//!   - a [`GlyphMetrics`] provider, which knows the glyphs of the font file (names, advances, bounding boxes),
//!   - a [`MathTable`](table::MathTable), the OpenType MATH data of the font exported to a versioned JSON document
//!     (constants, variants, italic corrections, accent attachments, assemblies).
//!
//! [`MathFont`] joins both at a given font size and answers every metric in points.

pub mod backend;
pub mod manager;
pub mod metrics;
pub mod style;
pub mod table;

pub use self::manager::FontManager;
pub use self::metrics::{GlyphPart, MathFont};
pub use self::table::MathTable;

use crate::dimensions::{units::FUnit, Unit};
use crate::geometry::BBox;

/// The id of a glyph (represented as u16)
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default, PartialOrd, Ord)]
#[derive(Serialize, Deserialize)]
pub struct GlyphId(pub u16);

impl From<u16> for GlyphId {
    fn from(x: u16) -> Self { Self(x) }
}

impl From<GlyphId> for u16 {
    fn from(gid: GlyphId) -> Self { gid.0 }
}

/// Per-glyph information read from the font file.
///
/// All values are in design units of the font. Unknown glyphs measure zero:
/// implementations return `None` or zero rather than failing.
pub trait GlyphMetrics {
    /// Number of design units per em
    fn units_per_em(&self) -> u16;

    /// The glyph the font maps `codepoint` to, if any
    fn glyph_for_char(&self, codepoint : char) -> Option<GlyphId>;

    /// The PostScript name of the glyph, as used by the keys of the math table
    fn glyph_name(&self, gid : GlyphId) -> Option<String>;

    /// Reverse of [`GlyphMetrics::glyph_name`]
    fn glyph_with_name(&self, name : &str) -> Option<GlyphId>;

    /// Horizontal advance
    fn advance(&self, gid : GlyphId) -> Unit<FUnit>;

    /// Bounding box, the glyph origin being at (0, 0) on the baseline
    fn bounds(&self, gid : GlyphId) -> BBox<FUnit>;
}

impl<G : GlyphMetrics + ?Sized> GlyphMetrics for &G {
    fn units_per_em(&self) -> u16 { (**self).units_per_em() }
    fn glyph_for_char(&self, codepoint : char) -> Option<GlyphId> { (**self).glyph_for_char(codepoint) }
    fn glyph_name(&self, gid : GlyphId) -> Option<String> { (**self).glyph_name(gid) }
    fn glyph_with_name(&self, name : &str) -> Option<GlyphId> { (**self).glyph_with_name(name) }
    fn advance(&self, gid : GlyphId) -> Unit<FUnit> { (**self).advance(gid) }
    fn bounds(&self, gid : GlyphId) -> BBox<FUnit> { (**self).bounds(gid) }
}
