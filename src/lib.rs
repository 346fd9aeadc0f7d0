/*! # A mathematical typesetting engine driven by OpenType MATH metrics.

This crate lays out mathematical formulas the way TeX does (Appendix G of the TeXbook), using the parameters of the
MATH table of an OpenType font. A formula is built as a tree of atoms, laid out into a tree of positioned boxes, and
the boxes are drawn on any graphical backend.

## Basic usage

Three ingredients are needed: a formula, a math font and a canvas.

The formula is a [`MathList`](crate::atom::MathList) of [`MathAtom`](crate::atom::MathAtom)s,
usually built with the helpers of [`atom::factory`].

The font joins a [`GlyphMetrics`](crate::font::GlyphMetrics) provider, which knows the glyphs of the font file,
with the MATH data of the font (a [`MathTable`](crate::font::MathTable), read from a JSON export or, with the
`ttfparser-fontparser` feature, directly from the font file).

```
use mathbox::atom::{factory, MathList};
use mathbox::dimensions::{units::FUnit, Unit};
use mathbox::font::{GlyphId, GlyphMetrics, MathFont, MathTable};
use mathbox::geometry::BBox;
use mathbox::layout::{typeset, LayoutSettings};

// A font where every character is a 500 x 700 box
struct Boxes;

impl GlyphMetrics for Boxes {
    fn units_per_em(&self) -> u16 { 1000 }
    fn glyph_for_char(&self, ch : char) -> Option<GlyphId> { u16::try_from(u32::from(ch)).ok().map(GlyphId) }
    fn glyph_name(&self, gid : GlyphId) -> Option<String> { Some(format!("g{}", gid.0)) }
    fn glyph_with_name(&self, name : &str) -> Option<GlyphId> { name.strip_prefix('g')?.parse().ok().map(GlyphId) }
    fn advance(&self, _ : GlyphId) -> Unit<FUnit> { Unit::from(500) }
    fn bounds(&self, _ : GlyphId) -> BBox<FUnit> { BBox::new(Unit::ZERO, Unit::ZERO, Unit::from(500), Unit::from(700)) }
}

let font = MathFont::new(MathTable::default(), Boxes, Unit::new(20.));

let mut formula = MathList::new();
formula.add(factory::fraction_with_strings("1", "2")).unwrap();
formula.append(factory::atom_list_for("+ab"));

let display = typeset(&formula, LayoutSettings::new(&font));
println!("the formula is {} pt wide", display.width());
```

Finally, the [`Display`](crate::display::Display) tree is drawn with [`Display::draw`](crate::display::Display::draw)
on anything implementing [`Canvas`](crate::render::Canvas).

## Coordinates

Positions and sizes are in points, y-up: the origin of the formula is the start of its baseline,
ascents are measured upwards from the baseline and descents downwards.
*/

#[macro_use]
extern crate serde_derive;

#[macro_use]
extern crate log;

#[deny(missing_docs)]
pub mod error;
#[deny(missing_docs)]
pub mod dimensions;
#[deny(missing_docs)]
pub mod geometry;
#[deny(missing_docs)]
pub mod color;
#[deny(missing_docs)]
pub mod atom;
#[deny(missing_docs)]
pub mod font;
#[deny(missing_docs)]
pub mod display;
#[deny(missing_docs)]
pub mod layout;
#[deny(missing_docs)]
pub mod render;

pub use layout::typeset;
