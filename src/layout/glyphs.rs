//! Choosing glyph variants and assembling extensible glyphs from parts.
//!
//! Delimiters and radical signs grow vertically: the first vertical variant tall enough is used,
//! and when no variant is, the glyph is assembled from the parts of its vertical assembly.
//! Accents grow horizontally, up to the width of what they cover.

use crate::atom::Range;
use crate::dimensions::units::Pt;
use crate::dimensions::Unit;
use crate::display::{Display, DisplayKind, GlyphConstruction, GlyphDisplay};
use crate::font::{GlyphId, GlyphMetrics, GlyphPart, MathFont};

use super::constants::MAX_EXTENDER_REPEATS;

/// A glyph with its vertical extent above and below the baseline and its advance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measured {
    /// the glyph
    pub glyph : GlyphId,
    /// height above the baseline, never negative
    pub ascent : Unit<Pt>,
    /// depth below the baseline, never negative
    pub descent : Unit<Pt>,
    /// advance width
    pub width : Unit<Pt>,
}

impl Measured {
    /// Measures `glyph` in `font`
    pub fn new<G : GlyphMetrics>(font : &MathFont<G>, glyph : GlyphId) -> Self {
        let bounds = font.bounds(glyph);
        Self {
            glyph,
            ascent  : bounds.typo_height().max(Unit::ZERO),
            descent : (-bounds.typo_depth()).max(Unit::ZERO),
            width   : font.advance(glyph),
        }
    }

    /// Total height of the glyph
    pub fn height(&self) -> Unit<Pt> {
        self.ascent + self.descent
    }

    /// A box drawing the glyph
    pub fn into_display<G : GlyphMetrics>(self, font : &MathFont<G>, range : Range) -> Display {
        let glyph = GlyphDisplay { glyph : self.glyph, shift_down : Unit::ZERO, font_size : font.size() };
        Display::new(DisplayKind::Glyph(glyph), self.ascent, self.descent, self.width, range)
    }
}

/// The first vertical variant of `glyph` at least `height` tall, or the largest variant.
pub fn vertical_variant<G : GlyphMetrics>(font : &MathFont<G>, glyph : GlyphId, height : Unit<Pt>) -> Measured {
    let mut last = Measured::new(font, glyph);
    for variant in font.vertical_variants(glyph) {
        last = Measured::new(font, variant);
        if last.height() >= height {
            return last;
        }
    }
    debug!("no vertical variant of {:?} is {} pt tall", glyph, height);
    last
}

/// The widest horizontal variant of `glyph` whose ink is at most `max_width` wide.
/// If even the smallest variant is wider, it is returned.
pub fn horizontal_variant<G : GlyphMetrics>(font : &MathFont<G>, glyph : GlyphId, max_width : Unit<Pt>) -> Measured {
    let mut chosen : Option<Measured> = None;
    for variant in font.horizontal_variants(glyph) {
        if font.bounds(variant).width() > max_width {
            return chosen.unwrap_or_else(|| Measured::new(font, variant));
        }
        chosen = Some(Measured::new(font, variant));
    }
    chosen.unwrap_or_else(|| Measured::new(font, glyph))
}

/// A vertical glyph at least `height` tall: a variant if one is large enough, an assembly otherwise.
/// Falls back to the largest variant, which may then be too short.
pub fn stretched_glyph<G : GlyphMetrics>(font : &MathFont<G>, glyph : GlyphId, height : Unit<Pt>, range : Range) -> Display {
    let variant = vertical_variant(font, glyph, height);
    if variant.height() < height {
        if let Some(construction) = construct_glyph(font, glyph, height, range) {
            return construction;
        }
    }
    variant.into_display(font, range)
}

/// A delimiter at least `height` tall, centred on the math axis. `None` if the font has no glyph for it.
pub fn delimiter_glyph<G : GlyphMetrics>(font : &MathFont<G>, delimiter : &str, height : Unit<Pt>, range : Range) -> Option<Display> {
    let ch = delimiter.chars().next()?;
    let glyph = match font.glyph_for_char(ch) {
        Some(glyph) => glyph,
        None => {
            debug!("no glyph for delimiter {:?}", delimiter);
            return None;
        },
    };

    let mut display = stretched_glyph(font, glyph, height, range);
    let shift_down = (display.ascent() - display.descent()).scale(0.5) - font.axis_height();
    display.set_shift_down(shift_down);
    Some(display)
}

/// Assembles `glyph` from the parts of its vertical assembly so as to be at least `height` tall.
/// The construction sits on the baseline: its ascent is its height and its descent is zero.
pub fn construct_glyph<G : GlyphMetrics>(font : &MathFont<G>, glyph : GlyphId, height : Unit<Pt>, range : Range) -> Option<Display> {
    let parts = font.vertical_assembly(glyph);
    if parts.is_empty() {
        return None;
    }

    let (glyphs, offsets, total) = match assemble(&parts, font.min_connector_overlap(), height) {
        Some(assembly) => assembly,
        None => {
            debug!("assembly of {:?} has no usable parts", glyph);
            return None;
        },
    };

    // parts of one assembly may have different advances
    let width = glyphs.iter().map(|&part| font.advance(part)).reduce(|a, b| a.max(b))?;
    let construction = GlyphConstruction { glyphs, offsets, shift_down : Unit::ZERO, font_size : font.size() };
    Some(Display::new(DisplayKind::GlyphConstruction(construction), total, Unit::ZERO, width, range))
}

/// Lays out `parts` (bottom to top) with as few extenders as possible, then spreads the remaining space evenly between the connectors.
/// Returns the glyphs, their offsets from the bottom and the total height.
fn assemble(parts : &[GlyphPart], min_connector_overlap : Unit<Pt>, height : Unit<Pt>) -> Option<(Vec<GlyphId>, Vec<Unit<Pt>>, Unit<Pt>)> {
    let has_extenders = parts.iter().any(|part| part.is_extender);
    let mut best = None;

    for n_extenders in 0 ..= MAX_EXTENDER_REPEATS {
        let mut glyphs = Vec::new();
        let mut offsets = Vec::new();
        let mut prev : Option<&GlyphPart> = None;
        let mut min_offset = Unit::ZERO;
        // by how much each offset may still grow
        let mut max_delta : Option<Unit<Pt>> = None;

        for part in parts {
            let repeats = if part.is_extender { n_extenders } else { 1 };
            for _ in 0 .. repeats {
                if let Some(prev) = prev {
                    let max_overlap = prev.end_connector_length.min(part.start_connector_length);
                    let min_offset_delta = prev.full_advance - max_overlap;
                    let max_offset_delta = prev.full_advance - min_connector_overlap;
                    let slack = max_offset_delta - min_offset_delta;
                    max_delta = Some(max_delta.map_or(slack, |delta| delta.min(slack)));
                    min_offset += min_offset_delta;
                }
                glyphs.push(part.glyph);
                offsets.push(min_offset);
                prev = Some(part);
            }
        }

        let last = match prev {
            Some(last) => last,
            // only extenders, and none repeated yet
            None => continue,
        };

        let min_height = min_offset + last.full_advance;
        let connectors = glyphs.len() - 1;
        let max_height = min_height + max_delta.unwrap_or(Unit::ZERO).scale(connectors as f64);

        if min_height >= height {
            return Some((glyphs, offsets, min_height));
        }
        if height <= max_height && connectors > 0 {
            let increase = (height - min_height).scale(1. / connectors as f64);
            let offsets : Vec<_> = offsets.iter()
                .enumerate()
                .map(|(i, &offset)| offset + increase.scale(i as f64))
                .collect();
            let total = offsets.last().copied().unwrap_or(Unit::ZERO) + last.full_advance;
            return Some((glyphs, offsets, total));
        }

        best = Some((glyphs, offsets, min_height));
        if !has_extenders {
            // repeating nothing cannot make it taller
            break;
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(v : f64) -> Unit<Pt> { Unit::new(v) }

    fn part(glyph : u16, advance : f64, connector : f64, is_extender : bool) -> GlyphPart {
        GlyphPart {
            glyph : GlyphId(glyph),
            full_advance : pt(advance),
            start_connector_length : pt(connector),
            end_connector_length : pt(connector),
            is_extender,
        }
    }

    fn brace() -> Vec<GlyphPart> {
        vec![part(1, 10., 2., false), part(2, 10., 2., true), part(3, 10., 2., false)]
    }

    #[test]
    fn short_assembly_needs_no_extender() {
        let (glyphs, offsets, total) = assemble(&brace(), pt(1.), pt(15.)).unwrap();
        assert_eq!(glyphs, vec![GlyphId(1), GlyphId(3)]);
        assert_eq!(offsets, vec![pt(0.), pt(8.)]);
        assert_eq!(total, pt(18.));
    }

    #[test]
    fn connectors_are_stretched_up_to_the_minimal_overlap() {
        // two parts overlap by 2 at most and 1 at least: 18 to 19 pt
        let (glyphs, offsets, total) = assemble(&brace(), pt(1.), pt(18.5)).unwrap();
        assert_eq!(glyphs.len(), 2);
        assert_eq!(offsets, vec![pt(0.), pt(8.5)]);
        assert_eq!(total, pt(18.5));
    }

    #[test]
    fn extenders_are_repeated() {
        // one extender reaches 28 pt at most, two reach 34 to 37 pt
        let (glyphs, _, total) = assemble(&brace(), pt(1.), pt(36.)).unwrap();
        assert_eq!(glyphs, vec![GlyphId(1), GlyphId(2), GlyphId(2), GlyphId(3)]);
        assert!((total - pt(36.)).abs() < pt(1e-9));

        let (glyphs, _, total) = assemble(&brace(), pt(1.), pt(40.)).unwrap();
        assert_eq!(glyphs.len(), 5);
        assert_eq!(total, pt(42.));
    }

    #[test]
    fn no_extender_gives_best_effort() {
        let parts = vec![part(1, 10., 2., false), part(3, 10., 2., false)];
        let (glyphs, _, total) = assemble(&parts, pt(1.), pt(100.)).unwrap();
        assert_eq!(glyphs.len(), 2);
        assert_eq!(total, pt(18.));
        assert!(assemble(&[], pt(1.), pt(10.)).is_none());
    }
}
