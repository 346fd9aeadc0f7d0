//! This module defines the main layout function that places the atoms of a math list in space,
//! given the geometrical information provided in the font.
//! The entry point is [`typeset`](crate::layout::engine::typeset).
//! Given a [`MathList`] and some [`LayoutSettings`], it returns a [`Display`] tree that can then be drawn on a
//! [`Canvas`](crate::render::Canvas).
//!
//! Consecutive plain symbols are collected into runs of glyphs ; every other atom gets a box of its own.
//! Boxes are laid out left to right on a common baseline, with the spacing of [`atom_space`] between them.

use crate::atom::{AtomKind, AtomType, ColumnAlignment, Fraction, Inner, LineStyle, MathAtom, MathList, Range, Table};
use crate::dimensions::units::{Mu, Pt};
use crate::dimensions::Unit;
use crate::display::{AccentDisplay, Display, DisplayKind, FractionDisplay, GlyphRun, LargeOpLimits, LineDisplay, LinePosition, RadicalDisplay};
use crate::font::style::style_str;
use crate::font::{GlyphId, GlyphMetrics, MathFont};
use crate::geometry::Point;

use super::constants::{BASELINE_SKIP, DELIMITER_FACTOR, DELIMITER_SHORT_FALL, JOT, LINE_SKIP, LINE_SKIP_LIMIT};
use super::glyphs::{self, Measured};
use super::spacing::atom_space;
use super::{font_for_style, LayoutSettings};

/// Entry point of layout: finalizes `list` and lays it out with `settings`.
///
/// The returned box is at the origin, its baseline on the x-axis. Every box without a colour of its own
/// is drawn in `settings.text_color`.
pub fn typeset<G : GlyphMetrics>(list : &MathList, settings : LayoutSettings<'_, G>) -> Display {
    let finalized = list.finalized();
    let mut display = layout_list(&finalized, settings, false);
    display.set_text_color(Some(settings.text_color));
    display
}

/// Lays out a finalized list. `spaced` lists are enclosed in delimiters: they are spaced as if an opening
/// delimiter preceded them and a closing one followed them.
fn layout_list<G : GlyphMetrics>(list : &MathList, settings : LayoutSettings<'_, G>, spaced : bool) -> Display {
    let atoms = preprocess(list);
    let mut typesetter = Typesetter::new(settings, spaced);
    typesetter.add_atoms(atoms);

    let range = match list.atoms().last() {
        Some(last) => Range::new(0, last.index_range.end()),
        None => Range::ZERO,
    };
    Display::math_list(typesetter.displays, range)
}

/// Styles variables and numbers, which are then plain symbols, and merges consecutive plain symbols.
/// A symbol is never merged into one that carries scripts.
fn preprocess(list : &MathList) -> Vec<MathAtom> {
    let mut atoms : Vec<MathAtom> = Vec::with_capacity(list.len());
    for atom in list.iter() {
        let mut atom = atom.clone();
        match atom.atom_type() {
            AtomType::Variable | AtomType::Number => {
                atom.nucleus = style_str(&atom.nucleus, atom.font_style);
                atom.set_plain_kind(AtomKind::Ordinary);
            },
            AtomType::UnaryOperator => atom.set_plain_kind(AtomKind::Ordinary),
            _ => (),
        }

        if atom.atom_type() == AtomType::Ordinary {
            if let Some(prev) = atoms.last_mut() {
                if prev.atom_type() == AtomType::Ordinary && !prev.has_scripts() {
                    prev.absorb(atom);
                    continue;
                }
            }
        }
        atoms.push(atom);
    }
    atoms
}

/// Glyphs of consecutive symbols, waiting to be turned into a single box.
struct Run {
    text : String,
    glyphs : Vec<GlyphId>,
    offsets : Vec<Unit<Pt>>,
    advance : Unit<Pt>,
    ascent : Unit<Pt>,
    descent : Unit<Pt>,
    range : Option<Range>,
    placeholder : bool,
}

impl Run {
    fn new() -> Self {
        Self {
            text : String::new(),
            glyphs : Vec::new(),
            offsets : Vec::new(),
            advance : Unit::ZERO,
            ascent : Unit::ZERO,
            descent : Unit::ZERO,
            range : None,
            placeholder : false,
        }
    }

    fn is_empty(&self) -> bool {
        self.text.is_empty() && self.range.is_none()
    }

    fn kern(&mut self, space : Unit<Pt>) {
        self.advance += space;
    }

    fn push<G : GlyphMetrics>(&mut self, font : &MathFont<G>, text : &str, range : Range, placeholder : bool) {
        for ch in text.chars() {
            let glyph = match font.glyph_for_char(ch) {
                Some(glyph) => glyph,
                None => {
                    debug!("no glyph for {:?}, skipping it", ch);
                    continue;
                },
            };
            let bounds = font.bounds(glyph);
            self.ascent  = self.ascent.max(bounds.typo_height());
            self.descent = self.descent.max(-bounds.typo_depth());
            self.glyphs.push(glyph);
            self.offsets.push(self.advance);
            self.advance += font.advance(glyph);
        }
        self.text.push_str(text);
        self.range = Some(match self.range {
            Some(current) => current.union(range),
            None => range,
        });
        self.placeholder = placeholder;
    }

    /// Empties the run into a box at the origin. Also returns whether the run holds a placeholder.
    fn take<G : GlyphMetrics>(&mut self, font : &MathFont<G>) -> (Display, bool) {
        let run = std::mem::replace(self, Run::new());
        let glyph_run = GlyphRun {
            glyphs : run.glyphs,
            offsets : run.offsets,
            text : run.text,
            font_size : font.size(),
        };
        let range = run.range.unwrap_or(Range::ZERO);
        let display = Display::new(DisplayKind::GlyphRun(glyph_run), run.ascent, run.descent, run.advance, range);
        (display, run.placeholder)
    }
}

struct Typesetter<'f, G> {
    settings : LayoutSettings<'f, G>,
    /// font scaled for the current style
    font : MathFont<G>,
    spaced : bool,
    displays : Vec<Display>,
    /// where the next box goes
    x : Unit<Pt>,
    run : Run,
}

impl<'f, G : GlyphMetrics> Typesetter<'f, G> {
    fn new(settings : LayoutSettings<'f, G>, spaced : bool) -> Self {
        Self {
            font : settings.style_font(),
            settings,
            spaced,
            displays : Vec::new(),
            x : Unit::ZERO,
            run : Run::new(),
        }
    }

    fn set_style(&mut self, style : LineStyle) {
        self.settings = self.settings.with_style(style);
        self.font = self.settings.style_font();
    }

    fn add_atoms(&mut self, atoms : Vec<MathAtom>) {
        let mut prev_type : Option<AtomType> = None;

        for atom in atoms {
            let atom_type = atom.atom_type();
            trace!("laying out {:?} {:?}", atom_type, atom.nucleus);

            match atom.kind() {
                AtomKind::Boundary => {
                    debug!("boundary atoms are laid out by their inner atom");
                    continue;
                },
                AtomKind::Space { space } => {
                    self.flush_run();
                    self.x += Unit::<Mu>::new(*space) * self.font.mu();
                    continue;
                },
                AtomKind::Style(style) => {
                    self.flush_run();
                    self.set_style(*style);
                    continue;
                },
                AtomKind::Color { color, inner_list } => {
                    self.flush_run();
                    let mut display = layout_list(inner_list, self.settings, false);
                    display.set_local_text_color(Some(*color));
                    self.place(display);
                },
                AtomKind::TextColor { color, inner_list } => {
                    self.flush_run();
                    if let (Some(prev), Some(first)) = (prev_type, inner_list.atoms().first()) {
                        self.x += self.inter_element_space(prev, first.atom_type());
                    }
                    let mut display = layout_list(inner_list, self.settings, false);
                    display.set_local_text_color(Some(*color));
                    self.place(display);
                },
                AtomKind::ColorBox { color, inner_list } => {
                    self.flush_run();
                    let mut display = layout_list(inner_list, self.settings, false);
                    display.set_local_background_color(Some(*color));
                    self.place(display);
                },
                AtomKind::Radical(radical) => {
                    self.flush_run();
                    self.x += self.spacing_before(prev_type, AtomType::Ordinary);
                    let mut display = self.make_radical(&radical.radicand, atom.index_range);
                    if let Some(degree) = &radical.degree {
                        let settings = self.settings.with_style(LineStyle::ScriptOfScript).with_cramped(false);
                        let degree = layout_list(degree, settings, false);
                        display.set_degree(
                            degree,
                            self.font.radical_kern_before_degree(),
                            self.font.radical_kern_after_degree(),
                            self.font.radical_degree_bottom_raise_percent(),
                        );
                    }
                    self.place_with_scripts(display, &atom, Unit::ZERO);
                },
                AtomKind::Fraction(fraction) => {
                    self.flush_run();
                    self.x += self.spacing_before(prev_type, atom_type);
                    let display = self.make_fraction(fraction, atom.index_range);
                    self.place_with_scripts(display, &atom, Unit::ZERO);
                },
                AtomKind::LargeOperator { limits } => {
                    self.flush_run();
                    self.x += self.spacing_before(prev_type, atom_type);
                    self.make_large_op(&atom, *limits);
                },
                AtomKind::Inner(inner) => {
                    self.flush_run();
                    self.x += self.spacing_before(prev_type, atom_type);
                    let display = if inner.left_boundary().is_some() || inner.right_boundary().is_some() {
                        self.make_left_right(inner, atom.index_range)
                    } else {
                        layout_list(&inner.inner_list, self.settings, false)
                    };
                    self.place_with_scripts(display, &atom, Unit::ZERO);
                },
                AtomKind::Underline { inner_list } => {
                    self.flush_run();
                    self.x += self.spacing_before(prev_type, AtomType::Ordinary);
                    let display = self.make_underline(inner_list, atom.index_range);
                    self.place_with_scripts(display, &atom, Unit::ZERO);
                },
                AtomKind::Overline { inner_list } => {
                    self.flush_run();
                    self.x += self.spacing_before(prev_type, AtomType::Ordinary);
                    let display = self.make_overline(inner_list, atom.index_range);
                    self.place_with_scripts(display, &atom, Unit::ZERO);
                },
                AtomKind::Accent { inner_list } => {
                    self.flush_run();
                    self.x += self.spacing_before(prev_type, AtomType::Ordinary);
                    let (display, scripts_moved) = self.make_accent(&atom, inner_list);
                    if scripts_moved {
                        self.place(display);
                    } else {
                        self.place_with_scripts(display, &atom, Unit::ZERO);
                    }
                },
                AtomKind::Table(table) => {
                    self.flush_run();
                    self.x += self.spacing_before(prev_type, AtomType::Inner);
                    let display = self.make_table(table, atom.index_range);
                    self.place(display);
                },
                _ => self.add_symbol(&atom, prev_type),
            }

            prev_type = Some(match atom_type {
                AtomType::Underline | AtomType::Overline | AtomType::Accent => AtomType::Ordinary,
                AtomType::Table => AtomType::Inner,
                other => other,
            });
        }

        self.flush_run();

        if self.spaced {
            if let Some(prev) = prev_type {
                let space = self.inter_element_space(prev, AtomType::Close);
                if let Some(last) = self.displays.last_mut() {
                    last.set_width(last.width() + space);
                }
            }
        }
    }

    /// Ordinary symbols, operators, relations, delimiters, punctuation and placeholders go into the current run.
    fn add_symbol(&mut self, atom : &MathAtom, prev_type : Option<AtomType>) {
        let space = self.spacing_before(prev_type, atom.atom_type());
        if self.run.is_empty() {
            self.x += space;
        } else {
            self.run.kern(space);
        }

        let placeholder = atom.atom_type() == AtomType::Placeholder;
        if !self.run.is_empty() && self.run.placeholder != placeholder {
            self.flush_run();
        }
        self.run.push(&self.font, &atom.nucleus, atom.index_range, placeholder);

        if atom.has_scripts() {
            // scripts attach to the run, which must thus end here
            let index = self.flush_run_always();
            let delta = atom.nucleus.chars()
                .last()
                .and_then(|ch| self.font.glyph_for_char(ch))
                .map_or(Unit::ZERO, |glyph| self.font.italic_correction(glyph));
            if delta > Unit::ZERO && atom.subscript().is_none() {
                self.x += delta;
            }
            self.make_scripts(atom, index, atom.index_range.end().saturating_sub(1), delta);
        }
    }

    fn inter_element_space(&self, left : AtomType, right : AtomType) -> Unit<Pt> {
        match atom_space(left, right) {
            Some(spacing) => spacing.to_mu(self.settings.style) * self.font.mu(),
            None => {
                debug!("no spacing defined between {:?} and {:?}", left, right);
                Unit::ZERO
            },
        }
    }

    /// The space between the previous atom and one of type `current`
    fn spacing_before(&self, prev_type : Option<AtomType>, current : AtomType) -> Unit<Pt> {
        match prev_type {
            Some(prev) => self.inter_element_space(prev, current),
            None if self.spaced => self.inter_element_space(AtomType::Open, current),
            None => Unit::ZERO,
        }
    }

    fn flush_run(&mut self) {
        if !self.run.is_empty() {
            self.flush_run_always();
        }
    }

    /// Turns the run into a box, even an empty one, and returns its index.
    fn flush_run_always(&mut self) -> usize {
        let (mut display, placeholder) = self.run.take(&self.font);
        if placeholder {
            display.set_local_text_color(Some(self.settings.placeholder_color));
        }
        self.place(display)
    }

    /// Puts `display` at the current position and moves past it.
    fn place(&mut self, mut display : Display) -> usize {
        display.reposition(Point::new(self.x, Unit::ZERO));
        self.x += display.width();
        self.displays.push(display);
        self.displays.len() - 1
    }

    fn place_with_scripts(&mut self, display : Display, atom : &MathAtom, delta : Unit<Pt>) {
        let index = self.place(display);
        if atom.has_scripts() {
            self.make_scripts(atom, index, atom.index_range.location, delta);
        }
    }

    /// Adds the scripts of `atom` after the box at `display_index`.
    /// `delta` is the italic correction of the nucleus: the superscript moves right by that much.
    fn make_scripts(&mut self, atom : &MathAtom, display_index : usize, index : usize, delta : Unit<Pt>) {
        let script_font = font_for_style(self.settings.font, self.settings.script_style());
        let mut superscript_up = Unit::ZERO;
        let mut subscript_down = Unit::ZERO;

        if let Some(base) = self.displays.get_mut(display_index) {
            base.set_has_script(true);
            // the scripts of plain text only depend on the font
            if !matches!(base.kind(), DisplayKind::GlyphRun(_)) {
                superscript_up = base.ascent() - script_font.superscript_baseline_drop_max();
                subscript_down = base.descent() + script_font.subscript_baseline_drop_min();
            }
        }

        let superscript = match atom.superscript() {
            Some(superscript) => superscript,
            None => {
                let subscript = match atom.subscript() {
                    Some(subscript) => subscript,
                    None => return,
                };
                let mut subscript = layout_list(subscript, self.settings.subscript_variant(), false);
                subscript.set_line_position(LinePosition::Subscript, index);
                subscript_down = subscript_down
                    .max(self.font.subscript_shift_down())
                    .max(subscript.ascent() - self.font.subscript_top_max());
                subscript.reposition(Point::new(self.x, -subscript_down));
                self.x += subscript.width() + self.font.space_after_script();
                self.displays.push(subscript);
                return;
            },
        };

        let mut superscript = layout_list(superscript, self.settings.superscript_variant(), false);
        superscript.set_line_position(LinePosition::Superscript, index);
        let shift_up = if self.settings.cramped {
            self.font.superscript_shift_up_cramped()
        } else {
            self.font.superscript_shift_up()
        };
        superscript_up = superscript_up
            .max(shift_up)
            .max(superscript.descent() + self.font.superscript_bottom_min());

        let subscript = match atom.subscript() {
            Some(subscript) => subscript,
            None => {
                superscript.reposition(Point::new(self.x, superscript_up));
                self.x += superscript.width() + self.font.space_after_script();
                self.displays.push(superscript);
                return;
            },
        };

        let mut subscript = layout_list(subscript, self.settings.subscript_variant(), false);
        subscript.set_line_position(LinePosition::Subscript, index);
        subscript_down = subscript_down.max(self.font.subscript_shift_down());

        // the gap between the bottom of the superscript and the top of the subscript
        let gap = (superscript_up - superscript.descent()) + (subscript_down - subscript.ascent());
        let gap_min = self.font.sub_superscript_gap_min();
        if gap < gap_min {
            subscript_down += gap_min - gap;
            let bottom_delta = self.font.superscript_bottom_max_with_subscript() - (superscript_up - superscript.descent());
            if bottom_delta > Unit::ZERO {
                superscript_up += bottom_delta;
                subscript_down -= bottom_delta;
            }
        }

        superscript.reposition(Point::new(self.x + delta, superscript_up));
        subscript.reposition(Point::new(self.x, -subscript_down));
        self.x += (superscript.width() + delta).max(subscript.width()) + self.font.space_after_script();
        self.displays.push(superscript);
        self.displays.push(subscript);
    }

    fn make_fraction(&self, fraction : &Fraction, range : Range) -> Display {
        let display_style = self.settings.style == LineStyle::Display;
        let numerator   = layout_list(&fraction.numerator, self.settings.numerator(), false);
        let denominator = layout_list(&fraction.denominator, self.settings.denominator(), false);
        let font = &self.font;

        let (mut numerator_up, mut denominator_down) = match (fraction.has_rule, display_style) {
            (true, true)   => (font.fraction_numerator_display_style_shift_up(), font.fraction_denominator_display_style_shift_down()),
            (true, false)  => (font.fraction_numerator_shift_up(), font.fraction_denominator_shift_down()),
            (false, true)  => (font.stack_top_display_style_shift_up(), font.stack_bottom_display_style_shift_down()),
            (false, false) => (font.stack_top_shift_up(), font.stack_bottom_shift_down()),
        };

        let bar = font.axis_height();
        let thickness = if fraction.has_rule { font.fraction_rule_thickness() } else { Unit::ZERO };

        if fraction.has_rule {
            let numerator_gap_min = if display_style {
                font.fraction_numerator_display_style_gap_min()
            } else {
                font.fraction_numerator_gap_min()
            };
            let numerator_gap = (numerator_up - numerator.descent()) - (bar + thickness.scale(0.5));
            if numerator_gap < numerator_gap_min {
                numerator_up += numerator_gap_min - numerator_gap;
            }

            let denominator_gap_min = if display_style {
                font.fraction_denominator_display_style_gap_min()
            } else {
                font.fraction_denominator_gap_min()
            };
            let denominator_gap = (bar - thickness.scale(0.5)) - (denominator.ascent() - denominator_down);
            if denominator_gap < denominator_gap_min {
                denominator_down += denominator_gap_min - denominator_gap;
            }
        } else {
            let clearance = (numerator_up - numerator.descent()) - (denominator.ascent() - denominator_down);
            let gap_min = if display_style { font.stack_display_style_gap_min() } else { font.stack_gap_min() };
            if clearance < gap_min {
                let half = (gap_min - clearance).scale(0.5);
                numerator_up += half;
                denominator_down += half;
            }
        }

        let display = Display::fraction(FractionDisplay {
            numerator : Box::new(numerator),
            denominator : Box::new(denominator),
            numerator_up,
            denominator_down,
            line_position : bar,
            line_thickness : thickness,
        }, range);

        if fraction.left_delimiter.is_empty() && fraction.right_delimiter.is_empty() {
            return display;
        }
        let height = if display_style {
            font.fraction_delimiter_display_style_size()
        } else {
            font.fraction_delimiter_size()
        };
        self.wrap_in_delimiters(display, &fraction.left_delimiter, &fraction.right_delimiter, height, range)
    }

    /// `inner` between two delimiters at least `height` tall. Missing delimiters are skipped.
    fn wrap_in_delimiters(&self, mut inner : Display, left : &str, right : &str, height : Unit<Pt>, range : Range) -> Display {
        let mut children = Vec::with_capacity(3);
        let mut x = Unit::ZERO;

        if let Some(mut glyph) = glyphs::delimiter_glyph(&self.font, left, height, range) {
            glyph.reposition(Point::new(x, Unit::ZERO));
            x += glyph.width();
            children.push(glyph);
        }

        inner.reposition(Point::new(x, Unit::ZERO));
        x += inner.width();
        children.push(inner);

        if let Some(mut glyph) = glyphs::delimiter_glyph(&self.font, right, height, range) {
            glyph.reposition(Point::new(x, Unit::ZERO));
            children.push(glyph);
        }

        Display::math_list(children, range)
    }

    fn make_left_right(&self, inner : &Inner, range : Range) -> Display {
        let inner_display = layout_list(&inner.inner_list, self.settings, true);

        let axis = self.font.axis_height();
        let delta = (inner_display.ascent() - axis).max(inner_display.descent() + axis);
        let height = delta.scale(DELIMITER_FACTOR / 500.)
            .max(delta.scale(2.) - DELIMITER_SHORT_FALL);

        let left  = inner.left_boundary().map_or("", |boundary| boundary.nucleus.as_str());
        let right = inner.right_boundary().map_or("", |boundary| boundary.nucleus.as_str());
        self.wrap_in_delimiters(inner_display, left, right, height, range)
    }

    fn make_radical(&self, radicand : &MathList, range : Range) -> Display {
        let inner = layout_list(radicand, self.settings.cramped(), false);
        let font = &self.font;

        let mut clearance = if self.settings.style == LineStyle::Display {
            font.radical_display_style_vertical_gap()
        } else {
            font.radical_vertical_gap()
        };
        let thickness = font.radical_rule_thickness();
        let radical_height = inner.ascent() + inner.descent() + clearance + thickness;

        let sign = font.glyph_for_char('\u{221A}').unwrap_or_else(|| {
            debug!("the font has no radical sign");
            GlyphId::default()
        });
        let mut glyph = glyphs::stretched_glyph(font, sign, radical_height, range);

        // a taller glyph leaves more room around the radicand
        let delta = (glyph.ascent() + glyph.descent()) - radical_height;
        if delta > Unit::ZERO {
            clearance += delta.scale(0.5);
        }

        let radical_ascent = thickness + clearance + inner.ascent();
        let shift_up = radical_ascent - glyph.ascent();
        glyph.set_shift_down(-shift_up);

        let top_kern = font.radical_extra_ascender();
        let ascent = radical_ascent + top_kern;
        let descent = (glyph.ascent() + glyph.descent() - radical_ascent).max(inner.descent());

        Display::radical(RadicalDisplay {
            radicand : Box::new(inner),
            degree : None,
            glyph : Box::new(glyph),
            radical_shift : Unit::ZERO,
            kern_before_degree : Unit::ZERO,
            degree_raise : Unit::ZERO,
            top_kern,
            line_thickness : thickness,
        }, ascent, descent, range)
    }

    /// Lays out an operator together with its scripts or limits.
    fn make_large_op(&mut self, atom : &MathAtom, limits : bool) {
        let display_style = self.settings.style == LineStyle::Display;
        let limits = limits && display_style;

        let mut chars = atom.nucleus.chars();
        let (display, delta) = match (chars.next(), chars.next()) {
            (Some(ch), None) => {
                let glyph = match self.font.glyph_for_char(ch) {
                    Some(glyph) if display_style => self.font.larger_glyph(glyph),
                    Some(glyph) => glyph,
                    None => {
                        debug!("no glyph for operator {:?}", ch);
                        GlyphId::default()
                    },
                };
                let delta = self.font.italic_correction(glyph);
                let measured = Measured::new(&self.font, glyph);
                // operators are centred on the axis
                let shift_down = (measured.ascent - measured.descent).scale(0.5) - self.font.axis_height();
                let mut display = measured.into_display(&self.font, atom.index_range);
                if atom.subscript().is_some() && !limits {
                    // the subscript tucks under the slant of the operator
                    display.set_width(display.width() - delta);
                }
                display.set_shift_down(shift_down);
                (display, delta)
            },
            _ => {
                let mut run = Run::new();
                run.push(&self.font, &atom.nucleus, atom.index_range, false);
                (run.take(&self.font).0, Unit::ZERO)
            },
        };

        if !atom.has_scripts() {
            self.place(display);
        } else if limits {
            let display = self.make_limits(display, atom, delta);
            self.place(display);
        } else {
            self.place_with_scripts(display, atom, delta);
        }
    }

    fn make_limits(&self, nucleus : Display, atom : &MathAtom, delta : Unit<Pt>) -> Display {
        let font = &self.font;
        let upper = atom.superscript().map(|list| layout_list(list, self.settings.superscript_variant(), false));
        let lower = atom.subscript().map(|list| layout_list(list, self.settings.subscript_variant(), false));

        let upper_limit_gap = upper.as_ref().map_or(Unit::ZERO, |upper| {
            font.upper_limit_gap_min().max(font.upper_limit_baseline_rise_min() - upper.descent())
        });
        let lower_limit_gap = lower.as_ref().map_or(Unit::ZERO, |lower| {
            font.lower_limit_gap_min().max(font.lower_limit_baseline_drop_min() - lower.ascent())
        });

        Display::large_op_limits(LargeOpLimits {
            nucleus : Box::new(nucleus),
            upper : upper.map(Box::new),
            lower : lower.map(Box::new),
            limit_shift : delta.scale(0.5),
            upper_limit_gap,
            lower_limit_gap,
            extra_padding : font.limit_extra_ascender_descender(),
        }, atom.index_range)
    }

    fn make_underline(&self, inner_list : &MathList, range : Range) -> Display {
        let inner = layout_list(inner_list, self.settings, false);
        let font = &self.font;
        let thickness = font.underbar_rule_thickness();
        let gap = font.underbar_vertical_gap();

        let line_shift_up = -(inner.descent() + gap + thickness.scale(0.5));
        let ascent = inner.ascent();
        let descent = inner.descent() + gap + thickness + font.underbar_extra_descender();
        Display::line(LineDisplay { inner : Box::new(inner), line_shift_up, line_thickness : thickness }, ascent, descent, range)
    }

    fn make_overline(&self, inner_list : &MathList, range : Range) -> Display {
        let inner = layout_list(inner_list, self.settings.cramped(), false);
        let font = &self.font;
        let thickness = font.overbar_rule_thickness();
        let gap = font.overbar_vertical_gap();

        let line_shift_up = inner.ascent() + gap + thickness.scale(0.5);
        let ascent = inner.ascent() + gap + thickness + font.overbar_extra_ascender();
        let descent = inner.descent();
        Display::line(LineDisplay { inner : Box::new(inner), line_shift_up, line_thickness : thickness }, ascent, descent, range)
    }

    /// Lays out an accent over its accentee. The returned flag is set when the scripts of `atom`
    /// were given to the accentee, which happens when it is a single character.
    fn make_accent(&self, atom : &MathAtom, inner_list : &MathList) -> (Display, bool) {
        let settings = self.settings.cramped();
        let mut accentee = layout_list(inner_list, settings, false);

        // in a multi-scalar nucleus the combining mark is the last scalar
        let ch = match atom.nucleus.chars().last() {
            Some(ch) => ch,
            None => return (accentee, false),
        };
        let font = &self.font;
        let accent_glyph = font.glyph_for_char(ch).unwrap_or_else(|| {
            debug!("no glyph for accent {:?}", ch);
            GlyphId::default()
        });

        let mut accent = glyphs::horizontal_variant(font, accent_glyph, accentee.width());
        if accentee.ascent() > font.flattened_accent_base_height() {
            if let Some(flat) = self.flattened(accent.glyph) {
                accent = Measured::new(font, flat);
            }
        }

        let delta = accentee.ascent().min(font.accent_base_height());
        let skew = self.accent_skew(inner_list, accentee.width(), accent.glyph);
        let height = accentee.ascent() - delta;

        let mut scripts_moved = false;
        if atom.has_scripts() {
            if let Some(with_scripts) = with_scripts_of(inner_list, atom) {
                accentee = layout_list(&with_scripts, settings, false);
                scripts_moved = true;
            }
        }

        let mut accent_display = accent.into_display(font, atom.index_range);
        accent_display.reposition(Point::new(skew, height));
        let ascent = accentee.ascent().max(height + accent.ascent);

        let display = Display::accent(AccentDisplay {
            accentee : Box::new(accentee),
            accent : Box::new(accent_display),
        }, ascent, atom.index_range);
        (display, scripts_moved)
    }

    /// The flattened form of an accent, used over tall accentees
    fn flattened(&self, glyph : GlyphId) -> Option<GlyphId> {
        let name = self.font.glyph_name(glyph)?;
        self.font.glyph_with_name(&format!("{}.flac", name))
    }

    /// How far right of the accentee the accent goes, so that their attachment points line up.
    fn accent_skew(&self, inner_list : &MathList, accentee_width : Unit<Pt>, accent : GlyphId) -> Unit<Pt> {
        let accent_adjustment = self.font.top_accent_adjustment(accent);
        let accentee_adjustment = match single_char_accentee(inner_list).and_then(|atom| self.nucleus_glyph(atom)) {
            Some(glyph) => self.font.top_accent_adjustment(glyph),
            None => accentee_width.scale(0.5),
        };
        accentee_adjustment - accent_adjustment
    }

    /// The glyph of the last character of the nucleus, as it will be drawn
    fn nucleus_glyph(&self, atom : &MathAtom) -> Option<GlyphId> {
        let text = match atom.atom_type() {
            AtomType::Variable | AtomType::Number => style_str(&atom.nucleus, atom.font_style),
            _ => atom.nucleus.clone(),
        };
        let ch = text.chars().last()?;
        self.font.glyph_for_char(ch)
    }

    fn make_table(&self, table : &Table, range : Range) -> Display {
        let num_columns = table.num_columns();
        if num_columns == 0 || table.num_rows() == 0 {
            return Display::math_list(Vec::new(), range);
        }

        let settings = self.settings.with_cramped(false);
        let mut widths = vec![Unit::<Pt>::ZERO; num_columns];
        let mut cells : Vec<Vec<Display>> = Vec::with_capacity(table.num_rows());
        for row in &table.cells {
            let mut displays = Vec::with_capacity(row.len());
            for (column, cell) in row.iter().enumerate() {
                let display = layout_list(cell, settings, false);
                widths[column] = widths[column].max(display.width());
                displays.push(display);
            }
            cells.push(displays);
        }

        let column_spacing = Unit::<Mu>::new(table.inter_column_spacing) * self.font.mu();
        let mut rows = Vec::with_capacity(cells.len());
        for row in cells {
            let mut column_start = Unit::ZERO;
            let mut row_range : Option<Range> = None;
            let mut columns = Vec::with_capacity(row.len());

            for (column, mut cell) in row.into_iter().enumerate() {
                let width = widths[column];
                let x = match table.alignment(column) {
                    ColumnAlignment::Left   => column_start,
                    ColumnAlignment::Right  => column_start + width - cell.width(),
                    ColumnAlignment::Center => column_start + (width - cell.width()).scale(0.5),
                };
                row_range = Some(match row_range {
                    Some(current) => current.union(cell.range()),
                    None => cell.range(),
                });
                cell.reposition(Point::new(x, Unit::ZERO));
                column_start += width + column_spacing;
                columns.push(cell);
            }
            rows.push(Display::math_list(columns, row_range.unwrap_or(Range::ZERO)));
        }

        self.position_rows(&mut rows, table);
        Display::math_list(rows, range)
    }

    /// Stacks the rows of a table and centres the stack on the math axis.
    fn position_rows(&self, rows : &mut [Display], table : &Table) {
        let size = self.font.em();
        let openup = size.scale(table.inter_row_additional_spacing * JOT);
        let baseline_skip = openup + size.scale(BASELINE_SKIP);
        let line_skip = openup + size.scale(LINE_SKIP);
        let line_skip_limit = size.scale(LINE_SKIP_LIMIT);

        let mut y = Unit::ZERO;
        let mut ascent = Unit::ZERO;
        let mut prev_descent = Unit::ZERO;
        for (i, row) in rows.iter_mut().enumerate() {
            if i == 0 {
                ascent = row.ascent();
            } else {
                let mut skip = baseline_skip;
                if skip - (prev_descent + row.ascent()) < line_skip_limit {
                    // rows too close together are separated by lineskip
                    skip = prev_descent + row.ascent() + line_skip;
                }
                y -= skip;
            }
            row.reposition(Point::new(Unit::ZERO, y));
            prev_descent = row.descent();
        }

        let descent = -y + prev_descent;
        let shift_down = (ascent - descent).scale(0.5) - self.font.axis_height();
        for row in rows {
            let position = row.position();
            row.reposition(Point::new(position.x, position.y - shift_down));
        }
    }
}

fn single_char_accentee(list : &MathList) -> Option<&MathAtom> {
    match list.atoms() {
        [atom] if atom.nucleus.chars().count() == 1 && !atom.has_scripts() => Some(atom),
        _ => None,
    }
}

/// A copy of the single-character `inner_list` with the scripts of `atom`
fn with_scripts_of(inner_list : &MathList, atom : &MathAtom) -> Option<MathList> {
    single_char_accentee(inner_list)?;
    let mut list = inner_list.clone();
    let first = list.atoms_mut().first_mut()?;
    first.set_superscript(atom.superscript().cloned()).ok()?;
    first.set_subscript(atom.subscript().cloned()).ok()?;
    Some(list)
}
