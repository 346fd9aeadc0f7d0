//! The box tree produced by layout.
//!
//! Every [`Display`] knows its ascent, descent and width and its position relative to its parent.
//! Coordinates are y-up, in points: the baseline of a box is at `position.y`.
//!
//! Boxes come in two flavours of frames:
//!
//!  - a [`MathListDisplay`] keeps its children in its own frame: child positions are relative to the list,
//!  - composition boxes (fractions, radicals, limits, lines, accents) keep their children in the parent frame:
//!    moving the box with [`Display::reposition`] moves the children along.
//!
//! Repositioning never changes the size of a box.

use crate::atom::Range;
use crate::color::RGBA;
use crate::dimensions::units::{FontSize, Pt};
use crate::dimensions::Unit;
use crate::font::GlyphId;
use crate::geometry::{Point, Rect};
use crate::render::Canvas;

/// Where a math list sits relative to the line of its parent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LinePosition {
    /// on the baseline
    #[default]
    Regular,
    /// lowered, as a subscript
    Subscript,
    /// raised, as a superscript
    Superscript,
}

/// Fields shared by every kind of box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayBase {
    ascent   : Unit<Pt>,
    descent  : Unit<Pt>,
    width    : Unit<Pt>,
    position : Point<Pt>,
    range    : Range,
    has_script : bool,
    text_color : Option<RGBA>,
    local_text_color : Option<RGBA>,
    local_background_color : Option<RGBA>,
}

/// A run of glyphs on a common baseline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlyphRun {
    /// the glyphs, in drawing order
    pub glyphs : Vec<GlyphId>,
    /// horizontal offset of each glyph from the start of the run
    pub offsets : Vec<Unit<Pt>>,
    /// the (styled) characters of the run
    pub text : String,
    /// size the glyphs are drawn at
    pub font_size : Unit<FontSize>,
}

/// A horizontal list of boxes, in the list's own frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MathListDisplay {
    /// the boxes of the list, positioned relative to the list
    pub children : Vec<Display>,
    /// regular line or script
    pub line_position : LinePosition,
    /// for scripts, the index of the atom of the parent list that carries them
    pub index : Option<usize>,
}

/// A single glyph, e.g. a large operator or a delimiter variant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlyphDisplay {
    /// the glyph
    pub glyph : GlyphId,
    /// how much the glyph is lowered from the baseline
    pub shift_down : Unit<Pt>,
    /// size the glyph is drawn at
    pub font_size : Unit<FontSize>,
}

/// A glyph assembled vertically from parts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlyphConstruction {
    /// the parts, from bottom to top
    pub glyphs : Vec<GlyphId>,
    /// vertical offset of each part from the bottom of the construction
    pub offsets : Vec<Unit<Pt>>,
    /// how much the construction is lowered from the baseline
    pub shift_down : Unit<Pt>,
    /// size the parts are drawn at
    pub font_size : Unit<FontSize>,
}

/// An operator with limits stacked above and below
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LargeOpLimits {
    /// the operator
    pub nucleus : Box<Display>,
    /// limit above the operator
    pub upper : Option<Box<Display>>,
    /// limit below the operator
    pub lower : Option<Box<Display>>,
    /// horizontal shift of the limits from the centre (half the italic correction of the operator)
    pub limit_shift : Unit<Pt>,
    /// gap between the operator and the upper limit
    pub upper_limit_gap : Unit<Pt>,
    /// gap between the operator and the lower limit
    pub lower_limit_gap : Unit<Pt>,
    /// space added above the upper limit and below the lower limit
    pub extra_padding : Unit<Pt>,
}

/// A numerator over a denominator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FractionDisplay {
    /// top part
    pub numerator : Box<Display>,
    /// bottom part
    pub denominator : Box<Display>,
    /// distance from the baseline to the baseline of the numerator
    pub numerator_up : Unit<Pt>,
    /// distance from the baseline to the baseline of the denominator
    pub denominator_down : Unit<Pt>,
    /// height of the fraction rule above the baseline
    pub line_position : Unit<Pt>,
    /// zero for stacks
    pub line_thickness : Unit<Pt>,
}

/// A root sign over a radicand, with an optional degree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadicalDisplay {
    /// what is under the root sign
    pub radicand : Box<Display>,
    /// the degree, in the crook of the sign
    pub degree : Option<Box<Display>>,
    /// the root sign, in the frame of the radical shifted by `radical_shift`
    pub glyph : Box<Display>,
    /// horizontal offset of the root sign, room left for the degree
    pub radical_shift : Unit<Pt>,
    /// horizontal offset of the degree
    pub kern_before_degree : Unit<Pt>,
    /// vertical offset of the degree
    pub degree_raise : Unit<Pt>,
    /// space above the rule
    pub top_kern : Unit<Pt>,
    /// thickness of the rule over the radicand
    pub line_thickness : Unit<Pt>,
}

/// An underlined or overlined box
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineDisplay {
    /// the box the line is drawn under or over
    pub inner : Box<Display>,
    /// height of the centre of the line above the baseline
    pub line_shift_up : Unit<Pt>,
    /// thickness of the line
    pub line_thickness : Unit<Pt>,
}

/// An accent over a box
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccentDisplay {
    /// the accented box
    pub accentee : Box<Display>,
    /// the accent glyph, positioned relative to the accent box
    pub accent : Box<Display>,
}

/// The kinds of boxes, with the data that only boxes of that kind have.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DisplayKind {
    /// see [`GlyphRun`]
    GlyphRun(GlyphRun),
    /// see [`MathListDisplay`]
    MathList(MathListDisplay),
    /// see [`GlyphDisplay`]
    Glyph(GlyphDisplay),
    /// see [`GlyphConstruction`]
    GlyphConstruction(GlyphConstruction),
    /// see [`LargeOpLimits`]
    LargeOpLimits(LargeOpLimits),
    /// see [`FractionDisplay`]
    Fraction(FractionDisplay),
    /// see [`RadicalDisplay`]
    Radical(RadicalDisplay),
    /// see [`LineDisplay`]
    Line(LineDisplay),
    /// see [`AccentDisplay`]
    Accent(AccentDisplay),
}

/// A laid out box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Display {
    base : DisplayBase,
    kind : DisplayKind,
}

impl Display {
    /// A box of the given kind and size, at the origin.
    /// The size of composition boxes is derived from their children instead: use the dedicated constructors.
    pub fn new(kind : DisplayKind, ascent : Unit<Pt>, descent : Unit<Pt>, width : Unit<Pt>, range : Range) -> Self {
        Self {
            base : DisplayBase {
                ascent,
                descent,
                width,
                position : Point::ORIGIN,
                range,
                has_script : false,
                text_color : None,
                local_text_color : None,
                local_background_color : None,
            },
            kind,
        }
    }

    /// A list of boxes whose positions are relative to the list.
    /// The list covers every child: its ascent, descent and width are never negative.
    pub fn math_list(children : Vec<Display>, range : Range) -> Self {
        let mut ascent  = Unit::ZERO;
        let mut descent = Unit::ZERO;
        let mut width   = Unit::ZERO;
        for child in &children {
            let position = child.position();
            ascent  = ascent.max(child.ascent() + position.y);
            descent = descent.max(child.descent() - position.y);
            width   = width.max(child.width() + position.x);
        }
        let list = MathListDisplay { children, line_position : LinePosition::Regular, index : None };
        Self::new(DisplayKind::MathList(list), ascent, descent, width, range)
    }

    /// A fraction at the origin. The children are centred over the wider of the two.
    pub fn fraction(fraction : FractionDisplay, range : Range) -> Self {
        if range.length != 1 {
            warn!("fraction box with a range of length {}", range.length);
        }
        let width = fraction.numerator.width().max(fraction.denominator.width());
        let mut display = Self::new(DisplayKind::Fraction(fraction), Unit::ZERO, Unit::ZERO, width, range);
        display.reposition(Point::ORIGIN);
        display
    }

    /// A radical at the origin, without degree (see [`Display::set_degree`]).
    pub fn radical(radical : RadicalDisplay, ascent : Unit<Pt>, descent : Unit<Pt>, range : Range) -> Self {
        let width = radical.radical_shift + radical.glyph.width() + radical.radicand.width();
        let mut display = Self::new(DisplayKind::Radical(radical), ascent, descent, width, range);
        display.reposition(Point::ORIGIN);
        display
    }

    /// Limits around an operator, at the origin. The box is as wide as the widest of its parts.
    pub fn large_op_limits(limits : LargeOpLimits, range : Range) -> Self {
        let mut width = limits.nucleus.width();
        if let Some(upper) = &limits.upper {
            width = width.max(upper.width());
        }
        if let Some(lower) = &limits.lower {
            width = width.max(lower.width());
        }
        let mut display = Self::new(DisplayKind::LargeOpLimits(limits), Unit::ZERO, Unit::ZERO, width, range);
        display.reposition(Point::ORIGIN);
        display
    }

    /// An under- or overline at the origin, as wide as the box it decorates.
    pub fn line(line : LineDisplay, ascent : Unit<Pt>, descent : Unit<Pt>, range : Range) -> Self {
        let width = line.inner.width();
        let mut display = Self::new(DisplayKind::Line(line), ascent, descent, width, range);
        display.reposition(Point::ORIGIN);
        display
    }

    /// An accent at the origin, as wide and deep as its accentee.
    pub fn accent(accent : AccentDisplay, ascent : Unit<Pt>, range : Range) -> Self {
        let width   = accent.accentee.width();
        let descent = accent.accentee.descent();
        let mut display = Self::new(DisplayKind::Accent(accent), ascent, descent, width, range);
        display.reposition(Point::ORIGIN);
        display
    }

    /// Distance from the baseline to the top of the box
    pub fn ascent(&self) -> Unit<Pt> {
        match &self.kind {
            DisplayKind::Glyph(glyph) => self.base.ascent - glyph.shift_down,
            DisplayKind::GlyphConstruction(glyph) => self.base.ascent - glyph.shift_down,
            DisplayKind::Fraction(fraction) => fraction.numerator.ascent() + fraction.numerator_up,
            DisplayKind::LargeOpLimits(limits) => match &limits.upper {
                Some(upper) => limits.nucleus.ascent() + limits.extra_padding
                    + upper.ascent() + limits.upper_limit_gap + upper.descent(),
                None => limits.nucleus.ascent(),
            },
            _ => self.base.ascent,
        }
    }

    /// Distance from the baseline to the bottom of the box
    pub fn descent(&self) -> Unit<Pt> {
        match &self.kind {
            DisplayKind::Glyph(glyph) => self.base.descent + glyph.shift_down,
            DisplayKind::GlyphConstruction(glyph) => self.base.descent + glyph.shift_down,
            DisplayKind::Fraction(fraction) => fraction.denominator.descent() + fraction.denominator_down,
            DisplayKind::LargeOpLimits(limits) => match &limits.lower {
                Some(lower) => limits.nucleus.descent() + limits.extra_padding
                    + lower.ascent() + limits.lower_limit_gap + lower.descent(),
                None => limits.nucleus.descent(),
            },
            _ => self.base.descent,
        }
    }

    /// Advance width of the box
    pub fn width(&self) -> Unit<Pt> {
        self.base.width
    }

    /// Position of the start of the baseline of the box, in the frame of its parent
    pub fn position(&self) -> Point<Pt> {
        self.base.position
    }

    /// The range of the atoms the box was made from
    pub fn range(&self) -> Range {
        self.base.range
    }

    /// Whether scripts were attached to this box
    pub fn has_script(&self) -> bool {
        self.base.has_script
    }

    /// The colour the box is drawn with
    pub fn text_color(&self) -> Option<RGBA> {
        self.base.text_color
    }

    /// A colour that overrides the text colour inherited from the parent
    pub fn local_text_color(&self) -> Option<RGBA> {
        self.base.local_text_color
    }

    /// The colour of the background of the box
    pub fn local_background_color(&self) -> Option<RGBA> {
        self.base.local_background_color
    }

    /// The data particular to the kind of the box
    pub fn kind(&self) -> &DisplayKind {
        &self.kind
    }

    /// Direct children of the box, in drawing order
    ///
    /// Children of a math list are positioned relative to the list. The root sign of a radical is positioned
    /// relative to the radical shifted by `radical_shift`, and the accent glyph relative to the accent box.
    /// All other children of composite boxes are positioned in the frame of the parent, and move with
    /// [`Display::reposition`].
    pub fn children(&self) -> Vec<&Display> {
        match &self.kind {
            DisplayKind::MathList(list) => list.children.iter().collect(),
            DisplayKind::Fraction(fraction) => vec![&fraction.numerator, &fraction.denominator],
            DisplayKind::Radical(radical) => {
                let mut children = vec![radical.radicand.as_ref(), radical.glyph.as_ref()];
                children.extend(radical.degree.as_deref());
                children
            },
            DisplayKind::LargeOpLimits(limits) => {
                let mut children = vec![limits.nucleus.as_ref()];
                children.extend(limits.upper.as_deref());
                children.extend(limits.lower.as_deref());
                children
            },
            DisplayKind::Line(line) => vec![&line.inner],
            DisplayKind::Accent(accent) => vec![&accent.accentee, &accent.accent],
            DisplayKind::GlyphRun(_) | DisplayKind::Glyph(_) | DisplayKind::GlyphConstruction(_) => Vec::new(),
        }
    }

    /// The rectangle covered by the box, in the frame of its parent
    pub fn display_bounds(&self) -> Rect {
        let position = self.position();
        let descent = self.descent();
        Rect::from_dims(position.x, position.y - descent, self.width(), self.ascent() + descent)
    }

    /// Marks the box as carrying scripts
    pub fn set_has_script(&mut self, has_script : bool) {
        self.base.has_script = has_script;
    }

    /// Sets the colour that overrides the inherited text colour
    pub fn set_local_text_color(&mut self, color : Option<RGBA>) {
        self.base.local_text_color = color;
    }

    /// Sets the colour of the background
    pub fn set_local_background_color(&mut self, color : Option<RGBA>) {
        self.base.local_background_color = color;
    }

    pub(crate) fn set_width(&mut self, width : Unit<Pt>) {
        self.base.width = width;
    }

    pub(crate) fn set_range(&mut self, range : Range) {
        self.base.range = range;
    }

    /// Marks a math list as the scripts of the atom at `index` of the parent list.
    pub(crate) fn set_line_position(&mut self, line_position : LinePosition, index : usize) {
        if let DisplayKind::MathList(list) = &mut self.kind {
            list.line_position = line_position;
            list.index = Some(index);
        }
    }

    /// Lowers a glyph or a glyph construction. Other boxes cannot be shifted.
    pub fn set_shift_down(&mut self, shift : Unit<Pt>) {
        match &mut self.kind {
            DisplayKind::Glyph(glyph) => glyph.shift_down = shift,
            DisplayKind::GlyphConstruction(glyph) => glyph.shift_down = shift,
            _ => debug!("only glyphs can be shifted down"),
        }
    }

    /// Sets the degree of a radical.
    ///
    /// The degree sits `kern_before` after the start of the box, raised by `raise_percent` of the height of the radical;
    /// the root sign follows `kern_after` after the degree. The root sign never moves left of the start of the box.
    pub fn set_degree(&mut self, degree : Display, kern_before : Unit<Pt>, kern_after : Unit<Pt>, raise_percent : f64) {
        let raise = (self.ascent() - self.descent()).scale(raise_percent);
        match &mut self.kind {
            DisplayKind::Radical(radical) => {
                let mut kern_before = kern_before;
                let mut shift = kern_before + degree.width() + kern_after;
                if shift < Unit::ZERO {
                    // the degree is narrower than the negative kern after it
                    kern_before = kern_before - shift;
                    shift = Unit::ZERO;
                }
                radical.kern_before_degree = kern_before;
                radical.degree_raise = raise;
                radical.radical_shift = shift;
                radical.degree = Some(Box::new(degree));
                self.base.width = shift + radical.glyph.width() + radical.radicand.width();
            },
            _ => {
                debug!("only radicals have a degree");
                return;
            },
        }
        self.reposition(self.position());
    }

    /// Moves the box to `origin` (in the frame of its parent).
    /// Children of composition boxes live in the same frame and move along; the size of the box is unchanged.
    pub fn reposition(&mut self, origin : Point<Pt>) {
        self.base.position = origin;
        let width = self.base.width;

        match &mut self.kind {
            DisplayKind::Fraction(fraction) => {
                let numerator_x = origin.x + (width - fraction.numerator.width()).scale(0.5);
                fraction.numerator.reposition(Point::new(numerator_x, origin.y + fraction.numerator_up));

                let denominator_x = origin.x + (width - fraction.denominator.width()).scale(0.5);
                fraction.denominator.reposition(Point::new(denominator_x, origin.y - fraction.denominator_down));
            },
            DisplayKind::Radical(radical) => {
                let radicand_x = origin.x + radical.radical_shift + radical.glyph.width();
                radical.radicand.reposition(Point::new(radicand_x, origin.y));
                if let Some(degree) = &mut radical.degree {
                    degree.reposition(origin.translate(radical.kern_before_degree, radical.degree_raise));
                }
            },
            DisplayKind::LargeOpLimits(limits) => {
                let nucleus_ascent = limits.nucleus.ascent();
                let nucleus_descent = limits.nucleus.descent();
                if let Some(upper) = &mut limits.upper {
                    let x = origin.x + limits.limit_shift + (width - upper.width()).scale(0.5);
                    let y = origin.y + nucleus_ascent + limits.upper_limit_gap + upper.descent();
                    upper.reposition(Point::new(x, y));
                }
                if let Some(lower) = &mut limits.lower {
                    let x = origin.x - limits.limit_shift + (width - lower.width()).scale(0.5);
                    let y = origin.y - nucleus_descent - limits.lower_limit_gap - lower.ascent();
                    lower.reposition(Point::new(x, y));
                }
                let nucleus_x = origin.x + (width - limits.nucleus.width()).scale(0.5);
                limits.nucleus.reposition(Point::new(nucleus_x, origin.y));
            },
            DisplayKind::Line(line) => line.inner.reposition(origin),
            DisplayKind::Accent(accent) => accent.accentee.reposition(origin),
            DisplayKind::GlyphRun(_)
            | DisplayKind::MathList(_)
            | DisplayKind::Glyph(_)
            | DisplayKind::GlyphConstruction(_) => (),
        }
    }

    /// Sets the colour of the box and of its descendants.
    /// Children of math lists that have a local text colour keep it.
    pub fn set_text_color(&mut self, color : Option<RGBA>) {
        self.base.text_color = color;

        match &mut self.kind {
            DisplayKind::MathList(list) => for child in &mut list.children {
                let color = child.base.local_text_color.or(color);
                child.set_text_color(color);
            },
            DisplayKind::Fraction(fraction) => {
                fraction.numerator.set_text_color(color);
                fraction.denominator.set_text_color(color);
            },
            DisplayKind::Radical(radical) => {
                radical.radicand.set_text_color(color);
                radical.glyph.set_text_color(color);
                if let Some(degree) = &mut radical.degree {
                    degree.set_text_color(color);
                }
            },
            DisplayKind::LargeOpLimits(limits) => {
                limits.nucleus.set_text_color(color);
                if let Some(upper) = &mut limits.upper {
                    upper.set_text_color(color);
                }
                if let Some(lower) = &mut limits.lower {
                    lower.set_text_color(color);
                }
            },
            DisplayKind::Line(line) => line.inner.set_text_color(color),
            DisplayKind::Accent(accent) => {
                accent.accentee.set_text_color(color);
                accent.accent.set_text_color(color);
            },
            DisplayKind::GlyphRun(_) | DisplayKind::Glyph(_) | DisplayKind::GlyphConstruction(_) => (),
        }
    }

    /// Draws the box, taking its position in the frame of the canvas.
    pub fn draw<C : Canvas + ?Sized>(&self, canvas : &mut C) {
        self.draw_at(canvas, Point::ORIGIN);
    }

    /// Draws the box in a frame whose origin is at `offset` on the canvas.
    pub fn draw_at<C : Canvas + ?Sized>(&self, canvas : &mut C, offset : Point<Pt>) {
        if let Some(background) = self.base.local_background_color {
            canvas.fill_rect(self.display_bounds().translate(offset.x, offset.y), background);
        }

        let origin = offset + self.base.position;
        let color = self.base.text_color.unwrap_or_default();

        match &self.kind {
            DisplayKind::GlyphRun(run) => {
                let positions : Vec<_> = run.offsets.iter()
                    .map(|&dx| origin.translate(dx, Unit::ZERO))
                    .collect();
                canvas.draw_glyphs(&run.glyphs, &positions, run.font_size, color);
            },
            DisplayKind::MathList(list) => for child in &list.children {
                child.draw_at(canvas, origin);
            },
            DisplayKind::Glyph(glyph) => {
                let position = origin.translate(Unit::ZERO, -glyph.shift_down);
                canvas.draw_glyphs(&[glyph.glyph], &[position], glyph.font_size, color);
            },
            DisplayKind::GlyphConstruction(construction) => {
                let positions : Vec<_> = construction.offsets.iter()
                    .map(|&dy| origin.translate(Unit::ZERO, dy - construction.shift_down))
                    .collect();
                canvas.draw_glyphs(&construction.glyphs, &positions, construction.font_size, color);
            },
            DisplayKind::LargeOpLimits(limits) => {
                limits.nucleus.draw_at(canvas, offset);
                if let Some(upper) = &limits.upper {
                    upper.draw_at(canvas, offset);
                }
                if let Some(lower) = &limits.lower {
                    lower.draw_at(canvas, offset);
                }
            },
            DisplayKind::Fraction(fraction) => {
                fraction.numerator.draw_at(canvas, offset);
                fraction.denominator.draw_at(canvas, offset);
                if fraction.line_thickness > Unit::ZERO {
                    let y = origin.y + fraction.line_position;
                    let from = Point::new(origin.x, y);
                    let to = Point::new(origin.x + self.width(), y);
                    canvas.stroke_line(from, to, fraction.line_thickness, color);
                }
            },
            DisplayKind::Radical(radical) => {
                radical.radicand.draw_at(canvas, offset);
                if let Some(degree) = &radical.degree {
                    degree.draw_at(canvas, offset);
                }

                let sign_origin = origin.translate(radical.radical_shift, Unit::ZERO);
                radical.glyph.draw_at(canvas, sign_origin);

                if radical.line_thickness > Unit::ZERO {
                    let y = sign_origin.y + self.ascent() - radical.top_kern - radical.line_thickness.scale(0.5);
                    let from = Point::new(sign_origin.x + radical.glyph.width(), y);
                    let to = from.translate(radical.radicand.width(), Unit::ZERO);
                    canvas.stroke_line(from, to, radical.line_thickness, color);
                }
            },
            DisplayKind::Line(line) => {
                line.inner.draw_at(canvas, offset);
                if line.line_thickness > Unit::ZERO {
                    let from = Point::new(origin.x, origin.y + line.line_shift_up);
                    let to = from.translate(line.inner.width(), Unit::ZERO);
                    canvas.stroke_line(from, to, line.line_thickness, color);
                }
            },
            DisplayKind::Accent(accent) => {
                accent.accentee.draw_at(canvas, offset);
                accent.accent.draw_at(canvas, origin);
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(v : f64) -> Unit<Pt> { Unit::new(v) }

    fn glyph_box(width : f64, ascent : f64, descent : f64) -> Display {
        let run = GlyphRun {
            glyphs : vec![GlyphId(1)],
            offsets : vec![Unit::ZERO],
            text : "x".to_string(),
            font_size : Unit::new(20.),
        };
        Display::new(DisplayKind::GlyphRun(run), pt(ascent), pt(descent), pt(width), Range::new(0, 1))
    }

    fn sample_fraction() -> Display {
        Display::fraction(FractionDisplay {
            numerator   : Box::new(glyph_box(10., 5., 1.)),
            denominator : Box::new(glyph_box(6., 4., 2.)),
            numerator_up : pt(8.),
            denominator_down : pt(7.),
            line_position : pt(3.),
            line_thickness : pt(1.),
        }, Range::new(0, 1))
    }

    fn children(display : &Display) -> (Point<Pt>, Point<Pt>) {
        match display.kind() {
            DisplayKind::Fraction(f) => (f.numerator.position(), f.denominator.position()),
            _ => unreachable!(),
        }
    }

    #[test]
    fn fraction_centres_children() {
        let fraction = sample_fraction();
        assert_eq!(fraction.width(), pt(10.));
        assert_eq!(fraction.ascent(), pt(13.));
        assert_eq!(fraction.descent(), pt(9.));

        let (numerator, denominator) = children(&fraction);
        assert_eq!(numerator, Point::new(pt(0.), pt(8.)));
        assert_eq!(denominator.x - fraction.position().x, pt(2.));
        assert_eq!(denominator.y, pt(-7.));
    }

    #[test]
    fn reposition_moves_children_and_keeps_size() {
        let mut fraction = sample_fraction();
        let before = (fraction.width(), fraction.ascent(), fraction.descent());

        fraction.reposition(Point::new(pt(5.), pt(1.)));
        let (numerator, denominator) = children(&fraction);
        assert_eq!(numerator, Point::new(pt(5.), pt(9.)));
        assert_eq!(denominator, Point::new(pt(7.), pt(-6.)));
        assert_eq!((fraction.width(), fraction.ascent(), fraction.descent()), before);
    }

    #[test]
    fn sign_and_accent_glyphs_stay_local() {
        let mut radical = Display::radical(RadicalDisplay {
            radicand : Box::new(glyph_box(10., 5., 1.)),
            degree : None,
            glyph : Box::new(glyph_box(6., 8., 2.)),
            radical_shift : pt(2.),
            kern_before_degree : Unit::ZERO,
            degree_raise : Unit::ZERO,
            top_kern : pt(1.),
            line_thickness : pt(1.),
        }, pt(9.), pt(2.), Range::new(0, 1));
        radical.reposition(Point::new(pt(5.), pt(1.)));
        let DisplayKind::Radical(parts) = radical.kind() else { unreachable!() };
        assert_eq!(parts.radicand.position(), Point::new(pt(13.), pt(1.)));
        assert_eq!(parts.glyph.position(), Point::ORIGIN);

        let mut accent = Display::accent(AccentDisplay {
            accentee : Box::new(glyph_box(10., 5., 1.)),
            accent : Box::new(glyph_box(4., 2., 0.)),
        }, pt(8.), Range::new(0, 1));
        accent.reposition(Point::new(pt(5.), pt(1.)));
        let DisplayKind::Accent(parts) = accent.kind() else { unreachable!() };
        let (accentee, glyph) = (parts.accentee.position(), parts.accent.position());
        assert_eq!(accentee, Point::new(pt(5.), pt(1.)));
        assert_eq!(glyph, Point::ORIGIN);
        assert_eq!(accent.children().len(), 2);
    }

    #[test]
    fn math_list_covers_children() {
        let mut raised = glyph_box(4., 3., 1.);
        raised.reposition(Point::new(pt(10.), pt(2.)));
        let list = Display::math_list(vec![glyph_box(10., 5., 1.), raised], Range::new(0, 2));
        assert_eq!(list.width(), pt(14.));
        assert_eq!(list.ascent(), pt(5.));
        assert_eq!(list.descent(), pt(1.));

        let bounds = list.display_bounds();
        assert_eq!(bounds, Rect::new(pt(0.), pt(-1.), pt(14.), pt(5.)));

        let empty = Display::math_list(Vec::new(), Range::ZERO);
        assert_eq!((empty.width(), empty.ascent(), empty.descent()), (pt(0.), pt(0.), pt(0.)));
    }

    #[test]
    fn shifted_glyphs() {
        let glyph = GlyphDisplay { glyph : GlyphId(3), shift_down : Unit::ZERO, font_size : Unit::new(10.) };
        let mut display = Display::new(DisplayKind::Glyph(glyph), pt(8.), pt(2.), pt(5.), Range::new(0, 1));
        display.set_shift_down(pt(3.));
        assert_eq!(display.ascent(), pt(5.));
        assert_eq!(display.descent(), pt(5.));
    }

    #[test]
    fn local_text_colour_wins() {
        let mut coloured = glyph_box(1., 1., 0.);
        coloured.set_local_text_color(Some(RGBA::RED));
        let mut list = Display::math_list(vec![glyph_box(1., 1., 0.), coloured], Range::new(0, 2));
        list.set_text_color(Some(RGBA::BLACK));

        let colours : Vec<_> = list.children().iter().map(|child| child.text_color()).collect();
        assert_eq!(colours, vec![Some(RGBA::BLACK), Some(RGBA::RED)]);
    }

    #[test]
    fn degree_shifts_the_root_sign() {
        let sign = glyph_box(6., 12., 2.);
        let mut radical = Display::radical(RadicalDisplay {
            radicand : Box::new(glyph_box(10., 5., 1.)),
            degree : None,
            glyph : Box::new(sign),
            radical_shift : Unit::ZERO,
            kern_before_degree : Unit::ZERO,
            degree_raise : Unit::ZERO,
            top_kern : pt(1.),
            line_thickness : pt(1.),
        }, pt(12.), pt(2.), Range::new(0, 1));
        assert_eq!(radical.width(), pt(16.));

        radical.set_degree(glyph_box(3., 2., 0.), pt(1.), pt(-2.), 0.5);
        assert_eq!(radical.width(), pt(18.));
        match radical.kind() {
            DisplayKind::Radical(r) => {
                assert_eq!(r.radical_shift, pt(2.));
                assert_eq!(r.degree.as_ref().map(|d| d.position()), Some(Point::new(pt(1.), pt(5.))));
                assert_eq!(r.radicand.position(), Point::new(pt(8.), pt(0.)));
            },
            _ => unreachable!(),
        }

        // a degree narrower than the kern after it
        radical.set_degree(glyph_box(1., 2., 0.), pt(0.), pt(-3.), 0.5);
        match radical.kind() {
            DisplayKind::Radical(r) => {
                assert_eq!(r.radical_shift, pt(0.));
                assert_eq!(r.kern_before_degree, pt(2.));
            },
            _ => unreachable!(),
        }
        assert_eq!(radical.width(), pt(16.));
    }
}
