//! Draw laid out boxes (see the `display` module) onto a [`Canvas`], such as a screen, an image or a recording.
//!
//! A [`Display`](crate::display::Display) tree is drawn with [`Display::draw`](crate::display::Display::draw), which resolves
//! the positions of every box and calls the canvas with absolute coordinates.
//!
//! ## Caveat on coordinate systems
//!
//! Coordinates are y-up: the y coordinate of a superscript is larger than the y coordinate of its base.
//! Screen-oriented canvases (y-down) need to flip the y-axis.

use crate::color::RGBA;
use crate::dimensions::units::{FontSize, Pt};
use crate::dimensions::Unit;
use crate::font::GlyphId;
use crate::geometry::{Point, Rect};

/// The graphical operations needed to draw a formula.
pub trait Canvas {
    /// Fills `rect` with `color`. Used for background colours.
    fn fill_rect(&mut self, rect : Rect, color : RGBA);

    /// Draws a line of the given thickness, centred on the segment from `from` to `to`.
    /// Used for fraction bars, radical rules, under- and overlines.
    fn stroke_line(&mut self, from : Point<Pt>, to : Point<Pt>, thickness : Unit<Pt>, color : RGBA);

    /// Draws `glyphs[i]` with its origin at `positions[i]`, both slices having the same length.
    fn draw_glyphs(&mut self, glyphs : &[GlyphId], positions : &[Point<Pt>], size : Unit<FontSize>, color : RGBA);
}
