use mathbox::color::RGBA;
use mathbox::dimensions::units::{FontSize, Pt};
use mathbox::dimensions::Unit;
use mathbox::font::GlyphId;
use mathbox::geometry::{Point, Rect};
use mathbox::render::Canvas;

/// A canvas that remembers what it was asked to draw.
#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Recording {
    pub commands : Vec<DrawCmd>,
}

#[derive(Serialize, Deserialize)]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Fill {
        rect  : (f64, f64, f64, f64),
        color : RGBA,
    },
    Line {
        from      : (f64, f64),
        to        : (f64, f64),
        thickness : f64,
        color     : RGBA,
    },
    Glyph {
        pos      : (f64, f64),
        glyph_id : u16,
        size     : f64,
        color    : RGBA,
    },
}

fn xy(point : Point<Pt>) -> (f64, f64) {
    (point.x.to_unitless(), point.y.to_unitless())
}

impl Recording {
    pub fn glyphs(&self) -> impl Iterator<Item = &DrawCmd> {
        self.commands.iter().filter(|command| matches!(command, DrawCmd::Glyph { .. }))
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawCmd> {
        self.commands.iter().filter(|command| matches!(command, DrawCmd::Line { .. }))
    }

    pub fn fills(&self) -> impl Iterator<Item = &DrawCmd> {
        self.commands.iter().filter(|command| matches!(command, DrawCmd::Fill { .. }))
    }
}

impl Canvas for Recording {
    fn fill_rect(&mut self, rect : Rect, color : RGBA) {
        self.commands.push(DrawCmd::Fill {
            rect : (rect.x_min.to_unitless(), rect.y_min.to_unitless(), rect.x_max.to_unitless(), rect.y_max.to_unitless()),
            color,
        });
    }

    fn stroke_line(&mut self, from : Point<Pt>, to : Point<Pt>, thickness : Unit<Pt>, color : RGBA) {
        self.commands.push(DrawCmd::Line {
            from : xy(from),
            to : xy(to),
            thickness : thickness.to_unitless(),
            color,
        });
    }

    fn draw_glyphs(&mut self, glyphs : &[GlyphId], positions : &[Point<Pt>], size : Unit<FontSize>, color : RGBA) {
        for (glyph, position) in glyphs.iter().zip(positions) {
            self.commands.push(DrawCmd::Glyph {
                pos : xy(*position),
                glyph_id : glyph.0,
                size : size.to_unitless(),
                color,
            });
        }
    }
}
