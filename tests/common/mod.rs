#![allow(dead_code)]
pub mod recording;

use std::collections::HashMap;

use mathbox::atom::FontStyle;
use mathbox::dimensions::{units::FUnit, Unit};
use mathbox::font::style::style_char;
use mathbox::font::{GlyphId, GlyphMetrics, MathFont};
use mathbox::geometry::BBox;

pub const FIXTURE_TABLE : &str = include_str!("../data/fixture_math.json");

/// Font size of every test formula, in points
pub const SIZE : f64 = 10.;

struct Glyph {
    name : String,
    advance : i32,
    bounds : (i32, i32, i32, i32),
}

/// A small font: ASCII letters and digits, their math italic forms, a few operators and delimiters,
/// and the variants and assembly parts named by the fixture math table. 1000 units per em.
pub struct FixtureGlyphs {
    glyphs : Vec<Glyph>,
    by_name : HashMap<String, GlyphId>,
    by_char : HashMap<char, GlyphId>,
}

impl FixtureGlyphs {
    pub fn new() -> Self {
        let mut font = FixtureGlyphs { glyphs : Vec::new(), by_name : HashMap::new(), by_char : HashMap::new() };
        font.add(".notdef", 500, (0, 0, 500, 700));

        for ch in ('a' ..= 'z').chain('A' ..= 'Z') {
            font.add_char(ch, 500, (0, -200, 500, 700));
            let italic = style_char(ch, FontStyle::Default);
            if italic != ch {
                font.add_char(italic, 500, (0, -200, 500, 700));
            }
        }
        for ch in '0' ..= '9' {
            font.add_char(ch, 500, (0, 0, 500, 700));
        }

        for ch in ['+', '\u{2212}', '=', '<', '>', '\u{00D7}', '\u{00F7}'] {
            font.add_char(ch, 600, (50, -50, 550, 550));
        }
        font.add_char(',', 250, (0, -150, 250, 100));
        font.add_char('\u{25A1}', 600, (0, 0, 600, 600));

        for ch in ['(', ')'] {
            let name = font.add_char(ch, 300, (0, -250, 300, 750));
            font.add(&format!("{}.s1", name), 350, (0, -450, 350, 950));
            font.add(&format!("{}.s2", name), 400, (0, -700, 400, 1200));
            for part in ["bot", "ext", "top"] {
                font.add(&format!("{}.{}", name, part), 400, (0, 0, 400, 800));
            }
        }

        let sqrt = font.add_char('\u{221A}', 600, (0, -300, 600, 800));
        font.add(&format!("{}.s1", sqrt), 650, (0, -600, 650, 1400));
        font.add(&format!("{}.bot", sqrt), 650, (0, 0, 650, 1000));
        font.add(&format!("{}.ext", sqrt), 650, (0, 0, 650, 1000));
        font.add(&format!("{}.top", sqrt), 800, (0, 0, 800, 1000));

        let sum = font.add_char('\u{2211}', 900, (0, -250, 900, 750));
        font.add(&format!("{}.s1", sum), 1200, (0, -400, 1200, 1100));
        let int = font.add_char('\u{222B}', 500, (0, -400, 500, 1100));
        font.add(&format!("{}.s1", int), 600, (0, -800, 600, 1500));

        let hat = font.add_char('\u{0302}', 300, (0, 500, 300, 650));
        font.add(&format!("{}.w1", hat), 600, (0, 500, 600, 650));
        font.add(&format!("{}.flac", hat), 300, (0, 450, 300, 560));

        font
    }

    fn add(&mut self, name : &str, advance : i32, bounds : (i32, i32, i32, i32)) -> String {
        let gid = GlyphId(self.glyphs.len() as u16);
        self.glyphs.push(Glyph { name : name.to_string(), advance, bounds });
        self.by_name.insert(name.to_string(), gid);
        name.to_string()
    }

    fn add_char(&mut self, ch : char, advance : i32, bounds : (i32, i32, i32, i32)) -> String {
        let name = format!("u{:04X}", u32::from(ch));
        self.add(&name, advance, bounds);
        self.by_char.insert(ch, self.by_name[&name]);
        name
    }
}

impl GlyphMetrics for FixtureGlyphs {
    fn units_per_em(&self) -> u16 {
        1000
    }

    fn glyph_for_char(&self, codepoint : char) -> Option<GlyphId> {
        self.by_char.get(&codepoint).copied()
    }

    fn glyph_name(&self, gid : GlyphId) -> Option<String> {
        self.glyphs.get(usize::from(gid.0)).map(|glyph| glyph.name.clone())
    }

    fn glyph_with_name(&self, name : &str) -> Option<GlyphId> {
        self.by_name.get(name).copied()
    }

    fn advance(&self, gid : GlyphId) -> Unit<FUnit> {
        self.glyphs.get(usize::from(gid.0)).map_or(Unit::ZERO, |glyph| Unit::from(glyph.advance))
    }

    fn bounds(&self, gid : GlyphId) -> BBox<FUnit> {
        match self.glyphs.get(usize::from(gid.0)) {
            Some(Glyph { bounds : (x_min, y_min, x_max, y_max), .. }) =>
                BBox::new(Unit::from(*x_min), Unit::from(*y_min), Unit::from(*x_max), Unit::from(*y_max)),
            None => BBox::new(Unit::ZERO, Unit::ZERO, Unit::ZERO, Unit::ZERO),
        }
    }
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// The fixture font at [`SIZE`]
pub fn load_font() -> MathFont<FixtureGlyphs> {
    init_logger();
    MathFont::from_json(FIXTURE_TABLE, FixtureGlyphs::new(), Unit::new(SIZE))
        .expect("the fixture math table is valid")
}

/// Points to float, for assertions
pub fn pt(value : Unit<mathbox::dimensions::units::Pt>) -> f64 {
    value.to_unitless()
}

pub fn assert_close(actual : f64, expected : f64) {
    assert!((actual - expected).abs() < 1e-6, "expected {}, got {}", expected, actual);
}

/// The first box of the tree, in depth-first order, that satisfies `predicate`
pub fn find_box<'a>(display : &'a mathbox::display::Display, predicate : &dyn Fn(&mathbox::display::Display) -> bool) -> Option<&'a mathbox::display::Display> {
    if predicate(display) {
        return Some(display);
    }
    display.children().into_iter().find_map(|child| find_box(child, predicate))
}
