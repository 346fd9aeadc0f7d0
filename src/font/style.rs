//! Font styles are realised by substituting characters from the Mathematical Alphanumeric Symbols block
//! (U+1D400 to U+1D7FF), which math fonts cover, e.g. `x` in the default style becomes U+1D465 MATHEMATICAL ITALIC SMALL X.
//!
//! A few letters were encoded before the block existed and are holes in it (e.g. the italic `h` is U+210E PLANCK CONSTANT).

use crate::atom::FontStyle;

/// Starts of the alphabets of a style in the Mathematical Alphanumeric Symbols block
struct Alphabets {
    upper  : Option<u32>,
    lower  : Option<u32>,
    digits : Option<u32>,
    greek_upper : Option<u32>,
    greek_lower : Option<u32>,
}

const NONE : Alphabets = Alphabets { upper: None, lower: None, digits: None, greek_upper: None, greek_lower: None };

fn alphabets(style : FontStyle) -> Alphabets {
    match style {
        FontStyle::Default | FontStyle::Italic => Alphabets {
            upper : Some(0x1D434), lower : Some(0x1D44E),
            greek_upper : matches!(style, FontStyle::Italic).then_some(0x1D6E2),
            greek_lower : Some(0x1D6FC),
            ..NONE
        },
        FontStyle::Roman => NONE,
        FontStyle::Bold => Alphabets {
            upper : Some(0x1D400), lower : Some(0x1D41A), digits : Some(0x1D7CE),
            greek_upper : Some(0x1D6A8), greek_lower : Some(0x1D6C2),
        },
        FontStyle::BoldItalic => Alphabets {
            upper : Some(0x1D468), lower : Some(0x1D482), digits : Some(0x1D7CE),
            greek_upper : Some(0x1D71C), greek_lower : Some(0x1D736),
        },
        FontStyle::Caligraphic => Alphabets { upper : Some(0x1D49C), lower : Some(0x1D4B6), ..NONE },
        FontStyle::Typewriter  => Alphabets { upper : Some(0x1D670), lower : Some(0x1D68A), digits : Some(0x1D7F6), ..NONE },
        FontStyle::SansSerif   => Alphabets { upper : Some(0x1D5A0), lower : Some(0x1D5BA), digits : Some(0x1D7E2), ..NONE },
        FontStyle::Fraktur     => Alphabets { upper : Some(0x1D504), lower : Some(0x1D51E), ..NONE },
        FontStyle::Blackboard  => Alphabets { upper : Some(0x1D538), lower : Some(0x1D552), digits : Some(0x1D7D8), ..NONE },
    }
}

/// Characters encoded outside of the block, by style
fn hole(ch : char, style : FontStyle) -> Option<char> {
    let substitute = match (style, ch) {
        (FontStyle::Default | FontStyle::Italic, 'h') => '\u{210E}',

        (FontStyle::Caligraphic, 'B') => '\u{212C}',
        (FontStyle::Caligraphic, 'E') => '\u{2130}',
        (FontStyle::Caligraphic, 'F') => '\u{2131}',
        (FontStyle::Caligraphic, 'H') => '\u{210B}',
        (FontStyle::Caligraphic, 'I') => '\u{2110}',
        (FontStyle::Caligraphic, 'L') => '\u{2112}',
        (FontStyle::Caligraphic, 'M') => '\u{2133}',
        (FontStyle::Caligraphic, 'R') => '\u{211B}',
        (FontStyle::Caligraphic, 'e') => '\u{212F}',
        (FontStyle::Caligraphic, 'g') => '\u{210A}',
        (FontStyle::Caligraphic, 'o') => '\u{2134}',

        (FontStyle::Fraktur, 'C') => '\u{212D}',
        (FontStyle::Fraktur, 'H') => '\u{210C}',
        (FontStyle::Fraktur, 'I') => '\u{2111}',
        (FontStyle::Fraktur, 'R') => '\u{211C}',
        (FontStyle::Fraktur, 'Z') => '\u{2128}',

        (FontStyle::Blackboard, 'C') => '\u{2102}',
        (FontStyle::Blackboard, 'H') => '\u{210D}',
        (FontStyle::Blackboard, 'N') => '\u{2115}',
        (FontStyle::Blackboard, 'P') => '\u{2119}',
        (FontStyle::Blackboard, 'Q') => '\u{211A}',
        (FontStyle::Blackboard, 'R') => '\u{211D}',
        (FontStyle::Blackboard, 'Z') => '\u{2124}',

        // dotless i and j only exist in italic
        (FontStyle::Default | FontStyle::Italic, '\u{0131}') => '\u{1D6A4}',
        (FontStyle::Default | FontStyle::Italic, '\u{0237}') => '\u{1D6A5}',
        _ => return None,
    };
    Some(substitute)
}

/// Greek symbol variants, in the order they follow the italic small omega
const GREEK_SYMBOLS : [char; 7] = ['\u{2202}', '\u{03F5}', '\u{03D1}', '\u{03F0}', '\u{03D5}', '\u{03F1}', '\u{03D6}'];

/// The character displaying `ch` in `style`. Characters the style does not cover are returned unchanged.
pub fn style_char(ch : char, style : FontStyle) -> char {
    if let Some(substitute) = hole(ch, style) {
        return substitute;
    }

    let alphabets = alphabets(style);
    let code = u32::from(ch);
    let offset_in = |start : char, end : char| (start ..= end).contains(&ch).then(|| code - u32::from(start));

    let styled = if let Some(offset) = offset_in('A', 'Z') {
        alphabets.upper.map(|base| base + offset)
    }
    else if let Some(offset) = offset_in('a', 'z') {
        alphabets.lower.map(|base| base + offset)
    }
    else if let Some(offset) = offset_in('0', '9') {
        alphabets.digits.map(|base| base + offset)
    }
    // U+03A2 is unassigned, its slot in the math alphabets holds the capital theta symbol
    else if let Some(offset) = offset_in('\u{0391}', '\u{03A9}') {
        alphabets.greek_upper.map(|base| base + offset)
    }
    else if let Some(offset) = offset_in('\u{03B1}', '\u{03C9}') {
        alphabets.greek_lower.map(|base| base + offset)
    }
    else if let Some(index) = GREEK_SYMBOLS.iter().position(|&symbol| symbol == ch) {
        // the italic alphabet continues after small omega (U+1D714)
        alphabets.greek_lower.map(|base| base + 25 + index as u32)
    }
    else {
        None
    };

    styled.and_then(char::from_u32).unwrap_or(ch)
}

/// [`style_char`] applied to every character of `text`
pub fn style_str(text : &str, style : FontStyle) -> String {
    text.chars().map(|ch| style_char(ch, style)).collect()
}
