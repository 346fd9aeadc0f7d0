//! Length constants for layout that are not part of the MATH table of a font.
//! Factors are relative to the font size.

use crate::dimensions::{units::Pt, Unit};

// From [https://tex.stackexchange.com/questions/48276/latex-specify-font-point-size] & `info latex`
/// Distance between the baselines of two rows of a table.
/// "A rule of thumb is that the baselineskip should be 1.2 times the font size."
pub const BASELINE_SKIP : f64 = 1.2;

/// Space added between the rows of a table for each unit of additional row spacing (`\jot`)
pub const JOT : f64 = 0.3;

/// Gap between rows of a table whose baselines would otherwise be too close (`\lineskip`)
pub const LINE_SKIP : f64 = 0.1;

/// Rows closer than this are separated by [`LINE_SKIP`] instead (`\lineskiplimit`)
pub const LINE_SKIP_LIMIT : f64 = 0.;

/// A delimiter covers at least `DELIMITER_FACTOR / 1000` of the formula it encloses (`\delimiterfactor`)
pub const DELIMITER_FACTOR : f64 = 901.;

/// ... or is at most this much shorter than the formula (`\delimitershortfall`)
pub const DELIMITER_SHORT_FALL : Unit<Pt> = Unit::<Pt>::new(5.0);

/// Upper bound on the number of repeated extenders in a glyph assembly
pub const MAX_EXTENDER_REPEATS : usize = 100;
