//! Glyph providers over font parsing crates, each behind its feature.

#[cfg(feature="ttfparser-fontparser")]
/// Glyph provider over the `ttf-parser` crate.
pub mod ttf_parser;
