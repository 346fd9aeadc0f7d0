//! Memoized math fonts per (family, size).

use std::collections::HashMap;

use parking_lot::Mutex;

use crate::dimensions::units::FontSize;
use crate::dimensions::Unit;
use crate::error::FontResult;

use super::{GlyphMetrics, MathFont};

/// Size of [`FontManager::default_font`]
pub const DEFAULT_FONT_SIZE : Unit<FontSize> = Unit::new(20.);

/// Family of [`FontManager::default_font`]
pub const DEFAULT_FAMILY : &str = "latinmodern-math";

/// Cached sizes are rounded to this many steps per point.
const SIZE_STEPS_PER_POINT : f64 = 100.;

type CacheKey = (String, i64);

fn size_step(size : Unit<FontSize>) -> i64 {
    (size.to_unitless() * SIZE_STEPS_PER_POINT).round() as i64
}

/// A cache of math fonts.
///
/// A family is parsed once, by the loader given with its first request.
/// Any other size of a known family is a resized copy sharing the parsed table.
/// Sizes are rounded to the hundredth of a point, so a family holds at most one entry per hundredth.
pub struct FontManager<G> {
    fonts : Mutex<HashMap<CacheKey, MathFont<G>>>,
}

impl<G> Default for FontManager<G> {
    fn default() -> Self {
        Self { fonts : Mutex::new(HashMap::new()) }
    }
}

impl<G : GlyphMetrics> FontManager<G> {
    /// An empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// The font of `family` at `size`, rounded to the hundredth of a point.
    /// `load` is only called if no size of `family` was requested before.
    pub fn font<F>(&self, family : &str, size : Unit<FontSize>, load : F) -> FontResult<MathFont<G>>
    where F : FnOnce() -> FontResult<MathFont<G>>
    {
        let step = size_step(size);
        let size = Unit::new(step as f64 / SIZE_STEPS_PER_POINT);
        let mut fonts = self.fonts.lock();
        let key = (family.to_string(), step);
        if let Some(font) = fonts.get(&key) {
            return Ok(font.clone());
        }

        let known = fonts.iter()
            .find(|((name, _), _)| name == family)
            .map(|(_, font)| font.with_size(size));

        let font = match known {
            Some(font) => font,
            None => {
                debug!("loading math font {}", family);
                let loaded = load()?;
                if loaded.size() == size { loaded } else { loaded.with_size(size) }
            },
        };

        fonts.insert(key, font.clone());
        Ok(font)
    }

    /// [`DEFAULT_FAMILY`] at [`DEFAULT_FONT_SIZE`]
    pub fn default_font<F>(&self, load : F) -> FontResult<MathFont<G>>
    where F : FnOnce() -> FontResult<MathFont<G>>
    {
        self.font(DEFAULT_FAMILY, DEFAULT_FONT_SIZE, load)
    }

    /// Number of (family, size) entries in the cache
    pub fn len(&self) -> usize {
        self.fonts.lock().len()
    }

    /// Whether no font was requested yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
