//! Math metrics of a font at a given size, in points.
//!
//! A design-unit value `v` of a font with `units_per_em` units at size `s` is `v * s / units_per_em` points.
//! How the constants affect layout is documented in Ulrik Vieth, "OpenType Math Illuminated", TUGboat 30:1.

use std::collections::HashMap;
use std::sync::Arc;

use crate::dimensions::units::{FUnit, FontSize, Mu, Pt, Ratio};
use crate::dimensions::Unit;
use crate::geometry::BBox;

use super::table::MathTable;
use super::{GlyphId, GlyphMetrics};

/// A math font at a given size: the glyph provider joined with the math table.
///
/// Cloning is cheap: the parsed table and the provider are shared.
pub struct MathFont<G> {
    table : Arc<MathTable>,
    glyphs : Arc<G>,
    size : Unit<FontSize>,
}

impl<G> Clone for MathFont<G> {
    fn clone(&self) -> Self {
        Self {
            table : Arc::clone(&self.table),
            glyphs : Arc::clone(&self.glyphs),
            size : self.size,
        }
    }
}

impl<G> std::fmt::Debug for MathFont<G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MathFont")
            .field("size", &self.size)
            .field("constants", &self.table.constants.len())
            .finish()
    }
}

/// One piece of a vertical glyph assembly, in points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphPart {
    /// the glyph of this part
    pub glyph : GlyphId,
    /// full advance in the direction of extension
    pub full_advance : Unit<Pt>,
    /// straight connector material at the beginning of the part
    pub start_connector_length : Unit<Pt>,
    /// straight connector material at the end of the part
    pub end_connector_length : Unit<Pt>,
    /// an extender can be skipped or repeated
    pub is_extender : bool,
}

macro_rules! math_constants {
    ($($(#[$doc:meta])* $name:ident => $key:literal),* $(,)?) => {
        impl<G : GlyphMetrics> MathFont<G> {
            $(
                #[doc = concat!("`", $key, "` from the math table, in points.")]
                $(#[doc = ""] #[$doc])*
                pub fn $name(&self) -> Unit<Pt> {
                    self.constant($key)
                }
            )*
        }
    };
}

impl<G : GlyphMetrics> MathFont<G> {
    /// Joins a math table and a glyph provider at `size`.
    pub fn new(table : MathTable, glyphs : G, size : Unit<FontSize>) -> Self {
        Self::from_shared(Arc::new(table), Arc::new(glyphs), size)
    }

    /// Same as [`MathFont::new`] for an already shared table and provider.
    pub fn from_shared(table : Arc<MathTable>, glyphs : Arc<G>, size : Unit<FontSize>) -> Self {
        Self { table, glyphs, size }
    }

    /// Parses `source` (cf [`MathTable::from_json`]) and joins it with `glyphs`.
    pub fn from_json(source : &str, glyphs : G, size : Unit<FontSize>) -> crate::error::FontResult<Self> {
        Ok(Self::new(MathTable::from_json(source)?, glyphs, size))
    }

    /// A copy of this font at another size, sharing the parsed table and the provider.
    pub fn with_size(&self, size : Unit<FontSize>) -> Self {
        Self {
            table : Arc::clone(&self.table),
            glyphs : Arc::clone(&self.glyphs),
            size,
        }
    }

    /// Size of the font
    pub fn size(&self) -> Unit<FontSize> {
        self.size
    }

    /// One em at this size, in points
    pub fn em(&self) -> Unit<Pt> {
        Unit::new(self.size.to_unitless())
    }

    /// The glyph provider
    pub fn glyphs(&self) -> &G {
        &self.glyphs
    }

    /// The math table
    pub fn table(&self) -> &MathTable {
        &self.table
    }

    /// Design units per em of the font
    pub fn units_per_em(&self) -> u16 {
        self.glyphs.units_per_em()
    }

    /// Converts a design-unit value to points at the size of this font.
    pub fn to_pt(&self, value : Unit<FUnit>) -> Unit<Pt> {
        value * Unit::<Ratio<Pt, FUnit>>::font_scale(self.size, self.units_per_em())
    }

    /// Size of a math unit at this size (1/18 em)
    pub fn mu(&self) -> Unit<Ratio<Pt, Mu>> {
        Unit::<Ratio<Pt, Mu>>::mu_scale(self.size)
    }

    fn constant(&self, name : &str) -> Unit<Pt> {
        match self.table.constant(name) {
            Some(value) => self.to_pt(Unit::from(value)),
            None => {
                warn!("math table has no constant {}, using 0", name);
                Unit::ZERO
            },
        }
    }

    fn percent(&self, name : &str) -> f64 {
        match self.table.constant(name) {
            Some(value) => f64::from(value) / 100.,
            None => {
                warn!("math table has no constant {}, using 0", name);
                0.
            },
        }
    }

    /// Fraction of the font size used for scripts
    pub fn script_scale_down(&self) -> f64 {
        self.percent("ScriptPercentScaleDown")
    }

    /// Fraction of the font size used for scripts of scripts
    pub fn script_script_scale_down(&self) -> f64 {
        self.percent("ScriptScriptPercentScaleDown")
    }

    /// Fraction of the radical's height the bottom of the degree is raised by
    pub fn radical_degree_bottom_raise_percent(&self) -> f64 {
        self.percent("RadicalDegreeBottomRaisePercent")
    }

    /// Height of the delimiters of a delimited fraction in text style (TeX's `delim2`).
    ///
    /// Not a MATH constant: this follows LuaTeX and KaTeX, which derive it from the font size.
    pub fn fraction_delimiter_size(&self) -> Unit<Pt> {
        self.em().scale(1.01)
    }

    /// Height of the delimiters of a delimited fraction in display style (TeX's `delim1`).
    pub fn fraction_delimiter_display_style_size(&self) -> Unit<Pt> {
        self.em().scale(2.39)
    }

    /// Extra padding above and below limits (TeX's ξ13); OpenType has no such constant.
    pub fn limit_extra_ascender_descender(&self) -> Unit<Pt> {
        Unit::ZERO
    }
}

math_constants! {
    // fractions
    /// σ8 in TeX
    fraction_numerator_display_style_shift_up => "FractionNumeratorDisplayStyleShiftUp",
    /// σ9 in TeX
    fraction_numerator_shift_up => "FractionNumeratorShiftUp",
    /// σ11 in TeX
    fraction_denominator_display_style_shift_down => "FractionDenominatorDisplayStyleShiftDown",
    /// σ12 in TeX
    fraction_denominator_shift_down => "FractionDenominatorShiftDown",
    /// 3 ξ8 in TeX
    fraction_numerator_display_style_gap_min => "FractionNumDisplayStyleGapMin",
    /// ξ8 in TeX
    fraction_numerator_gap_min => "FractionNumeratorGapMin",
    /// 3 ξ8 in TeX
    fraction_denominator_display_style_gap_min => "FractionDenomDisplayStyleGapMin",
    /// ξ8 in TeX
    fraction_denominator_gap_min => "FractionDenominatorGapMin",
    /// ξ8 in TeX
    fraction_rule_thickness => "FractionRuleThickness",
    skewed_fraction_horizontal_gap => "SkewedFractionHorizontalGap",
    skewed_fraction_vertical_gap => "SkewedFractionVerticalGap",

    // stacks
    stack_top_display_style_shift_up => "StackTopDisplayStyleShiftUp",
    stack_top_shift_up => "StackTopShiftUp",
    /// 7 ξ8 in TeX
    stack_display_style_gap_min => "StackDisplayStyleGapMin",
    /// 3 ξ8 in TeX
    stack_gap_min => "StackGapMin",
    stack_bottom_display_style_shift_down => "StackBottomDisplayStyleShiftDown",
    stack_bottom_shift_down => "StackBottomShiftDown",
    stretch_stack_bottom_shift_down => "StretchStackBottomShiftDown",
    stretch_stack_gap_above_min => "StretchStackGapAboveMin",
    stretch_stack_gap_below_min => "StretchStackGapBelowMin",
    stretch_stack_top_shift_up => "StretchStackTopShiftUp",

    // scripts
    /// σ13, σ14 in TeX
    superscript_shift_up => "SuperscriptShiftUp",
    /// σ15 in TeX
    superscript_shift_up_cramped => "SuperscriptShiftUpCramped",
    /// σ16, σ17 in TeX
    subscript_shift_down => "SubscriptShiftDown",
    /// σ18 in TeX
    superscript_baseline_drop_max => "SuperscriptBaselineDropMax",
    /// σ19 in TeX
    subscript_baseline_drop_min => "SubscriptBaselineDropMin",
    superscript_bottom_min => "SuperscriptBottomMin",
    subscript_top_max => "SubscriptTopMax",
    sub_superscript_gap_min => "SubSuperscriptGapMin",
    superscript_bottom_max_with_subscript => "SuperscriptBottomMaxWithSubscript",
    space_after_script => "SpaceAfterScript",

    // radicals
    radical_extra_ascender => "RadicalExtraAscender",
    radical_rule_thickness => "RadicalRuleThickness",
    radical_display_style_vertical_gap => "RadicalDisplayStyleVerticalGap",
    radical_vertical_gap => "RadicalVerticalGap",
    /// 5 mu in TeX
    radical_kern_before_degree => "RadicalKernBeforeDegree",
    /// -10 mu in TeX
    radical_kern_after_degree => "RadicalKernAfterDegree",

    // limits
    upper_limit_baseline_rise_min => "UpperLimitBaselineRiseMin",
    upper_limit_gap_min => "UpperLimitGapMin",
    lower_limit_gap_min => "LowerLimitGapMin",
    lower_limit_baseline_drop_min => "LowerLimitBaselineDropMin",

    // under- and overlines
    underbar_vertical_gap => "UnderbarVerticalGap",
    underbar_rule_thickness => "UnderbarRuleThickness",
    underbar_extra_descender => "UnderbarExtraDescender",
    overbar_vertical_gap => "OverbarVerticalGap",
    overbar_rule_thickness => "OverbarRuleThickness",
    overbar_extra_ascender => "OverbarExtraAscender",

    // general
    /// σ22 in TeX
    axis_height => "AxisHeight",
    math_leading => "MathLeading",
    delimited_sub_formula_min_height => "DelimitedSubFormulaMinHeight",
    display_operator_min_height => "DisplayOperatorMinHeight",

    // accents
    /// x-height, `\fontdimen5` in TeX
    accent_base_height => "AccentBaseHeight",
    flattened_accent_base_height => "FlattenedAccentBaseHeight",

    /// Minimum overlap of connecting parts in a glyph assembly
    min_connector_overlap => "MinConnectorOverlap",
}

impl<G : GlyphMetrics> MathFont<G> {
    /// The glyph for `codepoint`
    pub fn glyph_for_char(&self, codepoint : char) -> Option<GlyphId> {
        self.glyphs.glyph_for_char(codepoint)
    }

    /// Name of a glyph, the key used by the math table
    pub fn glyph_name(&self, gid : GlyphId) -> Option<String> {
        self.glyphs.glyph_name(gid)
    }

    /// The glyph with the given name
    pub fn glyph_with_name(&self, name : &str) -> Option<GlyphId> {
        self.glyphs.glyph_with_name(name)
    }

    /// Advance of a glyph
    pub fn advance(&self, gid : GlyphId) -> Unit<Pt> {
        self.to_pt(self.glyphs.advance(gid))
    }

    /// Bounding box of a glyph
    pub fn bounds(&self, gid : GlyphId) -> BBox<Pt> {
        self.glyphs.bounds(gid).scale(Unit::<Ratio<Pt, FUnit>>::font_scale(self.size, self.units_per_em()))
    }

    /// The vertical variants of the glyph, by increasing size. A glyph without variants is its only variant.
    pub fn vertical_variants(&self, gid : GlyphId) -> Vec<GlyphId> {
        self.variants(gid, &self.table.v_variants)
    }

    /// The horizontal variants of the glyph, by increasing size. A glyph without variants is its only variant.
    pub fn horizontal_variants(&self, gid : GlyphId) -> Vec<GlyphId> {
        self.variants(gid, &self.table.h_variants)
    }

    fn variants(&self, gid : GlyphId, table : &HashMap<String, Vec<String>>) -> Vec<GlyphId> {
        let names = self.glyph_name(gid).and_then(|name| table.get(&name));
        let variants : Vec<GlyphId> = names
            .into_iter()
            .flatten()
            .filter_map(|name| self.glyph_with_name(name))
            .collect();

        if variants.is_empty() {
            vec![gid]
        }
        else {
            variants
        }
    }

    /// The first vertical variant whose name differs from the glyph's, or the glyph itself.
    pub fn larger_glyph(&self, gid : GlyphId) -> GlyphId {
        let name = match self.glyph_name(gid) {
            Some(name) => name,
            None => return gid,
        };
        self.table.v_variants.get(&name)
            .into_iter()
            .flatten()
            .filter(|variant| **variant != name)
            .find_map(|variant| self.glyph_with_name(variant))
            .unwrap_or(gid)
    }

    /// Italic correction of the glyph, 0 if the table has none.
    pub fn italic_correction(&self, gid : GlyphId) -> Unit<Pt> {
        self.per_glyph(gid, &self.table.italic).unwrap_or(Unit::ZERO)
    }

    /// Horizontal position where a top accent attaches to the glyph.
    /// Without entry in the table, this is the middle of the advance.
    pub fn top_accent_adjustment(&self, gid : GlyphId) -> Unit<Pt> {
        self.per_glyph(gid, &self.table.accents)
            .unwrap_or_else(|| self.advance(gid).scale(0.5))
    }

    fn per_glyph(&self, gid : GlyphId, table : &HashMap<String, i32>) -> Option<Unit<Pt>> {
        let name = self.glyph_name(gid)?;
        let value = *table.get(&name)?;
        Some(self.to_pt(Unit::from(value)))
    }

    /// The parts to assemble a tall version of the glyph, from bottom to top.
    /// Empty if the glyph has no assembly or if a part names a glyph the font does not have.
    pub fn vertical_assembly(&self, gid : GlyphId) -> Vec<GlyphPart> {
        let assembly = match self.glyph_name(gid).and_then(|name| self.table.v_assembly.get(&name)) {
            Some(assembly) => assembly,
            None => return Vec::new(),
        };

        let parts : Option<Vec<GlyphPart>> = assembly.parts.iter()
            .map(|part| Some(GlyphPart {
                glyph : self.glyph_with_name(&part.glyph)?,
                full_advance : self.to_pt(Unit::from(part.advance)),
                start_connector_length : self.to_pt(Unit::from(part.start_connector)),
                end_connector_length : self.to_pt(Unit::from(part.end_connector)),
                is_extender : part.extender,
            }))
            .collect();

        parts.unwrap_or_else(|| {
            debug!("assembly of glyph {:?} names an unknown glyph", gid);
            Vec::new()
        })
    }

    /// Italic correction of the assembled version of the glyph, 0 if there is none.
    pub fn assembly_italic_correction(&self, gid : GlyphId) -> Unit<Pt> {
        self.glyph_name(gid)
            .and_then(|name| self.table.v_assembly.get(&name))
            .map_or(Unit::ZERO, |assembly| self.to_pt(Unit::from(assembly.italic)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::table::{Assembly, AssemblyPart};

    // glyph i is named "g{i}", advances are 100 * (i + 1), boxes are [0, advance] x [-100, 500]
    struct Named(u16);

    impl GlyphMetrics for Named {
        fn units_per_em(&self) -> u16 { 1000 }
        fn glyph_for_char(&self, codepoint : char) -> Option<GlyphId> {
            let index = u16::try_from(u32::from(codepoint).checked_sub('a' as u32)?).ok()?;
            (index < self.0).then_some(GlyphId(index))
        }
        fn glyph_name(&self, gid : GlyphId) -> Option<String> {
            (gid.0 < self.0).then(|| format!("g{}", gid.0))
        }
        fn glyph_with_name(&self, name : &str) -> Option<GlyphId> {
            let index : u16 = name.strip_prefix('g')?.parse().ok()?;
            (index < self.0).then_some(GlyphId(index))
        }
        fn advance(&self, gid : GlyphId) -> Unit<FUnit> {
            Unit::from(100 * (u32::from(gid.0) + 1))
        }
        fn bounds(&self, gid : GlyphId) -> BBox<FUnit> {
            BBox::new(Unit::ZERO, Unit::from(-100), self.advance(gid), Unit::from(500))
        }
    }

    fn font() -> MathFont<Named> {
        let mut table = MathTable::default();
        table.constants.insert("AxisHeight".to_string(), 500);
        table.constants.insert("ScriptPercentScaleDown".to_string(), 70);
        table.v_variants.insert("g0".to_string(), vec!["g0".into(), "g1".into(), "g2".into()]);
        table.v_variants.insert("g3".to_string(), vec!["g3".into()]);
        table.v_variants.insert("g4".to_string(), vec!["missing".into()]);
        table.h_variants.insert("g0".to_string(), vec!["g5".into()]);
        table.italic.insert("g1".to_string(), 50);
        table.accents.insert("g2".to_string(), 120);
        table.v_assembly.insert("g0".to_string(), Assembly {
            italic : 25,
            parts : vec![
                AssemblyPart { start_connector : 0, end_connector : 100, advance : 500, extender : false, glyph : "g6".into() },
                AssemblyPart { start_connector : 100, end_connector : 100, advance : 250, extender : true, glyph : "g7".into() },
            ],
        });
        table.v_assembly.insert("g1".to_string(), Assembly {
            italic : 0,
            parts : vec![
                AssemblyPart { start_connector : 0, end_connector : 0, advance : 500, extender : false, glyph : "nope".into() },
            ],
        });
        MathFont::new(table, Named(10), Unit::new(20.))
    }

    #[test]
    fn constants_in_points() {
        let font = font();
        assert_eq!(font.axis_height(), Unit::new(10.));
        assert_eq!(font.script_scale_down(), 0.7);
        assert_eq!(font.math_leading(), Unit::ZERO);
        assert_eq!(font.limit_extra_ascender_descender(), Unit::ZERO);
        assert_eq!(font.mu().to_unitless(), 20. / 18.);
        assert!((font.fraction_delimiter_size().to_unitless() - 20.2).abs() < 1e-9);
        assert!((font.fraction_delimiter_display_style_size().to_unitless() - 47.8).abs() < 1e-9);
    }

    #[test]
    fn resizing_shares_the_table() {
        let font = font();
        let small = font.with_size(Unit::new(10.));
        assert_eq!(small.axis_height(), Unit::new(5.));
        assert!(Arc::ptr_eq(&font.table, &small.table));
        assert_eq!(font.axis_height(), Unit::new(10.));
    }

    #[test]
    fn variants() {
        let font = font();
        assert_eq!(font.vertical_variants(GlyphId(0)), [GlyphId(0), GlyphId(1), GlyphId(2)]);
        assert_eq!(font.vertical_variants(GlyphId(9)), [GlyphId(9)]);
        assert_eq!(font.vertical_variants(GlyphId(4)), [GlyphId(4)]);
        // unknown to the provider
        assert_eq!(font.vertical_variants(GlyphId(42)), [GlyphId(42)]);
        assert_eq!(font.horizontal_variants(GlyphId(0)), [GlyphId(5)]);

        assert_eq!(font.larger_glyph(GlyphId(0)), GlyphId(1));
        assert_eq!(font.larger_glyph(GlyphId(3)), GlyphId(3));
        assert_eq!(font.larger_glyph(GlyphId(8)), GlyphId(8));
    }

    #[test]
    fn per_glyph_values() {
        let font = font();
        assert_eq!(font.italic_correction(GlyphId(1)), Unit::new(1.));
        assert_eq!(font.italic_correction(GlyphId(2)), Unit::ZERO);
        assert!((font.top_accent_adjustment(GlyphId(2)).to_unitless() - 2.4).abs() < 1e-9);
        // half the advance of 400 units
        assert_eq!(font.top_accent_adjustment(GlyphId(3)), Unit::new(4.));
        assert_eq!(font.advance(GlyphId(0)), Unit::new(2.));
        assert_eq!(font.bounds(GlyphId(0)).y_min, Unit::new(-2.));
    }

    #[test]
    fn assemblies() {
        let font = font();
        let parts = font.vertical_assembly(GlyphId(0));
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].glyph, GlyphId(6));
        assert_eq!(parts[0].full_advance, Unit::new(10.));
        assert_eq!(parts[1].start_connector_length, Unit::new(2.));
        assert!(parts[1].is_extender);
        assert_eq!(font.assembly_italic_correction(GlyphId(0)), Unit::new(0.5));

        assert!(font.vertical_assembly(GlyphId(1)).is_empty());
        assert!(font.vertical_assembly(GlyphId(2)).is_empty());
        assert_eq!(font.assembly_italic_correction(GlyphId(2)), Unit::ZERO);
    }
}
