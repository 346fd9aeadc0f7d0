use std::collections::HashMap;

use ttf_parser::math::{GlyphAssembly, GlyphConstructions};

use crate::dimensions::units::FUnit;
use crate::dimensions::Unit;
use crate::error::{FontError, FontResult};
use crate::font::table::{Assembly, AssemblyPart, MathTable};
use crate::font::{GlyphId, GlyphMetrics};
use crate::geometry::BBox;


/// A [`GlyphMetrics`] provider over a `ttf_parser::Face`.
/// It can also export the MATH table of the face in the form [`MathFont`](crate::font::MathFont) reads.
pub struct TtfMathFont<'a> {
    math: ttf_parser::math::Table<'a>,
    font: ttf_parser::Face<'a>,
}

impl<'a> TtfMathFont<'a> {
    /// Creates a new 'TtfMathFont' from a 'ttf_parser::Face'.
    /// Fails if font has no MATH table.
    pub fn new(font: ttf_parser::Face<'a>) -> FontResult<Self> {
        let math = font.tables().math.ok_or(FontError::NoMATHTable)?;
        Ok(Self { math, font })
    }

    /// Parses the font in `data` (first face of a collection).
    pub fn parse(data: &'a [u8]) -> FontResult<Self> {
        let font = ttf_parser::Face::parse(data, 0)
            .map_err(|e| FontError::Parse(e.to_string()))?;
        Self::new(font)
    }

    /// Returns a reference to the wrapped 'ttf_parser::Face'
    pub fn font(&self) -> &ttf_parser::Face<'a> {
        &self.font
    }

    fn named(&self, glyph_id: ttf_parser::GlyphId) -> Option<String> {
        self.font.glyph_name(glyph_id).map(str::to_string)
    }

    /// Exports the MATH table of the face, keyed by glyph names.
    /// Glyphs without a name cannot be referenced by the table and are skipped.
    pub fn math_table(&self) -> MathTable {
        let mut table = MathTable::default();
        let n_glyphs = self.font.number_of_glyphs();

        if let Some(constants) = self.math.constants {
            export_constants(&constants, &mut table.constants);
        }

        if let Some(info) = self.math.glyph_info {
            for index in 0 .. n_glyphs {
                let glyph_id = ttf_parser::GlyphId(index);
                let name = match self.named(glyph_id) {
                    Some(name) => name,
                    None => continue,
                };
                if let Some(italics) = info.italic_corrections.and_then(|t| t.get(glyph_id)) {
                    table.italic.insert(name.clone(), italics.value.into());
                }
                if let Some(attachment) = info.top_accent_attachments.and_then(|t| t.get(glyph_id)) {
                    table.accents.insert(name, attachment.value.into());
                }
            }
        }

        if let Some(variants) = self.math.variants {
            table.constants.insert("MinConnectorOverlap".to_string(), variants.min_connector_overlap.into());
            self.export_variants(variants.vertical_constructions, &mut table.v_variants, Some(&mut table.v_assembly));
            self.export_variants(variants.horizontal_constructions, &mut table.h_variants, None);
        }

        table
    }

    fn export_variants(
        &self,
        constructions: GlyphConstructions<'a>,
        variants: &mut HashMap<String, Vec<String>>,
        mut assemblies: Option<&mut HashMap<String, Assembly>>,
    ) {
        for index in 0 .. self.font.number_of_glyphs() {
            let glyph_id = ttf_parser::GlyphId(index);
            let construction = match constructions.get(glyph_id) {
                Some(construction) => construction,
                None => continue,
            };
            let name = match self.named(glyph_id) {
                Some(name) => name,
                None => continue,
            };

            let names: Vec<String> = construction.variants
                .into_iter()
                .filter_map(|record| self.named(record.variant_glyph))
                .collect();
            if !names.is_empty() {
                variants.insert(name.clone(), names);
            }

            if let (Some(assemblies), Some(assembly)) = (assemblies.as_deref_mut(), construction.assembly) {
                if let Some(assembly) = self.export_assembly(&assembly) {
                    assemblies.insert(name, assembly);
                }
            }
        }
    }

    fn export_assembly(&self, assembly: &GlyphAssembly<'a>) -> Option<Assembly> {
        let parts = assembly.parts
            .into_iter()
            .map(|part| Some(AssemblyPart {
                start_connector: part.start_connector_length.into(),
                end_connector:   part.end_connector_length.into(),
                advance:         part.full_advance.into(),
                extender:        part.part_flags.extender(),
                glyph:           self.named(part.glyph_id)?,
            }))
            .collect::<Option<Vec<_>>>()?;

        Some(Assembly {
            italic: assembly.italics_correction.value.into(),
            parts,
        })
    }
}

macro_rules! export {
    ($constants:ident, $into:ident; $($name:literal => $getter:ident $(. $field:ident)?),* $(,)?) => {
        $( $into.insert($name.to_string(), i32::from($constants.$getter()$(.$field)?)); )*
    };
}

fn export_constants(constants: &ttf_parser::math::Constants, into: &mut HashMap<String, i32>) {
    export!(constants, into;
        "ScriptPercentScaleDown"               => script_percent_scale_down,
        "ScriptScriptPercentScaleDown"         => script_script_percent_scale_down,
        "DelimitedSubFormulaMinHeight"         => delimited_sub_formula_min_height,
        "DisplayOperatorMinHeight"             => display_operator_min_height,
        "MathLeading"                          => math_leading.value,
        "AxisHeight"                           => axis_height.value,
        "AccentBaseHeight"                     => accent_base_height.value,
        "FlattenedAccentBaseHeight"            => flattened_accent_base_height.value,
        "SubscriptShiftDown"                   => subscript_shift_down.value,
        "SubscriptTopMax"                      => subscript_top_max.value,
        "SubscriptBaselineDropMin"             => subscript_baseline_drop_min.value,
        "SuperscriptShiftUp"                   => superscript_shift_up.value,
        "SuperscriptShiftUpCramped"            => superscript_shift_up_cramped.value,
        "SuperscriptBottomMin"                 => superscript_bottom_min.value,
        "SuperscriptBaselineDropMax"           => superscript_baseline_drop_max.value,
        "SubSuperscriptGapMin"                 => sub_superscript_gap_min.value,
        "SuperscriptBottomMaxWithSubscript"    => superscript_bottom_max_with_subscript.value,
        "SpaceAfterScript"                     => space_after_script.value,
        "UpperLimitGapMin"                     => upper_limit_gap_min.value,
        "UpperLimitBaselineRiseMin"            => upper_limit_baseline_rise_min.value,
        "LowerLimitGapMin"                     => lower_limit_gap_min.value,
        "LowerLimitBaselineDropMin"            => lower_limit_baseline_drop_min.value,
        "StackTopShiftUp"                      => stack_top_shift_up.value,
        "StackTopDisplayStyleShiftUp"          => stack_top_display_style_shift_up.value,
        "StackBottomShiftDown"                 => stack_bottom_shift_down.value,
        "StackBottomDisplayStyleShiftDown"     => stack_bottom_display_style_shift_down.value,
        "StackGapMin"                          => stack_gap_min.value,
        "StackDisplayStyleGapMin"              => stack_display_style_gap_min.value,
        "StretchStackTopShiftUp"               => stretch_stack_top_shift_up.value,
        "StretchStackBottomShiftDown"          => stretch_stack_bottom_shift_down.value,
        "StretchStackGapAboveMin"              => stretch_stack_gap_above_min.value,
        "StretchStackGapBelowMin"              => stretch_stack_gap_below_min.value,
        "FractionNumeratorShiftUp"             => fraction_numerator_shift_up.value,
        "FractionNumeratorDisplayStyleShiftUp" => fraction_numerator_display_style_shift_up.value,
        "FractionDenominatorShiftDown"         => fraction_denominator_shift_down.value,
        "FractionDenominatorDisplayStyleShiftDown" => fraction_denominator_display_style_shift_down.value,
        "FractionNumeratorGapMin"              => fraction_numerator_gap_min.value,
        "FractionNumDisplayStyleGapMin"        => fraction_num_display_style_gap_min.value,
        "FractionRuleThickness"                => fraction_rule_thickness.value,
        "FractionDenominatorGapMin"            => fraction_denominator_gap_min.value,
        "FractionDenomDisplayStyleGapMin"      => fraction_denom_display_style_gap_min.value,
        "SkewedFractionHorizontalGap"          => skewed_fraction_horizontal_gap.value,
        "SkewedFractionVerticalGap"            => skewed_fraction_vertical_gap.value,
        "OverbarVerticalGap"                   => overbar_vertical_gap.value,
        "OverbarRuleThickness"                 => overbar_rule_thickness.value,
        "OverbarExtraAscender"                 => overbar_extra_ascender.value,
        "UnderbarVerticalGap"                  => underbar_vertical_gap.value,
        "UnderbarRuleThickness"                => underbar_rule_thickness.value,
        "UnderbarExtraDescender"               => underbar_extra_descender.value,
        "RadicalVerticalGap"                   => radical_vertical_gap.value,
        "RadicalDisplayStyleVerticalGap"       => radical_display_style_vertical_gap.value,
        "RadicalRuleThickness"                 => radical_rule_thickness.value,
        "RadicalExtraAscender"                 => radical_extra_ascender.value,
        "RadicalKernBeforeDegree"              => radical_kern_before_degree.value,
        "RadicalKernAfterDegree"               => radical_kern_after_degree.value,
        "RadicalDegreeBottomRaisePercent"      => radical_degree_bottom_raise_percent,
    );
}


impl<'a> GlyphMetrics for TtfMathFont<'a> {
    fn units_per_em(&self) -> u16 {
        self.font.units_per_em()
    }

    fn glyph_for_char(&self, codepoint: char) -> Option<GlyphId> {
        self.font.glyph_index(codepoint).map(|gid| GlyphId(gid.0))
    }

    fn glyph_name(&self, gid: GlyphId) -> Option<String> {
        self.named(ttf_parser::GlyphId(gid.0))
    }

    fn glyph_with_name(&self, name: &str) -> Option<GlyphId> {
        self.font.glyph_index_by_name(name).map(|gid| GlyphId(gid.0))
    }

    fn advance(&self, gid: GlyphId) -> Unit<FUnit> {
        self.font.glyph_hor_advance(ttf_parser::GlyphId(gid.0))
            .map_or(Unit::ZERO, Unit::from)
    }

    fn bounds(&self, gid: GlyphId) -> BBox<FUnit> {
        match self.font.glyph_bounding_box(ttf_parser::GlyphId(gid.0)) {
            Some(rect) => BBox::new(
                Unit::from(rect.x_min),
                Unit::from(rect.y_min),
                Unit::from(rect.x_max),
                Unit::from(rect.y_max),
            ),
            None => BBox::EMPTY,
        }
    }
}
