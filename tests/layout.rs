extern crate mathbox;

#[macro_use]
extern crate serde_derive;

mod common;
use common::{assert_close, find_box, load_font, pt};

use mathbox::atom::table::table_with_environment;
use mathbox::atom::{factory, LineStyle, MathAtom, MathList, Range};
use mathbox::dimensions::Unit;
use mathbox::display::{Display, DisplayKind, LinePosition};
use mathbox::geometry::Point;
use mathbox::layout::glyphs::construct_glyph;
use mathbox::layout::{typeset, LayoutSettings};

fn single(atom : MathAtom) -> MathList {
    MathList::from_atom(atom).expect("atom allowed in a list")
}

fn with_scripts(mut atom : MathAtom, subscript : Option<&str>, superscript : Option<&str>) -> MathAtom {
    atom.set_subscript(subscript.map(factory::atom_list_for)).unwrap();
    atom.set_superscript(superscript.map(factory::atom_list_for)).unwrap();
    atom
}

fn variable(ch : char) -> MathAtom {
    factory::atom_for_character(ch).unwrap()
}

fn script_boxes(display : &Display) -> Vec<(LinePosition, &Display)> {
    display.children()
        .into_iter()
        .filter_map(|child| match child.kind() {
            DisplayKind::MathList(list) if list.line_position != LinePosition::Regular => Some((list.line_position, child)),
            _ => None,
        })
        .collect()
}

#[test]
fn fraction_children_are_centred() {
    let font = load_font();
    let list = single(factory::fraction_with_strings("12", "1"));
    let display = typeset(&list, LayoutSettings::new(&font).with_style(LineStyle::Text));

    let fraction = display.children()[0];
    let (numerator, denominator) = match fraction.kind() {
        DisplayKind::Fraction(fraction) => (&fraction.numerator, &fraction.denominator),
        other => panic!("expected a fraction, got {:?}", other),
    };
    // script size is 7pt: "12" is 7pt wide, "1" 3.5pt
    assert_close(pt(fraction.width()), 7.);
    assert_close(pt(denominator.position().x - fraction.position().x), 1.75);
    assert_close(pt(numerator.position().x - fraction.position().x), 0.);
    assert_eq!(fraction.range().length, 1);
}

#[test]
fn repositioning_a_fraction_moves_its_children() {
    let font = load_font();
    let list = single(factory::fraction_with_strings("x", "yz"));
    let display = typeset(&list, LayoutSettings::new(&font));

    let fraction = display.children()[0].clone();
    let mut moved = fraction.clone();
    moved.reposition(Point::new(Unit::new(3.), Unit::new(4.)));

    assert_eq!(moved.width(), fraction.width());
    assert_eq!(moved.ascent(), fraction.ascent());
    assert_eq!(moved.descent(), fraction.descent());
    for (before, after) in fraction.children().into_iter().zip(moved.children()) {
        assert_close(pt(after.position().x - before.position().x), 3.);
        assert_close(pt(after.position().y - before.position().y), 4.);
    }
}

#[test]
fn fraction_parts_clear_the_rule() {
    let font = load_font();
    let list = single(factory::fraction_with_strings("x", "y"));
    let display = typeset(&list, LayoutSettings::new(&font));

    let fraction = match display.children()[0].kind() {
        DisplayKind::Fraction(fraction) => fraction.clone(),
        other => panic!("expected a fraction, got {:?}", other),
    };
    let half = fraction.line_thickness.scale(0.5);
    let above = (fraction.numerator_up - fraction.numerator.descent()) - (fraction.line_position + half);
    let below = (fraction.line_position - half) - (fraction.denominator.ascent() - fraction.denominator_down);
    assert!(above >= font.fraction_numerator_display_style_gap_min());
    assert!(below >= font.fraction_denominator_display_style_gap_min());
    assert!(fraction.numerator_up >= font.fraction_numerator_display_style_shift_up());
    assert_close(pt(fraction.line_thickness), 0.4);
}

#[test]
fn stacks_have_no_rule() {
    let font = load_font();
    let mut atom = factory::fraction_with_strings("a", "b");
    if let mathbox::atom::AtomKind::Fraction(fraction) = atom.kind_mut() {
        fraction.has_rule = false;
    }
    let display = typeset(&single(atom), LayoutSettings::new(&font).with_style(LineStyle::Text));
    match display.children()[0].kind() {
        DisplayKind::Fraction(fraction) => {
            assert_eq!(fraction.line_thickness, Unit::ZERO);
            let clearance = (fraction.numerator_up - fraction.numerator.descent())
                - (fraction.denominator.ascent() - fraction.denominator_down);
            assert!(clearance >= font.stack_gap_min() - Unit::new(1e-9));
        },
        other => panic!("expected a fraction, got {:?}", other),
    }
}

#[test]
fn superscript_is_raised() {
    let font = load_font();
    let list = single(with_scripts(variable('x'), None, Some("2")));
    let display = typeset(&list, LayoutSettings::new(&font));

    let scripts = script_boxes(&display);
    assert_eq!(scripts.len(), 1);
    let (position, superscript) = scripts[0];
    assert_eq!(position, LinePosition::Superscript);
    assert_close(pt(superscript.position().x), 5.);
    assert_close(pt(superscript.position().y), 3.63);
    // the space after the script does not count at the end of the list
    assert_close(pt(display.width()), 8.5);
    assert!(display.children()[0].has_script());
}

#[test]
fn sub_and_superscript_keep_their_gap() {
    let font = load_font();
    let list = single(with_scripts(variable('x'), Some("1"), Some("2")));
    let display = typeset(&list, LayoutSettings::new(&font));

    let scripts = script_boxes(&display);
    assert_eq!(scripts.len(), 2);
    let superscript = scripts.iter().find(|(position, _)| *position == LinePosition::Superscript).unwrap().1;
    let subscript = scripts.iter().find(|(position, _)| *position == LinePosition::Subscript).unwrap().1;

    assert_close(pt(superscript.position().y), 3.63);
    assert_close(pt(subscript.position().y), -2.87);
    let gap = (superscript.position().y - superscript.descent()) - (subscript.position().y + subscript.ascent());
    assert!(gap >= font.sub_superscript_gap_min() - Unit::new(1e-9));
}

#[test]
fn cramped_superscripts_are_raised_less() {
    let font = load_font();
    let list = single(with_scripts(variable('x'), None, Some("2")));
    let display = typeset(&list, LayoutSettings::new(&font).with_cramped(true));
    let (_, superscript) = script_boxes(&display)[0];
    assert_close(pt(superscript.position().y), 2.89);
}

#[test]
fn radical_covers_its_radicand() {
    let font = load_font();
    let list = single(MathAtom::radical(factory::atom_list_for("x"), None));
    let display = typeset(&list, LayoutSettings::new(&font));

    let radical = display.children()[0];
    assert_close(pt(radical.ascent()), 9.34);
    assert_close(pt(radical.descent()), 2.06);
    assert_close(pt(radical.width()), 11.);
    match radical.kind() {
        DisplayKind::Radical(parts) => {
            assert_close(pt(parts.radicand.position().x), 6.);
            assert!(parts.degree.is_none());
        },
        other => panic!("expected a radical, got {:?}", other),
    }
}

#[test]
fn radical_degree_sits_in_the_crook() {
    let font = load_font();
    let list = single(MathAtom::radical(factory::atom_list_for("x"), Some(factory::atom_list_for("3"))));
    let display = typeset(&list, LayoutSettings::new(&font));

    let radical = display.children()[0];
    match radical.kind() {
        DisplayKind::Radical(parts) => {
            let degree = parts.degree.as_ref().unwrap();
            // the negative kern after the degree is wider than the degree: the sign does not move
            assert_eq!(parts.radical_shift, Unit::ZERO);
            assert_close(pt(degree.position().x), 3.06);
            assert_close(pt(degree.position().y), (9.34 - 2.06) * 0.6);
        },
        other => panic!("expected a radical, got {:?}", other),
    }
    assert_close(pt(radical.width()), 11.);
}

#[test]
fn display_operators_take_limits() {
    let font = load_font();
    let sum = factory::atom_for_latex_symbol("sum").unwrap();
    let list = single(with_scripts(sum, Some("i"), Some("n")));
    let display = typeset(&list, LayoutSettings::new(&font));

    let limits = display.children()[0];
    let parts = match limits.kind() {
        DisplayKind::LargeOpLimits(parts) => parts,
        other => panic!("expected limits, got {:?}", other),
    };
    // the display variant of the sum is 12pt wide, centred on the axis
    assert_close(pt(limits.width()), 12.);
    assert_close(pt(parts.nucleus.ascent()), 10.);
    assert_close(pt(parts.nucleus.descent()), 5.);

    let upper = parts.upper.as_ref().unwrap();
    let lower = parts.lower.as_ref().unwrap();
    assert_close(pt(upper.position().x), 4.25);
    assert_close(pt(upper.position().y), 13.4);
    assert_close(pt(lower.position().y), -11.57);
}

#[test]
fn text_operators_take_scripts() {
    let font = load_font();
    let sum = factory::atom_for_latex_symbol("sum").unwrap();
    let list = single(with_scripts(sum, Some("i"), Some("n")));
    let display = typeset(&list, LayoutSettings::new(&font).with_style(LineStyle::Text));

    assert!(find_box(&display, &|b| matches!(b.kind(), DisplayKind::LargeOpLimits(_))).is_none());
    assert_eq!(script_boxes(&display).len(), 2);
    assert_close(pt(display.children()[0].width()), 9.);
}

#[test]
fn integral_subscript_tucks_under_the_slant() {
    let font = load_font();
    let int = factory::atom_for_latex_symbol("int").unwrap();
    let list = single(with_scripts(int, Some("0"), Some("1")));
    let display = typeset(&list, LayoutSettings::new(&font).with_style(LineStyle::Text));

    let scripts = script_boxes(&display);
    let superscript = scripts.iter().find(|(position, _)| *position == LinePosition::Superscript).unwrap().1;
    let subscript = scripts.iter().find(|(position, _)| *position == LinePosition::Subscript).unwrap().1;
    // 5pt advance, 1pt italic correction
    assert_close(pt(display.children()[0].width()), 4.);
    assert_close(pt(subscript.position().x), 4.);
    assert_close(pt(superscript.position().x), 5.);
}

#[test]
fn delimiters_grow_around_their_content() {
    let font = load_font();
    let inner = MathAtom::inner(
        single(factory::fraction_with_strings("x", "y")),
        factory::boundary_for_delimiter("("),
        factory::boundary_for_delimiter(")"),
    ).unwrap();
    let display = typeset(&single(inner), LayoutSettings::new(&font));

    let wrapper = display.children()[0];
    let boxes = wrapper.children();
    assert_eq!(boxes.len(), 3);
    let (left, content, right) = (boxes[0], boxes[1], boxes[2]);

    let axis = pt(font.axis_height());
    let delta = (pt(content.ascent()) - axis).max(pt(content.descent()) + axis);
    let expected = (delta * 901. / 500.).max(2. * delta - 5.);
    for delimiter in [left, right] {
        match delimiter.kind() {
            DisplayKind::GlyphConstruction(construction) => assert_eq!(construction.glyphs.len(), 3),
            other => panic!("expected an assembled delimiter, got {:?}", other),
        }
        assert_close(pt(delimiter.ascent() + delimiter.descent()), expected);
        // centred on the axis
        assert_close(pt(delimiter.ascent() - delimiter.descent()) / 2., axis);
    }
    assert_close(pt(content.position().x), pt(left.width()));
    assert_close(pt(right.position().x), pt(left.width() + content.width()));
}

#[test]
fn accent_is_placed_over_the_attachment_point() {
    let font = load_font();
    let hat = MathAtom::accent("\u{0302}", factory::atom_list_for("x"));
    let display = typeset(&single(hat), LayoutSettings::new(&font));

    let accent = display.children()[0];
    let glyph = match accent.kind() {
        DisplayKind::Accent(parts) => &parts.accent,
        other => panic!("expected an accent, got {:?}", other),
    };
    // the accentee is taller than the flattened accent base height
    match glyph.kind() {
        DisplayKind::Glyph(glyph) => assert_eq!(Some(glyph.glyph), font.glyph_with_name("u0302.flac")),
        other => panic!("expected a glyph, got {:?}", other),
    }
    assert_close(pt(glyph.position().x), 1.5);
    assert_close(pt(glyph.position().y), 2.5);
    assert_close(pt(accent.ascent()), 8.1);
    assert_close(pt(accent.width()), 5.);
}

#[test]
fn accent_glyph_comes_from_the_last_scalar() {
    let font = load_font();
    let hat = MathAtom::accent("\u{0301}\u{0302}", factory::atom_list_for("x"));
    let display = typeset(&single(hat), LayoutSettings::new(&font));

    match display.children()[0].kind() {
        DisplayKind::Accent(parts) => match parts.accent.kind() {
            DisplayKind::Glyph(glyph) => assert_eq!(Some(glyph.glyph), font.glyph_with_name("u0302.flac")),
            other => panic!("expected a glyph, got {:?}", other),
        },
        other => panic!("expected an accent, got {:?}", other),
    }
}

#[test]
fn accent_scripts_go_to_a_single_character() {
    let font = load_font();
    let hat = with_scripts(MathAtom::accent("\u{0302}", factory::atom_list_for("x")), None, Some("2"));
    let display = typeset(&single(hat), LayoutSettings::new(&font));

    let accent = display.children()[0];
    assert_eq!(display.children().len(), 1);
    assert!(!accent.has_script());
    let accentee = match accent.kind() {
        DisplayKind::Accent(parts) => &parts.accentee,
        other => panic!("expected an accent, got {:?}", other),
    };
    assert_eq!(script_boxes(accentee).len(), 1);
}

#[test]
fn overline_and_underline() {
    let font = load_font();

    let over = typeset(&single(MathAtom::overline(factory::atom_list_for("x"))), LayoutSettings::new(&font));
    let over = over.children()[0];
    assert_close(pt(over.ascent()), 9.);
    assert_close(pt(over.descent()), 2.);
    match over.kind() {
        DisplayKind::Line(line) => assert_close(pt(line.line_shift_up), 8.4),
        other => panic!("expected a line, got {:?}", other),
    }

    let under = typeset(&single(MathAtom::underline(factory::atom_list_for("x"))), LayoutSettings::new(&font));
    let under = under.children()[0];
    assert_close(pt(under.ascent()), 7.);
    assert_close(pt(under.descent()), 4.);
    match under.kind() {
        DisplayKind::Line(line) => assert_close(pt(line.line_shift_up), -3.4),
        other => panic!("expected a line, got {:?}", other),
    }
}

#[test]
fn tables_are_centred_on_the_axis() {
    let font = load_font();
    let rows = vec![
        vec![factory::atom_list_for("x")],
        vec![factory::atom_list_for("y")],
    ];
    let table = table_with_environment(None, rows).unwrap();
    let display = typeset(&single(table), LayoutSettings::new(&font));

    let table = display.children()[0];
    let rows = table.children();
    assert_eq!(rows.len(), 2);
    // one jot of extra spacing: 12pt plus 3pt between baselines
    assert_close(pt(rows[0].position().y), 7.5);
    assert_close(pt(rows[1].position().y), -7.5);
    assert_close(pt(table.ascent() - table.descent()) / 2., pt(font.axis_height()));
}

#[test]
fn space_between_binary_operator_and_operands() {
    let font = load_font();
    let display = typeset(&factory::atom_list_for("a+b"), LayoutSettings::new(&font));
    let medium = 4. * 10. / 18.;
    assert_close(pt(display.width()), 5. + 6. + 5. + 2. * medium);

    // in script style the medium space vanishes
    let display = typeset(&factory::atom_list_for("a+b"), LayoutSettings::new(&font).with_style(LineStyle::Script));
    assert_close(pt(display.width()), (5. + 6. + 5.) * 0.7);
}

#[test]
fn leading_binary_operator_is_unary() {
    let font = load_font();
    let display = typeset(&factory::atom_list_for("-a"), LayoutSettings::new(&font));
    // no space at all: the minus is a unary operator and fuses with the variable
    assert_eq!(display.children().len(), 1);
    assert_close(pt(display.width()), 6. + 5.);
}

#[test]
fn display_tree_serializes() {
    #[derive(Serialize, Deserialize)]
    struct Snapshot {
        formula : String,
        display : Display,
    }

    let font = load_font();
    let list = single(factory::fraction_with_strings("1", "2"));
    let snapshot = Snapshot { formula : "1/2".to_string(), display : typeset(&list, LayoutSettings::new(&font)) };
    let json = serde_json::to_string(&snapshot).unwrap();
    let back : Snapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back.display, snapshot.display);
}

#[test]
fn assembly_is_as_wide_as_its_widest_part() {
    let font = load_font();
    let sqrt = font.glyph_for_char('\u{221A}').unwrap();
    let construction = construct_glyph(&font, sqrt, Unit::new(30.), Range::ZERO).unwrap();
    match construction.kind() {
        DisplayKind::GlyphConstruction(parts) => assert!(parts.glyphs.len() >= 3),
        other => panic!("expected a glyph construction, got {:?}", other),
    }
    // the top part is wider than the bottom one
    assert_close(pt(construction.width()), 8.);
}
