extern crate mathbox;

#[macro_use]
extern crate serde_derive;

mod common;
use common::load_font;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use mathbox::atom::{factory, AtomType, MathAtom, MathList, Range};
use mathbox::dimensions::Unit;
use mathbox::layout::{typeset, LayoutSettings};

const SEEDS : u64 = 200;

const PLAIN : &[(AtomType, &str)] = &[
    (AtomType::Variable, "x"),
    (AtomType::Variable, "y"),
    (AtomType::Number, "1"),
    (AtomType::Number, "7"),
    (AtomType::Number, "."),
    (AtomType::Ordinary, "\u{221E}"),
    (AtomType::BinaryOperator, "+"),
    (AtomType::BinaryOperator, "\u{2212}"),
    (AtomType::Relation, "="),
    (AtomType::Relation, "<"),
    (AtomType::Open, "("),
    (AtomType::Close, ")"),
    (AtomType::Punctuation, ","),
];

fn random_list(rng : &mut StdRng, depth : usize) -> MathList {
    let mut list = MathList::new();
    for _ in 0 .. rng.gen_range(0 ..= 8) {
        list.add(random_atom(rng, depth)).unwrap();
    }
    list
}

fn random_atom(rng : &mut StdRng, depth : usize) -> MathAtom {
    let nested = depth > 0 && rng.gen_bool(0.2);
    let mut atom = if nested {
        match rng.gen_range(0 .. 3) {
            0 => MathAtom::fraction(random_list(rng, depth - 1), random_list(rng, depth - 1)),
            1 => MathAtom::radical(random_list(rng, depth - 1), None),
            _ => MathAtom::inner(
                random_list(rng, depth - 1),
                factory::boundary_for_delimiter("("),
                factory::boundary_for_delimiter(")"),
            ).unwrap(),
        }
    } else {
        let (atom_type, nucleus) = PLAIN[rng.gen_range(0 .. PLAIN.len())];
        MathAtom::new(atom_type, nucleus)
    };

    if depth > 0 && rng.gen_bool(0.15) {
        atom.set_superscript(Some(random_list(rng, depth - 1))).unwrap();
    }
    if depth > 0 && rng.gen_bool(0.1) {
        atom.set_subscript(Some(random_list(rng, depth - 1))).unwrap();
    }
    atom
}

fn for_random_lists(check : impl Fn(u64, &MathList)) {
    for seed in 0 .. SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let list = random_list(&mut rng, 2);
        check(seed, &list);
    }
}

#[test]
fn finalizing_twice_changes_nothing() {
    for_random_lists(|seed, list| {
        let once = list.finalized();
        assert_eq!(once.finalized(), once, "seed {}", seed);
    });
}

#[test]
fn ranges_are_contiguous() {
    for_random_lists(|seed, list| {
        let finalized = list.finalized();
        let mut end = 0;
        for atom in &finalized {
            assert_eq!(atom.index_range.location, end, "seed {}", seed);
            assert!(atom.index_range.length >= 1, "seed {}", seed);
            end = atom.index_range.end();
        }
    });
}

#[test]
fn no_binary_operator_in_unary_position() {
    for_random_lists(|seed, list| {
        let finalized = list.finalized();
        let atoms = finalized.atoms();
        for (i, atom) in atoms.iter().enumerate() {
            if atom.atom_type() != AtomType::BinaryOperator {
                continue;
            }
            assert!(i > 0 && !atoms[i - 1].is_not_binary_operator(), "seed {}: binary operator {} opens an operand", seed, i);
            let next = atoms.get(i + 1).map(MathAtom::atom_type);
            assert!(
                !matches!(next, None | Some(AtomType::Relation | AtomType::Punctuation | AtomType::Close)),
                "seed {}: binary operator {} has no right operand", seed, i,
            );
        }
    });
}

#[test]
fn layout_of_random_lists_is_well_formed() {
    let font = load_font();
    for_random_lists(|seed, list| {
        let display = typeset(list, LayoutSettings::new(&font));
        assert!(display.ascent() >= Unit::ZERO, "seed {}", seed);
        assert!(display.descent() >= Unit::ZERO, "seed {}", seed);
        assert!(display.width() >= Unit::ZERO, "seed {}", seed);
        assert!(display.width().to_unitless().is_finite(), "seed {}", seed);
    });
}

#[test]
fn digits_and_decimal_point_make_one_number() {
    let finalized = factory::atom_list_for("3.14").finalized();
    assert_eq!(finalized.len(), 1);
    let number = &finalized.atoms()[0];
    assert_eq!(number.atom_type(), AtomType::Number);
    assert_eq!(number.nucleus, "3.14");
    assert_eq!(number.index_range, Range::new(0, 4));

    // a superscript stops the number
    let mut list = factory::atom_list_for("3");
    let mut one = factory::atom_for_character('1').unwrap();
    one.set_superscript(Some(factory::atom_list_for("2"))).unwrap();
    list.add(one).unwrap();
    list.append(factory::atom_list_for("4"));
    let finalized = list.finalized();
    assert_eq!(finalized.len(), 2);
    assert_eq!(finalized.atoms()[0].nucleus, "31");
    assert!(finalized.atoms()[0].has_scripts());
    assert_eq!(finalized.atoms()[1].nucleus, "4");
}
