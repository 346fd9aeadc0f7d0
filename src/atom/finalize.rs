//! Normalization of math lists prior to layout.
//!
//! Finalizing a list:
//!   - gives a contiguous one-element source range to atoms that have none,
//!   - turns binary operators in unary position into unary operators,
//!   - fuses runs of numbers (e.g. `3`, `.`, `1`, `4`) into a single number atom.
//!
//! Nested lists (scripts, numerators, radicands, cells, ...) are finalized recursively.
//! Finalizing is idempotent: a finalized list is left unchanged by a second pass.

use super::{AtomKind, AtomType, MathAtom, MathList, Range};

/// Returns the finalized copy of `list`; `list` itself is left untouched.
pub fn finalize(list : &MathList) -> MathList {
    let mut finalized = MathList::new();
    let atoms = finalized.atoms_mut();

    for atom in list.iter() {
        let mut node = finalize_atom(atom);

        if node.index_range == Range::ZERO {
            let location = atoms.last().map_or(0, |prev| prev.index_range.end());
            node.index_range = Range::new(location, 1);
        }

        match node.atom_type() {
            AtomType::BinaryOperator => {
                let unary_position = atoms.last().map_or(true, MathAtom::is_not_binary_operator);
                if unary_position {
                    node.set_plain_kind(AtomKind::UnaryOperator);
                }
            },
            AtomType::Relation | AtomType::Punctuation | AtomType::Close => {
                if let Some(prev) = atoms.last_mut() {
                    demote_binary(prev);
                }
            },
            AtomType::Number => {
                if let Some(prev) = atoms.last_mut() {
                    if prev.atom_type() == AtomType::Number && !prev.has_scripts() {
                        trace!("fusing number {:?} into {:?}", node.nucleus, prev.nucleus);
                        prev.absorb(node);
                        continue;
                    }
                }
            },
            _ => (),
        }

        atoms.push(node);
    }

    if let Some(last) = atoms.last_mut() {
        demote_binary(last);
    }

    finalized
}

fn demote_binary(atom : &mut MathAtom) {
    if atom.atom_type() == AtomType::BinaryOperator {
        atom.set_plain_kind(AtomKind::UnaryOperator);
    }
}

fn finalize_atom(atom : &MathAtom) -> MathAtom {
    let mut node = atom.clone();
    for list in node.lists_mut() {
        *list = finalize(list);
    }
    node
}
