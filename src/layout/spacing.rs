//! This module defines functions that gives the most esthetically pleasing spacing between two types of atoms.
//! Functions from this module for instance decide that "f" is followed by less space in "f(" than in "f +".
//!
//! The table is the one of the TeXbook (chapter 18) with an additional row for radicals,
//! which only ever appear on the left of a pair.
use crate::atom::{AtomType, LineStyle};
use crate::dimensions::units::Mu;
use crate::dimensions::Unit;

/// Different types of space
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Spacing {
    /// no space
    None,
    /// thin space, in every style
    Thin,
    /// thin space, except in script styles
    NonScriptThin,
    /// medium space, except in script styles
    NonScriptMedium,
    /// thick space, except in script styles
    NonScriptThick,
}

impl Spacing {
    /// Returns how much a given type of space measures in *mu* in `style`
    pub fn to_mu(self, style : LineStyle) -> Unit<Mu> {
        let mu = match self {
            Spacing::None => 0.,
            Spacing::Thin => 3.,
            Spacing::NonScriptThin   if style.is_not_script() => 3.,
            Spacing::NonScriptMedium if style.is_not_script() => 4.,
            Spacing::NonScriptThick  if style.is_not_script() => 5.,
            _ => 0.,
        };
        Unit::new(mu)
    }
}

/// Class of an atom in the spacing table
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Class {
    Ordinary,
    Operator,
    Binary,
    Relation,
    Open,
    Close,
    Punctuation,
    Inner,
    Radical,
}

fn class(atom_type : AtomType) -> Option<Class> {
    let class = match atom_type {
        // placeholders and coloured formulas space like ordinary symbols
        AtomType::Ordinary
        | AtomType::Number
        | AtomType::Variable
        | AtomType::UnaryOperator
        | AtomType::Placeholder
        | AtomType::Color
        | AtomType::TextColor
        | AtomType::ColorBox => Class::Ordinary,
        AtomType::LargeOperator  => Class::Operator,
        AtomType::BinaryOperator => Class::Binary,
        AtomType::Relation       => Class::Relation,
        AtomType::Open           => Class::Open,
        AtomType::Close          => Class::Close,
        AtomType::Punctuation    => Class::Punctuation,
        AtomType::Fraction | AtomType::Inner => Class::Inner,
        AtomType::Radical        => Class::Radical,
        _ => return None,
    };
    Some(class)
}

/// Given the type of two subsequent atoms, determines how much spacing should occur between the two symbols.
/// Returns `None` for pairs that cannot occur in a finalized list (e.g. two binary operators in a row)
/// and for atom types that never take part in spacing.
pub fn atom_space(left : AtomType, right : AtomType) -> Option<Spacing> {
    use self::Class::*;
    use self::Spacing::{NonScriptMedium as Medium, NonScriptThick as Thick, NonScriptThin as NsThin, Thin};

    let left = class(left)?;
    let right = class(right)?;
    let spacing = match (left, right) {
        (_, Radical) => return None,

        (Ordinary, Operator) => Thin,
        (Ordinary, Binary)   => Medium,
        (Ordinary, Relation) => Thick,
        (Ordinary, Inner)    => NsThin,

        (Operator, Ordinary | Operator) => Thin,
        (Operator, Binary)   => return None,
        (Operator, Relation) => Thick,
        (Operator, Inner)    => NsThin,

        (Binary, Ordinary | Operator | Open | Inner) => Medium,
        (Binary, _)          => return None,

        (Relation, Ordinary | Operator | Open | Inner) => Thick,
        (Relation, Binary)   => return None,

        (Open, Binary)       => return None,

        (Close, Operator)    => Thin,
        (Close, Binary)      => Medium,
        (Close, Relation)    => Thick,
        (Close, Inner)       => NsThin,

        (Punctuation, Binary) => return None,
        (Punctuation, _)     => NsThin,

        (Inner, Operator)    => Thin,
        (Inner, Binary)      => Medium,
        (Inner, Relation)    => Thick,
        (Inner, Close)       => Spacing::None,
        (Inner, _)           => NsThin,

        (Radical, Ordinary)  => Medium,
        (Radical, Operator)  => Thin,
        (Radical, Binary)    => Medium,
        (Radical, Relation)  => Thick,
        (Radical, Inner)     => NsThin,

        _ => Spacing::None,
    };
    Some(spacing)
}
