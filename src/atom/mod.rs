//! The atom model: the semantic tree that layout consumes.
//!
//! A formula is a [`MathList`], an ordered list of [`MathAtom`]s. Each atom has a type, a nucleus (the text to draw,
//! possibly empty), optional sub- and superscripts and, depending on its type, a payload (e.g. the numerator
//! and denominator of a fraction). The payload lives in [`AtomKind`], a closed enum: the atom type of an atom is
//! always the one derived from its kind.
//!
//! Atoms are produced by an external builder (a parser, an editor), normalized once by [`finalize`](finalize::finalize)
//! and then treated as immutable input by layout.

use std::fmt;

use crate::color::RGBA;
use crate::error::{AtomError, AtomResult};

pub mod factory;
pub mod finalize;
pub mod table;
mod symbols;

pub use self::table::Table;

/// The different types of atoms, in the order used to decide which of them accept scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AtomType {
    /// A plain symbol, e.g. `/` or `∞`
    Ordinary,
    /// A digit or a decimal point
    Number,
    /// A letter, italicized by default
    Variable,
    /// Operators like `∑`, `∫` or `lim`
    LargeOperator,
    /// `+`, `×`, `∪`, ...
    BinaryOperator,
    /// A binary operator used in a position where it has only one operand, e.g. the minus in `-x`
    UnaryOperator,
    /// `=`, `<`, `→`, ...
    Relation,
    /// Opening brackets
    Open,
    /// Closing brackets
    Close,
    /// A fraction, or a stack when it has no rule
    Fraction,
    /// A square root or a root of some degree
    Radical,
    /// `,` and `;`
    Punctuation,
    /// An empty box to be filled by the user of an editor
    Placeholder,
    /// A sub-formula, possibly wrapped in delimiters
    Inner,
    /// A sub-formula with a rule below it
    Underline,
    /// A sub-formula with a rule above it
    Overline,
    /// A sub-formula with an accent (hat, tilde, ...) above it
    Accent,

    // Atoms from here on do not accept scripts
    /// The left or right delimiter of an [`AtomType::Inner`]; never appears in a math list
    Boundary,
    /// Horizontal space
    Space,
    /// A change of style for the rest of the list
    Style,
    /// A sub-formula in a given colour
    Color,
    /// A sub-formula whose text is in a given colour
    TextColor,
    /// A sub-formula drawn over a coloured background
    ColorBox,
    /// A matrix or an alignment
    Table,
}

impl AtomType {
    /// Can an atom of this type carry a sub- or superscript?
    pub fn is_script_allowed(self) -> bool {
        self < AtomType::Boundary
    }

    /// If an atom of this type precedes a binary operator, the binary operator is in fact used as a unary operator.
    pub fn is_not_binary_operator(self) -> bool {
        matches!(self,
            AtomType::BinaryOperator
            | AtomType::Relation
            | AtomType::Open
            | AtomType::Punctuation
            | AtomType::LargeOperator
        )
    }
}

/// A range of indices into the source the atoms were built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Range {
    /// index of the first source element
    pub location : usize,
    /// number of source elements covered
    pub length : usize,
}

impl Range {
    /// The empty range at position 0: an atom that does not know where it comes from
    pub const ZERO : Self = Self { location: 0, length: 0 };

    /// Creates a new range
    pub const fn new(location : usize, length : usize) -> Self {
        Self { location, length }
    }

    /// One past the last index covered
    pub fn end(self) -> usize {
        self.location + self.length
    }

    /// The smallest range covering `self` and `other`
    pub fn union(self, other : Self) -> Self {
        let location = self.location.min(other.location);
        let end = self.end().max(other.end());
        Self { location, length: end - location }
    }
}

/// The font style of a character. Only variables and numbers are affected by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FontStyle {
    /// Variables in italic, numbers upright
    #[default]
    Default,
    /// `\mathrm`
    Roman,
    /// `\mathbf`
    Bold,
    /// `\mathcal`
    Caligraphic,
    /// `\mathtt`
    Typewriter,
    /// `\mathit`
    Italic,
    /// `\mathsf`
    SansSerif,
    /// `\mathfrak`
    Fraktur,
    /// `\mathbb`
    Blackboard,
    /// `\mathbfit`
    BoldItalic,
}

/// Styling of a line of math, from the biggest to the smallest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum LineStyle {
    /// Display style (`$$ ... $$`)
    #[default]
    Display,
    /// Text style (inline formulas)
    Text,
    /// Style of sub- and superscripts
    Script,
    /// Style of the scripts of scripts
    ScriptOfScript,
}

impl LineStyle {
    /// The style one level smaller. The smallest style stays as it is.
    pub fn inc(self) -> Self {
        match self {
            LineStyle::Display => LineStyle::Text,
            LineStyle::Text    => LineStyle::Script,
            LineStyle::Script | LineStyle::ScriptOfScript => LineStyle::ScriptOfScript,
        }
    }

    /// Display and text style
    pub fn is_not_script(self) -> bool {
        self < LineStyle::Script
    }
}

/// Horizontal alignment of the cells of a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ColumnAlignment {
    /// flush left
    Left,
    /// centered
    #[default]
    Center,
    /// flush right
    Right,
}

/// Numerator and denominator of a fraction.
#[derive(Debug, Clone, PartialEq)]
pub struct Fraction {
    /// top part
    pub numerator : MathList,
    /// bottom part
    pub denominator : MathList,
    /// fractions without rules are stacks, e.g. binomial coefficients
    pub has_rule : bool,
    /// delimiter drawn on the left of the fraction, empty for none
    pub left_delimiter : String,
    /// delimiter drawn on the right of the fraction, empty for none
    pub right_delimiter : String,
}

impl Fraction {
    /// A fraction with a rule and no delimiters
    pub fn new(numerator : MathList, denominator : MathList) -> Self {
        Self {
            numerator,
            denominator,
            has_rule : true,
            left_delimiter  : String::new(),
            right_delimiter : String::new(),
        }
    }
}

/// Radicand and optional degree of a radical.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Radical {
    /// what is under the root sign
    pub radicand : MathList,
    /// the degree drawn in the crook of the root sign (e.g. 3 for cube roots)
    pub degree : Option<MathList>,
}

/// A sub-formula with optional delimiters that grow to fit it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Inner {
    /// the sub-formula
    pub inner_list : MathList,
    left_boundary  : Option<Box<MathAtom>>,
    right_boundary : Option<Box<MathAtom>>,
}

impl Inner {
    /// A sub-formula without delimiters
    pub fn new(inner_list : MathList) -> Self {
        Self { inner_list, left_boundary: None, right_boundary: None }
    }

    /// Left delimiter, an atom of type [`AtomType::Boundary`]
    pub fn left_boundary(&self) -> Option<&MathAtom> {
        self.left_boundary.as_deref()
    }

    /// Right delimiter, an atom of type [`AtomType::Boundary`]
    pub fn right_boundary(&self) -> Option<&MathAtom> {
        self.right_boundary.as_deref()
    }

    /// Sets the left delimiter. Fails if the atom is not of type [`AtomType::Boundary`].
    pub fn set_left_boundary(&mut self, boundary : Option<MathAtom>) -> AtomResult<()> {
        self.left_boundary = checked_boundary(boundary)?;
        Ok(())
    }

    /// Sets the right delimiter. Fails if the atom is not of type [`AtomType::Boundary`].
    pub fn set_right_boundary(&mut self, boundary : Option<MathAtom>) -> AtomResult<()> {
        self.right_boundary = checked_boundary(boundary)?;
        Ok(())
    }
}

fn checked_boundary(boundary : Option<MathAtom>) -> AtomResult<Option<Box<MathAtom>>> {
    match boundary {
        Some(atom) if atom.atom_type() != AtomType::Boundary =>
            Err(AtomError::InvalidBoundary { atom_type: atom.atom_type() }),
        other => Ok(other.map(Box::new)),
    }
}

/// Type of an atom together with the data that only atoms of that type have.
#[derive(Debug, Clone, PartialEq)]
pub enum AtomKind {
    /// see [`AtomType::Ordinary`]
    Ordinary,
    /// see [`AtomType::Number`]
    Number,
    /// see [`AtomType::Variable`]
    Variable,
    /// see [`AtomType::LargeOperator`]
    LargeOperator {
        /// if true, scripts are drawn as limits above and below the operator in display style
        limits : bool,
    },
    /// see [`AtomType::BinaryOperator`]
    BinaryOperator,
    /// see [`AtomType::UnaryOperator`]
    UnaryOperator,
    /// see [`AtomType::Relation`]
    Relation,
    /// see [`AtomType::Open`]
    Open,
    /// see [`AtomType::Close`]
    Close,
    /// see [`AtomType::Fraction`]
    Fraction(Fraction),
    /// see [`AtomType::Radical`]
    Radical(Radical),
    /// see [`AtomType::Punctuation`]
    Punctuation,
    /// see [`AtomType::Placeholder`]
    Placeholder,
    /// see [`AtomType::Inner`]
    Inner(Inner),
    /// see [`AtomType::Underline`]
    Underline {
        /// the underlined formula
        inner_list : MathList,
    },
    /// see [`AtomType::Overline`]
    Overline {
        /// the overlined formula
        inner_list : MathList,
    },
    /// see [`AtomType::Accent`]. The nucleus of the atom is the accent character.
    Accent {
        /// the accented formula
        inner_list : MathList,
    },
    /// see [`AtomType::Boundary`]
    Boundary,
    /// see [`AtomType::Space`]
    Space {
        /// amount of space, in mu
        space : f64,
    },
    /// see [`AtomType::Style`]
    Style(LineStyle),
    /// see [`AtomType::Color`]
    Color {
        /// colour of the formula
        color : RGBA,
        /// the coloured formula
        inner_list : MathList,
    },
    /// see [`AtomType::TextColor`]
    TextColor {
        /// colour of the text of the formula
        color : RGBA,
        /// the coloured formula
        inner_list : MathList,
    },
    /// see [`AtomType::ColorBox`]
    ColorBox {
        /// colour of the background
        color : RGBA,
        /// the formula drawn over the background
        inner_list : MathList,
    },
    /// see [`AtomType::Table`]
    Table(Table),
}

impl AtomKind {
    /// The kind of a freshly created atom of the given type, with empty payload
    pub fn empty(atom_type : AtomType) -> Self {
        match atom_type {
            AtomType::Ordinary       => AtomKind::Ordinary,
            AtomType::Number         => AtomKind::Number,
            AtomType::Variable       => AtomKind::Variable,
            AtomType::LargeOperator  => AtomKind::LargeOperator { limits: false },
            AtomType::BinaryOperator => AtomKind::BinaryOperator,
            AtomType::UnaryOperator  => AtomKind::UnaryOperator,
            AtomType::Relation       => AtomKind::Relation,
            AtomType::Open           => AtomKind::Open,
            AtomType::Close          => AtomKind::Close,
            AtomType::Fraction       => AtomKind::Fraction(Fraction::new(MathList::new(), MathList::new())),
            AtomType::Radical        => AtomKind::Radical(Radical::default()),
            AtomType::Punctuation    => AtomKind::Punctuation,
            AtomType::Placeholder    => AtomKind::Placeholder,
            AtomType::Inner          => AtomKind::Inner(Inner::default()),
            AtomType::Underline      => AtomKind::Underline { inner_list: MathList::new() },
            AtomType::Overline       => AtomKind::Overline  { inner_list: MathList::new() },
            AtomType::Accent         => AtomKind::Accent    { inner_list: MathList::new() },
            AtomType::Boundary       => AtomKind::Boundary,
            AtomType::Space          => AtomKind::Space { space: 0. },
            AtomType::Style          => AtomKind::Style(LineStyle::Display),
            AtomType::Color          => AtomKind::Color     { color: RGBA::BLACK, inner_list: MathList::new() },
            AtomType::TextColor      => AtomKind::TextColor { color: RGBA::BLACK, inner_list: MathList::new() },
            AtomType::ColorBox       => AtomKind::ColorBox  { color: RGBA::BLACK, inner_list: MathList::new() },
            AtomType::Table          => AtomKind::Table(Table::default()),
        }
    }

    /// The atom type of this kind
    pub fn atom_type(&self) -> AtomType {
        match self {
            AtomKind::Ordinary            => AtomType::Ordinary,
            AtomKind::Number              => AtomType::Number,
            AtomKind::Variable            => AtomType::Variable,
            AtomKind::LargeOperator { .. } => AtomType::LargeOperator,
            AtomKind::BinaryOperator      => AtomType::BinaryOperator,
            AtomKind::UnaryOperator       => AtomType::UnaryOperator,
            AtomKind::Relation            => AtomType::Relation,
            AtomKind::Open                => AtomType::Open,
            AtomKind::Close               => AtomType::Close,
            AtomKind::Fraction(_)         => AtomType::Fraction,
            AtomKind::Radical(_)          => AtomType::Radical,
            AtomKind::Punctuation         => AtomType::Punctuation,
            AtomKind::Placeholder         => AtomType::Placeholder,
            AtomKind::Inner(_)            => AtomType::Inner,
            AtomKind::Underline { .. }    => AtomType::Underline,
            AtomKind::Overline { .. }     => AtomType::Overline,
            AtomKind::Accent { .. }       => AtomType::Accent,
            AtomKind::Boundary            => AtomType::Boundary,
            AtomKind::Space { .. }        => AtomType::Space,
            AtomKind::Style(_)            => AtomType::Style,
            AtomKind::Color { .. }        => AtomType::Color,
            AtomKind::TextColor { .. }    => AtomType::TextColor,
            AtomKind::ColorBox { .. }     => AtomType::ColorBox,
            AtomKind::Table(_)            => AtomType::Table,
        }
    }

    /// Every math list owned by the payload, in a fixed order.
    pub(crate) fn lists_mut(&mut self) -> Vec<&mut MathList> {
        match self {
            AtomKind::Fraction(fraction) => vec![&mut fraction.numerator, &mut fraction.denominator],
            AtomKind::Radical(radical)   => {
                let mut lists = vec![&mut radical.radicand];
                lists.extend(radical.degree.as_mut());
                lists
            },
            AtomKind::Inner(inner) => vec![&mut inner.inner_list],
            AtomKind::Underline { inner_list }
            | AtomKind::Overline { inner_list }
            | AtomKind::Accent { inner_list }
            | AtomKind::Color { inner_list, .. }
            | AtomKind::TextColor { inner_list, .. }
            | AtomKind::ColorBox { inner_list, .. } => vec![inner_list],
            AtomKind::Table(table) => table.cells.iter_mut().flatten().collect(),
            _ => Vec::new(),
        }
    }
}

/// The basic unit of a math list.
#[derive(Debug, Clone, PartialEq)]
pub struct MathAtom {
    /// the characters to draw ; may be empty (fractions, radicals, spaces, ...)
    pub nucleus : String,
    kind : AtomKind,
    subscript   : Option<MathList>,
    superscript : Option<MathList>,
    /// the range in the source this atom was built from
    pub index_range : Range,
    /// only affects variables and numbers
    pub font_style : FontStyle,
    fused_atoms : Vec<MathAtom>,
}

impl MathAtom {
    /// Creates an atom of the given type and nucleus, with an empty payload.
    /// The nucleus of radicals is always empty.
    pub fn new(atom_type : AtomType, nucleus : impl Into<String>) -> Self {
        let nucleus = if atom_type == AtomType::Radical { String::new() } else { nucleus.into() };
        Self::with_kind(AtomKind::empty(atom_type), nucleus)
    }

    /// Creates an atom with a given kind and nucleus.
    pub fn with_kind(kind : AtomKind, nucleus : impl Into<String>) -> Self {
        Self {
            nucleus : nucleus.into(),
            kind,
            subscript   : None,
            superscript : None,
            index_range : Range::ZERO,
            font_style  : FontStyle::Default,
            fused_atoms : Vec::new(),
        }
    }

    /// A fraction with a rule.
    pub fn fraction(numerator : MathList, denominator : MathList) -> Self {
        Self::with_kind(AtomKind::Fraction(Fraction::new(numerator, denominator)), "")
    }

    /// A root of the given degree, or a square root.
    pub fn radical(radicand : MathList, degree : Option<MathList>) -> Self {
        Self::with_kind(AtomKind::Radical(Radical { radicand, degree }), "")
    }

    /// A sub-formula between two boundary atoms.
    pub fn inner(inner_list : MathList, left : Option<MathAtom>, right : Option<MathAtom>) -> AtomResult<Self> {
        let mut inner = Inner::new(inner_list);
        inner.set_left_boundary(left)?;
        inner.set_right_boundary(right)?;
        Ok(Self::with_kind(AtomKind::Inner(inner), ""))
    }

    /// A large operator such as `∑` or `lim`.
    pub fn large_operator(name : impl Into<String>, limits : bool) -> Self {
        Self::with_kind(AtomKind::LargeOperator { limits }, name)
    }

    /// An accent (whose nucleus is the accent character) over a formula.
    pub fn accent(accent : impl Into<String>, inner_list : MathList) -> Self {
        Self::with_kind(AtomKind::Accent { inner_list }, accent)
    }

    /// An underlined formula.
    pub fn underline(inner_list : MathList) -> Self {
        Self::with_kind(AtomKind::Underline { inner_list }, "")
    }

    /// An overlined formula.
    pub fn overline(inner_list : MathList) -> Self {
        Self::with_kind(AtomKind::Overline { inner_list }, "")
    }

    /// Horizontal space, in mu.
    pub fn space(space : f64) -> Self {
        Self::with_kind(AtomKind::Space { space }, "")
    }

    /// A style change.
    pub fn style(style : LineStyle) -> Self {
        Self::with_kind(AtomKind::Style(style), "")
    }

    /// A formula in a given colour.
    pub fn color(color : RGBA, inner_list : MathList) -> Self {
        Self::with_kind(AtomKind::Color { color, inner_list }, "")
    }

    /// A formula whose text has the given colour.
    pub fn text_color(color : RGBA, inner_list : MathList) -> Self {
        Self::with_kind(AtomKind::TextColor { color, inner_list }, "")
    }

    /// A formula over a coloured background.
    pub fn color_box(color : RGBA, inner_list : MathList) -> Self {
        Self::with_kind(AtomKind::ColorBox { color, inner_list }, "")
    }

    /// A table atom.
    pub fn table(table : Table) -> Self {
        Self::with_kind(AtomKind::Table(table), "")
    }

    /// Type of the atom, as determined by its kind
    pub fn atom_type(&self) -> AtomType {
        self.kind.atom_type()
    }

    /// The payload of the atom
    pub fn kind(&self) -> &AtomKind {
        &self.kind
    }

    /// Mutable access to the payload of the atom
    pub fn kind_mut(&mut self) -> &mut AtomKind {
        &mut self.kind
    }

    /// Only payload-free kinds can be swapped in place (e.g. binary to unary operator).
    pub(crate) fn set_plain_kind(&mut self, kind : AtomKind) {
        self.kind = kind;
    }

    /// The subscript, if any
    pub fn subscript(&self) -> Option<&MathList> {
        self.subscript.as_ref()
    }

    /// The superscript, if any
    pub fn superscript(&self) -> Option<&MathList> {
        self.superscript.as_ref()
    }

    /// Sets or clears the subscript. Setting one fails on atoms whose type does not accept scripts.
    pub fn set_subscript(&mut self, subscript : Option<MathList>) -> AtomResult<()> {
        if subscript.is_some() && !self.is_script_allowed() {
            return Err(AtomError::ScriptNotAllowed { atom_type: self.atom_type() });
        }
        self.subscript = subscript;
        Ok(())
    }

    /// Sets or clears the superscript. Setting one fails on atoms whose type does not accept scripts.
    pub fn set_superscript(&mut self, superscript : Option<MathList>) -> AtomResult<()> {
        if superscript.is_some() && !self.is_script_allowed() {
            return Err(AtomError::ScriptNotAllowed { atom_type: self.atom_type() });
        }
        self.superscript = superscript;
        Ok(())
    }

    /// Has the atom a sub- or a superscript?
    pub fn has_scripts(&self) -> bool {
        self.subscript.is_some() || self.superscript.is_some()
    }

    /// Removes the scripts of the atom and returns them as (subscript, superscript)
    pub fn take_scripts(&mut self) -> (Option<MathList>, Option<MathList>) {
        (self.subscript.take(), self.superscript.take())
    }

    /// The atoms this atom was made of, if it is the result of fusing atoms
    pub fn fused_atoms(&self) -> &[MathAtom] {
        &self.fused_atoms
    }

    /// see [`AtomType::is_script_allowed`]
    pub fn is_script_allowed(&self) -> bool {
        self.atom_type().is_script_allowed()
    }

    /// see [`AtomType::is_not_binary_operator`]
    pub fn is_not_binary_operator(&self) -> bool {
        self.atom_type().is_not_binary_operator()
    }

    /// Fuses `other` into `self`: nuclei are concatenated, the range is extended and `self` takes the scripts of `other`.
    /// Both atoms must have the same type and `self` must not have scripts.
    pub fn fuse(&mut self, other : MathAtom) -> AtomResult<()> {
        if self.atom_type() != other.atom_type() {
            return Err(AtomError::FuseMismatch { left: self.atom_type(), right: other.atom_type() });
        }
        if self.has_scripts() {
            return Err(AtomError::FuseIntoScripted { atom_type: self.atom_type() });
        }
        self.absorb(other);
        Ok(())
    }

    /// Fuse without checks: callers guarantee same types and no scripts on `self`
    pub(crate) fn absorb(&mut self, other : MathAtom) {
        if self.fused_atoms.is_empty() {
            let original = self.clone();
            self.fused_atoms.push(original);
        }

        self.nucleus.push_str(&other.nucleus);
        self.index_range.length += other.index_range.length;
        self.subscript   = other.subscript.clone();
        self.superscript = other.superscript.clone();

        if other.fused_atoms.is_empty() {
            self.fused_atoms.push(other);
        }
        else {
            self.fused_atoms.extend(other.fused_atoms);
        }
    }

    /// Every math list owned by the atom: scripts first, then the payload's lists
    pub(crate) fn lists_mut(&mut self) -> Vec<&mut MathList> {
        let MathAtom { kind, subscript, superscript, .. } = self;
        let mut lists = Vec::new();
        lists.extend(superscript.as_mut());
        lists.extend(subscript.as_mut());
        lists.extend(kind.lists_mut());
        lists
    }
}

impl fmt::Display for MathAtom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.nucleus)?;
        if let Some(superscript) = &self.superscript {
            write!(f, "^{{{}}}", superscript)?;
        }
        if let Some(subscript) = &self.subscript {
            write!(f, "_{{{}}}", subscript)?;
        }
        Ok(())
    }
}

/// An ordered list of atoms. Boundary atoms are not allowed in math lists.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MathList {
    atoms : Vec<MathAtom>,
}

impl MathList {
    /// The empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// A list made of the given atoms. Fails if one of them is a boundary.
    pub fn from_atoms(atoms : Vec<MathAtom>) -> AtomResult<Self> {
        if atoms.iter().any(|atom| atom.atom_type() == AtomType::Boundary) {
            return Err(AtomError::BoundaryNotAllowed);
        }
        Ok(Self { atoms })
    }

    /// A list made of one atom. Fails if it is a boundary.
    pub fn from_atom(atom : MathAtom) -> AtomResult<Self> {
        Self::from_atoms(vec![atom])
    }

    /// The atoms in the list
    pub fn atoms(&self) -> &[MathAtom] {
        &self.atoms
    }

    pub(crate) fn atoms_mut(&mut self) -> &mut Vec<MathAtom> {
        &mut self.atoms
    }

    /// Iterator over the atoms
    pub fn iter(&self) -> std::slice::Iter<'_, MathAtom> {
        self.atoms.iter()
    }

    /// Number of atoms
    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    /// Has the list no atoms?
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Adds an atom at the end of the list.
    pub fn add(&mut self, atom : MathAtom) -> AtomResult<()> {
        if atom.atom_type() == AtomType::Boundary {
            return Err(AtomError::BoundaryNotAllowed);
        }
        self.atoms.push(atom);
        Ok(())
    }

    /// Inserts the atom at `index`, shifting the following atoms.
    /// An insertion past the end of the list is ignored.
    pub fn insert(&mut self, atom : MathAtom, index : usize) -> AtomResult<()> {
        if atom.atom_type() == AtomType::Boundary {
            return Err(AtomError::BoundaryNotAllowed);
        }
        if index <= self.atoms.len() {
            self.atoms.insert(index, atom);
        }
        Ok(())
    }

    /// Appends all the atoms of `list`
    pub fn append(&mut self, list : MathList) {
        self.atoms.extend(list.atoms);
    }

    /// Removes the last atom, if any
    pub fn remove_last(&mut self) {
        self.atoms.pop();
    }

    /// Removes and returns the atom at `index`.
    pub fn remove_at(&mut self, index : usize) -> AtomResult<MathAtom> {
        if index >= self.atoms.len() {
            return Err(AtomError::IndexOutOfBounds { index, len: self.atoms.len() });
        }
        Ok(self.atoms.remove(index))
    }

    /// Removes the atoms whose indices are in `range` (both ends included).
    pub fn remove_range(&mut self, range : std::ops::RangeInclusive<usize>) -> AtomResult<()> {
        let len = self.atoms.len();
        for index in [*range.start(), *range.end()] {
            if index >= len {
                return Err(AtomError::IndexOutOfBounds { index, len });
            }
        }
        if range.start() <= range.end() {
            self.atoms.drain(range);
        }
        Ok(())
    }

    /// A finalized copy of the list, see [`finalize`](finalize::finalize)
    pub fn finalized(&self) -> MathList {
        finalize::finalize(self)
    }
}

impl<'a> IntoIterator for &'a MathList {
    type Item = &'a MathAtom;
    type IntoIter = std::slice::Iter<'a, MathAtom>;

    fn into_iter(self) -> Self::IntoIter {
        self.atoms.iter()
    }
}

impl fmt::Display for MathList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for atom in &self.atoms {
            write!(f, "{}", atom)?;
        }
        Ok(())
    }
}
