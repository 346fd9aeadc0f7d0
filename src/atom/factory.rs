//! Creation of commonly used atoms: atoms for characters, for LaTeX commands, delimiters and accents.
//!
//! The LaTeX commands are kept in a [`SymbolTable`]. [`SymbolTable::standard`] is shared and immutable ;
//! users wishing to define their own commands make a copy with [`SymbolTable::new`] and [`SymbolTable::add`] to it.
//! The free functions of this module use the standard table.
//!
//! Lookups by value (e.g. [`SymbolTable::latex_symbol_name`]) are deterministic when several names stand for the same value:
//! the shortest name wins and, among names of equal length, the alphabetically first one.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::symbols::{self, ACCENTS, ALIASES, DELIMITERS, FONT_STYLES, OPERATORS, SPACES, STYLES, SYMBOLS};
use super::{AtomKind, AtomType, FontStyle, LineStyle, MathAtom, MathList};

/// What identifies an atom when looking up its command name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum SymbolKey {
    Text(String),
    Space(u64),
    Style(LineStyle),
}

impl SymbolKey {
    fn of(atom : &MathAtom) -> Option<Self> {
        match atom.kind() {
            AtomKind::Space { space } => Some(SymbolKey::Space(space.to_bits())),
            AtomKind::Style(style)    => Some(SymbolKey::Style(*style)),
            _ if atom.nucleus.is_empty() => None,
            _ => Some(SymbolKey::Text(atom.nucleus.clone())),
        }
    }
}

/// Is `candidate` a better name than `existing` for the same value?
fn preferred(candidate : &str, existing : &str) -> bool {
    (candidate.len(), candidate) < (existing.len(), existing)
}

/// Reverse of a name -> value table, with the tie-break described in the module documentation.
fn reverse<K, V>(entries : impl IntoIterator<Item = (K, V)>) -> HashMap<V, K>
where K : AsRef<str>, V : std::hash::Hash + Eq
{
    let mut output : HashMap<V, K> = HashMap::new();
    for (name, value) in entries {
        let replace = output.get(&value)
            .map_or(true, |existing| preferred(name.as_ref(), existing.as_ref()));
        if replace {
            output.insert(value, name);
        }
    }
    output
}

/// Registry of LaTeX commands, with a reverse lookup from atoms to command names.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    symbols : HashMap<String, MathAtom>,
    names   : HashMap<SymbolKey, String>,
}

static STANDARD : Lazy<SymbolTable> = Lazy::new(SymbolTable::build_standard);

impl SymbolTable {
    /// The table of all supported commands, shared by the whole process.
    pub fn standard() -> &'static SymbolTable {
        &STANDARD
    }

    /// A copy of the standard table, that can be extended.
    pub fn new() -> Self {
        Self::standard().clone()
    }

    fn build_standard() -> Self {
        let mut symbols = HashMap::new();

        for &(name, atom_type, nucleus) in SYMBOLS {
            symbols.insert(name.to_string(), MathAtom::new(atom_type, nucleus));
        }
        for &(name, nucleus, limits) in OPERATORS {
            symbols.insert(name.to_string(), MathAtom::large_operator(nucleus, limits));
        }
        for &(name, space) in SPACES {
            symbols.insert(name.to_string(), MathAtom::space(space));
        }
        for &(name, style) in STYLES {
            symbols.insert(name.to_string(), MathAtom::style(style));
        }

        let names = reverse(
            symbols.iter()
            .filter_map(|(name, atom)| Some((name.clone(), SymbolKey::of(atom)?)))
        );
        Self { symbols, names }
    }

    /// The atom for a LaTeX command without its backslash (e.g. `theta`). Aliases are resolved.
    pub fn atom_for_latex_symbol(&self, name : &str) -> Option<MathAtom> {
        let name = ALIASES.iter()
            .find(|(alias, _)| *alias == name)
            .map_or(name, |&(_, canonical)| canonical);
        self.symbols.get(name).cloned()
    }

    /// The name of the LaTeX command producing `atom`. For a value reachable through an alias, the canonical name is returned.
    pub fn latex_symbol_name(&self, atom : &MathAtom) -> Option<&str> {
        self.names.get(&SymbolKey::of(atom)?).map(String::as_str)
    }

    /// Names of all the commands in the table (aliases excluded), in no particular order.
    pub fn supported_latex_symbol_names(&self) -> impl Iterator<Item = &str> {
        self.symbols.keys().map(String::as_str)
    }

    /// Defines or overrides the command `name`. The reverse lookup of `atom` returns `name` from then on.
    ///
    /// ```
    /// # use mathbox::atom::factory::{SymbolTable, operator_with_name};
    /// let mut table = SymbolTable::new();
    /// table.add("lcm", operator_with_name("lcm", false));
    /// let lcm = table.atom_for_latex_symbol("lcm").unwrap();
    /// assert_eq!(table.latex_symbol_name(&lcm), Some("lcm"));
    /// ```
    pub fn add(&mut self, name : impl Into<String>, atom : MathAtom) {
        let name = name.into();
        let new_key = SymbolKey::of(&atom);
        let old_key = self.symbols.insert(name.clone(), atom).and_then(|old| SymbolKey::of(&old));

        if let Some(old_key) = old_key {
            if self.names.get(&old_key) == Some(&name) && Some(&old_key) != new_key.as_ref() {
                self.repair(old_key);
            }
        }
        if let Some(key) = new_key {
            self.names.insert(key, name);
        }
    }

    /// Recomputes the name of `key` after the command it pointed to was redefined.
    fn repair(&mut self, key : SymbolKey) {
        let best = self.symbols.iter()
            .filter(|(_, atom)| SymbolKey::of(atom).as_ref() == Some(&key))
            .map(|(name, _)| name)
            .min_by(|a, b| (a.len(), a.as_str()).cmp(&(b.len(), b.as_str())))
            .cloned();
        match best {
            Some(name) => { self.names.insert(key, name); },
            None => { self.names.remove(&key); },
        }
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

/// The atom for a given character, following LaTeX conventions for atom types, e.g. `+` is a binary operator.
///
/// There is no atom for non-ASCII characters (except Cyrillic letters), for spaces and control characters,
/// and for characters with a special meaning in LaTeX: `$ % # & ~ ' ^ _ { } \`.
pub fn atom_for_character(ch : char) -> Option<MathAtom> {
    let atom_type = match ch {
        '\u{0410}' ..= '\u{044F}' => AtomType::Ordinary,
        _ if !('\u{21}' ..= '\u{7E}').contains(&ch) => return None,
        '$' | '%' | '#' | '&' | '~' | '\'' | '^' | '_' | '{' | '}' | '\\' => return None,
        '(' | '[' => AtomType::Open,
        ')' | ']' | '!' | '?' => AtomType::Close,
        ',' | ';' => AtomType::Punctuation,
        '=' | '>' | '<' => AtomType::Relation,
        // ':' is the ratio relation, the punctuation is \colon
        ':' => return Some(MathAtom::new(AtomType::Relation, "\u{2236}")),
        '-' => return Some(MathAtom::new(AtomType::BinaryOperator, "\u{2212}")),
        '+' | '*' => AtomType::BinaryOperator,
        '.' | '0' ..= '9' => AtomType::Number,
        'a' ..= 'z' | 'A' ..= 'Z' => AtomType::Variable,
        _ => AtomType::Ordinary,
    };
    Some(MathAtom::new(atom_type, ch))
}

/// One atom per character of `string`. Characters without atoms are skipped.
pub fn atom_list_for(string : &str) -> MathList {
    MathList { atoms: string.chars().filter_map(atom_for_character).collect() }
}

/// see [`SymbolTable::atom_for_latex_symbol`]
pub fn atom_for_latex_symbol(name : &str) -> Option<MathAtom> {
    SymbolTable::standard().atom_for_latex_symbol(name)
}

/// see [`SymbolTable::latex_symbol_name`]
pub fn latex_symbol_name(atom : &MathAtom) -> Option<&'static str> {
    SymbolTable::standard().latex_symbol_name(atom)
}

static DELIMITER_NAMES : Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| reverse(DELIMITERS.iter().copied()));

static ACCENT_NAMES : Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| reverse(ACCENTS.iter().copied()));

/// A boundary atom for a delimiter name such as `(`, `langle` or `.` (no delimiter).
/// `\|` is named `||` to tell it apart from `|`.
pub fn boundary_for_delimiter(name : &str) -> Option<MathAtom> {
    DELIMITERS.iter()
        .find(|(delimiter, _)| *delimiter == name)
        .map(|(_, value)| MathAtom::new(AtomType::Boundary, *value))
}

/// The name of the delimiter of a boundary atom. Values with several names get the shortest one (e.g. `<` rather than `langle`).
pub fn delimiter_name(boundary : &MathAtom) -> Option<&'static str> {
    if boundary.atom_type() != AtomType::Boundary {
        return None;
    }
    DELIMITER_NAMES.get(boundary.nucleus.as_str()).copied()
}

/// An accent atom for a LaTeX accent name (e.g. `hat`), with an empty accented list.
pub fn accent_with_name(name : &str) -> Option<MathAtom> {
    ACCENTS.iter()
        .find(|(accent, _)| *accent == name)
        .map(|(_, value)| MathAtom::accent(*value, MathList::new()))
}

/// The LaTeX name of an accent atom
pub fn accent_name(accent : &MathAtom) -> Option<&'static str> {
    if accent.atom_type() != AtomType::Accent {
        return None;
    }
    ACCENT_NAMES.get(accent.nucleus.as_str()).copied()
}

/// The font style for a LaTeX font command (e.g. `mathbf`)
pub fn font_style_with_name(name : &str) -> Option<FontStyle> {
    FONT_STYLES.iter()
        .find(|(style_name, _)| *style_name == name)
        .map(|(_, style)| *style)
}

/// The canonical LaTeX command of a font style
pub fn font_style_name(style : FontStyle) -> &'static str {
    match style {
        FontStyle::Default     => "mathnormal",
        FontStyle::Roman       => "mathrm",
        FontStyle::Bold        => "mathbf",
        FontStyle::Fraktur     => "mathfrak",
        FontStyle::Caligraphic => "mathcal",
        FontStyle::Italic      => "mathit",
        FontStyle::SansSerif   => "mathsf",
        FontStyle::Blackboard  => "mathbb",
        FontStyle::Typewriter  => "mathtt",
        FontStyle::BoldItalic  => "bm",
    }
}

/// A large operator written `name`, with limits or not.
pub fn operator_with_name(name : &str, limits : bool) -> MathAtom {
    MathAtom::large_operator(name, limits)
}

/// The multiplication sign `×`
pub fn times() -> MathAtom {
    MathAtom::new(AtomType::BinaryOperator, symbols::MULTIPLICATION)
}

/// The division sign `÷`
pub fn divide() -> MathAtom {
    MathAtom::new(AtomType::BinaryOperator, symbols::DIVISION)
}

/// A placeholder square
pub fn placeholder() -> MathAtom {
    MathAtom::new(AtomType::Placeholder, symbols::WHITE_SQUARE)
}

fn placeholder_list() -> MathList {
    MathList { atoms: vec![placeholder()] }
}

/// A fraction with placeholders for numerator and denominator
pub fn placeholder_fraction() -> MathAtom {
    MathAtom::fraction(placeholder_list(), placeholder_list())
}

/// A square root with a placeholder radicand
pub fn placeholder_square_root() -> MathAtom {
    MathAtom::radical(placeholder_list(), None)
}

/// A radical with placeholders for radicand and degree
pub fn placeholder_radical() -> MathAtom {
    MathAtom::radical(placeholder_list(), Some(placeholder_list()))
}

/// A fraction whose numerator and denominator are built from strings with [`atom_list_for`]
pub fn fraction_with_strings(numerator : &str, denominator : &str) -> MathAtom {
    MathAtom::fraction(atom_list_for(numerator), atom_list_for(denominator))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn characters() {
        let check = |ch, atom_type, nucleus : &str| {
            let atom = atom_for_character(ch).unwrap();
            assert_eq!((atom.atom_type(), atom.nucleus.as_str()), (atom_type, nucleus), "character {:?}", ch);
        };
        check('x', AtomType::Variable, "x");
        check('Q', AtomType::Variable, "Q");
        check('7', AtomType::Number, "7");
        check('.', AtomType::Number, ".");
        check('(', AtomType::Open, "(");
        check(']', AtomType::Close, "]");
        check('!', AtomType::Close, "!");
        check('?', AtomType::Close, "?");
        check(';', AtomType::Punctuation, ";");
        check('<', AtomType::Relation, "<");
        check(':', AtomType::Relation, "\u{2236}");
        check('-', AtomType::BinaryOperator, "\u{2212}");
        check('*', AtomType::BinaryOperator, "*");
        check('/', AtomType::Ordinary, "/");
        check('`', AtomType::Ordinary, "`");
        check('ж', AtomType::Ordinary, "ж");

        for ch in ['$', '%', '#', '&', '~', '\'', '^', '_', '{', '}', '\\', ' ', '\n', 'é', '∑'] {
            assert!(atom_for_character(ch).is_none(), "character {:?}", ch);
        }
    }

    #[test]
    fn atom_list_skips_unknown_characters() {
        let list = atom_list_for("x + ~1");
        let nuclei : Vec<_> = list.iter().map(|a| a.nucleus.as_str()).collect();
        assert_eq!(nuclei, ["x", "+", "1"]);
    }

    #[test]
    fn aliases_resolve() {
        assert_eq!(atom_for_latex_symbol("le"), atom_for_latex_symbol("leq"));
        assert_eq!(atom_for_latex_symbol("to").unwrap().nucleus, "\u{2192}");
        assert_eq!(latex_symbol_name(&atom_for_latex_symbol("ne").unwrap()), Some("neq"));
        assert!(atom_for_latex_symbol("notacommand").is_none());
    }

    #[test]
    fn every_command_round_trips() {
        let table = SymbolTable::standard();
        for name in table.supported_latex_symbol_names() {
            let atom = table.atom_for_latex_symbol(name).unwrap();
            assert_eq!(table.latex_symbol_name(&atom), Some(name), "command {:?}", name);
        }
        assert_eq!(latex_symbol_name(&atom_for_latex_symbol("leq").unwrap()), Some("leq"));
        assert_eq!(latex_symbol_name(&atom_for_latex_symbol("quad").unwrap()), Some("quad"));
        assert_eq!(latex_symbol_name(&atom_for_latex_symbol("scriptstyle").unwrap()), Some("scriptstyle"));
    }

    #[test]
    fn command_payloads() {
        let sum = atom_for_latex_symbol("sum").unwrap();
        assert_eq!(sum.kind(), &AtomKind::LargeOperator { limits: true });
        assert_eq!(atom_for_latex_symbol("int").unwrap().kind(), &AtomKind::LargeOperator { limits: false });
        assert_eq!(atom_for_latex_symbol("limsup").unwrap().nucleus, "lim sup");
        assert_eq!(atom_for_latex_symbol("!").unwrap(), MathAtom::space(-3.));
        assert_eq!(atom_for_latex_symbol("square").unwrap(), placeholder());
        assert_eq!(atom_for_latex_symbol("times").unwrap(), times());
        assert_eq!(atom_for_latex_symbol("varsigma").unwrap().nucleus, "\u{03C2}");
        assert_eq!(atom_for_latex_symbol("phi").unwrap().atom_type(), AtomType::Ordinary);
    }

    #[test]
    fn added_commands_win_reverse_lookup() {
        let mut table = SymbolTable::new();
        let theta = table.atom_for_latex_symbol("theta").unwrap();

        table.add("th", theta.clone());
        assert_eq!(table.latex_symbol_name(&theta), Some("th"));

        // redefining "th" repairs the reverse entry of theta
        table.add("th", operator_with_name("th", false));
        assert_eq!(table.latex_symbol_name(&theta), Some("theta"));
        let th = table.atom_for_latex_symbol("th").unwrap();
        assert_eq!(table.latex_symbol_name(&th), Some("th"));

        // the standard table is left alone
        assert!(SymbolTable::standard().atom_for_latex_symbol("th").is_none());
    }

    #[test]
    fn delimiters() {
        let langle = boundary_for_delimiter("langle").unwrap();
        assert_eq!(langle.atom_type(), AtomType::Boundary);
        assert_eq!(langle.nucleus, "\u{2329}");
        assert_eq!(delimiter_name(&langle), Some("<"));
        assert_eq!(delimiter_name(&boundary_for_delimiter("Vert").unwrap()), Some("||"));
        assert_eq!(delimiter_name(&boundary_for_delimiter("lbrace").unwrap()), Some("{"));
        assert_eq!(delimiter_name(&boundary_for_delimiter(".").unwrap()), Some("."));
        assert_eq!(boundary_for_delimiter(".").unwrap().nucleus, "");
        assert!(boundary_for_delimiter("nope").is_none());
        assert_eq!(delimiter_name(&MathAtom::new(AtomType::Open, "(")), None);
    }

    #[test]
    fn accents_and_font_styles() {
        let hat = accent_with_name("widehat").unwrap();
        assert_eq!(hat.nucleus, "\u{0302}");
        assert_eq!(accent_name(&hat), Some("hat"));
        assert_eq!(accent_name(&accent_with_name("vec").unwrap()), Some("vec"));

        assert_eq!(font_style_with_name("bf"), Some(FontStyle::Bold));
        assert_eq!(font_style_with_name("text"), Some(FontStyle::Roman));
        assert_eq!(font_style_name(FontStyle::BoldItalic), "bm");
        for &(name, style) in FONT_STYLES {
            assert_eq!(font_style_with_name(font_style_name(style)), Some(style), "style {}", name);
        }
    }

    #[test]
    fn placeholders() {
        let AtomKind::Fraction(fraction) = placeholder_fraction().kind().clone() else { panic!() };
        assert_eq!(fraction.numerator.atoms(), [placeholder()]);
        assert!(fraction.has_rule);

        let AtomKind::Radical(radical) = placeholder_radical().kind().clone() else { panic!() };
        assert!(radical.degree.is_some());
        let AtomKind::Radical(radical) = placeholder_square_root().kind().clone() else { panic!() };
        assert!(radical.degree.is_none());

        let AtomKind::Fraction(fraction) = fraction_with_strings("1", "x+1").kind().clone() else { panic!() };
        assert_eq!(fraction.denominator.len(), 3);
    }
}
