//! Static tables of LaTeX commands, delimiters, accents and font styles.

use super::{AtomType, FontStyle, LineStyle};

pub(super) const MULTIPLICATION : &str = "\u{00D7}";
pub(super) const DIVISION       : &str = "\u{00F7}";
pub(super) const WHITE_SQUARE   : &str = "\u{25A1}";

/// Alternative names, resolved before lookup.
pub(super) static ALIASES : &[(&str, &str)] = &[
    ("lnot",   "neg"),
    ("land",   "wedge"),
    ("lor",    "vee"),
    ("ne",     "neq"),
    ("le",     "leq"),
    ("ge",     "geq"),
    ("lbrace", "{"),
    ("rbrace", "}"),
    ("Vert",   "|"),
    ("gets",   "leftarrow"),
    ("to",     "rightarrow"),
    ("iff",    "Longleftrightarrow"),
    ("AA",     "angstrom"),
];

/// Commands standing for a single atom with a nucleus.
pub(super) static SYMBOLS : &[(&str, AtomType, &str)] = &[
    ("square", AtomType::Placeholder, WHITE_SQUARE),

    // Greek
    ("alpha",      AtomType::Variable, "\u{03B1}"),
    ("beta",       AtomType::Variable, "\u{03B2}"),
    ("gamma",      AtomType::Variable, "\u{03B3}"),
    ("delta",      AtomType::Variable, "\u{03B4}"),
    ("varepsilon", AtomType::Variable, "\u{03B5}"),
    ("zeta",       AtomType::Variable, "\u{03B6}"),
    ("eta",        AtomType::Variable, "\u{03B7}"),
    ("theta",      AtomType::Variable, "\u{03B8}"),
    ("iota",       AtomType::Variable, "\u{03B9}"),
    ("kappa",      AtomType::Variable, "\u{03BA}"),
    ("lambda",     AtomType::Variable, "\u{03BB}"),
    ("mu",         AtomType::Variable, "\u{03BC}"),
    ("nu",         AtomType::Variable, "\u{03BD}"),
    ("xi",         AtomType::Variable, "\u{03BE}"),
    ("omicron",    AtomType::Variable, "\u{03BF}"),
    ("pi",         AtomType::Variable, "\u{03C0}"),
    ("rho",        AtomType::Variable, "\u{03C1}"),
    ("varsigma",   AtomType::Variable, "\u{03C2}"),
    ("sigma",      AtomType::Variable, "\u{03C3}"),
    ("tau",        AtomType::Variable, "\u{03C4}"),
    ("upsilon",    AtomType::Variable, "\u{03C5}"),
    ("varphi",     AtomType::Variable, "\u{03C6}"),
    ("chi",        AtomType::Variable, "\u{03C7}"),
    ("psi",        AtomType::Variable, "\u{03C8}"),
    ("omega",      AtomType::Variable, "\u{03C9}"),
    // already math italic code points: must not be italicized again
    ("epsilon",    AtomType::Ordinary, "\u{1D716}"),
    ("vartheta",   AtomType::Ordinary, "\u{1D717}"),
    ("phi",        AtomType::Ordinary, "\u{1D719}"),
    ("varrho",     AtomType::Ordinary, "\u{1D71A}"),
    ("varpi",      AtomType::Ordinary, "\u{1D71B}"),

    // Capital greek
    ("Gamma",   AtomType::Variable, "\u{0393}"),
    ("Delta",   AtomType::Variable, "\u{0394}"),
    ("Theta",   AtomType::Variable, "\u{0398}"),
    ("Lambda",  AtomType::Variable, "\u{039B}"),
    ("Xi",      AtomType::Variable, "\u{039E}"),
    ("Pi",      AtomType::Variable, "\u{03A0}"),
    ("Sigma",   AtomType::Variable, "\u{03A3}"),
    ("Upsilon", AtomType::Variable, "\u{03A5}"),
    ("Phi",     AtomType::Variable, "\u{03A6}"),
    ("Psi",     AtomType::Variable, "\u{03A8}"),
    ("Omega",   AtomType::Variable, "\u{03A9}"),

    // Open
    ("lceil",  AtomType::Open, "\u{2308}"),
    ("lfloor", AtomType::Open, "\u{230A}"),
    ("langle", AtomType::Open, "\u{27E8}"),
    ("lgroup", AtomType::Open, "\u{27EE}"),

    // Close
    ("rceil",  AtomType::Close, "\u{2309}"),
    ("rfloor", AtomType::Close, "\u{230B}"),
    ("rangle", AtomType::Close, "\u{27E9}"),
    ("rgroup", AtomType::Close, "\u{27EF}"),

    // Arrows
    ("leftarrow",          AtomType::Relation, "\u{2190}"),
    ("uparrow",            AtomType::Relation, "\u{2191}"),
    ("rightarrow",         AtomType::Relation, "\u{2192}"),
    ("downarrow",          AtomType::Relation, "\u{2193}"),
    ("leftrightarrow",     AtomType::Relation, "\u{2194}"),
    ("updownarrow",        AtomType::Relation, "\u{2195}"),
    ("nwarrow",            AtomType::Relation, "\u{2196}"),
    ("nearrow",            AtomType::Relation, "\u{2197}"),
    ("searrow",            AtomType::Relation, "\u{2198}"),
    ("swarrow",            AtomType::Relation, "\u{2199}"),
    ("mapsto",             AtomType::Relation, "\u{21A6}"),
    ("Leftarrow",          AtomType::Relation, "\u{21D0}"),
    ("Uparrow",            AtomType::Relation, "\u{21D1}"),
    ("Rightarrow",         AtomType::Relation, "\u{21D2}"),
    ("Downarrow",          AtomType::Relation, "\u{21D3}"),
    ("Leftrightarrow",     AtomType::Relation, "\u{21D4}"),
    ("Updownarrow",        AtomType::Relation, "\u{21D5}"),
    ("longleftarrow",      AtomType::Relation, "\u{27F5}"),
    ("longrightarrow",     AtomType::Relation, "\u{27F6}"),
    ("longleftrightarrow", AtomType::Relation, "\u{27F7}"),
    ("Longleftarrow",      AtomType::Relation, "\u{27F8}"),
    ("Longrightarrow",     AtomType::Relation, "\u{27F9}"),
    ("Longleftrightarrow", AtomType::Relation, "\u{27FA}"),

    // Relations
    ("leq",        AtomType::Relation, "\u{2264}"),
    ("geq",        AtomType::Relation, "\u{2265}"),
    ("neq",        AtomType::Relation, "\u{2260}"),
    ("in",         AtomType::Relation, "\u{2208}"),
    ("notin",      AtomType::Relation, "\u{2209}"),
    ("ni",         AtomType::Relation, "\u{220B}"),
    ("propto",     AtomType::Relation, "\u{221D}"),
    ("mid",        AtomType::Relation, "\u{2223}"),
    ("parallel",   AtomType::Relation, "\u{2225}"),
    ("sim",        AtomType::Relation, "\u{223C}"),
    ("simeq",      AtomType::Relation, "\u{2243}"),
    ("cong",       AtomType::Relation, "\u{2245}"),
    ("approx",     AtomType::Relation, "\u{2248}"),
    ("asymp",      AtomType::Relation, "\u{224D}"),
    ("doteq",      AtomType::Relation, "\u{2250}"),
    ("equiv",      AtomType::Relation, "\u{2261}"),
    ("gg",         AtomType::Relation, "\u{226B}"),
    ("ll",         AtomType::Relation, "\u{226A}"),
    ("prec",       AtomType::Relation, "\u{227A}"),
    ("succ",       AtomType::Relation, "\u{227B}"),
    ("subset",     AtomType::Relation, "\u{2282}"),
    ("supset",     AtomType::Relation, "\u{2283}"),
    ("subseteq",   AtomType::Relation, "\u{2286}"),
    ("supseteq",   AtomType::Relation, "\u{2287}"),
    ("sqsubset",   AtomType::Relation, "\u{228F}"),
    ("sqsupset",   AtomType::Relation, "\u{2290}"),
    ("sqsubseteq", AtomType::Relation, "\u{2291}"),
    ("sqsupseteq", AtomType::Relation, "\u{2292}"),
    ("models",     AtomType::Relation, "\u{22A7}"),
    ("perp",       AtomType::Relation, "\u{27C2}"),

    // Binary operators
    ("times",    AtomType::BinaryOperator, MULTIPLICATION),
    ("div",      AtomType::BinaryOperator, DIVISION),
    ("pm",       AtomType::BinaryOperator, "\u{00B1}"),
    ("dagger",   AtomType::BinaryOperator, "\u{2020}"),
    ("ddagger",  AtomType::BinaryOperator, "\u{2021}"),
    ("mp",       AtomType::BinaryOperator, "\u{2213}"),
    ("setminus", AtomType::BinaryOperator, "\u{2216}"),
    ("ast",      AtomType::BinaryOperator, "\u{2217}"),
    ("circ",     AtomType::BinaryOperator, "\u{2218}"),
    ("bullet",   AtomType::BinaryOperator, "\u{2219}"),
    ("wedge",    AtomType::BinaryOperator, "\u{2227}"),
    ("vee",      AtomType::BinaryOperator, "\u{2228}"),
    ("cap",      AtomType::BinaryOperator, "\u{2229}"),
    ("cup",      AtomType::BinaryOperator, "\u{222A}"),
    ("wr",       AtomType::BinaryOperator, "\u{2240}"),
    ("uplus",    AtomType::BinaryOperator, "\u{228E}"),
    ("sqcap",    AtomType::BinaryOperator, "\u{2293}"),
    ("sqcup",    AtomType::BinaryOperator, "\u{2294}"),
    ("oplus",    AtomType::BinaryOperator, "\u{2295}"),
    ("ominus",   AtomType::BinaryOperator, "\u{2296}"),
    ("otimes",   AtomType::BinaryOperator, "\u{2297}"),
    ("oslash",   AtomType::BinaryOperator, "\u{2298}"),
    ("odot",     AtomType::BinaryOperator, "\u{2299}"),
    ("star",     AtomType::BinaryOperator, "\u{22C6}"),
    ("cdot",     AtomType::BinaryOperator, "\u{22C5}"),
    ("amalg",    AtomType::BinaryOperator, "\u{2A3F}"),

    // LaTeX command characters
    ("{",         AtomType::Open,     "{"),
    ("}",         AtomType::Close,    "}"),
    ("$",         AtomType::Ordinary, "$"),
    ("&",         AtomType::Ordinary, "&"),
    ("#",         AtomType::Ordinary, "#"),
    ("%",         AtomType::Ordinary, "%"),
    ("_",         AtomType::Ordinary, "_"),
    (" ",         AtomType::Ordinary, " "),
    ("backslash", AtomType::Ordinary, "\\"),

    // Punctuation ; \colon is not the same as ':', which is a relation
    ("colon", AtomType::Punctuation, ":"),
    ("cdotp", AtomType::Punctuation, "\u{00B7}"),

    // Other symbols
    ("degree",   AtomType::Ordinary, "\u{00B0}"),
    ("neg",      AtomType::Ordinary, "\u{00AC}"),
    ("angstrom", AtomType::Ordinary, "\u{00C5}"),
    ("|",        AtomType::Ordinary, "\u{2016}"),
    ("vert",     AtomType::Ordinary, "|"),
    ("ldots",    AtomType::Ordinary, "\u{2026}"),
    ("prime",    AtomType::Ordinary, "\u{2032}"),
    ("hbar",     AtomType::Ordinary, "\u{210F}"),
    ("lbar",     AtomType::Ordinary, "\u{019B}"),
    ("Im",       AtomType::Ordinary, "\u{2111}"),
    ("ell",      AtomType::Ordinary, "\u{2113}"),
    ("wp",       AtomType::Ordinary, "\u{2118}"),
    ("Re",       AtomType::Ordinary, "\u{211C}"),
    ("mho",      AtomType::Ordinary, "\u{2127}"),
    ("aleph",    AtomType::Ordinary, "\u{2135}"),
    ("forall",   AtomType::Ordinary, "\u{2200}"),
    ("exists",   AtomType::Ordinary, "\u{2203}"),
    ("emptyset", AtomType::Ordinary, "\u{2205}"),
    ("nabla",    AtomType::Ordinary, "\u{2207}"),
    ("infty",    AtomType::Ordinary, "\u{221E}"),
    ("angle",    AtomType::Ordinary, "\u{2220}"),
    ("top",      AtomType::Ordinary, "\u{22A4}"),
    ("bot",      AtomType::Ordinary, "\u{22A5}"),
    ("vdots",    AtomType::Ordinary, "\u{22EE}"),
    ("cdots",    AtomType::Ordinary, "\u{22EF}"),
    ("ddots",    AtomType::Ordinary, "\u{22F1}"),
    ("triangle", AtomType::Ordinary, "\u{25B3}"),
    ("diamond",  AtomType::Ordinary, "\u{2662}"),
    ("imath",    AtomType::Ordinary, "\u{1D6A4}"),
    ("jmath",    AtomType::Ordinary, "\u{1D6A5}"),
    ("upquote",  AtomType::Ordinary, "\u{0027}"),
    ("partial",  AtomType::Ordinary, "\u{1D715}"),
];

/// Large operators: command, nucleus, limits.
pub(super) static OPERATORS : &[(&str, &str, bool)] = &[
    // Without limits
    ("log",    "log",    false),
    ("lg",     "lg",     false),
    ("ln",     "ln",     false),
    ("sin",    "sin",    false),
    ("arcsin", "arcsin", false),
    ("sinh",   "sinh",   false),
    ("cos",    "cos",    false),
    ("arccos", "arccos", false),
    ("cosh",   "cosh",   false),
    ("tan",    "tan",    false),
    ("arctan", "arctan", false),
    ("tanh",   "tanh",   false),
    ("cot",    "cot",    false),
    ("coth",   "coth",   false),
    ("sec",    "sec",    false),
    ("csc",    "csc",    false),
    ("arg",    "arg",    false),
    ("ker",    "ker",    false),
    ("dim",    "dim",    false),
    ("hom",    "hom",    false),
    ("exp",    "exp",    false),
    ("deg",    "deg",    false),

    // With limits
    ("lim",    "lim",     true),
    ("limsup", "lim sup", true),
    ("liminf", "lim inf", true),
    ("max",    "max",     true),
    ("min",    "min",     true),
    ("sup",    "sup",     true),
    ("inf",    "inf",     true),
    ("det",    "det",     true),
    ("Pr",     "Pr",      true),
    ("gcd",    "gcd",     true),

    // Large operators
    ("prod",      "\u{220F}", true),
    ("coprod",    "\u{2210}", true),
    ("sum",       "\u{2211}", true),
    ("int",       "\u{222B}", false),
    ("oint",      "\u{222E}", false),
    ("bigwedge",  "\u{22C0}", true),
    ("bigvee",    "\u{22C1}", true),
    ("bigcap",    "\u{22C2}", true),
    ("bigcup",    "\u{22C3}", true),
    ("bigodot",   "\u{2A00}", true),
    ("bigoplus",  "\u{2A01}", true),
    ("bigotimes", "\u{2A02}", true),
    ("biguplus",  "\u{2A04}", true),
    ("bigsqcup",  "\u{2A06}", true),
];

/// Spacing commands, in mu.
pub(super) static SPACES : &[(&str, f64)] = &[
    (",",     3.),
    (">",     4.),
    (";",     5.),
    ("!",     -3.),
    ("quad",  18.),
    ("qquad", 36.),
];

pub(super) static STYLES : &[(&str, LineStyle)] = &[
    ("displaystyle",      LineStyle::Display),
    ("textstyle",         LineStyle::Text),
    ("scriptstyle",       LineStyle::Script),
    ("scriptscriptstyle", LineStyle::ScriptOfScript),
];

/// Delimiter names and the character they stand for. `.` is the empty delimiter.
/// `||` is `\|`, to tell it apart from `|`.
pub(super) static DELIMITERS : &[(&str, &str)] = &[
    (".",           ""),
    ("(",           "("),
    (")",           ")"),
    ("[",           "["),
    ("]",           "]"),
    ("<",           "\u{2329}"),
    (">",           "\u{232A}"),
    ("/",           "/"),
    ("\\",          "\\"),
    ("|",           "|"),
    ("lgroup",      "\u{27EE}"),
    ("rgroup",      "\u{27EF}"),
    ("||",          "\u{2016}"),
    ("Vert",        "\u{2016}"),
    ("vert",        "|"),
    ("uparrow",     "\u{2191}"),
    ("downarrow",   "\u{2193}"),
    ("updownarrow", "\u{2195}"),
    ("Uparrow",     "\u{21D1}"),
    ("Downarrow",   "\u{21D3}"),
    ("Updownarrow", "\u{21D5}"),
    ("backslash",   "\\"),
    ("rangle",      "\u{232A}"),
    ("langle",      "\u{2329}"),
    ("rbrace",      "}"),
    ("}",           "}"),
    ("{",           "{"),
    ("lbrace",      "{"),
    ("lceil",       "\u{2308}"),
    ("rceil",       "\u{2309}"),
    ("lfloor",      "\u{230A}"),
    ("rfloor",      "\u{230B}"),
];

/// Accent names and their combining characters.
pub(super) static ACCENTS : &[(&str, &str)] = &[
    ("grave",     "\u{0300}"),
    ("acute",     "\u{0301}"),
    ("hat",       "\u{0302}"),
    ("tilde",     "\u{0303}"),
    ("bar",       "\u{0304}"),
    ("breve",     "\u{0306}"),
    ("dot",       "\u{0307}"),
    ("ddot",      "\u{0308}"),
    ("check",     "\u{030C}"),
    ("vec",       "\u{20D7}"),
    // wide accents behave like their narrow counterparts
    ("widehat",   "\u{0302}"),
    ("widetilde", "\u{0303}"),
];

pub(super) static FONT_STYLES : &[(&str, FontStyle)] = &[
    ("mathnormal", FontStyle::Default),
    ("mathrm",     FontStyle::Roman),
    ("textrm",     FontStyle::Roman),
    ("rm",         FontStyle::Roman),
    ("mathbf",     FontStyle::Bold),
    ("bf",         FontStyle::Bold),
    ("textbf",     FontStyle::Bold),
    ("mathcal",    FontStyle::Caligraphic),
    ("cal",        FontStyle::Caligraphic),
    ("mathtt",     FontStyle::Typewriter),
    ("texttt",     FontStyle::Typewriter),
    ("mathit",     FontStyle::Italic),
    ("textit",     FontStyle::Italic),
    ("mit",        FontStyle::Italic),
    ("mathsf",     FontStyle::SansSerif),
    ("textsf",     FontStyle::SansSerif),
    ("mathfrak",   FontStyle::Fraktur),
    ("frak",       FontStyle::Fraktur),
    ("mathbb",     FontStyle::Blackboard),
    ("mathbfit",   FontStyle::BoldItalic),
    ("bm",         FontStyle::BoldItalic),
    ("text",       FontStyle::Roman),
];
