//! Defines the units relevant to math layout: font units, em, points and math units.
//!
//! The conversions between these are all font-dependent or font size-dependent:
//!    - the factor between [`FUnit`] and [`Em`] is specified in the font file (units per em)
//!    - setting the conversion factor between [`Em`] and [`Pt`] is precisely what specifying a font size is about (cf [`FontSize`]).
//!    - a [`Mu`] is 1/18 of an em at the current font size.

// ------------------------- BASIC UNITS --------------------------------

/// Smallest virtual units that the font file can address (so every dimension in the font file is given as an integer number in FUnit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FUnit;

/// A virtual unit, bigger than [`FUnit`], conventionally corresponding to:
///
///  - width of an em-dash and an em-space character
///  - line separation
///  - (historically but no longer true), width of an upper case M
///
/// In actuality, font designers need not abide by any of these conventions ; they do whatever they want.
/// The correspondance between em and FUnit is specified in the font file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Em;


/// Specifying a font size is by definition specifying how many points there is in an em.
/// 12 pt size means "1 em = 12 pt"
///
/// All the dimensions of the boxes produced by layout are expressed in points.
/// What a point means on screen is left to whoever draws the boxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pt;

/// Math unit: TeX's spacing unit. There are 18 mu in an em, whatever the font size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mu;

/// Font size is expressed in pt / em
pub type FontSize = Ratio<Pt, Em>;

// ------------------- UNIT COMBINATORS -------------------------

/// If U is a unit and V is a unit, Ratio<U, V> is the unit U . V⁻¹
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ratio<U, V> {
	_numerator    : std::marker::PhantomData<U>,
	_denominator  : std::marker::PhantomData<V>,
}


impl<U, V> Ratio<U, V> {
	/// Creates new ratio unit
	pub const fn new() -> Self {
		Self {
			_numerator:   std::marker::PhantomData,
			_denominator: std::marker::PhantomData
		}
	}
}
