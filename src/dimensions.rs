//! Types for quantities with units (font units, em, points, math units)
//!
//! This allows for compile-time checking of unit errors.
//! A function requiring an input to be in points would for instance ask an argument of type [`Unit<Pt>`].
//! Values read from the font are [`Unit<FUnit>`] and are converted to points once, when a metric is queried.


use std::ops::{Add, Sub, Mul, AddAssign, SubAssign, Div, Neg};
use std::cmp::{PartialEq, PartialOrd};
use std::fmt::{Display, Debug};
use std::iter::Sum;

use self::units::{Ratio, FUnit, FontSize, Mu, Pt};
pub mod units;

/// A f64 value with its unit represented in the type
#[derive(Serialize, Deserialize)]
pub struct Unit<U> {
    value : f64,
    _phantom : std::marker::PhantomData<U>,
}


impl<U> PartialEq for Unit<U> {
    fn eq(&self, other: &Self) -> bool {
        self.value.eq(&other.value)
    }

    fn ne(&self, other: &Self) -> bool {
        self.value.ne(&other.value)
    }
}

impl<U> PartialOrd for Unit<U> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.value.partial_cmp(&other.value)
    }

    fn lt(&self, other: &Self) -> bool {
        self.value.lt(&other.value)
    }

    fn le(&self, other: &Self) -> bool {
        self.value.le(&other.value)
    }

    fn gt(&self, other: &Self) -> bool {
        self.value.gt(&other.value)
    }

    fn ge(&self, other: &Self) -> bool {
        self.value.ge(&other.value)
    }
}

impl<U> Clone for Unit<U> {
    fn clone(&self) -> Self {
        let Self { value, _phantom } = *self;
        Self { value, _phantom }
    }
}
impl<U> Copy for Unit<U> {}
impl<U> Debug for Unit<U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let type_name = std::any::type_name::<U>();
        write!(f, "Unit::<{}>::new({})", type_name, self.value)
    }
}

impl<U> Display for Unit<U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.value, f)
    }
}



impl Unit<Ratio<Pt, FUnit>> {
    /// Conversion factor between design units and points for a font of `size` points per em with `units_per_em` design units per em.
    /// A design-unit value `v` is then `v * size / units_per_em` points.
    pub fn font_scale(size : Unit<FontSize>, units_per_em : u16) -> Self {
        Unit::new(size.to_unitless() / f64::from(units_per_em))
    }
}

impl Unit<Ratio<Pt, Mu>> {
    /// A math unit is 1/18 of an em: `size / 18` points.
    pub fn mu_scale(size : Unit<FontSize>) -> Self {
        Unit::new(size.to_unitless() / 18.)
    }
}

impl<U> Unit<U> {
    /// The zero value
    pub const ZERO : Self = Self::new(0.);

    /// Creates a value with unit from a unit-less value.
    /// To be used with care: you need to manually check that the value you pass is indeed in the right dimension.
    pub const fn new(value: f64) -> Self { 
        Self { 
            value, 
            _phantom: std::marker::PhantomData 
        } 
    }

    /// Is quantity equal to zero?
    pub fn is_zero(self) -> bool {
        self.value == 0.0
    }

    /// Converts a value to a unit-less value ("unsafe" since it removes information about dimensions)
    #[inline]
    pub const fn to_unitless(self) -> f64 
    { self.value }

    /// Like [`Unit::to_unitles`] but explicitly asks for the dimension to avoid errors
    #[inline]
    pub fn unitless(self, _unit : U) -> f64 
    { self.to_unitless() }

    /// Multiply value by a unitless value
    pub fn scale(self, scale : f64) -> Self {
        Self::new(self.value * scale)
    }

    /// Equivalent to [`f64::min`] for values with units
    pub fn min(self, other : Self) -> Self {
        Self::new(self.value.min(other.value))
    }

    /// Equivalent to [`f64::max`] for values with units
    pub fn max(self, other : Self) -> Self {
        Self::new(self.value.max(other.value))
    }

    /// Equivalent to [`f64::abs`] for values with units
    pub fn abs(self) -> Self {
        Self::new(self.value.abs())
    }
}

impl<U> Unit<Ratio<U, U>> {
    /// Converts a unitless value to a float
    pub const fn as_unitless(self) -> f64 {
        self.to_unitless()
    }
}

impl<U, V> Unit<Ratio<U, V>> {
    /// Inverts a ratio going from `x` (unit: U/V) to `1/x` (unit: V/U)
    #[inline]
    pub fn recip(self) -> Unit<Ratio<V, U>> {
        Unit::<Ratio<V, U>>::new(self.value.recip())
    }

    /// Converts from U / V to (U / W) / (V / W).
    ///
    /// This lets a ratio be applied to a quantity expressed itself as a ratio, for instance:
    ///
    /// ```
    /// # use mathbox::dimensions::units::{Ratio, Pt, Em, FUnit};
    /// # use mathbox::dimensions::Unit;
    /// let per_em : Unit<Ratio<FUnit, Em>> = Unit::new(1000.);
    /// let scale  : Unit<Ratio<Pt, FUnit>> = Unit::new(0.02);
    ///
    /// // let size : Unit<Ratio<Pt, Em>> = per_em * scale; // <- mismatched type error
    /// let size : Unit<Ratio<Pt, Em>> = per_em * scale.lift::<Em>(); // ok
    /// assert_eq!(size.to_unitless(), 20.);
    /// ```
    #[inline]
    pub const fn lift<W>(self) -> Unit<Ratio<Ratio<U, W>, Ratio<V, W>>> {
        Unit::new(self.value)
    }
}

impl<U, V, W> Unit<Ratio<Ratio<U, W>, Ratio<V, W>>> {
    /// Converts from (U / W) / (V / W) to U / V. Inverse of [`Unit::lift`].  
    #[inline]
    pub const fn unlift(self) -> Unit<Ratio<U, V>> {
        Unit::new(self.value)
    }
}

impl<U> Add for Unit<U> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.value + rhs.value)
    }
}

impl<U> Sub for Unit<U> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.value - rhs.value)
    }
}

impl<U> Neg for Unit<U> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(- self.value)
    }
    // add code here
}

impl<U> AddAssign for Unit<U> {
    fn add_assign(&mut self, rhs: Self) {
        self.value += rhs.value;
    }
}

impl<U> SubAssign for Unit<U> {
    fn sub_assign(&mut self, rhs: Self) {
        self.value -= rhs.value;
    }
}


impl<U, V> Mul<Unit<Ratio<U, V>>> for Unit<V> {
    type Output = Unit<U>;

    fn mul(self, rhs: Unit<Ratio<U, V>>) -> Self::Output {
        Unit::<U>::new(self.value * rhs.value)
    }
}





impl<U, V> Div<Unit<V>> for Unit<U> {
    type Output = Unit<Ratio<U, V>>;

    fn div(self, rhs: Unit<V>) -> Self::Output {
        Unit::<Ratio<U, V>>::new(self.value / rhs.value)
    }
}



impl<U> From<f64> for Unit<U> {
    fn from(x: f64) -> Self 
    { Unit { value: x, _phantom: std::marker::PhantomData } }
}

impl<U> From<i32> for Unit<U> {
    fn from(x: i32) -> Self 
    { Unit { value: x.into(), _phantom: std::marker::PhantomData } }
}

impl<U> From<i16> for Unit<U> {
    fn from(x: i16) -> Self 
    { Unit { value: x.into(), _phantom: std::marker::PhantomData } }
}

impl<U> From<u32> for Unit<U> {
    fn from(x: u32) -> Self 
    { Unit { value: x.into(), _phantom: std::marker::PhantomData } }
}

impl<U> From<u16> for Unit<U> {
    fn from(x: u16) -> Self 
    { Unit { value: x.into(), _phantom: std::marker::PhantomData } }
}


impl<U> Sum for Unit<U> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(
            Unit::ZERO,
            |a, b| a + b
        )
    }
}
