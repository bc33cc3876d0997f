//! Strongly typed physical quantities.
//!
//! A [`Dim`] is a floating point value tagged at the type level with the exponents of its three
//! base dimensions (length, mass, time) and with a rational scale [`Ratio`] relative to the base
//! unit. Adding or comparing quantities only compiles when both sides carry exactly the same tag;
//! multiplying or dividing them produces a new tag, e.g. a length divided by a time is a speed.
//!
//! The exponents are [`typenum`] integers and the ratios are pairs of [`typenum`] unsigned
//! integers, reduced by their gcd so that equal ratios are always the same type.
//!
//! ```
//! use dodge::util::dimension::{Dim, Ratio};
//! use typenum::{N1, P1, U1, Z0};
//!
//! type Metres = Dim<f32, P1, Z0, Z0, Ratio<U1, U1>>;
//! type Seconds = Dim<f32, Z0, Z0, P1, Ratio<U1, U1>>;
//! type MetresPerSecond = Dim<f32, P1, Z0, N1, Ratio<U1, U1>>;
//!
//! let speed: MetresPerSecond = Metres::new(10.0) / Seconds::new(4.0);
//! assert_eq!(speed, MetresPerSecond::new(2.5));
//! ```

use crate::util::real::{exactly_equal, nearly_equal, NearlyEqual, Real};
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::fmt::Formatter;
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use std::time::Duration;
use typenum::consts::{P1, P2, N1, N2, U1, Z0};
use typenum::marker_traits::{Integer, NonZero, Unsigned};
use typenum::operator_aliases::{Diff, Gcf, Negate, PartialQuot, Prod, Quot, Sqrt, Sum};
use typenum::type_operators::{Gcd, PartialDiv, Same, SquareRoot};

/// A compile-time rational number `N / D`, used as the scale of a [`Dim`] relative to its base
/// unit. Never instantiated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Ratio<N, D>(PhantomData<(N, D)>);

/// A scale ratio whose numerator and denominator are known at compile time.
pub trait Scale: 'static {
    const NUM: u64;
    const DEN: u64;

    #[allow(clippy::cast_precision_loss)]
    fn as_f64() -> f64 {
        Self::NUM as f64 / Self::DEN as f64
    }
}

impl<N, D> Scale for Ratio<N, D>
where
    N: Unsigned + NonZero + 'static,
    D: Unsigned + NonZero + 'static,
{
    const NUM: u64 = N::U64;
    const DEN: u64 = D::U64;
}

/// Reduces a [`Ratio`] to lowest terms.
pub trait Reduce {
    type Output: Scale;
}

impl<N, D> Reduce for Ratio<N, D>
where
    N: Gcd<D> + Div<Gcf<N, D>>,
    D: Div<Gcf<N, D>>,
    Ratio<Quot<N, Gcf<N, D>>, Quot<D, Gcf<N, D>>>: Scale,
{
    type Output = Ratio<Quot<N, Gcf<N, D>>, Quot<D, Gcf<N, D>>>;
}

/// The scale of a product of two quantities.
pub trait ScaleMul<Rhs> {
    type Output: Scale;
}

impl<Na, Da, Nb, Db> ScaleMul<Ratio<Nb, Db>> for Ratio<Na, Da>
where
    Na: Mul<Nb>,
    Da: Mul<Db>,
    Ratio<Prod<Na, Nb>, Prod<Da, Db>>: Reduce,
{
    type Output = <Ratio<Prod<Na, Nb>, Prod<Da, Db>> as Reduce>::Output;
}

/// The scale of a quotient of two quantities.
pub trait ScaleDiv<Rhs> {
    type Output: Scale;
}

impl<Na, Da, Nb, Db> ScaleDiv<Ratio<Nb, Db>> for Ratio<Na, Da>
where
    Na: Mul<Db>,
    Da: Mul<Nb>,
    Ratio<Prod<Na, Db>, Prod<Da, Nb>>: Reduce,
{
    type Output = <Ratio<Prod<Na, Db>, Prod<Da, Nb>> as Reduce>::Output;
}

/// The scale of the reciprocal of a quantity.
pub trait ScaleRecip {
    type Output: Scale;
}

impl<N, D> ScaleRecip for Ratio<N, D>
where
    Ratio<D, N>: Scale,
{
    type Output = Ratio<D, N>;
}

/// The scale of the square root of a quantity. Only exists when both the numerator and the
/// denominator are perfect squares.
pub trait ScaleSqrt {
    type Output: Scale;
}

impl<N, D> ScaleSqrt for Ratio<N, D>
where
    N: SquareRoot,
    D: SquareRoot,
    Sqrt<N>: Mul<Sqrt<N>>,
    Sqrt<D>: Mul<Sqrt<D>>,
    Prod<Sqrt<N>, Sqrt<N>>: Same<N>,
    Prod<Sqrt<D>, Sqrt<D>>: Same<D>,
    Ratio<Sqrt<N>, Sqrt<D>>: Scale,
{
    type Output = Ratio<Sqrt<N>, Sqrt<D>>;
}

/// The ratio of the base unit.
pub type BaseRatio = Ratio<U1, U1>;

/// A value with length dimension `L`, mass dimension `M` and time dimension `S`, stored in units
/// of `R` times the base unit.
///
/// Equality (`==`) is exact. This makes comparisons predictable and reproducible, but it means
/// computed values should be compared with [`NearlyEqual::nearly_equal`] instead.
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
#[serde(bound(serialize = "T: Serialize", deserialize = "T: Deserialize<'de>"))]
pub struct Dim<T, L, M, S, R> {
    value: T,
    #[serde(skip)]
    unit: PhantomData<fn() -> (L, M, S, R)>,
}

impl<T, L, M, S, R> Dim<T, L, M, S, R> {
    pub const fn new(value: T) -> Self {
        Self {
            value,
            unit: PhantomData,
        }
    }
}

impl<T: Real, L, M, S, R> Dim<T, L, M, S, R> {
    /// The stored value, in units of `R`.
    pub fn value(self) -> T {
        self.value
    }

    pub fn zero() -> Self {
        Self::new(T::zero())
    }
    pub fn is_zero(self) -> bool {
        exactly_equal(self.value, T::zero())
    }

    #[must_use]
    pub fn abs(self) -> Self {
        Self::new(self.value.abs())
    }

    /// Returns whichever argument has the smaller value. Does not construct a new value, so
    /// the result is bit-for-bit one of the inputs.
    #[must_use]
    pub fn min(self, other: Self) -> Self {
        if self.value < other.value { self } else { other }
    }
    #[must_use]
    pub fn max(self, other: Self) -> Self {
        if self.value > other.value { self } else { other }
    }
    /// Returns `(min, max)`.
    pub fn min_max(self, other: Self) -> (Self, Self) {
        if self.value < other.value {
            (self, other)
        } else {
            (other, self)
        }
    }

    pub fn sqrt(self) -> <Self as Rootable>::Output
    where
        Self: Rootable,
    {
        Rootable::sqrt(self)
    }

    /// The multiplicative inverse, e.g. a time becomes a frequency.
    pub fn recip(self) -> Dim<T, Negate<L>, Negate<M>, Negate<S>, <R as ScaleRecip>::Output>
    where
        L: Neg,
        M: Neg,
        S: Neg,
        R: ScaleRecip,
    {
        Dim::new(self.value.recip())
    }

    /// Converts to another scale of the same dimension, e.g. pixels to blocks.
    pub fn rescale<R2: Scale>(self) -> Dim<T, L, M, S, R2>
    where
        R: Scale,
    {
        self.convert()
    }

    /// Converts to another underlying type and scale of the same dimension.
    ///
    /// The conversion is carried out in `f64` before narrowing back to `U`.
    #[allow(clippy::cast_precision_loss)]
    pub fn convert<U: Real, R2: Scale>(self) -> Dim<U, L, M, S, R2>
    where
        R: Scale,
    {
        let num = R::NUM as f64 * R2::DEN as f64;
        let den = R::DEN as f64 * R2::NUM as f64;
        Dim::new(U::from_f64(self.value.to_f64() * num / den))
    }
}

impl<T: Real, R: Scale> Dim<T, Z0, Z0, Z0, R> {
    /// Erases the unit of a dimensionless value, applying its scale.
    #[allow(clippy::cast_precision_loss)]
    pub fn to_raw(self) -> T {
        T::from_f64(self.value.to_f64() * R::NUM as f64 / R::DEN as f64)
    }
}

impl<T: Real, R: Scale> Dim<T, Z0, Z0, P1, R> {
    /// Converts from a clock duration.
    #[allow(clippy::cast_precision_loss)]
    pub fn from_duration(duration: Duration) -> Self {
        Self::new(T::from_f64(
            duration.as_secs_f64() * R::DEN as f64 / R::NUM as f64,
        ))
    }

    /// Converts to a clock duration. Durations cannot be negative, so negative times saturate to
    /// zero (and times too long to represent saturate to [`Duration::MAX`]).
    #[allow(clippy::cast_precision_loss)]
    pub fn to_duration(self) -> Duration {
        let seconds = self.value.to_f64() * R::NUM as f64 / R::DEN as f64;
        Duration::try_from_secs_f64(seconds).unwrap_or(if seconds > 0.0 {
            Duration::MAX
        } else {
            Duration::ZERO
        })
    }
}

/// Square root of a quantity. Only implemented for quantities whose dimension exponents are
/// all even.
pub trait Rootable {
    type Output;
    fn sqrt(self) -> Self::Output;
}

impl Rootable for f32 {
    type Output = f32;
    fn sqrt(self) -> f32 {
        f32::sqrt(self)
    }
}

impl Rootable for f64 {
    type Output = f64;
    fn sqrt(self) -> f64 {
        f64::sqrt(self)
    }
}

impl<T: Real, L, M, S, R> Rootable for Dim<T, L, M, S, R>
where
    L: PartialDiv<P2>,
    M: PartialDiv<P2>,
    S: PartialDiv<P2>,
    R: ScaleSqrt,
{
    type Output = Dim<T, PartialQuot<L, P2>, PartialQuot<M, P2>, PartialQuot<S, P2>, R::Output>;

    fn sqrt(self) -> Self::Output {
        Dim::new(self.value.sqrt())
    }
}

/// Explicit conversion between representations of the same quantity.
pub trait ConvertTo<Target> {
    fn convert_to(self) -> Target;
}

impl<T: Real, U: Real, L, M, S, R: Scale, R2: Scale> ConvertTo<Dim<U, L, M, S, R2>>
    for Dim<T, L, M, S, R>
{
    fn convert_to(self) -> Dim<U, L, M, S, R2> {
        self.convert()
    }
}

impl ConvertTo<f64> for f32 {
    fn convert_to(self) -> f64 {
        f64::from(self)
    }
}

impl ConvertTo<f32> for f64 {
    #[allow(clippy::cast_possible_truncation)]
    fn convert_to(self) -> f32 {
        self as f32
    }
}

// The impls below only bound `T`, so that derives on types holding a `Dim` work for any ratio.

impl<T: Clone, L, M, S, R> Clone for Dim<T, L, M, S, R> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}
impl<T: Copy, L, M, S, R> Copy for Dim<T, L, M, S, R> {}

impl<T: Default, L, M, S, R> Default for Dim<T, L, M, S, R> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: PartialEq, L, M, S, R> PartialEq for Dim<T, L, M, S, R> {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: PartialOrd, L, M, S, R> PartialOrd for Dim<T, L, M, S, R> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<T: Real, L, M, S, R> NearlyEqual for Dim<T, L, M, S, R> {
    fn nearly_equal(&self, rhs: &Self) -> bool {
        nearly_equal(self.value, rhs.value)
    }
}

impl<T: Real, L, M, S, R> Zero for Dim<T, L, M, S, R> {
    fn zero() -> Self {
        Dim::zero()
    }
    fn is_zero(&self) -> bool {
        Dim::is_zero(*self)
    }
}

impl<T: fmt::Debug, L, M, S, R> fmt::Debug for Dim<T, L, M, S, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

impl<L: Integer, M: Integer, S: Integer, R: Scale> Dim<(), L, M, S, R> {
    /// Describes the unit, e.g. `L^1 M^0 T^-1 x 1/32`.
    pub fn unit_name() -> String {
        format!("L^{} M^{} T^{} x {}/{}", L::I64, M::I64, S::I64, R::NUM, R::DEN)
    }
}

impl<T: fmt::Display, L, M, S, R> fmt::Display for Dim<T, L, M, S, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(p) = f.precision() {
            write!(f, "{0:.1$}", self.value, p)
        } else {
            write!(f, "{}", self.value)
        }
    }
}

impl<T: Real, L, M, S, R> Neg for Dim<T, L, M, S, R> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.value)
    }
}

impl<T: Real, L, M, S, R> Add for Dim<T, L, M, S, R> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.value + rhs.value)
    }
}
impl<T: Real, L, M, S, R> AddAssign for Dim<T, L, M, S, R> {
    fn add_assign(&mut self, rhs: Self) {
        self.value = self.value + rhs.value;
    }
}

impl<T: Real, L, M, S, R> Sub for Dim<T, L, M, S, R> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.value - rhs.value)
    }
}
impl<T: Real, L, M, S, R> SubAssign for Dim<T, L, M, S, R> {
    fn sub_assign(&mut self, rhs: Self) {
        self.value = self.value - rhs.value;
    }
}

impl<T: Real, L, M, S, R> Mul<T> for Dim<T, L, M, S, R> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        Self::new(self.value * rhs)
    }
}
impl<T: Real, L, M, S, R> MulAssign<T> for Dim<T, L, M, S, R> {
    fn mul_assign(&mut self, rhs: T) {
        self.value = self.value * rhs;
    }
}

impl<T: Real, L, M, S, R> Div<T> for Dim<T, L, M, S, R> {
    type Output = Self;

    fn div(self, rhs: T) -> Self::Output {
        Self::new(self.value / rhs)
    }
}
impl<T: Real, L, M, S, R> DivAssign<T> for Dim<T, L, M, S, R> {
    fn div_assign(&mut self, rhs: T) {
        self.value = self.value / rhs;
    }
}

impl<T, L1, M1, S1, R1, L2, M2, S2, R2> Mul<Dim<T, L2, M2, S2, R2>> for Dim<T, L1, M1, S1, R1>
where
    T: Real,
    L1: Add<L2>,
    M1: Add<M2>,
    S1: Add<S2>,
    R1: ScaleMul<R2>,
{
    type Output = Dim<T, Sum<L1, L2>, Sum<M1, M2>, Sum<S1, S2>, <R1 as ScaleMul<R2>>::Output>;

    fn mul(self, rhs: Dim<T, L2, M2, S2, R2>) -> Self::Output {
        Dim::new(self.value * rhs.value)
    }
}

impl<T, L1, M1, S1, R1, L2, M2, S2, R2> Div<Dim<T, L2, M2, S2, R2>> for Dim<T, L1, M1, S1, R1>
where
    T: Real,
    L1: Sub<L2>,
    M1: Sub<M2>,
    S1: Sub<S2>,
    R1: ScaleDiv<R2>,
{
    type Output = Dim<T, Diff<L1, L2>, Diff<M1, M2>, Diff<S1, S2>, <R1 as ScaleDiv<R2>>::Output>;

    fn div(self, rhs: Dim<T, L2, M2, S2, R2>) -> Self::Output {
        Dim::new(self.value / rhs.value)
    }
}

macro_rules! impl_scalar_lhs_ops {
    ($t:ty) => {
        impl<L, M, S, R> Mul<Dim<$t, L, M, S, R>> for $t {
            type Output = Dim<$t, L, M, S, R>;

            fn mul(self, rhs: Dim<$t, L, M, S, R>) -> Self::Output {
                Dim::new(self * rhs.value)
            }
        }

        impl<L, M, S, R> Div<Dim<$t, L, M, S, R>> for $t
        where
            L: Neg,
            M: Neg,
            S: Neg,
            R: ScaleRecip,
        {
            type Output = Dim<$t, Negate<L>, Negate<M>, Negate<S>, <R as ScaleRecip>::Output>;

            fn div(self, rhs: Dim<$t, L, M, S, R>) -> Self::Output {
                Dim::new(self / rhs.value)
            }
        }
    };
}

impl_scalar_lhs_ops!(f32);
impl_scalar_lhs_ops!(f64);

// Dimension families.

pub type Unitless<T, R> = Dim<T, Z0, Z0, Z0, R>;

pub type Length<T, R> = Dim<T, P1, Z0, Z0, R>;
pub type PositionScalar<T, R> = Length<T, R>;
pub type Distance<T, R> = Length<T, R>;

pub type Mass<T, R> = Dim<T, Z0, P1, Z0, R>;
pub type InverseMass<T, R> = Dim<T, Z0, N1, Z0, R>;

pub type Time<T, R> = Dim<T, Z0, Z0, P1, R>;
pub type Frequency<T, R> = Dim<T, Z0, Z0, N1, R>;

pub type Area<T, R> = Dim<T, P2, Z0, Z0, R>;

pub type Speed<T, R> = Dim<T, P1, Z0, N1, R>;
pub type AccelerationScalar<T, R> = Dim<T, P1, Z0, N2, R>;

pub type MomentumScalar<T, R> = Dim<T, P1, P1, N1, R>;
pub type ImpulseScalar<T, R> = MomentumScalar<T, R>;

pub type ForceScalar<T, R> = Dim<T, P1, P1, N2, R>;
