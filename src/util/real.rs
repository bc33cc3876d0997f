use num_traits::Float;
use std::fmt::{Debug, Display};

/// The floating point types that can back a [`Dim`](crate::util::dimension::Dim).
///
/// Besides everything [`Float`] offers, this fixes a couple of constants used throughout the
/// geometry code, and lossless-as-possible conversions through `f64` for scale conversion.
pub trait Real: Float + Default + Debug + Display + Send + Sync + 'static {
    const HALF: Self;
    const TWO: Self;

    fn from_f64(value: f64) -> Self;
    fn to_f64(self) -> f64;
}

impl Real for f32 {
    const HALF: Self = 0.5;
    const TWO: Self = 2.0;

    #[allow(clippy::cast_possible_truncation)]
    fn from_f64(value: f64) -> Self {
        value as f32
    }
    fn to_f64(self) -> f64 {
        f64::from(self)
    }
}

impl Real for f64 {
    const HALF: Self = 0.5;
    const TWO: Self = 2.0;

    fn from_f64(value: f64) -> Self {
        value
    }
    fn to_f64(self) -> f64 {
        self
    }
}

/// Checks if two values are exactly equal.
///
/// Exact float comparison should rarely be used because of rounding errors, but it is the
/// right tool for values that were assigned rather than computed, e.g. a literal zero radius.
#[allow(clippy::float_cmp)]
pub fn exactly_equal<T: PartialEq>(lhs: T, rhs: T) -> bool {
    lhs == rhs
}

/// Checks if two floats are equal up to a relative error of machine epsilon.
///
/// See [`nearly_equal_eps`].
pub fn nearly_equal<T: Float>(lhs: T, rhs: T) -> bool {
    nearly_equal_eps(lhs, rhs, T::epsilon())
}

/// Checks if two floats are equal up to a relative error of `eps`.
///
/// - Exactly equal values (including equal infinities, and `+0.0` vs. `-0.0`) always compare
///   equal.
/// - If either value is zero, or both are so small that their magnitudes sum to less than the
///   smallest normal value, the relative error is meaningless and the absolute difference is
///   compared against `eps * MIN_POSITIVE` instead.
/// - Otherwise the absolute difference is compared against `eps * (|lhs| + |rhs|)`, with the sum
///   clamped to `MAX` so it cannot overflow to infinity.
///
/// `NaN` never compares equal to anything.
pub fn nearly_equal_eps<T: Float>(lhs: T, rhs: T, eps: T) -> bool {
    if exactly_equal(lhs, rhs) {
        return true;
    }

    let abs_sum = lhs.abs() + rhs.abs();
    let diff = (lhs - rhs).abs();

    if lhs.is_zero() || rhs.is_zero() || abs_sum < T::min_positive_value() {
        diff < eps * T::min_positive_value()
    } else {
        diff < eps * abs_sum.min(T::max_value())
    }
}

/// Approximate equality, component-wise for compound types.
pub trait NearlyEqual {
    fn nearly_equal(&self, rhs: &Self) -> bool;
}

impl NearlyEqual for f32 {
    fn nearly_equal(&self, rhs: &Self) -> bool {
        nearly_equal(*self, *rhs)
    }
}

impl NearlyEqual for f64 {
    fn nearly_equal(&self, rhs: &Self) -> bool {
        nearly_equal(*self, *rhs)
    }
}

pub fn force_positive_zero<T: Real>(x: T) -> T {
    if x.is_zero() { T::zero() } else { x }
}
