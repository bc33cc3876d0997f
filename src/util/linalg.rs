use crate::util::dimension::{
    AccelerationScalar, ConvertTo, ForceScalar, ImpulseScalar, MomentumScalar, PositionScalar,
    Rootable, Speed, Length,
};
use crate::util::real::NearlyEqual;
use num_traits::Zero;
use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::{
    fmt,
    fmt::Formatter,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

/// A 2D vector of two values of the same unit.
///
/// The type parameter decides what the vector measures: `Vec2<BaseLength>` is a displacement in
/// world space, `Vec2<BaseSpeed>` a velocity, and so on. Arithmetic carries the units along, so
/// multiplying a velocity by a time gives a displacement.
///
/// # Examples
///
/// ```
/// use dodge::core::prelude::*;
///
/// let velocity = BaseVelocity::new(bl_ps(3.0), bl_ps(4.0));
/// let moved: BaseDisplacement = velocity * secs(2.0);
/// assert_eq!(moved, BaseDisplacement::new(bl(6.0), bl(8.0)));
/// assert_eq!(velocity.magnitude(), bl_ps(5.0));
/// ```
///
/// # Equality
/// `==` compares both components exactly. Use [`NearlyEqual::nearly_equal`] for computed values.
#[derive(Default, Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vec2<U> {
    pub x: U,
    pub y: U,
}

impl<U> Vec2<U> {
    pub const fn new(x: U, y: U) -> Self {
        Self { x, y }
    }

    /// Applies `f` to both components.
    pub fn map<V>(self, mut f: impl FnMut(U) -> V) -> Vec2<V> {
        Vec2 {
            x: f(self.x),
            y: f(self.y),
        }
    }

    /// Converts both components to another representation of the same quantity, e.g. from
    /// pixels to blocks or from `f32` to `f64`.
    pub fn convert<V>(self) -> Vec2<V>
    where
        U: ConvertTo<V>,
    {
        self.map(ConvertTo::convert_to)
    }
}

impl<U: Zero + Copy> Vec2<U> {
    #[must_use]
    pub fn zero() -> Self {
        Self {
            x: U::zero(),
            y: U::zero(),
        }
    }

    /// True if both components are exactly zero.
    pub fn is_zero(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }
}

impl<U: Copy> Vec2<U> {
    /// Returns `x * x + y * y`, in the square of this vector's unit.
    pub fn square_mag<Sq>(&self) -> Sq
    where
        U: Mul<Output = Sq>,
        Sq: Add<Output = Sq>,
    {
        dot(*self, *self)
    }

    pub fn magnitude<Sq, M>(&self) -> M
    where
        U: Mul<Output = Sq>,
        Sq: Add<Output = Sq> + Rootable<Output = M>,
    {
        self.square_mag().sqrt()
    }

    /// Returns the unit vector in the direction of `self`. The result is dimensionless.
    ///
    /// The vector must not be zero.
    #[must_use]
    pub fn unit<Sq, M>(&self) -> Vec2<<U as Div<M>>::Output>
    where
        U: Mul<Output = Sq> + Div<M>,
        Sq: Add<Output = Sq> + Rootable<Output = M>,
        M: Zero + Copy,
    {
        let mag = self.magnitude();
        crate::debug_check!(!mag.is_zero(), "unit() of zero vector");
        *self / mag
    }
}

/// The dot product. Units combine as in multiplication: the dot product of a force and a
/// displacement is an energy-like quantity.
pub fn dot<U, V, W>(a: Vec2<U>, b: Vec2<V>) -> W
where
    U: Mul<V, Output = W>,
    W: Add<Output = W>,
{
    a.x * b.x + a.y * b.y
}

/// Multiplies component by component.
pub fn elem_mul<U, V>(a: Vec2<U>, b: Vec2<V>) -> Vec2<<U as Mul<V>>::Output>
where
    U: Mul<V>,
{
    Vec2 {
        x: a.x * b.x,
        y: a.y * b.y,
    }
}

/// Divides component by component.
pub fn elem_div<U, V>(a: Vec2<U>, b: Vec2<V>) -> Vec2<<U as Div<V>>::Output>
where
    U: Div<V>,
{
    Vec2 {
        x: a.x / b.x,
        y: a.y / b.y,
    }
}

impl<U: Zero + Copy> Zero for Vec2<U> {
    fn zero() -> Self {
        Vec2::zero()
    }

    fn is_zero(&self) -> bool {
        Vec2::is_zero(self)
    }
}

impl<U: NearlyEqual> NearlyEqual for Vec2<U> {
    fn nearly_equal(&self, rhs: &Self) -> bool {
        self.x.nearly_equal(&rhs.x) && self.y.nearly_equal(&rhs.y)
    }
}

impl<U: fmt::Display> fmt::Display for Vec2<U> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let precision = f.precision();

        write!(f, "vec(")?;
        if let Some(p) = precision {
            write!(f, "{0:.1$}", self.x, p)?;
            write!(f, ", {0:.1$}", self.y, p)?;
        } else {
            write!(f, "{}, {}", self.x, self.y)?;
        }
        write!(f, ")")
    }
}

impl<U: Add<Output = U>> Add for Vec2<U> {
    type Output = Vec2<U>;

    fn add(self, rhs: Vec2<U>) -> Self::Output {
        Vec2 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}
impl<U: AddAssign> AddAssign for Vec2<U> {
    fn add_assign(&mut self, rhs: Vec2<U>) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl<U: Sub<Output = U>> Sub for Vec2<U> {
    type Output = Vec2<U>;

    fn sub(self, rhs: Vec2<U>) -> Self::Output {
        Vec2 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}
impl<U: SubAssign> SubAssign for Vec2<U> {
    fn sub_assign(&mut self, rhs: Vec2<U>) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl<U: Neg<Output = U>> Neg for Vec2<U> {
    type Output = Vec2<U>;

    fn neg(self) -> Self::Output {
        Vec2 {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl<U: Zero + Copy> Sum for Vec2<U> {
    fn sum<I: Iterator<Item = Vec2<U>>>(iter: I) -> Self {
        iter.fold(Vec2::zero(), Vec2::add)
    }
}

// Scaling by anything the components can be multiplied by: a plain float keeps the unit, a
// quantity changes it (velocity * time = displacement).
impl<U: Mul<S>, S: Copy> Mul<S> for Vec2<U> {
    type Output = Vec2<<U as Mul<S>>::Output>;

    fn mul(self, rhs: S) -> Self::Output {
        Vec2 {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}
impl<U: MulAssign<S>, S: Copy> MulAssign<S> for Vec2<U> {
    fn mul_assign(&mut self, rhs: S) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

impl<U: Div<S>, S: Copy> Div<S> for Vec2<U> {
    type Output = Vec2<<U as Div<S>>::Output>;

    fn div(self, rhs: S) -> Self::Output {
        Vec2 {
            x: self.x / rhs,
            y: self.y / rhs,
        }
    }
}
impl<U: DivAssign<S>, S: Copy> DivAssign<S> for Vec2<U> {
    fn div_assign(&mut self, rhs: S) {
        self.x /= rhs;
        self.y /= rhs;
    }
}

macro_rules! impl_scalar_lhs_mul {
    ($t:ty) => {
        impl<U> Mul<Vec2<U>> for $t
        where
            $t: Mul<U>,
        {
            type Output = Vec2<<$t as Mul<U>>::Output>;

            fn mul(self, rhs: Vec2<U>) -> Self::Output {
                Vec2 {
                    x: self * rhs.x,
                    y: self * rhs.y,
                }
            }
        }
    };
}

impl_scalar_lhs_mul!(f32);
impl_scalar_lhs_mul!(f64);

pub type Position<T, R> = Vec2<PositionScalar<T, R>>;
pub type Displacement<T, R> = Vec2<Length<T, R>>;
pub type Velocity<T, R> = Vec2<Speed<T, R>>;
pub type Acceleration<T, R> = Vec2<AccelerationScalar<T, R>>;
pub type Momentum<T, R> = Vec2<MomentumScalar<T, R>>;
pub type Impulse<T, R> = Vec2<ImpulseScalar<T, R>>;
pub type Force<T, R> = Vec2<ForceScalar<T, R>>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::prelude::*;
    use crate::util::real::nearly_equal_eps;

    fn disp(x: Scalar, y: Scalar) -> BaseDisplacement {
        BaseDisplacement::new(bl(x), bl(y))
    }

    // ==================== Vec2 Basic Operations ====================

    #[test]
    fn vec2_addition() {
        let a = disp(1.0, 2.0);
        let b = disp(3.0, 4.0);
        assert_eq!(a + b, disp(4.0, 6.0));
    }

    #[test]
    fn vec2_subtraction() {
        let a = disp(5.0, 6.0);
        let b = disp(3.0, 4.0);
        assert_eq!(a - b, disp(2.0, 2.0));
        assert_eq!(-a, disp(-5.0, -6.0));
    }

    #[test]
    fn vec2_add_sub_assign() {
        let mut a = disp(1.0, 2.0);
        a += disp(3.0, 4.0);
        assert_eq!(a, disp(4.0, 6.0));
        a -= disp(4.0, 4.0);
        assert_eq!(a, disp(0.0, 2.0));
    }

    #[test]
    fn vec2_scalar_multiplication() {
        let a = disp(1.0, 1.5);
        assert_eq!(a * 2.0, disp(2.0, 3.0));
        assert_eq!(2.0 * a, disp(2.0, 3.0));
        assert_eq!(a / 2.0, disp(0.5, 0.75));

        let mut b = a;
        b *= 4.0;
        assert_eq!(b, disp(4.0, 6.0));
        b /= 2.0;
        assert_eq!(b, disp(2.0, 3.0));
    }

    #[test]
    fn vec2_plain_floats() {
        let v = Vec2::new(3.0_f32, 4.0);
        assert_eq!(v.magnitude(), 5.0);
        assert_eq!(v.square_mag(), 25.0);
        assert_eq!(v.unit(), Vec2::new(0.6, 0.8));
    }

    #[test]
    fn vec2_sum() {
        let total: BaseDisplacement = [disp(1.0, 2.0), disp(3.0, 4.0), disp(-1.0, 0.5)]
            .into_iter()
            .sum();
        assert_eq!(total, disp(3.0, 6.5));
    }

    // ==================== Units ====================

    #[test]
    fn vec2_scaling_by_quantity_changes_unit() {
        let velocity = BaseVelocity::new(bl_ps(2.0), bl_ps(-1.0));
        let moved: BaseDisplacement = velocity * secs(0.5);
        assert_eq!(moved, disp(1.0, -0.5));

        let back: BaseVelocity = moved / secs(0.5);
        assert_eq!(back, velocity);

        let momentum: BaseMomentum = velocity * bm(3.0);
        assert_eq!(momentum.x.value(), 6.0);
        assert_eq!(momentum.y.value(), -3.0);
    }

    #[test]
    fn vec2_magnitude_keeps_unit() {
        let d = disp(3.0, 4.0);
        let sq: BaseArea = d.square_mag();
        assert_eq!(sq.value(), 25.0);
        assert_eq!(d.magnitude(), bl(5.0));

        let p = PixelDisplacement::new(pl(6.0), pl(8.0));
        let len: PixelDistance = p.magnitude();
        assert_eq!(len, pl(10.0));
    }

    #[test]
    fn vec2_unit_is_dimensionless() {
        let u = disp(3.0, 4.0).unit();
        assert_eq!(u, Vec2::new(BaseUnitless::new(0.6), BaseUnitless::new(0.8)));
        assert_eq!(u.magnitude(), BaseUnitless::new(1.0));
    }

    #[test]
    fn vec2_unit_magnitude_is_one() {
        for (x, y) in [(1.0, 1.0), (-2.0, 7.5), (1e-3, 5e2), (0.0, -3.0), (123.4, -0.01)] {
            let m = disp(x, y).unit().magnitude().to_raw();
            assert!(nearly_equal_eps(m, 1.0, 4.0 * Scalar::EPSILON), "({x}, {y}): {m}");
        }
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "unit() of zero vector")]
    fn vec2_unit_of_zero_panics() {
        let _ = BaseDisplacement::zero().unit();
    }

    #[test]
    fn vec2_dot_and_elementwise() {
        let force = BaseForce::new(
            BaseForceScalar::new(2.0),
            BaseForceScalar::new(-1.0),
        );
        let d = disp(3.0, 4.0);
        let work = dot(force, d);
        assert_eq!(work.value(), 2.0);

        let scaled = elem_mul(d, Vec2::new(2.0_f32, 0.5));
        assert_eq!(scaled, disp(6.0, 2.0));
        let ratio = elem_div(d, disp(1.5, 2.0));
        assert_eq!(ratio, Vec2::new(BaseUnitless::new(2.0), BaseUnitless::new(2.0)));
    }

    // ==================== Equality and Conversion ====================

    #[test]
    fn vec2_zero() {
        assert!(BaseDisplacement::zero().is_zero());
        assert!(disp(-0.0, 0.0).is_zero());
        assert!(!disp(0.0, 1e-20).is_zero());
        assert_eq!(BaseDisplacement::default(), BaseDisplacement::zero());
    }

    #[test]
    fn vec2_nearly_equal() {
        let a = disp(0.1, 0.2) + disp(0.2, 0.1);
        assert!(a.nearly_equal(&disp(0.3, 0.3)));
        assert!(!a.nearly_equal(&disp(0.3, 0.30001)));
        check_nearly_eq!(a, disp(0.3, 0.3));
    }

    #[test]
    fn vec2_convert_between_families() {
        let world = BasePosition::new(bl(2.0), bl(0.5));
        let screen: PixelPosition = world.convert();
        assert_eq!(screen, PixelPosition::new(pl(64.0), pl(16.0)));
        let back: BasePosition = screen.convert();
        assert_eq!(back, world);

        let wide: Vec2<f64> = Vec2::new(1.5_f32, -2.0).convert();
        assert_eq!(wide, Vec2::new(1.5_f64, -2.0));
    }

    #[test]
    fn vec2_display() {
        assert_eq!(format!("{}", disp(1.0, 2.5)), "vec(1, 2.5)");
        assert_eq!(format!("{:.1}", disp(1.0, 2.0)), "vec(1.0, 2.0)");
    }
}
