use crate::util::dimension::{Area, Distance, PositionScalar, ScaleMul};
use crate::util::linalg::{Displacement, Position};
use crate::util::real::{NearlyEqual, Real};
use crate::util::rect::{AxisAlignedExtent, Rect};
use std::fmt;
use std::fmt::Formatter;

/// A circle, given by its centre and radius. Valid if the radius is not negative.
pub struct Circle<T, R> {
    pub centre: Position<T, R>,
    pub radius: Distance<T, R>,
}

impl<T: Real, R> Circle<T, R> {
    pub const fn new(centre: Position<T, R>, radius: Distance<T, R>) -> Self {
        Self { centre, radius }
    }

    pub fn x(&self) -> PositionScalar<T, R> {
        self.centre.x
    }
    pub fn y(&self) -> PositionScalar<T, R> {
        self.centre.y
    }

    pub fn left(&self) -> PositionScalar<T, R> {
        self.x() - self.radius
    }
    pub fn right(&self) -> PositionScalar<T, R> {
        self.x() + self.radius
    }
    pub fn top(&self) -> PositionScalar<T, R> {
        self.y() - self.radius
    }
    pub fn bottom(&self) -> PositionScalar<T, R> {
        self.y() + self.radius
    }

    pub fn diameter(&self) -> Distance<T, R> {
        self.radius * T::TWO
    }
    pub fn area(&self) -> Area<T, <R as ScaleMul<R>>::Output>
    where
        R: ScaleMul<R>,
    {
        self.radius * self.radius * T::from_f64(std::f64::consts::PI)
    }

    pub fn move_this_by(&mut self, dis: Displacement<T, R>) {
        self.centre += dis;
    }
    #[must_use]
    pub fn moved_by(mut self, dis: Displacement<T, R>) -> Self {
        self.move_this_by(dis);
        self
    }
    #[must_use]
    pub fn with_centre(mut self, centre: Position<T, R>) -> Self {
        self.centre = centre;
        self
    }

    /// True if `pos` is strictly inside.
    pub fn contains(&self, pos: Position<T, R>) -> bool
    where
        R: ScaleMul<R>,
    {
        (pos - self.centre).square_mag() < self.radius * self.radius
    }

    pub fn is_valid(&self) -> bool {
        self.radius >= Distance::zero()
    }
    pub fn make_valid(&mut self) {
        self.radius = self.radius.abs();
    }
}

impl<T: Real, R> AxisAlignedExtent<T, R> for Circle<T, R> {
    /// The bounding square. The circle must be valid.
    fn aabb(&self) -> Rect<T, R> {
        let diameter = self.diameter();
        Rect::centre_size(self.centre, Displacement::new(diameter, diameter))
    }
}

impl<T: Copy, R> Clone for Circle<T, R> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T: Copy, R> Copy for Circle<T, R> {}

impl<T: PartialEq, R> PartialEq for Circle<T, R> {
    fn eq(&self, other: &Self) -> bool {
        self.centre == other.centre && self.radius == other.radius
    }
}

impl<T: Real, R> NearlyEqual for Circle<T, R> {
    fn nearly_equal(&self, rhs: &Self) -> bool {
        self.centre.nearly_equal(&rhs.centre) && self.radius.nearly_equal(&rhs.radius)
    }
}

impl<T: fmt::Debug, R> fmt::Debug for Circle<T, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Circle")
            .field("centre", &self.centre)
            .field("radius", &self.radius)
            .finish()
    }
}

impl<T: Real, R> fmt::Display for Circle<T, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "circle(centre: {}, radius: {})", self.centre, self.radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::prelude::*;

    fn circle(x: Scalar, y: Scalar, r: Scalar) -> BaseCircle {
        BaseCircle::new(BasePosition::new(bl(x), bl(y)), bl(r))
    }

    #[test]
    fn circle_edges_match_aabb() {
        for c in [circle(0.0, 0.0, 5.0), circle(-3.5, 2.25, 0.5), circle(10.0, 10.0, 0.0)] {
            let aabb = c.aabb();
            assert_eq!(aabb.left(), c.left());
            assert_eq!(aabb.right(), c.right());
            assert_eq!(aabb.top(), c.top());
            assert_eq!(aabb.bottom(), c.bottom());
            assert_eq!(aabb.centre(), c.centre);
        }
        let c = circle(1.0, 2.0, 3.0);
        assert_eq!((c.left(), c.right()), (bl(-2.0), bl(4.0)));
        assert_eq!((c.top(), c.bottom()), (bl(-1.0), bl(5.0)));
        assert_eq!(c.aabb().size(), BaseDisplacement::new(bl(6.0), bl(6.0)));
    }

    #[test]
    fn circle_validity() {
        let mut c = circle(0.0, 0.0, -2.0);
        assert!(!c.is_valid());
        c.make_valid();
        assert!(c.is_valid());
        assert_eq!(c.radius, bl(2.0));
        assert!(circle(0.0, 0.0, 0.0).is_valid());
    }

    #[test]
    fn circle_contains_is_strict() {
        let c = circle(0.0, 0.0, 5.0);
        assert!(c.contains(BasePosition::new(bl(3.0), bl(3.9))));
        assert!(!c.contains(BasePosition::new(bl(3.0), bl(4.0))));
        assert!(!c.contains(BasePosition::new(bl(5.0), bl(0.0))));
    }

    #[test]
    fn circle_moves() {
        let c = circle(1.0, 1.0, 1.0);
        let moved = c.moved_by(BaseDisplacement::new(bl(2.0), bl(-1.0)));
        assert_eq!(moved, circle(3.0, 0.0, 1.0));
        assert_eq!(c.with_centre(BasePosition::zero()), circle(0.0, 0.0, 1.0));
        check_nearly_eq!(circle(0.0, 0.0, 2.0).area().value(), 4.0 * std::f32::consts::PI);
        assert_eq!(format!("{c}"), "circle(centre: vec(1, 1), radius: 1)");
    }
}
