use crate::util::dimension::{Area, Distance, PositionScalar, ScaleMul};
use crate::util::linalg::{Displacement, Position, Vec2};
use crate::util::real::{force_positive_zero, NearlyEqual, Real};
use std::{
    fmt,
    fmt::Formatter,
    ops::{Add, AddAssign, Div, Mul, Sub, SubAssign},
};

/// Anything with an axis-aligned bounding box.
pub trait AxisAlignedExtent<T, R> {
    fn aabb(&self) -> Rect<T, R>;
}

/// An axis-aligned rectangle, stored as its centre and half-extent.
///
/// The y axis points down, so the top edge has the smallest y coordinate.
///
/// A rectangle is valid if neither half-extent component is negative. All constructors except
/// [`Rect::centre_size`] with a negative size produce valid rectangles; the edge and corner
/// setters do not clamp, so moving an edge past the opposite one produces an invalid rectangle.
/// Use [`Rect::make_valid`] to fix that.
///
/// # Examples
///
/// ```
/// use dodge::core::prelude::*;
///
/// let rect = BaseRect::left_top_size(
///     BasePosition::new(bl(1.0), bl(2.0)),
///     BaseDisplacement::new(bl(4.0), bl(2.0)),
/// );
/// assert_eq!(rect.centre(), BasePosition::new(bl(3.0), bl(3.0)));
/// assert_eq!(rect.right(), bl(5.0));
/// assert!(rect.contains(BasePosition::new(bl(2.0), bl(3.5))));
/// // Points on an edge are not inside.
/// assert!(!rect.contains(BasePosition::new(bl(1.0), bl(3.0))));
/// ```
pub struct Rect<T, R> {
    centre: Position<T, R>,
    half_extent: Displacement<T, R>,
}

impl<T: Real, R> Rect<T, R> {
    const fn new(centre: Position<T, R>, half_extent: Displacement<T, R>) -> Self {
        Self {
            centre,
            half_extent,
        }
    }

    /// Creates a rectangle from two opposite corners, in any order.
    pub fn corner_corner(this_corner: Position<T, R>, that_corner: Position<T, R>) -> Self {
        let left_top = Position::new(
            this_corner.x.min(that_corner.x),
            this_corner.y.min(that_corner.y),
        );
        let right_bottom = Position::new(
            this_corner.x.max(that_corner.x),
            this_corner.y.max(that_corner.y),
        );
        let half_extent = (right_bottom - left_top) * T::HALF;
        Self::new(left_top + half_extent, half_extent)
    }

    /// The size must not be negative.
    pub fn centre_size(centre: Position<T, R>, size: Displacement<T, R>) -> Self {
        crate::debug_check!(
            size.x >= Distance::zero() && size.y >= Distance::zero(),
            "rectangle size must not be negative: {size}"
        );
        Self::new(centre, size * T::HALF)
    }
    pub fn left_top_size(left_top: Position<T, R>, size: Displacement<T, R>) -> Self {
        let half_extent = size * T::HALF;
        Self::new(left_top + half_extent, half_extent)
    }
    pub fn right_bottom_size(right_bottom: Position<T, R>, size: Displacement<T, R>) -> Self {
        let half_extent = size * T::HALF;
        Self::new(right_bottom - half_extent, half_extent)
    }
    pub fn left_bottom_size(left_bottom: Position<T, R>, size: Displacement<T, R>) -> Self {
        let half_extent = size * T::HALF;
        let centre = Position::new(left_bottom.x + half_extent.x, left_bottom.y - half_extent.y);
        Self::new(centre, half_extent)
    }
    pub fn right_top_size(right_top: Position<T, R>, size: Displacement<T, R>) -> Self {
        let half_extent = size * T::HALF;
        let centre = Position::new(right_top.x - half_extent.x, right_top.y + half_extent.y);
        Self::new(centre, half_extent)
    }
    /// A zero-sized rectangle centred on the origin.
    pub fn zero() -> Self {
        Self::new(Position::zero(), Displacement::zero())
    }

    pub fn left_top(&self) -> Position<T, R> {
        self.centre - self.half_extent
    }
    pub fn right_bottom(&self) -> Position<T, R> {
        self.centre + self.half_extent
    }
    pub fn left_bottom(&self) -> Position<T, R> {
        Position::new(self.left(), self.bottom())
    }
    pub fn right_top(&self) -> Position<T, R> {
        Position::new(self.right(), self.top())
    }
    pub fn left(&self) -> PositionScalar<T, R> {
        self.centre.x - self.half_extent.x
    }
    pub fn right(&self) -> PositionScalar<T, R> {
        self.centre.x + self.half_extent.x
    }
    pub fn top(&self) -> PositionScalar<T, R> {
        self.centre.y - self.half_extent.y
    }
    pub fn bottom(&self) -> PositionScalar<T, R> {
        self.centre.y + self.half_extent.y
    }
    pub fn centre(&self) -> Position<T, R> {
        self.centre
    }
    pub fn mid_x(&self) -> PositionScalar<T, R> {
        self.centre.x
    }
    pub fn mid_y(&self) -> PositionScalar<T, R> {
        self.centre.y
    }

    pub fn half_extent(&self) -> Displacement<T, R> {
        self.half_extent
    }
    pub fn size(&self) -> Displacement<T, R> {
        self.half_extent * T::TWO
    }
    pub fn width(&self) -> Distance<T, R> {
        self.half_extent.x * T::TWO
    }
    pub fn height(&self) -> Distance<T, R> {
        self.half_extent.y * T::TWO
    }
    pub fn area(&self) -> Area<T, <R as ScaleMul<R>>::Output>
    where
        R: ScaleMul<R>,
    {
        self.half_extent.x * self.half_extent.y * (T::TWO * T::TWO)
    }

    // Moving: keeps the size, changes the position.

    pub fn move_this_by(&mut self, dis: Displacement<T, R>) {
        self.centre += dis;
    }
    #[must_use]
    pub fn moved_by(mut self, dis: Displacement<T, R>) -> Self {
        self.move_this_by(dis);
        self
    }
    pub fn move_this_hor_by(&mut self, dis: Distance<T, R>) {
        self.centre.x += dis;
    }
    #[must_use]
    pub fn moved_hor_by(mut self, dis: Distance<T, R>) -> Self {
        self.move_this_hor_by(dis);
        self
    }
    pub fn move_this_ver_by(&mut self, dis: Distance<T, R>) {
        self.centre.y += dis;
    }
    #[must_use]
    pub fn moved_ver_by(mut self, dis: Distance<T, R>) -> Self {
        self.move_this_ver_by(dis);
        self
    }

    pub fn move_centre(&mut self, centre: Position<T, R>) {
        self.centre = centre;
    }
    #[must_use]
    pub fn with_centre(mut self, centre: Position<T, R>) -> Self {
        self.move_centre(centre);
        self
    }

    pub fn move_left_top(&mut self, left_top: Position<T, R>) {
        self.move_this_by(left_top - self.left_top());
    }
    #[must_use]
    pub fn with_moved_left_top(mut self, left_top: Position<T, R>) -> Self {
        self.move_left_top(left_top);
        self
    }
    pub fn move_right_top(&mut self, right_top: Position<T, R>) {
        self.move_this_by(right_top - self.right_top());
    }
    #[must_use]
    pub fn with_moved_right_top(mut self, right_top: Position<T, R>) -> Self {
        self.move_right_top(right_top);
        self
    }
    pub fn move_left_bottom(&mut self, left_bottom: Position<T, R>) {
        self.move_this_by(left_bottom - self.left_bottom());
    }
    #[must_use]
    pub fn with_moved_left_bottom(mut self, left_bottom: Position<T, R>) -> Self {
        self.move_left_bottom(left_bottom);
        self
    }
    pub fn move_right_bottom(&mut self, right_bottom: Position<T, R>) {
        self.move_this_by(right_bottom - self.right_bottom());
    }
    #[must_use]
    pub fn with_moved_right_bottom(mut self, right_bottom: Position<T, R>) -> Self {
        self.move_right_bottom(right_bottom);
        self
    }

    pub fn move_left(&mut self, left: PositionScalar<T, R>) {
        self.move_this_hor_by(left - self.left());
    }
    #[must_use]
    pub fn with_moved_left(mut self, left: PositionScalar<T, R>) -> Self {
        self.move_left(left);
        self
    }
    pub fn move_right(&mut self, right: PositionScalar<T, R>) {
        self.move_this_hor_by(right - self.right());
    }
    #[must_use]
    pub fn with_moved_right(mut self, right: PositionScalar<T, R>) -> Self {
        self.move_right(right);
        self
    }
    pub fn move_top(&mut self, top: PositionScalar<T, R>) {
        self.move_this_ver_by(top - self.top());
    }
    #[must_use]
    pub fn with_moved_top(mut self, top: PositionScalar<T, R>) -> Self {
        self.move_top(top);
        self
    }
    pub fn move_bottom(&mut self, bottom: PositionScalar<T, R>) {
        self.move_this_ver_by(bottom - self.bottom());
    }
    #[must_use]
    pub fn with_moved_bottom(mut self, bottom: PositionScalar<T, R>) -> Self {
        self.move_bottom(bottom);
        self
    }

    // Setting an edge or corner: the opposite edge or corner stays where it is. There is no
    // clamping, so crossing the opposite edge gives a negative half-extent.

    pub fn set_left(&mut self, left: PositionScalar<T, R>) {
        self.half_extent.x = (self.right() - left) * T::HALF;
        self.centre.x = left + self.half_extent.x;
    }
    #[must_use]
    pub fn with_left_as(mut self, left: PositionScalar<T, R>) -> Self {
        self.set_left(left);
        self
    }
    pub fn set_right(&mut self, right: PositionScalar<T, R>) {
        self.half_extent.x = (right - self.left()) * T::HALF;
        self.centre.x = right - self.half_extent.x;
    }
    #[must_use]
    pub fn with_right_as(mut self, right: PositionScalar<T, R>) -> Self {
        self.set_right(right);
        self
    }
    pub fn set_top(&mut self, top: PositionScalar<T, R>) {
        self.half_extent.y = (self.bottom() - top) * T::HALF;
        self.centre.y = top + self.half_extent.y;
    }
    #[must_use]
    pub fn with_top_as(mut self, top: PositionScalar<T, R>) -> Self {
        self.set_top(top);
        self
    }
    pub fn set_bottom(&mut self, bottom: PositionScalar<T, R>) {
        self.half_extent.y = (bottom - self.top()) * T::HALF;
        self.centre.y = bottom - self.half_extent.y;
    }
    #[must_use]
    pub fn with_bottom_as(mut self, bottom: PositionScalar<T, R>) -> Self {
        self.set_bottom(bottom);
        self
    }

    pub fn set_left_top(&mut self, left_top: Position<T, R>) {
        self.set_left(left_top.x);
        self.set_top(left_top.y);
    }
    #[must_use]
    pub fn with_left_top_as(mut self, left_top: Position<T, R>) -> Self {
        self.set_left_top(left_top);
        self
    }
    pub fn set_right_top(&mut self, right_top: Position<T, R>) {
        self.set_right(right_top.x);
        self.set_top(right_top.y);
    }
    #[must_use]
    pub fn with_right_top_as(mut self, right_top: Position<T, R>) -> Self {
        self.set_right_top(right_top);
        self
    }
    pub fn set_left_bottom(&mut self, left_bottom: Position<T, R>) {
        self.set_left(left_bottom.x);
        self.set_bottom(left_bottom.y);
    }
    #[must_use]
    pub fn with_left_bottom_as(mut self, left_bottom: Position<T, R>) -> Self {
        self.set_left_bottom(left_bottom);
        self
    }
    pub fn set_right_bottom(&mut self, right_bottom: Position<T, R>) {
        self.set_right(right_bottom.x);
        self.set_bottom(right_bottom.y);
    }
    #[must_use]
    pub fn with_right_bottom_as(mut self, right_bottom: Position<T, R>) -> Self {
        self.set_right_bottom(right_bottom);
        self
    }

    // Scaling: about the centre, or about an origin that stays fixed.

    pub fn scale_this(&mut self, factor: T) {
        self.half_extent *= factor;
    }
    pub fn scale_this_about(&mut self, factor: T, origin: Position<T, R>) {
        self.centre = origin + (self.centre - origin) * factor;
        self.half_extent *= factor;
    }
    #[must_use]
    pub fn with_scaled(mut self, factor: T) -> Self {
        self.scale_this(factor);
        self
    }
    #[must_use]
    pub fn with_scaled_about(mut self, factor: T, origin: Position<T, R>) -> Self {
        self.scale_this_about(factor, origin);
        self
    }

    pub fn scale_this_width(&mut self, factor: T) {
        self.half_extent.x *= factor;
    }
    pub fn scale_this_width_about(&mut self, factor: T, origin_x: PositionScalar<T, R>) {
        self.centre.x = origin_x + (self.centre.x - origin_x) * factor;
        self.half_extent.x *= factor;
    }
    #[must_use]
    pub fn with_scaled_width(mut self, factor: T) -> Self {
        self.scale_this_width(factor);
        self
    }
    #[must_use]
    pub fn with_scaled_width_about(mut self, factor: T, origin_x: PositionScalar<T, R>) -> Self {
        self.scale_this_width_about(factor, origin_x);
        self
    }

    pub fn scale_this_height(&mut self, factor: T) {
        self.half_extent.y *= factor;
    }
    pub fn scale_this_height_about(&mut self, factor: T, origin_y: PositionScalar<T, R>) {
        self.centre.y = origin_y + (self.centre.y - origin_y) * factor;
        self.half_extent.y *= factor;
    }
    #[must_use]
    pub fn with_scaled_height(mut self, factor: T) -> Self {
        self.scale_this_height(factor);
        self
    }
    #[must_use]
    pub fn with_scaled_height_about(mut self, factor: T, origin_y: PositionScalar<T, R>) -> Self {
        self.scale_this_height_about(factor, origin_y);
        self
    }

    pub fn scale_this_both(&mut self, factor: Vec2<T>) {
        self.scale_this_width(factor.x);
        self.scale_this_height(factor.y);
    }
    pub fn scale_this_both_about(&mut self, factor: Vec2<T>, origin: Position<T, R>) {
        self.scale_this_width_about(factor.x, origin.x);
        self.scale_this_height_about(factor.y, origin.y);
    }
    #[must_use]
    pub fn with_scaled_both(mut self, factor: Vec2<T>) -> Self {
        self.scale_this_both(factor);
        self
    }
    #[must_use]
    pub fn with_scaled_both_about(mut self, factor: Vec2<T>, origin: Position<T, R>) -> Self {
        self.scale_this_both_about(factor, origin);
        self
    }

    // Sizing: about the centre.

    pub fn set_square_size(&mut self, length: Distance<T, R>) {
        let half = length * T::HALF;
        self.half_extent = Displacement::new(half, half);
    }
    #[must_use]
    pub fn with_square_size(mut self, length: Distance<T, R>) -> Self {
        self.set_square_size(length);
        self
    }
    pub fn set_width(&mut self, width: Distance<T, R>) {
        self.half_extent.x = width * T::HALF;
    }
    #[must_use]
    pub fn with_width(mut self, width: Distance<T, R>) -> Self {
        self.set_width(width);
        self
    }
    pub fn set_height(&mut self, height: Distance<T, R>) {
        self.half_extent.y = height * T::HALF;
    }
    #[must_use]
    pub fn with_height(mut self, height: Distance<T, R>) -> Self {
        self.set_height(height);
        self
    }
    pub fn set_size(&mut self, size: Displacement<T, R>) {
        self.half_extent = size * T::HALF;
    }
    #[must_use]
    pub fn with_size(mut self, size: Displacement<T, R>) -> Self {
        self.set_size(size);
        self
    }

    /// True if `pos` is strictly inside. Points on an edge or corner are not contained.
    pub fn contains(&self, pos: Position<T, R>) -> bool {
        pos.x > self.left() && pos.x < self.right() && pos.y > self.top() && pos.y < self.bottom()
    }

    /// True if neither the width nor the height is negative.
    pub fn is_valid(&self) -> bool {
        self.half_extent.x >= Distance::zero() && self.half_extent.y >= Distance::zero()
    }

    /// True if the width or the height is zero.
    pub fn is_zero(&self) -> bool {
        self.half_extent.x.is_zero() || self.half_extent.y.is_zero()
    }

    /// Flips negative extents, so that the rectangle covers the same region but is valid.
    pub fn make_valid(&mut self) {
        self.half_extent = self
            .half_extent
            .map(|x| Distance::new(force_positive_zero(x.value().abs())));
    }
}

impl<T: Real, R> AxisAlignedExtent<T, R> for Rect<T, R> {
    fn aabb(&self) -> Rect<T, R> {
        *self
    }
}

impl<T: Copy, R> Clone for Rect<T, R> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T: Copy, R> Copy for Rect<T, R> {}

impl<T: PartialEq, R> PartialEq for Rect<T, R> {
    fn eq(&self, other: &Self) -> bool {
        self.centre == other.centre && self.half_extent == other.half_extent
    }
}

impl<T: Real, R> NearlyEqual for Rect<T, R> {
    fn nearly_equal(&self, rhs: &Self) -> bool {
        self.centre.nearly_equal(&rhs.centre) && self.half_extent.nearly_equal(&rhs.half_extent)
    }
}

impl<T: fmt::Debug, R> fmt::Debug for Rect<T, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rect")
            .field("centre", &self.centre)
            .field("half_extent", &self.half_extent)
            .finish()
    }
}

impl<T: Real, R> fmt::Display for Rect<T, R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let (left_top, right_bottom) = (self.left_top(), self.right_bottom());
        if let Some(p) = f.precision() {
            write!(
                f,
                "rect(left_top: {left_top:.p$}, right_bottom: {right_bottom:.p$})"
            )
        } else {
            write!(f, "rect(left_top: {left_top}, right_bottom: {right_bottom})")
        }
    }
}

impl<T: Real, R> Add<Displacement<T, R>> for Rect<T, R> {
    type Output = Rect<T, R>;

    fn add(self, rhs: Displacement<T, R>) -> Self::Output {
        self.moved_by(rhs)
    }
}
impl<T: Real, R> AddAssign<Displacement<T, R>> for Rect<T, R> {
    fn add_assign(&mut self, rhs: Displacement<T, R>) {
        self.move_this_by(rhs);
    }
}
impl<T: Real, R> Sub<Displacement<T, R>> for Rect<T, R> {
    type Output = Rect<T, R>;

    fn sub(self, rhs: Displacement<T, R>) -> Self::Output {
        self.moved_by(-rhs)
    }
}
impl<T: Real, R> SubAssign<Displacement<T, R>> for Rect<T, R> {
    fn sub_assign(&mut self, rhs: Displacement<T, R>) {
        self.move_this_by(-rhs);
    }
}

// Scaling keeps the centre in place.
impl<T: Real, R> Mul<T> for Rect<T, R> {
    type Output = Rect<T, R>;

    fn mul(self, rhs: T) -> Self::Output {
        self.with_scaled(rhs)
    }
}
impl<T: Real, R> Div<T> for Rect<T, R> {
    type Output = Rect<T, R>;

    fn div(self, rhs: T) -> Self::Output {
        self.with_scaled(rhs.recip())
    }
}

macro_rules! impl_scalar_lhs_mul {
    ($t:ty) => {
        impl<R> Mul<Rect<$t, R>> for $t {
            type Output = Rect<$t, R>;

            fn mul(self, rhs: Rect<$t, R>) -> Self::Output {
                rhs.with_scaled(self)
            }
        }
    };
}

impl_scalar_lhs_mul!(f32);
impl_scalar_lhs_mul!(f64);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::prelude::*;

    fn pos(x: Scalar, y: Scalar) -> BasePosition {
        BasePosition::new(bl(x), bl(y))
    }
    fn disp(x: Scalar, y: Scalar) -> BaseDisplacement {
        BaseDisplacement::new(bl(x), bl(y))
    }

    // ==================== Construction ====================

    #[test]
    fn rect_constructors_agree() {
        let expected = BaseRect::centre_size(pos(2.0, 3.0), disp(4.0, 2.0));
        assert_eq!(BaseRect::corner_corner(pos(0.0, 2.0), pos(4.0, 4.0)), expected);
        assert_eq!(BaseRect::corner_corner(pos(4.0, 4.0), pos(0.0, 2.0)), expected);
        assert_eq!(BaseRect::corner_corner(pos(0.0, 4.0), pos(4.0, 2.0)), expected);
        assert_eq!(BaseRect::left_top_size(pos(0.0, 2.0), disp(4.0, 2.0)), expected);
        assert_eq!(BaseRect::right_bottom_size(pos(4.0, 4.0), disp(4.0, 2.0)), expected);
        assert_eq!(BaseRect::left_bottom_size(pos(0.0, 4.0), disp(4.0, 2.0)), expected);
        assert_eq!(BaseRect::right_top_size(pos(4.0, 2.0), disp(4.0, 2.0)), expected);
    }

    #[test]
    fn rect_zero() {
        let zero = BaseRect::zero();
        assert!(zero.is_zero());
        assert!(zero.is_valid());
        assert_eq!(zero.centre(), BasePosition::zero());
        assert_eq!(zero.size(), BaseDisplacement::zero());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "rectangle size must not be negative")]
    fn rect_centre_size_negative_panics() {
        let _ = BaseRect::centre_size(pos(0.0, 0.0), disp(-1.0, 1.0));
    }

    // ==================== Accessors ====================

    #[test]
    fn rect_accessors() {
        let rect = BaseRect::left_top_size(pos(1.0, 2.0), disp(4.0, 6.0));
        assert_eq!(rect.left(), bl(1.0));
        assert_eq!(rect.right(), bl(5.0));
        assert_eq!(rect.top(), bl(2.0));
        assert_eq!(rect.bottom(), bl(8.0));
        assert_eq!(rect.left_top(), pos(1.0, 2.0));
        assert_eq!(rect.right_top(), pos(5.0, 2.0));
        assert_eq!(rect.left_bottom(), pos(1.0, 8.0));
        assert_eq!(rect.right_bottom(), pos(5.0, 8.0));
        assert_eq!(rect.centre(), pos(3.0, 5.0));
        assert_eq!(rect.mid_x(), bl(3.0));
        assert_eq!(rect.mid_y(), bl(5.0));
        assert_eq!(rect.half_extent(), disp(2.0, 3.0));
        assert_eq!(rect.width(), bl(4.0));
        assert_eq!(rect.height(), bl(6.0));
        assert_eq!(rect.size(), disp(4.0, 6.0));
        assert_eq!(rect.area().value(), 24.0);
    }

    #[test]
    fn rect_left_top_size_round_trip() {
        for (p, s) in [
            (pos(0.0, 0.0), disp(10.0, 10.0)),
            (pos(-3.5, 7.25), disp(0.5, 2.0)),
            (pos(100.0, -40.0), disp(0.0, 8.0)),
        ] {
            let rect = BaseRect::left_top_size(p, s);
            assert_eq!(rect.left_top(), p);
            assert_eq!(rect.size(), s);
        }
    }

    #[test]
    fn rect_pixel_area_has_pixel_scale() {
        let rect = PixelRect::left_top_size(
            PixelPosition::zero(),
            PixelDisplacement::new(pl(32.0), pl(64.0)),
        );
        let area = rect.area();
        assert_eq!(area.value(), 2048.0);
        let blocks: BaseArea = area.rescale();
        assert_eq!(blocks.value(), 2.0);
    }

    // ==================== Movement ====================

    #[test]
    fn rect_moves_keep_size() {
        let rect = BaseRect::left_top_size(pos(0.0, 0.0), disp(2.0, 4.0));

        assert_eq!(rect.moved_by(disp(1.0, 1.0)).left_top(), pos(1.0, 1.0));
        assert_eq!(rect.moved_hor_by(bl(3.0)).left_top(), pos(3.0, 0.0));
        assert_eq!(rect.moved_ver_by(bl(-3.0)).left_top(), pos(0.0, -3.0));
        assert_eq!(rect.with_centre(pos(0.0, 0.0)).left_top(), pos(-1.0, -2.0));

        assert_eq!(rect.with_moved_left_top(pos(5.0, 5.0)).left_top(), pos(5.0, 5.0));
        assert_eq!(rect.with_moved_right_top(pos(5.0, 5.0)).right_top(), pos(5.0, 5.0));
        assert_eq!(rect.with_moved_left_bottom(pos(5.0, 5.0)).left_bottom(), pos(5.0, 5.0));
        assert_eq!(rect.with_moved_right_bottom(pos(5.0, 5.0)).right_bottom(), pos(5.0, 5.0));
        assert_eq!(rect.with_moved_left(bl(7.0)).left(), bl(7.0));
        assert_eq!(rect.with_moved_right(bl(7.0)).right(), bl(7.0));
        assert_eq!(rect.with_moved_top(bl(7.0)).top(), bl(7.0));
        assert_eq!(rect.with_moved_bottom(bl(7.0)).bottom(), bl(7.0));

        for moved in [
            rect.moved_by(disp(1.0, 1.0)),
            rect.with_moved_left_top(pos(5.0, 5.0)),
            rect.with_moved_right_bottom(pos(-5.0, 5.0)),
            rect.with_moved_bottom(bl(7.0)),
        ] {
            assert_eq!(moved.size(), rect.size());
        }
    }

    #[test]
    fn rect_move_in_place_matches_with_moved() {
        let rect = BaseRect::left_top_size(pos(0.0, 0.0), disp(2.0, 4.0));
        let mut moved = rect;
        moved.move_right_bottom(pos(10.0, 10.0));
        assert_eq!(moved, rect.with_moved_right_bottom(pos(10.0, 10.0)));

        let mut moved = rect;
        moved += disp(1.0, 2.0);
        assert_eq!(moved, rect + disp(1.0, 2.0));
        moved -= disp(1.0, 2.0);
        assert_eq!(moved, rect);
        assert_eq!(rect - disp(1.0, 2.0), rect.moved_by(disp(-1.0, -2.0)));
    }

    // ==================== Edge and corner setters ====================

    #[test]
    fn rect_set_edges_keep_opposite_edge() {
        let rect = BaseRect::left_top_size(pos(0.0, 0.0), disp(4.0, 4.0));

        let r = rect.with_left_as(bl(1.0));
        assert_eq!((r.left(), r.right(), r.width()), (bl(1.0), bl(4.0), bl(3.0)));
        let r = rect.with_right_as(bl(6.0));
        assert_eq!((r.left(), r.right(), r.width()), (bl(0.0), bl(6.0), bl(6.0)));
        let r = rect.with_top_as(bl(-2.0));
        assert_eq!((r.top(), r.bottom(), r.height()), (bl(-2.0), bl(4.0), bl(6.0)));
        let r = rect.with_bottom_as(bl(2.0));
        assert_eq!((r.top(), r.bottom(), r.height()), (bl(0.0), bl(2.0), bl(2.0)));
    }

    #[test]
    fn rect_set_corners_keep_opposite_corner() {
        let rect = BaseRect::left_top_size(pos(0.0, 0.0), disp(4.0, 4.0));

        let r = rect.with_left_top_as(pos(1.0, 2.0));
        assert_eq!((r.left_top(), r.right_bottom()), (pos(1.0, 2.0), pos(4.0, 4.0)));
        let r = rect.with_right_top_as(pos(6.0, -2.0));
        assert_eq!((r.right_top(), r.left_bottom()), (pos(6.0, -2.0), pos(0.0, 4.0)));
        let r = rect.with_left_bottom_as(pos(-2.0, 6.0));
        assert_eq!((r.left_bottom(), r.right_top()), (pos(-2.0, 6.0), pos(4.0, 0.0)));
        let r = rect.with_right_bottom_as(pos(2.0, 2.0));
        assert_eq!((r.right_bottom(), r.left_top()), (pos(2.0, 2.0), pos(0.0, 0.0)));

        let mut r = rect;
        r.set_right_bottom(pos(2.0, 2.0));
        assert_eq!(r, rect.with_right_bottom_as(pos(2.0, 2.0)));
    }

    #[test]
    fn rect_set_edge_does_not_clamp() {
        let rect = BaseRect::left_top_size(pos(0.0, 0.0), disp(4.0, 4.0));

        let degenerate = rect.with_left_as(bl(4.0));
        assert!(degenerate.is_valid());
        assert!(degenerate.is_zero());

        let mut crossed = rect.with_left_as(bl(6.0));
        assert!(!crossed.is_valid());
        assert_eq!(crossed.width(), bl(-2.0));
        crossed.make_valid();
        assert!(crossed.is_valid());
        assert_eq!(crossed.width(), bl(2.0));
        assert_eq!(crossed.centre(), pos(5.0, 2.0));
    }

    // ==================== Scaling and sizing ====================

    #[test]
    fn rect_scale_about_centre() {
        let rect = BaseRect::centre_size(pos(1.0, 1.0), disp(2.0, 4.0));
        let scaled = rect.with_scaled(2.0);
        assert_eq!(scaled.centre(), rect.centre());
        assert_eq!(scaled.size(), disp(4.0, 8.0));
        assert_eq!(rect * 2.0, scaled);
        assert_eq!(2.0 * rect, scaled);
        assert_eq!(scaled / 2.0, rect);

        let mut r = rect;
        r.scale_this_both(Vec2::new(0.5, 2.0));
        assert_eq!(r, rect.with_scaled_width(0.5).with_scaled_height(2.0));
        assert_eq!(r.size(), disp(1.0, 8.0));
    }

    #[test]
    fn rect_scale_about_origin_keeps_origin_fixed() {
        let rect = BaseRect::left_top_size(pos(2.0, 2.0), disp(2.0, 2.0));

        // Scaling about the left-top corner keeps that corner in place.
        let scaled = rect.with_scaled_about(3.0, rect.left_top());
        assert_eq!(scaled.left_top(), pos(2.0, 2.0));
        assert_eq!(scaled.size(), disp(6.0, 6.0));

        // Scaling about the origin scales the corners' coordinates.
        let scaled = rect.with_scaled_about(0.5, BasePosition::zero());
        assert_eq!(scaled.left_top(), pos(1.0, 1.0));
        assert_eq!(scaled.right_bottom(), pos(2.0, 2.0));

        let scaled = rect.with_scaled_width_about(2.0, bl(4.0));
        assert_eq!((scaled.left(), scaled.right()), (bl(0.0), bl(4.0)));
        assert_eq!((scaled.top(), scaled.bottom()), (bl(2.0), bl(4.0)));

        let scaled = rect.with_scaled_height_about(2.0, bl(2.0));
        assert_eq!((scaled.top(), scaled.bottom()), (bl(2.0), bl(6.0)));

        let both = rect.with_scaled_both_about(Vec2::new(2.0, 2.0), pos(4.0, 2.0));
        assert_eq!(both.left_top(), pos(0.0, 2.0));
        assert_eq!(both.right_bottom(), pos(4.0, 6.0));
    }

    #[test]
    fn rect_sizing_keeps_centre() {
        let rect = BaseRect::centre_size(pos(5.0, 5.0), disp(2.0, 4.0));
        assert_eq!(rect.with_square_size(bl(6.0)).size(), disp(6.0, 6.0));
        assert_eq!(rect.with_width(bl(1.0)).size(), disp(1.0, 4.0));
        assert_eq!(rect.with_height(bl(1.0)).size(), disp(2.0, 1.0));
        assert_eq!(rect.with_size(disp(8.0, 10.0)).size(), disp(8.0, 10.0));
        for resized in [
            rect.with_square_size(bl(6.0)),
            rect.with_width(bl(1.0)),
            rect.with_size(disp(8.0, 10.0)),
        ] {
            assert_eq!(resized.centre(), rect.centre());
        }
    }

    // ==================== Misc ====================

    #[test]
    fn rect_contains_is_strict() {
        let rect = BaseRect::left_top_size(pos(0.0, 0.0), disp(10.0, 10.0));
        assert!(rect.contains(pos(5.0, 5.0)));
        assert!(rect.contains(pos(0.001, 9.999)));
        assert!(!rect.contains(pos(0.0, 5.0)));
        assert!(!rect.contains(pos(10.0, 5.0)));
        assert!(!rect.contains(pos(5.0, 0.0)));
        assert!(!rect.contains(pos(5.0, 10.0)));
        assert!(!rect.contains(pos(10.0, 10.0)));
        assert!(!rect.contains(pos(11.0, 5.0)));
    }

    #[test]
    fn rect_make_valid_zero_extent() {
        let mut rect = BaseRect::left_top_size(pos(0.0, 0.0), disp(-0.0, -3.0));
        assert!(!rect.is_valid());
        rect.make_valid();
        assert!(rect.is_valid());
        assert!(rect.half_extent().x.value().is_sign_positive());
        assert_eq!(rect.height(), bl(3.0));
    }

    #[test]
    fn rect_display() {
        let rect = BaseRect::left_top_size(pos(0.0, 1.0), disp(2.0, 2.0));
        assert_eq!(
            format!("{rect}"),
            "rect(left_top: vec(0, 1), right_bottom: vec(2, 3))"
        );
        assert_eq!(
            format!("{rect:.1}"),
            "rect(left_top: vec(0.0, 1.0), right_bottom: vec(2.0, 3.0))"
        );
    }
}
