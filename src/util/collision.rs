//! Collision predicates between shapes.
//!
//! All predicates are strict: shapes whose boundaries merely touch do not collide, matching
//! [`Rect::contains`]. Shapes must be valid (see [`Rect::is_valid`] and [`Circle::is_valid`]);
//! this is checked in debug builds only.

use crate::util::circle::Circle;
use crate::util::dimension::ScaleMul;
use crate::util::linalg::Position;
use crate::util::real::Real;
use crate::util::rect::Rect;

/// A shape that can be tested for overlap with shapes of type `Rhs`.
pub trait Collides<Rhs = Self> {
    fn collides_with(&self, other: &Rhs) -> bool;
}

/// True if the interiors of `lhs` and `rhs` overlap.
pub fn has_collision<A: Collides<B>, B>(lhs: &A, rhs: &B) -> bool {
    lhs.collides_with(rhs)
}

impl<T: Real, R> Collides for Rect<T, R> {
    fn collides_with(&self, other: &Rect<T, R>) -> bool {
        crate::debug_check!(
            self.is_valid() && other.is_valid(),
            "collision needs both rects to be valid: {}, {}",
            self,
            other
        );
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

impl<T: Real, R: ScaleMul<R>> Collides for Circle<T, R> {
    fn collides_with(&self, other: &Circle<T, R>) -> bool {
        crate::debug_check!(
            self.is_valid() && other.is_valid(),
            "collision needs both circles to be valid: {}, {}",
            self,
            other
        );
        let radii = self.radius + other.radius;
        (other.centre - self.centre).square_mag() < radii * radii
    }
}

impl<T: Real, R: ScaleMul<R>> Collides<Rect<T, R>> for Circle<T, R> {
    fn collides_with(&self, other: &Rect<T, R>) -> bool {
        crate::debug_check!(
            self.is_valid() && other.is_valid(),
            "collision needs a valid circle and rect: {}, {}",
            self,
            other
        );
        let closest = Position::new(
            self.x().max(other.left()).min(other.right()),
            self.y().max(other.top()).min(other.bottom()),
        );
        (closest - self.centre).square_mag() < self.radius * self.radius
    }
}

impl<T: Real, R: ScaleMul<R>> Collides<Circle<T, R>> for Rect<T, R> {
    fn collides_with(&self, other: &Circle<T, R>) -> bool {
        other.collides_with(self)
    }
}

/// The overlap of two valid rects, or [`Rect::zero`] if they do not overlap at all.
///
/// Rects that touch along an edge give a zero-area rect on that edge.
pub fn intersection<T: Real, R>(lhs: &Rect<T, R>, rhs: &Rect<T, R>) -> Rect<T, R> {
    crate::debug_check!(
        lhs.is_valid() && rhs.is_valid(),
        "intersection needs both rects to be valid: {}, {}",
        lhs,
        rhs
    );
    let left = lhs.left().max(rhs.left());
    let right = lhs.right().min(rhs.right());
    if left > right {
        return Rect::zero();
    }
    let top = lhs.top().max(rhs.top());
    let bottom = lhs.bottom().min(rhs.bottom());
    if top > bottom {
        return Rect::zero();
    }
    Rect::corner_corner(Position::new(left, top), Position::new(right, bottom))
}
