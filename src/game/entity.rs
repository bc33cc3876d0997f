use crate::core::prelude::*;

/// The circle the player steers around the arena. It chases a target point at up to its top
/// speed, and never leaves the arena.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Player {
    circle: BaseCircle,
    speed: BaseSpeed,
    target: Option<BasePosition>,
}

impl Default for Player {
    fn default() -> Self {
        Self::new(BaseCircle::new(BasePosition::new(bl(20.0), bl(20.0)), bl(1.0)), bl_ps(10.0))
    }
}

impl Player {
    pub fn new(circle: BaseCircle, speed: BaseSpeed) -> Self {
        crate::debug_check!(circle.is_valid(), "invalid player circle: {}", circle);
        Self {
            circle,
            speed,
            target: None,
        }
    }

    pub fn circle(&self) -> BaseCircle {
        self.circle
    }
    pub fn centre(&self) -> BasePosition {
        self.circle.centre
    }
    pub fn speed(&self) -> BaseSpeed {
        self.speed
    }
    pub fn target(&self) -> Option<BasePosition> {
        self.target
    }

    pub fn set_target(&mut self, target: BasePosition) {
        self.target = Some(target);
    }
    pub fn clear_target(&mut self) {
        self.target = None;
    }

    pub fn update(&mut self, dt: Second, arena: BaseRect) {
        if let Some(target) = self.target {
            let to_target = target - self.circle.centre;
            let max_step: BaseDistance = self.speed * dt;
            if to_target.square_mag() <= max_step * max_step {
                self.circle.centre = target;
            } else {
                self.circle.move_this_by(to_target.unit() * max_step);
            }
        }
        self.clamp_inside(arena);
    }

    /// Pushes the circle back inside `arena`. If the arena is narrower than the circle along an
    /// axis, the circle is centred on that axis.
    fn clamp_inside(&mut self, arena: BaseRect) {
        let radius = self.circle.radius;
        let clamp = |pos: BasePositionScalar,
                     lo: BasePositionScalar,
                     hi: BasePositionScalar,
                     mid: BasePositionScalar| {
            if lo + radius > hi - radius {
                mid
            } else {
                pos.max(lo + radius).min(hi - radius)
            }
        };
        self.circle.centre = BasePosition::new(
            clamp(self.circle.x(), arena.left(), arena.right(), arena.mid_x()),
            clamp(self.circle.y(), arena.top(), arena.bottom(), arena.mid_y()),
        );
    }
}

/// A circle that drifts at constant velocity, bouncing off the arena edges and off other
/// enemies.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Enemy {
    circle: BaseCircle,
    vel: BaseVelocity,
    mass: BaseMass,
}

impl Default for Enemy {
    fn default() -> Self {
        Self::new(
            BaseCircle::new(BasePosition::new(bl(10.0), bl(10.0)), bl(2.0)),
            BaseVelocity::new(bl_ps(1.0), bl_ps(-1.0)),
            bm(1.0),
        )
    }
}

impl Enemy {
    pub fn new(circle: BaseCircle, vel: BaseVelocity, mass: BaseMass) -> Self {
        crate::debug_check!(circle.is_valid(), "invalid enemy circle: {}", circle);
        crate::debug_check!(mass > bm(0.0), "enemy mass must be positive: {}", mass);
        Self { circle, vel, mass }
    }

    pub fn circle(&self) -> BaseCircle {
        self.circle
    }
    pub fn centre(&self) -> BasePosition {
        self.circle.centre
    }
    pub fn velocity(&self) -> BaseVelocity {
        self.vel
    }
    pub fn mass(&self) -> BaseMass {
        self.mass
    }
    pub fn momentum(&self) -> BaseMomentum {
        self.vel * self.mass
    }

    pub fn set_velocity(&mut self, vel: BaseVelocity) {
        self.vel = vel;
    }
    pub fn apply_impulse(&mut self, impulse: BaseImpulse) {
        self.vel += impulse / self.mass;
    }

    pub fn update(&mut self, dt: Second) {
        self.circle.move_this_by(self.vel * dt);
    }

    /// Reflects the velocity off any arena edge the circle has crossed while still heading
    /// outwards. Returns true if it bounced.
    pub fn bounce_inside(&mut self, arena: BaseRect) -> bool {
        let mut bounced = false;
        if (self.circle.left() < arena.left() && self.vel.x < bl_ps(0.0))
            || (self.circle.right() > arena.right() && self.vel.x > bl_ps(0.0))
        {
            self.vel.x = -self.vel.x;
            bounced = true;
        }
        if (self.circle.top() < arena.top() && self.vel.y < bl_ps(0.0))
            || (self.circle.bottom() > arena.bottom() && self.vel.y > bl_ps(0.0))
        {
            self.vel.y = -self.vel.y;
            bounced = true;
        }
        bounced
    }
}

impl AxisAlignedExtent<Scalar, BaseRatio> for Player {
    fn aabb(&self) -> BaseRect {
        self.circle.aabb()
    }
}
impl AxisAlignedExtent<Scalar, BaseRatio> for Enemy {
    fn aabb(&self) -> BaseRect {
        self.circle.aabb()
    }
}

/// Resolves an elastic collision between two enemies, exchanging momentum along the line
/// between their centres. Pairs that are already separating, or that do not overlap, are left
/// alone. Returns true if velocities changed.
pub fn resolve_collision(a: &mut Enemy, b: &mut Enemy) -> bool {
    if !has_collision(&a.circle, &b.circle) {
        return false;
    }
    let offset = b.centre() - a.centre();
    if offset.is_zero() {
        return false;
    }
    let normal = offset.unit();
    let approach_speed: BaseSpeed = dot(a.vel - b.vel, normal);
    if approach_speed <= bl_ps(0.0) {
        return false;
    }
    let impulse: BaseImpulseScalar = approach_speed * 2.0 / (a.mass.recip() + b.mass.recip());
    b.apply_impulse(normal * impulse);
    a.apply_impulse(-(normal * impulse));
    true
}
