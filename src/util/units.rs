//! Concrete units used by the simulation.
//!
//! The base family measures the world in blocks, kilograms and seconds (ratio 1:1). The pixel
//! family measures the screen, at [`PixelsPerBlock`] pixels to a block. The two never mix without
//! an explicit [`convert`](crate::util::dimension::Dim::convert).

use crate::core::config::PixelsPerBlock;
use crate::util::circle::Circle;
use crate::util::dimension::{
    AccelerationScalar, Area, BaseRatio, Dim, Distance, ForceScalar, Frequency, ImpulseScalar,
    InverseMass, Length, Mass, MomentumScalar, PositionScalar, Ratio, Speed, Time, Unitless,
};
use crate::util::linalg::{
    Acceleration, Displacement, Force, Impulse, Momentum, Position, Velocity,
};
use crate::util::rect::Rect;
use typenum::consts::{U1, U1000};

/// The floating point type of every concrete unit.
pub type Scalar = f32;

pub type PixelRatio = Ratio<U1, PixelsPerBlock>;
pub type MilliRatio = Ratio<U1, U1000>;

pub type BaseUnitless = Unitless<Scalar, BaseRatio>;
pub type BaseLength = Length<Scalar, BaseRatio>;
pub type BasePositionScalar = PositionScalar<Scalar, BaseRatio>;
pub type BaseDistance = Distance<Scalar, BaseRatio>;
pub type BaseMass = Mass<Scalar, BaseRatio>;
pub type BaseInverseMass = InverseMass<Scalar, BaseRatio>;
pub type Second = Time<Scalar, BaseRatio>;
pub type Millisecond = Time<Scalar, MilliRatio>;
pub type Hertz = Frequency<Scalar, BaseRatio>;
pub type BaseArea = Area<Scalar, BaseRatio>;
pub type BaseSpeed = Speed<Scalar, BaseRatio>;
pub type BaseAccelerationScalar = AccelerationScalar<Scalar, BaseRatio>;
pub type BaseMomentumScalar = MomentumScalar<Scalar, BaseRatio>;
pub type BaseImpulseScalar = ImpulseScalar<Scalar, BaseRatio>;
pub type BaseForceScalar = ForceScalar<Scalar, BaseRatio>;

pub type BasePosition = Position<Scalar, BaseRatio>;
pub type BaseDisplacement = Displacement<Scalar, BaseRatio>;
pub type BaseVelocity = Velocity<Scalar, BaseRatio>;
pub type BaseAcceleration = Acceleration<Scalar, BaseRatio>;
pub type BaseMomentum = Momentum<Scalar, BaseRatio>;
pub type BaseImpulse = Impulse<Scalar, BaseRatio>;
pub type BaseForce = Force<Scalar, BaseRatio>;
pub type BaseRect = Rect<Scalar, BaseRatio>;
pub type BaseCircle = Circle<Scalar, BaseRatio>;

pub type PixelLength = Length<Scalar, PixelRatio>;
pub type PixelPositionScalar = PositionScalar<Scalar, PixelRatio>;
pub type PixelDistance = Distance<Scalar, PixelRatio>;
pub type PixelPosition = Position<Scalar, PixelRatio>;
pub type PixelDisplacement = Displacement<Scalar, PixelRatio>;
pub type PixelRect = Rect<Scalar, PixelRatio>;

/// Blocks.
pub const fn bl(value: Scalar) -> BaseLength {
    Dim::new(value)
}
/// Blocks per second.
pub const fn bl_ps(value: Scalar) -> BaseSpeed {
    Dim::new(value)
}
/// Blocks per second squared.
pub const fn bl_ps2(value: Scalar) -> BaseAccelerationScalar {
    Dim::new(value)
}
/// Kilograms.
pub const fn bm(value: Scalar) -> BaseMass {
    Dim::new(value)
}
pub const fn secs(value: Scalar) -> Second {
    Dim::new(value)
}
pub const fn millis(value: Scalar) -> Millisecond {
    Dim::new(value)
}
pub const fn hz(value: Scalar) -> Hertz {
    Dim::new(value)
}
/// Pixels.
pub const fn pl(value: Scalar) -> PixelLength {
    Dim::new(value)
}
pub const fn unitless(value: Scalar) -> BaseUnitless {
    Dim::new(value)
}
