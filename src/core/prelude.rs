#[allow(unused_imports)]
pub use itertools::Itertools;
#[allow(unused_imports)]
pub use num_traits;
#[allow(unused_imports)]
pub use num_traits::Zero;

#[allow(unused_imports)]
pub use anyhow::{anyhow, bail, Context, Result};
#[allow(unused_imports)]
pub use tracing::{debug, error, info, warn};

#[allow(unused_imports)]
pub use crate::{
    core::config::*,
    game::{
        camera::Camera,
        entity::{Enemy, Player},
        world::{Outcome, World},
    },
    util::{
        assert::*,
        circle::Circle,
        collision::{has_collision, intersection, Collides},
        dimension::*,
        linalg::*,
        real::{exactly_equal, nearly_equal, nearly_equal_eps, NearlyEqual, Real},
        rect::{AxisAlignedExtent, Rect},
        units::*,
    },
};
