use crate::core::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Pixels per block, as a type so it can be part of the pixel unit.
pub type PixelsPerBlock = typenum::consts::U32;

pub const IDEAL_TICK_RATE: Hertz = hz(64.0);
pub const MAX_ENEMIES: usize = 256;
pub const EPSILON: Scalar = 1e-5;

pub fn ideal_tick_duration() -> Second {
    1.0 / IDEAL_TICK_RATE
}

/// Run-time settings of the simulation. Missing fields take their default value, so an empty
/// JSON object is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Size of the window the camera maps onto. The arena is the same region in world units.
    pub window_size: PixelDisplacement,
    pub player_radius: BaseDistance,
    pub player_speed: BaseSpeed,
    pub enemy_radius_range: (BaseDistance, BaseDistance),
    pub enemy_speed_range: (BaseSpeed, BaseSpeed),
    pub enemy_mass: BaseMass,
    /// Time between enemy spawns.
    pub spawn_interval: Second,
    pub max_enemies: usize,
    /// Upper bound on the length of a run, in ticks of [`ideal_tick_duration`].
    pub max_ticks: u64,
    /// RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            window_size: PixelDisplacement::new(pl(800.0), pl(600.0)),
            player_radius: bl(1.0),
            player_speed: bl_ps(10.0),
            enemy_radius_range: (bl(0.5), bl(2.0)),
            enemy_speed_range: (bl_ps(2.0), bl_ps(6.0)),
            enemy_mass: bm(1.0),
            spawn_interval: secs(2.0),
            max_enemies: 32,
            max_ticks: 64 * 120,
            seed: None,
        }
    }
}

impl SimConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).context("parsing simulation config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading simulation config: {}", path.display()))?;
        let config = Self::from_json_str(&json)
            .with_context(|| format!("loading simulation config: {}", path.display()))?;
        info!("loaded simulation config: {}", path.display());
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Rejects settings the simulation cannot run with.
    pub fn validate(&self) -> Result<()> {
        let quantities = [
            ("window_size.x", self.window_size.x.value()),
            ("window_size.y", self.window_size.y.value()),
            ("player_radius", self.player_radius.value()),
            ("player_speed", self.player_speed.value()),
            ("enemy_radius_range.0", self.enemy_radius_range.0.value()),
            ("enemy_radius_range.1", self.enemy_radius_range.1.value()),
            ("enemy_speed_range.0", self.enemy_speed_range.0.value()),
            ("enemy_speed_range.1", self.enemy_speed_range.1.value()),
            ("enemy_mass", self.enemy_mass.value()),
            ("spawn_interval", self.spawn_interval.value()),
        ];
        for (name, value) in quantities {
            if !value.is_finite() {
                bail!("{name} must be finite: {value}");
            }
        }
        if self.player_radius <= bl(0.0) {
            bail!("player_radius must be positive: {}", self.player_radius);
        }
        if self.player_speed <= bl_ps(0.0) {
            bail!("player_speed must be positive: {}", self.player_speed);
        }
        let (min_radius, max_radius) = self.enemy_radius_range;
        if min_radius <= bl(0.0) || min_radius > max_radius {
            bail!("invalid enemy_radius_range: [{min_radius}, {max_radius}]");
        }
        let (min_speed, max_speed) = self.enemy_speed_range;
        if min_speed <= bl_ps(0.0) || min_speed > max_speed {
            bail!("invalid enemy_speed_range: [{min_speed}, {max_speed}]");
        }
        if self.enemy_mass <= bm(0.0) {
            bail!("enemy_mass must be positive: {}", self.enemy_mass);
        }
        if self.spawn_interval <= secs(0.0) {
            bail!("spawn_interval must be positive: {}", self.spawn_interval);
        }
        let arena: BaseDisplacement = self.window_size.convert();
        let player_size = self.player_radius * 2.0;
        if arena.x <= player_size || arena.y <= player_size {
            bail!(
                "window_size {} is too small for a player of radius {}",
                self.window_size,
                self.player_radius
            );
        }
        Ok(())
    }

    #[must_use]
    pub fn with_window_size(mut self, window_size: PixelDisplacement) -> Self {
        self.window_size = window_size;
        self
    }
    #[must_use]
    pub fn with_player_radius(mut self, radius: BaseDistance) -> Self {
        self.player_radius = radius;
        self
    }
    #[must_use]
    pub fn with_player_speed(mut self, speed: BaseSpeed) -> Self {
        self.player_speed = speed;
        self
    }
    #[must_use]
    pub fn with_enemy_radius_range(mut self, min: BaseDistance, max: BaseDistance) -> Self {
        self.enemy_radius_range = (min, max);
        self
    }
    #[must_use]
    pub fn with_enemy_speed_range(mut self, min: BaseSpeed, max: BaseSpeed) -> Self {
        self.enemy_speed_range = (min, max);
        self
    }
    #[must_use]
    pub fn with_enemy_mass(mut self, mass: BaseMass) -> Self {
        self.enemy_mass = mass;
        self
    }
    #[must_use]
    pub fn with_spawn_interval(mut self, interval: Second) -> Self {
        self.spawn_interval = interval;
        self
    }
    #[must_use]
    pub fn with_max_enemies(mut self, max_enemies: usize) -> Self {
        self.max_enemies = max_enemies;
        self
    }
    #[must_use]
    pub fn with_max_ticks(mut self, max_ticks: u64) -> Self {
        self.max_ticks = max_ticks;
        self
    }
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
