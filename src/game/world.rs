use crate::core::prelude::*;
use crate::game::entity::resolve_collision;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cmp::Ordering;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Outcome {
    Running,
    /// An enemy touched the player. `survived` is the simulated time up to and including the
    /// tick where it happened.
    GameOver { survived: Second },
}

impl Outcome {
    pub fn is_game_over(&self) -> bool {
        matches!(self, Outcome::GameOver { .. })
    }
}

/// The playing state: a player dodging enemies that spawn over time and bounce around the
/// arena. The arena is whatever the camera initially shows.
///
/// ```
/// use dodge::core::prelude::*;
///
/// let mut world = World::new(SimConfig::default().with_seed(1)).unwrap();
/// assert_eq!(world.tick(ideal_tick_duration()), Outcome::Running);
/// assert!(world.enemies().is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct World {
    config: SimConfig,
    camera: Camera,
    arena: BaseRect,
    player: Player,
    enemies: Vec<Enemy>,
    rng: StdRng,
    elapsed: Second,
    spawn_timer: Second,
    ticks: u64,
    outcome: Outcome,
}

impl World {
    pub fn new(mut config: SimConfig) -> Result<Self> {
        config.validate()?;
        if config.max_enemies > MAX_ENEMIES {
            warn!(
                "max_enemies = {} is above the limit, using {MAX_ENEMIES}",
                config.max_enemies
            );
            config.max_enemies = MAX_ENEMIES;
        }
        let camera = Camera::new(config.window_size);
        let arena = camera.view_bound();
        let player = Player::new(
            BaseCircle::new(arena.centre(), config.player_radius),
            config.player_speed,
        );
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Ok(Self {
            config,
            camera,
            arena,
            player,
            enemies: Vec::new(),
            rng,
            elapsed: Second::zero(),
            spawn_timer: Second::zero(),
            ticks: 0,
            outcome: Outcome::Running,
        })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }
    pub fn camera(&self) -> &Camera {
        &self.camera
    }
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }
    pub fn arena(&self) -> BaseRect {
        self.arena
    }
    pub fn player(&self) -> &Player {
        &self.player
    }
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }
    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }
    pub fn elapsed(&self) -> Second {
        self.elapsed
    }
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Enemies at least partly inside the camera's view.
    pub fn visible_enemies(&self) -> impl Iterator<Item = &Enemy> {
        self.enemies
            .iter()
            .filter(|enemy| self.camera.is_visible(enemy.aabb()))
    }

    /// The enemy whose centre is closest to the player's.
    pub fn nearest_enemy(&self) -> Option<&Enemy> {
        let centre = self.player.centre();
        self.enemies.iter().min_by(|a, b| {
            (a.centre() - centre)
                .square_mag()
                .partial_cmp(&(b.centre() - centre).square_mag())
                .unwrap_or(Ordering::Equal)
        })
    }

    /// Adds `enemy` unless the world is full or it would spawn on top of the player. Returns
    /// true if it was added.
    pub fn spawn_enemy(&mut self, enemy: Enemy) -> bool {
        if self.enemies.len() >= self.config.max_enemies {
            debug!("rejected spawn: already {} enemies", self.enemies.len());
            return false;
        }
        if has_collision(&enemy.circle(), &self.player.circle()) {
            debug!("rejected spawn on top of player: {}", enemy.circle());
            return false;
        }
        info!("spawned enemy: {}, velocity {}", enemy.circle(), enemy.velocity());
        self.enemies.push(enemy);
        true
    }

    /// Advances the simulation by `dt`. Does nothing once the game is over.
    pub fn tick(&mut self, dt: Second) -> Outcome {
        crate::debug_check!(dt >= Second::zero(), "negative tick duration: {}", dt);
        if self.outcome.is_game_over() {
            return self.outcome;
        }
        self.ticks += 1;
        self.elapsed += dt;

        self.player.update(dt, self.arena);
        for enemy in &mut self.enemies {
            enemy.update(dt);
            enemy.bounce_inside(self.arena);
        }
        for (i, j) in (0..self.enemies.len()).tuple_combinations() {
            let (head, tail) = self.enemies.split_at_mut(j);
            resolve_collision(&mut head[i], &mut tail[0]);
        }

        self.spawn_timer += dt;
        if self.spawn_timer >= self.config.spawn_interval {
            let timer = self.spawn_timer.value();
            let interval = self.config.spawn_interval.value();
            // Float-to-int casts saturate, so a huge backlog is capped by the free room.
            let room = self.config.max_enemies.saturating_sub(self.enemies.len());
            let due = ((timer / interval).floor() as usize).min(room);
            self.spawn_timer = secs(timer % interval);
            for _ in 0..due {
                if let Some(enemy) = self.random_enemy() {
                    self.spawn_enemy(enemy);
                }
            }
        }

        let player = self.player.circle();
        if self
            .enemies
            .iter()
            .any(|enemy| has_collision(&enemy.circle(), &player))
        {
            info!(
                "game over after {} ticks, survived {}s",
                self.ticks, self.elapsed
            );
            self.outcome = Outcome::GameOver {
                survived: self.elapsed,
            };
        }
        self.outcome
    }

    /// An enemy with random size, speed and direction somewhere inside the arena, or `None` if
    /// the arena is too small to hold it.
    fn random_enemy(&mut self) -> Option<Enemy> {
        let (min_radius, max_radius) = self.config.enemy_radius_range;
        let radius = bl(self.rng.gen_range(min_radius.value()..=max_radius.value()));
        let inner = self
            .arena
            .with_size(self.arena.size() - BaseDisplacement::new(radius, radius) * 2.0);
        if inner.width() < bl(0.0) || inner.height() < bl(0.0) {
            debug!("rejected spawn: radius {radius} does not fit in {}", self.arena);
            return None;
        }
        let centre = BasePosition::new(
            bl(self.rng.gen_range(inner.left().value()..=inner.right().value())),
            bl(self.rng.gen_range(inner.top().value()..=inner.bottom().value())),
        );

        let (min_speed, max_speed) = self.config.enemy_speed_range;
        let speed = bl_ps(self.rng.gen_range(min_speed.value()..=max_speed.value()));
        let angle: Scalar = self.rng.gen_range(0.0..std::f32::consts::TAU);
        let vel = BaseVelocity::new(speed * angle.cos(), speed * angle.sin());
        Some(Enemy::new(
            BaseCircle::new(centre, radius),
            vel,
            self.config.enemy_mass,
        ))
    }
}
