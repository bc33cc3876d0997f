use dodge::core::prelude::*;
use dodge::util::log::{setup_log, LogTarget};

/// How far ahead of the player its steering target sits.
const LOOKAHEAD: BaseDistance = bl(5.0);

fn main() -> Result<()> {
    setup_log(LogTarget::Stderr)?;
    let config = match std::env::args().nth(1) {
        Some(path) => SimConfig::load(path)?,
        None => SimConfig::default(),
    };
    let mut world = World::new(config)?;
    info!(
        "running for up to {} ticks in arena {}",
        world.config().max_ticks,
        world.arena()
    );

    let dt = ideal_tick_duration();
    let mut outcome = Outcome::Running;
    while world.ticks() < world.config().max_ticks && !outcome.is_game_over() {
        steer_player(&mut world);
        outcome = world.tick(dt);
    }

    match outcome {
        Outcome::GameOver { survived } => info!(
            "caught after {:?} with {} enemies",
            survived.to_duration(),
            world.enemies().len()
        ),
        Outcome::Running => info!(
            "survived all {} ticks ({:?}) with {} enemies",
            world.ticks(),
            world.elapsed().to_duration(),
            world.enemies().len()
        ),
    }
    Ok(())
}

/// Runs from the nearest enemy, drifting back toward the middle of the arena so the player does
/// not get pinned against a wall.
fn steer_player(world: &mut World) {
    let centre = world.player().centre();
    let to_middle = world.arena().centre() - centre;
    match world.nearest_enemy().map(Enemy::centre) {
        Some(threat) if threat != centre => {
            let away = (centre - threat).unit() * LOOKAHEAD;
            world.player_mut().set_target(centre + away + to_middle * 0.25);
        }
        _ => world.player_mut().clear_target(),
    }
}
