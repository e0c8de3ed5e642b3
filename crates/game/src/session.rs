//! Game session: the per-frame loop and level controller.
//!
//! The session owns every piece of mutable game state (level counters,
//! spacecraft, asteroid field, starfield, steering) so nothing lives in
//! ambient globals. One `tick()` is one logical frame and runs to completion;
//! after a terminal phase ticks become no-ops (the frontend may keep drawing
//! the final scene) until `restart()`.

use engine_core::Viewport;
use input::{HandFrame, LandmarkSlot, SteeringMapper};
use procgen::{AsteroidField, FieldRegion, Starfield};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::config::GameConfig;
use crate::spacecraft::{FlightEvent, Spacecraft};

/// Session phase. `Won` and `Lost` are terminal until restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Running,
    Won,
    Lost,
}

/// Why the run ended in a loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LossCause {
    AsteroidCollision,
    WallStrike,
}

/// One playthrough: owns the entities, the level state, and the input seam.
pub struct GameSession {
    view: Viewport,
    phase: GamePhase,
    level: u32,
    asteroid_count: usize,
    loss_cause: Option<LossCause>,

    pub(crate) spacecraft: Spacecraft,
    pub(crate) field: AsteroidField,
    starfield: Starfield,
    steering: SteeringMapper,
    slot: LandmarkSlot,

    base_asteroids: usize,
    asteroids_per_level: usize,
    final_level: u32,
    rng: StdRng,
}

impl GameSession {
    pub fn new(config: &GameConfig) -> Self {
        let view = config.canvas();
        let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
        let mut rng = StdRng::seed_from_u64(seed);

        let spacecraft = Spacecraft::new(Spacecraft::launch_position(&view), config.max_speed);
        let field = AsteroidField::generate(
            config.base_asteroids,
            FieldRegion::from_viewport(&view),
            &mut rng,
        );
        let starfield = Starfield::new(config.star_count, &view, &mut rng);
        let steering = SteeringMapper::new(config.camera(), view);

        log::info!(
            "session start: seed={} asteroids={} final_level={}",
            seed,
            config.base_asteroids,
            config.final_level
        );

        Self {
            view,
            phase: GamePhase::Running,
            level: 1,
            asteroid_count: config.base_asteroids,
            loss_cause: None,
            spacecraft,
            field,
            starfield,
            steering,
            slot: LandmarkSlot::new(),
            base_asteroids: config.base_asteroids,
            asteroids_per_level: config.asteroids_per_level,
            final_level: config.final_level,
            rng,
        }
    }

    /// Entry point for the hand-pose producer: overwrite the landmark slot
    /// with the latest detection event (possibly zero hands).
    pub fn publish_hands(&mut self, hands: Vec<HandFrame>) {
        self.slot.publish(hands);
    }

    /// Run one simulation frame. No-op once the session is won or lost.
    ///
    /// Order is load-bearing: asteroids are tested against the hitbox from
    /// the previous advance (the original game's check order, kept for
    /// behavioral fidelity), and walls are tested before the top boundary.
    pub fn tick(&mut self) {
        if self.phase != GamePhase::Running {
            return;
        }

        self.steering.observe(self.slot.primary());
        self.spacecraft.angle = self.steering.angle();
        if self.steering.pointer().is_some() {
            self.spacecraft.auto_move = true;
        }

        self.starfield.advance(&self.view, &mut self.rng);

        if self.field.collides(&self.spacecraft.hitbox.points()) {
            self.lose(LossCause::AsteroidCollision);
            return;
        }

        match self.spacecraft.advance(&self.view) {
            FlightEvent::WallStrike => self.lose(LossCause::WallStrike),
            FlightEvent::CrossedTop => {
                if self.level >= self.final_level {
                    self.phase = GamePhase::Won;
                    log::info!("won at level {}", self.level);
                } else {
                    self.level_up();
                }
            }
            FlightEvent::Cruising => {}
        }
    }

    /// Full reset path (the restart button): level 1, base asteroid count,
    /// fresh spacecraft and field. Works from any phase.
    pub fn restart(&mut self) {
        self.phase = GamePhase::Running;
        self.level = 1;
        self.asteroid_count = self.base_asteroids;
        self.loss_cause = None;
        self.spacecraft =
            Spacecraft::new(Spacecraft::launch_position(&self.view), self.spacecraft.max_speed);
        self.field = AsteroidField::generate(
            self.asteroid_count,
            FieldRegion::from_viewport(&self.view),
            &mut self.rng,
        );
        log::info!("session restarted");
    }

    fn level_up(&mut self) {
        self.level += 1;
        self.asteroid_count += self.asteroids_per_level;
        self.field = AsteroidField::generate(
            self.asteroid_count,
            FieldRegion::from_viewport(&self.view),
            &mut self.rng,
        );
        self.spacecraft.reset();
        log::info!(
            "level up: level={} asteroids={}",
            self.level,
            self.asteroid_count
        );
    }

    fn lose(&mut self, cause: LossCause) {
        self.phase = GamePhase::Lost;
        self.loss_cause = Some(cause);
        log::info!("lost: {:?}", cause);
    }

    // Read-only views for scene building and the driver.

    pub fn view(&self) -> &Viewport {
        &self.view
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn asteroid_count(&self) -> usize {
        self.asteroid_count
    }

    pub fn loss_cause(&self) -> Option<LossCause> {
        self.loss_cause
    }

    pub fn spacecraft(&self) -> &Spacecraft {
        &self.spacecraft
    }

    pub fn field(&self) -> &AsteroidField {
        &self.field
    }

    pub fn starfield(&self) -> &Starfield {
        &self.starfield
    }

    pub fn steering(&self) -> &SteeringMapper {
        &self.steering
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use input::{INDEX_BASE, INDEX_TIP, MIN_LANDMARKS};
    use procgen::Asteroid;

    fn config() -> GameConfig {
        GameConfig {
            seed: Some(1234),
            star_count: 10,
            ..GameConfig::default()
        }
    }

    /// A hand pointing straight up in camera space.
    fn hand_pointing_up() -> HandFrame {
        let mut landmarks = vec![Vec2::ZERO; MIN_LANDMARKS];
        landmarks[INDEX_BASE] = Vec2::new(320.0, 300.0);
        landmarks[INDEX_TIP] = Vec2::new(320.0, 200.0);
        HandFrame::try_new(landmarks).unwrap()
    }

    fn tick_until<F: Fn(&GameSession) -> bool>(s: &mut GameSession, done: F, cap: usize) {
        for _ in 0..cap {
            if done(s) {
                return;
            }
            s.tick();
        }
        panic!("condition not reached within {} ticks", cap);
    }

    #[test]
    fn clear_ascent_progresses_six_eight_ten_then_won() {
        let mut s = GameSession::new(&config());
        s.publish_hands(vec![hand_pointing_up()]);
        assert_eq!(s.asteroid_count(), 6);

        // Clear the course so only the top boundary matters; the field is
        // regenerated on every level-up, so clear again per level.
        s.field.asteroids.clear();
        tick_until(&mut s, |s| s.level() == 2, 200);
        assert_eq!(s.asteroid_count(), 8);
        assert_eq!(s.field().len(), 8);
        assert_eq!(s.phase(), GamePhase::Running);

        s.field.asteroids.clear();
        tick_until(&mut s, |s| s.level() == 3, 200);
        assert_eq!(s.asteroid_count(), 10);

        s.field.asteroids.clear();
        tick_until(&mut s, |s| s.phase() == GamePhase::Won, 200);
        // No regeneration after the win.
        assert_eq!(s.level(), 3);
        assert_eq!(s.asteroid_count(), 10);
    }

    #[test]
    fn no_hand_means_no_motion_and_no_transition() {
        let mut s = GameSession::new(&config());
        s.field.asteroids.clear();
        let start = s.spacecraft().position;
        for _ in 0..50 {
            s.tick();
        }
        assert_eq!(s.spacecraft().position, start);
        assert_eq!(s.phase(), GamePhase::Running);
        assert_eq!(s.level(), 1);
    }

    #[test]
    fn asteroid_on_current_hitbox_loses_before_any_movement() {
        let mut s = GameSession::new(&config());
        // Obstacle placed exactly on the nose of the *current* (pre-advance)
        // hitbox; no hand is published, so the craft never moves.
        let nose = s.spacecraft().hitbox.nose;
        s.field.asteroids.clear();
        s.field.asteroids.push(Asteroid {
            position: nose,
            diameter: 80.0,
            palette: 0,
            holes: Vec::new(),
        });
        s.tick();
        assert_eq!(s.phase(), GamePhase::Lost);
        assert_eq!(s.loss_cause(), Some(LossCause::AsteroidCollision));
    }

    #[test]
    fn wall_strike_loses() {
        let mut s = GameSession::new(&config());
        s.field.asteroids.clear();
        s.publish_hands(vec![hand_pointing_up()]);
        s.spacecraft.position = Vec2::new(45.0, 790.0);
        // One step up leaves the left wing at x = -5, past the left wall.
        s.tick();
        assert_eq!(s.phase(), GamePhase::Lost);
        assert_eq!(s.loss_cause(), Some(LossCause::WallStrike));
    }

    #[test]
    fn terminal_phase_freezes_the_simulation() {
        let mut s = GameSession::new(&config());
        s.field.asteroids.clear();
        s.publish_hands(vec![hand_pointing_up()]);
        s.spacecraft.position = Vec2::new(45.0, 790.0);
        s.tick();
        assert_eq!(s.phase(), GamePhase::Lost);

        let frozen_pos = s.spacecraft().position;
        let frozen_level = s.level();
        for _ in 0..10 {
            s.tick();
        }
        assert_eq!(s.spacecraft().position, frozen_pos);
        assert_eq!(s.level(), frozen_level);
        assert_eq!(s.phase(), GamePhase::Lost);
    }

    #[test]
    fn restart_resets_everything() {
        let mut s = GameSession::new(&config());
        s.field.asteroids.clear();
        s.publish_hands(vec![hand_pointing_up()]);
        s.spacecraft.position = Vec2::new(45.0, 790.0);
        s.tick();
        assert_eq!(s.phase(), GamePhase::Lost);

        s.restart();
        assert_eq!(s.phase(), GamePhase::Running);
        assert_eq!(s.level(), 1);
        assert_eq!(s.asteroid_count(), 6);
        assert_eq!(s.field().len(), 6);
        let start = Spacecraft::launch_position(s.view());
        assert_eq!(s.spacecraft().position, start);
        // Forward motion waits for the hand to be seen again.
        assert!(!s.spacecraft().auto_move);
    }
}
