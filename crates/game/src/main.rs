//! Headless driver: runs the game loop without a window, feeding the
//! session a synthetic hand that sways gently left and right. Useful for
//! profiling and for watching the simulation behave end to end from logs.

mod config;
mod render;
mod session;
mod spacecraft;

use anyhow::Result;
use engine_core::FrameClock;
use glam::Vec2;
use input::{HandFrame, INDEX_BASE, INDEX_TIP, MIN_LANDMARKS};
use renderer::Scene;

use crate::config::GameConfig;
use crate::session::{GamePhase, GameSession};

/// Safety cap on the headless run.
const FRAME_CAP: u64 = 5000;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if !GameConfig::exists() {
        GameConfig::default().save();
    }
    let config = GameConfig::load();

    let mut session = GameSession::new(&config);
    let mut scene = Scene::new();
    let mut clock = FrameClock::new();
    let mut last_level = session.level();

    while session.phase() == GamePhase::Running && clock.frame_count() < FRAME_CAP {
        clock.update();

        // Sway the finger around straight up so the craft weaves through
        // the field instead of flying a fixed column.
        let steer = (clock.frame_count() as f32 * 0.05).sin() * 0.5;
        session.publish_hands(vec![synthetic_hand(&config, steer)?]);

        session.tick();
        render::build_scene(&session, &mut scene);

        if session.level() != last_level {
            last_level = session.level();
            log::info!("reached level {}", last_level);
        }
    }

    log::info!(
        "run finished: phase={:?} loss={:?} frames={} draw_commands={} elapsed={:.2}s",
        session.phase(),
        session.loss_cause(),
        clock.frame_count(),
        scene.len(),
        clock.elapsed_seconds(),
    );
    Ok(())
}

/// Build a camera-space hand whose index finger points `steer` radians off
/// vertical, as seen on the mirrored canvas.
fn synthetic_hand(config: &GameConfig, steer: f32) -> Result<HandFrame> {
    let camera = config.camera();
    let base = Vec2::new(camera.width * 0.5, camera.height * 0.6);
    // Camera x runs opposite to canvas x, so the tip swings to -sin.
    let tip = base + 100.0 * Vec2::new(-steer.sin(), -steer.cos());

    let mut landmarks = vec![Vec2::ZERO; MIN_LANDMARKS];
    landmarks[INDEX_BASE] = base;
    landmarks[INDEX_TIP] = tip;
    Ok(HandFrame::try_new(landmarks)?)
}
