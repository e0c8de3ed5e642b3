//! Scene building: turns session state into a per-frame display list.
//!
//! This is the read-only half of the frame. The simulation advanced in
//! `GameSession::tick()` already; this pass only emits draw commands in the
//! game's fixed order: background, asteroids, spacecraft, pointer arrow,
//! wall boundaries, level text, end-of-game banner.

use engine_core::Vec2;
use renderer::{DrawCommand, Hsb, Scene, TextAlign};

use crate::session::{GamePhase, GameSession};
use crate::spacecraft::Spacecraft;

/// Asteroid body colors, indexed by `Asteroid::palette`.
const ASTEROID_PALETTE: [Hsb; 3] = [
    Hsb::new(35.0, 89.0, 100.0),
    Hsb::new(353.0, 87.0, 91.0),
    Hsb::new(174.0, 77.0, 77.0),
];
/// Spacecraft hull.
const HULL: Hsb = Hsb::new(37.0, 93.0, 99.0);
/// Wall boundary bands and hitbox markers.
const BOUNDARY: Hsb = Hsb::new(221.0, 67.0, 24.0);
/// Pointer arrow.
const ARROW: Hsb = Hsb::new(334.0, 100.0, 100.0);
/// HUD text.
const HUD_TEXT: Hsb = Hsb::new(0.0, 0.0, 100.0);
const LOST_BANNER: Hsb = Hsb::new(359.0, 76.0, 90.0);
const WON_BANNER: Hsb = Hsb::new(174.0, 77.0, 77.0);

const WALL_THICKNESS: f32 = 10.0;

/// Rebuild the scene for the current frame.
pub fn build_scene(session: &GameSession, scene: &mut Scene) {
    scene.clear();
    draw_starfield(session, scene);
    draw_asteroids(session, scene);
    draw_spacecraft(session.spacecraft(), scene);
    draw_pointer(session, scene);
    draw_boundaries(session, scene);
    draw_level(session, scene);
    draw_banner(session, scene);
}

fn draw_starfield(session: &GameSession, scene: &mut Scene) {
    // Translucent wash instead of a hard clear leaves motion trails.
    scene.submit(DrawCommand::Fade {
        color: Hsb::with_alpha(0.0, 0.0, 0.0, 30.0),
    });
    let center = session.view().center();
    for star in session.starfield().stars() {
        let (offset, size) = star.projection(session.view());
        if size <= 0.0 {
            continue;
        }
        scene.submit(DrawCommand::Circle {
            center: center + offset,
            diameter: size,
            color: Hsb::with_alpha(0.0, 0.0, 100.0, star.alpha),
        });
    }
}

fn draw_asteroids(session: &GameSession, scene: &mut Scene) {
    for asteroid in &session.field().asteroids {
        scene.submit(DrawCommand::Circle {
            center: asteroid.position,
            diameter: asteroid.diameter,
            color: ASTEROID_PALETTE[asteroid.palette % ASTEROID_PALETTE.len()],
        });
        for hole in &asteroid.holes {
            let offset = Vec2::new(hole.angle.cos(), hole.angle.sin()) * hole.radius;
            scene.submit(DrawCommand::Circle {
                center: asteroid.position + offset,
                diameter: hole.diameter,
                color: Hsb::with_alpha(100.0, 1.0, 100.0, hole.alpha),
            });
        }
    }
}

fn draw_spacecraft(craft: &Spacecraft, scene: &mut Scene) {
    let place = |local: Vec2| craft.position + Vec2::from_angle(craft.angle).rotate(local);

    // Wing triangle, fuselage, tail fin (local coordinates, y up is -y).
    scene.submit(DrawCommand::Polygon {
        points: vec![
            place(Vec2::new(0.0, -13.0)),
            place(Vec2::new(50.0, 11.0)),
            place(Vec2::new(-50.0, 11.0)),
        ],
        color: HULL,
    });
    scene.submit(DrawCommand::Ellipse {
        center: craft.position,
        size: Vec2::new(15.0, 60.0),
        rotation: craft.angle,
        color: HULL,
    });
    scene.submit(DrawCommand::Polygon {
        points: vec![
            place(Vec2::new(0.0, 23.0)),
            place(Vec2::new(13.0, 32.0)),
            place(Vec2::new(-14.0, 32.0)),
        ],
        color: HULL,
    });

    for point in craft.hitbox.points() {
        scene.submit(DrawCommand::Point {
            pos: point,
            weight: 4.0,
            color: BOUNDARY,
        });
    }
}

fn draw_pointer(session: &GameSession, scene: &mut Scene) {
    let Some(pointer) = session.steering().pointer() else {
        return;
    };
    let place = |local: Vec2| pointer.position + Vec2::from_angle(pointer.angle).rotate(local);

    // Arrowhead plus shaft, anchored at the mirrored fingertip.
    scene.submit(DrawCommand::Polygon {
        points: vec![
            place(Vec2::new(-15.0, 0.0)),
            place(Vec2::new(0.0, -30.0)),
            place(Vec2::new(15.0, 0.0)),
        ],
        color: ARROW,
    });
    scene.submit(DrawCommand::Polygon {
        points: vec![
            place(Vec2::new(-7.0, 0.0)),
            place(Vec2::new(7.0, 0.0)),
            place(Vec2::new(7.0, 70.0)),
            place(Vec2::new(-7.0, 70.0)),
        ],
        color: ARROW,
    });
}

fn draw_boundaries(session: &GameSession, scene: &mut Scene) {
    let view = session.view();
    let bands = [
        (Vec2::ZERO, Vec2::new(WALL_THICKNESS, view.height)),
        (
            Vec2::new(view.width - WALL_THICKNESS, 0.0),
            Vec2::new(WALL_THICKNESS, view.height),
        ),
        (
            Vec2::new(0.0, view.height - WALL_THICKNESS),
            Vec2::new(view.width, WALL_THICKNESS),
        ),
    ];
    for (pos, size) in bands {
        scene.submit(DrawCommand::Rect {
            pos,
            size,
            color: BOUNDARY,
        });
    }
}

fn draw_level(session: &GameSession, scene: &mut Scene) {
    let view = session.view();
    scene.submit(DrawCommand::Text {
        text: format!("LEVEL: {}", session.level()),
        pos: Vec2::new(view.width - 30.0, view.height - 30.0),
        size: 24.0,
        color: HUD_TEXT,
        align: TextAlign::Right,
    });
}

fn draw_banner(session: &GameSession, scene: &mut Scene) {
    let (text, color) = match session.phase() {
        GamePhase::Running => return,
        GamePhase::Lost => ("U LOST", LOST_BANNER),
        GamePhase::Won => ("You Win!!!", WON_BANNER),
    };
    scene.submit(DrawCommand::Text {
        text: text.to_string(),
        pos: session.view().center(),
        size: 48.0,
        color,
        align: TextAlign::Center,
    });
}
