//! Integration tests for what a running engine draws and simulates.

use driftfield::core::PointerState;
use driftfield::rendering::{DrawCommand, RecordingCanvas, LINK_LINE_WIDTH, SHAPE_LINE_WIDTH};
use driftfield::{AnimationLoop, EngineConfig, HeadlessHost};

const SIZE_EPSILON: f32 = 1e-4;

fn assert_pulse_bounds(engine: &AnimationLoop) {
    for p in engine.particles() {
        let low = p.base_size * 0.82 - SIZE_EPSILON;
        let high = p.base_size * 1.18 + SIZE_EPSILON;
        assert!(p.size >= low && p.size <= high, "tick {}: size {} base {}", engine.tick(), p.size, p.base_size);
        assert!(p.x >= -20.0 && p.x <= 820.0, "tick {}: x {}", engine.tick(), p.x);
        assert!(p.y >= -30.0, "tick {}: y {}", engine.tick(), p.y);
    }
}

#[test]
fn test_five_hundred_particles_thousand_frames() {
    let host = HeadlessHost::new(800.0, 600.0);
    let config = EngineConfig {
        seed: Some(1),
        ..EngineConfig::default()
    };
    let mut engine = AnimationLoop::new(&config, host.handles());
    engine.mount();

    for _ in 0..1000 {
        assert_eq!(host.pump(&mut engine, 1), 1);
        assert_pulse_bounds(&engine);
        for p in engine.particles() {
            assert!(p.y <= 620.0, "tick {}: y {}", engine.tick(), p.y);
        }
    }

    assert_eq!(engine.tick(), 1000);
    assert_eq!(engine.particles().len(), 500);
    assert!(engine.stats().respawns > 0);
    assert_eq!(engine.stats().frames_recorded, 1000);
}

#[test]
fn test_thousand_frames_under_live_pointer() {
    let host = HeadlessHost::new(800.0, 600.0);
    let config = EngineConfig {
        seed: Some(1),
        ..EngineConfig::default()
    };
    let mut engine = AnimationLoop::new(&config, host.handles());
    engine.mount();

    for frame in 0..1000u16 {
        if frame < 400 {
            // Two left-to-right sweeps through the middle of the field.
            let x = f32::from(frame % 200) * 4.0;
            host.pointer_move(x, 300.0);
        } else if frame == 400 {
            host.pointer_leave();
        }
        assert_eq!(host.pump(&mut engine, 1), 1);
        assert_pulse_bounds(&engine);
    }

    assert_eq!(engine.pointer(), PointerState::Absent);
    assert_eq!(engine.particles().len(), 500);
    assert!(engine.particles().iter().all(|p| p.vx.is_finite() && p.vy.is_finite()));
    assert!(engine.stats().respawns > 0);
}

#[test]
fn test_layer_draw_order() {
    let host = HeadlessHost::with_canvas(800.0, 600.0, RecordingCanvas::new());
    let config = EngineConfig {
        seed: Some(9),
        ..EngineConfig::default()
    };
    let mut engine = AnimationLoop::new(&config, host.handles());
    engine.mount();
    host.pump(&mut engine, 1);
    assert!(engine.last_frame().edges > 0);

    host.canvas().inspect(|canvas| {
        let commands = canvas.commands();
        assert!(matches!(commands.first(), Some(DrawCommand::Clear { .. })));

        let last_band = commands
            .iter()
            .rposition(|c| matches!(c, DrawCommand::FillRectGradient { .. }));
        let first_link = canvas.position(|c| *c == DrawCommand::LineWidth(LINK_LINE_WIDTH));
        let last_link = commands.iter().rposition(|c| *c == DrawCommand::LineWidth(LINK_LINE_WIDTH));
        let first_shape = canvas.position(|c| *c == DrawCommand::LineWidth(SHAPE_LINE_WIDTH));

        let (Some(last_band), Some(first_link), Some(last_link), Some(first_shape)) =
            (last_band, first_link, last_link, first_shape)
        else {
            panic!("every layer should draw");
        };
        assert!(last_band < first_link);
        assert!(last_link < first_shape);
    });
}

#[test]
fn test_frames_are_independent_of_wall_clock() {
    let run = || {
        let host = HeadlessHost::new(400.0, 300.0);
        let config = EngineConfig {
            particle_count: 100,
            seed: Some(77),
            ..EngineConfig::default()
        };
        let mut engine = AnimationLoop::new(&config, host.handles());
        engine.mount();
        host.pump(&mut engine, 50);
        let particles = engine.particles().to_vec();
        let last = host.canvas().take();
        (particles, last)
    };

    let (particles_a, frame_a) = run();
    let (particles_b, frame_b) = run();
    assert_eq!(particles_a, particles_b);
    assert_eq!(frame_a, frame_b);
}

#[test]
fn test_absent_pointer_matches_no_pointer() {
    let config = EngineConfig {
        particle_count: 150,
        seed: Some(5),
        ..EngineConfig::default()
    };

    let quiet = HeadlessHost::new(500.0, 400.0);
    let mut quiet_engine = AnimationLoop::new(&config, quiet.handles());
    quiet_engine.mount();

    let left = HeadlessHost::new(500.0, 400.0);
    let mut left_engine = AnimationLoop::new(&config, left.handles());
    left_engine.mount();

    for _ in 0..200 {
        left.pointer_leave();
        quiet.pump(&mut quiet_engine, 1);
        left.pump(&mut left_engine, 1);
    }

    assert_eq!(left_engine.pointer(), PointerState::Absent);
    assert_eq!(quiet_engine.particles(), left_engine.particles());
}

#[test]
fn test_pointer_pushes_nearby_particles() {
    let config = EngineConfig {
        particle_count: 300,
        seed: Some(6),
        ..EngineConfig::default()
    };

    let quiet = HeadlessHost::new(500.0, 400.0);
    let mut quiet_engine = AnimationLoop::new(&config, quiet.handles());
    quiet_engine.mount();

    let active = HeadlessHost::new(500.0, 400.0);
    let mut active_engine = AnimationLoop::new(&config, active.handles());
    active_engine.mount();

    active.pointer_move(250.0, 200.0);
    quiet.pump(&mut quiet_engine, 1);
    active.pump(&mut active_engine, 1);

    assert_ne!(quiet_engine.particles(), active_engine.particles());
}
