//! Integration tests for mount / frame / unmount against the headless host.

use driftfield::core::{PointerState, Viewport};
use driftfield::rendering::RecordingCanvas;
use driftfield::{AnimationLoop, EngineConfig, FrameHandle, HeadlessHost, HostError, LoopState};

fn config(particle_count: usize) -> EngineConfig {
    EngineConfig {
        particle_count,
        seed: Some(2024),
        ..EngineConfig::default()
    }
}

fn recording_host(width: f32, height: f32) -> HeadlessHost {
    HeadlessHost::with_canvas(width, height, RecordingCanvas::new())
}

#[test]
fn test_teardown_completeness() {
    let host = recording_host(640.0, 480.0);
    let mut engine = AnimationLoop::new(&config(80), host.handles());
    engine.mount();
    assert_eq!(host.pump(&mut engine, 5), 5);

    let last_handle = engine.pending_frame();
    engine.unmount();

    let tick = engine.tick();
    let draws = host.canvas().inspect(RecordingCanvas::len);
    assert_eq!(host.pending_frame(), None);
    assert_eq!(host.listener_count(), 0);

    // Everything the host might still do after teardown.
    host.resize(1024.0, 768.0);
    host.pointer_move(10.0, 10.0);
    host.pointer_leave();
    if let Some(handle) = last_handle {
        engine.on_frame(handle);
    }
    engine.on_frame(FrameHandle(u64::MAX));
    assert_eq!(host.pump(&mut engine, 10), 0);

    assert_eq!(engine.state(), LoopState::Stopped);
    assert_eq!(engine.tick(), tick);
    assert_eq!(host.canvas().inspect(RecordingCanvas::len), draws);
    assert!(engine.particles().is_empty());
}

#[test]
fn test_static_frame_when_listeners_refused() {
    let host = recording_host(640.0, 480.0);
    host.refuse_listeners(true);
    let mut engine = AnimationLoop::new(&config(50), host.handles());
    engine.mount();

    assert_eq!(engine.state(), LoopState::Running);
    assert!(matches!(engine.degraded(), Some(HostError::Refused(_))));
    assert_eq!(engine.tick(), 1);
    assert_eq!(host.canvas().inspect(RecordingCanvas::clears), 1);
    assert_eq!(host.pending_frame(), None);
    assert_eq!(host.listener_count(), 0);
    assert_eq!(host.pump(&mut engine, 5), 0);

    engine.unmount();
    assert_eq!(engine.state(), LoopState::Stopped);
}

#[test]
fn test_static_frame_when_detached_at_mount() {
    let host = recording_host(640.0, 480.0);
    host.detach();
    let mut engine = AnimationLoop::new(&config(50), host.handles());
    engine.mount();

    assert_eq!(engine.degraded(), Some(&HostError::Detached));
    assert_eq!(engine.viewport(), Viewport::new(0, 0));
    assert_eq!(engine.tick(), 1);
    assert!(engine.particles().iter().all(|p| p.x.is_finite() && p.y.is_finite()));
    assert_eq!(host.pending_frame(), None);
}

#[test]
fn test_detached_container_parks_loop() {
    let host = recording_host(640.0, 480.0);
    let mut engine = AnimationLoop::new(&config(50), host.handles());
    engine.mount();
    assert_eq!(host.pump(&mut engine, 3), 3);

    host.detach();
    // The pending frame still fires once, finds no container and stops there.
    assert_eq!(host.pump(&mut engine, 10), 1);

    assert!(engine.is_parked());
    assert_eq!(engine.tick(), 3);
    assert_eq!(engine.pending_frame(), None);
    assert_eq!(host.canvas().inspect(RecordingCanvas::clears), 3);

    engine.unmount();
    assert_eq!(host.listener_count(), 0);
}

#[test]
fn test_stale_frame_ignored() {
    let host = recording_host(640.0, 480.0);
    let mut engine = AnimationLoop::new(&config(20), host.handles());
    engine.mount();

    let Some(first) = host.fire_frame() else {
        panic!("mount should schedule a frame");
    };
    engine.on_frame(first);
    assert_eq!(engine.tick(), 1);

    engine.on_frame(first);
    engine.on_frame(FrameHandle(first.0 + 1000));
    assert_eq!(engine.tick(), 1);
    assert!(engine.pending_frame().is_some());
}

#[test]
fn test_pointer_converted_to_surface_coordinates() {
    let host = recording_host(640.0, 480.0);
    host.move_origin(100.0, 50.0);
    let mut engine = AnimationLoop::new(&config(20), host.handles());
    engine.mount();

    host.pointer_move(150.0, 80.0);
    host.pump(&mut engine, 1);
    assert_eq!(engine.pointer(), PointerState::At { x: 50.0, y: 30.0 });
    assert_eq!(engine.last_frame().events_processed, 1);

    host.pointer_leave();
    host.pump(&mut engine, 1);
    assert_eq!(engine.pointer(), PointerState::Absent);
}

#[test]
fn test_resize_applies_at_next_frame() {
    let host = recording_host(640.0, 480.0);
    let mut engine = AnimationLoop::new(&config(60), host.handles());
    engine.mount();
    host.pump(&mut engine, 2);

    host.resize(300.0, 200.0);
    assert_eq!(engine.viewport(), Viewport::new(640, 480));

    host.pump(&mut engine, 1);
    assert_eq!(engine.viewport(), Viewport::new(300, 200));
    assert_eq!(engine.particles().len(), 60);
}

fn pointer_burst(host: &HeadlessHost, moves: u16) {
    for i in 0..moves {
        host.pointer_move(f32::from(i % 256), 100.0);
    }
}

#[test]
fn test_leave_after_pointer_burst_clears_pointer() {
    let host = recording_host(640.0, 480.0);
    let mut engine = AnimationLoop::new(&EngineConfig::default(), host.handles());
    engine.mount();

    pointer_burst(&host, 300);
    host.pointer_leave();
    assert!(host.moves_coalesced() > 0);

    host.pump(&mut engine, 1);
    assert_eq!(engine.pointer(), PointerState::Absent);
    assert_eq!(engine.last_frame().events_processed, 301);

    host.pump(&mut engine, 5);
    assert_eq!(engine.pointer(), PointerState::Absent);
}

#[test]
fn test_move_after_pointer_burst_keeps_newest_position() {
    let host = recording_host(640.0, 480.0);
    let mut engine = AnimationLoop::new(&EngineConfig::default(), host.handles());
    engine.mount();

    pointer_burst(&host, 300);
    host.pointer_leave();
    host.pointer_move(12.0, 34.0);

    host.pump(&mut engine, 1);
    assert_eq!(engine.pointer(), PointerState::At { x: 12.0, y: 34.0 });
}

#[test]
fn test_resize_after_pointer_burst_applies() {
    let host = recording_host(640.0, 480.0);
    let mut engine = AnimationLoop::new(&EngineConfig::default(), host.handles());
    engine.mount();

    pointer_burst(&host, 300);
    host.resize(300.0, 200.0);

    host.pump(&mut engine, 5);
    assert_eq!(engine.viewport(), Viewport::new(300, 200));
    assert_eq!(engine.pointer(), PointerState::At { x: 43.0, y: 100.0 });
}

#[test]
fn test_config_file_round_trip_into_engine() {
    let path = std::env::temp_dir().join(format!("driftfield_test_{}.toml", std::process::id()));
    let written = std::fs::write(
        &path,
        "particle_count = 33\ncolor = \"#2d7a45\"\nopacity = 0.4\nseed = 11\naurora = true\n",
    );
    assert!(written.is_ok());

    let loaded = EngineConfig::from_toml(&path);
    let _ = std::fs::remove_file(&path);
    let Ok(config) = loaded else {
        panic!("config file should load");
    };

    let host = recording_host(200.0, 100.0);
    let mut engine = AnimationLoop::new(&config, host.handles());
    engine.mount();
    host.pump(&mut engine, 1);

    assert_eq!(engine.particles().len(), 33);
    assert_eq!(engine.config().seed.value(), 11);
    assert_eq!(engine.last_frame().strips, 4 * 50);
}
