//! # DRIFTFIELD Soak
//!
//! Runs the engine headless against a recording canvas for many frames with
//! a scripted pointer sweep and a resize halfway through, then prints the
//! frame statistics.
//!
//! ```bash
//! driftfield_soak                          # 1000 frames, defaults
//! driftfield_soak --frames 5000 --no-aurora
//! driftfield_soak --config driftfield.toml
//! ```

use std::process::ExitCode;

use driftfield::{AnimationLoop, EngineConfig, EngineResult, HeadlessHost, LoopState};

const DEFAULT_FRAMES: usize = 1000;
const WIDTH: f32 = 1280.0;
const HEIGHT: f32 = 720.0;

struct Args {
    frames: usize,
    config: Option<String>,
    no_aurora: bool,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        frames: DEFAULT_FRAMES,
        config: None,
        no_aurora: false,
    };
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--frames" => {
                let value = iter.next().ok_or("--frames needs a value")?;
                args.frames = value.parse().map_err(|_| format!("bad frame count: {value}"))?;
            }
            "--config" => {
                args.config = Some(iter.next().ok_or("--config needs a path")?);
            }
            "--no-aurora" => args.no_aurora = true,
            other => return Err(format!("unknown argument: {other}")),
        }
    }
    Ok(args)
}

fn load_config(args: &Args) -> EngineResult<EngineConfig> {
    let mut config = match &args.config {
        Some(path) => EngineConfig::from_toml(path)?,
        None => EngineConfig::default(),
    };
    if args.no_aurora {
        config.aurora = false;
    }
    Ok(config)
}

#[allow(clippy::cast_precision_loss)]
fn run(args: &Args, config: &EngineConfig) {
    let host = HeadlessHost::new(WIDTH, HEIGHT);
    let mut engine = AnimationLoop::new(config, host.handles());
    engine.mount();

    println!("   ✓ Mounted: {:?}", engine.viewport());
    println!("   ✓ Particles: {}", engine.particles().len());
    println!("   ✓ Seed: {}", engine.config().seed.value());
    println!();

    for frame in 0..args.frames {
        // Pointer sweeps left to right across the middle, leaving every 300 frames.
        let phase = frame % 300;
        if phase == 299 {
            host.pointer_leave();
        } else {
            let x = WIDTH * phase as f32 / 299.0;
            host.pointer_move(x, HEIGHT * 0.5);
        }

        if frame == args.frames / 2 {
            host.resize(WIDTH * 0.75, HEIGHT * 1.25);
        }

        if host.pump(&mut engine, 1) == 0 {
            println!("   ✗ Loop stopped scheduling at frame {frame}");
            break;
        }
    }

    let last_frame_commands = host.canvas().inspect(driftfield::rendering::RecordingCanvas::len);
    engine.unmount();

    println!("   ✓ Ticks: {}", engine.tick());
    println!("   ✓ Last frame draw calls: {last_frame_commands}");
    println!("   ✓ Listeners after unmount: {}", host.listener_count());
    println!("   ✓ State: {:?}", engine.state());
    debug_assert_eq!(engine.state(), LoopState::Stopped);
    println!();

    engine.stats().print_summary();
}

fn main() -> ExitCode {
    println!("═══════════════════════════════════════════════════════════════════");
    println!("                    DRIFTFIELD SOAK");
    println!("                     HEADLESS MODE");
    println!("═══════════════════════════════════════════════════════════════════");
    println!();

    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("   ✗ {message}");
            eprintln!("     usage: driftfield_soak [--frames N] [--config PATH] [--no-aurora]");
            return ExitCode::FAILURE;
        }
    };

    let config = match load_config(&args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("   ✗ FATAL: {err}");
            return ExitCode::FAILURE;
        }
    };

    run(&args, &config);
    ExitCode::SUCCESS
}
