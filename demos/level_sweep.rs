//! Headless walk through a few level changes.
//!
//! Run with: `RUST_LOG=sightglass=debug cargo run --example level_sweep`

use sightglass::prelude::*;

const FRAME_MS: f32 = 1000.0 / 60.0;

fn main() {
    env_logger::init();

    let config = SightGlassConfig::new(280.0).wave_count(4).seed(2024);
    let mut glass = match SightGlass::new(config) {
        Ok(glass) => glass,
        Err(err) => {
            eprintln!("invalid configuration: {}", err);
            std::process::exit(1);
        }
    };

    glass.resize(120.0, 500.0);
    glass.set_glass_color(Color::rgba(0.85, 0.9, 1.0, 0.25));
    glass.set_glass_shade(Color::rgba(0.0, 0.0, 0.0, 0.3));
    glass.set_liquid_color(Color::from_hex(0x2E86DE));

    let mut ctx = PaintContext::with_capacity(16);
    let mut frame = 0u64;

    for level in [50.0, 80.0, 15.0, 120.0, 65.0] {
        glass.set_level(level);
        println!(
            "level {:>5.1} -> target {:>7.2} ({:?})",
            glass.level(),
            glass.target_position(),
            glass.state()
        );

        loop {
            let changes = glass.tick(FRAME_MS);
            frame += 1;

            if changes.needs_paint() {
                ctx.clear();
                glass.paint(&mut ctx);
            }
            if frame % 15 == 0 {
                let waves: Vec<String> = glass
                    .waves()
                    .iter()
                    .map(|w| format!("{:7.1}", w.x()))
                    .collect();
                println!(
                    "  t={:>6.2}s surface {:>8.2}  waves [{}]  {} draw commands",
                    frame as f32 * FRAME_MS / 1000.0,
                    glass.surface_position(),
                    waves.join(" "),
                    ctx.commands().len()
                );
            }
            if changes.surface_settled() || glass.state() == GlassState::Settled {
                break;
            }
        }

        println!("  settled at {:.2}", glass.surface_position());
    }
}
