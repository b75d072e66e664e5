use sightglass::prelude::*;
use sightglass::widgets::sight_glass::SurfaceMotion;

const FRAME_MS: f32 = 1000.0 / 60.0;

fn glass() -> SightGlass {
    SightGlass::new(SightGlassConfig::new(280.0).seed(1234)).unwrap()
}

/// Tick until the surface settles, returning how many settle events were seen
fn run_until_settled(glass: &mut SightGlass) -> usize {
    let mut settles = 0;
    for _ in 0..100_000 {
        if glass.tick(FRAME_MS).surface_settled() {
            settles += 1;
        }
        if glass.state() == GlassState::Settled {
            return settles;
        }
    }
    panic!("surface never settled");
}

#[test]
fn test_first_level_then_animated_level() {
    let mut glass = glass();
    glass.resize(80.0, 500.0);

    glass.set_level(50.0);
    assert_eq!(glass.surface_position(), -30.0);
    assert_eq!(glass.state(), GlassState::Settled);

    glass.set_level(80.0);
    assert_eq!(glass.target_position(), 120.0);
    assert_eq!(
        glass.liquid().motion(),
        SurfaceMotion::Approaching { overshoot: -30.0 }
    );

    // The approach travels past the target by half the overshoot
    let mut peak = f32::MIN;
    while matches!(glass.liquid().motion(), SurfaceMotion::Approaching { .. }) {
        glass.tick(FRAME_MS);
        peak = peak.max(glass.surface_position());
    }
    assert_eq!(peak, 135.0);

    // Then it bounces below the target before closing in
    let mut trough = f32::MAX;
    while glass.state() == GlassState::Transitioning {
        glass.tick(FRAME_MS);
        trough = trough.min(glass.surface_position());
    }
    assert_eq!(trough, 105.0);
    assert!((glass.surface_position() - 120.0).abs() < 6.0);
}

#[test]
fn test_rapid_level_changes_settle_once() {
    let mut glass = glass();
    glass.resize(80.0, 500.0);
    glass.set_level(0.0);

    glass.set_level(90.0);
    for _ in 0..10 {
        glass.tick(FRAME_MS);
    }
    glass.set_level(30.0);
    assert!(glass.has_surface_trajectory());

    let settles = run_until_settled(&mut glass);
    assert_eq!(settles, 1);
    assert!(!glass.has_surface_trajectory());

    // Nothing left over from the superseded chain
    for _ in 0..600 {
        assert!(!glass.tick(FRAME_MS).surface_settled());
    }
    assert_eq!(glass.state(), GlassState::Settled);
}

#[test]
fn test_resize_resyncs_instantly() {
    let mut glass = glass();
    glass.resize(80.0, 500.0);
    glass.set_level(50.0);
    assert_eq!(glass.surface_position(), -30.0);

    let flags = {
        glass.take_changes();
        glass.resize(80.0, 600.0);
        glass.take_changes()
    };

    assert!(flags.needs_layout());
    assert_eq!(glass.state(), GlassState::Settled);
    assert!(!glass.has_surface_trajectory());
    assert_eq!(glass.surface_position(), 20.0);
    assert_eq!(glass.target_position(), 20.0);
}

#[test]
fn test_resize_interrupts_transition() {
    let mut glass = glass();
    glass.resize(80.0, 500.0);
    glass.set_level(50.0);
    glass.set_level(100.0);
    for _ in 0..30 {
        glass.tick(FRAME_MS);
    }
    assert_eq!(glass.state(), GlassState::Transitioning);

    glass.resize(80.0, 400.0);

    assert_eq!(glass.state(), GlassState::Settled);
    assert_eq!(glass.surface_position(), 400.0 - 280.0);
    for _ in 0..600 {
        assert!(!glass.tick(FRAME_MS).surface_settled());
    }
}

#[test]
fn test_instant_level_change() {
    let mut glass = glass();
    glass.resize(80.0, 500.0);
    glass.set_level(10.0);
    glass.tick(3000.0);
    glass.tick(3000.0);
    let amplitudes = |g: &SightGlass| {
        g.waves()
            .iter()
            .map(|w| (w.current_distance(), w.max_distance()))
            .collect::<Vec<_>>()
    };
    let before = amplitudes(&glass);

    glass.set_level_with(70.0, true);

    assert_eq!(glass.surface_position(), 70.0);
    assert_eq!(glass.state(), GlassState::Settled);
    assert!(!glass.has_surface_trajectory());
    // Only animated changes stir the waves
    assert_eq!(amplitudes(&glass), before);
}

#[test]
fn test_bounds_are_exposed_and_enforced() {
    let mut glass = SightGlass::new(
        SightGlassConfig::new(528.0)
            .level_bounds(0.0, 100.0)
            .seed(7),
    )
    .unwrap();
    assert_eq!(glass.min_level(), 0.0);
    assert_eq!(glass.max_level(), 100.0);

    glass.resize(80.0, 500.0);
    glass.set_level(250.0);
    assert_eq!(glass.level(), 100.0);
    assert_eq!(glass.surface_position(), 500.0 - 528.0);
}

#[test]
fn test_waves_drift_forever_and_stay_above_floor() {
    let mut glass = SightGlass::new(SightGlassConfig::new(280.0).wave_count(3).seed(99)).unwrap();
    glass.resize(80.0, 500.0);
    glass.set_level(50.0);

    for _ in 0..(60 * 120) {
        glass.tick(FRAME_MS);
        for wave in glass.waves() {
            assert!(wave.current_distance() >= wave.min_distance());
        }
    }

    for wave in glass.waves() {
        assert_eq!(wave.current_distance(), wave.min_distance());
    }
    assert!(glass.tick(FRAME_MS).needs_paint());
}

#[test]
fn test_same_seed_same_motion() {
    let mut a = glass();
    let mut b = glass();
    for glass in [&mut a, &mut b] {
        glass.resize(80.0, 500.0);
        glass.set_level(20.0);
        glass.set_level(75.0);
        glass.set_liquid_color(Color::rgb(0.2, 0.5, 0.9));
        for _ in 0..200 {
            glass.tick(FRAME_MS);
        }
    }

    assert_eq!(a.surface_position(), b.surface_position());
    let xs = |g: &SightGlass| g.waves().iter().map(|w| w.x()).collect::<Vec<_>>();
    assert_eq!(xs(&a), xs(&b));
    assert_eq!(a.style(), b.style());

    let mut ctx_a = PaintContext::new();
    let mut ctx_b = PaintContext::new();
    a.paint(&mut ctx_a);
    b.paint(&mut ctx_b);
    assert_eq!(ctx_a.commands(), ctx_b.commands());
}
