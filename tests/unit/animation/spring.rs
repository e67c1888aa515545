use super::*;

fn fps30() -> Fps {
    Fps::new(30, 1).unwrap()
}

#[test]
fn progress_starts_at_zero() {
    for preset in SpringPreset::ALL {
        let cfg = preset.config();
        assert_eq!(spring_progress(0, fps30(), &cfg), 0.0);
        assert_eq!(spring_progress(-12, fps30(), &cfg), 0.0);
    }
}

#[test]
fn overdamped_presets_are_monotonic_and_converge() {
    for preset in [SpringPreset::Smooth, SpringPreset::Gentle, SpringPreset::Snappy] {
        let cfg = preset.config();
        assert!(cfg.damping_ratio() >= 1.0);
        let mut prev = 0.0;
        for f in 0..600 {
            let p = spring_progress(f, fps30(), &cfg);
            assert!(p >= prev, "{preset:?} regressed at frame {f}");
            assert!(p <= 1.0);
            prev = p;
        }
        assert!((1.0 - prev).abs() < 0.01, "{preset:?} ended at {prev}");
    }
}

#[test]
fn critically_damped_is_monotonic() {
    let cfg = SpringConfig::new(20.0, 1.0, 100.0).unwrap();
    assert!((cfg.damping_ratio() - 1.0).abs() < 1e-12);
    let mut prev = 0.0;
    for f in 0..120 {
        let p = spring_progress(f, fps30(), &cfg);
        assert!(p >= prev);
        prev = p;
    }
    assert!(prev > 0.99);
}

#[test]
fn underdamped_overshoots_unless_clamped() {
    let cfg = SpringPreset::Bouncy.config();
    let peak = (0..90)
        .map(|f| spring_progress(f, fps30(), &cfg))
        .fold(f64::MIN, f64::max);
    assert!(peak > 1.05);

    let clamped = cfg.with_overshoot_clamping(true);
    assert!((0..90).all(|f| spring_progress(f, fps30(), &clamped) <= 1.0));
}

#[test]
fn settle_frames_marks_tolerance_boundary() {
    let cfg = SpringPreset::Smooth.config();
    let n = settle_frames(fps30(), &cfg, 0.01).unwrap();
    assert!(n > 0);
    let before = spring_progress(n as i64 - 1, fps30(), &cfg);
    let at = spring_progress(n as i64, fps30(), &cfg);
    assert!((1.0 - before).abs() > 0.01);
    assert!((1.0 - at).abs() <= 0.01);
}

#[test]
fn undamped_spring_never_settles() {
    let cfg = SpringConfig::new(0.0, 1.0, 100.0).unwrap();
    assert_eq!(settle_frames(fps30(), &cfg, 0.01), None);
}

#[test]
fn rejects_invalid_parameters() {
    assert!(SpringConfig::new(10.0, 0.0, 100.0).is_err());
    assert!(SpringConfig::new(10.0, 1.0, -1.0).is_err());
    assert!(SpringConfig::new(-1.0, 1.0, 100.0).is_err());
    assert!(SpringConfig::new(f64::NAN, 1.0, 100.0).is_err());
}

#[test]
fn preset_names_resolve_with_fallback() {
    assert_eq!(SpringPreset::from_name("bouncy"), SpringPreset::Bouncy);
    assert_eq!(SpringPreset::from_name(" Elastic "), SpringPreset::Elastic);
    assert_eq!(SpringPreset::from_name("jelly"), SpringPreset::Smooth);
    assert_eq!(SpringConfig::default(), SpringPreset::Smooth.config());
}
