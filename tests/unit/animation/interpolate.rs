use super::*;

#[test]
fn midpoint_with_clamp() {
    let v = interpolate(10.0, &[0.0, 20.0], &[0.0, 1.0], InterpolateOptions::clamped()).unwrap();
    assert_eq!(v, 0.5);
}

#[test]
fn clamp_holds_edges() {
    let i = Interpolator::new([0.0, 20.0], [0.0, 1.0], InterpolateOptions::clamped()).unwrap();
    assert_eq!(i.sample(-5.0), 0.0);
    assert_eq!(i.sample(40.0), 1.0);
}

#[test]
fn extend_continues_nearest_segment() {
    let i = Interpolator::new(
        [0.0, 10.0, 20.0],
        [0.0, 10.0, 0.0],
        InterpolateOptions::extended(),
    )
    .unwrap();
    assert_eq!(i.sample(-5.0), -5.0);
    assert_eq!(i.sample(25.0), -5.0);
    assert_eq!(i.sample(15.0), 5.0);
}

#[test]
fn edge_policies_are_independent() {
    let opts = InterpolateOptions {
        left: Extrapolate::Clamp,
        right: Extrapolate::Extend,
        easing: Ease::Linear,
    };
    let i = Interpolator::new([0.0, 10.0], [0.0, 1.0], opts).unwrap();
    assert_eq!(i.sample(-10.0), 0.0);
    assert_eq!(i.sample(20.0), 2.0);
}

#[test]
fn exact_breakpoints_hit_outputs() {
    let i = Interpolator::new(
        [0.0, 5.0, 9.0],
        [3.0, 7.0, -1.0],
        InterpolateOptions::clamped(),
    )
    .unwrap();
    assert_eq!(i.sample(0.0), 3.0);
    assert_eq!(i.sample(5.0), 7.0);
    assert_eq!(i.sample(9.0), -1.0);
}

#[test]
fn clamp_stays_within_output_bounds_and_is_monotonic() {
    let outputs = [0.0, 0.2, 0.9, 1.0];
    let i = Interpolator::new([0.0, 3.0, 7.0, 12.0], outputs, InterpolateOptions::clamped())
        .unwrap();
    let mut prev = f64::MIN;
    for step in -40..200 {
        let v = i.sample(f64::from(step) * 0.1);
        assert!((0.0..=1.0).contains(&v));
        assert!(v >= prev);
        prev = v;
    }
}

#[test]
fn easing_applies_inside_segment_only() {
    let opts = InterpolateOptions::clamped().with_easing(Ease::InQuad);
    let i = Interpolator::new([0.0, 10.0], [0.0, 100.0], opts).unwrap();
    assert_eq!(i.sample(5.0), 25.0);
    assert_eq!(i.sample(10.0), 100.0);
}

#[test]
fn rejects_malformed_breakpoints() {
    let o = InterpolateOptions::default();
    assert!(Interpolator::new([0.0, 1.0], [0.0], o).is_err());
    assert!(Interpolator::new([0.0], [0.0], o).is_err());
    assert!(Interpolator::new([0.0, 0.0], [0.0, 1.0], o).is_err());
    assert!(Interpolator::new([1.0, 0.0], [0.0, 1.0], o).is_err());
    assert!(Interpolator::new([0.0, f64::NAN], [0.0, 1.0], o).is_err());
    assert!(Interpolator::new([0.0, 1.0], [0.0, f64::INFINITY], o).is_err());
}

#[test]
fn rejects_invalid_bezier_easing() {
    let o = InterpolateOptions::default().with_easing(Ease::CubicBezier {
        x1: -0.5,
        y1: 0.0,
        x2: 1.0,
        y2: 1.0,
    });
    assert!(Interpolator::new([0.0, 1.0], [0.0, 1.0], o).is_err());
}

#[test]
fn nan_maps_to_first_output() {
    let i = Interpolator::new([0.0, 1.0], [4.0, 8.0], InterpolateOptions::default()).unwrap();
    assert_eq!(i.sample(f64::NAN), 4.0);
}

#[test]
fn span_helper_handles_degenerate_span() {
    assert_eq!(interpolate_span(5.0, (0.0, 10.0), (0.0, 1.0), true), 0.5);
    assert_eq!(interpolate_span(-5.0, (0.0, 10.0), (0.0, 1.0), true), 0.0);
    assert_eq!(interpolate_span(3.0, (4.0, 4.0), (1.0, 0.0), true), 1.0);
    assert_eq!(interpolate_span(4.0, (4.0, 4.0), (1.0, 0.0), true), 0.0);
}

#[test]
fn clamped_back_easing_stays_within_segment() {
    let opts = InterpolateOptions::clamped().with_easing(Ease::from_name("ease_out_back"));
    let i = Interpolator::new([0.0, 20.0], [0.0, 1.0], opts).unwrap();
    for frame in 0..=20 {
        let v = i.sample(f64::from(frame));
        assert!((0.0..=1.0).contains(&v), "frame {frame}: {v}");
    }
    assert_eq!(i.sample(20.0), 1.0);

    let falling = Interpolator::new([0.0, 20.0], [1.0, 0.0], opts).unwrap();
    assert!((0..=20).all(|f| (0.0..=1.0).contains(&falling.sample(f64::from(f)))));
}

#[test]
fn extended_back_easing_keeps_its_overshoot() {
    let opts = InterpolateOptions::default().with_easing(Ease::from_name("ease_out_back"));
    let i = Interpolator::new([0.0, 20.0], [0.0, 1.0], opts).unwrap();
    let peak = (0..=20).map(|f| i.sample(f64::from(f))).fold(f64::MIN, f64::max);
    assert!(peak > 1.0, "peak {peak}");
}
