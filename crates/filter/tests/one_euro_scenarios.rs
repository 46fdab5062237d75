use gazesmooth_common::TimestampUnit;
use gazesmooth_filter::{FilterParams, OneEuroFilter};
use proptest::prelude::*;

const FRAME_SECS: f64 = 1.0 / 30.0;

fn gaze_filter(beta: f64) -> OneEuroFilter {
    OneEuroFilter::new(30.0, 1.0, beta, 1.0).expect("valid parameters")
}

/// Feed a ramp `value = slope * t` sampled at `rate` Hz and return the lag
/// of the final output behind the final raw value.
fn ramp_lag(beta: f64, rate: f64, slope: f64, samples: usize) -> f64 {
    let mut filter = OneEuroFilter::new(rate, 1.0, beta, 1.0).expect("valid parameters");
    let mut last_raw = 0.0;
    let mut last_out = 0.0;
    for i in 0..samples {
        let t = i as f64 / rate;
        last_raw = slope * t;
        last_out = filter.filter_value(last_raw, t);
    }
    last_raw - last_out
}

#[test]
fn two_frame_gaze_scenario() {
    let mut adaptive = gaze_filter(0.007);
    let mut fixed = gaze_filter(0.0);

    assert_eq!(adaptive.filter_value(0.0, 0.0), 0.0);
    assert_eq!(fixed.filter_value(0.0, 0.0), 0.0);

    let y = adaptive.filter_value(1.0, FRAME_SECS);
    let y_fixed = fixed.filter_value(1.0, FRAME_SECS);

    assert!(y > 0.0 && y < 1.0, "output {y} should be strictly inside (0, 1)");
    assert!(y > y_fixed, "adaptive {y} should track closer to 1.0 than fixed {y_fixed}");
}

#[test]
fn identical_timestamps_keep_sample_rate() {
    let mut filter = gaze_filter(0.007);
    filter.filter_value(0.0, 0.0);
    filter.filter_value(0.3, 0.02);
    let rate = filter.sample_rate();

    let y = filter.filter_value(0.6, 0.02);
    assert!(y.is_finite());
    assert_eq!(filter.sample_rate(), rate);
}

#[test]
fn lag_shrinks_as_beta_grows() {
    let betas = [0.0, 0.001, 0.01, 0.1, 1.0];
    let lags: Vec<f64> = betas
        .iter()
        .map(|&beta| ramp_lag(beta, 60.0, 2.0, 120))
        .collect();

    for lag in &lags {
        assert!(*lag > 0.0, "filtered ramp should trail the input, got {lag}");
    }
    for pair in lags.windows(2) {
        assert!(
            pair[1] < pair[0],
            "lag should decrease with beta: {lags:?}"
        );
    }
}

#[test]
fn jitter_is_attenuated_around_a_fixation() {
    let mut filter = gaze_filter(0.007);
    let noise = [0.03, -0.02, 0.025, -0.03, 0.01, -0.015, 0.02, -0.01];

    let mut max_deviation: f64 = 0.0;
    for i in 0..240 {
        let raw = 0.5 + noise[i % noise.len()];
        let y = filter.filter_value(raw, i as f64 * FRAME_SECS);
        if i >= 30 {
            max_deviation = max_deviation.max((y - 0.5).abs());
        }
    }

    assert!(
        max_deviation < 0.015,
        "filtered deviation {max_deviation} should be well under raw 0.03"
    );
}

#[test]
fn integer_millisecond_clock_matches_seconds() {
    let samples = [(0_i64, 0.1), (33, 0.4), (66, 0.35), (100, 0.9), (133, 0.8)];

    let mut from_ms = gaze_filter(0.5);
    let mut from_secs = gaze_filter(0.5);
    for &(ms, value) in &samples {
        let a = from_ms.filter_value(value, TimestampUnit::Milliseconds.to_secs(ms));
        let b = from_secs.filter_value(value, ms as f64 / 1000.0);
        assert_eq!(a, b);
    }
    assert!((from_ms.sample_rate() - 1000.0 / 33.0).abs() < 1e-6);
}

#[test]
fn default_params_build_the_reference_filter() {
    let mut from_defaults = OneEuroFilter::from_params(&FilterParams::default()).unwrap();
    let mut explicit = gaze_filter(0.007);
    for i in 0..20 {
        let t = i as f64 * FRAME_SECS;
        let v = (t * 3.0).sin();
        assert_eq!(from_defaults.filter_value(v, t), explicit.filter_value(v, t));
    }
}

proptest! {
    #[test]
    fn identical_filters_produce_identical_output(
        samples in prop::collection::vec((-1e3f64..1e3, -0.05f64..0.2), 1..200),
        beta in 0.0f64..2.0,
    ) {
        let mut a = gaze_filter(beta);
        let mut b = gaze_filter(beta);
        let mut t = 0.0;
        for (value, dt) in samples {
            t += dt;
            let ya = a.filter_value(value, t);
            let yb = b.filter_value(value, t);
            prop_assert_eq!(ya.to_bits(), yb.to_bits());
        }
    }

    #[test]
    fn first_sample_always_passes_through(value in -1e6f64..1e6, t in -1e6f64..1e6) {
        let mut filter = gaze_filter(0.007);
        prop_assert_eq!(filter.filter_value(value, t), value);
    }

    #[test]
    fn output_stays_finite_with_arbitrary_timestamps(
        samples in prop::collection::vec((-1e3f64..1e3, -1e3f64..1e3), 1..100),
    ) {
        let mut filter = gaze_filter(0.007);
        for (value, t) in samples {
            prop_assert!(filter.filter_value(value, t).is_finite());
            prop_assert!(filter.sample_rate() > 0.0);
        }
    }
}
