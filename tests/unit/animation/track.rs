use super::*;

fn track(repeat: Repeat, ease: Ease) -> RatioTrack {
    RatioTrack {
        ratio: Ratio::WaveShift,
        from: 0.0,
        to: 1.0,
        duration_ms: 1000,
        ease,
        repeat,
    }
}

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

#[test]
fn once_holds_end_value() {
    let t = track(Repeat::Once, Ease::Linear);
    assert_eq!(t.value_at(ms(0)), 0.0);
    assert_eq!(t.value_at(ms(500)), 0.5);
    assert_eq!(t.value_at(ms(1000)), 1.0);
    assert_eq!(t.value_at(ms(7000)), 1.0);
}

#[test]
fn restart_wraps_back_to_start() {
    let t = track(Repeat::Restart, Ease::Linear);
    assert_eq!(t.value_at(ms(250)), 0.25);
    assert_eq!(t.value_at(ms(1000)), 0.0);
    assert_eq!(t.value_at(ms(1250)), 0.25);
    assert_eq!(t.value_at(ms(3750)), 0.75);
}

#[test]
fn reverse_ping_pongs() {
    let t = RatioTrack {
        ratio: Ratio::Amplitude,
        from: 0.02,
        to: 0.05,
        duration_ms: 5000,
        ease: Ease::Linear,
        repeat: Repeat::Reverse,
    };
    assert!((t.value_at(ms(0)) - 0.02).abs() < 1e-6);
    assert!((t.value_at(ms(5000)) - 0.05).abs() < 1e-6);
    assert!((t.value_at(ms(7500)) - 0.035).abs() < 1e-6);
    assert!((t.value_at(ms(10_000)) - 0.02).abs() < 1e-6);
    assert!((t.value_at(ms(12_500)) - 0.035).abs() < 1e-6);
}

#[test]
fn decelerate_is_ahead_of_linear_midway() {
    let t = RatioTrack {
        ratio: Ratio::WaterLevel,
        from: 0.0,
        to: 0.5,
        duration_ms: 10_000,
        ease: Ease::Decelerate,
        repeat: Repeat::Once,
    };
    assert!((t.value_at(ms(5000)) - 0.375).abs() < 1e-6);
    assert_eq!(t.end_value(), 0.5);
}

#[test]
fn zero_duration_jumps_to_end() {
    let t = RatioTrack {
        duration_ms: 0,
        ..track(Repeat::Once, Ease::Linear)
    };
    assert_eq!(t.value_at(ms(0)), 1.0);
    assert!(t.validate().is_ok());
}

#[test]
fn validation_rejects_bad_tracks() {
    let repeating_instant = RatioTrack {
        duration_ms: 0,
        ..track(Repeat::Restart, Ease::Linear)
    };
    let err = repeating_instant.validate().unwrap_err();
    assert!(err.to_string().contains("animation error:"));

    let nan = RatioTrack {
        to: f32::NAN,
        ..track(Repeat::Once, Ease::Linear)
    };
    assert!(nan.validate().is_err());
}

#[test]
fn serde_defaults_ease_and_repeat() {
    let t: RatioTrack = serde_json::from_str(
        r#"{ "ratio": "water_level", "from": 0.0, "to": 1.0, "duration_ms": 300 }"#,
    )
    .unwrap();
    assert_eq!(t.ease, Ease::Linear);
    assert_eq!(t.repeat, Repeat::Once);
    assert_eq!(t.ratio, Ratio::WaterLevel);
}
