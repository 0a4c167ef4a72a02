use super::*;
use crate::animation::{
    ease::Ease,
    track::{Ratio, Repeat},
};

#[test]
fn minimal_json_fills_defaults() {
    let cfg = WaveConfig::from_json_str(r#"{ "canvas": { "width": 120, "height": 80 } }"#).unwrap();
    assert_eq!(cfg.canvas, Canvas::new(120, 80));
    assert_eq!(cfg.shape, ShapeKind::Rectangle);
    assert_eq!(cfg.behind_color, Argb(0xFF55_5351));
    assert_eq!(cfg.front_color, Argb(0xFF65_6361));
    assert_eq!(cfg.fps, Fps { num: 30, den: 1 });
    assert_eq!(cfg.frame_count(), 0);
    assert!(cfg.animator.is_none());
    cfg.validate().unwrap();
    assert_eq!(cfg, WaveConfig::new(Canvas::new(120, 80)));
}

#[test]
fn full_json_parses() {
    let cfg = WaveConfig::from_json_str(
        r##"{
            "canvas": { "width": 200, "height": 200 },
            "shape": "circle",
            "border": { "width": 8, "color": "#FF336699" },
            "behind_color": "#28A0E0",
            "front_color": "#C03090F0",
            "baseline": { "amplitude_ratio": 0.45, "phase_shift_fraction": 0.2 },
            "ratios": { "water_level": 0.3 },
            "animator": { "kind": "loading_pulse", "fill_ms": 4000 },
            "fps": { "num": 24, "den": 1 },
            "duration_ms": 500,
            "background": "#101418"
        }"##,
    )
    .unwrap();

    assert_eq!(cfg.shape, ShapeKind::Circle);
    assert_eq!(cfg.border.unwrap().width, 8);
    assert_eq!(cfg.behind_color, Argb(0xFF28_A0E0));
    assert_eq!(cfg.front_color.alpha(), 0xC0);
    assert_eq!(cfg.baseline, Some(WaveBaseline::swell()));
    assert_eq!(cfg.ratios.unwrap().water_level, Some(0.3));
    assert_eq!(cfg.animator, Some(AnimatorPreset::LoadingPulse { fill_ms: 4000 }));
    assert_eq!(cfg.frame_count(), 12);
    assert_eq!(cfg.render_settings().clear_rgba, Some([0x10, 0x14, 0x18, 0xFF]));
    cfg.validate().unwrap();
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = WaveConfig::from_json_str(r#"{ "canvas": 3 }"#).unwrap_err();
    assert!(err.to_string().starts_with("serialization error:"));

    let err = WaveConfig::from_json_str(
        r#"{ "canvas": { "width": 1, "height": 1 }, "shape": "triangle" }"#,
    )
    .unwrap_err();
    assert!(matches!(err, WaveError::Serde(_)));
}

#[test]
fn validate_rejects_bad_fps() {
    let mut cfg = WaveConfig::new(Canvas::new(10, 10));
    cfg.fps = Fps { num: 30, den: 0 };
    assert!(cfg.validate().is_err());
}

#[test]
fn validate_rejects_bad_baseline() {
    let mut cfg = WaveConfig::new(Canvas::new(10, 10));
    cfg.baseline = Some(WaveBaseline {
        phase_shift_fraction: 1.0,
        ..WaveBaseline::classic()
    });
    assert!(cfg.validate().is_err());

    cfg.baseline = Some(WaveBaseline {
        wave_length_ratio: 0.0,
        ..WaveBaseline::classic()
    });
    assert!(cfg.validate().is_err());
}

#[test]
fn validate_rejects_non_finite_ratio() {
    let mut cfg = WaveConfig::new(Canvas::new(10, 10));
    cfg.ratios = Some(RatioOverrides {
        amplitude: Some(f32::INFINITY),
        ..RatioOverrides::default()
    });
    let err = cfg.validate().unwrap_err();
    assert!(err.to_string().contains("amplitude"));
}

#[test]
fn zero_size_canvas_is_valid() {
    WaveConfig::new(Canvas::new(0, 0)).validate().unwrap();
}

#[test]
fn overrides_apply_only_set_ratios() {
    let mut params = WaveParams::default();
    RatioOverrides {
        wave_shift: Some(0.4),
        wave_length: Some(2.0),
        ..RatioOverrides::default()
    }
    .apply_to(&mut params);
    assert_eq!(params.wave_shift_ratio(), 0.4);
    assert_eq!(params.wave_length_ratio(), 2.0);
    assert_eq!(params.water_level_ratio(), 0.5);
    assert_eq!(params.amplitude_ratio(), 0.05);
}

#[test]
fn missing_file_is_reported() {
    let err = WaveConfig::from_path(Path::new("target/does-not-exist/wave.json")).unwrap_err();
    assert!(err.to_string().contains("read wave config"));
}

#[test]
fn custom_tracks_parse_with_named_easings() {
    let cfg = WaveConfig::from_json_str(
        r#"{
            "canvas": { "width": 64, "height": 64 },
            "tracks": [
                { "ratio": "water_level", "from": 0.0, "to": 0.9, "duration_ms": 3000,
                  "ease": "accelerate_decelerate" },
                { "ratio": "wave_length", "from": 1.0, "to": 1.5, "duration_ms": 800,
                  "ease": "accelerate", "repeat": "reverse" }
            ]
        }"#,
    )
    .unwrap();
    cfg.validate().unwrap();

    assert_eq!(cfg.tracks.len(), 2);
    assert_eq!(cfg.tracks[0].ease, Ease::AccelerateDecelerate);
    assert_eq!(cfg.tracks[1].ease, Ease::Accelerate);

    let animator = cfg.build_animator().unwrap();
    assert_eq!(animator.preset(), None);
    assert_eq!(animator.tracks(), cfg.tracks.as_slice());
}

#[test]
fn build_animator_merges_tracks_into_preset() {
    let mut cfg = WaveConfig::new(Canvas::new(10, 10));
    assert!(cfg.build_animator().is_none());

    cfg.animator = Some(AnimatorPreset::BackgroundRipple { shift_ms: 500 });
    cfg.tracks = vec![RatioTrack {
        ratio: Ratio::Amplitude,
        from: 0.1,
        to: 0.2,
        duration_ms: 900,
        ease: Ease::Accelerate,
        repeat: Repeat::Reverse,
    }];
    let animator = cfg.build_animator().unwrap();
    assert_eq!(animator.tracks().len(), 2);
    assert_eq!(animator.tracks()[1], cfg.tracks[0]);
}

#[test]
fn validate_rejects_bad_custom_track() {
    let mut cfg = WaveConfig::new(Canvas::new(10, 10));
    cfg.tracks = vec![RatioTrack {
        ratio: Ratio::WaveShift,
        from: 0.0,
        to: f32::NAN,
        duration_ms: 100,
        ease: Ease::Linear,
        repeat: Repeat::Once,
    }];
    let err = cfg.validate().unwrap_err();
    assert!(matches!(err, WaveError::Animation(_)));
}
