use super::*;
use crate::foundation::core::Point;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn resting_params_give_identity() {
    let baseline = WaveBaseline::classic();
    let params = WaveParams::from_baseline(&baseline);
    let t = compute_transform(&params, &baseline, Canvas::new(100, 40));
    assert_eq!(t, Affine::IDENTITY);
}

#[test]
fn shift_translates_by_fraction_of_width() {
    let baseline = WaveBaseline::classic();
    let mut params = WaveParams::from_baseline(&baseline);
    params.set_wave_shift_ratio(0.25);
    let t = compute_transform(&params, &baseline, Canvas::new(200, 80));
    assert_eq!(t.translation().x, 50.0);
    assert_eq!(t.translation().y, 0.0);
}

#[test]
fn water_level_translates_relative_to_baked_baseline() {
    let baseline = WaveBaseline::classic();
    let mut params = WaveParams::from_baseline(&baseline);
    params.set_water_level_ratio(0.75);
    let parts = WaveTransform::new(&params, &baseline, Canvas::new(100, 40));
    assert!(approx(parts.translate.y, -10.0));

    params.set_water_level_ratio(0.0);
    let t = compute_transform(&params, &baseline, Canvas::new(100, 40));
    assert!(approx(t.translation().y, 20.0));
}

#[test]
fn amplitude_scales_about_resting_water_line() {
    let baseline = WaveBaseline::classic();
    let mut params = WaveParams::from_baseline(&baseline);
    params.set_amplitude_ratio(0.1);
    let t = compute_transform(&params, &baseline, Canvas::new(100, 40));

    let on_line = t * Point::new(0.0, 20.0);
    assert!(approx(on_line.y, 20.0));
    let crest = t * Point::new(0.0, 22.0);
    assert!(approx(crest.y, 24.0));
    let trough = t * Point::new(10.0, 18.0);
    assert!(approx(trough.x, 10.0));
    assert!(approx(trough.y, 16.0));
}

#[test]
fn wavelength_scales_horizontally() {
    let baseline = WaveBaseline::classic();
    let mut params = WaveParams::from_baseline(&baseline);
    params.set_wave_length_ratio(0.5);
    let parts = WaveTransform::new(&params, &baseline, Canvas::new(100, 40));
    assert!(approx(parts.scale.x, 0.5));
    assert!(approx(parts.scale.y, 1.0));

    let t = parts.to_affine();
    let p = t * Point::new(100.0, 20.0);
    assert!(approx(p.x, 50.0));
}

#[test]
fn swell_baseline_normalizes_against_its_own_amplitude() {
    let baseline = WaveBaseline::swell();
    let mut params = WaveParams::from_baseline(&baseline);
    params.set_amplitude_ratio(0.45);
    let parts = WaveTransform::new(&params, &baseline, Canvas::new(100, 40));
    assert!(approx(parts.scale.y, 1.0));
}

#[test]
fn compute_transform_is_bit_identical_across_calls() {
    let baseline = WaveBaseline::classic();
    let mut params = WaveParams::from_baseline(&baseline);
    params.set_wave_shift_ratio(0.371);
    params.set_water_level_ratio(0.62);
    params.set_amplitude_ratio(0.033);
    params.set_wave_length_ratio(1.3);
    let canvas = Canvas::new(317, 211);

    let a = compute_transform(&params, &baseline, canvas).as_coeffs();
    let b = compute_transform(&params, &baseline, canvas).as_coeffs();
    for (x, y) in a.iter().zip(b.iter()) {
        assert_eq!(x.to_bits(), y.to_bits());
    }
}
