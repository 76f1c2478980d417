use icon_canvas::synth::{
    emblem_coverage, preset, render_gradient, synthesize_batch, GradientDirection, GradientSpec,
    PRESET_NAMES,
};
use icon_canvas::{Color, SynthError};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn identical_stops_render_solid() {
    let c = Color::new(135, 180, 220);
    let img = render_gradient(64, &GradientSpec::two_stop(c, c, GradientDirection::Vertical))
        .expect("valid gradient");
    assert_eq!(img.count_where(|p| p == c), 64 * 64);
}

#[test]
fn black_to_white_vertical_is_monotone() {
    let spec = GradientSpec::two_stop(Color::BLACK, Color::WHITE, GradientDirection::Vertical);
    let img = render_gradient(100, &spec).expect("valid gradient");
    assert!(img.row(0).iter().all(|&c| c == Color::BLACK));
    assert!(img.row(99).iter().all(|&c| c == Color::WHITE));
    for y in 1..100 {
        let (prev, cur) = (img.get(50, y - 1), img.get(50, y));
        assert!(cur.r >= prev.r && cur.g >= prev.g && cur.b >= prev.b);
        // rows are uniform
        assert!(img.row(y).iter().all(|&c| c == cur));
    }
}

#[test]
fn single_stop_is_rejected() {
    let spec = GradientSpec::new(vec![Color::WHITE], GradientDirection::Diagonal);
    assert_eq!(
        render_gradient(32, &spec),
        Err(SynthError::InvalidGradientSpec { stops: 1 })
    );
}

#[test]
fn every_preset_renders_with_unoccluded_emblem() {
    init_logging();
    let specs: Vec<_> = PRESET_NAMES
        .iter()
        .map(|name| preset(name, 192).expect("known preset"))
        .collect();
    let rendered = synthesize_batch(&specs);
    for ((name, spec), result) in PRESET_NAMES.iter().zip(&specs).zip(rendered) {
        let img = result.unwrap_or_else(|e| panic!("{name}: {e}"));
        assert_eq!((img.w, img.h), (192, 192), "{name}");

        let cov = emblem_coverage(192, 192, &spec.emblem);
        let mut solid = 0;
        for y in 0..192 {
            for x in 0..192 {
                if cov.mask().get(x, y) >= 1.0 {
                    solid += 1;
                    assert_eq!(img.get(x, y), spec.emblem.color, "{name} at ({x}, {y})");
                }
            }
        }
        assert!(solid > 0, "{name}: emblem has no solid pixels");
    }
}

#[test]
fn synthesis_is_deterministic() {
    let spec = preset("white_wave", 96).expect("known preset");
    let a = icon_canvas::synthesize(&spec).expect("valid spec");
    let b = icon_canvas::synthesize(&spec).expect("valid spec");
    assert_eq!(a, b);
    // waves darken the bottom row, the top row keeps the first stop
    assert_eq!(a.get(0, 0), Color::WHITE);
    assert_ne!(a.get(48, 95), spec.gradient.color_at(1.0));
}
