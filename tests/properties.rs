use icon_canvas::classify::{find_bounds, inner_region, SamplingDensity};
use icon_canvas::reconstruct::{
    fill_margins, replace_residual_background, sample_edge_colors, CornerFill, EdgeSampling,
    ResidualSearch,
};
use icon_canvas::{Color, RasterImage, Region};
use proptest::prelude::*;

const BACKGROUND: Color = Color::new(226, 226, 231);
const CONTENT: Color = Color::new(26, 39, 68);
const THRESHOLD: f32 = 30.0;

fn rect_in(size: usize) -> impl Strategy<Value = Region> {
    (0..size, 0..size, 0..size, 0..size).prop_map(|(a, b, c, d)| {
        Region::new(a.min(c), b.min(d), a.max(c), b.max(d)).expect("ordered corners")
    })
}

fn framed(size: usize, rect: &Region) -> RasterImage {
    let mut img = RasterImage::filled(size, size, BACKGROUND);
    img.fill_region(rect, CONTENT);
    img
}

proptest! {
    #[test]
    fn inner_region_is_never_inverted(bounds in rect_in(2048), ratio in 0.0f32..=0.49) {
        let inner = inner_region(&bounds, ratio);
        prop_assert!(!inner.clamped);
        let r = inner.region;
        prop_assert!(r.x0() <= r.x1() && r.y0() <= r.y1());
        prop_assert!(r.x0() >= bounds.x0() && r.x1() <= bounds.x1());
        prop_assert!(r.y0() >= bounds.y0() && r.y1() <= bounds.y1());
    }

    #[test]
    fn oversized_ratio_clamps_inside_bounds(bounds in rect_in(512), ratio in 0.5f32..4.0) {
        let r = inner_region(&bounds, ratio).region;
        prop_assert!(bounds.contains(r.x0(), r.y0()) && bounds.contains(r.x1(), r.y1()));
    }

    #[test]
    fn exact_bounds_recover_rectangle(rect in rect_in(48)) {
        let img = framed(48, &rect);
        let found = find_bounds(&img, BACKGROUND, THRESHOLD, SamplingDensity::Exact);
        prop_assert_eq!(found, Some(rect));
    }

    #[test]
    fn stepped_bounds_within_step(rect in rect_in(64), step in 2usize..6) {
        prop_assume!(rect.width() >= step && rect.height() >= step);
        let img = framed(64, &rect);
        let found = find_bounds(&img, BACKGROUND, THRESHOLD, SamplingDensity::Stepped(step));
        prop_assert!(found.is_some());
        let found = found.unwrap();
        prop_assert!(found.x0() >= rect.x0() && found.x0() < rect.x0() + step);
        prop_assert!(found.y0() >= rect.y0() && found.y0() < rect.y0() + step);
        prop_assert!(found.x1() <= rect.x1() && found.x1() + step > rect.x1());
        prop_assert!(found.y1() <= rect.y1() && found.y1() + step > rect.y1());
    }

    #[test]
    fn reconstruction_leaves_no_background(rect in rect_in(40), ratio in 0.0f32..0.3) {
        let mut canvas = framed(40, &rect);
        let bounds = find_bounds(&canvas, BACKGROUND, THRESHOLD, SamplingDensity::Exact)
            .expect("content present");
        let inner = inner_region(&bounds, ratio).region;
        let edges = sample_edge_colors(&canvas, &inner, &EdgeSampling::default());
        fill_margins(&mut canvas, &inner, &edges, CornerFill::Nearest);
        replace_residual_background(&mut canvas, BACKGROUND, THRESHOLD, &ResidualSearch::default());

        match find_bounds(&canvas, BACKGROUND, THRESHOLD, SamplingDensity::Exact) {
            None => {}
            Some(r) => prop_assert!(r.area() * 100 >= 95 * 40 * 40),
        }
    }
}
