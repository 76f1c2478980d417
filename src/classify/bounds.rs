use crate::color::{Color, ColorClassifier};
use crate::image::RasterImage;
use crate::region::Region;
use serde::{Deserialize, Serialize};

/// How densely `find_bounds` scans the image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SamplingDensity {
    /// Every pixel of every row.
    #[default]
    Exact,
    /// Every n-th pixel of every n-th row. Bounds may fall short by `n - 1`.
    Stepped(usize),
}

impl SamplingDensity {
    fn step(self) -> usize {
        match self {
            SamplingDensity::Exact => 1,
            SamplingDensity::Stepped(n) => n.max(1),
        }
    }
}

/// Minimal rectangle containing every pixel whose distance to `reference` is
/// at least `threshold`. `None` when the image holds no such pixel.
pub fn find_bounds(
    image: &RasterImage,
    reference: Color,
    threshold: f32,
    density: SamplingDensity,
) -> Option<Region> {
    if image.is_empty() {
        return None;
    }
    let classifier = ColorClassifier::new(reference, threshold);
    let step = density.step();
    let mut acc: Option<Region> = None;

    for y in (0..image.h).step_by(step) {
        let row = image.row(y);
        let span = if step == 1 {
            row_span_exact(row, &classifier)
        } else {
            row_span_stepped(row, &classifier, step)
        };
        if let Some((first, last)) = span {
            let found = Region::new(first, y, last, y)?;
            acc = Some(match acc {
                Some(r) => r.union(&found),
                None => found,
            });
        }
    }
    acc
}

fn row_span_exact(row: &[Color], classifier: &ColorClassifier) -> Option<(usize, usize)> {
    let first = row.iter().position(|&c| !classifier.is_background(c))?;
    let last = row.iter().rposition(|&c| !classifier.is_background(c))?;
    Some((first, last))
}

fn row_span_stepped(
    row: &[Color],
    classifier: &ColorClassifier,
    step: usize,
) -> Option<(usize, usize)> {
    let mut span: Option<(usize, usize)> = None;
    for x in (0..row.len()).step_by(step) {
        if !classifier.is_background(row[x]) {
            span = Some(match span {
                Some((first, _)) => (first, x),
                None => (x, x),
            });
        }
    }
    span
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRAY: Color = Color::new(226, 226, 231);
    const NAVY: Color = Color::new(20, 30, 80);

    fn framed(size: usize, rect: Region) -> RasterImage {
        let mut img = RasterImage::filled(size, size, GRAY);
        img.fill_region(&rect, NAVY);
        img
    }

    #[test]
    fn solid_image_has_no_bounds() {
        let img = RasterImage::filled(32, 32, GRAY);
        assert_eq!(find_bounds(&img, GRAY, 30.0, SamplingDensity::Exact), None);
        assert_eq!(
            find_bounds(&img, GRAY, 30.0, SamplingDensity::Stepped(4)),
            None
        );
    }

    #[test]
    fn exact_scan_recovers_rectangle() {
        let rect = Region::new(7, 11, 40, 29).unwrap();
        let img = framed(48, rect);
        assert_eq!(
            find_bounds(&img, GRAY, 30.0, SamplingDensity::Exact),
            Some(rect)
        );
    }

    #[test]
    fn stepped_scan_stays_within_step() {
        let rect = Region::new(7, 11, 40, 29).unwrap();
        let img = framed(48, rect);
        let step = 4;
        let found = find_bounds(&img, GRAY, 30.0, SamplingDensity::Stepped(step))
            .expect("foreground present");
        assert!(found.x0() >= rect.x0() && found.x0() - rect.x0() < step);
        assert!(found.y0() >= rect.y0() && found.y0() - rect.y0() < step);
        assert!(found.x1() <= rect.x1() && rect.x1() - found.x1() < step);
        assert!(found.y1() <= rect.y1() && rect.y1() - found.y1() < step);
    }

    #[test]
    fn single_pixel_foreground() {
        let mut img = RasterImage::filled(9, 9, GRAY);
        img.set(4, 6, NAVY);
        assert_eq!(
            find_bounds(&img, GRAY, 20.0, SamplingDensity::Exact),
            Some(Region::point(4, 6))
        );
    }
}
