//! Separable blur for coverage masks (drop shadows).
use crate::image::ImageF32;

/// A separable 1D filter applied along rows then columns.
pub trait SeparableFilter {
    /// 1D taps in left-to-right order, centred on the middle tap.
    fn taps(&self) -> &[f32];
}

/// Normalised Gaussian kernel with radius `ceil(3σ)`.
#[derive(Clone, Debug, PartialEq)]
pub struct GaussianKernel {
    taps: Vec<f32>,
}

impl GaussianKernel {
    pub fn new(sigma: f32) -> Self {
        if sigma.is_nan() || sigma <= 0.0 {
            return Self { taps: vec![1.0] };
        }
        let radius = (3.0 * sigma).ceil() as isize;
        let denom = 2.0 * sigma * sigma;
        let mut taps: Vec<f32> = (-radius..=radius)
            .map(|i| (-((i * i) as f32) / denom).exp())
            .collect();
        let sum: f32 = taps.iter().sum();
        for t in &mut taps {
            *t /= sum;
        }
        Self { taps }
    }

    pub fn radius(&self) -> usize {
        self.taps.len() / 2
    }
}

impl SeparableFilter for GaussianKernel {
    #[inline]
    fn taps(&self) -> &[f32] {
        &self.taps
    }
}

/// Convolve `src` with `filter` horizontally then vertically. Borders replicate
/// the outermost sample.
pub fn blur_separable<F: SeparableFilter>(src: &ImageF32, filter: &F) -> ImageF32 {
    let taps = filter.taps();
    if taps.len() <= 1 || src.w == 0 || src.h == 0 {
        return src.clone();
    }
    let radius = taps.len() / 2;

    let mut horiz = ImageF32::new(src.w, src.h);
    for y in 0..src.h {
        filter_row(src.row(y), horiz.row_mut(y), taps, radius);
    }

    let mut out = ImageF32::new(src.w, src.h);
    let mut column = vec![0.0f32; src.h];
    let mut filtered = vec![0.0f32; src.h];
    for x in 0..src.w {
        for (y, v) in column.iter_mut().enumerate() {
            *v = horiz.get(x, y);
        }
        filter_row(&column, &mut filtered, taps, radius);
        for (y, &v) in filtered.iter().enumerate() {
            out.set(x, y, v);
        }
    }
    out
}

fn filter_row(row: &[f32], out: &mut [f32], taps: &[f32], radius: usize) {
    let n = row.len();
    for (x, dst) in out.iter_mut().enumerate() {
        let mut acc = 0.0f32;
        for (k, &tap) in taps.iter().enumerate() {
            let offset = k as isize - radius as isize;
            acc += tap * row[clamp_index(x as isize + offset, n)];
        }
        *dst = acc;
    }
}

fn clamp_index(idx: isize, upper: usize) -> usize {
    if upper == 0 {
        return 0;
    }
    if idx < 0 {
        0
    } else if (idx as usize) >= upper {
        upper - 1
    } else {
        idx as usize
    }
}
