use crate::color::{Color, ColorClassifier};
use crate::image::RasterImage;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Per-pixel background classification of a whole image.
#[derive(Clone, Debug)]
pub struct BackgroundMask {
    w: usize,
    bits: Vec<bool>,
}

impl BackgroundMask {
    /// Classify every pixel of `image` against `reference`.
    pub fn compute(image: &RasterImage, reference: Color, threshold: f32) -> Self {
        let classifier = ColorClassifier::new(reference, threshold);
        let mut bits = vec![false; image.w * image.h];
        if !image.is_empty() {
            classify_rows(image, &classifier, &mut bits);
        }
        Self { w: image.w, bits }
    }

    #[inline]
    pub fn is_background(&self, x: usize, y: usize) -> bool {
        self.bits[y * self.w + x]
    }

    #[inline]
    pub fn row(&self, y: usize) -> &[bool] {
        &self.bits[y * self.w..(y + 1) * self.w]
    }

    /// Number of background-like pixels.
    pub fn count(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }
}

fn classify_rows(image: &RasterImage, classifier: &ColorClassifier, bits: &mut [bool]) {
    let w = image.w;
    let classify_row = |(src, dst): (&[Color], &mut [bool])| {
        for (c, bit) in src.iter().zip(dst.iter_mut()) {
            *bit = classifier.is_background(*c);
        }
    };
    #[cfg(feature = "parallel")]
    {
        image
            .data
            .par_chunks(image.stride)
            .map(|row| &row[..w])
            .zip(bits.par_chunks_mut(w))
            .for_each(classify_row);
    }
    #[cfg(not(feature = "parallel"))]
    {
        image
            .data
            .chunks(image.stride)
            .map(|row| &row[..w])
            .zip(bits.chunks_mut(w))
            .for_each(classify_row);
    }
}
