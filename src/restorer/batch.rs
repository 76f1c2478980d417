use super::{CanvasRestorer, RestoreResult};
use crate::image::RasterImage;
use log::debug;
use std::time::Instant;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Restore many images with one parameter set. Output order matches input.
///
/// Images are independent, so with the `parallel` feature they are spread
/// across the rayon pool; each call to the restorer stays single-image.
pub fn restore_batch(restorer: &CanvasRestorer, images: Vec<RasterImage>) -> Vec<RestoreResult> {
    let start = Instant::now();
    let count = images.len();

    #[cfg(feature = "parallel")]
    let results: Vec<RestoreResult> = images
        .into_par_iter()
        .map(|img| restorer.process_with_diagnostics(img))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let results: Vec<RestoreResult> = images
        .into_iter()
        .map(|img| restorer.process_with_diagnostics(img))
        .collect();

    let passed = results.iter().filter(|r| r.report.is_pass_through()).count();
    debug!(
        "restore_batch: {count} images ({passed} passed through) in {:.1} ms",
        start.elapsed().as_secs_f64() * 1000.0
    );
    results
}
