//! Canvas reconstructor: rebuild a full-bleed canvas around clean artwork.
//!
//! Given an inner region known to hold only artwork, the stages are:
//!
//! 1. `sample_edge_colors`: the plurality colour just inside each side of the
//!    inner region.
//! 2. `fill_margins`: paint the four bands and four corners outside the inner
//!    region from those colours, hiding the original frame and its rounded
//!    corners.
//! 3. `replace_residual_background`: re-classify the whole canvas against the
//!    reference colour taken from the original framed image and replace any
//!    pixel that still reads as frame.
//!
//! The order is fixed: the residual pass classifies against the original
//! frame colour but reads and writes the already-filled canvas.
//!
//! `crop_and_scale` is the alternative for artwork that tolerates losing a
//! sliver at its borders: the inner region is enlarged to cover the canvas
//! and no new pixels are painted.

mod edge;
mod fill;
mod options;
mod rescale;
mod residual;

pub use edge::{sample_edge_color, sample_edge_colors, Edge, EdgeColors};
pub use fill::fill_margins;
pub use options::{CornerFill, EdgeSampling, ReconstructMode, ResidualSearch};
pub use rescale::crop_and_scale;
pub use residual::{replace_residual_background, ResidualOutcome};
