//! Pixel buffers and the export boundary.
//!
//! - `RasterImage`: owned RGB buffer consumed and produced by every stage.
//! - `ImageF32`: single-channel coverage buffer used while rasterising shapes.
//! - `grid`: cropping cells out of multi-icon export sheets.
//! - `io`: PNG load/save and JSON report helpers for the demo tools.
pub mod f32;
pub mod grid;
pub mod io;
pub mod rgb;

pub use self::f32::ImageF32;
pub use self::grid::{split_grid, GridLayout};
pub use self::rgb::RasterImage;
