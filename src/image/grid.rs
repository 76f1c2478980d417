//! Cropping individual icons out of an export sheet.
//!
//! Design tools often export a batch of variants as one sheet: equally sized
//! cells laid out on a regular grid with a fixed gap. The layout is supplied
//! by the caller; cells are returned in row-major order.

use super::RasterImage;
use crate::region::Region;
use serde::Deserialize;

/// Regular grid of square cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct GridLayout {
    /// Top-left corner of the first cell.
    pub origin: [usize; 2],
    /// Cell side length in pixels.
    pub cell: usize,
    /// Gap between neighbouring cells.
    #[serde(default)]
    pub gap: usize,
    pub cols: usize,
    pub rows: usize,
}

impl GridLayout {
    /// Region of cell `(col, row)`, unclipped.
    pub fn cell_region(&self, col: usize, row: usize) -> Option<Region> {
        if self.cell == 0 {
            return None;
        }
        let pitch = self.cell + self.gap;
        let x0 = self.origin[0] + col * pitch;
        let y0 = self.origin[1] + row * pitch;
        Region::new(x0, y0, x0 + self.cell - 1, y0 + self.cell - 1)
    }
}

/// Split `sheet` into its cells. Cells not fully inside the sheet are an error,
/// since a clipped icon would silently lose artwork.
pub fn split_grid(sheet: &RasterImage, layout: &GridLayout) -> Result<Vec<RasterImage>, String> {
    let mut cells = Vec::with_capacity(layout.cols * layout.rows);
    for row in 0..layout.rows {
        for col in 0..layout.cols {
            let region = layout
                .cell_region(col, row)
                .ok_or_else(|| "Grid cell size must be positive".to_string())?;
            if region.x1() >= sheet.w || region.y1() >= sheet.h {
                return Err(format!(
                    "Grid cell ({col}, {row}) at {:?} exceeds sheet {}x{}",
                    <[usize; 4]>::from(region),
                    sheet.w,
                    sheet.h
                ));
            }
            let cell = sheet
                .crop(&region)
                .ok_or_else(|| format!("Grid cell ({col}, {row}) is empty"))?;
            cells.push(cell);
        }
    }
    Ok(cells)
}
