//! Owned RGB raster in row-major layout (stride == width).
//!
//! This is the buffer every stage consumes and produces. Pixels are stored as
//! [`Color`] values so classification and fills work on whole rows or the
//! whole slice at once instead of per-pixel get/set calls.
use crate::color::Color;
use crate::region::Region;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterImage {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Number of pixels between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order
    pub data: Vec<Color>,
}

impl RasterImage {
    /// Construct a `w × h` image filled with `color`.
    pub fn filled(w: usize, h: usize, color: Color) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![color; w * h],
        }
    }

    /// Construct a black `w × h` image.
    pub fn new(w: usize, h: usize) -> Self {
        Self::filled(w, h, Color::BLACK)
    }

    /// Wrap tightly packed RGB bytes.
    pub fn from_rgb_bytes(w: usize, h: usize, bytes: &[u8]) -> Result<Self, String> {
        Self::from_packed(w, h, bytes, 3)
    }

    /// Wrap tightly packed RGBA bytes; alpha is discarded.
    pub fn from_rgba_bytes(w: usize, h: usize, bytes: &[u8]) -> Result<Self, String> {
        Self::from_packed(w, h, bytes, 4)
    }

    fn from_packed(w: usize, h: usize, bytes: &[u8], channels: usize) -> Result<Self, String> {
        let expected = w * h * channels;
        if bytes.len() != expected {
            return Err(format!(
                "buffer holds {} bytes, expected {expected} for {w}x{h} with {channels} channels",
                bytes.len()
            ));
        }
        let data = bytes
            .chunks_exact(channels)
            .map(|px| Color::new(px[0], px[1], px[2]))
            .collect();
        Ok(Self {
            w,
            h,
            stride: w,
            data,
        })
    }

    /// Flatten into tightly packed RGB bytes.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.w * self.h * 3);
        for row in self.rows() {
            for c in row {
                out.extend_from_slice(&c.to_array());
            }
        }
        out
    }

    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }

    #[inline]
    /// Get the pixel at (x, y).
    pub fn get(&self, x: usize, y: usize) -> Color {
        self.data[self.idx(x, y)]
    }

    /// Get the pixel at signed coordinates, `None` outside the image.
    #[inline]
    pub fn get_checked(&self, x: isize, y: isize) -> Option<Color> {
        if x < 0 || y < 0 || x as usize >= self.w || y as usize >= self.h {
            return None;
        }
        Some(self.get(x as usize, y as usize))
    }

    #[inline]
    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: usize, y: usize, c: Color) {
        let i = self.idx(x, y);
        self.data[i] = c;
    }

    #[inline]
    pub fn row(&self, y: usize) -> &[Color] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }

    #[inline]
    pub fn row_mut(&mut self, y: usize) -> &mut [Color] {
        let start = y * self.stride;
        let end = start + self.w;
        &mut self.data[start..end]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Color]> + '_ {
        (0..self.h).map(move |y| self.row(y))
    }

    /// Paint every pixel of `region` (clipped to the image) with `color`.
    pub fn fill_region(&mut self, region: &Region, color: Color) {
        let Some(r) = region.clip(self.w, self.h) else {
            return;
        };
        for y in r.y0()..=r.y1() {
            self.row_mut(y)[r.x0()..=r.x1()].fill(color);
        }
    }

    /// Count pixels satisfying `pred`.
    pub fn count_where(&self, pred: impl Fn(Color) -> bool) -> usize {
        self.rows()
            .map(|row| row.iter().filter(|&&c| pred(c)).count())
            .sum()
    }

    /// Copy out `region` (clipped to the image) as a new image.
    pub fn crop(&self, region: &Region) -> Option<RasterImage> {
        let r = region.clip(self.w, self.h)?;
        let mut data = Vec::with_capacity(r.area());
        for y in r.y0()..=r.y1() {
            data.extend_from_slice(&self.row(y)[r.x0()..=r.x1()]);
        }
        Some(RasterImage {
            w: r.width(),
            h: r.height(),
            stride: r.width(),
            data,
        })
    }
}

impl From<&image::RgbImage> for RasterImage {
    fn from(img: &image::RgbImage) -> Self {
        let w = img.width() as usize;
        let h = img.height() as usize;
        let data = img.pixels().map(|&px| Color::from(px)).collect();
        Self {
            w,
            h,
            stride: w,
            data,
        }
    }
}

impl From<&RasterImage> for image::RgbImage {
    fn from(img: &RasterImage) -> Self {
        let mut out = image::RgbImage::new(img.w as u32, img.h as u32);
        for (y, row) in img.rows().enumerate() {
            for (x, &c) in row.iter().enumerate() {
                out.put_pixel(x as u32, y as u32, c.into());
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgba_bytes_drop_alpha() {
        let bytes = [1, 2, 3, 0, 4, 5, 6, 255];
        let img = RasterImage::from_rgba_bytes(2, 1, &bytes).unwrap();
        assert_eq!(img.get(0, 0), Color::new(1, 2, 3));
        assert_eq!(img.get(1, 0), Color::new(4, 5, 6));
        assert_eq!(img.to_rgb_bytes(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn mismatched_buffer_is_rejected() {
        assert!(RasterImage::from_rgb_bytes(2, 2, &[0; 11]).is_err());
    }

    #[test]
    fn crop_and_fill_region_clip() {
        let mut img = RasterImage::filled(8, 6, Color::WHITE);
        img.fill_region(&Region::new(6, 4, 20, 20).unwrap(), Color::BLACK);
        assert_eq!(img.count_where(|c| c == Color::BLACK), 4);
        let cell = img.crop(&Region::new(5, 3, 7, 5).unwrap()).unwrap();
        assert_eq!((cell.w, cell.h), (3, 3));
        assert_eq!(cell.get(2, 2), Color::BLACK);
        assert_eq!(cell.get(0, 0), Color::WHITE);
    }
}
