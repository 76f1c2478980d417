//! Owned single-channel f32 image in row-major layout (stride == width).
//!
//! Used by the synthesiser as a coverage buffer: each value is the fraction of
//! a pixel covered by a shape, in `[0, 1]`.
#[derive(Clone, Debug)]
pub struct ImageF32 {
    /// Image width in pixels
    pub w: usize,
    /// Image height in pixels
    pub h: usize,
    /// Number of f32 elements between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order
    pub data: Vec<f32>,
}

impl ImageF32 {
    /// Construct a zero-initialized buffer of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![0.0; w * h],
        }
    }
    #[inline]
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[self.idx(x, y)]
    }
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: f32) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }
    /// Union-style write: keep the larger of the stored and the new value.
    #[inline]
    pub fn raise(&mut self, x: usize, y: usize, v: f32) {
        let i = self.idx(x, y);
        if v > self.data[i] {
            self.data[i] = v;
        }
    }
    #[inline]
    pub fn row(&self, y: usize) -> &[f32] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
    #[inline]
    pub fn row_mut(&mut self, y: usize) -> &mut [f32] {
        let start = y * self.stride;
        let end = start + self.w;
        &mut self.data[start..end]
    }
    /// Sum of all values; the covered area in pixels.
    pub fn total(&self) -> f32 {
        self.data.iter().sum()
    }
}
