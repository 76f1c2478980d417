use crate::region::Region;
use serde::Serialize;

/// Result of trimming the outer bounds towards the safe inner region.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InnerRegion {
    pub region: Region,
    /// Trimming would have inverted the region. Each inverted axis was
    /// collapsed to the centre line of the bounds instead.
    pub clamped: bool,
}

/// Shrink `bounds` symmetrically by `floor(margin_ratio × dimension)` per side.
///
/// The ratio is clamped to `[0, 0.5]` (NaN counts as 0). Never returns an
/// inverted region.
pub fn inner_region(bounds: &Region, margin_ratio: f32) -> InnerRegion {
    let ratio = if margin_ratio.is_nan() {
        0.0
    } else {
        margin_ratio.clamp(0.0, 0.5)
    };
    let dx = (bounds.width() as f32 * ratio).floor() as usize;
    let dy = (bounds.height() as f32 * ratio).floor() as usize;

    let x0 = bounds.x0() + dx;
    let y0 = bounds.y0() + dy;
    let x1 = bounds.x1().saturating_sub(dx);
    let y1 = bounds.y1().saturating_sub(dy);

    match Region::new(x0, y0, x1, y1) {
        Some(region) => InnerRegion {
            region,
            clamped: false,
        },
        None => {
            let (cx, cy) = bounds.center();
            let region = if x0 <= x1 {
                Region::new(x0, cy, x1, cy)
            } else if y0 <= y1 {
                Region::new(cx, y0, cx, y1)
            } else {
                None
            };
            InnerRegion {
                region: region.unwrap_or_else(|| Region::point(cx, cy)),
                clamped: true,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_by_ratio_of_each_dimension() {
        let bounds = Region::new(220, 220, 803, 803).unwrap();
        let inner = inner_region(&bounds, 0.15);
        assert!(!inner.clamped);
        // 584 * 0.15 = 87.6 -> 87
        assert_eq!(inner.region, Region::new(307, 307, 716, 716).unwrap());
    }

    #[test]
    fn zero_ratio_is_identity() {
        let bounds = Region::new(3, 4, 10, 20).unwrap();
        assert_eq!(inner_region(&bounds, 0.0).region, bounds);
        assert_eq!(inner_region(&bounds, f32::NAN).region, bounds);
    }

    #[test]
    fn oversized_ratio_collapses_instead_of_inverting() {
        let bounds = Region::new(0, 0, 9, 3).unwrap();
        let inner = inner_region(&bounds, 0.5);
        assert!(inner.clamped);
        let r = inner.region;
        assert!(r.x0() <= r.x1() && r.y0() <= r.y1());
        assert!(bounds.contains(r.x0(), r.y0()) && bounds.contains(r.x1(), r.y1()));
    }
}
