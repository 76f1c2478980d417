use super::options::EdgeSampling;
use crate::color::Color;
use crate::image::RasterImage;
use crate::region::Region;
use serde::Serialize;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

const MIN_LUMA: f32 = 0.05;
const MAX_LUMA: f32 = 0.95;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

/// Representative colour per side of the inner region.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct EdgeColors {
    pub top: Color,
    pub bottom: Color,
    pub left: Color,
    pub right: Color,
}

/// Most frequent colour among samples taken just inside `edge` of `inner`.
///
/// Points are taken every `sampling.step` pixels along the edge and
/// `sampling.depth` pixels inward (never leaving `inner`). Ties resolve to the
/// colour encountered first in scan order. A plurality vote keeps thin accent
/// strokes from shifting the result the way an average would.
///
/// When `inner` has no part inside the image there is nothing to sample and
/// `Color::NEUTRAL_GRAY` is returned.
pub fn sample_edge_color(
    image: &RasterImage,
    inner: &Region,
    edge: Edge,
    sampling: &EdgeSampling,
) -> Color {
    let samples = edge_samples(image, inner, edge, sampling);
    let pick = if sampling.exclude_extremes {
        let filtered: Vec<Color> = samples
            .iter()
            .copied()
            .filter(|c| {
                let l = c.luma();
                l > MIN_LUMA && l < MAX_LUMA
            })
            .collect();
        most_frequent(&filtered).or_else(|| most_frequent(&samples))
    } else {
        most_frequent(&samples)
    };
    pick.unwrap_or(Color::NEUTRAL_GRAY)
}

/// Sample all four edges.
pub fn sample_edge_colors(
    image: &RasterImage,
    inner: &Region,
    sampling: &EdgeSampling,
) -> EdgeColors {
    EdgeColors {
        top: sample_edge_color(image, inner, Edge::Top, sampling),
        bottom: sample_edge_color(image, inner, Edge::Bottom, sampling),
        left: sample_edge_color(image, inner, Edge::Left, sampling),
        right: sample_edge_color(image, inner, Edge::Right, sampling),
    }
}

fn edge_samples(
    image: &RasterImage,
    inner: &Region,
    edge: Edge,
    sampling: &EdgeSampling,
) -> Vec<Color> {
    let Some(r) = inner.clip(image.w, image.h) else {
        return Vec::new();
    };
    let step = sampling.step.max(1);
    let depth = sampling.depth.max(1);
    let mut samples = Vec::new();
    match edge {
        Edge::Top | Edge::Bottom => {
            let depth = depth.min(r.height());
            for x in (r.x0()..=r.x1()).step_by(step) {
                for d in 0..depth {
                    let y = if edge == Edge::Top { r.y0() + d } else { r.y1() - d };
                    samples.push(image.get(x, y));
                }
            }
        }
        Edge::Left | Edge::Right => {
            let depth = depth.min(r.width());
            for y in (r.y0()..=r.y1()).step_by(step) {
                for d in 0..depth {
                    let x = if edge == Edge::Left { r.x0() + d } else { r.x1() - d };
                    samples.push(image.get(x, y));
                }
            }
        }
    }
    samples
}

/// Plurality vote; the earliest colour wins ties.
pub(crate) fn most_frequent(samples: &[Color]) -> Option<Color> {
    let mut slots: HashMap<Color, usize> = HashMap::new();
    let mut tally: Vec<(Color, usize)> = Vec::new();
    for &c in samples {
        match slots.entry(c) {
            Entry::Occupied(e) => tally[*e.get()].1 += 1,
            Entry::Vacant(e) => {
                e.insert(tally.len());
                tally.push((c, 1));
            }
        }
    }
    let mut best: Option<(Color, usize)> = None;
    for &(c, n) in &tally {
        if best.map_or(true, |(_, m)| n > m) {
            best = Some((c, n));
        }
    }
    best.map(|(c, _)| c)
}
