//! Named icon variants.
//!
//! Each preset is a two-stop gradient, an optional motif in an accent colour,
//! and a centred cross. Every preset draws the cross with a shadow except
//! `royal_purple`.

use super::decoration::{DecorationKind, DecorationSpec};
use super::emblem::EmblemSpec;
use super::gradient::{GradientDirection, GradientSpec};
use crate::color::Color;
use serde::{Deserialize, Serialize};

pub const DEFAULT_ICON_SIZE: usize = 512;

/// Full description of one synthesised icon.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IconSpec {
    #[serde(default = "default_size")]
    pub size: usize,
    pub gradient: GradientSpec,
    #[serde(default)]
    pub decoration: Option<DecorationSpec>,
    #[serde(default)]
    pub emblem: EmblemSpec,
}

fn default_size() -> usize {
    DEFAULT_ICON_SIZE
}

pub const PRESET_NAMES: [&str; 9] = [
    "navy_stars",
    "cream_olive",
    "gold_luxe",
    "white_wave",
    "teal_pink",
    "ocean_clouds",
    "night_gold",
    "sunset_coral",
    "royal_purple",
];

struct Palette {
    from: [u8; 3],
    to: [u8; 3],
    cross: [u8; 3],
    accent: [u8; 3],
    motif: Option<DecorationKind>,
}

fn palette(name: &str) -> Option<Palette> {
    use DecorationKind::*;
    let p = |from, to, cross, accent, motif| Palette {
        from,
        to,
        cross,
        accent,
        motif,
    };
    Some(match name {
        "navy_stars" => p(
            [26, 39, 68],
            [15, 25, 45],
            [212, 165, 116],
            [212, 165, 116],
            Some(StarRing),
        ),
        "cream_olive" => p(
            [245, 237, 228],
            [235, 220, 200],
            [120, 90, 60],
            [160, 140, 100],
            Some(OliveLeaves),
        ),
        "gold_luxe" => p([220, 180, 120], [180, 140, 80], [100, 70, 40], [255, 220, 160], None),
        "white_wave" => p(
            [255, 255, 255],
            [248, 248, 252],
            [212, 165, 116],
            [200, 210, 220],
            Some(Waves),
        ),
        "teal_pink" => p([91, 191, 186], [255, 182, 193], [255, 255, 255], [255, 255, 255], None),
        "ocean_clouds" => p(
            [135, 180, 220],
            [100, 150, 200],
            [255, 255, 255],
            [255, 255, 255],
            Some(Clouds),
        ),
        "night_gold" => p(
            [45, 27, 78],
            [25, 15, 50],
            [232, 196, 124],
            [232, 196, 124],
            Some(StarRing),
        ),
        "sunset_coral" => p(
            [255, 140, 105],
            [255, 180, 150],
            [255, 255, 255],
            [255, 200, 180],
            None,
        ),
        "royal_purple" => p([107, 76, 138], [80, 50, 110], [212, 165, 116], [180, 150, 200], None),
        _ => return None,
    })
}

/// Look up a named preset at the given canvas size.
pub fn preset(name: &str, size: usize) -> Option<IconSpec> {
    let pal = palette(name)?;
    let direction = if name == "teal_pink" {
        GradientDirection::Diagonal
    } else {
        GradientDirection::Vertical
    };
    Some(IconSpec {
        size,
        gradient: GradientSpec::two_stop(pal.from.into(), pal.to.into(), direction),
        decoration: pal.motif.map(|kind| DecorationSpec {
            kind,
            color: Color::from(pal.accent),
        }),
        emblem: EmblemSpec::cross(pal.cross.into(), name != "royal_purple"),
    })
}
