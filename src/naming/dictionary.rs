//! Stage 2: nearest-match lookup in the extended color dictionary
//!
//! The dictionary is a small curated set of everyday color names. A query
//! pixel matches the entry with the smallest Euclidean RGB distance, provided
//! that distance is within the caller's tolerance. Declaration order is part
//! of the dictionary contract: ties resolve to the earlier entry.

use crate::frame::Pixel;
use serde::{Deserialize, Serialize};

/// A single named reference color
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedColorEntry {
    pub name: String,
    pub rgb: Pixel,
}

impl NamedColorEntry {
    pub fn new(name: impl Into<String>, rgb: Pixel) -> Self {
        Self {
            name: name.into(),
            rgb,
        }
    }
}

/// Builtin entries, in declaration order
///
/// `tan` and `chocolate` share an RGB value in the upstream table; `tan` is
/// declared first and therefore wins ties.
const BUILTIN: &[(&str, Pixel)] = &[
    ("black", [0, 0, 0]),
    ("white", [255, 255, 255]),
    ("red", [255, 0, 0]),
    ("lime", [0, 255, 0]),
    ("blue", [0, 0, 255]),
    ("yellow", [255, 255, 0]),
    ("cyan", [0, 255, 255]),
    ("magenta", [255, 0, 255]),
    ("silver", [192, 192, 192]),
    ("gray", [128, 128, 128]),
    ("maroon", [128, 0, 0]),
    ("olive", [128, 128, 0]),
    ("green", [0, 128, 0]),
    ("purple", [128, 0, 128]),
    ("teal", [0, 128, 128]),
    ("navy", [0, 0, 128]),
    ("orange", [255, 165, 0]),
    ("pink", [255, 192, 203]),
    ("brown", [165, 42, 42]),
    ("gold", [255, 215, 0]),
    ("beige", [245, 245, 220]),
    ("coral", [255, 127, 80]),
    ("indigo", [75, 0, 130]),
    ("violet", [238, 130, 238]),
    ("crimson", [220, 20, 60]),
    ("salmon", [250, 128, 114]),
    ("khaki", [240, 230, 140]),
    ("plum", [221, 160, 221]),
    ("orchid", [218, 112, 214]),
    ("tan", [210, 105, 30]),
    ("azure", [240, 255, 255]),
    ("lavender", [230, 230, 250]),
    ("turquoise", [64, 224, 208]),
    ("chocolate", [210, 105, 30]),
    ("firebrick", [178, 34, 34]),
];

/// The builtin extended dictionary as owned entries
pub fn builtin_dictionary() -> Vec<NamedColorEntry> {
    BUILTIN
        .iter()
        .map(|(name, rgb)| NamedColorEntry::new(*name, *rgb))
        .collect()
}

/// Euclidean distance between two pixels in RGB space
pub fn distance(a: Pixel, b: Pixel) -> f32 {
    let dr = a[0] as f32 - b[0] as f32;
    let dg = a[1] as f32 - b[1] as f32;
    let db = a[2] as f32 - b[2] as f32;
    (dr * dr + dg * dg + db * db).sqrt()
}

/// Find the dictionary entry nearest to a pixel, within tolerance
///
/// Scans entries in declaration order tracking the strict minimum distance,
/// so of two equidistant entries the earlier one is kept. Returns `None`
/// when no entry is within tolerance (or the slice is empty); the caller
/// falls through to the descriptive stage rather than reporting a miss.
pub fn nearest(entries: &[NamedColorEntry], pixel: Pixel, tolerance: f32) -> Option<&NamedColorEntry> {
    let mut best: Option<(&NamedColorEntry, f32)> = None;

    for entry in entries {
        let dist = distance(pixel, entry.rgb);
        match best {
            Some((_, best_dist)) if dist >= best_dist => {}
            _ => best = Some((entry, dist)),
        }
    }

    best.filter(|(_, dist)| *dist <= tolerance).map(|(entry, _)| entry)
}
