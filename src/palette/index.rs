//! Nearest mean color lookup over a fixed palette
//!
//! Mean colors are stored as points of a [`KdTree`] in RGB space and queried
//! by Euclidean distance. Identical colors share one point carrying the lowest
//! palette index among them, so duplicate tiles always resolve to the first
//! one loaded. Between distinct colors at exactly the same distance the tree
//! answers with whichever its search reaches first; that choice is fixed for a
//! given palette, so repeated runs agree.

use crate::palette::tile::MeanColor;
use kd_tree::{KdPoint, KdTree};
use std::collections::HashSet;
use std::fmt;

/// Spatial index answering nearest-color queries by palette position
pub struct ColorIndex {
    colors: Vec<MeanColor>,
    tree: KdTree<ColorPoint>,
}

impl ColorIndex {
    /// Build the tree over `colors`
    ///
    /// Positions in `colors` are the indices returned by queries.
    pub fn new(colors: &[MeanColor]) -> Self {
        let mut seen = HashSet::with_capacity(colors.len());
        let mut points = Vec::with_capacity(colors.len());
        for (entry, color) in colors.iter().enumerate() {
            if seen.insert(color.map(f64::to_bits)) {
                points.push(ColorPoint {
                    color: *color,
                    entry,
                });
            }
        }

        Self {
            colors: colors.to_vec(),
            tree: KdTree::build_by_ordered_float(points),
        }
    }

    /// Number of indexed colors
    pub const fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether the index holds no colors
    pub const fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Indexed colors in palette order
    pub fn colors(&self) -> &[MeanColor] {
        &self.colors
    }

    /// Palette index of a color closest to `query`
    ///
    /// Returns `None` only for an empty index.
    pub fn nearest(&self, query: MeanColor) -> Option<usize> {
        if self.colors.is_empty() {
            return None;
        }
        let query = ColorPoint {
            color: query,
            entry: 0,
        };
        self.tree.nearest(&query).map(|found| found.item.entry)
    }

    /// Closest palette index for an 8-bit RGB pixel
    pub fn nearest_rgb(&self, [r, g, b]: [u8; 3]) -> Option<usize> {
        self.nearest([f64::from(r), f64::from(g), f64::from(b)])
    }

    /// Exhaustive scan returning the lowest palette index at minimum distance
    pub fn nearest_linear(&self, query: MeanColor) -> Option<usize> {
        self.colors
            .iter()
            .enumerate()
            .map(|(entry, color)| (entry, squared_distance(color, &query)))
            .reduce(|best, candidate| if candidate.1 < best.1 { candidate } else { best })
            .map(|(entry, _)| entry)
    }
}

impl fmt::Debug for ColorIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColorIndex")
            .field("colors", &self.colors.len())
            .field("points", &self.tree.len())
            .finish()
    }
}

/// Squared Euclidean distance between two colors
pub fn squared_distance(a: &MeanColor, b: &MeanColor) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| (x - y) * (x - y)).sum()
}

/// Mean color tagged with the palette position it stands for
#[derive(Debug, Clone, Copy)]
struct ColorPoint {
    color: MeanColor,
    entry: usize,
}

impl KdPoint for ColorPoint {
    type Scalar = f64;
    type Dim = typenum::U3;

    fn at(&self, i: usize) -> Self::Scalar {
        self.color.get(i).copied().unwrap_or(0.0)
    }
}
