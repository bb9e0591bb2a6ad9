use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Axis-aligned bounding box of the foreground pixels of a mask, in pixel indices.
/// The minimum bounds are inclusive, the maximum bounds exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MaskBBox {
    pub row_min: usize,
    pub col_min: usize,
    pub row_max: usize,
    pub col_max: usize,
}

impl MaskBBox {
    pub fn new(row_min: usize, col_min: usize, row_max: usize, col_max: usize) -> Self {
        debug_assert!(
            row_min < row_max && col_min < col_max,
            "invalid MaskBBox, row_min: {row_min}, row_max: {row_max}, col_min: {col_min}, col_max: {col_max}"
        );
        MaskBBox {
            row_min,
            col_min,
            row_max,
            col_max,
        }
    }

    pub fn height(&self) -> usize {
        self.row_max - self.row_min
    }

    pub fn width(&self) -> usize {
        self.col_max - self.col_min
    }

    /// Returns the smallest bounding box containing both `self` and `other`
    pub fn union(&self, other: &MaskBBox) -> MaskBBox {
        MaskBBox::new(
            self.row_min.min(other.row_min),
            self.col_min.min(other.col_min),
            self.row_max.max(other.row_max),
            self.col_max.max(other.col_max),
        )
    }
}

impl Display for MaskBBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "rows [{}, {}), cols [{}, {})",
            self.row_min, self.row_max, self.col_min, self.col_max
        )
    }
}
