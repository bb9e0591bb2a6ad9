use std::sync::Arc;

use crate::geometry::{BinaryMask, RTransformation};

/// Describes where and how an item is placed in the container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Placement {
    pub item_id: usize,
    pub r_transf: RTransformation,
}

/// An item committed to a [`Layout`](crate::entities::Layout).
#[derive(Clone, Debug)]
pub struct PlacedItem {
    pub item_id: usize,
    pub r_transf: RTransformation,
    /// Rotated and trimmed mask of the item. Its top-left corner lies at the translation of `r_transf`.
    /// Blank (0×0) for degenerate items.
    pub footprint: Arc<BinaryMask>,
}

impl PlacedItem {
    pub fn new(placement: Placement, footprint: Arc<BinaryMask>) -> Self {
        PlacedItem {
            item_id: placement.item_id,
            r_transf: placement.r_transf,
            footprint,
        }
    }

    pub fn placement(&self) -> Placement {
        Placement {
            item_id: self.item_id,
            r_transf: self.r_transf,
        }
    }

    /// The footprint embedded in a grid of the container's dimensions
    pub fn embedded(&self, (height, width): (usize, usize)) -> BinaryMask {
        BinaryMask::embed(
            &self.footprint,
            self.r_transf.row(),
            self.r_transf.col(),
            height,
            width,
        )
    }
}
