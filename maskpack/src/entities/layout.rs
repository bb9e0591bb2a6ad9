use std::sync::Arc;

use log::trace;

use crate::entities::{Container, PlacedItem, Placement};
use crate::geometry::BinaryMask;
use crate::util::assertions;

/// A [`Layout`] is the occupancy state of a [`Container`] while items are being packed into it.
/// The occupancy mask is `true` wherever space is unavailable: outside the container or covered by a placed item.
#[derive(Clone, Debug)]
pub struct Layout {
    pub container: Container,
    occupied: BinaryMask,
    placed_items: Vec<PlacedItem>,
}

impl Layout {
    pub fn new(container: Container) -> Self {
        let occupied = container.base_occupancy();
        Layout {
            container,
            occupied,
            placed_items: vec![],
        }
    }

    pub fn from_snapshot(ls: &LayoutSnapshot) -> Self {
        Layout {
            container: ls.container.clone(),
            occupied: ls.occupied.clone(),
            placed_items: ls.placed_items.clone(),
        }
    }

    pub fn save(&self) -> LayoutSnapshot {
        LayoutSnapshot {
            container: self.container.clone(),
            occupied: self.occupied.clone(),
            placed_items: self.placed_items.clone(),
        }
    }

    /// Checks whether `footprint` with its top-left corner at `(row, col)` lies within the grid
    pub fn fits_within(&self, footprint: &BinaryMask, row: usize, col: usize) -> bool {
        let (h, w) = self.occupied.dim();
        row + footprint.height() <= h && col + footprint.width() <= w
    }

    /// Checks whether `footprint` at `(row, col)` would cover any unavailable pixel.
    /// Footprints sticking out of the grid always collide.
    pub fn collides(&self, footprint: &BinaryMask, row: usize, col: usize) -> bool {
        !self.fits_within(footprint, row, col) || self.occupied.overlaps_at(footprint, row, col)
    }

    /// Commits a placement: its footprint is marked as unavailable from now on.
    pub fn place_item(&mut self, placement: Placement, footprint: Arc<BinaryMask>) -> &PlacedItem {
        let (row, col) = placement.r_transf.translation;
        debug_assert!(
            !self.collides(&footprint, row, col),
            "placement {} collides",
            placement.r_transf
        );
        self.occupied.or_at(&footprint, row, col);
        self.placed_items.push(PlacedItem::new(placement, footprint));
        trace!(
            "[LAYOUT] committed item {} at [{}], {} items placed",
            placement.item_id,
            placement.r_transf,
            self.placed_items.len()
        );
        debug_assert!(assertions::layout_is_consistent(self));
        self.placed_items.last().expect("item was just pushed")
    }

    pub fn occupied(&self) -> &BinaryMask {
        &self.occupied
    }

    pub fn placed_items(&self) -> &[PlacedItem] {
        &self.placed_items
    }

    /// Number of pixels covered by placed items
    pub fn placed_item_area(&self) -> usize {
        self.placed_items.iter().map(|pi| pi.footprint.area()).sum()
    }

    /// Fraction of the container's interior covered by placed items
    pub fn density(&self) -> f32 {
        match self.container.area() {
            0 => 0.0,
            area => self.placed_item_area() as f32 / area as f32,
        }
    }
}

/// Immutable and compact representation of a [`Layout`].
#[derive(Clone, Debug)]
pub struct LayoutSnapshot {
    pub container: Container,
    /// Occupancy of the container at the time of the snapshot
    pub occupied: BinaryMask,
    /// Placed items, in the order they were committed
    pub placed_items: Vec<PlacedItem>,
}

impl LayoutSnapshot {
    pub fn placements(&self) -> impl Iterator<Item = Placement> + '_ {
        self.placed_items.iter().map(|pi| pi.placement())
    }

    pub fn density(&self) -> f32 {
        Layout::from_snapshot(self).density()
    }
}
