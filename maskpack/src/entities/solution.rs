use std::fmt::Display;
use std::time::Instant;

use crate::entities::{Instance, LayoutSnapshot};
use crate::feasibility::Infeasibility;

/// Outcome of an attempt to pack all items of an instance
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PackingVerdict {
    /// Every item was placed
    Packed,
    /// The instance was rejected before any search
    Infeasible(Infeasibility),
    /// No valid placement exists for this item on the search grid, given the items placed before it
    PlacementNotFound { item_id: usize },
    /// The time limit expired while searching a placement for this item
    TimedOut { item_id: usize },
}

impl PackingVerdict {
    pub fn is_success(&self) -> bool {
        matches!(self, PackingVerdict::Packed)
    }
}

impl Display for PackingVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PackingVerdict::Packed => write!(f, "all items packed"),
            PackingVerdict::Infeasible(reason) => write!(f, "infeasible: {reason}"),
            PackingVerdict::PlacementNotFound { item_id } => {
                write!(f, "no placement found for item {item_id}")
            }
            PackingVerdict::TimedOut { item_id } => {
                write!(f, "timed out while placing item {item_id}")
            }
        }
    }
}

/// Result of a packing run.
#[derive(Clone, Debug)]
pub struct Solution {
    pub verdict: PackingVerdict,
    /// State of the layout at success or at the first failure.
    /// `None` if the instance was rejected before any search.
    pub layout_snapshot: Option<LayoutSnapshot>,
    /// Instant the solution was created
    pub time_stamp: Instant,
}

impl Solution {
    pub fn is_success(&self) -> bool {
        self.verdict.is_success()
    }

    /// Number of items committed to the layout
    pub fn n_placed(&self) -> usize {
        self.layout_snapshot
            .as_ref()
            .map_or(0, |ls| ls.placed_items.len())
    }

    /// Fraction of the total item area that was placed
    pub fn placed_area_fraction(&self, instance: &Instance) -> f32 {
        let total = instance.total_item_area();
        let placed = self.layout_snapshot.as_ref().map_or(0, |ls| {
            ls.placed_items
                .iter()
                .map(|pi| instance.item(pi.item_id).area())
                .sum::<usize>()
        });
        match total {
            0 => 1.0,
            _ => placed as f32 / total as f32,
        }
    }
}
