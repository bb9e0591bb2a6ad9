use itertools::Itertools;
use log::error;

use crate::entities::{Layout, LayoutSnapshot};
use crate::geometry::BinaryMask;

//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks and tests

/// Re-derives the occupancy of a layout from scratch and compares it to the maintained one.
/// Also verifies that no two placed items overlap and that no item covers the container's exterior.
pub fn layout_is_consistent(layout: &Layout) -> bool {
    placements_are_consistent(&layout.save())
}

pub fn placements_are_consistent(ls: &LayoutSnapshot) -> bool {
    let dim = ls.container.dim();
    let exterior = ls.container.base_occupancy();

    if ls.occupied.dim() != dim {
        error!(
            "occupancy dim {:?} differs from container dim {:?}",
            ls.occupied.dim(),
            dim
        );
        return false;
    }

    let mut embedded = Vec::with_capacity(ls.placed_items.len());
    for pi in &ls.placed_items {
        let (row, col) = pi.r_transf.translation;
        if row + pi.footprint.height() > dim.0 || col + pi.footprint.width() > dim.1 {
            error!("item {} at [{}] exceeds the container grid", pi.item_id, pi.r_transf);
            return false;
        }
        embedded.push((pi.item_id, pi.embedded(dim)));
    }

    for (id, mask) in &embedded {
        if mask.intersects(&exterior) {
            error!("item {id} covers the exterior of the container");
            return false;
        }
    }

    for ((id_1, mask_1), (id_2, mask_2)) in embedded.iter().tuple_combinations() {
        if mask_1.intersects(mask_2) {
            error!("items {id_1} and {id_2} overlap");
            return false;
        }
    }

    let rebuilt = embedded
        .iter()
        .fold(exterior.clone(), |mut acc: BinaryMask, (_, m)| {
            acc.or_assign(m);
            acc
        });

    if rebuilt != ls.occupied {
        error!("occupancy does not match the placed items");
        return false;
    }

    true
}
