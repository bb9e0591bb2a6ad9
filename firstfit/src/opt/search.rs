use std::sync::Arc;
use std::time::Instant;

use log::{debug, trace};
use maskpack::entities::{Item, Layout, Placement};
use maskpack::geometry::{BinaryMask, RTransformation, rotate_and_trim};

use crate::config::FFConfig;

/// Result of searching the (rotation × translation) grid for a single item
#[derive(Clone, Debug)]
pub enum SearchOutcome {
    /// First valid placement in grid order, together with the rotated and trimmed footprint
    Found(Placement, Arc<BinaryMask>),
    /// The complete grid was tried without finding a valid placement
    Exhausted,
    /// The deadline passed before the grid was exhausted
    TimedOut,
}

/// Searches the layout for the first valid placement of the item.
/// Angles are tried in ascending order, for every angle rows ascending and then columns ascending.
/// The layout is only read, a found placement still has to be committed.
pub fn search(
    layout: &Layout,
    item: &Item,
    config: &FFConfig,
    deadline: Option<Instant>,
    candidate_counter: &mut usize,
) -> SearchOutcome {
    let (c_height, c_width) = layout.container.dim();
    let step = config.shift_step;

    for angle in config.angles() {
        let Some(footprint) = rotate_and_trim(&item.mask, angle) else {
            debug!("[SEARCH] item {} vanishes at {angle}°, skipping", item.id);
            continue;
        };
        let (f_height, f_width) = footprint.dim();

        //footprints larger than the container yield no candidates
        if f_height > c_height || f_width > c_width {
            trace!(
                "[SEARCH] item {} at {angle}° ({f_height}x{f_width}) exceeds container ({c_height}x{c_width})",
                item.id
            );
            continue;
        }

        for row in (0..=c_height - f_height).step_by(step) {
            for col in (0..=c_width - f_width).step_by(step) {
                if deadline.is_some_and(|d| Instant::now() >= d) {
                    return SearchOutcome::TimedOut;
                }
                *candidate_counter += 1;
                if !layout.collides(&footprint, row, col) {
                    let placement = Placement {
                        item_id: item.id,
                        r_transf: RTransformation::new(angle, (row, col)),
                    };
                    debug!("[SEARCH] item {} fits at [{}]", item.id, placement.r_transf);
                    return SearchOutcome::Found(placement, Arc::new(footprint));
                }
            }
        }
        trace!("[SEARCH] item {} does not fit at {angle}°", item.id);
    }

    SearchOutcome::Exhausted
}

/// Searches a placement for the item and commits it to the layout.
/// If no placement is found, the layout is left untouched.
pub fn attempt_place(
    layout: &mut Layout,
    item: &Item,
    config: &FFConfig,
    deadline: Option<Instant>,
    candidate_counter: &mut usize,
) -> SearchOutcome {
    let outcome = search(layout, item, config, deadline, candidate_counter);
    if let SearchOutcome::Found(placement, footprint) = &outcome {
        layout.place_item(*placement, footprint.clone());
    }
    outcome
}
