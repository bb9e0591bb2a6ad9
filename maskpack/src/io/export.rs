use std::time::Instant;

use itertools::Itertools;

use crate::entities::{Instance, Solution};
use crate::geometry::BinaryMask;
use crate::io::ext_repr::{ExtMask, ExtPlacement, ExtRle, ExtSolution};

/// Encodes a mask as a row-major run-length encoding, starting with a background run.
pub fn export_mask(mask: &BinaryMask) -> ExtMask {
    let (height, width) = mask.dim();
    let mut counts = vec![];
    let mut current = false;
    let mut run = 0;
    for &p in mask.pixels().iter() {
        if p != current {
            counts.push(run);
            run = 0;
            current = p;
        }
        run += 1;
    }
    counts.push(run);
    ExtMask::Rle(ExtRle {
        height,
        width,
        counts,
    })
}

pub fn export(instance: &Instance, solution: &Solution, epoch: Instant) -> ExtSolution {
    let placements = solution
        .layout_snapshot
        .iter()
        .flat_map(|ls| ls.placements())
        .map(|p| {
            debug_assert!(p.item_id < instance.items.len());
            ExtPlacement {
                item_id: p.item_id as u64,
                angle_deg: p.r_transf.rotation(),
                row: p.r_transf.row(),
                col: p.r_transf.col(),
            }
        })
        .collect_vec();

    ExtSolution {
        success: solution.is_success(),
        verdict: solution.verdict.to_string(),
        placements,
        final_mask: solution
            .layout_snapshot
            .as_ref()
            .map(|ls| export_mask(&ls.occupied)),
        run_time_ms: solution.time_stamp.duration_since(epoch).as_millis() as u64,
    }
}
