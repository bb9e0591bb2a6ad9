use std::cmp::Reverse;
use std::sync::Arc;
use std::time::{Duration, Instant};

use itertools::Itertools;
use log::{debug, info};
use maskpack::entities::{Instance, Layout, PackingVerdict, Placement, Solution};
use maskpack::feasibility;
use maskpack::geometry::{BinaryMask, RTransformation};
use thousands::Separable;

use crate::config::FFConfig;
use crate::opt::search::{SearchOutcome, attempt_place};

/// First-fit optimizer: packs the items largest-first, committing the first valid placement
/// of every item into a single shared occupancy mask. There is no backtracking.
pub struct FFOptimizer {
    pub instance: Instance,
    pub layout: Layout,
    pub config: FFConfig,
    /// Number of (rotation, translation) candidates tested
    pub candidate_counter: usize,
    /// Number of item searches started
    pub search_counter: usize,
}

impl FFOptimizer {
    pub fn new(instance: Instance, config: FFConfig) -> Self {
        if let Err(e) = config.validate() {
            panic!("invalid optimizer configuration: {e}");
        }
        let layout = Layout::new(instance.container.clone());
        Self {
            instance,
            layout,
            config,
            candidate_counter: 0,
            search_counter: 0,
        }
    }

    pub fn solve(&mut self) -> Solution {
        let start = Instant::now();
        let deadline = self
            .config
            .time_limit_s
            .map(|s| start + Duration::from_secs_f64(s));

        //every run starts from the empty container
        self.layout = Layout::new(self.instance.container.clone());
        self.candidate_counter = 0;
        self.search_counter = 0;

        if let Err(reason) = feasibility::check(&self.instance) {
            info!("[FF] instance rejected without search: {reason}");
            return Solution {
                verdict: PackingVerdict::Infeasible(reason),
                layout_snapshot: None,
                time_stamp: Instant::now(),
            };
        }

        let mut verdict = PackingVerdict::Packed;
        let n_items = self.instance.items.len();

        for (i, item_id) in item_placement_order(&self.instance).into_iter().enumerate() {
            let item = self.instance.item(item_id);

            if item.is_degenerate() {
                debug!("[FF] item {item_id} has no area, placed trivially");
                let placement = Placement {
                    item_id,
                    r_transf: RTransformation::empty(),
                };
                self.layout
                    .place_item(placement, Arc::new(BinaryMask::empty(0, 0)));
                continue;
            }

            self.search_counter += 1;
            match attempt_place(
                &mut self.layout,
                item,
                &self.config,
                deadline,
                &mut self.candidate_counter,
            ) {
                SearchOutcome::Found(placement, _) => {
                    info!(
                        "[FF] placing item {}/{} with id {} at [{}]",
                        i + 1,
                        n_items,
                        item_id,
                        placement.r_transf
                    );
                }
                SearchOutcome::Exhausted => {
                    info!("[FF] no placement found for item {item_id}, aborting");
                    verdict = PackingVerdict::PlacementNotFound { item_id };
                    break;
                }
                SearchOutcome::TimedOut => {
                    info!("[FF] time limit reached while placing item {item_id}, aborting");
                    verdict = PackingVerdict::TimedOut { item_id };
                    break;
                }
            }
        }

        let solution = Solution {
            verdict,
            layout_snapshot: Some(self.layout.save()),
            time_stamp: Instant::now(),
        };

        info!(
            "[FF] optimization finished in {:.3}ms ({} candidates)",
            start.elapsed().as_secs_f64() * 1000.0,
            self.candidate_counter.separate_with_commas()
        );
        info!(
            "[FF] {}: {}/{} items placed, {:.3}% of item area, density {:.3}%",
            solution.verdict,
            solution.n_placed(),
            n_items,
            solution.placed_area_fraction(&self.instance) * 100.0,
            self.layout.density() * 100.0
        );

        solution
    }
}

/// Items sorted by descending area. Ties keep their input order.
pub fn item_placement_order(instance: &Instance) -> Vec<usize> {
    (0..instance.items.len())
        .sorted_by_key(|&i| Reverse(instance.item(i).area()))
        .collect_vec()
}
