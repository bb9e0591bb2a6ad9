use maskpack::io::ext_repr::{ExtInstance, ExtSolution};
use serde::{Deserialize, Serialize};

use crate::config::FFConfig;

#[derive(Serialize, Deserialize, Clone)]
pub struct FFOutput {
    #[serde(flatten)]
    pub instance: ExtInstance,
    pub solution: ExtSolution,
    /// Final answer: true iff the instance contains items and all of them were packed
    pub answer: bool,
    /// Number of (rotation, translation) candidates tested
    pub n_candidates: usize,
    pub config: FFConfig,
}
