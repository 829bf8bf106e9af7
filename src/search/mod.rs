//! Local search algorithms over lattice conformations

pub mod hillclimb;

use crate::conformation::Conformation;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Summary of a finished search run
///
/// The searched conformation itself is mutated in place; the report only
/// describes what happened to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchReport {
    /// Score of the conformation when the run started
    pub initial_score: i64,

    /// Score of the conformation when the run ended
    pub final_score: i64,

    /// Outer improvement attempts actually performed
    pub iterations: usize,

    /// Moves kept (including ties)
    pub accepted: usize,

    /// Moves undone because they worsened the score
    pub reverted: usize,

    /// Pivot indices permanently retired after a geometric failure
    pub poisoned: usize,
}

/// Trait for local search algorithms
pub trait LocalSearch {
    /// Perform up to `iterations` improvement attempts, mutating the
    /// conformation in place
    fn run<C, R>(&self, conformation: &mut C, iterations: usize, rng: &mut R) -> SearchReport
    where
        C: Conformation,
        R: Rng;
}
