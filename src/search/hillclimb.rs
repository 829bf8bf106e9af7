//! Randomized hillclimbing over pivot moves
//!
//! Single move per iteration, accept-if-not-worse (ties accepted), and
//! permanent retirement of pivot indices that fail geometrically.

use log::debug;
use rand::Rng;

use crate::conformation::Conformation;
use crate::scoring::ContactModel;
use crate::search::{LocalSearch, SearchReport};

/// Hillclimbing local search
#[derive(Debug, Clone, Default)]
pub struct HillClimb {
    pub model: ContactModel,
}

impl HillClimb {
    /// Create a hillclimber with the default contact model
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a hillclimber with a custom contact model
    pub fn with_model(model: ContactModel) -> Self {
        Self { model }
    }
}

impl LocalSearch for HillClimb {
    /// Run up to `iterations` improvement attempts.
    ///
    /// Each attempt snapshots the conformation, pivots at a random interior
    /// index, and re-scores. A move that fails geometrically retires its index
    /// for the remainder of the run and the attempt is retried at another
    /// index; a move that succeeds but worsens the score is undone, consuming
    /// the attempt. The run ends early once no candidate indices remain.
    fn run<C, R>(&self, conformation: &mut C, iterations: usize, rng: &mut R) -> SearchReport
    where
        C: Conformation,
        R: Rng,
    {
        let initial_score = self.model.score(conformation.residues());

        // A chain with no contacts scores 0; seed the comparison at 1 so the
        // acceptance test below behaves identically for zero and non-zero
        // starting scores.
        let mut best_score = if initial_score == 0 { 1 } else { initial_score };

        // Interior backbone indices only; endpoints are never pivots
        let mut candidates: Vec<usize> = if conformation.len() > 2 {
            (1..conformation.len() - 1).collect()
        } else {
            Vec::new()
        };

        let mut report = SearchReport {
            initial_score,
            final_score: initial_score,
            iterations: 0,
            accepted: 0,
            reverted: 0,
            poisoned: 0,
        };

        for _ in 0..iterations {
            if candidates.is_empty() {
                break;
            }
            report.iterations += 1;

            let saved = conformation.snapshot();
            loop {
                let pick = rng.gen_range(0..candidates.len());
                let index = candidates[pick];

                if conformation.attempt_move(index, rng) {
                    let score = self.model.score(conformation.residues());
                    if score > best_score {
                        conformation.restore(saved);
                        report.reverted += 1;
                    } else {
                        if score < best_score {
                            debug!("pivot at {} improved score to {}", index, score);
                        }
                        best_score = score;
                        report.accepted += 1;
                    }
                    // A geometrically successful move consumes the attempt
                    // whether or not its score was kept
                    break;
                }

                // Geometric failure: undo the partial mutation and retire the
                // index for the rest of the run
                conformation.restore(saved.clone());
                candidates.swap_remove(pick);
                report.poisoned += 1;
                if candidates.is_empty() {
                    break;
                }
            }
        }

        report.final_score = self.model.score(conformation.residues());
        report
    }
}
