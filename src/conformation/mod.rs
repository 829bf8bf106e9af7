//! Conformation representation and the pivot move

use crate::geometry::{rotate_quarter, Axis, LatticePoint};
use crate::residue::{AcidType, Residue};
use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A mutable, ordered chain of residues whose sequence order encodes the
/// covalent backbone.
///
/// The trait is the seam between the search algorithms and the structure they
/// perturb: the hillclimber only needs residue access, the backbone
/// composition, snapshot/restore, and the move operation.
pub trait Conformation {
    /// The residues in backbone order
    fn residues(&self) -> &[Residue];

    /// Mutable access to the residue sequence
    fn residues_mut(&mut self) -> &mut Vec<Residue>;

    /// The backbone composition, in backbone order
    fn sequence(&self) -> &[AcidType];

    /// Attempt a geometry-preserving perturbation pivoting at the given interior
    /// backbone index.
    ///
    /// On success the residue sequence has been mutated in place to a new
    /// self-avoiding conformation. On failure the sequence may be left partially
    /// mutated; the caller is responsible for restoring a prior snapshot.
    fn attempt_move(&mut self, index: usize, rng: &mut dyn RngCore) -> bool;

    /// Deep copy of all residue positions
    fn snapshot(&self) -> Vec<Residue> {
        self.residues().to_vec()
    }

    /// Replace the residue sequence wholesale with a prior snapshot
    fn restore(&mut self, saved: Vec<Residue>) {
        *self.residues_mut() = saved;
    }

    /// Number of residues in the chain
    fn len(&self) -> usize {
        self.residues().len()
    }

    /// True iff the chain has no residues
    fn is_empty(&self) -> bool {
        self.residues().is_empty()
    }
}

/// The standard lattice conformation: residues on integer 3D coordinates,
/// perturbed by tail pivots
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chain {
    residues: Vec<Residue>,
    sequence: Vec<AcidType>,
}

impl Chain {
    /// Create a chain from residues in backbone order
    pub fn from_residues(residues: Vec<Residue>) -> Self {
        let sequence = residues.iter().map(|r| r.acid_type).collect();
        Self { residues, sequence }
    }

    /// True iff any residue already occupies the candidate position
    pub fn is_occupied(&self, candidate: &LatticePoint) -> bool {
        self.residues.iter().any(|r| r.position == *candidate)
    }

    /// True iff no two residues share a position
    pub fn is_self_avoiding(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.residues.len());
        self.residues
            .iter()
            .all(|r| seen.insert((r.position.x, r.position.y, r.position.z)))
    }

    /// True iff consecutive residues sit exactly one lattice step apart
    pub fn is_connected(&self) -> bool {
        self.residues
            .windows(2)
            .all(|pair| pair[0].is_adjacent(&pair[1]))
    }

    /// The current score of the chain under the given model; always recomputed,
    /// never cached
    pub fn score(&self, model: &crate::scoring::ContactModel) -> i64 {
        model.score(&self.residues)
    }
}

impl Conformation for Chain {
    fn residues(&self) -> &[Residue] {
        &self.residues
    }

    fn residues_mut(&mut self) -> &mut Vec<Residue> {
        &mut self.residues
    }

    fn sequence(&self) -> &[AcidType] {
        &self.sequence
    }

    /// Pivot the tail `index+1..` by a random non-identity quarter-turn rotation
    /// about the pivot residue's position, then validate self-avoidance.
    ///
    /// Endpoints are not legal pivots. Rotation is an isometry, so backbone step
    /// lengths are preserved by construction; only collisions can invalidate the
    /// result.
    fn attempt_move(&mut self, index: usize, rng: &mut dyn RngCore) -> bool {
        if index == 0 || index + 1 >= self.residues.len() {
            return false;
        }

        let axis = Axis::random(rng);
        let turns: u8 = rng.gen_range(1..4);
        let pivot = self.residues[index].position;

        for residue in &mut self.residues[index + 1..] {
            residue.position = pivot + rotate_quarter(residue.position - pivot, axis, turns);
        }

        self.is_self_avoiding()
    }
}
