//! Random conformation construction by self-avoiding lattice walks

use crate::conformation::Chain;
use crate::geometry::{Axis, LatticePoint};
use crate::residue::{AcidType, Residue};
use log::debug;
use nalgebra::Vector3;
use rand::Rng;
use thiserror::Error;

/// Errors that can occur while growing a conformation
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("Cannot build a conformation from an empty sequence")]
    EmptySequence,

    #[error("Walk dead-ended at residue {index} after {attempts} placement attempts")]
    DeadEnd { index: usize, attempts: usize },
}

/// Parameters for the random walk builder
#[derive(Debug, Clone)]
pub struct BuilderParams {
    /// Maximum placement attempts per residue before the walk is declared a
    /// dead end. Bounds the rejection-sampling loop: with a fully enclosed
    /// residue the loop would otherwise never terminate.
    pub max_step_attempts: usize,
}

impl Default for BuilderParams {
    fn default() -> Self {
        Self {
            max_step_attempts: 128,
        }
    }
}

/// Grows a self-avoiding walk on the lattice from a residue-type sequence
#[derive(Debug, Clone, Default)]
pub struct RandomWalkBuilder {
    pub params: BuilderParams,
}

impl RandomWalkBuilder {
    /// Create a builder with default parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with custom parameters
    pub fn with_params(params: BuilderParams) -> Self {
        Self { params }
    }

    /// Build a full self-avoiding conformation for the given backbone
    /// composition.
    ///
    /// The first residue is placed at the origin. Each subsequent residue is
    /// placed one unit step from its predecessor along a uniformly random axis
    /// and direction, retrying until the candidate position is unoccupied.
    /// Exceeding `max_step_attempts` for a single residue surfaces
    /// [`BuildError::DeadEnd`] instead of looping forever.
    pub fn build<R: Rng + ?Sized>(
        &self,
        sequence: &[AcidType],
        rng: &mut R,
    ) -> Result<Chain, BuildError> {
        let (&first, rest) = sequence.split_first().ok_or(BuildError::EmptySequence)?;

        let mut residues = Vec::with_capacity(sequence.len());
        let mut previous = Vector3::new(0, 0, 0);
        residues.push(Residue::new(first, previous));

        for (offset, &acid_type) in rest.iter().enumerate() {
            let position = self.place_step(&residues, previous, rng).ok_or_else(|| {
                debug!(
                    "walk dead-ended at residue {} of {}",
                    offset + 1,
                    sequence.len()
                );
                BuildError::DeadEnd {
                    index: offset + 1,
                    attempts: self.params.max_step_attempts,
                }
            })?;
            residues.push(Residue::new(acid_type, position));
            previous = position;
        }

        Ok(Chain::from_residues(residues))
    }

    /// Rejection-sample an unoccupied neighbor of `previous`
    fn place_step<R: Rng + ?Sized>(
        &self,
        placed: &[Residue],
        previous: LatticePoint,
        rng: &mut R,
    ) -> Option<LatticePoint> {
        for _ in 0..self.params.max_step_attempts {
            let axis = Axis::random(rng);
            let direction: i32 = if rng.gen() { 1 } else { -1 };
            let candidate = previous + axis.unit() * direction;

            if !placed.iter().any(|r| r.position == candidate) {
                return Some(candidate);
            }
        }
        None
    }
}
