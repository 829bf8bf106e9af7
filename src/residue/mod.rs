//! Residue representation and related functionality

use crate::geometry::LatticePoint;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors that can occur when working with residue types
#[derive(Error, Debug)]
pub enum ResidueError {
    #[error("Unknown residue type character: {0:?}")]
    UnknownType(char),

    #[error("Residue sequence is empty")]
    EmptySequence,
}

/// The residue types of the HP model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AcidType {
    /// Hydrophobic residue (H): forms weak bonds
    Hydrophobic,

    /// Polar residue (P): chemically inert, forms no bonds
    Polar,

    /// Cysteine residue (C): forms strong bonds with other cysteines
    Cysteine,
}

impl AcidType {
    /// Parse a residue type from its single-character code
    pub fn from_char(c: char) -> Result<Self, ResidueError> {
        match c.to_ascii_uppercase() {
            'H' => Ok(AcidType::Hydrophobic),
            'P' => Ok(AcidType::Polar),
            'C' => Ok(AcidType::Cysteine),
            other => Err(ResidueError::UnknownType(other)),
        }
    }

    /// Single-character code for this residue type
    pub fn to_char(&self) -> char {
        match self {
            AcidType::Hydrophobic => 'H',
            AcidType::Polar => 'P',
            AcidType::Cysteine => 'C',
        }
    }

    /// Parse a whole backbone composition string such as "HPHPCH"
    pub fn parse_sequence(s: &str) -> Result<Vec<Self>, ResidueError> {
        if s.is_empty() {
            return Err(ResidueError::EmptySequence);
        }
        s.chars().map(Self::from_char).collect()
    }

    /// Can this residue type participate in a non-covalent bond at all?
    pub fn is_bonding(&self) -> bool {
        !matches!(self, AcidType::Polar)
    }
}

/// A residue on the lattice: an immutable type plus a mutable position
///
/// Positions change only through accepted perturbation moves; the type is fixed
/// at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Residue {
    /// Residue type
    pub acid_type: AcidType,

    /// Lattice coordinates
    pub position: LatticePoint,
}

impl Residue {
    /// Create a new residue
    pub fn new(acid_type: AcidType, position: LatticePoint) -> Self {
        Self {
            acid_type,
            position,
        }
    }

    /// Euclidean distance to another residue
    pub fn distance(&self, other: &Residue) -> f64 {
        crate::geometry::distance(&self.position, &other.position)
    }

    /// True iff the two residues sit exactly one lattice step apart
    pub fn is_adjacent(&self, other: &Residue) -> bool {
        crate::geometry::are_adjacent(&self.position, &other.position)
    }
}

impl fmt::Display for Residue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}, {}, {})",
            self.acid_type.to_char(),
            self.position.x,
            self.position.y,
            self.position.z
        )
    }
}
