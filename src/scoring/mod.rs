//! Contact enumeration and fitness scoring for lattice conformations

use crate::residue::{AcidType, Residue};
use serde::{Deserialize, Serialize};

/// Classification of a non-covalent contact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BondKind {
    /// At least one participant is hydrophobic
    Weak,

    /// Both participants are cysteines
    Strong,
}

/// A non-covalent bond between two residues, identified by their backbone
/// indices with `i < j`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bond {
    /// Backbone index of the first participant
    pub i: usize,

    /// Backbone index of the second participant
    pub j: usize,

    /// Bond classification
    pub kind: BondKind,
}

/// Weights for combining bond counts into a score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactParams {
    /// Score contribution per weak bond
    pub weak_weight: i64,

    /// Score contribution per strong bond
    pub strong_weight: i64,
}

impl Default for ContactParams {
    fn default() -> Self {
        Self {
            weak_weight: -1,
            strong_weight: -5,
        }
    }
}

/// The HP-model contact scorer
///
/// A bond is an unordered residue pair that is not directly backbone-bonded
/// (index gap greater than one) and sits exactly one lattice step apart. Polar
/// residues form no bonds. Lower scores are better.
#[derive(Debug, Clone, Default)]
pub struct ContactModel {
    pub params: ContactParams,
}

impl ContactModel {
    /// Create a contact model with the default weights
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a contact model with custom weights
    pub fn with_params(params: ContactParams) -> Self {
        Self { params }
    }

    /// Enumerate every qualifying bond in the conformation.
    ///
    /// Backbone indices are carried through the polar filter, so pair
    /// enumeration is O(n²) in the number of bonding residues with no
    /// per-pair index lookup.
    pub fn find_bonds(&self, residues: &[Residue]) -> Vec<Bond> {
        let bonding: Vec<(usize, &Residue)> = residues
            .iter()
            .enumerate()
            .filter(|(_, r)| r.acid_type.is_bonding())
            .collect();

        let mut bonds = Vec::new();
        for (a, &(i, first)) in bonding.iter().enumerate() {
            for &(j, second) in &bonding[a + 1..] {
                if j - i > 1 && first.is_adjacent(second) {
                    let kind = if first.acid_type == AcidType::Hydrophobic
                        || second.acid_type == AcidType::Hydrophobic
                    {
                        BondKind::Weak
                    } else {
                        BondKind::Strong
                    };
                    bonds.push(Bond { i, j, kind });
                }
            }
        }
        bonds
    }

    /// Compute the fitness score: the weighted sum of weak and strong bond
    /// counts. Derived from scratch on every call.
    pub fn score(&self, residues: &[Residue]) -> i64 {
        let mut weak = 0;
        let mut strong = 0;
        for bond in self.find_bonds(residues) {
            match bond.kind {
                BondKind::Weak => weak += 1,
                BondKind::Strong => strong += 1,
            }
        }
        weak * self.params.weak_weight + strong * self.params.strong_weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Vector3;

    fn residue(acid_type: AcidType, x: i32, y: i32, z: i32) -> Residue {
        Residue::new(acid_type, Vector3::new(x, y, z))
    }

    #[test]
    fn test_backbone_neighbors_do_not_bond() {
        let residues = vec![
            residue(AcidType::Hydrophobic, 0, 0, 0),
            residue(AcidType::Hydrophobic, 1, 0, 0),
        ];

        let model = ContactModel::new();
        assert!(model.find_bonds(&residues).is_empty());
        assert_eq!(model.score(&residues), 0);
    }

    #[test]
    fn test_single_weak_bond() {
        // A square fold: indices 0 and 3 end up adjacent, gap 3
        let residues = vec![
            residue(AcidType::Hydrophobic, 0, 0, 0),
            residue(AcidType::Hydrophobic, 1, 0, 0),
            residue(AcidType::Hydrophobic, 1, 1, 0),
            residue(AcidType::Hydrophobic, 0, 1, 0),
        ];

        let model = ContactModel::new();
        let bonds = model.find_bonds(&residues);
        assert_eq!(bonds.len(), 1);
        assert_eq!(bonds[0].i, 0);
        assert_eq!(bonds[0].j, 3);
        assert_eq!(bonds[0].kind, BondKind::Weak);
        assert_eq!(model.score(&residues), -1);
    }

    #[test]
    fn test_single_strong_bond() {
        let residues = vec![
            residue(AcidType::Cysteine, 0, 0, 0),
            residue(AcidType::Polar, 1, 0, 0),
            residue(AcidType::Polar, 1, 1, 0),
            residue(AcidType::Cysteine, 0, 1, 0),
        ];

        let model = ContactModel::new();
        let bonds = model.find_bonds(&residues);
        assert_eq!(bonds.len(), 1);
        assert_eq!(bonds[0].kind, BondKind::Strong);
        assert_eq!(model.score(&residues), -5);
    }

    #[test]
    fn test_hydrophobic_cysteine_contact_is_weak() {
        // H and C adjacent at gap 2: weak, even though a cysteine participates
        let residues = vec![
            residue(AcidType::Hydrophobic, 0, 0, 0),
            residue(AcidType::Polar, 1, 0, 0),
            residue(AcidType::Cysteine, 0, 1, 0),
        ];

        let model = ContactModel::new();
        let bonds = model.find_bonds(&residues);
        assert_eq!(bonds.len(), 1);
        assert_eq!(bonds[0].kind, BondKind::Weak);
        assert_eq!(model.score(&residues), -1);
    }

    #[test]
    fn test_polar_residues_never_bond() {
        // P at index 0 adjacent to H at index 2: excluded outright
        let residues = vec![
            residue(AcidType::Polar, 0, 0, 0),
            residue(AcidType::Hydrophobic, 1, 0, 0),
            residue(AcidType::Hydrophobic, 0, 1, 0),
        ];

        let model = ContactModel::new();
        for bond in model.find_bonds(&residues) {
            assert_ne!(residues[bond.i].acid_type, AcidType::Polar);
            assert_ne!(residues[bond.j].acid_type, AcidType::Polar);
        }
        // Here index 1/2 are backbone neighbors, so nothing qualifies at all
        assert_eq!(model.score(&residues), 0);
    }

    #[test]
    fn test_score_is_reversal_invariant() {
        let residues = vec![
            residue(AcidType::Hydrophobic, 0, 0, 0),
            residue(AcidType::Cysteine, 1, 0, 0),
            residue(AcidType::Hydrophobic, 1, 1, 0),
            residue(AcidType::Cysteine, 0, 1, 0),
            residue(AcidType::Hydrophobic, 0, 2, 0),
            residue(AcidType::Hydrophobic, 1, 2, 0),
        ];

        let mut reversed = residues.clone();
        reversed.reverse();

        let model = ContactModel::new();
        assert_eq!(model.score(&residues), model.score(&reversed));
    }

    #[test]
    fn test_no_double_counting() {
        // Two independent weak contacts in a 2x3 fold
        let residues = vec![
            residue(AcidType::Hydrophobic, 0, 0, 0),
            residue(AcidType::Hydrophobic, 1, 0, 0),
            residue(AcidType::Hydrophobic, 1, 1, 0),
            residue(AcidType::Hydrophobic, 0, 1, 0),
            residue(AcidType::Hydrophobic, 0, 2, 0),
            residue(AcidType::Hydrophobic, 1, 2, 0),
        ];

        let model = ContactModel::new();
        let bonds = model.find_bonds(&residues);

        // (0,3) and (2,5); every pair listed once with i < j
        assert_eq!(bonds.len(), 2);
        for bond in &bonds {
            assert!(bond.i < bond.j);
        }
        assert_eq!(model.score(&residues), -2);
    }

    #[test]
    fn test_custom_weights() {
        let residues = vec![
            residue(AcidType::Hydrophobic, 0, 0, 0),
            residue(AcidType::Hydrophobic, 1, 0, 0),
            residue(AcidType::Hydrophobic, 1, 1, 0),
            residue(AcidType::Hydrophobic, 0, 1, 0),
        ];

        let model = ContactModel::with_params(ContactParams {
            weak_weight: -2,
            strong_weight: -10,
        });
        assert_eq!(model.score(&residues), -2);
    }
}
