//! hpfold: lattice protein folding with the HP model
//!
//! This library provides contact-based fitness scoring for lattice protein
//! conformations, construction of random self-avoiding walks, and a randomized
//! hillclimbing search that improves conformations through pivot moves.

pub mod builder;
pub mod conformation;
pub mod geometry;
pub mod residue;
pub mod scoring;
pub mod search;

// Re-export commonly used types and functions
pub use builder::RandomWalkBuilder;
pub use conformation::{Chain, Conformation};
pub use residue::{AcidType, Residue};
pub use scoring::ContactModel;
pub use search::hillclimb::HillClimb;

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
