//! Geometry primitives for the integer 3D lattice

use nalgebra::Vector3;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A position on the lattice: integer coordinates on all three axes
pub type LatticePoint = Vector3<i32>;

/// The three coordinate axes of the lattice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes, in coordinate order
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Pick an axis uniformly at random
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..3)]
    }

    /// Unit vector along this axis
    pub fn unit(&self) -> LatticePoint {
        match self {
            Axis::X => Vector3::new(1, 0, 0),
            Axis::Y => Vector3::new(0, 1, 0),
            Axis::Z => Vector3::new(0, 0, 1),
        }
    }
}

/// Euclidean distance between two lattice points
pub fn distance(a: &LatticePoint, b: &LatticePoint) -> f64 {
    (squared_distance(a, b) as f64).sqrt()
}

/// Squared Euclidean distance, exact in integer arithmetic
pub fn squared_distance(a: &LatticePoint, b: &LatticePoint) -> i32 {
    let d = a - b;
    d.x * d.x + d.y * d.y + d.z * d.z
}

/// True iff the two points are exactly one lattice step apart
pub fn are_adjacent(a: &LatticePoint, b: &LatticePoint) -> bool {
    squared_distance(a, b) == 1
}

/// Rotate a vector about a coordinate axis by `turns` quarter turns (counterclockwise
/// looking down the positive axis). Exact integer arithmetic; `turns` is taken mod 4.
pub fn rotate_quarter(v: LatticePoint, axis: Axis, turns: u8) -> LatticePoint {
    let mut out = v;
    for _ in 0..(turns % 4) {
        out = match axis {
            Axis::X => Vector3::new(out.x, -out.z, out.y),
            Axis::Y => Vector3::new(out.z, out.y, -out.x),
            Axis::Z => Vector3::new(-out.y, out.x, out.z),
        };
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_distance() {
        let origin = Vector3::new(0, 0, 0);
        let unit = Vector3::new(1, 0, 0);
        let diag = Vector3::new(1, 1, 1);

        assert_eq!(distance(&origin, &unit), 1.0);
        assert_eq!(squared_distance(&origin, &diag), 3);
        assert!((distance(&origin, &diag) - 3.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_adjacency() {
        let p = Vector3::new(2, -1, 3);

        for axis in Axis::ALL {
            assert!(are_adjacent(&p, &(p + axis.unit())));
            assert!(are_adjacent(&p, &(p - axis.unit())));
        }

        // Same point and diagonal neighbors do not qualify
        assert!(!are_adjacent(&p, &p));
        assert!(!are_adjacent(&p, &(p + Vector3::new(1, 1, 0))));
        assert!(!are_adjacent(&p, &(p + Vector3::new(2, 0, 0))));
    }

    #[test]
    fn test_rotate_quarter_preserves_length() {
        let v = Vector3::new(3, -2, 5);
        let origin = Vector3::new(0, 0, 0);

        for axis in Axis::ALL {
            for turns in 1..4 {
                let rotated = rotate_quarter(v, axis, turns);
                assert_eq!(
                    squared_distance(&origin, &rotated),
                    squared_distance(&origin, &v)
                );
            }
        }
    }

    #[test]
    fn test_rotate_quarter_full_turn_is_identity() {
        let v = Vector3::new(1, 2, 3);

        for axis in Axis::ALL {
            assert_eq!(rotate_quarter(v, axis, 4), v);
            assert_eq!(rotate_quarter(v, axis, 0), v);
        }
    }

    #[test]
    fn test_rotate_quarter_known_values() {
        let x = Vector3::new(1, 0, 0);

        assert_eq!(rotate_quarter(x, Axis::Z, 1), Vector3::new(0, 1, 0));
        assert_eq!(rotate_quarter(x, Axis::Z, 2), Vector3::new(-1, 0, 0));
        assert_eq!(rotate_quarter(x, Axis::Y, 1), Vector3::new(0, 0, -1));
        assert_eq!(rotate_quarter(x, Axis::X, 1), x);
    }

    #[test]
    fn test_random_axis_is_deterministic_with_seed() {
        let mut rng1 = StdRng::seed_from_u64(7);
        let mut rng2 = StdRng::seed_from_u64(7);

        for _ in 0..32 {
            assert_eq!(Axis::random(&mut rng1), Axis::random(&mut rng2));
        }
    }
}
