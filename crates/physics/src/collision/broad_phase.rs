//! Broad-phase collision detection using pairwise bounding-box tests

use crate::body::Body;

/// Produces candidate pairs for the narrow phase.
///
/// Pairs are `(i, j)` indices into `bodies` with `i < j`, listed in
/// ascending `(i, j)` order. Implementations may over-report but must not
/// drop a pair whose shapes overlap.
pub trait BroadPhase: Send + Sync {
    fn candidate_pairs(&self, bodies: &[Body]) -> Vec<(usize, usize)>;
}

/// All-pairs bounding-box overlap test. Pairs of two kinematic bodies are
/// never reported since neither can respond.
#[derive(Debug, Default, Clone, Copy)]
pub struct AabbBroadPhase;

impl BroadPhase for AabbBroadPhase {
    fn candidate_pairs(&self, bodies: &[Body]) -> Vec<(usize, usize)> {
        let boxes: Vec<_> = bodies.iter().map(|b| b.shape().aabb()).collect();
        let mut pairs = Vec::new();

        for (i, body_a) in bodies.iter().enumerate() {
            for (j, body_b) in bodies.iter().enumerate().skip(i + 1) {
                if body_a.is_kinematic() && body_b.is_kinematic() {
                    continue;
                }
                if boxes[i].overlaps(&boxes[j]) {
                    pairs.push((i, j));
                }
            }
        }

        pairs
    }
}
