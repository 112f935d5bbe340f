use serde::{Deserialize, Serialize};

/// Grams per food, indexed by position in the candidate food slice.
///
/// Quantities are never negative: every write clamps at zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortionAssignment {
    grams: Vec<f64>,
}

impl PortionAssignment {
    /// All-zero assignment for `len` foods.
    pub fn zeros(len: usize) -> Self {
        Self {
            grams: vec![0.0; len],
        }
    }

    pub fn from_grams(grams: Vec<f64>) -> Self {
        Self {
            grams: grams.into_iter().map(|g| g.max(0.0)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.grams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grams.is_empty()
    }

    pub fn get(&self, index: usize) -> f64 {
        self.grams.get(index).copied().unwrap_or(0.0)
    }

    pub fn set(&mut self, index: usize, grams: f64) {
        if let Some(slot) = self.grams.get_mut(index) {
            *slot = grams.max(0.0);
        }
    }

    /// Add `delta` grams to one food, clamping at zero.
    pub fn adjust(&mut self, index: usize, delta: f64) {
        let current = self.get(index);
        self.set(index, current + delta);
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.grams.iter().copied().enumerate()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.grams
    }

    pub fn total_grams(&self) -> f64 {
        self.grams.iter().sum()
    }
}

/// Snapshot of an assignment with its score (lower is better).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredAssignment {
    pub assignment: PortionAssignment,
    pub score: f64,
}
