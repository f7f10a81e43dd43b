//! Entropie de Shannon et filtrage des séquences peu informatives

use crate::sequence::{Sequence, SequenceSet};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Seuil d'entropie par défaut (en bits)
pub const DEFAULT_ENTROPY_THRESHOLD: f64 = 1.95;

/// Entropie maximale pour un alphabet à 4 symboles: log2(4)
pub const MAX_ENTROPY: f64 = 2.0;

/// Calcule l'entropie de Shannon (base 2) de la composition d'une séquence
///
/// Vaut 0 pour une séquence homopolymère ou vide, 2 pour une composition
/// uniforme.
pub fn shannon_entropy(sequence: &Sequence) -> f64 {
    if sequence.is_empty() {
        return 0.0;
    }

    let len = sequence.len() as f64;
    sequence
        .base_counts()
        .iter()
        .filter(|&&c| c > 0)
        .map(|&c| {
            let p = c as f64 / len;
            -p * p.log2()
        })
        .sum()
}

/// Filtre par seuil d'entropie minimal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntropyFilter {
    threshold: f64,
}

impl Default for EntropyFilter {
    fn default() -> Self {
        Self::new(DEFAULT_ENTROPY_THRESHOLD)
    }
}

impl EntropyFilter {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Vrai si la séquence atteint le seuil
    pub fn retains(&self, sequence: &Sequence) -> bool {
        shannon_entropy(sequence) >= self.threshold
    }

    /// Garde les séquences dont l'entropie est >= au seuil, ordre conservé
    pub fn filter(&self, sequences: &[Sequence]) -> SequenceSet {
        sequences.iter().filter(|s| self.retains(s)).cloned().collect()
    }

    /// Comme `filter`, réparti sur le pool rayon
    pub fn filter_par(&self, sequences: &[Sequence]) -> SequenceSet {
        sequences
            .par_iter()
            .filter(|s| self.retains(s))
            .cloned()
            .collect()
    }
}
