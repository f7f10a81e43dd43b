//! Distribution de probabilité sur les quatre bases

use crate::sequence::Base;
use serde::{Deserialize, Serialize};

/// Poids de génération A, C, G, T
///
/// La somme devrait valoir 1.0 mais n'est pas vérifiée: avec un
/// échantillonnage par seuils cumulés, la dernière base (T) absorbe
/// toute la masse manquante.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProbabilityVector([f64; 4]);

impl Default for ProbabilityVector {
    fn default() -> Self {
        Self::uniform()
    }
}

impl ProbabilityVector {
    /// Crée une distribution sans validation
    pub fn new(weights: [f64; 4]) -> Self {
        Self(weights)
    }

    /// Distribution uniforme (0.25 par base)
    pub fn uniform() -> Self {
        Self([0.25; 4])
    }

    pub fn weights(&self) -> [f64; 4] {
        self.0
    }

    /// Vérifie que les poids sont positifs et somment à 1
    pub fn is_normalized(&self) -> bool {
        let sum: f64 = self.0.iter().sum();
        self.0.iter().all(|&p| p >= 0.0) && (sum - 1.0).abs() < 1e-9
    }

    /// Sélectionne une base à partir d'un tirage uniforme `r` dans [0, 1)
    #[inline]
    pub fn sample(&self, r: f64) -> Base {
        let [p0, p1, p2, _] = self.0;
        if r <= p0 {
            Base::A
        } else if r <= p0 + p1 {
            Base::C
        } else if r <= p0 + p1 + p2 {
            Base::G
        } else {
            Base::T
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_thresholds() {
        let probs = ProbabilityVector::uniform();
        assert!(probs.is_normalized());
        assert_eq!(probs.sample(0.0), Base::A);
        assert_eq!(probs.sample(0.25), Base::A);
        assert_eq!(probs.sample(0.26), Base::C);
        assert_eq!(probs.sample(0.5), Base::C);
        assert_eq!(probs.sample(0.74), Base::G);
        assert_eq!(probs.sample(0.99), Base::T);
    }

    #[test]
    fn test_last_base_absorbs_missing_mass() {
        let probs = ProbabilityVector::new([0.1, 0.1, 0.1, 0.0]);
        assert!(!probs.is_normalized());
        assert_eq!(probs.sample(0.5), Base::T);
    }

    #[test]
    fn test_degenerate_distribution() {
        let probs = ProbabilityVector::new([0.0, 0.0, 1.0, 0.0]);
        assert_eq!(probs.sample(0.001), Base::G);
        assert_eq!(probs.sample(0.999), Base::G);
        // r == 0 satisfie déjà le premier seuil
        assert_eq!(probs.sample(0.0), Base::A);
    }

    #[test]
    fn test_serde_transparent() {
        let json = serde_json::to_string(&ProbabilityVector::uniform()).unwrap();
        assert_eq!(json, "[0.25,0.25,0.25,0.25]");
    }
}
