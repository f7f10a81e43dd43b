//! Générateur parallèle de séquences aléatoires
//!
//! Le travail est découpé récursivement en deux moitiés jusqu'à atteindre
//! le seuil de chunk, puis chaque feuille est générée avec sa propre source
//! aléatoire. Les résultats sont concaténés gauche puis droite, donc la
//! séquence en position `i` correspond toujours à l'indice logique `i`.

use crate::error::{MotifError, Result};
use crate::probability::ProbabilityVector;
use crate::sequence::{Sequence, SequenceSet};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::{ThreadPool, ThreadPoolBuilder};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Seuil de découpage par défaut (nombre de séquences par feuille)
pub const DEFAULT_CHUNK_THRESHOLD: usize = 100_000;

/// Un tirage `f64` consomme un `u64`, soit deux mots ChaCha de 32 bits
const WORDS_PER_DRAW: u128 = 2;

/// Fabrique de sources aléatoires, une par lot généré
pub trait RngFactory: Sync {
    type Rng: Rng;

    /// Source dédiée au lot commençant à l'indice logique `start`
    fn batch_rng(&self, start: usize, length: usize) -> Self::Rng;
}

/// Chaque lot reçoit un ChaCha8 initialisé depuis l'entropie du système
#[derive(Debug, Clone, Copy, Default)]
pub struct EntropyRngFactory;

impl RngFactory for EntropyRngFactory {
    type Rng = ChaCha8Rng;

    fn batch_rng(&self, _start: usize, _length: usize) -> ChaCha8Rng {
        ChaCha8Rng::from_entropy()
    }
}

/// Flux ChaCha8 unique, positionné au début de chaque lot
///
/// La sortie est identique à celle d'un générateur séquentiel de même
/// seed, quel que soit le découpage.
#[derive(Debug, Clone, Copy)]
pub struct SeededRngFactory {
    seed: u64,
}

impl SeededRngFactory {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl RngFactory for SeededRngFactory {
    type Rng = ChaCha8Rng;

    fn batch_rng(&self, start: usize, length: usize) -> ChaCha8Rng {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        rng.set_word_pos(start as u128 * length as u128 * WORDS_PER_DRAW);
        rng
    }
}

/// Génère les séquences d'indices `start..end`, chacune de `length` bases
///
/// Retourne un vecteur vide si `end <= start`, et des séquences vides si
/// `length == 0`.
pub fn generate_batch<R: Rng + ?Sized>(
    start: usize,
    end: usize,
    length: usize,
    probabilities: &ProbabilityVector,
    rng: &mut R,
) -> SequenceSet {
    let count = end.saturating_sub(start);
    let mut sequences = Vec::with_capacity(count);

    for _ in 0..count {
        let mut bases = String::with_capacity(length);
        for _ in 0..length {
            let r: f64 = rng.gen();
            bases.push(probabilities.sample(r).as_char());
        }
        sequences.push(Sequence::from_trusted(bases));
    }

    sequences
}

/// Configuration du générateur
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Taille maximale d'un lot généré sans découpage
    pub chunk_threshold: usize,

    /// Nombre de threads (None = pool global, dimensionné sur le matériel)
    pub threads: Option<usize>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            chunk_threshold: DEFAULT_CHUNK_THRESHOLD,
            threads: None,
        }
    }
}

/// Générateur fork/join
pub struct ParallelGenerator<F: RngFactory = EntropyRngFactory> {
    chunk_threshold: usize,
    factory: F,
    pool: Option<ThreadPool>,
}

impl ParallelGenerator<EntropyRngFactory> {
    /// Crée un générateur non déterministe
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        Self::with_factory(config, EntropyRngFactory)
    }
}

impl<F: RngFactory> ParallelGenerator<F> {
    /// Crée un générateur avec une fabrique de sources aléatoires donnée
    pub fn with_factory(config: GeneratorConfig, factory: F) -> Result<Self> {
        let pool = match config.threads {
            Some(threads) => Some(
                ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .thread_name(|i| format!("motifgen-gen-{}", i))
                    .build()
                    .map_err(|e| MotifError::ThreadPool(e.to_string()))?,
            ),
            None => None,
        };

        Ok(Self {
            // un seuil nul ne terminerait jamais la récursion
            chunk_threshold: config.chunk_threshold.max(1),
            factory,
            pool,
        })
    }

    pub fn chunk_threshold(&self) -> usize {
        self.chunk_threshold
    }

    /// Génère `total` séquences de `length` bases, dans l'ordre logique
    pub fn generate_all(
        &self,
        total: usize,
        length: usize,
        probabilities: &ProbabilityVector,
    ) -> SequenceSet {
        crate::log_operation!("generate_all", {
            debug!(
                total,
                length,
                chunk_threshold = self.chunk_threshold,
                "Génération parallèle"
            );
            match &self.pool {
                Some(pool) => pool.install(|| self.generate_range(0, total, length, probabilities)),
                None => self.generate_range(0, total, length, probabilities),
            }
        })
    }

    fn generate_range(
        &self,
        start: usize,
        end: usize,
        length: usize,
        probabilities: &ProbabilityVector,
    ) -> SequenceSet {
        if end - start <= self.chunk_threshold {
            trace!(start, end, "Génération directe du lot");
            let mut rng = self.factory.batch_rng(start, length);
            return generate_batch(start, end, length, probabilities, &mut rng);
        }

        let mid = start + (end - start) / 2;
        let (mut left, right) = rayon::join(
            || self.generate_range(start, mid, length, probabilities),
            || self.generate_range(mid, end, length, probabilities),
        );

        left.extend(right);
        left
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(chunk_threshold: usize, seed: u64) -> ParallelGenerator<SeededRngFactory> {
        let config = GeneratorConfig {
            chunk_threshold,
            threads: None,
        };
        ParallelGenerator::with_factory(config, SeededRngFactory::new(seed)).unwrap()
    }

    #[test]
    fn test_batch_shape() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let batch = generate_batch(10, 35, 12, &ProbabilityVector::uniform(), &mut rng);

        assert_eq!(batch.len(), 25);
        for seq in &batch {
            assert_eq!(seq.len(), 12);
            assert!(seq.as_str().chars().all(|c| "ACGT".contains(c)));
        }
    }

    #[test]
    fn test_batch_degenerate_inputs() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let probs = ProbabilityVector::uniform();

        assert!(generate_batch(5, 5, 10, &probs, &mut rng).is_empty());
        assert!(generate_batch(9, 3, 10, &probs, &mut rng).is_empty());

        let empty = generate_batch(0, 3, 0, &probs, &mut rng);
        assert_eq!(empty.len(), 3);
        assert!(empty.iter().all(Sequence::is_empty));
    }

    #[test]
    fn test_batch_follows_distribution() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let only_c = ProbabilityVector::new([0.0, 1.0, 0.0, 0.0]);
        let batch = generate_batch(0, 20, 30, &only_c, &mut rng);
        // r == 0.0 exactement est improbable au point d'être ignoré ici
        assert!(batch.iter().all(|s| s.as_str().chars().all(|c| c == 'C')));
    }

    #[test]
    fn test_generate_all_shape() {
        let generator = seeded(64, 3);
        let sequences = generator.generate_all(1000, 20, &ProbabilityVector::uniform());

        assert_eq!(sequences.len(), 1000);
        assert!(sequences.iter().all(|s| s.len() == 20));
    }

    #[test]
    fn test_generate_all_empty() {
        let generator = ParallelGenerator::new(GeneratorConfig::default()).unwrap();
        assert!(generator.generate_all(0, 20, &ProbabilityVector::uniform()).is_empty());
    }

    #[test]
    fn test_split_matches_sequential_batch() {
        let probs = ProbabilityVector::uniform();
        let factory = SeededRngFactory::new(42);

        let mut rng = factory.batch_rng(0, 9);
        let whole = generate_batch(0, 50, 9, &probs, &mut rng);

        let mut left_rng = factory.batch_rng(0, 9);
        let mut right_rng = factory.batch_rng(25, 9);
        let mut halves = generate_batch(0, 25, 9, &probs, &mut left_rng);
        halves.extend(generate_batch(25, 50, 9, &probs, &mut right_rng));

        assert_eq!(whole, halves);
    }

    #[test]
    fn test_chunk_threshold_does_not_change_output() {
        let probs = ProbabilityVector::uniform();
        let reference = seeded(10_000, 99).generate_all(777, 15, &probs);

        for threshold in [1, 7, 100, 776] {
            let output = seeded(threshold, 99).generate_all(777, 15, &probs);
            assert_eq!(output, reference, "seuil {}", threshold);
        }
    }

    #[test]
    fn test_dedicated_pool() {
        let config = GeneratorConfig {
            chunk_threshold: 100,
            threads: Some(2),
        };
        let generator = ParallelGenerator::with_factory(config, SeededRngFactory::new(5)).unwrap();
        let sequences = generator.generate_all(1_000, 8, &ProbabilityVector::uniform());

        assert_eq!(sequences, seeded(100, 5).generate_all(1_000, 8, &ProbabilityVector::uniform()));
    }

    #[test]
    fn test_zero_threshold_is_bumped() {
        assert_eq!(seeded(0, 1).chunk_threshold(), 1);
    }

    #[test]
    fn test_entropy_factory_produces_distinct_batches() {
        let generator = ParallelGenerator::new(GeneratorConfig {
            chunk_threshold: 10,
            threads: None,
        })
        .unwrap();
        let sequences = generator.generate_all(20, 40, &ProbabilityVector::uniform());
        // deux lots indépendants de 40 bases identiques: probabilité 4^-400
        assert_ne!(sequences[..10], sequences[10..]);
    }
}
