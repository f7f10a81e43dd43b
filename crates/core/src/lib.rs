//! motifgen Core Library
//!
//! Génération parallèle de séquences nucléotidiques aléatoires, recherche
//! du motif le plus fréquent et filtrage par entropie de Shannon.

pub mod logging;
pub mod config;
pub mod dataset;
pub mod entropy;
pub mod error;
pub mod generator;
pub mod motif;
pub mod pipeline;
pub mod probability;
pub mod sequence;

// Réexportations principales
pub use error::{MotifError, Result};
pub use sequence::{Base, Sequence, SequenceSet};
pub use probability::ProbabilityVector;
pub use generator::{generate_batch, EntropyRngFactory, GeneratorConfig, ParallelGenerator, RngFactory, SeededRngFactory};
pub use motif::{find_most_frequent_motif, find_most_frequent_motif_par, MotifCounts, MotifResult};
pub use entropy::{shannon_entropy, EntropyFilter};
pub use dataset::{load_dataset, read_dataset, save_dataset, write_dataset};
pub use config::{LoadedConfig, Parameter, RunConfig};
pub use pipeline::{analyze, AnalysisOptions, AnalysisReport, PhaseReport, Pipeline, PipelineReport};
pub use logging::{init_logging, level_from_verbosity};
// La macro log_operation est automatiquement exportée à la racine du crate
