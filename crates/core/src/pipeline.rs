//! Enchaînement complet: génération, sauvegarde, puis analyse en deux passes

use crate::config::RunConfig;
use crate::dataset::save_dataset;
use crate::entropy::EntropyFilter;
use crate::error::Result;
use crate::generator::{ParallelGenerator, SeededRngFactory};
use crate::motif::{find_most_frequent_motif, find_most_frequent_motif_par, MotifResult};
use crate::sequence::{Sequence, SequenceSet};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::info;

/// Résultat d'une passe d'analyse
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhaseReport {
    /// Nombre de séquences analysées
    pub sequences: usize,
    /// Motif le plus fréquent (None si aucune fenêtre)
    pub motif: Option<MotifResult>,
    /// Durée de la passe en millisecondes
    pub elapsed_ms: f64,
}

/// Résultat des deux passes d'analyse
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub motif_size: usize,
    pub entropy_threshold: f64,
    /// Motif sur l'ensemble complet
    pub full: PhaseReport,
    /// Filtrage par entropie puis motif sur l'ensemble réduit
    pub filtered: PhaseReport,
}

/// Rapport d'une exécution complète
#[derive(Debug, Clone, Serialize)]
pub struct PipelineReport {
    pub generated_at: DateTime<Utc>,
    pub sequence_count: usize,
    pub sequence_length: usize,
    pub seed: Option<u64>,
    pub dataset: PathBuf,
    pub generation_ms: f64,
    pub analysis: AnalysisReport,
}

/// Options de l'analyse
#[derive(Debug, Clone, Copy)]
pub struct AnalysisOptions {
    pub motif_size: usize,
    pub filter: EntropyFilter,
    /// Utiliser les variantes rayon du comptage et du filtrage
    pub parallel: bool,
}

fn millis(elapsed: Duration) -> f64 {
    elapsed.as_secs_f64() * 1000.0
}

/// Analyse un ensemble de séquences en deux passes
///
/// La seconde durée couvre le filtrage et le comptage sur l'ensemble filtré.
pub fn analyze(sequences: &[Sequence], options: &AnalysisOptions) -> AnalysisReport {
    let find: fn(&[Sequence], usize) -> Option<MotifResult> = if options.parallel {
        find_most_frequent_motif_par
    } else {
        find_most_frequent_motif
    };

    let full = crate::log_operation!("motif_full", {
        let start = Instant::now();
        let motif = find(sequences, options.motif_size);
        PhaseReport {
            sequences: sequences.len(),
            motif,
            elapsed_ms: millis(start.elapsed()),
        }
    });

    let filtered = crate::log_operation!("motif_filtered", {
        let start = Instant::now();
        let retained = if options.parallel {
            options.filter.filter_par(sequences)
        } else {
            options.filter.filter(sequences)
        };
        info!(
            "{} séquences sur {} après filtrage (seuil {})",
            retained.len(),
            sequences.len(),
            options.filter.threshold()
        );
        let motif = find(&retained, options.motif_size);
        PhaseReport {
            sequences: retained.len(),
            motif,
            elapsed_ms: millis(start.elapsed()),
        }
    });

    AnalysisReport {
        motif_size: options.motif_size,
        entropy_threshold: options.filter.threshold(),
        full,
        filtered,
    }
}

/// Exécution complète pilotée par une `RunConfig` validée
pub struct Pipeline {
    config: RunConfig,
}

impl Pipeline {
    /// Crée un pipeline, après validation des paramètres
    pub fn new(config: RunConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn analysis_options(&self) -> AnalysisOptions {
        AnalysisOptions {
            motif_size: self.config.motif_size,
            filter: self.config.entropy_filter(),
            parallel: self.config.parallel_analysis,
        }
    }

    /// Génère le jeu de données complet
    pub fn generate(&self) -> Result<SequenceSet> {
        let config = &self.config;
        let sequences = match config.seed {
            Some(seed) => ParallelGenerator::with_factory(
                config.generator_config(),
                SeededRngFactory::new(seed),
            )?
            .generate_all(config.sequence_count, config.sequence_length, &config.probabilities),
            None => ParallelGenerator::new(config.generator_config())?.generate_all(
                config.sequence_count,
                config.sequence_length,
                &config.probabilities,
            ),
        };
        Ok(sequences)
    }

    /// Génère puis écrit le jeu de données; retourne aussi la durée de génération
    pub fn generate_and_save(&self) -> Result<(SequenceSet, f64)> {
        let start = Instant::now();
        let sequences = self.generate()?;
        let generation_ms = millis(start.elapsed());
        info!("{} séquences générées en {:.1} ms", sequences.len(), generation_ms);

        save_dataset(&sequences, &self.config.output)?;
        Ok((sequences, generation_ms))
    }

    /// Génération, sauvegarde et analyse
    pub fn run(&self) -> Result<PipelineReport> {
        let (sequences, generation_ms) = self.generate_and_save()?;
        let analysis = analyze(&sequences, &self.analysis_options());

        Ok(PipelineReport {
            generated_at: Utc::now(),
            sequence_count: self.config.sequence_count,
            sequence_length: self.config.sequence_length,
            seed: self.config.seed,
            dataset: self.config.output.clone(),
            generation_ms,
            analysis,
        })
    }
}
