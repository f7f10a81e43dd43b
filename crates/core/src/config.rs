//! Configuration d'une exécution complète

use crate::dataset::DEFAULT_DATASET_FILE;
use crate::entropy::{EntropyFilter, DEFAULT_ENTROPY_THRESHOLD};
use crate::error::{MotifError, Result};
use crate::generator::{GeneratorConfig, DEFAULT_CHUNK_THRESHOLD};
use crate::probability::ProbabilityVector;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

/// Nombre de séquences accepté
pub const SEQUENCE_COUNT_RANGE: RangeInclusive<usize> = 1_000..=2_000_000;
/// Longueur de séquence acceptée
pub const SEQUENCE_LENGTH_RANGE: RangeInclusive<usize> = 5..=100;
/// Taille de motif acceptée
pub const MOTIF_SIZE_RANGE: RangeInclusive<usize> = 4..=10;

/// Les trois paramètres entiers d'une exécution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parameter {
    SequenceCount,
    SequenceLength,
    MotifSize,
}

impl Parameter {
    pub const ALL: [Parameter; 3] = [
        Parameter::SequenceCount,
        Parameter::SequenceLength,
        Parameter::MotifSize,
    ];

    fn index(self) -> usize {
        match self {
            Parameter::SequenceCount => 0,
            Parameter::SequenceLength => 1,
            Parameter::MotifSize => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Parameter::SequenceCount => "sequence_count",
            Parameter::SequenceLength => "sequence_length",
            Parameter::MotifSize => "motif_size",
        }
    }

    pub fn range(self) -> RangeInclusive<usize> {
        match self {
            Parameter::SequenceCount => SEQUENCE_COUNT_RANGE,
            Parameter::SequenceLength => SEQUENCE_LENGTH_RANGE,
            Parameter::MotifSize => MOTIF_SIZE_RANGE,
        }
    }

    /// Prédicat de validation, sans ajustement de la valeur
    pub fn is_valid(self, value: usize) -> bool {
        self.range().contains(&value)
    }

    pub fn validate(self, value: usize) -> Result<usize> {
        if self.is_valid(value) {
            Ok(value)
        } else {
            Err(MotifError::InvalidParameter {
                name: self.name(),
                value,
                min: *self.range().start(),
                max: *self.range().end(),
            })
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Configuration complète d'une exécution
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Nombre de séquences à générer
    pub sequence_count: usize,

    /// Longueur de chaque séquence
    pub sequence_length: usize,

    /// Taille du motif recherché
    pub motif_size: usize,

    /// Probabilités A, C, G, T
    pub probabilities: ProbabilityVector,

    /// Entropie minimale pour le second passage
    pub entropy_threshold: f64,

    /// Taille maximale d'un lot non découpé
    pub chunk_threshold: usize,

    /// Nombre de threads de génération (None = automatique)
    pub threads: Option<usize>,

    /// Seed pour une génération reproductible
    pub seed: Option<u64>,

    /// Fichier de sortie du jeu de données
    pub output: PathBuf,

    /// Paralléliser aussi le comptage et le filtrage
    pub parallel_analysis: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            sequence_count: 10_000,
            sequence_length: 20,
            motif_size: 4,
            probabilities: ProbabilityVector::uniform(),
            entropy_threshold: DEFAULT_ENTROPY_THRESHOLD,
            chunk_threshold: DEFAULT_CHUNK_THRESHOLD,
            threads: None,
            seed: None,
            output: PathBuf::from(DEFAULT_DATASET_FILE),
            parallel_analysis: false,
        }
    }
}

/// Configuration lue depuis un fichier
///
/// `config` complète les clés absentes avec les valeurs par défaut;
/// `provided` ne retourne que les paramètres entiers écrits dans le fichier.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: RunConfig,
    provided: [Option<usize>; 3],
}

impl LoadedConfig {
    /// Valeur du paramètre présente dans le fichier (None si la clé est absente)
    pub fn provided(&self, parameter: Parameter) -> Option<usize> {
        self.provided[parameter.index()]
    }
}

impl RunConfig {
    /// Charge la configuration depuis un fichier (TOML, JSON, YAML...)
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<LoadedConfig> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .build()
            .map_err(|e| MotifError::Config(e.to_string()))?;

        let mut provided = [None; 3];
        for parameter in Parameter::ALL {
            provided[parameter.index()] = settings.get::<usize>(parameter.name()).ok();
        }

        let config = settings
            .try_deserialize::<RunConfig>()
            .map_err(|e| MotifError::Config(e.to_string()))?;

        Ok(LoadedConfig { config, provided })
    }

    pub fn get(&self, parameter: Parameter) -> usize {
        match parameter {
            Parameter::SequenceCount => self.sequence_count,
            Parameter::SequenceLength => self.sequence_length,
            Parameter::MotifSize => self.motif_size,
        }
    }

    pub fn set(&mut self, parameter: Parameter, value: usize) {
        match parameter {
            Parameter::SequenceCount => self.sequence_count = value,
            Parameter::SequenceLength => self.sequence_length = value,
            Parameter::MotifSize => self.motif_size = value,
        }
    }

    /// Vérifie les trois paramètres entiers
    pub fn validate(&self) -> Result<()> {
        for parameter in Parameter::ALL {
            parameter.validate(self.get(parameter))?;
        }
        Ok(())
    }

    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            chunk_threshold: self.chunk_threshold,
            threads: self.threads,
        }
    }

    pub fn entropy_filter(&self) -> EntropyFilter {
        EntropyFilter::new(self.entropy_threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parameter_ranges() {
        assert!(!Parameter::SequenceCount.is_valid(999));
        assert!(Parameter::SequenceCount.is_valid(1_000));
        assert!(Parameter::SequenceCount.is_valid(2_000_000));
        assert!(!Parameter::SequenceCount.is_valid(2_000_001));

        assert!(!Parameter::SequenceLength.is_valid(4));
        assert!(Parameter::SequenceLength.is_valid(100));
        assert!(!Parameter::SequenceLength.is_valid(101));

        assert!(!Parameter::MotifSize.is_valid(3));
        assert!(Parameter::MotifSize.is_valid(10));
        assert!(!Parameter::MotifSize.is_valid(11));
    }

    #[test]
    fn test_validate_reports_parameter() {
        let err = Parameter::MotifSize.validate(12).unwrap_err();
        match err {
            MotifError::InvalidParameter { name, value, min, max } => {
                assert_eq!(name, "motif_size");
                assert_eq!(value, 12);
                assert_eq!((min, max), (4, 10));
            }
            other => panic!("erreur inattendue: {:?}", other),
        }
    }

    #[test]
    fn test_default_is_valid() {
        let config = RunConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.entropy_threshold, 1.95);
        assert_eq!(config.probabilities, ProbabilityVector::uniform());
        assert_eq!(config.output, PathBuf::from("Database"));
    }

    #[test]
    fn test_set_and_validate() {
        let mut config = RunConfig::default();
        config.set(Parameter::SequenceLength, 3);
        assert!(config.validate().is_err());
        config.set(Parameter::SequenceLength, 50);
        assert_eq!(config.get(Parameter::SequenceLength), 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_toml() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "sequence_count = 5000\nmotif_size = 6\nentropy_threshold = 1.5\nseed = 7\nprobabilities = [0.4, 0.1, 0.1, 0.4]"
        )
        .unwrap();

        let loaded = RunConfig::load_from_file(file.path()).unwrap();
        assert_eq!(loaded.provided(Parameter::SequenceCount), Some(5000));
        assert_eq!(loaded.provided(Parameter::MotifSize), Some(6));
        // absente du fichier: valeur par défaut, mais pas « fournie »
        assert_eq!(loaded.provided(Parameter::SequenceLength), None);

        let config = loaded.config;
        assert_eq!(config.sequence_count, 5000);
        assert_eq!(config.motif_size, 6);
        assert_eq!(config.sequence_length, 20);
        assert_eq!(config.entropy_threshold, 1.5);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.probabilities.weights(), [0.4, 0.1, 0.1, 0.4]);
    }

    #[test]
    fn test_load_missing_file() {
        let err = RunConfig::load_from_file("/nonexistent/motifgen.toml").unwrap_err();
        assert!(matches!(err, MotifError::Config(_)));
    }
}
