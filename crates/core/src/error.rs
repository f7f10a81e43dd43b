//! Types d'erreurs pour la bibliothèque motifgen

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MotifError {
    #[error("Base invalide: {0:?}")]
    InvalidBase(char),

    #[error("Paramètre {name} hors plage: {value} pas dans [{min}, {max}]")]
    InvalidParameter {
        name: &'static str,
        value: usize,
        min: usize,
        max: usize,
    },

    #[error("Ligne {line} mal formée: {reason}")]
    MalformedLine { line: usize, reason: String },

    #[error("Impossible de créer le pool de threads: {0}")]
    ThreadPool(String),

    #[error("Erreur de configuration: {0}")]
    Config(String),

    #[error("Erreur IO: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MotifError>;
