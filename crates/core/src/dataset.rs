//! Lecture et écriture du jeu de données au format texte
//!
//! Une ligne par séquence: `(<indice à partir de 1>)<séquence>`.

use crate::error::{MotifError, Result};
use crate::sequence::{Sequence, SequenceSet};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Nom de fichier par défaut du jeu de données
pub const DEFAULT_DATASET_FILE: &str = "Database";

/// Écrit les séquences, numérotées à partir de 1
pub fn write_dataset<W: Write>(sequences: &[Sequence], mut writer: W) -> Result<()> {
    for (i, seq) in sequences.iter().enumerate() {
        writeln!(writer, "({}){}", i + 1, seq)?;
    }
    writer.flush()?;
    Ok(())
}

/// Écrit le jeu de données dans un fichier (créé ou écrasé)
pub fn save_dataset<P: AsRef<Path>>(sequences: &[Sequence], path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_dataset(sequences, BufWriter::new(file))?;
    info!("{} séquences écrites dans {}", sequences.len(), path.display());
    Ok(())
}

/// Relit un jeu de données écrit par `write_dataset`
///
/// Les lignes vides sont ignorées. La numérotation est vérifiée.
pub fn read_dataset<R: BufRead>(reader: R) -> Result<SequenceSet> {
    let mut sequences = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let line_no = i + 1;
        let malformed = |reason: &str| MotifError::MalformedLine {
            line: line_no,
            reason: reason.to_string(),
        };

        let rest = line
            .strip_prefix('(')
            .ok_or_else(|| malformed("'(' attendu en début de ligne"))?;
        let (index, bases) = rest
            .split_once(')')
            .ok_or_else(|| malformed("')' manquant"))?;
        let index: usize = index
            .parse()
            .map_err(|_| malformed("indice non numérique"))?;

        if index != sequences.len() + 1 {
            return Err(malformed(&format!(
                "indice {} inattendu, {} attendu",
                index,
                sequences.len() + 1
            )));
        }

        sequences.push(bases.parse()?);
    }

    Ok(sequences)
}

/// Charge un jeu de données depuis un fichier
pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<SequenceSet> {
    let path = path.as_ref();
    let sequences = read_dataset(BufReader::new(File::open(path)?))?;
    info!("{} séquences chargées depuis {}", sequences.len(), path.display());
    Ok(sequences)
}
