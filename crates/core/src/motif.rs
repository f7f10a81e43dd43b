//! Recherche du motif le plus fréquent par comptage exhaustif

use crate::sequence::Sequence;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Motif le plus fréquent et son nombre total d'occurrences
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MotifResult {
    pub motif: String,
    pub count: usize,
}

/// Compteur d'un motif: occurrences et première position (séquence, offset)
#[derive(Debug, Clone, Copy)]
struct Tally {
    count: usize,
    first_seen: (usize, usize),
}

/// Table de comptage de tous les motifs de longueur fixe
///
/// Les clés empruntent directement les séquences scannées. En cas
/// d'égalité, le motif rencontré en premier dans l'ordre de parcours
/// (indice de séquence, puis offset) l'emporte.
#[derive(Debug, Clone)]
pub struct MotifCounts<'a> {
    motif_length: usize,
    tallies: HashMap<&'a str, Tally>,
    total_windows: usize,
}

impl<'a> MotifCounts<'a> {
    fn empty(motif_length: usize) -> Self {
        Self {
            motif_length,
            tallies: HashMap::new(),
            total_windows: 0,
        }
    }

    /// Compte les motifs de `motif_length` bases dans toutes les séquences
    pub fn scan(sequences: &'a [Sequence], motif_length: usize) -> Self {
        let mut counts = Self::empty(motif_length);
        for (index, seq) in sequences.iter().enumerate() {
            counts.add_sequence(index, seq);
        }
        counts
    }

    /// Comme `scan`, réparti sur le pool rayon
    pub fn scan_par(sequences: &'a [Sequence], motif_length: usize) -> Self {
        sequences
            .par_iter()
            .enumerate()
            .fold(
                || Self::empty(motif_length),
                |mut acc, (index, seq)| {
                    acc.add_sequence(index, seq);
                    acc
                },
            )
            .reduce(|| Self::empty(motif_length), Self::merge)
    }

    fn add_sequence(&mut self, index: usize, seq: &'a Sequence) {
        let k = self.motif_length;
        if k == 0 || seq.len() < k {
            return;
        }

        let s = seq.as_str();
        for offset in 0..=s.len() - k {
            let tally = self.tallies.entry(&s[offset..offset + k]).or_insert(Tally {
                count: 0,
                first_seen: (index, offset),
            });
            tally.count += 1;
        }
        self.total_windows += s.len() - k + 1;
    }

    fn merge(mut self, mut other: Self) -> Self {
        if self.tallies.len() < other.tallies.len() {
            std::mem::swap(&mut self, &mut other);
        }

        for (motif, theirs) in other.tallies {
            self.tallies
                .entry(motif)
                .and_modify(|ours| {
                    ours.count += theirs.count;
                    ours.first_seen = ours.first_seen.min(theirs.first_seen);
                })
                .or_insert(theirs);
        }
        self.total_windows += other.total_windows;
        self
    }

    /// Nombre d'occurrences d'un motif (0 s'il est absent)
    pub fn get(&self, motif: &str) -> usize {
        self.tallies.get(motif).map_or(0, |t| t.count)
    }

    /// Nombre de motifs distincts observés
    pub fn distinct(&self) -> usize {
        self.tallies.len()
    }

    /// Nombre total de fenêtres scannées
    pub fn total_windows(&self) -> usize {
        self.total_windows
    }

    /// Motif au compte strictement le plus élevé
    pub fn most_frequent(&self) -> Option<MotifResult> {
        self.tallies
            .iter()
            .max_by(|(_, a), (_, b)| {
                a.count
                    .cmp(&b.count)
                    .then_with(|| b.first_seen.cmp(&a.first_seen))
            })
            .map(|(motif, tally)| MotifResult {
                motif: motif.to_string(),
                count: tally.count,
            })
    }

    /// Les `n` motifs les plus fréquents, par compte décroissant
    pub fn top(&self, n: usize) -> Vec<MotifResult> {
        let mut entries: Vec<(&&str, &Tally)> = self.tallies.iter().collect();
        entries.sort_unstable_by(|(_, a), (_, b)| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.first_seen.cmp(&b.first_seen))
        });

        entries
            .into_iter()
            .take(n)
            .map(|(motif, tally)| MotifResult {
                motif: motif.to_string(),
                count: tally.count,
            })
            .collect()
    }
}

/// Retourne le motif de `motif_length` bases le plus fréquent
///
/// `None` si aucune séquence n'est assez longue (ou si l'ensemble est vide).
pub fn find_most_frequent_motif(sequences: &[Sequence], motif_length: usize) -> Option<MotifResult> {
    MotifCounts::scan(sequences, motif_length).most_frequent()
}

/// Version parallèle de `find_most_frequent_motif`, même résultat
pub fn find_most_frequent_motif_par(
    sequences: &[Sequence],
    motif_length: usize,
) -> Option<MotifResult> {
    MotifCounts::scan_par(sequences, motif_length).most_frequent()
}
