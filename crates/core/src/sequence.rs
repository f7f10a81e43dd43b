//! Bases nucléotidiques et séquences

use crate::error::{MotifError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Nucléotides de l'alphabet à 4 symboles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Base {
    A, // Adénine
    C, // Cytosine
    G, // Guanine
    T, // Thymine
}

impl Base {
    /// Les quatre bases, dans l'ordre utilisé pour l'échantillonnage
    pub const ALL: [Base; 4] = [Base::A, Base::C, Base::G, Base::T];

    /// Convertit un caractère en base
    pub fn from_char(c: char) -> Result<Self> {
        match c.to_ascii_uppercase() {
            'A' => Ok(Base::A),
            'C' => Ok(Base::C),
            'G' => Ok(Base::G),
            'T' => Ok(Base::T),
            _ => Err(MotifError::InvalidBase(c)),
        }
    }

    /// Convertit une base en caractère
    pub fn as_char(self) -> char {
        match self {
            Base::A => 'A',
            Base::C => 'C',
            Base::G => 'G',
            Base::T => 'T',
        }
    }

    /// Position de la base dans `Base::ALL`
    pub fn index(self) -> usize {
        match self {
            Base::A => 0,
            Base::C => 1,
            Base::G => 2,
            Base::T => 3,
        }
    }

    pub(crate) fn from_ascii(b: u8) -> Option<Self> {
        match b {
            b'A' => Some(Base::A),
            b'C' => Some(Base::C),
            b'G' => Some(Base::G),
            b'T' => Some(Base::T),
            _ => None,
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl TryFrom<char> for Base {
    type Error = MotifError;

    fn try_from(c: char) -> Result<Self> {
        Base::from_char(c)
    }
}

/// Séquence nucléotidique immuable, stockée sous forme de chaîne ASCII compacte
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Sequence(String);

/// Ensemble ordonné de séquences, indexé dans l'ordre de génération
pub type SequenceSet = Vec<Sequence>;

impl Sequence {
    /// Chaîne déjà construite à partir de `Base::as_char`
    pub(crate) fn from_trusted(s: String) -> Self {
        debug_assert!(s.bytes().all(|b| Base::from_ascii(b).is_some()));
        Self(s)
    }

    /// Retourne la longueur de la séquence
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Vérifie si la séquence est vide
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Itère sur les bases
    pub fn bases(&self) -> impl Iterator<Item = Base> + '_ {
        // Le contenu est validé à la construction
        self.0.bytes().filter_map(Base::from_ascii)
    }

    /// Nombre d'occurrences de chaque base, dans l'ordre de `Base::ALL`
    pub fn base_counts(&self) -> [usize; 4] {
        let mut freq = [0usize; 4];
        for base in self.bases() {
            freq[base.index()] += 1;
        }
        freq
    }
}

impl FromStr for Sequence {
    type Err = MotifError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s
            .chars()
            .map(|c| Base::from_char(c).map(Base::as_char))
            .collect::<Result<String>>()?;
        Ok(Self(normalized))
    }
}

impl TryFrom<String> for Sequence {
    type Error = MotifError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Sequence> for String {
    fn from(seq: Sequence) -> Self {
        seq.0
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
