//! Affichage des résultats

pub mod report;
