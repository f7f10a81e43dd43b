//! Affichage des rapports d'analyse

use anyhow::Result;
use motifgen_core::{AnalysisReport, MotifResult, PhaseReport};
use serde_json::Value;
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct PhaseRow {
    #[tabled(rename = "Passe")]
    phase: &'static str,
    #[tabled(rename = "Séquences")]
    sequences: usize,
    #[tabled(rename = "Motif")]
    motif: String,
    #[tabled(rename = "Occurrences")]
    count: String,
    #[tabled(rename = "Temps (ms)")]
    elapsed: String,
}

impl PhaseRow {
    fn new(phase: &'static str, report: &PhaseReport) -> Self {
        let (motif, count) = match &report.motif {
            Some(result) => (result.motif.clone(), result.count.to_string()),
            None => ("-".to_string(), "-".to_string()),
        };
        Self {
            phase,
            sequences: report.sequences,
            motif,
            count,
            elapsed: format!("{:.1}", report.elapsed_ms),
        }
    }
}

fn motif_label(motif: &Option<MotifResult>) -> String {
    match motif {
        Some(result) => format!("{} ({} occurrences)", result.motif, result.count),
        None => "aucun".to_string(),
    }
}

/// Affiche les deux passes d'analyse
pub fn print_analysis(report: &AnalysisReport) {
    println!("\n📊 Analyse (motifs de {} bases):", report.motif_size);
    println!("   Motif le plus fréquent: {}", motif_label(&report.full.motif));
    println!("   Temps total: {:.0} ms", report.full.elapsed_ms);
    println!(
        "   Séquences après filtrage par entropie (>= {}): {}",
        report.entropy_threshold, report.filtered.sequences
    );
    println!(
        "   Motif le plus fréquent après filtrage: {}",
        motif_label(&report.filtered.motif)
    );
    println!("   Temps total: {:.0} ms", report.filtered.elapsed_ms);

    let rows = vec![
        PhaseRow::new("complet", &report.full),
        PhaseRow::new("filtré", &report.filtered),
    ];
    println!();
    println!("{}", Table::new(rows));
}

/// Affiche les motifs les plus fréquents
pub fn print_top(top: &[MotifResult]) {
    #[derive(Tabled)]
    struct TopRow {
        #[tabled(rename = "Rang")]
        rank: usize,
        #[tabled(rename = "Motif")]
        motif: String,
        #[tabled(rename = "Occurrences")]
        count: usize,
    }

    let rows: Vec<TopRow> = top
        .iter()
        .enumerate()
        .map(|(i, result)| TopRow {
            rank: i + 1,
            motif: result.motif.clone(),
            count: result.count,
        })
        .collect();

    println!("\n🔝 Motifs les plus fréquents:");
    println!("{}", Table::new(rows));
}

/// Affiche une valeur sérialisable en JSON indenté
pub fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Ajoute un champ à un objet JSON
pub fn with_field(mut value: Value, key: &str, field: Value) -> Value {
    if let Value::Object(map) = &mut value {
        map.insert(key.to_string(), field);
    }
    value
}
