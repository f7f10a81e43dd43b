//! Commande d'exécution complète

use crate::commands::resolve_config;
use crate::display::report::{print_analysis, print_json};
use crate::{create_spinner, AnalysisArgs, GenerationArgs, OutputFormat};
use anyhow::Result;
use motifgen_core::Pipeline;
use std::path::PathBuf;

pub fn run(config_path: Option<PathBuf>, generation: GenerationArgs, analysis: AnalysisArgs) -> Result<()> {
    let config = resolve_config(config_path.as_deref(), &generation, Some(&analysis))?;

    let table = matches!(analysis.format, OutputFormat::Table);
    if table {
        println!(
            "🧬 {} séquences de {} bases, motifs de {} bases",
            config.sequence_count, config.sequence_length, config.motif_size
        );
    }

    let pipeline = Pipeline::new(config)?;

    let spinner = create_spinner("Génération et analyse...");
    let report = pipeline.run()?;
    spinner.finish_with_message(format!(
        "{} séquences écrites dans {} ({:.0} ms)",
        report.sequence_count,
        report.dataset.display(),
        report.generation_ms
    ));

    if table {
        print_analysis(&report.analysis);
        println!("\n✅ Terminé!");
    } else {
        print_json(&report)?;
    }

    Ok(())
}
