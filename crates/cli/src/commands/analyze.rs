//! Commande d'analyse d'un jeu de données existant

use crate::display::report::{print_analysis, print_json, print_top, with_field};
use crate::prompt::{prompt_until_valid, TermPrompter};
use crate::{create_spinner, AnalysisArgs, OutputFormat};
use anyhow::Result;
use motifgen_core::{analyze, load_dataset, AnalysisOptions, MotifCounts, Parameter, RunConfig};
use std::path::PathBuf;

pub fn run(
    config_path: Option<PathBuf>,
    input: PathBuf,
    analysis: AnalysisArgs,
    top: usize,
) -> Result<()> {
    let loaded = config_path.map(RunConfig::load_from_file).transpose()?;

    let initial = analysis.motif_size.or_else(|| {
        loaded
            .as_ref()
            .and_then(|loaded| loaded.provided(Parameter::MotifSize))
    });
    let motif_size = prompt_until_valid(&mut TermPrompter::new(), Parameter::MotifSize, initial)?;

    let base = loaded.map(|loaded| loaded.config).unwrap_or_default();
    let threshold = analysis.threshold.unwrap_or(base.entropy_threshold);
    let options = AnalysisOptions {
        motif_size,
        filter: motifgen_core::EntropyFilter::new(threshold),
        parallel: analysis.parallel || base.parallel_analysis,
    };

    if matches!(analysis.format, OutputFormat::Table) {
        println!("📊 Analyse de: {}", input.display());
    }

    let spinner = create_spinner("Lecture des séquences...");
    let sequences = load_dataset(&input)?;
    spinner.finish_with_message(format!("{} séquences lues", sequences.len()));

    let spinner = create_spinner("Recherche des motifs...");
    let report = analyze(&sequences, &options);
    let ranking = if top > 0 {
        let counts = if options.parallel {
            MotifCounts::scan_par(&sequences, motif_size)
        } else {
            MotifCounts::scan(&sequences, motif_size)
        };
        counts.top(top)
    } else {
        Vec::new()
    };
    spinner.finish_and_clear();

    match analysis.format {
        OutputFormat::Table => {
            print_analysis(&report);
            if !ranking.is_empty() {
                print_top(&ranking);
            }
        }
        OutputFormat::Json => {
            let value = with_field(
                serde_json::to_value(&report)?,
                "top",
                serde_json::to_value(&ranking)?,
            );
            print_json(&value)?;
        }
    }

    Ok(())
}
