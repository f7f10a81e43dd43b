//! Commande de génération

use crate::commands::resolve_config;
use crate::{create_spinner, GenerationArgs};
use anyhow::Result;
use motifgen_core::Pipeline;
use std::path::PathBuf;

pub fn run(config_path: Option<PathBuf>, generation: GenerationArgs) -> Result<()> {
    let config = resolve_config(config_path.as_deref(), &generation, None)?;
    let output = config.output.clone();

    println!(
        "🧬 Génération de {} séquences de {} bases",
        config.sequence_count, config.sequence_length
    );
    if let Some(seed) = config.seed {
        println!("   Seed: {}", seed);
    }

    let pipeline = Pipeline::new(config)?;

    let spinner = create_spinner("Génération des séquences...");
    let (sequences, generation_ms) = pipeline.generate_and_save()?;
    spinner.finish_with_message(format!(
        "{} séquences écrites dans {} ({:.0} ms)",
        sequences.len(),
        output.display(),
        generation_ms
    ));

    println!("\n✅ Génération terminée!");

    Ok(())
}
