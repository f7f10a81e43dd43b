//! Sous-commandes de la CLI

pub mod analyze;
pub mod generate;
pub mod run;

use crate::prompt::{prompt_until_valid, Prompter, TermPrompter};
use crate::{AnalysisArgs, GenerationArgs};
use anyhow::{bail, Result};
use motifgen_core::{Parameter, ProbabilityVector, RunConfig};
use std::path::Path;

/// Construit la configuration: fichier, puis options, puis saisie interactive
///
/// Un paramètre entier absent des options et du fichier (ou hors plage) est redemandé jusqu'à obtenir
/// une valeur valide.
pub fn resolve_config(
    config_path: Option<&Path>,
    generation: &GenerationArgs,
    analysis: Option<&AnalysisArgs>,
) -> Result<RunConfig> {
    let mut prompter = TermPrompter::new();
    resolve_config_with(config_path, generation, analysis, &mut prompter)
}

fn resolve_config_with<P: Prompter>(
    config_path: Option<&Path>,
    generation: &GenerationArgs,
    analysis: Option<&AnalysisArgs>,
    prompter: &mut P,
) -> Result<RunConfig> {
    let loaded = config_path.map(RunConfig::load_from_file).transpose()?;
    let mut config = loaded
        .as_ref()
        .map(|loaded| loaded.config.clone())
        .unwrap_or_default();

    if let Some(output) = &generation.output {
        config.output = output.clone();
    }
    if generation.seed.is_some() {
        config.seed = generation.seed;
    }
    if generation.threads.is_some() {
        config.threads = generation.threads;
    }
    if let Some(chunk_threshold) = generation.chunk_threshold {
        config.chunk_threshold = chunk_threshold;
    }
    if let Some(probabilities) = &generation.probabilities {
        config.probabilities = parse_probabilities(probabilities)?;
    }
    if !config.probabilities.is_normalized() {
        tracing::warn!(
            "Les probabilités {:?} ne somment pas à 1: T absorbe la masse restante",
            config.probabilities.weights()
        );
    }

    let mut requested = vec![
        (Parameter::SequenceCount, generation.count),
        (Parameter::SequenceLength, generation.length),
    ];
    if let Some(analysis) = analysis {
        requested.push((Parameter::MotifSize, analysis.motif_size));
        if let Some(threshold) = analysis.threshold {
            config.entropy_threshold = threshold;
        }
        config.parallel_analysis |= analysis.parallel;
    }

    for (parameter, flag) in requested {
        let initial =
            flag.or_else(|| loaded.as_ref().and_then(|loaded| loaded.provided(parameter)));
        let value = prompt_until_valid(prompter, parameter, initial)?;
        config.set(parameter, value);
    }

    Ok(config)
}

fn parse_probabilities(values: &[f64]) -> Result<ProbabilityVector> {
    match values {
        [a, c, g, t] => Ok(ProbabilityVector::new([*a, *c, *g, *t])),
        _ => bail!("4 probabilités attendues (A,C,G,T), {} fournies", values.len()),
    }
}
