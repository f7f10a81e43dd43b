//! CLI pour motifgen

use clap::{Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;

mod commands;
mod display;
mod prompt;

use commands::{analyze, generate, run};

#[derive(Parser)]
#[command(name = "motifgen")]
#[command(about = "Génération de séquences ADN aléatoires et recherche de motifs", long_about = None)]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Niveau de verbosité
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Fichier de configuration (TOML, JSON, YAML)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

/// Paramètres de génération communs à `run` et `generate`
#[derive(Args, Clone, Default)]
pub struct GenerationArgs {
    /// Nombre de séquences [1000-2000000]
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// Longueur de chaque séquence [5-100]
    #[arg(short = 'm', long)]
    length: Option<usize>,

    /// Fichier de sortie du jeu de données
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Seed pour une génération reproductible
    #[arg(long)]
    seed: Option<u64>,

    /// Nombre de threads de génération
    #[arg(long)]
    threads: Option<usize>,

    /// Taille maximale d'un lot non découpé
    #[arg(long)]
    chunk_threshold: Option<usize>,

    /// Probabilités A,C,G,T (ex: 0.25,0.25,0.25,0.25)
    #[arg(short, long, value_delimiter = ',')]
    probabilities: Option<Vec<f64>>,
}

/// Paramètres d'analyse communs à `run` et `analyze`
#[derive(Args, Clone, Default)]
pub struct AnalysisArgs {
    /// Taille du motif [4-10]
    #[arg(short = 's', long)]
    motif_size: Option<usize>,

    /// Seuil d'entropie minimal
    #[arg(short, long)]
    threshold: Option<f64>,

    /// Paralléliser le comptage et le filtrage
    #[arg(long)]
    parallel: bool,

    /// Format de sortie
    #[arg(short, long, value_enum, default_value = "table")]
    format: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Génère le jeu de données puis l'analyse
    Run {
        #[command(flatten)]
        generation: GenerationArgs,

        #[command(flatten)]
        analysis: AnalysisArgs,
    },

    /// Génère et écrit le jeu de données uniquement
    Generate {
        #[command(flatten)]
        generation: GenerationArgs,
    },

    /// Analyse un jeu de données existant
    Analyze {
        /// Fichier du jeu de données
        #[arg(short, long)]
        input: PathBuf,

        #[command(flatten)]
        analysis: AnalysisArgs,

        /// Afficher aussi les K motifs les plus fréquents
        #[arg(long, default_value = "0")]
        top: usize,
    },
}

#[derive(clap::ValueEnum, Clone, Copy, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    motifgen_core::init_logging(motifgen_core::level_from_verbosity(cli.verbose));

    match cli.command {
        Commands::Run {
            generation,
            analysis,
        } => {
            run::run(cli.config, generation, analysis)?;
        }
        Commands::Generate { generation } => {
            generate::run(cli.config, generation)?;
        }
        Commands::Analyze {
            input,
            analysis,
            top,
        } => {
            analyze::run(cli.config, input, analysis, top)?;
        }
    }

    Ok(())
}

/// Crée une barre de progression spinner
pub fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg}") {
        pb.set_style(style);
    }
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
