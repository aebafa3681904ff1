use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "phenorank", version, about = "Rank and score phenotype-matching results")]
pub struct Cli {
    /// Config file; ./phenorank.toml is used when neither this nor the env var is set
    #[arg(long, global = true, env = "PHENORANK_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Annotate a prediction result with ranks and scores
    Rank(RankArgs),
    /// Show the effective connection settings
    Settings,
}

#[derive(Debug, Args)]
pub struct RankArgs {
    /// Prediction result as returned by the backend (JSON)
    pub input: PathBuf,

    /// Print the annotated result as JSON instead of tables
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Rows per list in table output (0 = all)
    #[arg(long, default_value_t = 10)]
    pub top: usize,

    /// Display locale for HPO term labels, e.g. en-US, ja
    #[arg(long)]
    pub locale: Option<String>,
}
