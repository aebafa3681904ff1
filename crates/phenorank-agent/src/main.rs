//! Phenorank - ranking and scoring for phenotype-matching results.
//! Entry point for the command-line binary.

mod cli;
mod report;

use anyhow::Context;
use clap::Parser;
use phenorank_common::{AnalysisResult, Locale};
use phenorank_config::settings::DEFAULT_CONFIG_FILE;
use phenorank_config::{Config, ConfigError};
use phenorank_session::AppStore;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands, RankArgs};

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let loaded = match cli.config.as_ref() {
        Some(path) => Config::load_from(path),
        None => Config::load_from(DEFAULT_CONFIG_FILE),
    };
    match loaded {
        Ok(config) => Ok(config),
        // Only an implicit config may be absent.
        Err(ConfigError::NotFound(path)) if cli.config.is_none() => {
            warn!("Could not find {}; using built-in defaults", path.display());
            Ok(Config::default())
        }
        Err(e) => Err(e).context("loading configuration"),
    }
}

fn run_rank(store: &mut AppStore, args: &RankArgs) -> anyhow::Result<()> {
    if let Some(tag) = args.locale.as_deref() {
        let locale: Locale = tag.parse()?;
        store.set_locale(locale);
    }

    let raw = AnalysisResult::from_path(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    info!(
        path = %args.input.display(),
        candidates = raw.candidate_count(),
        "analysis result loaded"
    );

    let locale = store.locale();
    let result = store.set_analysis_result(raw);
    if args.json {
        println!("{}", result.to_json_pretty()?);
    } else {
        print!("{}", report::render_tables(result, locale, args.top)?);
    }
    Ok(())
}

fn run_settings(store: &AppStore) {
    let settings = store.settings();
    println!("predict_api_uri = {}", store.predict_api_uri());
    println!("user            = {}", settings.user);
    println!("locale          = {}", store.locale());
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so JSON output stays clean on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("phenorank=debug,info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let mut store = AppStore::from_config(&config);

    match &cli.command {
        Commands::Rank(args) => run_rank(&mut store, args)?,
        Commands::Settings => run_settings(&store),
    }
    Ok(())
}
