//! fa-enumgen CLI
//!
//! Downloads the latest Font Awesome release, writes one enumeration per
//! icon style into the output directory and copies the webfonts and
//! stylesheet next to them.

mod cli;

use std::process::ExitCode;

use clap::Parser;
use fa_enumgen::{
    run, ArchiveProvider, GenerationReport, GeneratorConfig, GithubReleases, LocalArchive, Result,
    TracingSink,
};
use tracing_subscriber::EnvFilter;

use cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match execute(&cli) {
        Ok(report) => {
            println!("{}", report.to_report());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

/// Log to stderr; `RUST_LOG` takes precedence over `--verbose`
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn execute(cli: &Cli) -> Result<GenerationReport> {
    let config = cli.to_config()?;
    let provider = provider_for(cli, &config);
    let mut sink = TracingSink::default();
    run(&config, provider.as_ref(), &mut sink)
}

fn provider_for(cli: &Cli, config: &GeneratorConfig) -> Box<dyn ArchiveProvider> {
    match &cli.archive {
        Some(path) => Box::new(LocalArchive::new(path)),
        None => Box::new(GithubReleases::new(&config.asset_suffix).show_progress(true)),
    }
}
