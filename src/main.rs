use anyhow::Result;
use clap::Parser;

use nlpipe::cli::{self, Cli, Commands, Settings};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = Settings {
        config: cli.config.as_deref(),
        language: cli.language.as_deref(),
        stopwords: &cli.stopwords,
    };

    dispatch(cli.command, &settings)
}

fn dispatch(command: Commands, settings: &Settings<'_>) -> Result<()> {
    match command {
        Commands::Process { text, file, format } => {
            cli::process::run(settings, text, file.as_deref(), format)
        }
        Commands::Demo { format } => cli::process::run_demo(settings, format),
        Commands::Tokens { text, file } => cli::stages::run_tokens(settings, text, file.as_deref()),
        Commands::Entities { text, file } => {
            cli::stages::run_entities(settings, text, file.as_deref())
        }
        Commands::Phrases { text, file } => {
            cli::stages::run_phrases(settings, text, file.as_deref())
        }
        Commands::Stopwords => cli::stopwords::run(settings),
    }
}
