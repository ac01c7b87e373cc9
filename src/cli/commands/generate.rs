use std::{env, path::PathBuf};

use anyhow::{Context, Result};
use reqwest::Url;
use tracing::error;

use super::CommandResult;
use crate::{
    cli::args::GenerateArgs,
    config::{Config, load_config},
    emitter::{FileEmitter, OutputFormat},
    error::Error,
    pipeline::{Pipeline, RunSummary},
    sheets::GoogleSheetsClient,
    translations::LanguageCatalog,
};

/// Settings of a generation run after merging CLI arguments over the config file.
#[derive(Debug)]
pub struct GenerateOptions {
    pub spreadsheet_id: String,
    pub api_key: String,
    pub output_dir: PathBuf,
    pub format: OutputFormat,
    pub beautify: usize,
    pub api_url: Url,
    pub catalog: LanguageCatalog,
}

impl GenerateOptions {
    /// Merge `args` over `config`. Missing id or key are left empty; the
    /// pipeline reports them.
    pub fn resolve(args: GenerateArgs, config: Config) -> Result<Self> {
        let api_url = config.parsed_api_url()?;
        let catalog = config.catalog();
        Ok(Self {
            spreadsheet_id: args
                .spreadsheet_id
                .or(config.spreadsheet_id)
                .unwrap_or_default(),
            api_key: args.api_key.or(config.api_key).unwrap_or_default(),
            output_dir: args
                .output_dir
                .unwrap_or_else(|| PathBuf::from(config.output_dir)),
            format: args.format.unwrap_or(config.format),
            beautify: args.beautify.unwrap_or(config.beautify),
            api_url,
            catalog,
        })
    }
}

/// How a generation run ended.
#[derive(Debug)]
pub enum GenerateOutcome {
    Completed(RunSummary),
    /// Validation or sheet listing failed; nothing was written.
    Aborted(Error),
}

pub fn generate(args: GenerateArgs) -> Result<CommandResult> {
    let cwd = env::current_dir().context("Failed to read the current directory")?;
    let config = load_config(&cwd)?.config;
    let options = GenerateOptions::resolve(args, config)?;

    let outcome = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(run(&options));

    Ok(CommandResult::Generate(outcome))
}

pub async fn run(options: &GenerateOptions) -> GenerateOutcome {
    let client = GoogleSheetsClient::new(options.api_url.clone(), options.api_key.as_str());
    let emitter = FileEmitter::new(&options.output_dir, options.format, options.beautify);
    let pipeline = Pipeline::new(&client, &options.catalog, &emitter);

    match pipeline.run(&options.spreadsheet_id, &options.api_key).await {
        Ok(summary) => GenerateOutcome::Completed(summary),
        Err(err) => {
            match std::error::Error::source(&err) {
                Some(source) => error!(spreadsheet_id = %options.spreadsheet_id, "{err}: {source}"),
                None => error!(spreadsheet_id = %options.spreadsheet_id, "{err}"),
            }
            GenerateOutcome::Aborted(err)
        }
    }
}
