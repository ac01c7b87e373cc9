use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::{
    emitter::OutputFormat,
    sheets::DEFAULT_API_URL,
    translations::{Language, LanguageCatalog},
};

pub const CONFIG_FILE_NAME: &str = ".sheetlocalesrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spreadsheet_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default = "default_beautify")]
    pub beautify: usize,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Replaces the built-in ISO 639-1 catalog when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<Language>>,
}

fn default_output_dir() -> String {
    "./locales".to_string()
}

fn default_beautify() -> usize {
    4
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            spreadsheet_id: None,
            api_key: None,
            output_dir: default_output_dir(),
            format: OutputFormat::default(),
            beautify: default_beautify(),
            api_url: default_api_url(),
            languages: None,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if `apiUrl` is not an absolute http(s) URL, or if
    /// `languages` is an empty list or has an entry with an empty name or code.
    pub fn validate(&self) -> Result<()> {
        self.parsed_api_url()?;

        if self.languages.as_ref().is_some_and(Vec::is_empty) {
            bail!("Invalid 'languages': the list must not be empty. Remove it to use the ISO 639-1 catalog.");
        }

        for language in self.languages.iter().flatten() {
            if language.name.is_empty() || language.code.is_empty() {
                bail!(
                    "Invalid entry in 'languages': name and code must not be empty (name: \"{}\", code: \"{}\")",
                    language.name,
                    language.code
                );
            }
        }

        Ok(())
    }

    pub fn parsed_api_url(&self) -> Result<Url> {
        let url = Url::parse(&self.api_url)
            .with_context(|| format!("Invalid URL in 'apiUrl': \"{}\"", self.api_url))?;
        if !matches!(url.scheme(), "http" | "https") {
            bail!("Invalid URL in 'apiUrl': \"{}\" is not http(s)", self.api_url);
        }
        Ok(url)
    }

    /// The language catalog this config selects.
    pub fn catalog(&self) -> LanguageCatalog {
        match &self.languages {
            Some(languages) => LanguageCatalog::new(languages.clone()),
            None => LanguageCatalog::iso_639_1(),
        }
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
