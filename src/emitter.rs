//! Writing translation maps to locale files.

use std::{
    fs, io,
    path::PathBuf,
};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::info;

use crate::{
    error::{Error, Result},
    translations::TranslationMap,
};

/// Indentation is capped at ten spaces, like `JSON.stringify`.
pub const MAX_BEAUTIFY: usize = 10;

/// Output file format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain JSON data (`<code>.json`)
    #[default]
    Json,
    /// CommonJS module (`module.exports = ...`)
    Cjs,
    /// ES module (`export default ...`)
    Esm,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Cjs | OutputFormat::Esm => "js",
        }
    }

    pub fn prefix(self) -> &'static str {
        match self {
            OutputFormat::Json => "",
            OutputFormat::Cjs => "module.exports = ",
            OutputFormat::Esm => "export default ",
        }
    }
}

/// Writes one locale file per language into an output directory.
#[derive(Debug, Clone)]
pub struct FileEmitter {
    output_dir: PathBuf,
    format: OutputFormat,
    beautify: usize,
}

impl FileEmitter {
    pub fn new(output_dir: impl Into<PathBuf>, format: OutputFormat, beautify: usize) -> Self {
        Self {
            output_dir: output_dir.into(),
            format,
            beautify: beautify.min(MAX_BEAUTIFY),
        }
    }

    /// Path of the file written for `code`.
    pub fn file_path(&self, code: &str) -> PathBuf {
        self.output_dir
            .join(format!("{}.{}", code, self.format.extension()))
    }

    /// File content for `translations`: the format prefix followed by the JSON data.
    pub fn render(&self, translations: &TranslationMap) -> Result<String> {
        let json = if self.beautify == 0 {
            serde_json::to_string(translations)?
        } else {
            let indent = " ".repeat(self.beautify);
            let mut buf = Vec::new();
            let mut serializer =
                Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent.as_bytes()));
            translations.serialize(&mut serializer)?;
            // serde_json only ever emits valid UTF-8
            String::from_utf8_lossy(&buf).into_owned()
        };
        Ok(format!("{}{}", self.format.prefix(), json))
    }

    /// Write `translations` to `<output_dir>/<code>.<ext>`, replacing any existing file.
    pub fn emit(&self, code: &str, translations: &TranslationMap) -> Result<PathBuf> {
        self.ensure_output_dir()?;

        let content = self.render(translations)?;
        let path = self.file_path(code);
        fs::write(&path, content).map_err(|source| Error::FileWrite {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), "file has been created");

        Ok(path)
    }

    /// Create the output directory if it is missing. Parents are not created.
    fn ensure_output_dir(&self) -> Result<()> {
        if self.output_dir.is_dir() {
            return Ok(());
        }

        info!(path = %self.output_dir.display(), "creating output directory");
        match fs::create_dir(&self.output_dir) {
            Ok(()) => {
                info!(path = %self.output_dir.display(), "output directory has been created");
                Ok(())
            }
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => Ok(()),
            Err(source) => Err(Error::DirectoryCreate {
                path: self.output_dir.clone(),
                source,
            }),
        }
    }
}
