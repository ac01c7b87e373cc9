//! The generation run: list sheets, then fetch, build and emit each one in turn.
//!
//! Validation and listing failures abort the run. Any failure while handling a
//! single sheet is logged and recorded in the [`RunSummary`], and the run moves
//! on to the next sheet. Nothing is retried.

use std::path::PathBuf;

use tracing::{error, info, warn};

use crate::{
    emitter::FileEmitter,
    error::{Error, MissingInput, Result},
    sheets::SheetSource,
    translations::{LanguageCatalog, TranslationBuilder},
};

/// What happened to a single sheet.
#[derive(Debug)]
pub enum SheetOutcome {
    Written {
        sheet: String,
        code: String,
        path: PathBuf,
        keys: usize,
    },
    Skipped {
        sheet: String,
        error: Error,
    },
}

impl SheetOutcome {
    pub fn sheet(&self) -> &str {
        match self {
            SheetOutcome::Written { sheet, .. } | SheetOutcome::Skipped { sheet, .. } => sheet,
        }
    }
}

/// Result of a run that got past validation and listing.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub outcomes: Vec<SheetOutcome>,
}

impl RunSummary {
    pub fn written_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| matches!(outcome, SheetOutcome::Written { .. }))
            .count()
    }

    pub fn skipped_count(&self) -> usize {
        self.outcomes.len() - self.written_count()
    }
}

pub struct Pipeline<'a, S> {
    source: &'a S,
    catalog: &'a LanguageCatalog,
    emitter: &'a FileEmitter,
}

impl<'a, S: SheetSource> Pipeline<'a, S> {
    pub fn new(source: &'a S, catalog: &'a LanguageCatalog, emitter: &'a FileEmitter) -> Self {
        Self {
            source,
            catalog,
            emitter,
        }
    }

    /// Generate one locale file per recognized sheet of `spreadsheet_id`.
    ///
    /// `api_key` is only checked for presence here; the source carries it.
    pub async fn run(&self, spreadsheet_id: &str, api_key: &str) -> Result<RunSummary> {
        if let Some(missing) = MissingInput::check(spreadsheet_id, api_key) {
            return Err(Error::Validation(missing));
        }

        let sheets = self.source.list_sheets(spreadsheet_id).await?;
        if sheets.is_empty() {
            return Err(Error::EmptySpreadsheet {
                spreadsheet_id: spreadsheet_id.to_string(),
            });
        }

        let mut summary = RunSummary::default();
        for sheet in sheets {
            let outcome = match self.process_sheet(spreadsheet_id, &sheet).await {
                Ok((code, path, keys)) => SheetOutcome::Written {
                    sheet,
                    code,
                    path,
                    keys,
                },
                Err(error) => {
                    log_sheet_error(spreadsheet_id, &sheet, &error);
                    SheetOutcome::Skipped { sheet, error }
                }
            };
            summary.outcomes.push(outcome);
        }

        info!(
            spreadsheet_id,
            written = summary.written_count(),
            skipped = summary.skipped_count(),
            "run finished"
        );
        Ok(summary)
    }

    async fn process_sheet(
        &self,
        spreadsheet_id: &str,
        sheet: &str,
    ) -> Result<(String, PathBuf, usize)> {
        let rows = self.source.fetch_rows(spreadsheet_id, sheet).await?;
        let built = TranslationBuilder::new(self.catalog).build(sheet, &rows)?;
        let path = self
            .emitter
            .emit(&built.language.code, &built.translations)?;
        Ok((built.language.code, path, built.translations.len()))
    }
}

fn log_sheet_error(spreadsheet_id: &str, sheet: &str, err: &Error) {
    match err {
        Error::UnrecognizedLanguage { .. } => {
            warn!(spreadsheet_id, sheet, "{err}, skipping sheet")
        }
        _ => match std::error::Error::source(err) {
            Some(source) => error!(spreadsheet_id, sheet, "{err}: {source}"),
            None => error!(spreadsheet_id, sheet, "{err}"),
        },
    }
}
