//! Error taxonomy for a generation run.
//!
//! Fatal errors (validation, listing) abort the whole run. Everything else is
//! scoped to a single sheet: the pipeline logs it and moves on to the next one.

use std::{fmt, io, path::PathBuf};

/// Which of the two required inputs are missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingInput {
    SpreadsheetId,
    ApiKey,
    Both,
}

impl MissingInput {
    /// Inspect the required inputs, returning `None` when both are present.
    ///
    /// Only empty strings count as missing; whitespace is passed on as is.
    pub fn check(spreadsheet_id: &str, api_key: &str) -> Option<Self> {
        match (spreadsheet_id.is_empty(), api_key.is_empty()) {
            (true, true) => Some(Self::Both),
            (true, false) => Some(Self::SpreadsheetId),
            (false, true) => Some(Self::ApiKey),
            (false, false) => None,
        }
    }
}

impl fmt::Display for MissingInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Self::SpreadsheetId => "Spreadsheet ID is required",
            Self::ApiKey => "API key is required",
            Self::Both => "Spreadsheet ID and API key are required",
        };
        f.write_str(message)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Validation(MissingInput),

    #[error("Empty list of sheets in spreadsheet {spreadsheet_id}")]
    EmptySpreadsheet { spreadsheet_id: String },

    #[error("{}", remote_fetch_message(.spreadsheet_id, .range.as_deref()))]
    RemoteFetch {
        spreadsheet_id: String,
        range: Option<String>,
        #[source]
        source: reqwest::Error,
    },

    #[error("No data found in sheet {sheet}")]
    NoData { sheet: String },

    #[error("Incorrect ISO language name: {sheet}")]
    UnrecognizedLanguage { sheet: String },

    #[error("Error creating directory {}", .path.display())]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error writing file {}", .path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error serializing translations")]
    Serialize(#[from] serde_json::Error),
}

fn remote_fetch_message(spreadsheet_id: &str, range: Option<&str>) -> String {
    match range {
        Some(range) => format!("Error loading spreadsheet {spreadsheet_id} with range {range}"),
        None => format!("Error loading spreadsheet {spreadsheet_id}"),
    }
}

impl Error {
    /// Whether this error aborts the entire run rather than a single sheet.
    ///
    /// A `RemoteFetch` without a range comes from the listing stage and is fatal;
    /// with a range it belongs to one sheet.
    pub fn is_fatal(&self) -> bool {
        match self {
            Error::Validation(_) | Error::EmptySpreadsheet { .. } => true,
            Error::RemoteFetch { range, .. } => range.is_none(),
            Error::NoData { .. }
            | Error::UnrecognizedLanguage { .. }
            | Error::DirectoryCreate { .. }
            | Error::FileWrite { .. }
            | Error::Serialize(_) => false,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
