//! Sheetlocales - i18n locale files from a Google Sheets spreadsheet
//!
//! Sheetlocales reads every sheet of a spreadsheet, resolves the sheet name to
//! a language, and writes that sheet's `namespace | key | value` rows as a
//! nested JSON, CommonJS or ES module locale file.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, commands, report)
//! - `config`: Configuration file loading and parsing
//! - `emitter`: Serializing translations and writing locale files
//! - `error`: Error taxonomy of a generation run
//! - `logging`: Log output setup
//! - `pipeline`: Sheet-by-sheet generation run
//! - `sheets`: Spreadsheet access (Google Sheets API client)
//! - `translations`: Rows to translation maps, language catalog

pub mod cli;
pub mod config;
pub mod emitter;
pub mod error;
pub mod logging;
pub mod pipeline;
pub mod sheets;
pub mod translations;
