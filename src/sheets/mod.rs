//! Remote spreadsheet access.
//!
//! [`SheetSource`] is the seam between the pipeline and the spreadsheet service:
//! [`GoogleSheetsClient`] talks to the Google Sheets v4 REST API, tests plug in
//! an in-memory source.

mod client;

pub use client::{DEFAULT_API_URL, GoogleSheetsClient};

use crate::error::Result;

/// A 2-D grid of cell values, one inner vector per row.
pub type Rows = Vec<Vec<String>>;

#[allow(async_fn_in_trait)]
pub trait SheetSource {
    /// List the sheet titles of a spreadsheet, in spreadsheet order.
    async fn list_sheets(&self, spreadsheet_id: &str) -> Result<Vec<String>>;

    /// Fetch every row of `range` (a sheet name). An empty range yields an empty grid.
    async fn fetch_rows(&self, spreadsheet_id: &str, range: &str) -> Result<Rows>;
}
