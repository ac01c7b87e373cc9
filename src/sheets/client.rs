use reqwest::Url;
use serde::Deserialize;
use tracing::info;

use super::{Rows, SheetSource};
use crate::error::{Error, Result};

pub const DEFAULT_API_URL: &str = "https://sheets.googleapis.com/v4/spreadsheets/";

#[derive(Debug, Deserialize)]
struct Spreadsheet {
    #[serde(default)]
    sheets: Vec<Sheet>,
}

#[derive(Debug, Deserialize)]
struct Sheet {
    properties: SheetProperties,
}

#[derive(Debug, Deserialize)]
struct SheetProperties {
    title: String,
}

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Option<Rows>,
}

/// Google Sheets v4 client authenticated with an API key.
#[derive(Debug)]
pub struct GoogleSheetsClient {
    api_url: Url,
    api_key: String,
    client: reqwest::Client,
}

impl GoogleSheetsClient {
    pub fn new(api_url: Url, api_key: impl Into<String>) -> Self {
        Self {
            api_url,
            api_key: api_key.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Resource URL below the API root, without credentials.
    fn resource_url(&self, segments: &[&str]) -> Url {
        let mut url = self.api_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn get<T>(&self, mut url: Url) -> reqwest::Result<T>
    where
        T: for<'de> Deserialize<'de>,
    {
        url.query_pairs_mut().append_pair("key", &self.api_key);
        self.client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json::<T>()
            .await
    }
}

impl SheetSource for GoogleSheetsClient {
    async fn list_sheets(&self, spreadsheet_id: &str) -> Result<Vec<String>> {
        let mut url = self.resource_url(&[spreadsheet_id]);
        url.query_pairs_mut()
            .append_pair("fields", "sheets.properties.title");
        info!(spreadsheet_id, %url, "waiting for the list of sheets");

        let spreadsheet: Spreadsheet =
            self.get(url)
                .await
                .map_err(|source| Error::RemoteFetch {
                    spreadsheet_id: spreadsheet_id.to_string(),
                    range: None,
                    source: source.without_url(),
                })?;

        let titles: Vec<String> = spreadsheet
            .sheets
            .into_iter()
            .map(|sheet| sheet.properties.title)
            .collect();
        info!(spreadsheet_id, sheets = ?titles, "received the list of sheets");

        Ok(titles)
    }

    async fn fetch_rows(&self, spreadsheet_id: &str, range: &str) -> Result<Rows> {
        let url = self.resource_url(&[spreadsheet_id, "values", range]);
        info!(spreadsheet_id, range, %url, "waiting for sheet data");

        let value_range: ValueRange =
            self.get(url)
                .await
                .map_err(|source| Error::RemoteFetch {
                    spreadsheet_id: spreadsheet_id.to_string(),
                    range: Some(range.to_string()),
                    source: source.without_url(),
                })?;

        Ok(value_range.values.unwrap_or_default())
    }
}
