use tracing::debug;

use super::{
    camel_case::to_camel_case,
    languages::{Language, LanguageCatalog},
    map::{KeyAction, TranslationMap},
};
use crate::error::{Error, Result};

/// Translations of one sheet, ready to be emitted.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetTranslations {
    pub language: Language,
    pub translations: TranslationMap,
}

/// Turns the rows of a sheet into a [`TranslationMap`].
pub struct TranslationBuilder<'a> {
    catalog: &'a LanguageCatalog,
}

impl<'a> TranslationBuilder<'a> {
    pub fn new(catalog: &'a LanguageCatalog) -> Self {
        Self { catalog }
    }

    /// Build the translations of `sheet` from its row grid.
    ///
    /// The sheet name must resolve to a catalog language. The first row is a
    /// header and is always skipped; of the remaining rows, only those with a
    /// non-empty namespace, key and value are used.
    pub fn build(&self, sheet: &str, rows: &[Vec<String>]) -> Result<SheetTranslations> {
        let language = self
            .catalog
            .resolve(sheet)
            .ok_or_else(|| Error::UnrecognizedLanguage {
                sheet: sheet.to_string(),
            })?;

        if rows.len() <= 1 {
            return Err(Error::NoData {
                sheet: sheet.to_string(),
            });
        }

        let mut translations = TranslationMap::new();
        for (index, row) in rows.iter().enumerate().skip(1) {
            let Some((namespace, key, value)) = row_cells(row) else {
                debug!(sheet, row = index + 1, "skipping incomplete row");
                continue;
            };

            let namespace = to_camel_case(namespace);
            let key = to_camel_case(key);
            if translations.insert(&namespace, &key, value) == KeyAction::Updated {
                debug!(sheet, row = index + 1, "{namespace}.{key} overwritten");
            }
        }

        Ok(SheetTranslations {
            language: language.clone(),
            translations,
        })
    }
}

/// The namespace, key and value cells of a row, if all three are non-empty.
fn row_cells(row: &[String]) -> Option<(&str, &str, &str)> {
    match row {
        [namespace, key, value, ..]
            if !namespace.is_empty() && !key.is_empty() && !value.is_empty() =>
        {
            Some((namespace.as_str(), key.as_str(), value.as_str()))
        }
        _ => None,
    }
}
