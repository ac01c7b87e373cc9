//! Turning spreadsheet rows into translations.
//!
//! - `camel_case`: namespace/key normalization
//! - `languages`: sheet name to language code lookup
//! - `map`: the two-level namespace/key map
//! - `builder`: rows of one sheet to a [`TranslationMap`]

mod builder;
mod camel_case;
mod languages;
mod map;

pub use builder::{SheetTranslations, TranslationBuilder};
pub use camel_case::to_camel_case;
pub use languages::{Language, LanguageCatalog};
pub use map::{KeyAction, TranslationMap};
