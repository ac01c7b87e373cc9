use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Action taken on a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Added,
    Updated,
}

/// Two-level translation mapping: namespace -> key -> translated string.
///
/// Namespaces and keys keep the order of their first insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationMap {
    namespaces: IndexMap<String, IndexMap<String, String>>,
}

impl TranslationMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `namespace.key` to `value`, creating the namespace if needed.
    ///
    /// A later insert for the same pair overwrites the earlier value in place.
    pub fn insert(&mut self, namespace: &str, key: &str, value: &str) -> KeyAction {
        let keys = self.namespaces.entry(namespace.to_string()).or_default();
        match keys.insert(key.to_string(), value.to_string()) {
            Some(_) => KeyAction::Updated,
            None => KeyAction::Added,
        }
    }

    pub fn get(&self, namespace: &str, key: &str) -> Option<&str> {
        self.namespaces.get(namespace)?.get(key).map(String::as_str)
    }

    pub fn namespaces(&self) -> impl Iterator<Item = &str> {
        self.namespaces.keys().map(String::as_str)
    }

    /// Total number of translated keys across all namespaces.
    pub fn len(&self) -> usize {
        self.namespaces.values().map(IndexMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
