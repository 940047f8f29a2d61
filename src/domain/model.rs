use serde::{Deserialize, Serialize};

/// Storage key holding the serialized recipe collection.
pub const CACHE_KEY: &str = "recipes";

pub const DEFAULT_SOURCES: [&str; 6] = [
    "https://introweb.tech/assets/json/1_50-thanksgiving-side-dishes.json",
    "https://introweb.tech/assets/json/2_roasting-turkey-breast-with-stuffing.json",
    "https://introweb.tech/assets/json/3_moms-cornbread-stuffing.json",
    "https://introweb.tech/assets/json/4_50-indulgent-thanksgiving-side-dishes-for-any-holiday-gathering.json",
    "https://introweb.tech/assets/json/5_healthy-thanksgiving-recipe-crockpot-turkey-breast.json",
    "https://introweb.tech/assets/json/6_one-pot-thanksgiving-dinner.json",
];

/// A recipe document. The loader never looks inside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Recipe(pub serde_json::Value);

impl Recipe {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    pub fn data(&self) -> &serde_json::Value {
        &self.0
    }
}

impl From<serde_json::Value> for Recipe {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}

pub type RecipeCollection = Vec<Recipe>;

/// Ordered list of recipe URLs. Order is preserved and duplicates are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceList(Vec<String>);

impl SourceList {
    pub fn new(urls: Vec<String>) -> Self {
        Self(urls)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl Default for SourceList {
    fn default() -> Self {
        Self(DEFAULT_SOURCES.iter().map(|s| s.to_string()).collect())
    }
}

impl From<Vec<String>> for SourceList {
    fn from(urls: Vec<String>) -> Self {
        Self(urls)
    }
}
