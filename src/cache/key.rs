//! Cache key derivation
//!
//! A key is a category plus an optional sub-key. Sub-keys come from domain
//! identifiers (capital + country code, country name) and are normalized so
//! the same place always lands on the same key.

use std::fmt;

use super::Category;

/// Identifies one cached payload
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CacheKey {
    category: Category,
    sub_key: Option<String>,
}

impl CacheKey {
    /// The single key of a category that caches one payload
    pub fn global(category: Category) -> Self {
        Self {
            category,
            sub_key: None,
        }
    }

    /// A per-item key inside a category namespace
    pub fn scoped(category: Category, raw_sub_key: &str) -> Self {
        Self {
            category,
            sub_key: Some(normalize_sub_key(raw_sub_key)),
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn sub_key(&self) -> Option<&str> {
        self.sub_key.as_deref()
    }

    /// File stem of the payload inside the category directory
    pub fn file_stem(&self) -> &str {
        self.sub_key().unwrap_or(self.category.as_str())
    }

    /// Parse the `category[:sub_key]` form produced by `Display`
    pub fn parse(s: &str) -> Option<Self> {
        match s.split_once(':') {
            Some((category, sub_key)) => Some(Self {
                category: Category::parse(category)?,
                sub_key: Some(sub_key.to_string()),
            }),
            None => Category::parse(s).map(Self::global),
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.sub_key {
            Some(sub) => write!(f, "{}:{}", self.category, sub),
            None => write!(f, "{}", self.category),
        }
    }
}

/// Lower-case and trim a sub-key, and keep it inside its namespace directory.
pub fn normalize_sub_key(raw: &str) -> String {
    let normalized: String = raw
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' => '_',
            c => c,
        })
        .collect();

    // ".." would still resolve outside the namespace
    if normalized.chars().all(|c| c == '.') {
        normalized.replace('.', "_")
    } else {
        normalized
    }
}
