use crate::utils::error::Result;
use crate::utils::validation::validate_terms;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Terms tracked by the daily report unless configuration says otherwise.
pub const DEFAULT_IMPORTANT_TERMS: [&str; 4] = ["Cool", "Amazing", "Perfect", "Kids"];

/// The two text fields a catalog entry exposes to matching.
pub trait Searchable {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductItem {
    pub id: i64,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl ProductItem {
    pub fn new(id: i64, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            image: None,
        }
    }
}

impl Searchable for ProductItem {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }
}

impl<T: Searchable + ?Sized> Searchable for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn description(&self) -> &str {
        (**self).description()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchReport {
    pub product_count: usize,
    pub search_term_hits: BTreeMap<String, usize>,
}

impl SearchReport {
    pub fn new(product_count: usize, search_term_hits: BTreeMap<String, usize>) -> Self {
        Self {
            product_count,
            search_term_hits,
        }
    }

    pub fn hits(&self, term: &str) -> Option<usize> {
        self.search_term_hits.get(term).copied()
    }
}

/// Ordered, non-empty, duplicate-free list of report terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportantTerms(Vec<String>);

impl ImportantTerms {
    pub fn new(terms: Vec<String>) -> Result<Self> {
        validate_terms("important_terms", &terms)?;
        Ok(Self(terms))
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl Default for ImportantTerms {
    fn default() -> Self {
        Self(DEFAULT_IMPORTANT_TERMS.iter().map(|t| t.to_string()).collect())
    }
}
