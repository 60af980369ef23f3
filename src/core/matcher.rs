//! Decides whether a single catalog entry matches a raw query.
//!
//! A query wrapped in double quotes (`"Widget"`) asks for an exact,
//! case-sensitive match of a whole field. Anything else is a
//! case-insensitive substring match. Either way the entry matches when its
//! name or its description does.

use crate::domain::model::Searchable;
use crate::utils::error::{CatalogError, Result};

const QUOTE: char = '"';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    Exact,
    Substring,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    mode: MatchMode,
    needle: String,
}

impl Query {
    /// Parses a raw query exactly as received from the caller.
    ///
    /// Exact mode needs a distinct opening and closing quote, so a lone `"`
    /// is a substring query for the quote character itself, while `""` is an
    /// exact query for the empty string. Only one quote is removed from each
    /// end.
    pub fn parse(raw: &str) -> Self {
        if raw.len() >= 2 && raw.starts_with(QUOTE) && raw.ends_with(QUOTE) {
            Self {
                mode: MatchMode::Exact,
                needle: raw[1..raw.len() - 1].to_string(),
            }
        } else {
            Self {
                mode: MatchMode::Substring,
                needle: raw.to_lowercase(),
            }
        }
    }

    /// Parses an optional request parameter; an absent query is a caller error.
    pub fn from_param(raw: Option<&str>) -> Result<Self> {
        raw.map(Self::parse)
            .ok_or_else(|| CatalogError::invalid_query("query parameter is missing"))
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// The effective query: quotes stripped in exact mode, lower-cased otherwise.
    pub fn needle(&self) -> &str {
        &self.needle
    }

    pub fn matches<T: Searchable + ?Sized>(&self, item: &T) -> bool {
        match self.mode {
            MatchMode::Exact => item.name() == self.needle || item.description() == self.needle,
            MatchMode::Substring => {
                item.name().to_lowercase().contains(&self.needle)
                    || item.description().to_lowercase().contains(&self.needle)
            }
        }
    }
}

/// One-shot form of [`Query::matches`] for a raw query string.
pub fn matches<T: Searchable + ?Sized>(raw_query: &str, item: &T) -> bool {
    Query::parse(raw_query).matches(item)
}
