use crate::utils::error::{CatalogError, Result};
use std::collections::HashSet;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(CatalogError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| CatalogError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if allowed.contains(&value) {
        return Ok(());
    }
    Err(CatalogError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: format!("Supported values: {}", allowed.join(", ")),
    })
}

/// Report terms must be present, non-blank and unique.
pub fn validate_terms(field_name: &str, terms: &[String]) -> Result<()> {
    if terms.is_empty() {
        return Err(CatalogError::ConfigValidationError {
            field: field_name.to_string(),
            message: "At least one term is required".to_string(),
        });
    }

    let mut seen = HashSet::new();
    for term in terms {
        if term.trim().is_empty() {
            return Err(CatalogError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: term.clone(),
                reason: "Term cannot be empty or whitespace-only".to_string(),
            });
        }
        if !seen.insert(term.as_str()) {
            return Err(CatalogError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: term.clone(),
                reason: "Duplicate term".to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("catalog.endpoint", "https://example.com").is_ok());
        assert!(validate_url("catalog.endpoint", "http://example.com").is_ok());
        assert!(validate_url("catalog.endpoint", "").is_err());
        assert!(validate_url("catalog.endpoint", "invalid-url").is_err());
        assert!(validate_url("catalog.endpoint", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("catalog.timeout_seconds", 5, 1).is_ok());
        assert!(validate_positive_number("catalog.timeout_seconds", 0, 1).is_err());
    }

    #[test]
    fn test_validate_terms() {
        let terms = vec!["Cool".to_string(), "Kids".to_string()];
        assert!(validate_terms("report.important_terms", &terms).is_ok());

        assert!(validate_terms("report.important_terms", &[]).is_err());

        let blank = vec!["Cool".to_string(), "  ".to_string()];
        assert!(validate_terms("report.important_terms", &blank).is_err());

        let dup = vec!["Cool".to_string(), "Cool".to_string()];
        assert!(validate_terms("report.important_terms", &dup).is_err());
    }

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("catalog.type", "csv", &["json", "csv", "http"]).is_ok());
        assert!(validate_one_of("catalog.type", "xml", &["json", "csv", "http"]).is_err());
    }
}
