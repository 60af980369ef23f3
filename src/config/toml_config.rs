use crate::adapters::http::DEFAULT_TIMEOUT_SECONDS;
use crate::adapters::{CatalogFormat, FileCatalog, HttpCatalog, LocalStorage};
use crate::domain::model::{ImportantTerms, DEFAULT_IMPORTANT_TERMS};
use crate::domain::ports::{CatalogStore, ConfigProvider};
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const CATALOG_TYPES: [&str; 3] = ["json", "csv", "http"];
pub const REPORT_FORMATS: [&str; 2] = ["json", "csv"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub r#type: String,
    pub path: Option<String>,
    pub endpoint: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_important_terms")]
    pub important_terms: Vec<String>,
    pub output_path: Option<String>,
    #[serde(default = "default_output_formats")]
    pub output_formats: Vec<String>,
}

fn default_important_terms() -> Vec<String> {
    DEFAULT_IMPORTANT_TERMS.iter().map(|t| t.to_string()).collect()
}

fn default_output_formats() -> Vec<String> {
    vec!["json".to_string()]
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            r#type: "json".to_string(),
            path: Some("catalog.json".to_string()),
            endpoint: None,
            timeout_seconds: None,
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            important_terms: default_important_terms(),
            output_path: None,
            output_formats: default_output_formats(),
        }
    }
}

impl AppConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| CatalogError::ConfigError {
            message: format!("cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CatalogError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CatalogError::ConfigError {
            message: format!("env substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    /// Points the catalog at a local file, inferring JSON or CSV from the extension.
    pub fn use_catalog_file(&mut self, path: &str) -> Result<()> {
        let format =
            CatalogFormat::from_path(path).ok_or_else(|| CatalogError::InvalidConfigValueError {
                field: "catalog.path".to_string(),
                value: path.to_string(),
                reason: "Expected a .json or .csv file".to_string(),
            })?;
        self.catalog.r#type = match format {
            CatalogFormat::Json => "json",
            CatalogFormat::Csv => "csv",
        }
        .to_string();
        self.catalog.path = Some(path.to_string());
        Ok(())
    }

    pub fn use_endpoint(&mut self, endpoint: &str) {
        self.catalog.r#type = "http".to_string();
        self.catalog.endpoint = Some(endpoint.to_string());
    }

    pub fn report_terms(&self) -> Result<ImportantTerms> {
        ImportantTerms::new(self.report.important_terms.clone())
    }

    pub fn validate_config(&self) -> Result<()> {
        self.catalog.validate()?;

        validation::validate_terms("report.important_terms", &self.report.important_terms)?;

        if let Some(output_path) = &self.report.output_path {
            validation::validate_path("report.output_path", output_path)?;
        }

        for format in &self.report.output_formats {
            validation::validate_one_of("report.output_formats", format, &REPORT_FORMATS)?;
        }

        Ok(())
    }
}

impl CatalogConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS))
    }

    /// Builds the catalog store this section describes.
    pub fn open(&self) -> Result<Box<dyn CatalogStore>> {
        self.validate()?;

        match self.r#type.as_str() {
            "http" => {
                let endpoint = validation::validate_required_field("catalog.endpoint", &self.endpoint)?;
                Ok(Box::new(HttpCatalog::new(endpoint.clone(), self.timeout())?))
            }
            kind => {
                let path = validation::validate_required_field("catalog.path", &self.path)?;
                let format = CatalogFormat::from_name(kind).ok_or_else(|| {
                    CatalogError::InvalidConfigValueError {
                        field: "catalog.type".to_string(),
                        value: kind.to_string(),
                        reason: format!("Supported values: {}", CATALOG_TYPES.join(", ")),
                    }
                })?;
                Ok(Box::new(FileCatalog::new(
                    LocalStorage::new("."),
                    path.clone(),
                    format,
                )))
            }
        }
    }
}

impl Validate for CatalogConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_one_of("catalog.type", &self.r#type, &CATALOG_TYPES)?;

        if self.r#type == "http" {
            let endpoint = validation::validate_required_field("catalog.endpoint", &self.endpoint)?;
            validation::validate_url("catalog.endpoint", endpoint)?;
            if let Some(timeout) = self.timeout_seconds {
                validation::validate_positive_number("catalog.timeout_seconds", timeout, 1)?;
            }
        } else {
            let path = validation::validate_required_field("catalog.path", &self.path)?;
            validation::validate_path("catalog.path", path)?;
        }

        Ok(())
    }
}

impl ConfigProvider for AppConfig {
    fn important_terms(&self) -> &[String] {
        &self.report.important_terms
    }

    fn report_output_path(&self) -> Option<&str> {
        self.report.output_path.as_deref()
    }

    fn report_formats(&self) -> &[String] {
        &self.report.output_formats
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
