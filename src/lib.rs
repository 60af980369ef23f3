pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{Cli, Command};

pub use crate::adapters::{FileCatalog, HttpCatalog, InMemoryCatalog, LocalStorage};
pub use crate::app::DailyReportJob;
pub use crate::config::AppConfig;
pub use crate::core::matcher::Query;
pub use crate::core::report::ReportAggregator;
pub use crate::core::search::SearchEngine;
pub use crate::core::service::CatalogService;
pub use crate::domain::model::{ImportantTerms, ProductItem, SearchReport, Searchable};
pub use crate::domain::ports::CatalogStore;
pub use crate::utils::error::{CatalogError, Result};
