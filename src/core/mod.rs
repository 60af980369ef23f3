pub mod matcher;
pub mod report;
pub mod search;
pub mod service;

pub use crate::domain::model::{ImportantTerms, ProductItem, SearchReport, Searchable};
pub use crate::domain::ports::{CatalogStore, ConfigProvider, Storage};
pub use crate::utils::error::Result;
