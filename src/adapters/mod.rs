// Adapters layer: concrete catalog stores and storage backends.

pub mod file;
pub mod http;
pub mod local_storage;
pub mod memory;

pub use file::{CatalogFormat, FileCatalog};
pub use http::HttpCatalog;
pub use local_storage::LocalStorage;
pub use memory::InMemoryCatalog;
