use crate::core::matcher::Query;
use crate::core::report::ReportAggregator;
use crate::core::search::SearchEngine;
use crate::domain::model::{ImportantTerms, ProductItem, SearchReport};
use crate::domain::ports::CatalogStore;
use crate::utils::error::Result;

/// The single entry point for ad-hoc searches and the term report.
///
/// Every call reads the catalog afresh, so a search and a report running at
/// the same time may observe different catalog snapshots.
pub struct CatalogService<S: CatalogStore> {
    store: S,
    engine: SearchEngine,
    aggregator: ReportAggregator,
}

impl<S: CatalogStore> CatalogService<S> {
    pub fn new(store: S, terms: ImportantTerms) -> Self {
        Self {
            store,
            engine: SearchEngine::new(),
            aggregator: ReportAggregator::new(terms),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn important_terms(&self) -> &ImportantTerms {
        self.aggregator.terms()
    }

    pub async fn search(&self, raw_query: &str) -> Result<Vec<ProductItem>> {
        self.run_query(&Query::parse(raw_query)).await
    }

    /// Entry point for request handlers, where the query may be absent.
    pub async fn search_param(&self, raw_query: Option<&str>) -> Result<Vec<ProductItem>> {
        let query = Query::from_param(raw_query)?;
        self.run_query(&query).await
    }

    pub async fn run_report(&self) -> Result<SearchReport> {
        let total = self.store.count().await?;
        tracing::debug!("Catalog holds {} products", total);

        self.aggregator
            .build_report_concurrent(total, |term| async move { self.search(&term).await })
            .await
    }

    async fn run_query(&self, query: &Query) -> Result<Vec<ProductItem>> {
        let items = self.store.list_all().await?;
        Ok(self.engine.search(query, items))
    }
}
