use crate::domain::model::{ImportantTerms, SearchReport};
use crate::utils::error::{CatalogError, Result};
use futures::future::try_join_all;
use std::collections::BTreeMap;
use std::future::Future;

/// Builds the per-term hit report. The term list is configuration handed in
/// at construction; the total count comes from the caller.
#[derive(Debug, Clone)]
pub struct ReportAggregator {
    terms: ImportantTerms,
}

impl ReportAggregator {
    pub fn new(terms: ImportantTerms) -> Self {
        Self { terms }
    }

    pub fn terms(&self) -> &ImportantTerms {
        &self.terms
    }

    /// Runs `search_fn` once per term, one after another.
    ///
    /// Terms go through `search_fn` verbatim. The first failing term aborts
    /// the build; no partial report is produced.
    pub fn build_report<T, F>(&self, total_count: usize, mut search_fn: F) -> Result<SearchReport>
    where
        F: FnMut(&str) -> Result<Vec<T>>,
    {
        let mut hits = BTreeMap::new();
        for term in self.terms.iter() {
            let found = search_fn(term).map_err(|e| CatalogError::term_failed(term, e))?;
            hits.insert(term.clone(), found.len());
        }

        Ok(self.finish(total_count, hits))
    }

    /// Same result as [`build_report`](Self::build_report), with every term
    /// searched concurrently and the counts gathered once all complete.
    pub async fn build_report_concurrent<T, F, Fut>(
        &self,
        total_count: usize,
        search_fn: F,
    ) -> Result<SearchReport>
    where
        F: Fn(String) -> Fut,
        Fut: Future<Output = Result<Vec<T>>>,
    {
        let searches = self.terms.iter().map(|term| {
            let pending = search_fn(term.clone());
            async move {
                pending
                    .await
                    .map(|found| (term.clone(), found.len()))
                    .map_err(|e| CatalogError::term_failed(term, e))
            }
        });

        let hits: BTreeMap<String, usize> = try_join_all(searches).await?.into_iter().collect();
        Ok(self.finish(total_count, hits))
    }

    fn finish(&self, total_count: usize, hits: BTreeMap<String, usize>) -> SearchReport {
        tracing::info!(
            "Report built: {} products, {} terms",
            total_count,
            hits.len()
        );
        for (term, count) in &hits {
            tracing::debug!("  {:<12} {}", term, count);
        }
        SearchReport::new(total_count, hits)
    }
}
