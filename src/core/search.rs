use crate::core::matcher::Query;
use crate::domain::model::Searchable;

/// Linear scan over whatever the caller hands in. No index and no I/O.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchEngine;

impl SearchEngine {
    pub fn new() -> Self {
        Self
    }

    /// Keeps the matching items in their original order. Duplicates in the
    /// input stay duplicated in the output.
    pub fn search<T, I>(&self, query: &Query, items: I) -> Vec<T>
    where
        T: Searchable,
        I: IntoIterator<Item = T>,
    {
        let mut scanned = 0usize;
        let hits: Vec<T> = items
            .into_iter()
            .inspect(|_| scanned += 1)
            .filter(|item| query.matches(item))
            .collect();

        tracing::debug!(
            "Query {:?} ({:?}) matched {} of {} items",
            query.needle(),
            query.mode(),
            hits.len(),
            scanned
        );
        hits
    }

    /// Convenience for raw query strings.
    pub fn search_raw<T, I>(&self, raw_query: &str, items: I) -> Vec<T>
    where
        T: Searchable,
        I: IntoIterator<Item = T>,
    {
        self.search(&Query::parse(raw_query), items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::ProductItem;

    fn catalog() -> Vec<ProductItem> {
        vec![
            ProductItem::new(1, "Amazing Widget", "Cool and blue"),
            ProductItem::new(2, "Gadget", "Great for Kids"),
            ProductItem::new(3, "Amazing", "Plain"),
        ]
    }

    #[test]
    fn test_search_preserves_input_order() {
        let engine = SearchEngine::new();
        let hits = engine.search_raw("amazing", catalog());
        let ids: Vec<i64> = hits.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_search_keeps_duplicates() {
        let engine = SearchEngine::new();
        let mut items = catalog();
        items.push(items[0].clone());

        let hits = engine.search_raw("widget", items);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0], hits[1]);
    }

    #[test]
    fn test_search_over_borrowed_items() {
        let engine = SearchEngine::new();
        let items = catalog();
        let hits: Vec<&ProductItem> = engine.search_raw("\"Amazing\"", items.iter());
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 3);
    }

    #[test]
    fn test_search_empty_catalog() {
        let engine = SearchEngine::new();
        let hits: Vec<ProductItem> = engine.search_raw("", Vec::new());
        assert!(hits.is_empty());
    }
}
