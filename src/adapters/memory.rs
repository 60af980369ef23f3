use crate::domain::model::ProductItem;
use crate::domain::ports::CatalogStore;
use crate::utils::error::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Catalog held in process memory. Readers get a snapshot copy.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    items: RwLock<Vec<ProductItem>>,
}

impl InMemoryCatalog {
    pub fn new(items: Vec<ProductItem>) -> Self {
        Self {
            items: RwLock::new(items),
        }
    }

    pub async fn insert(&self, item: ProductItem) {
        self.items.write().await.push(item);
    }

    pub async fn replace_all(&self, items: Vec<ProductItem>) {
        *self.items.write().await = items;
    }
}

#[async_trait]
impl CatalogStore for InMemoryCatalog {
    async fn list_all(&self) -> Result<Vec<ProductItem>> {
        Ok(self.items.read().await.clone())
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.items.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_matches_listing() {
        let catalog = InMemoryCatalog::new(vec![
            ProductItem::new(1, "Widget", "Blue"),
            ProductItem::new(2, "Gadget", "Red"),
        ]);

        let items = tokio_test::block_on(catalog.list_all()).unwrap();
        let count = tokio_test::block_on(catalog.count()).unwrap();
        assert_eq!(items.len(), count);
    }

    #[tokio::test]
    async fn test_listing_is_a_snapshot() {
        let catalog = InMemoryCatalog::new(vec![ProductItem::new(1, "Widget", "Blue")]);
        let before = catalog.list_all().await.unwrap();

        catalog.insert(ProductItem::new(2, "Gadget", "Red")).await;

        assert_eq!(before.len(), 1);
        assert_eq!(catalog.count().await.unwrap(), 2);

        catalog.replace_all(Vec::new()).await;
        assert!(catalog.list_all().await.unwrap().is_empty());
    }
}
