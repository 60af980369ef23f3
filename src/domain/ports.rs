use crate::domain::model::ProductItem;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Byte-level file access used for catalog files and report artifacts.
pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Owner of the product catalog. Implementations must tolerate concurrent reads.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn list_all(&self) -> Result<Vec<ProductItem>>;

    /// Cardinality of `list_all` at call time.
    async fn count(&self) -> Result<usize> {
        Ok(self.list_all().await?.len())
    }
}

#[async_trait]
impl CatalogStore for Box<dyn CatalogStore> {
    async fn list_all(&self) -> Result<Vec<ProductItem>> {
        (**self).list_all().await
    }

    async fn count(&self) -> Result<usize> {
        (**self).count().await
    }
}

pub trait ConfigProvider: Send + Sync {
    fn important_terms(&self) -> &[String];
    fn report_output_path(&self) -> Option<&str>;
    fn report_formats(&self) -> &[String];
}
