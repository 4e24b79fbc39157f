use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{CatalogError, CatalogResult};
use crate::models::{Category, CreateCategory, Product, SearchFilters};

/// Read access to products, each loaded with its category and variants
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Every product, id ascending
    async fn list_all(&self) -> CatalogResult<Vec<Product>>;

    /// Filtered page of products, id ascending
    async fn list(&self, filters: SearchFilters) -> CatalogResult<Vec<Product>>;

    async fn get_by_id(&self, id: i32) -> CatalogResult<Option<Product>>;

    async fn get_by_code(&self, code: &str) -> CatalogResult<Option<Product>>;

    /// Products whose category code equals `code`
    async fn get_by_category(&self, code: &str) -> CatalogResult<Vec<Product>>;
}

/// Category persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Every category in store order
    async fn list_all(&self) -> CatalogResult<Vec<Category>>;

    /// Inserts a category; a taken code yields `CatalogError::DuplicateCategoryCode`
    async fn create(&self, input: CreateCategory) -> CatalogResult<Category>;

    async fn get_by_id(&self, id: i32) -> CatalogResult<Option<Category>>;

    async fn get_by_code(&self, code: &str) -> CatalogResult<Option<Category>>;

    /// Products of a category, empty when the category does not exist
    async fn get_products(&self, code: &str) -> CatalogResult<Vec<Product>>;
}

#[derive(Debug, Default)]
struct CatalogStore {
    categories: Vec<Category>,
    products: Vec<Product>,
}

/// In-memory implementation of both repositories (for development/testing)
///
/// Products keep a copy of their category; seeding and category creation
/// keep ids increasing so store order equals id order.
#[derive(Debug, Default, Clone)]
pub struct InMemoryCatalogRepository {
    store: Arc<RwLock<CatalogStore>>,
}

impl InMemoryCatalogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a category as-is, replacing one with the same id
    pub async fn seed_category(&self, category: Category) {
        let mut store = self.store.write().await;
        store.categories.retain(|c| c.id != category.id);
        store.categories.push(category);
        store.categories.sort_by_key(|c| c.id);
    }

    /// Adds a product as-is, replacing one with the same id
    pub async fn seed_product(&self, product: Product) {
        let mut store = self.store.write().await;
        store.products.retain(|p| p.id != product.id);
        store.products.push(product);
        store.products.sort_by_key(|p| p.id);
    }
}

#[async_trait]
impl ProductRepository for InMemoryCatalogRepository {
    async fn list_all(&self) -> CatalogResult<Vec<Product>> {
        let store = self.store.read().await;
        Ok(store.products.clone())
    }

    async fn list(&self, filters: SearchFilters) -> CatalogResult<Vec<Product>> {
        let store = self.store.read().await;

        let result = store
            .products
            .iter()
            .filter(|p| {
                if let Some(ref category) = filters.category {
                    if &p.category.code != category {
                        return false;
                    }
                }
                if let Some(threshold) = filters.price_less_than {
                    if p.price >= threshold {
                        return false;
                    }
                }
                true
            })
            .skip(filters.offset as usize)
            .take(filters.limit as usize)
            .cloned()
            .collect();

        Ok(result)
    }

    async fn get_by_id(&self, id: i32) -> CatalogResult<Option<Product>> {
        let store = self.store.read().await;
        Ok(store.products.iter().find(|p| p.id == id).cloned())
    }

    async fn get_by_code(&self, code: &str) -> CatalogResult<Option<Product>> {
        let store = self.store.read().await;
        Ok(store.products.iter().find(|p| p.code == code).cloned())
    }

    async fn get_by_category(&self, code: &str) -> CatalogResult<Vec<Product>> {
        let store = self.store.read().await;
        Ok(store
            .products
            .iter()
            .filter(|p| p.category.code == code)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCatalogRepository {
    async fn list_all(&self) -> CatalogResult<Vec<Category>> {
        let store = self.store.read().await;
        Ok(store.categories.clone())
    }

    async fn create(&self, input: CreateCategory) -> CatalogResult<Category> {
        let mut store = self.store.write().await;

        if store.categories.iter().any(|c| c.code == input.code) {
            return Err(CatalogError::DuplicateCategoryCode(input.code));
        }

        let id = store.categories.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        let category = Category {
            id,
            code: input.code,
            name: input.name,
        };
        store.categories.push(category.clone());

        tracing::info!(category_code = %category.code, "Created category");
        Ok(category)
    }

    async fn get_by_id(&self, id: i32) -> CatalogResult<Option<Category>> {
        let store = self.store.read().await;
        Ok(store.categories.iter().find(|c| c.id == id).cloned())
    }

    async fn get_by_code(&self, code: &str) -> CatalogResult<Option<Category>> {
        let store = self.store.read().await;
        Ok(store.categories.iter().find(|c| c.code == code).cloned())
    }

    async fn get_products(&self, code: &str) -> CatalogResult<Vec<Product>> {
        ProductRepository::get_by_category(self, code).await
    }
}
