use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::assembler::assemble_categories;
use crate::error::{CatalogError, CatalogResult};
use crate::models::{CategoriesResponse, Category, CreateCategory, Product, SearchFilters};
use crate::repository::{CategoryRepository, ProductRepository};

const MISSING_CATEGORY_FIELDS: &str = "Code and name are required";

/// Read side of the catalog
///
/// Filters and codes arrive already validated; each operation issues a
/// single repository call and passes store failures through untouched.
#[derive(Clone)]
pub struct CatalogService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> CatalogService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Filtered page of products, ordered by id
    #[instrument(skip(self))]
    pub async fn list(&self, filters: SearchFilters) -> CatalogResult<Vec<Product>> {
        let products = self.repository.list(filters).await?;
        tracing::debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    /// Product with the given code, `None` when nothing matches
    #[instrument(skip(self))]
    pub async fn find_by_code(&self, code: &str) -> CatalogResult<Option<Product>> {
        self.repository.get_by_code(code).await
    }

    /// Product with the given code, or the zero-valued product when nothing matches
    pub async fn get_by_code(&self, code: &str) -> CatalogResult<Product> {
        match self.find_by_code(code).await? {
            Some(product) => Ok(product),
            None => {
                tracing::debug!(product_code = %code, "No product for code, returning empty product");
                Ok(Product::default())
            }
        }
    }

    /// Every product of a category
    #[instrument(skip(self))]
    pub async fn list_by_category(&self, category_code: &str) -> CatalogResult<Vec<Product>> {
        self.repository.get_by_category(category_code).await
    }
}

/// Category listing and creation
#[derive(Clone)]
pub struct CategoryService<R: CategoryRepository> {
    repository: Arc<R>,
}

impl<R: CategoryRepository> CategoryService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// All categories as `{code, name}` in store order
    #[instrument(skip(self))]
    pub async fn list(&self) -> CatalogResult<CategoriesResponse> {
        let categories = self.repository.list_all().await?;
        Ok(assemble_categories(categories))
    }

    /// Creates a category once both fields are present
    #[instrument(skip(self), fields(category_code = %input.code))]
    pub async fn create(&self, input: CreateCategory) -> CatalogResult<Category> {
        input
            .validate()
            .map_err(|_| CatalogError::Validation(MISSING_CATEGORY_FIELDS.to_string()))?;

        self.repository.create(input).await
    }

    /// Products of a category, empty when the category is unknown
    #[instrument(skip(self))]
    pub async fn products(&self, category_code: &str) -> CatalogResult<Vec<Product>> {
        self.repository.get_products(category_code).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{MockCategoryRepository, MockProductRepository};
    use mockall::predicate::eq;
    use rust_decimal::Decimal;

    fn product(code: &str) -> Product {
        Product {
            id: 1,
            code: code.to_string(),
            price: Decimal::new(10050, 2),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_list_passes_filters_through() {
        let mut mock_repo = MockProductRepository::new();
        let filters = SearchFilters {
            offset: 10,
            limit: 5,
            category: Some("clothing".into()),
            price_less_than: Some(Decimal::from(150)),
        };

        mock_repo
            .expect_list()
            .with(eq(filters.clone()))
            .times(1)
            .returning(|_| Ok(vec![product("PROD001")]));

        let service = CatalogService::new(mock_repo);
        let products = service.list(filters).await.unwrap();

        assert_eq!(products.len(), 1);
    }

    #[tokio::test]
    async fn test_list_empty_is_not_an_error() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_list().returning(|_| Ok(vec![]));

        let service = CatalogService::new(mock_repo);
        assert!(service.list(SearchFilters::default()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_propagates_store_failure() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_list()
            .times(1)
            .returning(|_| Err(CatalogError::Database("connection refused".into())));

        let service = CatalogService::new(mock_repo);
        let result = service.list(SearchFilters::default()).await;

        assert!(matches!(result, Err(CatalogError::Database(_))));
    }

    #[tokio::test]
    async fn test_get_by_code_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_get_by_code()
            .with(eq("PROD001"))
            .times(1)
            .returning(|code| Ok(Some(product(code))));

        let service = CatalogService::new(mock_repo);
        let found = service.get_by_code("PROD001").await.unwrap();

        assert_eq!(found.code, "PROD001");
    }

    #[tokio::test]
    async fn test_get_by_code_missing_yields_zero_product() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_get_by_code()
            .times(1)
            .returning(|_| Ok(None));

        let service = CatalogService::new(mock_repo);

        assert_eq!(service.get_by_code("PROD404").await.unwrap(), Product::default());
    }

    #[tokio::test]
    async fn test_find_by_code_exposes_absence() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_get_by_code().returning(|_| Ok(None));

        let service = CatalogService::new(mock_repo);

        assert!(service.find_by_code("PROD404").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_category_requires_both_fields() {
        let mut mock_repo = MockCategoryRepository::new();
        mock_repo.expect_create().never();

        let service = CategoryService::new(mock_repo);

        for (code, name) in [("", "Bags"), ("bags", ""), ("", "")] {
            let result = service
                .create(CreateCategory {
                    code: code.into(),
                    name: name.into(),
                })
                .await;

            match result {
                Err(CatalogError::Validation(msg)) => assert_eq!(msg, MISSING_CATEGORY_FIELDS),
                other => panic!("expected validation error, got {:?}", other),
            }
        }
    }

    #[tokio::test]
    async fn test_create_category_conflict_is_distinct() {
        let mut mock_repo = MockCategoryRepository::new();
        mock_repo
            .expect_create()
            .times(1)
            .returning(|input| Err(CatalogError::DuplicateCategoryCode(input.code)));

        let service = CategoryService::new(mock_repo);
        let result = service
            .create(CreateCategory {
                code: "shoes".into(),
                name: "Shoes".into(),
            })
            .await;

        assert!(matches!(result, Err(CatalogError::DuplicateCategoryCode(code)) if code == "shoes"));
    }

    #[tokio::test]
    async fn test_list_categories_maps_in_store_order() {
        let mut mock_repo = MockCategoryRepository::new();
        mock_repo.expect_list_all().times(1).returning(|| {
            Ok(vec![
                Category {
                    id: 2,
                    code: "shoes".into(),
                    name: "Shoes".into(),
                },
                Category {
                    id: 1,
                    code: "clothing".into(),
                    name: "Clothing".into(),
                },
            ])
        });

        let service = CategoryService::new(mock_repo);
        let response = service.list().await.unwrap();

        assert_eq!(response.categories.len(), 2);
        assert_eq!(response.categories[0].code, "shoes");
        assert_eq!(response.categories[1].name, "Clothing");
    }
}
