use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use std::collections::HashMap;

use crate::{
    entity::{category, product, variant},
    error::{CatalogResult, map_insert_error},
    models::{Category, CreateCategory, Product, SearchFilters},
    repository::{CategoryRepository, ProductRepository},
};

/// Product rows paired with their (joined) category row
type ProductRows = Vec<(product::Model, Option<category::Model>)>;

/// Attaches variants to product rows with one extra query, keeping row order.
async fn hydrate(db: &DatabaseConnection, rows: ProductRows) -> CatalogResult<Vec<Product>> {
    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let ids: Vec<i32> = rows.iter().map(|(p, _)| p.id).collect();
    let mut variants: HashMap<i32, Vec<variant::Model>> = HashMap::new();
    for row in variant::Entity::find()
        .filter(variant::Column::ProductId.is_in(ids))
        .order_by_asc(variant::Column::Id)
        .all(db)
        .await?
    {
        variants.entry(row.product_id).or_default().push(row);
    }

    Ok(rows
        .into_iter()
        .map(|(row, category)| {
            let own = variants.remove(&row.id).unwrap_or_default();
            row.into_product(category, own)
        })
        .collect())
}

fn products_with_category() -> sea_orm::SelectTwo<product::Entity, category::Entity> {
    product::Entity::find()
        .find_also_related(category::Entity)
        .order_by_asc(product::Column::Id)
}

pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn list_all(&self) -> CatalogResult<Vec<Product>> {
        let rows = products_with_category().all(&self.db).await?;
        hydrate(&self.db, rows).await
    }

    async fn list(&self, filters: SearchFilters) -> CatalogResult<Vec<Product>> {
        let mut query = products_with_category();

        if let Some(ref code) = filters.category {
            query = query.filter(category::Column::Code.eq(code.as_str()));
        }

        if let Some(threshold) = filters.price_less_than {
            query = query.filter(product::Column::Price.lt(threshold));
        }

        let rows = query
            .offset(filters.offset)
            .limit(filters.limit)
            .all(&self.db)
            .await?;

        tracing::debug!(
            offset = filters.offset,
            limit = filters.limit,
            count = rows.len(),
            "Queried products"
        );
        hydrate(&self.db, rows).await
    }

    async fn get_by_id(&self, id: i32) -> CatalogResult<Option<Product>> {
        let row = products_with_category()
            .filter(product::Column::Id.eq(id))
            .one(&self.db)
            .await?;

        Ok(hydrate(&self.db, row.into_iter().collect()).await?.pop())
    }

    async fn get_by_code(&self, code: &str) -> CatalogResult<Option<Product>> {
        let row = products_with_category()
            .filter(product::Column::Code.eq(code))
            .one(&self.db)
            .await?;

        Ok(hydrate(&self.db, row.into_iter().collect()).await?.pop())
    }

    async fn get_by_category(&self, code: &str) -> CatalogResult<Vec<Product>> {
        let rows = products_with_category()
            .filter(category::Column::Code.eq(code))
            .all(&self.db)
            .await?;

        hydrate(&self.db, rows).await
    }
}

pub struct PgCategoryRepository {
    db: DatabaseConnection,
}

impl PgCategoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn list_all(&self) -> CatalogResult<Vec<Category>> {
        let models = category::Entity::find()
            .order_by_asc(category::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn create(&self, input: CreateCategory) -> CatalogResult<Category> {
        let code = input.code.clone();
        let active_model: category::ActiveModel = input.into();

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| map_insert_error(e, &code))?;

        tracing::info!(category_id = model.id, category_code = %model.code, "Created category");
        Ok(model.into())
    }

    async fn get_by_id(&self, id: i32) -> CatalogResult<Option<Category>> {
        let model = category::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn get_by_code(&self, code: &str) -> CatalogResult<Option<Category>> {
        let model = category::Entity::find()
            .filter(category::Column::Code.eq(code))
            .one(&self.db)
            .await?;

        Ok(model.map(Into::into))
    }

    async fn get_products(&self, code: &str) -> CatalogResult<Vec<Product>> {
        let Some(found) = category::Entity::find()
            .filter(category::Column::Code.eq(code))
            .one(&self.db)
            .await?
        else {
            return Ok(Vec::new());
        };

        let rows = product::Entity::find()
            .filter(product::Column::CategoryId.eq(found.id))
            .order_by_asc(product::Column::Id)
            .all(&self.db)
            .await?
            .into_iter()
            .map(|row| (row, Some(found.clone())))
            .collect();

        hydrate(&self.db, rows).await
    }
}
