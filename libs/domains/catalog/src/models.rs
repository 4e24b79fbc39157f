use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Product category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Category {
    pub id: i32,
    /// Unique, immutable once created (e.g. `clothing`)
    pub code: String,
    pub name: String,
}

/// Purchasable variant of a product
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Variant {
    pub id: i32,
    pub product_id: i32,
    pub name: String,
    pub sku: String,
    /// `None` means the variant is sold at its product's price
    pub price: Option<Decimal>,
}

impl Variant {
    /// Price this variant is sold at, given the owning product's price
    pub fn effective_price(&self, product_price: Decimal) -> Decimal {
        self.price.unwrap_or(product_price)
    }
}

/// Catalog product with its category and variants
///
/// `Product::default()` is the zero-valued product handed out by lookups
/// that match nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: i32,
    pub code: String,
    pub price: Decimal,
    pub category: Category,
    pub variants: Vec<Variant>,
}

/// Validated, bounded listing filters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFilters {
    pub offset: u64,
    /// Always within 1..=100
    pub limit: u64,
    /// Category code, matched exactly
    pub category: Option<String>,
    /// Strictly positive price threshold (exclusive)
    pub price_less_than: Option<Decimal>,
}

impl Default for SearchFilters {
    fn default() -> Self {
        Self {
            offset: crate::filters::DEFAULT_OFFSET,
            limit: crate::filters::DEFAULT_LIMIT,
            category: None,
            price_less_than: None,
        }
    }
}

/// Raw query parameters accepted by `GET /catalog`
///
/// Values are kept as text; they are normalised by
/// [`crate::filters::validate_filters`] and never rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CatalogQuery {
    /// Number of products to skip (default 0)
    pub offset: Option<String>,
    /// Page size, 1..=100 (default 10)
    pub limit: Option<String>,
    /// Only products strictly cheaper than this price
    #[serde(rename = "priceLessThan")]
    pub price_less_than: Option<String>,
    /// Category code
    pub category: Option<String>,
}

impl CatalogQuery {
    /// Builds the query from raw pairs; the first occurrence of a key wins.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "offset" => &mut query.offset,
                "limit" => &mut query.limit,
                "priceLessThan" => &mut query.price_less_than,
                "category" => &mut query.category,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }

    pub fn into_filters(self) -> SearchFilters {
        crate::filters::validate_filters(
            self.offset.as_deref().unwrap_or_default(),
            self.limit.as_deref().unwrap_or_default(),
            self.price_less_than.as_deref().unwrap_or_default(),
            self.category.as_deref().unwrap_or_default(),
        )
    }
}

/// Reads a JSON `null` as an empty string so it fails validation like a missing field
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// DTO for creating a category
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCategory {
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "Code and name are required"))]
    pub code: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "Code and name are required"))]
    pub name: String,
}

/// Product as listed in catalog responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductView {
    pub code: String,
    pub price: f64,
    /// Category name
    pub category: String,
}

/// Variant with its price already resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VariantView {
    pub id: i32,
    pub name: String,
    pub sku: String,
    pub price: Decimal,
    pub product_id: i32,
}

/// Body of `GET /catalog` and `GET /catalog/{code}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CatalogResponse {
    pub products: Vec<ProductView>,
    /// Number of variants across all listed products
    pub products_available: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variants: Option<Vec<VariantView>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CategoryView {
    pub code: String,
    pub name: String,
}

impl From<Category> for CategoryView {
    fn from(category: Category) -> Self {
        Self {
            code: category.code,
            name: category.name,
        }
    }
}

/// Body of `GET /categories`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CategoriesResponse {
    pub categories: Vec<CategoryView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}
