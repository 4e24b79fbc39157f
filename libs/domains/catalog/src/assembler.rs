//! Mapping of catalog entities to response bodies.

use rust_decimal::prelude::ToPrimitive;

use crate::models::{
    CatalogResponse, CategoriesResponse, Category, Product, ProductView, VariantView,
};

/// Builds a catalog response from products in the order given.
///
/// `products_available` counts every variant of every product. When
/// `include_variants` is set and at least one product is present, the
/// variants of the first product are attached with inherited prices
/// resolved; otherwise the field is left out.
pub fn assemble(products: &[Product], include_variants: bool) -> CatalogResponse {
    let views = products.iter().map(product_view).collect();
    let products_available = products.iter().map(|p| p.variants.len()).sum();

    let variants = match products.first() {
        Some(first) if include_variants => Some(variant_views(first)),
        _ => None,
    };

    CatalogResponse {
        products: views,
        products_available,
        variants,
    }
}

/// Category listing in the order the store returned it
pub fn assemble_categories(categories: Vec<Category>) -> CategoriesResponse {
    CategoriesResponse {
        categories: categories.into_iter().map(Into::into).collect(),
    }
}

fn product_view(product: &Product) -> ProductView {
    ProductView {
        code: product.code.clone(),
        price: product.price.to_f64().unwrap_or_default(),
        category: product.category.name.clone(),
    }
}

fn variant_views(product: &Product) -> Vec<VariantView> {
    product
        .variants
        .iter()
        .map(|variant| VariantView {
            id: variant.id,
            name: variant.name.clone(),
            sku: variant.sku.clone(),
            price: variant.effective_price(product.price).normalize(),
            product_id: variant.product_id,
        })
        .collect()
}
