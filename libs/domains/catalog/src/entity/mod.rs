//! Sea-ORM entities for the catalog tables

pub mod category;
pub mod product;
pub mod variant;

pub use category::Entity as CategoryEntity;
pub use product::Entity as ProductEntity;
pub use variant::Entity as VariantEntity;
