use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
            INSERT INTO categories (code, name)
            VALUES
                ('clothing', 'Clothing'),
                ('shoes', 'Shoes'),
                ('accessories', 'Accessories')
            ON CONFLICT (code) DO NOTHING
            "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
            INSERT INTO products (code, price, category_id)
            SELECT p.code, p.price, c.id
            FROM (
                VALUES
                    ('PROD001', 10.99, 'clothing'),
                    ('PROD002', 12.49, 'shoes'),
                    ('PROD003', 8.75, 'clothing'),
                    ('PROD004', 15.00, 'accessories'),
                    ('PROD005', 11.99, 'shoes'),
                    ('PROD006', 9.50, 'clothing'),
                    ('PROD007', 13.25, 'accessories'),
                    ('PROD008', 7.99, 'shoes')
            ) AS p(code, price, category)
            JOIN categories c ON c.code = p.category
            ON CONFLICT (code) DO NOTHING
            "#,
            )
            .await?;

        // Variants priced 0 inherit their product's price
        manager
            .get_connection()
            .execute_unprepared(
                r#"
            INSERT INTO variants (product_id, name, sku, price)
            SELECT p.id, v.name, v.sku, v.price
            FROM (
                VALUES
                    ('PROD001', 'Small', 'PROD001-S', 0.00),
                    ('PROD001', 'Large', 'PROD001-L', 11.99),
                    ('PROD002', 'Size 42', 'PROD002-42', 0.00),
                    ('PROD003', 'Medium', 'PROD003-M', 9.25),
                    ('PROD005', 'Size 40', 'PROD005-40', 0.00),
                    ('PROD005', 'Size 44', 'PROD005-44', 12.99),
                    ('PROD007', 'Standard', 'PROD007-STD', 0.00)
            ) AS v(code, name, sku, price)
            JOIN products p ON p.code = v.code
            ON CONFLICT (sku) DO NOTHING
            "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Variants go with their products (ON DELETE CASCADE)
        manager
            .get_connection()
            .execute_unprepared(
                r#"
            DELETE FROM products
            WHERE code IN ('PROD001', 'PROD002', 'PROD003', 'PROD004',
                           'PROD005', 'PROD006', 'PROD007', 'PROD008')
            "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
            DELETE FROM categories c
            WHERE c.code IN ('clothing', 'shoes', 'accessories')
              AND NOT EXISTS (SELECT 1 FROM products p WHERE p.category_id = c.id)
            "#,
            )
            .await?;

        Ok(())
    }
}
