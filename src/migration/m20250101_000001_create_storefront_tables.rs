use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::{EntityTrait, Schema};

use crate::entity::{ProductMasters, ProductToppings, Products, Stores, Toppings};

#[derive(DeriveMigrationName)]
pub struct Migration;

impl Migration {
    fn create<E: EntityTrait>(schema: &Schema, entity: E) -> TableCreateStatement {
        schema
            .create_table_from_entity(entity)
            .if_not_exists()
            .to_owned()
    }
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let schema = Schema::new(manager.get_database_backend());

        // Parents first so foreign keys resolve.
        manager.create_table(Self::create(&schema, Stores)).await?;
        manager
            .create_table(Self::create(&schema, ProductMasters))
            .await?;
        manager.create_table(Self::create(&schema, Toppings)).await?;
        manager.create_table(Self::create(&schema, Products)).await?;
        manager
            .create_table(Self::create(&schema, ProductToppings))
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_products_store_status")
                    .table(Products)
                    .col(crate::entity::products::Column::StoreId)
                    .col(crate::entity::products::Column::Status)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_product_toppings_pair")
                    .table(ProductToppings)
                    .col(crate::entity::product_toppings::Column::ProductId)
                    .col(crate::entity::product_toppings::Column::ToppingId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProductToppings).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Products).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Toppings).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ProductMasters).if_exists().to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Stores).if_exists().to_owned())
            .await?;
        Ok(())
    }
}
