use sea_orm::entity::prelude::*;

use super::status::Status;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub product_master_id: Uuid,
    pub store_id: Uuid,
    #[sea_orm(column_type = "Double")]
    pub price: f64,
    pub stock_quantity: i32,
    pub is_active: bool,
    pub status: Status,
    pub photo: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::product_masters::Entity",
        from = "Column::ProductMasterId",
        to = "super::product_masters::Column::Id"
    )]
    ProductMasters,
    #[sea_orm(
        belongs_to = "super::stores::Entity",
        from = "Column::StoreId",
        to = "super::stores::Column::Id"
    )]
    Stores,
    #[sea_orm(has_many = "super::product_toppings::Entity")]
    ProductToppings,
}

impl Related<super::product_masters::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductMasters.def()
    }
}

impl Related<super::stores::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Stores.def()
    }
}

impl Related<super::product_toppings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductToppings.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
