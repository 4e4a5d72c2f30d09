use sea_orm::entity::prelude::*;

use super::status::Status;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "toppings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub status: Status,
    pub date_created: DateTimeUtc,
    pub date_updated: Option<DateTimeUtc>,
    pub price: i64,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::product_toppings::Entity")]
    ProductToppings,
}

impl Related<super::product_toppings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductToppings.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
