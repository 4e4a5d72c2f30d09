use sea_orm::entity::prelude::*;

/// One edge of the product/topping many-to-many.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "product_toppings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub product_id: i32,
    pub topping_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::products::Entity",
        from = "Column::ProductId",
        to = "super::products::Column::Id"
    )]
    Products,
    #[sea_orm(
        belongs_to = "super::toppings::Entity",
        from = "Column::ToppingId",
        to = "super::toppings::Column::Id",
        on_delete = "Cascade"
    )]
    Toppings,
}

impl Related<super::products::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Products.def()
    }
}

impl Related<super::toppings::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Toppings.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
