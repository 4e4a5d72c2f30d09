use sea_orm::entity::prelude::*;

use super::status::Status;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "stores")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub store_name: String,
    pub store_address: String,
    pub store_phone: String,
    pub status: Status,
    pub date_created: DateTimeUtc,
    pub date_updated: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::products::Entity")]
    Products,
    #[sea_orm(has_many = "super::user_stores::Entity")]
    UserStores,
}

impl Related<super::products::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Products.def()
    }
}

impl Related<super::user_stores::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserStores.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
