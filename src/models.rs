use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entity::{
    Status, product_masters, product_toppings, products, stores, toppings, user_stores,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Store {
    pub id: Uuid,
    pub store_name: String,
    pub store_address: String,
    pub store_phone: String,
    pub status: Status,
    pub date_created: DateTime<Utc>,
    pub date_updated: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductMaster {
    pub id: Uuid,
    pub product_name: String,
    pub category: Vec<String>,
    pub sku: String,
    pub description: String,
    pub status: Status,
    pub user_created: Option<Uuid>,
    pub user_updated: Option<Uuid>,
    pub price: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Topping {
    pub id: i32,
    pub status: Status,
    pub date_created: DateTime<Utc>,
    pub date_updated: Option<DateTime<Utc>>,
    pub price: i64,
    pub name: String,
}

/// Product row without its relations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductSummary {
    pub id: i32,
    pub product_master_id: Uuid,
    pub store_id: Uuid,
    pub price: f64,
    pub stock_quantity: i32,
    pub is_active: bool,
    pub status: Status,
    pub photo: Option<String>,
}

/// Product with its master record and published toppings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: i32,
    pub product_master_id: Uuid,
    pub product_master: Option<ProductMaster>,
    pub store_id: Uuid,
    pub price: f64,
    pub stock_quantity: i32,
    pub is_active: bool,
    pub status: Status,
    pub photo: Option<String>,
    pub toppings: Vec<Topping>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductTopping {
    pub id: i32,
    pub product_id: i32,
    pub topping_id: i32,
    pub product: Option<ProductSummary>,
    pub topping: Option<Topping>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SpicyLevel {
    pub id: String,
    pub name: String,
    pub level: i32,
    pub price: i64,
}

/// Membership of a user in a store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserStore {
    pub id: i32,
    pub user_id: Uuid,
    pub store_id: Uuid,
    pub role_in_store: String,
    pub status: Status,
}

impl From<stores::Model> for Store {
    fn from(model: stores::Model) -> Self {
        Self {
            id: model.id,
            store_name: model.store_name,
            store_address: model.store_address,
            store_phone: model.store_phone,
            status: model.status,
            date_created: model.date_created,
            date_updated: model.date_updated,
        }
    }
}

impl From<product_masters::Model> for ProductMaster {
    fn from(model: product_masters::Model) -> Self {
        Self {
            id: model.id,
            product_name: model.product_name,
            category: model.category.0,
            sku: model.sku,
            description: model.description,
            status: model.status,
            user_created: model.user_created,
            user_updated: model.user_updated,
            price: model.price,
        }
    }
}

impl From<user_stores::Model> for UserStore {
    fn from(model: user_stores::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            store_id: model.store_id,
            role_in_store: model.role_in_store,
            status: model.status,
        }
    }
}

impl From<toppings::Model> for Topping {
    fn from(model: toppings::Model) -> Self {
        Self {
            id: model.id,
            status: model.status,
            date_created: model.date_created,
            date_updated: model.date_updated,
            price: model.price,
            name: model.name,
        }
    }
}

impl From<products::Model> for ProductSummary {
    fn from(model: products::Model) -> Self {
        Self {
            id: model.id,
            product_master_id: model.product_master_id,
            store_id: model.store_id,
            price: model.price,
            stock_quantity: model.stock_quantity,
            is_active: model.is_active,
            status: model.status,
            photo: model.photo,
        }
    }
}

impl Product {
    pub fn from_parts(
        model: products::Model,
        master: Option<product_masters::Model>,
        toppings: Vec<Topping>,
    ) -> Self {
        Self {
            id: model.id,
            product_master_id: model.product_master_id,
            product_master: master.map(ProductMaster::from),
            store_id: model.store_id,
            price: model.price,
            stock_quantity: model.stock_quantity,
            is_active: model.is_active,
            status: model.status,
            photo: model.photo,
            toppings,
        }
    }
}

impl ProductTopping {
    pub fn from_parts(
        link: product_toppings::Model,
        product: Option<products::Model>,
        topping: Option<toppings::Model>,
    ) -> Self {
        Self {
            id: link.id,
            product_id: link.product_id,
            topping_id: link.topping_id,
            product: product.map(ProductSummary::from),
            topping: topping.map(Topping::from),
        }
    }
}
