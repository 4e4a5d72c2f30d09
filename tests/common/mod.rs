#![allow(dead_code)]

use chrono::Utc;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{ActiveModelTrait, ConnectOptions, Database, DatabaseConnection};
use storefront_api::{
    db::run_migrations,
    dto::{
        product_masters::{CreateProductMasterRequest, UpdateProductMasterRequest},
        products::{CreateProductRequest, UpdateProductRequest},
        stores::{CreateStoreRequest, UpdateStoreRequest},
        toppings::{CreateToppingRequest, UpdateToppingRequest},
    },
    entity::{Status, toppings},
    models::{Product, ProductMaster, Store, Topping},
    state::AppState,
};

/// Fresh in-memory database with the full schema.
pub async fn setup() -> anyhow::Result<(AppState, DatabaseConnection)> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    // A single connection keeps every query on the same in-memory database.
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);
    let orm = Database::connect(options).await?;
    run_migrations(&orm).await?;
    Ok((AppState::new(orm.clone()), orm))
}

pub fn store_request(name: &str) -> CreateStoreRequest {
    CreateStoreRequest {
        store_name: name.to_string(),
        store_address: "Jl. Braga 10".to_string(),
        store_phone: "022-123456".to_string(),
    }
}

pub fn master_request(name: &str, category: &[&str]) -> CreateProductMasterRequest {
    CreateProductMasterRequest {
        product_name: name.to_string(),
        category: Some(category.iter().map(|c| c.to_string()).collect()),
        sku: format!("SKU-{name}"),
        description: format!("{name} description"),
        user_created: None,
        price: 15000,
    }
}

pub async fn published_store(state: &AppState, name: &str) -> anyhow::Result<Store> {
    let store = state.stores.create(store_request(name)).await?;
    let store = state
        .stores
        .update(
            store.id,
            UpdateStoreRequest {
                status: Some(Status::Published),
                ..Default::default()
            },
        )
        .await?;
    Ok(store)
}

pub async fn published_master(
    state: &AppState,
    name: &str,
    category: &[&str],
) -> anyhow::Result<ProductMaster> {
    let master = state
        .product_masters
        .create(master_request(name, category))
        .await?;
    let master = state
        .product_masters
        .update(
            master.id,
            UpdateProductMasterRequest {
                status: Some(Status::Published),
                ..Default::default()
            },
        )
        .await?;
    Ok(master)
}

pub async fn topping(state: &AppState, name: &str, status: Status) -> anyhow::Result<Topping> {
    let topping = state
        .toppings
        .create(CreateToppingRequest {
            name: name.to_string(),
            price: 2000,
        })
        .await?;
    if status == Status::Draft {
        return Ok(topping);
    }
    let topping = state
        .toppings
        .update(
            topping.id,
            UpdateToppingRequest {
                status: Some(status),
                ..Default::default()
            },
        )
        .await?;
    Ok(topping)
}

/// Archived toppings cannot be produced through the API; write the row directly.
pub async fn archived_topping(orm: &DatabaseConnection, name: &str) -> anyhow::Result<i32> {
    let row = toppings::ActiveModel {
        id: NotSet,
        status: Set(Status::Archived),
        date_created: Set(Utc::now()),
        date_updated: Set(None),
        price: Set(3000),
        name: Set(name.to_string()),
    }
    .insert(orm)
    .await?;
    Ok(row.id)
}

pub async fn product(
    state: &AppState,
    store: &Store,
    master: &ProductMaster,
    publish: bool,
) -> anyhow::Result<Product> {
    let product = state
        .products
        .create(
            store.id,
            CreateProductRequest {
                product_master_id: master.id,
                price: 17500.0,
                stock_quantity: 12,
                is_active: None,
                photo: Some("seblak.jpg".to_string()),
            },
        )
        .await?;
    if !publish {
        return Ok(product);
    }
    let product = state
        .products
        .update(
            store.id,
            product.id,
            UpdateProductRequest {
                status: Some(Status::Published),
                ..Default::default()
            },
        )
        .await?;
    Ok(product)
}
