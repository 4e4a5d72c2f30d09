use storefront_api::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    dto::{
        product_masters::{CreateProductMasterRequest, UpdateProductMasterRequest},
        product_toppings::CreateProductToppingRequest,
        products::{CreateProductRequest, UpdateProductRequest},
        stores::{CreateStoreRequest, UpdateStoreRequest},
        toppings::{CreateToppingRequest, UpdateToppingRequest},
    },
    entity::Status,
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config.database_url).await?;
    // Ensure migrations are applied.
    run_migrations(&orm).await?;
    let state = AppState::new(orm.clone());

    if !state.stores.list(None).await?.is_empty() {
        println!("Stores already present, skipping seed");
        return Ok(());
    }

    let store = state
        .stores
        .create(CreateStoreRequest {
            store_name: "Seblak Prasmanan".into(),
            store_address: "Jl. Merdeka No. 1, Bandung".into(),
            store_phone: "+62 812 0000 0000".into(),
        })
        .await?;
    state
        .stores
        .update(store.id, UpdateStoreRequest {
            status: Some(Status::Published),
            ..Default::default()
        })
        .await?;
    println!("Seeded store {}", store.id);

    let masters = vec![
        ("Seblak Original", "SBL-001", vec!["makanan", "seblak"], 15000),
        ("Seblak Seafood", "SBL-002", vec!["makanan", "seblak"], 25000),
        ("Es Teh Manis", "MNM-001", vec!["minuman"], 5000),
    ];

    let mut master_ids = Vec::new();
    for (name, sku, category, price) in masters {
        let master = state
            .product_masters
            .create(CreateProductMasterRequest {
                product_name: name.into(),
                category: Some(category.into_iter().map(String::from).collect()),
                sku: sku.into(),
                description: format!("{name} khas Bandung"),
                user_created: None,
                price,
            })
            .await?;
        state
            .product_masters
            .update(master.id, UpdateProductMasterRequest {
                status: Some(Status::Published),
                ..Default::default()
            })
            .await?;
        master_ids.push((master.id, price));
    }
    println!("Seeded {} product masters", master_ids.len());

    let mut topping_ids = Vec::new();
    for (name, price) in [("Kerupuk", 2000), ("Ceker", 5000), ("Sosis", 4000)] {
        let topping = state
            .toppings
            .create(CreateToppingRequest {
                name: name.into(),
                price,
            })
            .await?;
        state
            .toppings
            .update(topping.id, UpdateToppingRequest {
                status: Some(Status::Published),
                ..Default::default()
            })
            .await?;
        topping_ids.push(topping.id);
    }
    println!("Seeded {} toppings", topping_ids.len());

    for (master_id, price) in master_ids {
        let product = state
            .products
            .create(store.id, CreateProductRequest {
                product_master_id: master_id,
                price: price as f64,
                stock_quantity: 50,
                is_active: Some(true),
                photo: None,
            })
            .await?;
        state
            .products
            .update(store.id, product.id, UpdateProductRequest {
                status: Some(Status::Published),
                ..Default::default()
            })
            .await?;
        for &topping_id in &topping_ids {
            state
                .product_toppings
                .create(CreateProductToppingRequest {
                    product_id: product.id,
                    topping_id,
                })
                .await?;
        }
    }

    println!("Seed completed");
    orm.close().await?;
    Ok(())
}
