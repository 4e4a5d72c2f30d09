mod common;

use storefront_api::{
    dto::{
        product_masters::UpdateProductMasterRequest,
        product_toppings::CreateProductToppingRequest,
        products::UpdateProductRequest,
        stores::UpdateStoreRequest,
        toppings::UpdateToppingRequest,
    },
    entity::Status,
    error::AppError,
    routes::params::{Pagination, ProductMasterQuery},
};

use common::*;

#[tokio::test]
async fn created_rows_start_as_draft() -> anyhow::Result<()> {
    let (state, _orm) = setup().await?;

    let store = state.stores.create(store_request("Seblak Mang Ujang")).await?;
    assert_eq!(store.status, Status::Draft);

    let master = state
        .product_masters
        .create(master_request("Seblak Ceker", &["makanan"]))
        .await?;
    assert_eq!(master.status, Status::Draft);

    let topping = topping(&state, "Kerupuk", Status::Draft).await?;
    assert_eq!(topping.status, Status::Draft);

    let product = product(&state, &store, &master, false).await?;
    assert_eq!(product.status, Status::Draft);
    assert!(product.is_active);
    Ok(())
}

#[tokio::test]
async fn create_then_get_round_trips() -> anyhow::Result<()> {
    let (state, _orm) = setup().await?;

    let store = state.stores.create(store_request("Seblak Teh Nia")).await?;
    let fetched = state.stores.get(store.id).await?;
    assert_eq!(fetched, store);

    let master = state
        .product_masters
        .create(master_request("Seblak Bakso", &["makanan", "pedas"]))
        .await?;
    let fetched = state.product_masters.get(master.id).await?;
    assert_eq!(fetched, master);
    assert_eq!(fetched.category, vec!["makanan", "pedas"]);
    Ok(())
}

#[tokio::test]
async fn missing_category_is_stored_as_empty_list() -> anyhow::Result<()> {
    let (state, _orm) = setup().await?;

    let mut request = master_request("Es Jeruk", &[]);
    request.category = None;
    let master = state.product_masters.create(request).await?;
    assert!(master.category.is_empty());
    assert!(state.product_masters.get(master.id).await?.category.is_empty());
    Ok(())
}

#[tokio::test]
async fn store_update_stamps_date_updated() -> anyhow::Result<()> {
    let (state, _orm) = setup().await?;

    let store = state.stores.create(store_request("Seblak Jeletet")).await?;
    assert!(store.date_updated.is_none());

    let updated = state
        .stores
        .update(
            store.id,
            UpdateStoreRequest {
                store_phone: Some("0811-111".into()),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(updated.store_phone, "0811-111");
    assert_eq!(updated.store_name, store.store_name);
    assert!(updated.date_updated.is_some());
    Ok(())
}

#[tokio::test]
async fn soft_deleted_rows_are_kept_as_archived() -> anyhow::Result<()> {
    let (state, _orm) = setup().await?;

    let store = published_store(&state, "Seblak Archive").await?;
    let master = published_master(&state, "Seblak Komplit", &["makanan"]).await?;
    let product = product(&state, &store, &master, true).await?;

    state.products.delete(store.id, product.id).await?;
    assert_eq!(
        state.products.get(store.id, product.id).await?.status,
        Status::Archived
    );

    state.product_masters.delete(master.id).await?;
    assert_eq!(state.product_masters.get(master.id).await?.status, Status::Archived);

    state.stores.delete(store.id).await?;
    assert_eq!(state.stores.get(store.id).await?.status, Status::Archived);
    assert!(state.stores.list(Some(Status::Published)).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn topping_delete_removes_the_row() -> anyhow::Result<()> {
    let (state, _orm) = setup().await?;

    let topping = topping(&state, "Sosis", Status::Published).await?;
    state.toppings.delete(topping.id).await?;

    assert!(matches!(
        state.toppings.get(topping.id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        state.toppings.delete(topping.id).await,
        Err(AppError::NotFound(_))
    ));
    Ok(())
}

#[tokio::test]
async fn deleting_a_linked_topping_drops_its_links() -> anyhow::Result<()> {
    let (state, _orm) = setup().await?;

    let store = published_store(&state, "Seblak Cascade").await?;
    let master = published_master(&state, "Seblak Cascade", &["makanan"]).await?;
    let product = product(&state, &store, &master, true).await?;
    let bakso = topping(&state, "Bakso", Status::Published).await?;
    let keju = topping(&state, "Keju", Status::Published).await?;
    for topping_id in [bakso.id, keju.id] {
        state
            .product_toppings
            .create(CreateProductToppingRequest {
                product_id: product.id,
                topping_id,
            })
            .await?;
    }

    state.toppings.delete(bakso.id).await?;

    assert!(matches!(
        state.toppings.get(bakso.id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(state.product_toppings.list_by_topping(bakso.id).await?.is_empty());
    let remaining = state.products.get(store.id, product.id).await?;
    assert_eq!(remaining.toppings.len(), 1);
    assert_eq!(remaining.toppings[0].id, keju.id);
    Ok(())
}

#[tokio::test]
async fn archived_is_terminal() -> anyhow::Result<()> {
    let (state, _orm) = setup().await?;

    let store = published_store(&state, "Seblak Terminal").await?;
    let archive = state
        .stores
        .update(
            store.id,
            UpdateStoreRequest {
                status: Some(Status::Archived),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(archive, Err(AppError::BadRequest(_))));

    state.stores.delete(store.id).await?;
    let revive = state
        .stores
        .update(
            store.id,
            UpdateStoreRequest {
                status: Some(Status::Published),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(revive, Err(AppError::BadRequest(_))));
    assert_eq!(state.stores.get(store.id).await?.status, Status::Archived);
    Ok(())
}

#[tokio::test]
async fn updating_a_missing_row_is_not_found() -> anyhow::Result<()> {
    let (state, _orm) = setup().await?;

    let result = state
        .toppings
        .update(
            404,
            UpdateToppingRequest {
                name: Some("Ghost".into()),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(result, Err(AppError::NotFound("Topping not found"))));
    Ok(())
}

#[tokio::test]
async fn product_master_listing_filters() -> anyhow::Result<()> {
    let (state, _orm) = setup().await?;

    published_master(&state, "Seblak Original", &["makanan", "seblak"]).await?;
    published_master(&state, "Seblak Seafood", &["makanan"]).await?;
    published_master(&state, "Es Teh", &["minuman"]).await?;
    state
        .product_masters
        .create(master_request("Seblak Draft", &["makanan"]))
        .await?;
    let archived = published_master(&state, "Seblak Lama", &["makanan"]).await?;
    state.product_masters.delete(archived.id).await?;

    let all = state.product_masters.list(ProductMasterQuery::default()).await?;
    assert_eq!(all.page, 1);
    assert_eq!(all.limit, 10);
    assert_eq!(all.data.len(), 3);
    assert!(all.data.iter().all(|m| m.status == Status::Published));

    let food = state
        .product_masters
        .list(ProductMasterQuery {
            category: Some("makanan".into()),
            ..Default::default()
        })
        .await?;
    assert_eq!(food.data.len(), 2);
    assert!(food.data.iter().all(|m| m.category.contains(&"makanan".to_string())));

    let search = state
        .product_masters
        .list(ProductMasterQuery {
            search: Some("SEAFOOD".into()),
            ..Default::default()
        })
        .await?;
    assert_eq!(search.data.len(), 1);
    assert_eq!(search.data[0].product_name, "Seblak Seafood");

    let second_page = state
        .product_masters
        .list(ProductMasterQuery {
            page: Some(2),
            limit: Some(2),
            ..Default::default()
        })
        .await?;
    assert_eq!(second_page.page, 2);
    assert_eq!(second_page.data.len(), 1);
    Ok(())
}

#[tokio::test]
async fn category_filter_matches_whole_labels_only() -> anyhow::Result<()> {
    let (state, _orm) = setup().await?;

    published_master(&state, "Makaroni", &["makanan ringan"]).await?;
    let page = state
        .product_masters
        .list(ProductMasterQuery {
            category: Some("makanan".into()),
            ..Default::default()
        })
        .await?;
    assert!(page.data.is_empty());
    Ok(())
}

#[tokio::test]
async fn product_shows_only_published_toppings() -> anyhow::Result<()> {
    let (state, orm) = setup().await?;

    let store = published_store(&state, "Seblak Topping").await?;
    let master = published_master(&state, "Seblak Ceker", &["makanan"]).await?;
    let product = product(&state, &store, &master, true).await?;

    let kept = topping(&state, "Ceker", Status::Published).await?;
    let archived = archived_topping(&orm, "Tulang").await?;
    for topping_id in [kept.id, archived] {
        state
            .product_toppings
            .create(CreateProductToppingRequest {
                product_id: product.id,
                topping_id,
            })
            .await?;
    }

    let fetched = state.products.get(store.id, product.id).await?;
    assert_eq!(fetched.toppings.len(), 1);
    assert_eq!(fetched.toppings[0].id, kept.id);
    assert_eq!(
        fetched.product_master.as_ref().map(|m| m.id),
        Some(master.id)
    );

    let listed = state.products.list(store.id, Pagination::default()).await?;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].toppings.len(), 1);
    Ok(())
}

#[tokio::test]
async fn product_listing_is_published_and_store_scoped() -> anyhow::Result<()> {
    let (state, _orm) = setup().await?;

    let store = published_store(&state, "Seblak A").await?;
    let other = published_store(&state, "Seblak B").await?;
    let master = published_master(&state, "Seblak Mie", &["makanan"]).await?;

    let visible = product(&state, &store, &master, true).await?;
    product(&state, &store, &master, false).await?;
    product(&state, &other, &master, true).await?;

    let listed = state.products.list(store.id, Pagination::default()).await?;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, visible.id);
    assert!(listed.iter().all(|p| p.status == Status::Published));

    // Products are only reachable through their own store.
    assert!(matches!(
        state.products.get(other.id, visible.id).await,
        Err(AppError::NotFound(_))
    ));
    let moved = state
        .products
        .update(
            other.id,
            visible.id,
            UpdateProductRequest {
                stock_quantity: Some(1),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(moved, Err(AppError::NotFound(_))));
    Ok(())
}

#[tokio::test]
async fn product_topping_links() -> anyhow::Result<()> {
    let (state, _orm) = setup().await?;

    let store = published_store(&state, "Seblak Link").await?;
    let master = published_master(&state, "Seblak Link", &["makanan"]).await?;
    let first = product(&state, &store, &master, true).await?;
    let second = product(&state, &store, &master, true).await?;
    let kerupuk = topping(&state, "Kerupuk", Status::Published).await?;

    for product_id in [first.id, second.id] {
        state
            .product_toppings
            .create(CreateProductToppingRequest {
                product_id,
                topping_id: kerupuk.id,
            })
            .await?;
    }

    let duplicate = state
        .product_toppings
        .create(CreateProductToppingRequest {
            product_id: first.id,
            topping_id: kerupuk.id,
        })
        .await;
    assert!(matches!(duplicate, Err(AppError::BadRequest(_))));

    let unknown = state
        .product_toppings
        .create(CreateProductToppingRequest {
            product_id: first.id,
            topping_id: 9999,
        })
        .await;
    assert!(matches!(unknown, Err(AppError::BadRequest(_))));

    let all = state.product_toppings.list().await?;
    assert_eq!(all.len(), 2);
    assert!(all.iter().all(|link| link.topping.as_ref().map(|t| t.id) == Some(kerupuk.id)));

    let by_topping = state.product_toppings.list_by_topping(kerupuk.id).await?;
    assert_eq!(by_topping.len(), 2);

    let by_product = state.product_toppings.list_by_product(first.id).await?;
    assert_eq!(by_product.len(), 1);
    assert_eq!(
        by_product[0].product.as_ref().map(|p| p.id),
        Some(first.id)
    );

    state.product_toppings.delete(first.id, kerupuk.id).await?;
    assert!(state.product_toppings.list_by_product(first.id).await?.is_empty());
    assert!(matches!(
        state.product_toppings.delete(first.id, kerupuk.id).await,
        Err(AppError::NotFound(_))
    ));
    Ok(())
}

#[tokio::test]
async fn empty_update_leaves_row_untouched() -> anyhow::Result<()> {
    let (state, _orm) = setup().await?;

    let master = published_master(&state, "Seblak Tetap", &["makanan"]).await?;
    let same = state
        .product_masters
        .update(master.id, UpdateProductMasterRequest::default())
        .await?;
    assert_eq!(same, master);
    Ok(())
}

#[tokio::test]
async fn product_update_rejects_unknown_master() -> anyhow::Result<()> {
    let (state, _orm) = setup().await?;

    let store = published_store(&state, "Seblak Master").await?;
    let master = published_master(&state, "Seblak Kuah", &["makanan"]).await?;
    let product = product(&state, &store, &master, false).await?;

    let result = state
        .products
        .update(
            store.id,
            product.id,
            UpdateProductRequest {
                product_master_id: Some(uuid::Uuid::new_v4()),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(result, Err(AppError::BadRequest(ref m)) if m == "Unknown product master"));

    let unchanged = state.products.get(store.id, product.id).await?;
    assert_eq!(unchanged.product_master_id, master.id);
    Ok(())
}

#[tokio::test]
async fn huge_page_numbers_return_empty_pages() -> anyhow::Result<()> {
    let (state, _orm) = setup().await?;

    let store = published_store(&state, "Seblak Halaman").await?;
    let master = published_master(&state, "Seblak Halaman", &["makanan"]).await?;
    product(&state, &store, &master, true).await?;

    let products = state
        .products
        .list(store.id, Pagination::new(u64::MAX / 50, 100))
        .await?;
    assert!(products.is_empty());

    let masters = state
        .product_masters
        .list(ProductMasterQuery {
            page: Some(u64::MAX),
            limit: Some(100),
            ..Default::default()
        })
        .await?;
    assert_eq!(masters.page, u64::MAX);
    assert!(masters.data.is_empty());
    Ok(())
}

#[tokio::test]
async fn search_treats_wildcards_literally() -> anyhow::Result<()> {
    let (state, _orm) = setup().await?;

    published_master(&state, "Promo 50% Seblak", &["makanan"]).await?;
    published_master(&state, "Seblak 500 gram", &["makanan"]).await?;
    published_master(&state, "Seblak_Jumbo", &["makanan"]).await?;
    published_master(&state, "Seblak Jamur", &["makanan"]).await?;

    let search = |term: &str| ProductMasterQuery {
        search: Some(term.to_string()),
        ..Default::default()
    };

    let percent = state.product_masters.list(search("50%")).await?;
    let names: Vec<_> = percent.data.iter().map(|m| m.product_name.as_str()).collect();
    assert_eq!(names, vec!["Promo 50% Seblak"]);

    let underscore = state.product_masters.list(search("k_j")).await?;
    let names: Vec<_> = underscore.data.iter().map(|m| m.product_name.as_str()).collect();
    assert_eq!(names, vec!["Seblak_Jumbo"]);
    Ok(())
}
