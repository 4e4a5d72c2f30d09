mod common;

use storefront_api::{dto::user_stores::AssignUserRequest, entity::Status, error::AppError};
use uuid::Uuid;

use common::*;

fn assignment(user_id: Uuid, role: &str) -> AssignUserRequest {
    AssignUserRequest {
        user_id,
        role_in_store: role.to_string(),
    }
}

#[tokio::test]
async fn assign_and_list_memberships() -> anyhow::Result<()> {
    let (state, _orm) = setup().await?;

    let dago = published_store(&state, "Seblak Dago").await?;
    let braga = published_store(&state, "Seblak Braga").await?;
    let owner = Uuid::new_v4();
    let cashier = Uuid::new_v4();

    let membership = state
        .user_stores
        .assign(dago.id, assignment(owner, " owner "))
        .await?;
    assert_eq!(membership.status, Status::Draft);
    assert_eq!(membership.role_in_store, "owner");
    assert_eq!(membership.store_id, dago.id);

    state.user_stores.assign(braga.id, assignment(owner, "owner")).await?;
    state.user_stores.assign(dago.id, assignment(cashier, "cashier")).await?;

    let dago_members = state.user_stores.list_by_store(dago.id).await?;
    let users: Vec<_> = dago_members.iter().map(|m| m.user_id).collect();
    assert_eq!(users, vec![owner, cashier]);

    let owner_stores = state.user_stores.list_by_user(owner).await?;
    let stores: Vec<_> = owner_stores.iter().map(|m| m.store_id).collect();
    assert_eq!(stores, vec![dago.id, braga.id]);
    Ok(())
}

#[tokio::test]
async fn assignment_rules() -> anyhow::Result<()> {
    let (state, _orm) = setup().await?;

    let store = published_store(&state, "Seblak Aturan").await?;
    let user = Uuid::new_v4();
    state.user_stores.assign(store.id, assignment(user, "owner")).await?;

    let duplicate = state.user_stores.assign(store.id, assignment(user, "cashier")).await;
    assert!(matches!(duplicate, Err(AppError::BadRequest(_))));

    let blank_role = state
        .user_stores
        .assign(store.id, assignment(Uuid::new_v4(), "   "))
        .await;
    assert!(matches!(blank_role, Err(AppError::BadRequest(_))));

    let unknown_store = state
        .user_stores
        .assign(Uuid::new_v4(), assignment(user, "owner"))
        .await;
    assert!(matches!(unknown_store, Err(AppError::NotFound("Store not found"))));
    Ok(())
}

#[tokio::test]
async fn removal_archives_and_allows_reassignment() -> anyhow::Result<()> {
    let (state, _orm) = setup().await?;

    let store = published_store(&state, "Seblak Pindah").await?;
    let user = Uuid::new_v4();
    state.user_stores.assign(store.id, assignment(user, "cashier")).await?;

    state.user_stores.remove(store.id, user).await?;
    assert!(state.user_stores.list_by_store(store.id).await?.is_empty());
    assert!(state.user_stores.list_by_user(user).await?.is_empty());
    assert!(matches!(
        state.user_stores.remove(store.id, user).await,
        Err(AppError::NotFound(_))
    ));

    let again = state.user_stores.assign(store.id, assignment(user, "manager")).await?;
    assert_eq!(again.role_in_store, "manager");
    assert_eq!(state.user_stores.list_by_user(user).await?.len(), 1);
    Ok(())
}
