use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::sea_query::SimpleExpr;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Select};
use uuid::Uuid;

use crate::{
    dto::user_stores::AssignUserRequest,
    entity::{
        Status, Stores, UserStores,
        user_stores::{ActiveModel, Column},
    },
    error::{AppError, AppResult},
    models::UserStore,
    repository::{Repository, Resource},
};

/// Store memberships. Removed memberships stay as `archived` rows and no
/// longer count as assigned.
#[derive(Clone)]
pub struct UserStoreService {
    repo: Repository<UserStores>,
}

impl UserStoreService {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self {
            repo: Repository::new(conn),
        }
    }

    pub async fn assign(
        &self,
        store_id: Uuid,
        payload: AssignUserRequest,
    ) -> AppResult<UserStore> {
        let role = payload.role_in_store.trim();
        if role.is_empty() {
            return Err(AppError::BadRequest("role_in_store is required".into()));
        }
        if Stores::find_by_id(store_id)
            .one(self.repo.conn())
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(Stores::NOT_FOUND));
        }
        let existing = self
            .active()
            .filter(Column::StoreId.eq(store_id))
            .filter(Column::UserId.eq(payload.user_id))
            .one(self.repo.conn())
            .await?;
        if existing.is_some() {
            return Err(AppError::BadRequest("User already assigned to store".into()));
        }

        let active = ActiveModel {
            id: NotSet,
            user_id: Set(payload.user_id),
            store_id: Set(store_id),
            role_in_store: Set(role.to_string()),
            status: NotSet,
        };
        let membership = self.repo.create(active).await?;
        tracing::debug!(
            user_id = %membership.user_id,
            store_id = %membership.store_id,
            "user assigned to store"
        );
        Ok(membership.into())
    }

    /// Archives the user's current membership in the store.
    pub async fn remove(&self, store_id: Uuid, user_id: Uuid) -> AppResult<()> {
        let condition = Column::StoreId
            .eq(store_id)
            .and(Column::UserId.eq(user_id))
            .and(Column::Status.ne(Status::Archived));
        self.repo.delete_where(condition).await?;
        tracing::debug!(user_id = %user_id, store_id = %store_id, "user removed from store");
        Ok(())
    }

    pub async fn list_by_user(&self, user_id: Uuid) -> AppResult<Vec<UserStore>> {
        self.list_where(Column::UserId.eq(user_id)).await
    }

    pub async fn list_by_store(&self, store_id: Uuid) -> AppResult<Vec<UserStore>> {
        self.list_where(Column::StoreId.eq(store_id)).await
    }

    fn active(&self) -> Select<UserStores> {
        self.repo
            .select()
            .filter(Column::Status.ne(Status::Archived))
    }

    async fn list_where(&self, condition: SimpleExpr) -> AppResult<Vec<UserStore>> {
        let memberships = self
            .active()
            .filter(condition)
            .order_by_asc(Column::Id)
            .all(self.repo.conn())
            .await?
            .into_iter()
            .map(UserStore::from)
            .collect();
        Ok(memberships)
    }
}
