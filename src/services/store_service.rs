use chrono::Utc;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{DatabaseConnection, QueryOrder};
use uuid::Uuid;

use crate::{
    dto::stores::{CreateStoreRequest, UpdateStoreRequest},
    entity::{
        Status, Stores,
        stores::{ActiveModel, Column},
    },
    error::AppResult,
    models::Store,
    repository::Repository,
};

#[derive(Clone)]
pub struct StoreService {
    repo: Repository<Stores>,
}

impl StoreService {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self {
            repo: Repository::new(conn),
        }
    }

    pub async fn create(&self, payload: CreateStoreRequest) -> AppResult<Store> {
        let active = ActiveModel {
            id: Set(Uuid::new_v4()),
            store_name: Set(payload.store_name),
            store_address: Set(payload.store_address),
            store_phone: Set(payload.store_phone),
            status: NotSet,
            date_created: Set(Utc::now()),
            date_updated: Set(None),
        };
        let store = self.repo.create(active).await?;
        tracing::debug!(store_id = %store.id, "store created");
        Ok(store.into())
    }

    pub async fn get(&self, id: Uuid) -> AppResult<Store> {
        Ok(self.repo.find(id).await?.into())
    }

    pub async fn update(&self, id: Uuid, payload: UpdateStoreRequest) -> AppResult<Store> {
        let mut active = ActiveModel {
            date_updated: Set(Some(Utc::now())),
            ..Default::default()
        };
        if let Some(name) = payload.store_name {
            active.store_name = Set(name);
        }
        if let Some(address) = payload.store_address {
            active.store_address = Set(address);
        }
        if let Some(phone) = payload.store_phone {
            active.store_phone = Set(phone);
        }
        if let Some(status) = payload.status {
            active.status = Set(status);
        }

        let store = self.repo.update(id, active).await?;
        tracing::debug!(store_id = %store.id, "store updated");
        Ok(store.into())
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repo.delete(id).await?;
        tracing::debug!(store_id = %id, "store archived");
        Ok(())
    }

    /// Lists stores, optionally restricted to one status.
    pub async fn list(&self, status: Option<Status>) -> AppResult<Vec<Store>> {
        let finder = match status {
            Some(status) => self.repo.with_status(status),
            None => self.repo.select(),
        };
        let stores = finder
            .order_by_asc(Column::DateCreated)
            .all(self.repo.conn())
            .await?
            .into_iter()
            .map(Store::from)
            .collect();
        Ok(stores)
    }
}
