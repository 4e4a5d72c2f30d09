use chrono::Utc;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{DatabaseConnection, QueryOrder};

use crate::{
    dto::toppings::{CreateToppingRequest, UpdateToppingRequest},
    entity::{
        Toppings,
        toppings::{ActiveModel, Column},
    },
    error::AppResult,
    models::Topping,
    repository::Repository,
};

#[derive(Clone)]
pub struct ToppingService {
    repo: Repository<Toppings>,
}

impl ToppingService {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self {
            repo: Repository::new(conn),
        }
    }

    pub async fn list(&self) -> AppResult<Vec<Topping>> {
        let toppings = self
            .repo
            .select()
            .order_by_asc(Column::Id)
            .all(self.repo.conn())
            .await?
            .into_iter()
            .map(Topping::from)
            .collect();
        Ok(toppings)
    }

    pub async fn get(&self, id: i32) -> AppResult<Topping> {
        Ok(self.repo.find(id).await?.into())
    }

    pub async fn create(&self, payload: CreateToppingRequest) -> AppResult<Topping> {
        let active = ActiveModel {
            id: NotSet,
            status: NotSet,
            date_created: Set(Utc::now()),
            date_updated: Set(None),
            price: Set(payload.price),
            name: Set(payload.name),
        };
        let topping = self.repo.create(active).await?;
        tracing::debug!(topping_id = topping.id, "topping created");
        Ok(topping.into())
    }

    pub async fn update(&self, id: i32, payload: UpdateToppingRequest) -> AppResult<Topping> {
        let mut active = ActiveModel {
            date_updated: Set(Some(Utc::now())),
            ..Default::default()
        };
        if let Some(name) = payload.name {
            active.name = Set(name);
        }
        if let Some(price) = payload.price {
            active.price = Set(price);
        }
        if let Some(status) = payload.status {
            active.status = Set(status);
        }

        let topping = self.repo.update(id, active).await?;
        tracing::debug!(topping_id = topping.id, "topping updated");
        Ok(topping.into())
    }

    /// Removes the row; toppings are not archived.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repo.delete(id).await?;
        tracing::debug!(topping_id = id, "topping deleted");
        Ok(())
    }
}
