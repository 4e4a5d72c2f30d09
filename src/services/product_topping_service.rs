use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, LoaderTrait, QueryFilter, QueryOrder,
};

use crate::{
    dto::product_toppings::CreateProductToppingRequest,
    entity::{
        ProductToppings, Products, Toppings,
        product_toppings::{self, ActiveModel, Column},
    },
    error::{AppError, AppResult},
    models::ProductTopping,
    repository::{Repository, Resource},
};

#[derive(Clone)]
pub struct ProductToppingService {
    repo: Repository<ProductToppings>,
}

impl ProductToppingService {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self {
            repo: Repository::new(conn),
        }
    }

    pub async fn list(&self) -> AppResult<Vec<ProductTopping>> {
        self.list_where(Condition::all()).await
    }

    pub async fn list_by_product(&self, product_id: i32) -> AppResult<Vec<ProductTopping>> {
        self.list_where(Condition::all().add(Column::ProductId.eq(product_id)))
            .await
    }

    pub async fn list_by_topping(&self, topping_id: i32) -> AppResult<Vec<ProductTopping>> {
        self.list_where(Condition::all().add(Column::ToppingId.eq(topping_id)))
            .await
    }

    pub async fn create(&self, payload: CreateProductToppingRequest) -> AppResult<ProductTopping> {
        let conn = self.repo.conn();
        if Products::find_by_id(payload.product_id).one(conn).await?.is_none() {
            return Err(AppError::BadRequest("Unknown product".into()));
        }
        if Toppings::find_by_id(payload.topping_id).one(conn).await?.is_none() {
            return Err(AppError::BadRequest("Unknown topping".into()));
        }
        let existing = ProductToppings::find()
            .filter(Column::ProductId.eq(payload.product_id))
            .filter(Column::ToppingId.eq(payload.topping_id))
            .one(conn)
            .await?;
        if existing.is_some() {
            return Err(AppError::BadRequest("Product topping already exists".into()));
        }

        let active = ActiveModel {
            id: NotSet,
            product_id: Set(payload.product_id),
            topping_id: Set(payload.topping_id),
        };
        let link = self.repo.create(active).await?;
        tracing::debug!(
            product_id = link.product_id,
            topping_id = link.topping_id,
            "product topping created"
        );

        let mut items = self.hydrate(vec![link]).await?;
        items
            .pop()
            .ok_or(AppError::NotFound(ProductToppings::NOT_FOUND))
    }

    pub async fn delete(&self, product_id: i32, topping_id: i32) -> AppResult<()> {
        let condition = Column::ProductId
            .eq(product_id)
            .and(Column::ToppingId.eq(topping_id));
        self.repo.delete_where(condition).await?;
        tracing::debug!(product_id, topping_id, "product topping deleted");
        Ok(())
    }

    async fn list_where(&self, condition: Condition) -> AppResult<Vec<ProductTopping>> {
        let links = self
            .repo
            .select()
            .filter(condition)
            .order_by_asc(Column::Id)
            .all(self.repo.conn())
            .await?;
        self.hydrate(links).await
    }

    async fn hydrate(&self, links: Vec<product_toppings::Model>) -> AppResult<Vec<ProductTopping>> {
        if links.is_empty() {
            return Ok(Vec::new());
        }
        let conn = self.repo.conn();
        let products = links.load_one(Products, conn).await?;
        let toppings = links.load_one(Toppings, conn).await?;

        Ok(links
            .into_iter()
            .zip(products)
            .zip(toppings)
            .map(|((link, product), topping)| ProductTopping::from_parts(link, product, topping))
            .collect())
    }
}
