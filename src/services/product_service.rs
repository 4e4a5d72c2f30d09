use std::collections::HashMap;

use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, LoaderTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use uuid::Uuid;

use crate::{
    dto::products::{CreateProductRequest, UpdateProductRequest},
    entity::{
        ProductMasters, ProductToppings, Products, Status, Stores, Toppings, product_toppings,
        products::{self, ActiveModel, Column},
        toppings,
    },
    error::{AppError, AppResult},
    models::{Product, Topping},
    repository::{Repository, Resource},
    routes::params::{PRODUCT_DEFAULT_LIMIT, Pagination},
};

#[derive(Clone)]
pub struct ProductService {
    repo: Repository<Products>,
}

impl ProductService {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self {
            repo: Repository::new(conn),
        }
    }

    fn conn(&self) -> &DatabaseConnection {
        self.repo.conn()
    }

    pub async fn create(
        &self,
        store_id: Uuid,
        payload: CreateProductRequest,
    ) -> AppResult<Product> {
        if Stores::find_by_id(store_id).one(self.conn()).await?.is_none() {
            return Err(AppError::NotFound(Stores::NOT_FOUND));
        }
        self.ensure_master(payload.product_master_id).await?;

        let active = ActiveModel {
            id: NotSet,
            product_master_id: Set(payload.product_master_id),
            store_id: Set(store_id),
            price: Set(payload.price),
            stock_quantity: Set(payload.stock_quantity),
            is_active: Set(payload.is_active.unwrap_or(true)),
            status: NotSet,
            photo: Set(payload.photo),
        };
        let product = self.repo.create(active).await?;
        tracing::debug!(product_id = product.id, store_id = %store_id, "product created");
        self.single(product).await
    }

    /// Product with its master and published toppings.
    pub async fn get(&self, store_id: Uuid, id: i32) -> AppResult<Product> {
        let product = self.find_in_store(store_id, id).await?;
        self.single(product).await
    }

    pub async fn update(
        &self,
        store_id: Uuid,
        id: i32,
        payload: UpdateProductRequest,
    ) -> AppResult<Product> {
        self.find_in_store(store_id, id).await?;

        let mut active = ActiveModel::default();
        if let Some(master_id) = payload.product_master_id {
            self.ensure_master(master_id).await?;
            active.product_master_id = Set(master_id);
        }
        if let Some(price) = payload.price {
            active.price = Set(price);
        }
        if let Some(stock) = payload.stock_quantity {
            active.stock_quantity = Set(stock);
        }
        if let Some(is_active) = payload.is_active {
            active.is_active = Set(is_active);
        }
        if let Some(status) = payload.status {
            active.status = Set(status);
        }
        if let Some(photo) = payload.photo {
            active.photo = Set(Some(photo));
        }

        let product = self.repo.update(id, active).await?;
        tracing::debug!(product_id = product.id, "product updated");
        self.single(product).await
    }

    pub async fn delete(&self, store_id: Uuid, id: i32) -> AppResult<()> {
        self.find_in_store(store_id, id).await?;
        self.repo.delete(id).await?;
        tracing::debug!(product_id = id, "product archived");
        Ok(())
    }

    /// Published products of one store.
    pub async fn list(&self, store_id: Uuid, pagination: Pagination) -> AppResult<Vec<Product>> {
        let (_, limit, offset) = pagination.normalize(PRODUCT_DEFAULT_LIMIT);
        let products = self
            .repo
            .published()
            .filter(Column::StoreId.eq(store_id))
            .order_by_asc(Column::Id)
            .limit(limit)
            .offset(offset)
            .all(self.conn())
            .await?;
        self.hydrate(products).await
    }

    async fn find_in_store(&self, store_id: Uuid, id: i32) -> AppResult<products::Model> {
        Products::find()
            .filter(Column::Id.eq(id))
            .filter(Column::StoreId.eq(store_id))
            .one(self.conn())
            .await?
            .ok_or(AppError::NotFound(Products::NOT_FOUND))
    }

    async fn ensure_master(&self, master_id: Uuid) -> AppResult<()> {
        match ProductMasters::find_by_id(master_id).one(self.conn()).await? {
            Some(_) => Ok(()),
            None => Err(AppError::BadRequest("Unknown product master".into())),
        }
    }

    async fn single(&self, product: products::Model) -> AppResult<Product> {
        self.hydrate(vec![product])
            .await?
            .pop()
            .ok_or(AppError::NotFound(Products::NOT_FOUND))
    }

    /// Attaches masters and published toppings to a batch of products.
    async fn hydrate(&self, products: Vec<products::Model>) -> AppResult<Vec<Product>> {
        if products.is_empty() {
            return Ok(Vec::new());
        }

        let masters = products.load_one(ProductMasters, self.conn()).await?;
        let ids: Vec<i32> = products.iter().map(|p| p.id).collect();
        let mut toppings = self.published_toppings(&ids).await?;

        Ok(products
            .into_iter()
            .zip(masters)
            .map(|(product, master)| {
                let product_toppings = toppings.remove(&product.id).unwrap_or_default();
                Product::from_parts(product, master, product_toppings)
            })
            .collect())
    }

    async fn published_toppings(
        &self,
        product_ids: &[i32],
    ) -> AppResult<HashMap<i32, Vec<Topping>>> {
        let links = ProductToppings::find()
            .filter(product_toppings::Column::ProductId.is_in(product_ids.iter().copied()))
            .find_also_related(Toppings)
            .filter(toppings::Column::Status.eq(Status::Published))
            .order_by_asc(product_toppings::Column::Id)
            .all(self.conn())
            .await?;
        Ok(materialize_toppings(links))
    }
}

/// Flattens join rows into per-product topping lists. Rows whose topping did
/// not resolve or is not published are dropped.
pub fn materialize_toppings(
    links: Vec<(product_toppings::Model, Option<toppings::Model>)>,
) -> HashMap<i32, Vec<Topping>> {
    let mut by_product: HashMap<i32, Vec<Topping>> = HashMap::new();
    for (link, topping) in links {
        let Some(topping) = topping else { continue };
        if topping.id == 0 || topping.status != Status::Published {
            continue;
        }
        by_product
            .entry(link.product_id)
            .or_default()
            .push(topping.into());
    }
    by_product
}
