//! Generic CRUD over a SeaORM entity.
//!
//! Every storefront table goes through [`Repository`]. Per-entity behaviour is
//! declared once on the [`Resource`] impl: which column carries the lifecycle
//! status and what "delete" means for the table.

use std::marker::PhantomData;

use sea_orm::sea_query::{Expr, SimpleExpr};
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, Iterable, ModelTrait, QueryFilter, Select, Value,
};

use crate::{
    entity::{self, Status},
    error::{AppError, AppResult},
};

/// What `delete` does to a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeletePolicy {
    /// Keep the row and set its status to `archived`.
    SoftArchive,
    /// Remove the row.
    HardDelete,
}

/// Hook points a table exposes to the generic repository.
pub trait Resource: EntityTrait {
    /// Message carried by `AppError::NotFound`.
    const NOT_FOUND: &'static str;
    const DELETE_POLICY: DeletePolicy;

    fn id_column() -> Self::Column;

    /// Column holding [`Status`]; `None` for tables without a lifecycle.
    fn status_column() -> Option<Self::Column> {
        None
    }
}

pub struct Repository<E> {
    conn: DatabaseConnection,
    _entity: PhantomData<E>,
}

impl<E> Clone for Repository<E> {
    fn clone(&self) -> Self {
        Self {
            conn: self.conn.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E> Repository<E>
where
    E: Resource,
    E::Model: IntoActiveModel<E::ActiveModel> + Sync,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
{
    pub fn new(conn: DatabaseConnection) -> Self {
        Self {
            conn,
            _entity: PhantomData,
        }
    }

    pub fn conn(&self) -> &DatabaseConnection {
        &self.conn
    }

    /// Inserts a row. Status-bearing rows always start as `draft`.
    pub async fn create(&self, mut active: E::ActiveModel) -> AppResult<E::Model> {
        if let Some(col) = E::status_column() {
            active.set(col, status_value(Status::Draft));
        }
        Ok(active.insert(&self.conn).await?)
    }

    pub async fn find<V>(&self, id: V) -> AppResult<E::Model>
    where
        V: Into<Value>,
    {
        E::find()
            .filter(E::id_column().eq(id))
            .one(&self.conn)
            .await?
            .ok_or(AppError::NotFound(E::NOT_FOUND))
    }

    /// Applies the columns set on `active` to the row matching `id` and
    /// returns the stored row.
    pub async fn update<V>(&self, id: V, active: E::ActiveModel) -> AppResult<E::Model>
    where
        V: Into<Value> + Clone,
    {
        let current = self.find(id.clone()).await?;

        if let Some(col) = E::status_column() {
            if let Some(next) = active.get(col).into_value() {
                if next == status_value(Status::Archived) {
                    return Err(AppError::BadRequest(
                        "status archived can only be set by delete".into(),
                    ));
                }
                if current.get(col) == status_value(Status::Archived) {
                    return Err(AppError::BadRequest("archived rows are read-only".into()));
                }
            }
        }

        if E::Column::iter().all(|col| active.is_not_set(col)) {
            return Ok(current);
        }

        E::update_many()
            .set(active)
            .filter(E::id_column().eq(id.clone()))
            .exec(&self.conn)
            .await?;

        self.find(id).await
    }

    /// Deletes the row matching `id` according to [`Resource::DELETE_POLICY`].
    pub async fn delete<V>(&self, id: V) -> AppResult<()>
    where
        V: Into<Value>,
    {
        self.delete_where(E::id_column().eq(id)).await
    }

    pub async fn delete_where(&self, condition: SimpleExpr) -> AppResult<()> {
        let rows_affected = match (E::DELETE_POLICY, E::status_column()) {
            (DeletePolicy::SoftArchive, Some(col)) => {
                E::update_many()
                    .col_expr(col, Expr::value(status_value(Status::Archived)))
                    .filter(condition)
                    .exec(&self.conn)
                    .await?
                    .rows_affected
            }
            (DeletePolicy::SoftArchive, None) => {
                return Err(AppError::Internal(anyhow::anyhow!(
                    "soft archive configured on a table without a status column"
                )));
            }
            (DeletePolicy::HardDelete, _) => {
                E::delete_many()
                    .filter(condition)
                    .exec(&self.conn)
                    .await?
                    .rows_affected
            }
        };

        if rows_affected == 0 {
            return Err(AppError::NotFound(E::NOT_FOUND));
        }
        Ok(())
    }

    /// Base select over every row.
    pub fn select(&self) -> Select<E> {
        E::find()
    }

    /// Base select restricted to `status`. Tables without a status column are
    /// returned unfiltered.
    pub fn with_status(&self, status: Status) -> Select<E> {
        match E::status_column() {
            Some(col) => E::find().filter(col.eq(status_value(status))),
            None => E::find(),
        }
    }

    pub fn published(&self) -> Select<E> {
        self.with_status(Status::Published)
    }
}

fn status_value(status: Status) -> Value {
    Value::from(status.as_str().to_owned())
}

impl Resource for entity::Stores {
    const NOT_FOUND: &'static str = "Store not found";
    const DELETE_POLICY: DeletePolicy = DeletePolicy::SoftArchive;

    fn id_column() -> Self::Column {
        entity::stores::Column::Id
    }

    fn status_column() -> Option<Self::Column> {
        Some(entity::stores::Column::Status)
    }
}

impl Resource for entity::ProductMasters {
    const NOT_FOUND: &'static str = "Product master not found";
    const DELETE_POLICY: DeletePolicy = DeletePolicy::SoftArchive;

    fn id_column() -> Self::Column {
        entity::product_masters::Column::Id
    }

    fn status_column() -> Option<Self::Column> {
        Some(entity::product_masters::Column::Status)
    }
}

impl Resource for entity::Products {
    const NOT_FOUND: &'static str = "Product not found";
    const DELETE_POLICY: DeletePolicy = DeletePolicy::SoftArchive;

    fn id_column() -> Self::Column {
        entity::products::Column::Id
    }

    fn status_column() -> Option<Self::Column> {
        Some(entity::products::Column::Status)
    }
}

// Toppings are removed outright, unlike the other catalog tables.
impl Resource for entity::Toppings {
    const NOT_FOUND: &'static str = "Topping not found";
    const DELETE_POLICY: DeletePolicy = DeletePolicy::HardDelete;

    fn id_column() -> Self::Column {
        entity::toppings::Column::Id
    }

    fn status_column() -> Option<Self::Column> {
        Some(entity::toppings::Column::Status)
    }
}

impl Resource for entity::ProductToppings {
    const NOT_FOUND: &'static str = "Product topping not found";
    const DELETE_POLICY: DeletePolicy = DeletePolicy::HardDelete;

    fn id_column() -> Self::Column {
        entity::product_toppings::Column::Id
    }
}

impl Resource for entity::UserStores {
    const NOT_FOUND: &'static str = "Store membership not found";
    const DELETE_POLICY: DeletePolicy = DeletePolicy::SoftArchive;

    fn id_column() -> Self::Column {
        entity::user_stores::Column::Id
    }

    fn status_column() -> Option<Self::Column> {
        Some(entity::user_stores::Column::Status)
    }
}
