use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::sea_query::{Expr, Func, LikeExpr};
use sea_orm::{
    ConnectionTrait, DatabaseBackend, DatabaseConnection, QueryFilter, QueryOrder, QuerySelect,
};
use uuid::Uuid;

use crate::{
    dto::product_masters::{CreateProductMasterRequest, UpdateProductMasterRequest},
    entity::{
        ProductMasters,
        product_masters::{ActiveModel, Categories, Column},
    },
    error::AppResult,
    models::ProductMaster,
    repository::Repository,
    response::Page,
    routes::params::{DEFAULT_LIMIT, ProductMasterQuery},
};

#[derive(Clone)]
pub struct ProductMasterService {
    repo: Repository<ProductMasters>,
}

impl ProductMasterService {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self {
            repo: Repository::new(conn),
        }
    }

    pub async fn create(&self, payload: CreateProductMasterRequest) -> AppResult<ProductMaster> {
        let active = ActiveModel {
            id: Set(Uuid::new_v4()),
            product_name: Set(payload.product_name),
            category: Set(Categories(payload.category.unwrap_or_default())),
            sku: Set(payload.sku),
            description: Set(payload.description),
            status: NotSet,
            user_created: Set(payload.user_created),
            user_updated: Set(None),
            price: Set(payload.price),
        };
        let master = self.repo.create(active).await?;
        tracing::debug!(product_master_id = %master.id, "product master created");
        Ok(master.into())
    }

    pub async fn get(&self, id: Uuid) -> AppResult<ProductMaster> {
        Ok(self.repo.find(id).await?.into())
    }

    pub async fn update(
        &self,
        id: Uuid,
        payload: UpdateProductMasterRequest,
    ) -> AppResult<ProductMaster> {
        let mut active = ActiveModel::default();
        if let Some(name) = payload.product_name {
            active.product_name = Set(name);
        }
        if let Some(category) = payload.category {
            active.category = Set(Categories(category));
        }
        if let Some(sku) = payload.sku {
            active.sku = Set(sku);
        }
        if let Some(description) = payload.description {
            active.description = Set(description);
        }
        if let Some(status) = payload.status {
            active.status = Set(status);
        }
        if let Some(user) = payload.user_updated {
            active.user_updated = Set(Some(user));
        }
        if let Some(price) = payload.price {
            active.price = Set(price);
        }

        let master = self.repo.update(id, active).await?;
        tracing::debug!(product_master_id = %master.id, "product master updated");
        Ok(master.into())
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repo.delete(id).await?;
        tracing::debug!(product_master_id = %id, "product master archived");
        Ok(())
    }

    /// Published masters only, filtered by name and category.
    pub async fn list(&self, query: ProductMasterQuery) -> AppResult<Page<ProductMaster>> {
        let (page, limit, offset) = query.pagination().normalize(DEFAULT_LIMIT);
        let mut finder = self.repo.published();

        if let Some(search) = query.search.as_ref().filter(|s| !s.is_empty()) {
            let pattern = LikeExpr::new(contains_pattern(search)).escape(LIKE_ESCAPE);
            finder = finder
                .filter(Expr::expr(Func::lower(Expr::col(Column::ProductName))).like(pattern));
        }

        // Category is a JSON array column; containment needs backend-specific SQL.
        if let Some(category) = query.category.as_ref().filter(|c| !c.is_empty()) {
            finder = match self.repo.conn().get_database_backend() {
                DatabaseBackend::Postgres => finder.filter(Expr::cust_with_values(
                    "category @> ?",
                    [serde_json::json!([category])],
                )),
                _ => finder.filter(Expr::cust_with_values(
                    "EXISTS (SELECT 1 FROM json_each(category) WHERE json_each.value = ?)",
                    [category.clone()],
                )),
            };
        }

        let items = finder
            .order_by_asc(Column::ProductName)
            .limit(limit)
            .offset(offset)
            .all(self.repo.conn())
            .await?
            .into_iter()
            .map(ProductMaster::from)
            .collect();

        Ok(Page::new(items, page, limit))
    }
}

const LIKE_ESCAPE: char = '!';

/// Lowercased `%term%` with LIKE wildcards in the term escaped by `!`.
fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.to_lowercase().chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
