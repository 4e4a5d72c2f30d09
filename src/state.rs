use sea_orm::DatabaseConnection;

use crate::services::{
    ProductMasterService, ProductService, ProductToppingService, SpicyLevelService, StoreService,
    ToppingService, UserStoreService,
};

/// Every resource service, each holding its own handle on the shared pool.
#[derive(Clone)]
pub struct AppState {
    pub stores: StoreService,
    pub product_masters: ProductMasterService,
    pub products: ProductService,
    pub toppings: ToppingService,
    pub product_toppings: ProductToppingService,
    pub spicy_levels: SpicyLevelService,
    pub user_stores: UserStoreService,
}

impl AppState {
    pub fn new(orm: DatabaseConnection) -> Self {
        Self {
            stores: StoreService::new(orm.clone()),
            product_masters: ProductMasterService::new(orm.clone()),
            products: ProductService::new(orm.clone()),
            toppings: ToppingService::new(orm.clone()),
            product_toppings: ProductToppingService::new(orm.clone()),
            spicy_levels: SpicyLevelService::new(),
            user_stores: UserStoreService::new(orm),
        }
    }
}
