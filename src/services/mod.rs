pub mod product_master_service;
pub mod product_service;
pub mod product_topping_service;
pub mod spicy_level_service;
pub mod store_service;
pub mod topping_service;
pub mod user_store_service;

pub use product_master_service::ProductMasterService;
pub use product_service::ProductService;
pub use product_topping_service::ProductToppingService;
pub use spicy_level_service::SpicyLevelService;
pub use store_service::StoreService;
pub use topping_service::ToppingService;
pub use user_store_service::UserStoreService;
