pub mod product_masters;
pub mod product_toppings;
pub mod products;
pub mod status;
pub mod stores;
pub mod toppings;
pub mod user_stores;

pub use product_masters::Entity as ProductMasters;
pub use product_toppings::Entity as ProductToppings;
pub use products::Entity as Products;
pub use status::Status;
pub use stores::Entity as Stores;
pub use toppings::Entity as Toppings;
pub use user_stores::Entity as UserStores;
