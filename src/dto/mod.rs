pub mod product_masters;
pub mod product_toppings;
pub mod products;
pub mod stores;
pub mod toppings;
pub mod user_stores;
