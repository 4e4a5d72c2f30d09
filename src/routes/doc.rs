use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        product_masters::{CreateProductMasterRequest, UpdateProductMasterRequest},
        product_toppings::CreateProductToppingRequest,
        products::{CreateProductRequest, UpdateProductRequest},
        stores::{CreateStoreRequest, UpdateStoreRequest},
        toppings::{CreateToppingRequest, UpdateToppingRequest},
        user_stores::AssignUserRequest,
    },
    entity::Status,
    models::{
        Product, ProductMaster, ProductSummary, ProductTopping, SpicyLevel, Store, Topping,
        UserStore,
    },
    response::{ErrorBody, Page},
    routes::{
        health, params, product_masters, product_toppings, products, spicy_levels, stores,
        toppings, user_stores,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        stores::create_store,
        stores::list_stores,
        stores::get_store,
        stores::update_store,
        stores::delete_store,
        products::create_product,
        products::list_products,
        products::get_product,
        products::update_product,
        products::delete_product,
        product_masters::create_product_master,
        product_masters::list_product_masters,
        product_masters::get_product_master,
        product_masters::update_product_master,
        product_masters::delete_product_master,
        toppings::list_toppings,
        toppings::get_topping,
        toppings::create_topping,
        toppings::update_topping,
        toppings::delete_topping,
        spicy_levels::list_spicy_levels,
        spicy_levels::get_spicy_level,
        product_toppings::list_product_toppings,
        product_toppings::create_product_topping,
        product_toppings::list_by_product,
        product_toppings::list_by_topping,
        product_toppings::delete_product_topping,
        user_stores::assign_user,
        user_stores::list_store_users,
        user_stores::remove_user,
        user_stores::list_user_stores
    ),
    components(
        schemas(
            Status,
            Store,
            ProductMaster,
            Product,
            ProductSummary,
            Topping,
            ProductTopping,
            SpicyLevel,
            ErrorBody,
            Page<ProductMaster>,
            params::Pagination,
            params::ProductMasterQuery,
            health::HealthData,
            CreateStoreRequest,
            UpdateStoreRequest,
            CreateProductMasterRequest,
            UpdateProductMasterRequest,
            CreateProductRequest,
            UpdateProductRequest,
            CreateToppingRequest,
            UpdateToppingRequest,
            CreateProductToppingRequest,
            UserStore,
            AssignUserRequest
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Stores", description = "Store endpoints"),
        (name = "Products", description = "Store-scoped product endpoints"),
        (name = "Product Masters", description = "Catalog template endpoints"),
        (name = "Toppings", description = "Topping endpoints"),
        (name = "Spicy Levels", description = "Static spicy level list"),
        (name = "Product Toppings", description = "Product/topping link endpoints"),
        (name = "Store Members", description = "User membership in stores"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_resource() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/stores",
            "/api/stores/{id}/products/{product_id}",
            "/api/product-masters",
            "/api/toppings/{id}/products",
            "/api/spicy-levels/{id}",
            "/api/product-toppings",
            "/api/stores/{id}/users/{user_id}",
            "/api/users/{id}/stores",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
