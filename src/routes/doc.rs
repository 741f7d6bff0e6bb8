use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        cart::{CartItemDto, CartList},
        categories::CategoryList,
        orders::{OrderList, OrderWithItems},
        products::ProductList,
        reviews::ReviewList,
        users::UserList,
    },
    models::{CartItem, Category, Order, OrderItem, Product, Review, User},
    response::{ApiResponse, Meta},
    routes::{
        admin, auth, cart, categories, demo, health, orders, params, products, reviews, users,
    },
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        demo::counter,
        auth::login,
        auth::register,
        users::me,
        users::update_me,
        categories::list_categories,
        categories::get_category,
        categories::create_category,
        categories::update_category,
        categories::delete_category,
        products::list_products,
        products::get_product,
        products::create_product,
        products::update_product,
        products::delete_product,
        reviews::list_reviews,
        reviews::create_review,
        cart::cart_list,
        cart::add_to_cart,
        cart::remove_from_cart,
        orders::list_orders,
        orders::checkout,
        orders::get_order,
        orders::pay_order,
        admin::list_all_orders,
        admin::get_order_admin,
        admin::update_order_status,
        admin::list_users,
        admin::delete_user
    ),
    components(
        schemas(
            User,
            Category,
            Product,
            CartItem,
            Order,
            OrderItem,
            Review,
            UserList,
            CategoryList,
            ProductList,
            CartItemDto,
            CartList,
            OrderList,
            OrderWithItems,
            ReviewList,
            admin::UpdateOrderStatusRequest,
            params::Pagination,
            params::ProductQuery,
            params::OrderListQuery,
            params::CategoryQuery,
            params::UserListQuery,
            Meta,
            ApiResponse<User>,
            ApiResponse<Product>,
            ApiResponse<ProductList>,
            ApiResponse<CategoryList>,
            ApiResponse<CartList>,
            ApiResponse<OrderWithItems>,
            ApiResponse<OrderList>,
            ApiResponse<ReviewList>,
            ApiResponse<UserList>
        )
    ),
    security(
        ("bearer_auth" = [])
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Demo", description = "Demo endpoints"),
        (name = "Auth", description = "Authentication endpoints"),
        (name = "Users", description = "Profile endpoints"),
        (name = "Categories", description = "Category endpoints"),
        (name = "Products", description = "Product endpoints"),
        (name = "Reviews", description = "Review endpoints"),
        (name = "Cart", description = "Cart endpoints"),
        (name = "Orders", description = "Order endpoints"),
        (name = "Admin", description = "Admin endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
