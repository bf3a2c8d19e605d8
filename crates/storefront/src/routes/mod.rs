//! HTTP route handlers for the storefront JSON API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                      - Liveness check
//! GET  /health/ready                - Readiness check
//!
//! # Products
//! GET  /products                    - Catalog listing (category/search/sort)
//! GET  /products/{id}               - Product detail
//!
//! # Cart (session-backed)
//! GET  /cart                        - Cart with totals
//! POST /cart/add                    - Add item (merges quantities)
//! POST /cart/update                 - Replace a line item quantity
//! POST /cart/remove                 - Remove a line item
//! POST /cart/clear                  - Empty the cart
//! GET  /cart/count                  - Cart count badge
//!
//! # Checkout
//! POST /checkout/payment-order      - Create a gateway order
//! GET  /checkout/upi-link           - Build a UPI deep link
//! POST /checkout/place-order        - Snapshot the cart into an order
//!
//! # Orders
//! GET  /orders                      - Order history
//! GET  /orders/{id}                 - Order detail with progress projection
//!
//! # Assistant
//! POST /chat                        - Customer support chat
//! GET  /recommendations             - Personalized recommendations
//!
//! # Admin
//! GET    /admin/products            - Admin catalog listing
//! POST   /admin/products            - Create product
//! PUT    /admin/products/{id}       - Update product
//! DELETE /admin/products/{id}       - Delete product
//! ```

pub mod admin;
pub mod cart;
pub mod chat;
pub mod checkout;
pub mod orders;
pub mod products;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{id}", get(products::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
        .route("/count", get(cart::count))
}

/// Create the checkout routes router.
pub fn checkout_routes() -> Router<AppState> {
    Router::new()
        .route("/payment-order", post(checkout::payment_order))
        .route("/upi-link", get(checkout::upi_link))
        .route("/place-order", post(checkout::place_order))
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(orders::index))
        .route("/{id}", get(orders::show))
}

/// Create the admin routes router.
///
/// Access control is delegated to the identity provider fronting this
/// service; the handlers themselves are unauthenticated.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(admin::index).post(admin::create))
        .route(
            "/products/{id}",
            put(admin::update).delete(admin::remove),
        )
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/products", product_routes())
        .nest("/cart", cart_routes())
        .nest("/checkout", checkout_routes())
        .nest("/orders", order_routes())
        .route("/chat", post(chat::chat))
        .route("/recommendations", get(chat::recommendations))
        .nest("/admin", admin_routes())
}
