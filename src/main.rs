pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod notify;
pub mod orders;
pub mod users;
pub mod validation;

use std::sync::Arc;

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use cart::sessions::CartSessions;
use catalog::BookRepository;
use checkout::{CheckoutService, DiscountEngine, MockPaymentGateway};
use config::AppConfig;
use notify::LogNotificationSink;
use orders::OrderLedger;
use users::UserDirectory;

/// OpenAPI documentation structure
#[derive(OpenApi)]
#[openapi(
    paths(
        catalog::handlers::list_books,
        catalog::handlers::search_books,
        catalog::handlers::get_book_by_title,
        cart::handlers::get_cart,
        cart::handlers::add_cart_item,
        cart::handlers::update_cart_item,
        cart::handlers::remove_cart_item,
        cart::handlers::clear_cart,
        checkout::handlers::checkout,
        orders::handlers::get_order,
        orders::handlers::update_order_status,
        users::handlers::register_user,
        users::handlers::order_history,
    ),
    components(
        schemas(
            catalog::Book,
            cart::handlers::AddItemRequest,
            cart::handlers::UpdateItemRequest,
            cart::handlers::CartLineView,
            cart::handlers::CartView,
            checkout::CheckoutRequest,
            checkout::CheckoutReceipt,
            checkout::PaymentInput,
            checkout::DiscountOutcome,
            orders::Order,
            orders::OrderLine,
            orders::OrderStatus,
            orders::PaymentSummary,
            orders::ShippingInfo,
            orders::UpdateStatusRequest,
            users::RegisterRequest,
            users::UserView,
        )
    ),
    tags(
        (name = "catalog", description = "Book catalog browsing endpoints"),
        (name = "cart", description = "Session shopping cart endpoints"),
        (name = "checkout", description = "Order checkout endpoint"),
        (name = "orders", description = "Order lookup and status endpoints"),
        (name = "users", description = "Account registration and history endpoints")
    ),
    info(
        title = "Bookstore API",
        version = "1.0.0",
        description = "RESTful API for an online bookstore checkout workflow",
        contact(
            name = "API Support",
            email = "support@bookstoreapi.com"
        )
    )
)]
struct ApiDoc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub books: BookRepository,
    pub sessions: CartSessions,
    pub checkout: CheckoutService,
    pub ledger: OrderLedger,
    pub users: UserDirectory,
}

impl AppState {
    /// Wire the default in-memory stack: seeded catalog, built-in discount
    /// codes, mock payment gateway, log-backed notifications.
    pub fn new() -> Self {
        let ledger = OrderLedger::new();
        let users = UserDirectory::new();
        let checkout = CheckoutService::new(
            DiscountEngine::with_default_codes(),
            Arc::new(MockPaymentGateway::new()),
            ledger.clone(),
            users.clone(),
            Arc::new(LogNotificationSink::new()),
        );

        Self {
            books: BookRepository::seeded(),
            sessions: CartSessions::new(),
            checkout,
            ledger,
            users,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates and configures the application router
/// Maps all API endpoints to their handlers and adds CORS middleware
fn create_router(state: AppState) -> Router {
    use tower_http::cors::{Any, CorsLayer};

    // Configure CORS to allow all origins, methods, and headers
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Catalog routes
        .route("/api/books", get(catalog::handlers::list_books))
        .route("/api/books/search", get(catalog::handlers::search_books))
        .route("/api/books/:title", get(catalog::handlers::get_book_by_title))
        // Cart routes
        .route("/api/cart", get(cart::handlers::get_cart))
        .route("/api/cart", delete(cart::handlers::clear_cart))
        .route("/api/cart/items", post(cart::handlers::add_cart_item))
        .route("/api/cart/items/:title", put(cart::handlers::update_cart_item))
        .route(
            "/api/cart/items/:title",
            delete(cart::handlers::remove_cart_item),
        )
        // Checkout
        .route("/api/checkout", post(checkout::handlers::checkout))
        // Order routes
        .route("/api/orders/:id", get(orders::handlers::get_order))
        .route(
            "/api/orders/:id/status",
            patch(orders::handlers::update_order_status),
        )
        // Account routes
        .route("/api/users/register", post(users::handlers::register_user))
        .route("/api/users/:email/orders", get(users::handlers::order_history))
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Initialize tracing subscriber for logging
    // This enables the error!, warn!, info!, debug!, and trace! macros
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    tracing::info!("Bookstore API - Starting...");

    let config = AppConfig::from_env();
    let state = AppState::new();

    if config.seed_demo_user {
        state.users.seed_demo_user().await;
    }
    tracing::info!("Catalog loaded with {} books", state.books.all().len());

    // Create the application router
    let app = create_router(state);

    // Start the Axum server
    let addr = config.bind_addr();
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Bookstore API is running on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", addr);

    axum::serve(listener, app)
        .await
        .expect("Server error");
}
