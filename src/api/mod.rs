// HTTP layer - routes requests onto the bank service

mod error;
mod extract;
pub mod handlers;

pub use error::*;
pub use extract::*;

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::application::BankService;
use handlers::{
    create_account, delete_account, deposit, get_account, get_balance, get_statement,
    get_statement_by_date, health_check, rename_account, withdraw,
};

/// Build the application router over the given service.
pub fn create_router(service: BankService) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(
            "/account",
            post(create_account)
                .get(get_account)
                .put(rename_account)
                .delete(delete_account),
        )
        .route("/statement", get(get_statement))
        .route("/statement/date", get(get_statement_by_date))
        .route("/deposit", post(deposit))
        .route("/withdraw", post(withdraw))
        .route("/balance", get(get_balance))
        .layer(TraceLayer::new_for_http())
        .with_state(service)
}
