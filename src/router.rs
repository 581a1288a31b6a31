use axum::{Router, routing::get};

use crate::db::ExpenseStorage;
use crate::handlers::{expenses, split};

/// Shared per-request context; cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub storage: ExpenseStorage,
}

impl AppState {
    pub fn new(storage: ExpenseStorage) -> Self {
        Self { storage }
    }
}

pub fn expense_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(expenses::list_expenses))
        .route(
            "/add",
            get(expenses::add_expense_form).post(expenses::add_expense),
        )
        .route("/split", get(split::split_expenses))
        .with_state(state)
}
