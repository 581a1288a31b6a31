use askama::Template;
use axum::{
    Form,
    extract::State,
    response::{Html, Redirect},
};
use tracing::debug;

use crate::service::split::{round_cents, total_amount};
use crate::types::forms::AddExpenseForm;
use crate::views::{AddExpenseTemplate, IndexTemplate};
use crate::{SplitError, router::AppState};

/// GET / -> every expense plus the running total.
pub async fn list_expenses(State(state): State<AppState>) -> Result<Html<String>, SplitError> {
    let expenses = state.storage.list_all(0).await?;
    let total = round_cents(total_amount(&expenses));
    let page = IndexTemplate {
        expenses,
        total: format!("{total:.2}"),
    };
    Ok(Html(page.render()?))
}

/// GET /add -> the new-expense form.
pub async fn add_expense_form() -> Result<Html<String>, SplitError> {
    Ok(Html(AddExpenseTemplate.render()?))
}

/// POST /add -> store the expense, then back to the list.
pub async fn add_expense(
    State(state): State<AppState>,
    Form(form): Form<AddExpenseForm>,
) -> Result<Redirect, SplitError> {
    let expense = form.into_new_expense()?;
    debug!("Adding new expense: {}", expense);
    state.storage.insert(expense).await?;
    Ok(Redirect::to("/"))
}
