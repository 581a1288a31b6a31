//! askama page templates. Sources live under `templates/` at the crate root.

use askama::Template;

use crate::db::models::Expense;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub expenses: Vec<Expense>,
    /// Already rounded to cents and formatted.
    pub total: String,
}

#[derive(Template)]
#[template(path = "add_expense.html")]
pub struct AddExpenseTemplate;

#[derive(Template)]
#[template(path = "view_expenses.html")]
pub struct SplitTemplate {
    pub shares: Vec<ShareRow>,
}

pub struct ShareRow {
    pub payer: String,
    pub share: String,
}
