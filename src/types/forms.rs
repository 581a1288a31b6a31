use serde::Deserialize;

use crate::db::models::NewExpense;
use crate::error::SplitError;

/// Urlencoded body of `POST /add`. Every field is required; `amount` stays
/// raw text until [`AddExpenseForm::into_new_expense`] parses it.
#[derive(Debug, Deserialize)]
pub struct AddExpenseForm {
    pub description: String,
    pub amount: String,
    pub payer: String,
    pub split_with: String,
}

impl AddExpenseForm {
    pub fn into_new_expense(self) -> Result<NewExpense, SplitError> {
        let amount = self
            .amount
            .trim()
            .parse::<f64>()
            .map_err(|_| SplitError::InvalidAmount(self.amount.clone()))?;
        Ok(NewExpense {
            description: self.description,
            amount,
            payer: self.payer,
            split_with: self.split_with,
        })
    }
}
