use sqlx::FromRow;
use std::fmt;

/// One row of the `payments` table.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Expense {
    pub id: i64,
    pub description: String,
    pub amount: f64,
    pub payer: String,
    pub split_with: String,
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Expense(id={}, description='{}', amount={}, payer='{}', split_with='{}')",
            self.id, self.description, self.amount, self.payer, self.split_with
        )
    }
}

/// Insert payload; the id is assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub description: String,
    pub amount: f64,
    pub payer: String,
    pub split_with: String,
}

impl fmt::Display for NewExpense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Expense(id=None, description='{}', amount={}, payer='{}', split_with='{}')",
            self.description, self.amount, self.payer, self.split_with
        )
    }
}

/// Per-payer aggregate produced by the grouped query.
///
/// `split_with` is taken from one arbitrary row of the payer's group, not
/// merged across rows.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct PayerTotal {
    pub payer: String,
    pub split_with: String,
    pub total_amount: f64,
}

impl PayerTotal {
    pub fn new(payer: impl Into<String>, split_with: impl Into<String>, total_amount: f64) -> Self {
        Self {
            payer: payer.into(),
            split_with: split_with.into(),
            total_amount,
        }
    }
}
