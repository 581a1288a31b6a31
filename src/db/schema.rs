//! SQL DDL for initializing the expense storage.

/// SQLite schema with:
/// - `id` INTEGER PRIMARY KEY AUTOINCREMENT, never reused
/// - `amount` REAL, single implicit currency
/// - `split_with` TEXT, comma-separated participants stored verbatim
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS payments (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    description TEXT,
    amount REAL,
    payer TEXT,
    split_with TEXT
);

CREATE INDEX IF NOT EXISTS idx_payments_payer ON payments(payer);
"#;
