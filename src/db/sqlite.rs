use crate::db::models::{Expense, NewExpense, PayerTotal};
use crate::db::schema::SQLITE_INIT;
use crate::error::SplitError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use tracing::{debug, error, info};

pub type SqlitePool = Pool<Sqlite>;

/// Gateway over the `payments` table.
///
/// Each operation checks out its own connection from the pool; the guard
/// returns it when dropped, so release happens on the error paths too.
#[derive(Clone)]
pub struct ExpenseStorage {
    pool: SqlitePool,
}

impl ExpenseStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating if missing) the database behind `database_url`.
    pub async fn connect(database_url: &str) -> Result<Self, SplitError> {
        info!(database_url, "initializing database");
        let connect_opts = SqliteConnectOptions::from_str(database_url)
            .inspect_err(|e| error!(database_url, error = %e, "invalid database url"))?
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .connect_with(connect_opts)
            .await
            .inspect_err(|e| error!(database_url, error = %e, "failed to open database"))?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), SplitError> {
        // sqlx::query runs one statement at a time
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s)
                .execute(&self.pool)
                .await
                .inspect_err(|e| error!(error = %e, "schema initialization failed"))?;
        }
        info!("database schema ready");
        Ok(())
    }

    /// Persist a new expense inside its own transaction. Returns the row id.
    pub async fn insert(&self, expense: NewExpense) -> Result<i64, SplitError> {
        self.insert_inner(expense)
            .await
            .inspect_err(|e| error!(error = %e, "failed to insert expense"))
    }

    async fn insert_inner(&self, expense: NewExpense) -> Result<i64, SplitError> {
        debug!("opening db connection");
        let mut conn = self.pool.acquire().await?;
        let mut tx = sqlx::Connection::begin(&mut *conn).await?;

        let id = sqlx::query(
            r#"INSERT INTO payments (description, amount, payer, split_with)
               VALUES (?, ?, ?, ?)"#,
        )
        .bind(expense.description)
        .bind(expense.amount)
        .bind(expense.payer)
        .bind(expense.split_with)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

        tx.commit().await?;
        debug!(id, "added new expense; releasing db connection");
        Ok(id)
    }

    /// All expenses ordered by id, or only the first `limit` when `limit > 0`.
    pub async fn list_all(&self, limit: u32) -> Result<Vec<Expense>, SplitError> {
        self.list_all_inner(limit)
            .await
            .inspect_err(|e| error!(limit, error = %e, "failed to list expenses"))
    }

    async fn list_all_inner(&self, limit: u32) -> Result<Vec<Expense>, SplitError> {
        debug!("opening db connection");
        let mut conn = self.pool.acquire().await?;
        // SQLite treats a negative LIMIT as unbounded
        let sql_limit: i64 = if limit > 0 { i64::from(limit) } else { -1 };
        debug!(limit, "select all from payments");
        let rows: Vec<Expense> = sqlx::query_as(
            r#"SELECT id, description, amount, payer, split_with
               FROM payments ORDER BY id LIMIT ?"#,
        )
        .bind(sql_limit)
        .fetch_all(&mut *conn)
        .await?;
        debug!(count = rows.len(), "obtained expenses; releasing db connection");
        Ok(rows)
    }

    /// Per-payer sum of `amount`, one row per distinct payer, ordered by payer.
    ///
    /// `split_with` is a bare column in an aggregate query, so SQLite picks it
    /// from one row of the group. Payers who split different expenses with
    /// different people only see one of those participant lists.
    pub async fn list_grouped_by_payer(&self) -> Result<Vec<PayerTotal>, SplitError> {
        self.list_grouped_inner()
            .await
            .inspect_err(|e| error!(error = %e, "failed to list grouped expenses"))
    }

    async fn list_grouped_inner(&self) -> Result<Vec<PayerTotal>, SplitError> {
        debug!("opening db connection");
        let mut conn = self.pool.acquire().await?;
        let rows: Vec<PayerTotal> = sqlx::query_as(
            r#"SELECT payer, split_with, SUM(amount) AS total_amount
               FROM payments GROUP BY payer ORDER BY payer"#,
        )
        .fetch_all(&mut *conn)
        .await?;
        debug!(count = rows.len(), "obtained payer totals; releasing db connection");
        Ok(rows)
    }
}
