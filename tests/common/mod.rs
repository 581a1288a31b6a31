#![allow(dead_code)]

use split_expense::ExpenseStorage;
use std::{
    fs,
    path::PathBuf,
    time::{SystemTime, UNIX_EPOCH},
};

/// SQLite file under the system temp dir, removed on drop.
pub struct TempDb {
    pub path: PathBuf,
    pub storage: ExpenseStorage,
}

impl TempDb {
    pub async fn new(tag: &str) -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time before UNIX_EPOCH")
            .as_nanos();

        let mut path = std::env::temp_dir();
        path.push(format!(
            "split-expense-{}-{}-{}.sqlite",
            tag,
            std::process::id(),
            nanos
        ));

        let database_url = format!("sqlite://{}", path.display());
        let storage = ExpenseStorage::connect(&database_url)
            .await
            .expect("failed to open temp database");
        storage
            .init_schema()
            .await
            .expect("failed to initialize schema");
        Self { path, storage }
    }
}

impl TempDb {
    /// The database file plus the WAL and shared-memory files SQLite keeps next to it.
    pub fn files(&self) -> Vec<PathBuf> {
        ["", "-wal", "-shm"]
            .iter()
            .map(|suffix| {
                let mut name = self.path.clone().into_os_string();
                name.push(suffix);
                PathBuf::from(name)
            })
            .collect()
    }

    /// Close the pool so SQLite checkpoints the WAL, then delete every file.
    pub async fn cleanup(self) {
        self.storage.pool().close().await;
    }
}

impl Drop for TempDb {
    fn drop(&mut self) {
        for file in self.files() {
            let _ = fs::remove_file(file);
        }
    }
}
