//! Helpers for integration tests.

#![allow(dead_code)]

use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use pushkind_inventory::db::{DbPool, establish_connection_pool};
use pushkind_inventory::domain::category::NewCategory;
use pushkind_inventory::domain::types::{CategoryName, WorkspaceId};
use tempfile::NamedTempFile;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Temporary database used in integration tests.
pub struct TestDb {
    _tempfile: NamedTempFile,
    pool: DbPool,
}

impl TestDb {
    pub fn new() -> Self {
        let tempfile = NamedTempFile::new().expect("Failed to create temp file");
        let pool = establish_connection_pool(tempfile.path().to_str().unwrap())
            .expect("Failed to establish SQLite connection.");
        let mut conn = pool
            .get()
            .expect("Failed to get SQLite connection from pool.");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("Migrations failed");
        TestDb {
            _tempfile: tempfile,
            pool,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }
}

pub fn workspace(id: i32) -> WorkspaceId {
    WorkspaceId::new(id).expect("valid workspace id")
}

pub fn new_category(workspace_id: WorkspaceId, name: &str) -> NewCategory {
    NewCategory::new(
        workspace_id,
        CategoryName::new(name).expect("valid category name"),
        "",
    )
}
