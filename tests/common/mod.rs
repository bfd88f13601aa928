#![allow(dead_code)]

use advocates_directory::db::{ConnectionOptions, DbPool, build_pool};
use advocates_directory::models::config::ServerConfig;
use diesel::connection::SimpleConnection;
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::TempDir;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Throwaway SQLite database with the schema applied.
pub struct TestDb {
    _dir: TempDir,
    url: String,
    pool: DbPool,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let url = dir.path().join(name).to_string_lossy().into_owned();
        let pool = build_pool(
            &url,
            ConnectionOptions {
                read_only: false,
                busy_timeout: None,
            },
        )
        .expect("create pool");

        let mut conn = pool.get().expect("get connection");
        let raw: &mut SqliteConnection = &mut conn;
        raw.run_pending_migrations(MIGRATIONS)
            .expect("run migrations");

        Self {
            _dir: dir,
            url,
            pool,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub fn execute(&self, sql: &str) {
        let mut conn = self.pool.get().expect("get connection");
        conn.batch_execute(sql).expect("execute sql");
    }
}

pub fn server_config(dataset_path: &str, database_url: Option<&str>) -> ServerConfig {
    ServerConfig {
        address: "127.0.0.1".to_string(),
        port: 0,
        templates_dir: "templates/**/*".to_string(),
        assets_dir: "./assets".to_string(),
        dataset_path: dataset_path.to_string(),
        database_url: database_url.map(str::to_string),
    }
}
