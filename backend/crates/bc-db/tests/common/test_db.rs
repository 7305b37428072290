use sqlx::SqlitePool;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    // In-memory needs single connection
    let pool = bc_db::connect("sqlite::memory:", 1)
        .await
        .expect("Failed to create test pool");

    bc_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Creates a file-backed pool with several connections, for tests that need
/// real concurrency. Keep the returned directory alive for the pool's lifetime.
pub async fn create_file_pool(max_connections: u32) -> (SqlitePool, tempfile::TempDir) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let url = format!("sqlite://{}", dir.path().join("bc.db").display());

    let pool = bc_db::connect(&url, max_connections)
        .await
        .expect("Failed to create file pool");

    bc_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    (pool, dir)
}
