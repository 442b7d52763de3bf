//! Database initialization and schema sync.

use sqlx::sqlite::{SqliteConnection, SqlitePool, SqlitePoolOptions};
use sqlx::Row;
use std::path::Path;
use tracing::{info, warn};

/// Columns added to a table after its first shape. `schema.sql` creates new
/// files with all of them; a file whose table predates a column gets it
/// through `ALTER TABLE` on startup. New columns are appended here.
const ADDED_COLUMNS: &[(&str, &str, &str)] = &[("forms", "deleted_at", "INTEGER")];

/// Open (or create) the SQLite database and bring its schema up to date.
pub async fn init_db(db_path: &str) -> Result<SqlitePool, sqlx::Error> {
    if let Some(parent) = Path::new(db_path).parent() {
        if !parent.as_os_str().is_empty() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                warn!(
                    path = %parent.display(),
                    error = %e,
                    "Failed to create database directory"
                );
            }
        }
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .after_connect(|conn, _meta| Box::pin(async move { configure_pragmas_conn(conn).await }))
        .connect(&format!("sqlite:{}?mode=rwc", db_path))
        .await?;

    run_migrations(&pool).await?;

    info!("Database connected and migrated at {}", db_path);
    Ok(pool)
}

/// Create missing tables and indexes, then add any missing columns.
async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    info!("Syncing database schema...");
    let schema_sql = include_str!("schema.sql");

    for statement in schema_sql.split(';') {
        let trimmed = statement.trim();
        if !trimmed.is_empty() {
            sqlx::query(trimmed).execute(pool).await?;
        }
    }

    for (table, column, decl) in ADDED_COLUMNS {
        if !column_exists(pool, table, column).await? {
            info!(table, column, "Adding missing column");
            sqlx::query(&format!("ALTER TABLE {} ADD COLUMN {} {}", table, column, decl))
                .execute(pool)
                .await?;
        }
    }

    info!("Schema sync completed");
    Ok(())
}

async fn column_exists(pool: &SqlitePool, table: &str, column: &str) -> Result<bool, sqlx::Error> {
    let rows = sqlx::query(&format!("PRAGMA table_info({})", table))
        .fetch_all(pool)
        .await?;

    Ok(rows
        .iter()
        .any(|row| row.get::<String, _>("name") == column))
}

async fn configure_pragmas_conn(conn: &mut SqliteConnection) -> Result<(), sqlx::Error> {
    // journal_mode returns the actual mode set; must use fetch to get result
    let row = sqlx::query("PRAGMA journal_mode = WAL")
        .fetch_one(&mut *conn)
        .await?;
    let journal_mode: String = row.get(0);
    tracing::debug!("SQLite journal_mode set to: {}", journal_mode);

    sqlx::query("PRAGMA busy_timeout = 5000")
        .execute(&mut *conn)
        .await?;
    sqlx::query("PRAGMA synchronous = NORMAL")
        .execute(&mut *conn)
        .await?;

    Ok(())
}
