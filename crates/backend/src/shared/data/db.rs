use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};
use std::path::Path;

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

const CREATE_STORAGE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS a001_storage (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        city TEXT NOT NULL,
        address TEXT NOT NULL,
        temperature REAL NOT NULL,
        contact TEXT NOT NULL DEFAULT '',
        description TEXT NOT NULL DEFAULT '',
        directions TEXT NOT NULL DEFAULT ''
    );
"#;

const CREATE_BOX_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS a002_box (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        number TEXT NOT NULL UNIQUE,
        storage_id INTEGER NOT NULL REFERENCES a001_storage(id) ON DELETE CASCADE,
        level INTEGER NOT NULL,
        height REAL NOT NULL,
        width REAL NOT NULL,
        length REAL NOT NULL,
        area REAL NOT NULL DEFAULT 0,
        price REAL NOT NULL DEFAULT 0,
        is_occupied INTEGER NOT NULL DEFAULT 0
    );
"#;

const CREATE_BOX_STORAGE_INDEX: &str = r#"
    CREATE INDEX IF NOT EXISTS idx_a002_box_storage
        ON a002_box (storage_id, is_occupied);
"#;

/// sqlite URL для файла БД (с учётом путей Windows)
pub fn sqlite_url(db_file: &Path) -> anyhow::Result<String> {
    let absolute_path = if db_file.is_absolute() {
        db_file.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    Ok(format!("sqlite://{}{}?mode=rwc", prefix, normalized))
}

pub async fn initialize_database(db_file: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let db_url = sqlite_url(db_file)?;
    tracing::info!("Opening database: {}", db_url);
    let conn = Database::connect(&db_url).await?;

    bootstrap_schema(&conn).await?;

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Failed to set DB_CONN"))?;
    Ok(())
}

/// Ensure required tables exist (minimal schema bootstrap)
pub async fn bootstrap_schema(conn: &DatabaseConnection) -> anyhow::Result<()> {
    for sql in [CREATE_STORAGE_TABLE, CREATE_BOX_TABLE, CREATE_BOX_STORAGE_INDEX] {
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            sql.to_string(),
        ))
        .await?;
    }
    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("Database connection has not been initialized")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlite_url_unix() {
        let url = sqlite_url(Path::new("/var/lib/boxes.db")).unwrap();
        assert_eq!(url, "sqlite:///var/lib/boxes.db?mode=rwc");
    }

    #[test]
    fn test_sqlite_url_relative_is_absolutized() {
        let url = sqlite_url(Path::new("target/db/boxes.db")).unwrap();
        assert!(url.starts_with("sqlite://"));
        assert!(url.ends_with("target/db/boxes.db?mode=rwc"));
    }

    #[tokio::test]
    async fn test_bootstrap_schema_is_idempotent() {
        let conn = Database::connect("sqlite::memory:").await.unwrap();
        bootstrap_schema(&conn).await.unwrap();
        bootstrap_schema(&conn).await.unwrap();

        let rows = conn
            .query_all(Statement::from_string(
                DatabaseBackend::Sqlite,
                "SELECT name FROM sqlite_master WHERE type = 'table' AND name LIKE 'a00%' ORDER BY name"
                    .to_string(),
            ))
            .await
            .unwrap();
        let names: Vec<String> = rows
            .iter()
            .map(|r| r.try_get::<String>("", "name").unwrap())
            .collect();
        assert_eq!(names, vec!["a001_storage", "a002_box"]);
    }
}
