//! Embedded schema migrations for the calculator database.
//!
//! Applied versions are recorded in `schema_migrations` together with a
//! checksum of the up script, so an edited script is caught on the next start.

use anyhow::{Context, Result};
use sqlx::SqlitePool;
use std::collections::{BTreeMap, HashSet};

pub mod manager;

pub use manager::MigrationManager;

/// `(version, name, up, down)` for every migration shipped in the binary
const EMBEDDED: &[(i64, &str, &str, &str)] = &[(
    1,
    "calculators",
    include_str!("files/001_calculators/up.sql"),
    include_str!("files/001_calculators/down.sql"),
)];

#[derive(Debug, Clone)]
pub struct Migration {
    pub version: i64,
    pub name: String,
    pub up_sql: String,
    pub down_sql: String,
}

/// Row of `schema_migrations`
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AppliedMigration {
    pub version: i64,
    pub name: String,
    pub applied_at: chrono::NaiveDateTime,
    pub checksum: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Embedded migrations keyed by version
pub fn load_migrations() -> Result<BTreeMap<i64, Migration>> {
    let mut migrations = BTreeMap::new();
    for &(version, name, up_sql, down_sql) in EMBEDDED {
        let previous = migrations.insert(
            version,
            Migration {
                version,
                name: name.to_string(),
                up_sql: up_sql.to_string(),
                down_sql: down_sql.to_string(),
            },
        );
        if previous.is_some() {
            anyhow::bail!("Migration version {} is defined twice", version);
        }
    }
    Ok(migrations)
}

pub async fn init_migration_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS schema_migrations (
            version INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
            checksum TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await
    .context("Failed to create schema_migrations table")?;

    Ok(())
}

pub async fn get_applied_migrations(pool: &SqlitePool) -> Result<Vec<AppliedMigration>> {
    sqlx::query_as::<_, AppliedMigration>(
        "SELECT version, name, applied_at, checksum FROM schema_migrations ORDER BY version",
    )
    .fetch_all(pool)
    .await
    .context("Failed to read schema_migrations")
}

/// Hex digest of a migration script
pub fn calculate_checksum(sql: &str) -> String {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    let mut hasher = DefaultHasher::new();
    sql.hash(&mut hasher);
    format!("{:x}", hasher.finish())
}

/// Every recorded migration must still ship with the same up script
pub async fn validate_migrations(pool: &SqlitePool) -> Result<()> {
    let available = load_migrations()?;

    for applied in get_applied_migrations(pool).await? {
        let Some(migration) = available.get(&applied.version) else {
            anyhow::bail!(
                "Database was migrated to version {} ('{}') by a newer calc-builder",
                applied.version,
                applied.name
            );
        };
        let expected = calculate_checksum(&migration.up_sql);
        if applied.checksum != expected {
            anyhow::bail!(
                "Migration {} '{}' changed after it was applied (recorded {}, embedded {})",
                applied.version,
                applied.name,
                applied.checksum,
                expected
            );
        }
    }

    Ok(())
}

/// Embedded migrations not yet recorded, lowest version first
pub async fn get_pending_migrations(pool: &SqlitePool) -> Result<Vec<Migration>> {
    let applied: HashSet<i64> = get_applied_migrations(pool)
        .await?
        .into_iter()
        .map(|m| m.version)
        .collect();

    Ok(load_migrations()?
        .into_values()
        .filter(|migration| !applied.contains(&migration.version))
        .collect())
}

/// Highest applied version, `None` on an empty schema
pub async fn get_current_version(pool: &SqlitePool) -> Result<Option<i64>> {
    sqlx::query_scalar("SELECT MAX(version) FROM schema_migrations")
        .fetch_one(pool)
        .await
        .context("Failed to read current schema version")
}
