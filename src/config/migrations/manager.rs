use anyhow::{Context, Result};
use log::{debug, info};
use sqlx::SqlitePool;

use super::{
    Direction, Migration, calculate_checksum, get_applied_migrations, get_current_version,
    get_pending_migrations, init_migration_table, load_migrations, validate_migrations,
};

/// Applies and reverts embedded migrations against one pool
pub struct MigrationManager<'a> {
    pool: &'a SqlitePool,
}

impl<'a> MigrationManager<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Apply every pending migration in version order
    pub async fn migrate_up(&self) -> Result<usize> {
        init_migration_table(self.pool).await?;
        validate_migrations(self.pool).await?;

        let pending = get_pending_migrations(self.pool).await?;
        if pending.is_empty() {
            debug!("Database schema is up to date");
            return Ok(0);
        }

        for migration in &pending {
            self.apply(migration, Direction::Up).await?;
        }
        info!("Applied {} migration(s)", pending.len());
        Ok(pending.len())
    }

    /// Revert applied migrations above `target`
    pub async fn migrate_down_to(&self, target: i64) -> Result<usize> {
        init_migration_table(self.pool).await?;
        let available = load_migrations()?;
        let mut applied = get_applied_migrations(self.pool).await?;
        applied.retain(|m| m.version > target);
        applied.reverse();

        for record in &applied {
            let migration = available.get(&record.version).with_context(|| {
                format!("Migration {} '{}' has no embedded definition", record.version, record.name)
            })?;
            self.apply(migration, Direction::Down).await?;
        }
        Ok(applied.len())
    }

    pub async fn current_version(&self) -> Result<Option<i64>> {
        init_migration_table(self.pool).await?;
        get_current_version(self.pool).await
    }

    async fn apply(&self, migration: &Migration, direction: Direction) -> Result<()> {
        let mut tx = self
            .pool
            .begin()
            .await
            .context("Failed to start migration transaction")?;

        let sql = match direction {
            Direction::Up => &migration.up_sql,
            Direction::Down => &migration.down_sql,
        };
        for statement in sql.split(';').map(str::trim).filter(|s| !s.is_empty()) {
            sqlx::query(statement)
                .execute(&mut *tx)
                .await
                .with_context(|| format!("Migration {} '{}' failed", migration.version, migration.name))?;
        }

        match direction {
            Direction::Up => {
                sqlx::query("INSERT INTO schema_migrations (version, name, checksum) VALUES (?, ?, ?)")
                    .bind(migration.version)
                    .bind(&migration.name)
                    .bind(calculate_checksum(&migration.up_sql))
                    .execute(&mut *tx)
                    .await
                    .context("Failed to record migration")?;
            }
            Direction::Down => {
                sqlx::query("DELETE FROM schema_migrations WHERE version = ?")
                    .bind(migration.version)
                    .execute(&mut *tx)
                    .await
                    .context("Failed to remove migration record")?;
            }
        }

        tx.commit().await.context("Failed to commit migration")?;
        info!("Migration {} '{}' {:?}", migration.version, migration.name, direction);
        Ok(())
    }
}
