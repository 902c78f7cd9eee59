use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use log::{debug, info};
use sqlx::SqlitePool;
use std::path::Path;

use super::{CalculatorStore, new_calculator_id, today};
use crate::calculator::{Calculator, CalculatorDraft, CalculatorId, Status, seed_calculator};
use crate::config::{db, migrations::MigrationManager};
use crate::model::Element;

/// Calculators in a SQLite database; element trees are kept as JSON text
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

#[derive(Debug, sqlx::FromRow)]
struct CalculatorRow {
    id: i64,
    name: String,
    description: String,
    elements: String,
    created_at: NaiveDate,
    submissions: i64,
    status: String,
}

impl TryFrom<CalculatorRow> for Calculator {
    type Error = anyhow::Error;

    fn try_from(row: CalculatorRow) -> Result<Self> {
        let elements: Vec<Element> = serde_json::from_str(&row.elements)
            .with_context(|| format!("Corrupt element tree for calculator {}", row.id))?;
        Ok(Calculator {
            id: CalculatorId(u64::try_from(row.id).context("Negative calculator id in database")?),
            name: row.name,
            description: row.description,
            elements,
            created_at: row.created_at,
            submissions: u32::try_from(row.submissions).unwrap_or(0),
            status: row.status.parse()?,
        })
    }
}

fn sql_id(id: CalculatorId) -> Result<i64> {
    i64::try_from(id.0).with_context(|| format!("Calculator id {} is out of range", id))
}

const SELECT_COLUMNS: &str =
    "SELECT id, name, description, elements, created_at, submissions, status FROM calculators";

impl SqliteStore {
    /// Open (or create) the database file and bring its schema up to date
    pub async fn open(path: &Path) -> Result<Self> {
        let pool = db::connect(path).await?;
        Self::from_pool(pool).await
    }

    /// Ephemeral database, seeded like a fresh file
    pub async fn in_memory() -> Result<Self> {
        let pool = db::connect_memory().await?;
        Self::from_pool(pool).await
    }

    /// Migrate `pool`; a freshly created schema receives the example calculator
    pub async fn from_pool(pool: SqlitePool) -> Result<Self> {
        let applied = MigrationManager::new(&pool).migrate_up().await?;
        let store = Self { pool };
        if applied > 0 && store.count().await? == 0 {
            info!("Seeding new calculator database");
            store.insert(&seed_calculator()).await?;
        }
        Ok(store)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn count(&self) -> Result<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM calculators")
            .fetch_one(&self.pool)
            .await
            .context("Failed to count calculators")
    }

    async fn insert(&self, record: &Calculator) -> Result<()> {
        let elements =
            serde_json::to_string(&record.elements).context("Failed to serialize element tree")?;

        sqlx::query(
            r#"
            INSERT INTO calculators (id, name, description, elements, created_at, submissions, status)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                description = excluded.description,
                elements = excluded.elements,
                created_at = excluded.created_at,
                submissions = excluded.submissions,
                status = excluded.status,
                updated_at = CURRENT_TIMESTAMP
            "#,
        )
        .bind(sql_id(record.id)?)
        .bind(&record.name)
        .bind(&record.description)
        .bind(elements)
        .bind(record.created_at)
        .bind(i64::from(record.submissions))
        .bind(record.status.as_str())
        .execute(&self.pool)
        .await
        .with_context(|| format!("Failed to save calculator {}", record.id))?;

        Ok(())
    }
}

#[async_trait]
impl CalculatorStore for SqliteStore {
    async fn save(&self, draft: CalculatorDraft) -> Result<CalculatorId> {
        let id = match draft.id {
            Some(id) => id,
            None => {
                let largest: Option<i64> = sqlx::query_scalar("SELECT MAX(id) FROM calculators")
                    .fetch_one(&self.pool)
                    .await
                    .context("Failed to read largest calculator id")?;
                new_calculator_id(largest.and_then(|id| u64::try_from(id).ok()).map(CalculatorId))
            }
        };

        let existing = self.get(id).await?;
        let record = draft.into_record(id, existing.as_ref(), today());
        self.insert(&record).await?;
        info!("Saved calculator {} ('{}')", id, record.name);
        Ok(id)
    }

    async fn load_all(&self) -> Result<Vec<Calculator>> {
        let rows = sqlx::query_as::<_, CalculatorRow>(&format!("{} ORDER BY id", SELECT_COLUMNS))
            .fetch_all(&self.pool)
            .await
            .context("Failed to load calculators")?;

        rows.into_iter().map(Calculator::try_from).collect()
    }

    async fn get(&self, id: CalculatorId) -> Result<Option<Calculator>> {
        let row = sqlx::query_as::<_, CalculatorRow>(&format!("{} WHERE id = ?", SELECT_COLUMNS))
            .bind(sql_id(id)?)
            .fetch_optional(&self.pool)
            .await
            .with_context(|| format!("Failed to load calculator {}", id))?;

        row.map(Calculator::try_from).transpose()
    }

    async fn delete(&self, id: CalculatorId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM calculators WHERE id = ?")
            .bind(sql_id(id)?)
            .execute(&self.pool)
            .await
            .with_context(|| format!("Failed to delete calculator {}", id))?;

        debug!("Delete calculator {}: {} row(s)", id, result.rows_affected());
        Ok(result.rows_affected() > 0)
    }

    async fn set_status(&self, id: CalculatorId, status: Status) -> Result<bool> {
        let result = sqlx::query(
            "UPDATE calculators SET status = ?, updated_at = CURRENT_TIMESTAMP WHERE id = ?",
        )
        .bind(status.as_str())
        .bind(sql_id(id)?)
        .execute(&self.pool)
        .await
        .with_context(|| format!("Failed to update status of calculator {}", id))?;

        Ok(result.rows_affected() > 0)
    }
}
