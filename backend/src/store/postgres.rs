//! PostgreSQL ledger store

use async_trait::async_trait;
use shared::Dealer;
use sqlx::PgPool;
use uuid::Uuid;

use super::{LedgerStore, TransactionFields, TransactionRecord};
use crate::error::AppResult;

const TRANSACTION_COLUMNS: &str = "id, dealer_id, date, chicken_count, weight_kg, price_per_kg, \
                                   total_amount, is_paid, created_at, note";

/// Postgres-backed ledger store
#[derive(Clone)]
pub struct PgLedgerStore {
    db: PgPool,
}

#[derive(sqlx::FromRow)]
struct DealerRow {
    id: Uuid,
    name: String,
    created_at: i64,
}

impl From<DealerRow> for Dealer {
    fn from(row: DealerRow) -> Self {
        Dealer {
            id: row.id,
            name: row.name,
            created_at: row.created_at,
        }
    }
}

impl PgLedgerStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LedgerStore for PgLedgerStore {
    async fn list_transactions(&self) -> AppResult<Vec<TransactionRecord>> {
        let rows = sqlx::query_as::<_, TransactionRecord>(&format!(
            "SELECT {TRANSACTION_COLUMNS} FROM transactions ORDER BY created_at DESC"
        ))
        .fetch_all(&self.db)
        .await?;

        Ok(rows)
    }

    async fn insert_transaction(&self, record: TransactionRecord) -> AppResult<TransactionRecord> {
        let row = sqlx::query_as::<_, TransactionRecord>(&format!(
            r#"
            INSERT INTO transactions ({TRANSACTION_COLUMNS})
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING {TRANSACTION_COLUMNS}
            "#
        ))
        .bind(record.id)
        .bind(record.dealer_id)
        .bind(record.date)
        .bind(record.chicken_count)
        .bind(record.weight_kg)
        .bind(record.price_per_kg)
        .bind(record.total_amount)
        .bind(record.is_paid)
        .bind(record.created_at)
        .bind(&record.note)
        .fetch_one(&self.db)
        .await?;

        Ok(row)
    }

    async fn replace_transaction(
        &self,
        id: Uuid,
        fields: TransactionFields,
    ) -> AppResult<Option<TransactionRecord>> {
        let row = sqlx::query_as::<_, TransactionRecord>(&format!(
            r#"
            UPDATE transactions
            SET dealer_id = $2, date = $3, chicken_count = $4, weight_kg = $5,
                price_per_kg = $6, total_amount = $7, is_paid = $8, note = $9
            WHERE id = $1
            RETURNING {TRANSACTION_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(fields.dealer_id)
        .bind(fields.date)
        .bind(fields.chicken_count)
        .bind(fields.weight_kg)
        .bind(fields.price_per_kg)
        .bind(fields.total_amount)
        .bind(fields.is_paid)
        .bind(&fields.note)
        .fetch_optional(&self.db)
        .await?;

        Ok(row)
    }

    async fn set_paid(&self, id: Uuid, is_paid: bool) -> AppResult<bool> {
        let result = sqlx::query("UPDATE transactions SET is_paid = $2 WHERE id = $1")
            .bind(id)
            .bind(is_paid)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_transaction(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM transactions WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_dealers(&self) -> AppResult<Vec<Dealer>> {
        let rows = sqlx::query_as::<_, DealerRow>(
            "SELECT id, name, created_at FROM dealers ORDER BY name ASC",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(Dealer::from).collect())
    }

    async fn insert_dealer(&self, dealer: Dealer) -> AppResult<Dealer> {
        let row = sqlx::query_as::<_, DealerRow>(
            r#"
            INSERT INTO dealers (id, name, created_at)
            VALUES ($1, $2, $3)
            RETURNING id, name, created_at
            "#,
        )
        .bind(dealer.id)
        .bind(&dealer.name)
        .bind(dealer.created_at)
        .fetch_one(&self.db)
        .await?;

        Ok(row.into())
    }

    async fn rename_dealer(&self, id: Uuid, name: &str) -> AppResult<bool> {
        let result = sqlx::query("UPDATE dealers SET name = $2 WHERE id = $1")
            .bind(id)
            .bind(name)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.db).await?;
        Ok(())
    }
}
