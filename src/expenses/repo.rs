use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::error::AppError;

/// Expense record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Expense {
    pub id: Uuid,
    pub user_id: Uuid,
    pub description: String,
    pub amount: f64,
    pub category: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl Expense {
    /// All expenses owned by the user, in stable insertion order.
    pub async fn list_by_user(db: &PgPool, user_id: Uuid) -> Result<Vec<Expense>, AppError> {
        let rows = sqlx::query_as::<_, Expense>(
            r#"
            SELECT id, user_id, description, amount, category, created_at
            FROM expenses
            WHERE user_id = $1
            ORDER BY created_at, id
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn create(
        db: &PgPool,
        user_id: Uuid,
        description: &str,
        amount: f64,
        category: &str,
    ) -> Result<Expense, AppError> {
        let expense = sqlx::query_as::<_, Expense>(
            r#"
            INSERT INTO expenses (user_id, description, amount, category)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, description, amount, category, created_at
            "#,
        )
        .bind(user_id)
        .bind(description)
        .bind(amount)
        .bind(category)
        .fetch_one(db)
        .await?;
        Ok(expense)
    }

    /// Delete an expense if it exists and belongs to the user.
    ///
    /// Returns the number of rows removed. A miss (unknown id, or a row owned
    /// by someone else) is not an error; the caller must not learn whether
    /// the id exists for another user.
    pub async fn delete(db: &PgPool, user_id: Uuid, id: Uuid) -> Result<u64, AppError> {
        let result = sqlx::query(
            r#"
            DELETE FROM expenses
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .execute(db)
        .await?;
        Ok(result.rows_affected())
    }
}
