use async_trait::async_trait;
use sqlx::PgPool;

use crate::features::tickets::models::{NewTicket, Ticket, TicketChanges};
use crate::features::tickets::repositories::{StoreError, StoreResult, TicketRepository};

// PostgreSQL error codes for statements that were rolled back before taking effect
const SERIALIZATION_FAILURE: &str = "40001";
const DEADLOCK_DETECTED: &str = "40P01";
const TOO_MANY_CONNECTIONS: &str = "53300";

/// Map sqlx failures onto the retry classes of [`StoreError`]
impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed => {
                StoreError::Unavailable(e.to_string())
            }
            sqlx::Error::Database(ref db_err) => match db_err.code().as_deref() {
                Some(SERIALIZATION_FAILURE | DEADLOCK_DETECTED | TOO_MANY_CONNECTIONS) => {
                    StoreError::Unavailable(e.to_string())
                }
                _ => StoreError::Query(e.to_string()),
            },
            sqlx::Error::Io(_) | sqlx::Error::Tls(_) | sqlx::Error::Protocol(_) => {
                StoreError::Interrupted(e.to_string())
            }
            _ => StoreError::Query(e.to_string()),
        }
    }
}

/// Ticket store backed by the `tickets` table
pub struct PgTicketRepository {
    pool: PgPool,
}

impl PgTicketRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TicketRepository for PgTicketRepository {
    async fn list(&self, offset: i64, limit: i64) -> StoreResult<(Vec<Ticket>, i64)> {
        let total: i64 = sqlx::query_scalar(r#"SELECT COUNT(*) FROM tickets"#)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to count tickets: {:?}", e);
                StoreError::from(e)
            })?;

        let tickets = sqlx::query_as::<_, Ticket>(
            r#"
            SELECT id, "user", status, created_at, updated_at
            FROM tickets
            ORDER BY created_at DESC, id ASC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list tickets: {:?}", e);
            StoreError::from(e)
        })?;

        Ok((tickets, total))
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Ticket>> {
        sqlx::query_as::<_, Ticket>(
            r#"
            SELECT id, "user", status, created_at, updated_at
            FROM tickets
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get ticket by ID: {:?}", e);
            StoreError::from(e)
        })
    }

    async fn insert(&self, ticket: NewTicket) -> StoreResult<Ticket> {
        sqlx::query_as::<_, Ticket>(
            r#"
            INSERT INTO tickets ("user", status, created_at, updated_at)
            VALUES ($1, $2, $3, $3)
            RETURNING id, "user", status, created_at, updated_at
            "#,
        )
        .bind(&ticket.user)
        .bind(&ticket.status)
        .bind(ticket.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create ticket: {:?}", e);
            StoreError::from(e)
        })
    }

    async fn update(&self, id: i64, changes: TicketChanges) -> StoreResult<Option<Ticket>> {
        // GREATEST keeps updated_at moving forward when the clock has not advanced
        sqlx::query_as::<_, Ticket>(
            r#"
            UPDATE tickets
            SET "user" = $1,
                status = $2,
                updated_at = GREATEST($3, updated_at + INTERVAL '1 microsecond')
            WHERE id = $4
            RETURNING id, "user", status, created_at, updated_at
            "#,
        )
        .bind(&changes.user)
        .bind(&changes.status)
        .bind(changes.updated_at)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update ticket: {:?}", e);
            StoreError::from(e)
        })
    }

    async fn delete(&self, id: i64) -> StoreResult<bool> {
        let result = sqlx::query(r#"DELETE FROM tickets WHERE id = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete ticket: {:?}", e);
                StoreError::from(e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
