use async_trait::async_trait;
use thiserror::Error;

use crate::features::tickets::models::{NewTicket, Ticket, TicketChanges};

/// Failures raised by ticket store adapters
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The store rejected or never received the statement; nothing was applied.
    #[error("ticket store unavailable: {0}")]
    Unavailable(String),

    /// The connection broke while the statement was in flight; the outcome is unknown.
    #[error("ticket store connection interrupted: {0}")]
    Interrupted(String),

    /// Any other failure. Retrying will not help.
    #[error("ticket store query failed: {0}")]
    Query(String),
}

impl StoreError {
    /// Whether an operation may be attempted again after this error.
    ///
    /// `idempotent` operations can also be retried after an interrupted
    /// statement, since applying them twice leaves the same record behind.
    pub fn is_retryable(&self, idempotent: bool) -> bool {
        match self {
            StoreError::Unavailable(_) => true,
            StoreError::Interrupted(_) => idempotent,
            StoreError::Query(_) => false,
        }
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Durable, ordered collection of tickets keyed by an auto-assigned id.
///
/// Every method is atomic on its own. Implementations must never reuse an id,
/// and `update` must leave `updated_at` strictly later than its previous value.
#[async_trait]
pub trait TicketRepository: Send + Sync {
    /// One page ordered by `created_at` descending, ties by insertion order,
    /// together with the total number of stored tickets.
    async fn list(&self, offset: i64, limit: i64) -> StoreResult<(Vec<Ticket>, i64)>;

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Ticket>>;

    /// Store a new ticket with `updated_at == created_at`.
    async fn insert(&self, ticket: NewTicket) -> StoreResult<Ticket>;

    /// Returns `None` when the id does not exist.
    async fn update(&self, id: i64, changes: TicketChanges) -> StoreResult<Option<Ticket>>;

    /// Returns `false` when the id does not exist.
    async fn delete(&self, id: i64) -> StoreResult<bool>;
}
