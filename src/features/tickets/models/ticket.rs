use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for ticket
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Ticket {
    pub id: i64,
    pub user: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Values written when a ticket is first stored; the store assigns the id
#[derive(Debug, Clone)]
pub struct NewTicket {
    pub user: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// The only fields an update may touch
#[derive(Debug, Clone)]
pub struct TicketChanges {
    pub user: String,
    pub status: String,
    pub updated_at: DateTime<Utc>,
}
