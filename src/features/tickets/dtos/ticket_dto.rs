use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::tickets::models::Ticket;
use crate::shared::constants::MAX_TICKET_FIELD_LENGTH;
use crate::shared::validation::not_blank;

/// Request DTO for creating a ticket.
///
/// Server-assigned fields (`id`, `createdAt`, `updatedAt`) are ignored if sent.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateTicketDto {
    #[validate(
        length(max = MAX_TICKET_FIELD_LENGTH, message = "must be at most 255 characters"),
        custom(function = "not_blank")
    )]
    pub user: String,

    #[validate(
        length(max = MAX_TICKET_FIELD_LENGTH, message = "must be at most 255 characters"),
        custom(function = "not_blank")
    )]
    pub status: String,
}

/// Request DTO for updating a ticket; only `user` and `status` can change
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateTicketDto {
    #[validate(
        length(max = MAX_TICKET_FIELD_LENGTH, message = "must be at most 255 characters"),
        custom(function = "not_blank")
    )]
    pub user: String,

    #[validate(
        length(max = MAX_TICKET_FIELD_LENGTH, message = "must be at most 255 characters"),
        custom(function = "not_blank")
    )]
    pub status: String,
}

/// Response DTO for ticket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TicketResponseDto {
    pub id: i64,
    pub user: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Ticket> for TicketResponseDto {
    fn from(t: Ticket) -> Self {
        Self {
            id: t.id,
            user: t.user,
            status: t.status,
            created_at: t.created_at,
            updated_at: t.updated_at,
        }
    }
}

/// One page of tickets plus the echoed pagination window
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TicketPageDto {
    /// Number of tickets in the whole store, not just this page
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
    pub data: Vec<TicketResponseDto>,
}
