use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppQuery};
use crate::features::tickets::dtos::{
    CreateTicketDto, TicketPageDto, TicketResponseDto, UpdateTicketDto,
};
use crate::features::tickets::services::TicketService;
use crate::shared::types::{ErrorResponse, PaginationQuery};

/// List tickets, newest first
#[utoipa::path(
    get,
    path = "/tickets",
    params(PaginationQuery),
    responses(
        (status = 200, description = "One page of tickets", body = TicketPageDto),
        (status = 400, description = "Malformed query parameters", body = ErrorResponse),
    ),
    tag = "tickets"
)]
pub async fn list_tickets(
    State(service): State<Arc<TicketService>>,
    AppQuery(query): AppQuery<PaginationQuery>,
) -> Result<Json<TicketPageDto>> {
    let page = service.list(&query).await?;
    Ok(Json(page))
}

/// Get ticket by ID
#[utoipa::path(
    get,
    path = "/tickets/{id}",
    params(
        ("id" = i64, Path, description = "Ticket ID")
    ),
    responses(
        (status = 200, description = "Ticket found", body = TicketResponseDto),
        (status = 404, description = "Ticket not found")
    ),
    tag = "tickets"
)]
pub async fn get_ticket(
    State(service): State<Arc<TicketService>>,
    Path(id): Path<i64>,
) -> Result<Json<TicketResponseDto>> {
    let ticket = service.get_by_id(id).await?;
    Ok(Json(ticket))
}

/// Create a ticket
#[utoipa::path(
    post,
    path = "/tickets",
    request_body = CreateTicketDto,
    responses(
        (status = 201, description = "Ticket created", body = TicketResponseDto,
            headers(("Location" = String, description = "URL of the new ticket"))),
        (status = 400, description = "Missing or empty required fields", body = ErrorResponse),
    ),
    tag = "tickets"
)]
pub async fn create_ticket(
    State(service): State<Arc<TicketService>>,
    AppJson(dto): AppJson<CreateTicketDto>,
) -> Result<impl IntoResponse> {
    let ticket = service.create(dto).await?;
    let location = format!("/tickets/{}", ticket.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ticket),
    ))
}

/// Update a ticket's user and status
#[utoipa::path(
    put,
    path = "/tickets/{id}",
    params(
        ("id" = i64, Path, description = "Ticket ID")
    ),
    request_body = UpdateTicketDto,
    responses(
        (status = 200, description = "Ticket updated", body = TicketResponseDto),
        (status = 400, description = "Missing or empty required fields", body = ErrorResponse),
        (status = 404, description = "Ticket not found")
    ),
    tag = "tickets"
)]
pub async fn update_ticket(
    State(service): State<Arc<TicketService>>,
    Path(id): Path<i64>,
    AppJson(dto): AppJson<UpdateTicketDto>,
) -> Result<Json<TicketResponseDto>> {
    let ticket = service.update(id, dto).await?;
    Ok(Json(ticket))
}

/// Delete a ticket permanently
#[utoipa::path(
    delete,
    path = "/tickets/{id}",
    params(
        ("id" = i64, Path, description = "Ticket ID")
    ),
    responses(
        (status = 204, description = "Ticket deleted"),
        (status = 404, description = "Ticket not found")
    ),
    tag = "tickets"
)]
pub async fn delete_ticket(
    State(service): State<Arc<TicketService>>,
    Path(id): Path<i64>,
) -> Result<StatusCode> {
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
