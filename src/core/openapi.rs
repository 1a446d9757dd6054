use utoipa::{Modify, OpenApi};

use crate::features::tickets::{dtos as tickets_dtos, handlers as tickets_handlers};
use crate::shared::types::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        tickets_handlers::list_tickets,
        tickets_handlers::get_ticket,
        tickets_handlers::create_ticket,
        tickets_handlers::update_ticket,
        tickets_handlers::delete_ticket,
    ),
    components(
        schemas(
            // Shared
            ErrorResponse,
            // Tickets
            tickets_dtos::CreateTicketDto,
            tickets_dtos::UpdateTicketDto,
            tickets_dtos::TicketResponseDto,
            tickets_dtos::TicketPageDto,
        )
    ),
    tags(
        (name = "tickets", description = "Ticket records"),
    ),
    info(
        title = "Ticket Store API",
        version = "0.1.0",
        description = "API documentation for the ticket store",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
