#[cfg(test)]
use std::sync::Arc;

#[cfg(test)]
use axum_test::TestServer;

#[cfg(test)]
use crate::features::tickets::{
    routes as tickets_routes, MemoryTicketRepository, RetryPolicy, TicketService,
};

/// Ticket service over an empty in-memory store, without retries
#[cfg(test)]
pub fn memory_ticket_service() -> Arc<TicketService> {
    Arc::new(TicketService::new(
        Arc::new(MemoryTicketRepository::new()),
        RetryPolicy::none(),
    ))
}

/// Test server exposing only the ticket routes
#[cfg(test)]
pub fn ticket_test_server(service: Arc<TicketService>) -> TestServer {
    TestServer::new(tickets_routes::routes(service)).unwrap()
}
