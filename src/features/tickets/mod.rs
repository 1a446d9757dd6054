pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::{MemoryTicketRepository, PgTicketRepository, TicketRepository};
pub use services::{RetryPolicy, TicketService};
