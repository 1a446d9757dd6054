pub mod ticket_service;

pub use ticket_service::{RetryPolicy, TicketService};
