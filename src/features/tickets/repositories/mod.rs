pub mod memory_ticket_repository;
pub mod pg_ticket_repository;
pub mod ticket_repository;

pub use memory_ticket_repository::MemoryTicketRepository;
pub use pg_ticket_repository::PgTicketRepository;
pub use ticket_repository::{StoreError, StoreResult, TicketRepository};
