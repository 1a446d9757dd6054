use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Duration;
use tokio::sync::RwLock;

use crate::features::tickets::models::{NewTicket, Ticket, TicketChanges};
use crate::features::tickets::repositories::{StoreResult, TicketRepository};

#[derive(Default)]
struct State {
    tickets: BTreeMap<i64, Ticket>,
    last_id: i64,
}

/// Process-local ticket store.
///
/// Ids come from a counter that only grows, so deleted ids are never handed out
/// again. Ids also record insertion order, which breaks `created_at` ties.
#[derive(Default)]
pub struct MemoryTicketRepository {
    state: RwLock<State>,
}

impl MemoryTicketRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TicketRepository for MemoryTicketRepository {
    async fn list(&self, offset: i64, limit: i64) -> StoreResult<(Vec<Ticket>, i64)> {
        let state = self.state.read().await;

        let mut tickets: Vec<&Ticket> = state.tickets.values().collect();
        // Stable sort over id order keeps insertion order among equal timestamps
        tickets.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let offset = usize::try_from(offset.max(0)).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit.max(0)).unwrap_or(usize::MAX);
        let page = tickets
            .into_iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect();

        Ok((page, state.tickets.len() as i64))
    }

    async fn find_by_id(&self, id: i64) -> StoreResult<Option<Ticket>> {
        Ok(self.state.read().await.tickets.get(&id).cloned())
    }

    async fn insert(&self, ticket: NewTicket) -> StoreResult<Ticket> {
        let mut state = self.state.write().await;
        state.last_id += 1;

        let stored = Ticket {
            id: state.last_id,
            user: ticket.user,
            status: ticket.status,
            created_at: ticket.created_at,
            updated_at: ticket.created_at,
        };
        state.tickets.insert(stored.id, stored.clone());

        Ok(stored)
    }

    async fn update(&self, id: i64, changes: TicketChanges) -> StoreResult<Option<Ticket>> {
        let mut state = self.state.write().await;
        let Some(ticket) = state.tickets.get_mut(&id) else {
            return Ok(None);
        };

        ticket.user = changes.user;
        ticket.status = changes.status;
        ticket.updated_at = changes
            .updated_at
            .max(ticket.updated_at + Duration::microseconds(1));

        Ok(Some(ticket.clone()))
    }

    async fn delete(&self, id: i64) -> StoreResult<bool> {
        Ok(self.state.write().await.tickets.remove(&id).is_some())
    }
}
