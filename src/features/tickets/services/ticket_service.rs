use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, SubsecRound, Utc};
use validator::Validate;

use crate::core::config::StoreConfig;
use crate::core::error::{AppError, Result};
use crate::features::tickets::dtos::{
    CreateTicketDto, TicketPageDto, TicketResponseDto, UpdateTicketDto,
};
use crate::features::tickets::models::{NewTicket, TicketChanges};
use crate::features::tickets::repositories::{StoreResult, TicketRepository};
use crate::shared::types::PaginationQuery;

/// How often a failed store call is attempted again
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Extra attempts after the first failure
    pub max_retries: u32,
    /// Delay before the first retry, doubled for each following one
    pub backoff: Duration,
}

impl RetryPolicy {
    #[cfg(test)]
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            backoff: Duration::ZERO,
        }
    }

    /// Total attempts including the first call
    fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }

    fn delay(&self, attempt: u32) -> Duration {
        self.backoff.saturating_mul(2u32.saturating_pow(attempt))
    }
}

impl From<&StoreConfig> for RetryPolicy {
    fn from(config: &StoreConfig) -> Self {
        Self {
            max_retries: config.max_retries,
            backoff: Duration::from_millis(config.retry_backoff_ms),
        }
    }
}

/// Current UTC time at the precision the store keeps
fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

fn not_found(id: i64) -> AppError {
    AppError::NotFound(format!("Ticket '{}' not found", id))
}

/// Service for ticket operations
pub struct TicketService {
    repository: Arc<dyn TicketRepository>,
    retry: RetryPolicy,
}

impl TicketService {
    pub fn new(repository: Arc<dyn TicketRepository>, retry: RetryPolicy) -> Self {
        Self { repository, retry }
    }

    /// Run a store call, retrying transient failures up to the policy limit
    async fn with_retry<T, F, Fut>(
        &self,
        operation: &str,
        idempotent: bool,
        mut call: F,
    ) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = StoreResult<T>>,
    {
        let mut attempt = 0;
        loop {
            match call().await {
                Ok(value) => return Ok(value),
                Err(e) if attempt < self.retry.max_retries && e.is_retryable(idempotent) => {
                    let delay = self.retry.delay(attempt);
                    attempt += 1;
                    tracing::warn!(
                        "Ticket {} failed (attempt {}/{}), retrying in {:?}: {}",
                        operation,
                        attempt,
                        self.retry.max_attempts(),
                        delay,
                        e
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(e) => {
                    tracing::error!("Ticket {} failed: {}", operation, e);
                    return Err(AppError::Persistence(e));
                }
            }
        }
    }

    /// List tickets, newest first
    pub async fn list(&self, query: &PaginationQuery) -> Result<TicketPageDto> {
        let (offset, limit) = (query.offset(), query.limit());
        let (tickets, total) = self
            .with_retry("list", true, || self.repository.list(offset, limit))
            .await?;

        Ok(TicketPageDto {
            total,
            page: query.page(),
            page_size: limit,
            data: tickets.into_iter().map(|t| t.into()).collect(),
        })
    }

    /// Get ticket by ID
    pub async fn get_by_id(&self, id: i64) -> Result<TicketResponseDto> {
        self.with_retry("lookup", true, || self.repository.find_by_id(id))
            .await?
            .map(|t| t.into())
            .ok_or_else(|| not_found(id))
    }

    /// Create a ticket; the store assigns the id and both timestamps
    pub async fn create(&self, dto: CreateTicketDto) -> Result<TicketResponseDto> {
        dto.validate()?;

        let new_ticket = NewTicket {
            user: dto.user,
            status: dto.status,
            created_at: now(),
        };
        let ticket = self
            .with_retry("create", false, || self.repository.insert(new_ticket.clone()))
            .await?;

        tracing::info!(
            "Ticket created: id={}, user={}, status={}",
            ticket.id,
            ticket.user,
            ticket.status
        );

        Ok(ticket.into())
    }

    /// Replace `user` and `status`; `updatedAt` moves forward on every call
    pub async fn update(&self, id: i64, dto: UpdateTicketDto) -> Result<TicketResponseDto> {
        dto.validate()?;

        let changes = TicketChanges {
            user: dto.user,
            status: dto.status,
            updated_at: now(),
        };
        let ticket = self
            .with_retry("update", true, || self.repository.update(id, changes.clone()))
            .await?
            .ok_or_else(|| not_found(id))?;

        tracing::info!(
            "Ticket updated: id={}, user={}, status={}",
            ticket.id,
            ticket.user,
            ticket.status
        );

        Ok(ticket.into())
    }

    /// Permanently remove a ticket
    pub async fn delete(&self, id: i64) -> Result<()> {
        let deleted = self
            .with_retry("delete", false, || self.repository.delete(id))
            .await?;

        if !deleted {
            return Err(not_found(id));
        }

        tracing::info!("Ticket deleted: id={}", id);
        Ok(())
    }
}
