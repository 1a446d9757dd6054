/// Default page size for pagination
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

// =============================================================================
// TICKET FIELD LIMITS
// =============================================================================

/// Maximum length of the `user` and `status` columns
pub const MAX_TICKET_FIELD_LENGTH: u64 = 255;
