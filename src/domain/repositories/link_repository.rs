//! Repository trait for the short-link store.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the code-to-URL mapping.
///
/// The store is the only shared mutable resource in the service and must be
/// safe under many concurrent callers: concurrent reads, and check-and-insert
/// that is atomic from the perspective of every caller. An implementation
/// where the existence check and the insert are separate steps has a race
/// window and does not satisfy this contract.
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::MemoryLinkRepository`] - DashMap-backed in-memory store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Atomically inserts the mapping if the code is free.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if the code was unclaimed and the entry was stored
    /// - `Ok(None)` if the code is already taken (caller should redraw)
    async fn try_insert(&self, new_link: NewLink) -> Result<Option<Link>, AppError>;

    /// Finds a link by its short code.
    ///
    /// Read-only: a lookup never mutates the store, including on miss.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if not found
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Counts stored entries.
    async fn count(&self) -> Result<u64, AppError>;
}
