//! In-memory implementation of the link repository.

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

/// Stored value for a single code.
#[derive(Debug, Clone)]
struct StoredLink {
    long_url: String,
    created_at: DateTime<Utc>,
}

/// Code of the entry every fresh store is seeded with.
pub const EXAMPLE_CODE: &str = "abc123";
/// Target URL of the seeded example entry.
pub const EXAMPLE_URL: &str = "https://example.com";

/// In-memory link store backed by a sharded concurrent hash map.
///
/// DashMap splits the key space across independently locked shards, so
/// resolves and creates on different codes proceed in parallel. The entry
/// API holds the shard lock across the existence check and the insert,
/// which gives [`LinkRepository::try_insert`] its required atomicity: two
/// concurrent creates drawing the same code cannot both claim it.
#[derive(Debug, Default)]
pub struct MemoryLinkRepository {
    links: DashMap<String, StoredLink>,
}

impl MemoryLinkRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            links: DashMap::new(),
        }
    }

    /// Creates a store seeded with the example mapping
    /// `abc123 -> https://example.com`.
    ///
    /// This is the store's only initialization step; the seeded entry exists
    /// to demonstrate resolution on a freshly started service.
    pub fn with_example_entry() -> Self {
        let repository = Self::new();
        repository.links.insert(
            EXAMPLE_CODE.to_string(),
            StoredLink {
                long_url: EXAMPLE_URL.to_string(),
                created_at: Utc::now(),
            },
        );
        repository
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn try_insert(&self, new_link: NewLink) -> Result<Option<Link>, AppError> {
        // Entry holds the shard lock, so check-and-insert is one atomic step.
        match self.links.entry(new_link.code.clone()) {
            Entry::Occupied(_) => Ok(None),
            Entry::Vacant(slot) => {
                let stored = StoredLink {
                    long_url: new_link.long_url,
                    created_at: Utc::now(),
                };
                let link = Link::new(
                    new_link.code,
                    stored.long_url.clone(),
                    stored.created_at,
                );
                slot.insert(stored);
                Ok(Some(link))
            }
        }
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        Ok(self.links.get(code).map(|entry| {
            Link::new(
                code.to_string(),
                entry.long_url.clone(),
                entry.created_at,
            )
        }))
    }

    async fn count(&self) -> Result<u64, AppError> {
        Ok(self.links.len() as u64)
    }
}
