pub mod memory_link_repository;

pub use memory_link_repository::{EXAMPLE_CODE, EXAMPLE_URL, MemoryLinkRepository};
