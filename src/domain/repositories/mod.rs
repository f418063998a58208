//! Repository trait definitions for the domain layer.
//!
//! The single trait here, [`LinkRepository`], is the contract of the
//! short-link store. The concrete implementation lives in
//! `crate::infrastructure::memory`; a mock is auto-generated via `mockall`
//! for service unit tests.

pub mod link_repository;

pub use link_repository::LinkRepository;

#[cfg(test)]
pub use link_repository::MockLinkRepository;
