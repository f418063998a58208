//! Domain layer: link entities and the store contract.

pub mod entities;
pub mod repositories;
