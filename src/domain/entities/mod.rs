pub mod link;

pub use link::{Link, NewLink};
