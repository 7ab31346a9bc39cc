//! `userbase-infra` — backing store abstractions.

pub mod store;

pub use store::{InMemoryStore, Store};
