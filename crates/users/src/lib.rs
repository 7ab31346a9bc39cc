//! `userbase-users` — the user entity and its per-operation input schemas.

pub mod user;

pub use user::{NewUser, User, UserPatch};
