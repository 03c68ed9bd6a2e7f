// Domain layer: the records held by the in-memory store.

pub mod entities;

pub use entities::{SportsMatch, User};
