// Use cases layer: application workflows over the in-memory collections.

pub mod roster;
pub mod schedule;

pub use roster::Roster;
pub use schedule::Schedule;
