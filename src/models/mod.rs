pub mod error;
pub mod race;
pub mod schedule;
pub mod session;
pub mod standings;
pub mod stats;
pub mod weather;
