//! Ficha Player - character sheet client.
//!
//! Keeps a character's inventory, equip state and derived status fields
//! consistent with the sheet backend. The domain rules live in
//! `ficha-domain`; this crate holds the use cases, the outbound ports and
//! the HTTP adapter behind them.

pub mod application;
pub mod config;
pub mod infrastructure;
pub mod ports;

#[cfg(test)]
mod test_fixtures;

pub use application::services;
pub use config::{ConfigError, PlayerConfig};
