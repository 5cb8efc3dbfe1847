//! Diesel models and configuration types.

#[cfg(feature = "server")]
pub mod config;
pub mod member;
pub mod team;
