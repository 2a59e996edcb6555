//! Concordia shuttle location server.
//!
//! Fetches live shuttle bus positions from the Concordia shuttle map site
//! and serves them as JSON.

pub mod config;
pub mod shuttle;
pub mod web;
