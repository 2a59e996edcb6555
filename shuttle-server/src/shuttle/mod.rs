//! Concordia shuttle bus location client.
//!
//! The shuttle map site exposes live bus positions through an ASP.NET web
//! service that only answers requests carrying a session cookie issued by
//! the map page. [`ShuttleClient`] performs that two-step exchange.

mod client;
mod error;
mod types;

pub use client::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT, ShuttleClient, ShuttleConfig};
pub use error::ShuttleError;
pub use types::{BusLocations, SessionCookie};
