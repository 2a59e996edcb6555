//! Request and response bodies for the HTTP API.

use serde::{Deserialize, Serialize};

/// Message returned when bus locations could not be fetched.
pub const BUS_LOCATIONS_ERROR: &str = "Failed to fetch bus locations";

/// Error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
