//! Web layer for the shuttle location service.
//!
//! Exposes live bus locations over HTTP for the campus app.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
