//! # Fertiscan Web
//!
//! Form-based predictor UI for the soil fertility classifier. Loads the
//! model artifact once at startup; serves a page of twelve bounded nutrient
//! inputs and answers each submission with one synchronous inference mapped
//! through the fertility presentation table. Without an artifact, only a
//! warning state is served.

pub mod render;
pub mod routes;
pub mod state;

// Re-export primary API
pub use routes::create_router;
pub use state::{AppState, ServerConfig, SharedState};
