//! HTTP front-end for the Roster `information` table.
//!
//! This crate provides the request/response layer:
//! - Typed request bodies accepted as JSON or form data
//! - Create, read, update, delete and existence-check endpoints
//! - Per-operation response envelopes and error messages
//! - Request correlation through `X-Trace-Id`

pub mod error;
pub mod extract;
pub mod handlers;
pub mod operation;
pub mod routes;
pub mod state;
pub mod trace;

pub use error::ApiError;
pub use operation::Operation;
pub use routes::create_router;
pub use state::AppState;
pub use trace::TraceId;
