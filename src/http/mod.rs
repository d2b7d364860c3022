//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, routes, graceful shutdown)
//!     → request.rs (resolve X-Request-ID)
//!     → fact.rs (validate n, compute, log, count)
//!     → response.rs (JSON body or empty 400)
//!     → Send to client
//! ```

pub mod fact;
pub mod request;
pub mod response;
pub mod server;

pub use request::{RequestId, RequestIdExt, RequestIdLayer, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
