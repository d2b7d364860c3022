//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! ServiceConfig::default()   (fixed port, 10ms step delay)
//!     → loader.rs (OTEL_* environment overrides)
//!     → ServiceConfig (immutable)
//!     → handed to telemetry init and HttpServer
//! ```
//!
//! # Design Decisions
//! - No config file and no CLI flags; defaults live in code
//! - Only the tracing collaborator reads the environment
//! - Tests build configs directly with struct update syntax

pub mod loader;
pub mod schema;

pub use schema::ComputeConfig;
pub use schema::ListenerConfig;
pub use schema::ObservabilityConfig;
pub use schema::ServiceConfig;
