//! Factorial computation subsystem.
//!
//! # Data Flow
//! ```text
//! raw `n` query value
//!     → input.rs (presence gate, format gate, range check)
//!     → calculator.rs (iterative product, synthetic per-step delay)
//!     → u128 result
//! ```
//!
//! # Design Decisions
//! - Results are fixed-width `u128`; `MAX_INPUT` (34) is the largest `n`
//!   whose factorial fits, larger inputs are rejected as client errors
//! - Negative input is rejected, never silently mapped to 1
//! - The per-step delay is part of the observable behavior (latency ≈ n × delay)

pub mod calculator;
pub mod input;

pub use calculator::{factorial, MAX_INPUT, STEP_DELAY};
pub use input::{parse_input, InputError};
