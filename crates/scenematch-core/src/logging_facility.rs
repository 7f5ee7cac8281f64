//! Structured logging facility for scenematch
//!
//! This module provides:
//! - Single initialization point via `init(profile)`
//! - Structured logging macros (`log_op_start!`, `log_op_end!`)
//! - The `Logger` collaborator the engine and report write diagnostics to
//! - Test capture mode for deterministic assertions
//!
//! # Usage
//!
//! ```rust
//! use scenematch_core::logging_facility::{init, Profile};
//!
//! // Initialize once at application startup
//! init(Profile::Development);
//! ```
//!
//! # Logging Macros
//!
//! - `log_op_start!(op, ...)` - Log operation start
//! - `log_op_end!(op, duration_ms = ...)` - Log operation end

pub mod init;
pub mod logger;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
pub use logger::{Logger, NullLogger, TracingLogger};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
