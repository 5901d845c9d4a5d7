//! Logger bootstrap for hosting applications.
//!
//! The crate itself only emits through the `log` facade; this module wires
//! up an `env_logger` backend for hosts that do not bring their own.

mod init;

pub use init::{LoggingConfig, init_logging};
