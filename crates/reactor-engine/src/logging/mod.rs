//! Logging setup.
//!
//! The crate itself only emits through the `log` facade; this module installs
//! an `env_logger` backend for binaries that do not bring their own.

mod init;

pub use init::{LoggingConfig, init_logging};
