//! Structured logging setup.
//!
//! Every store operation runs inside a `tracing` span and reports its state
//! transitions as `debug!` events; remote failures are logged at `warn`. This
//! module installs the subscriber that turns those into output.
//!
//! # Outputs
//!
//! - **stderr**: human-readable fmt layer, always on
//! - **log file**: JSON lines, when `Config::log_file` is set; rotated at 10 MB
//!   with three backups
//!
//! # Configuration
//!
//! Level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup and level resolution
//! - [`file_writer`]: Rotating file writer with size-based rotation

pub mod file_writer;
mod init;

pub use file_writer::RotatingFile;
pub use init::init_tracing;
