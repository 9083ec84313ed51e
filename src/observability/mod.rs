//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via tracing; fields over interpolated strings
//! - Subscriber setup happens once, at host startup
//! - The environment filter wins over the configured level

pub mod logging;
