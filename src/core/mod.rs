//! Core components of the `crypto-news-rs` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`TrackerClient`] and its builder.
//! - The immutable [`TrackerConfig`] (API key, execution mode, timeout).
//! - The primary [`TrackerError`] type.
//! - The join-and-degrade helpers used for fan-out.
//! - Internal networking and conversion logic.

/// The main client (`TrackerClient`) and builder.
pub mod client;
/// Runtime configuration (`TrackerConfig`, `ExecutionMode`).
pub mod config;
/// Conversions from upstream wire primitives.
pub mod conversions;
/// The primary error type (`TrackerError`) for the crate.
pub mod error;
/// Partial-failure tolerant joins over independent upstream calls.
pub mod fanout;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::TrackerClient`
pub use client::{TrackerClient, TrackerClientBuilder};
pub use config::{ExecutionMode, TrackerConfig};
pub use error::TrackerError;
pub use fanout::{Settled, SourceFailure};
