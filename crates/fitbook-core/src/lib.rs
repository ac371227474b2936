//! Fitbook Core — domain models, the booking lifecycle state machine,
//! and repository trait definitions.
//!
//! This crate performs no I/O. Storage and the external scheduling
//! API are consumed through the traits in [`repository`]; their
//! implementations live in `fitbook-store`.

pub mod error;
pub mod id;
pub mod models;
pub mod repository;

pub use error::{FitbookError, FitbookResult};
