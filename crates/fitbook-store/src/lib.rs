//! Fitbook Store — in-memory repository implementations.
//!
//! Each repository is a cloneable handle over a shared map guarded by
//! an async `RwLock`; clones see the same data. Individual calls are
//! serialized by the lock, but no cross-call transaction exists: a
//! check-then-save sequence in a service is not atomic.
//!
//! This crate also hosts [`StubSchedulingApi`], the development
//! stand-in for the external Scheduling Context.

mod repository;
mod scheduling;

pub use repository::{
    MemoryBookingRepository, MemoryClientRepository, MemoryTrainerRepository,
    MemoryUserRepository,
};
pub use scheduling::StubSchedulingApi;
