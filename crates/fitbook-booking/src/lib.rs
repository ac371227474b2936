//! Fitbook Booking — application services.
//!
//! [`BookingService`] drives the booking lifecycle and its conflict
//! checks; [`ClientService`] and [`TrainerService`] manage the flat
//! profile records. All three are generic over the repository traits
//! so this crate has no dependency on any storage implementation.

pub mod booking;
pub mod profile;

pub use booking::BookingService;
pub use profile::{ClientService, TrainerService};
