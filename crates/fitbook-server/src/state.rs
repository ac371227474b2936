//! Application state and dependency wiring.
//!
//! The whole service graph is constructed once at process start and
//! handed to the router; no handler reaches for a global.

use fitbook_auth::{AuthConfig, AuthService};
use fitbook_booking::{BookingService, ClientService, TrainerService};
use fitbook_store::{
    MemoryBookingRepository, MemoryClientRepository, MemoryTrainerRepository,
    MemoryUserRepository, StubSchedulingApi,
};

pub type Bookings = BookingService<
    MemoryBookingRepository,
    MemoryClientRepository,
    MemoryTrainerRepository,
    StubSchedulingApi,
>;
pub type Clients = ClientService<MemoryClientRepository>;
pub type Trainers = TrainerService<MemoryTrainerRepository>;
pub type Auth = AuthService<MemoryUserRepository>;

/// Shared handle to every application service.
#[derive(Clone)]
pub struct AppState {
    pub bookings: Bookings,
    pub clients: Clients,
    pub trainers: Trainers,
    pub auth: Auth,
}

/// Wire repositories and services into a ready-to-serve state.
pub fn build_state(auth_config: AuthConfig) -> AppState {
    let booking_repo = MemoryBookingRepository::new();
    let client_repo = MemoryClientRepository::new();
    let trainer_repo = MemoryTrainerRepository::new();
    let user_repo = MemoryUserRepository::new();
    let scheduling = StubSchedulingApi::new();

    AppState {
        bookings: BookingService::new(
            booking_repo,
            client_repo.clone(),
            trainer_repo.clone(),
            scheduling,
        ),
        clients: ClientService::new(client_repo),
        trainers: TrainerService::new(trainer_repo),
        auth: AuthService::new(user_repo, auth_config),
    }
}
