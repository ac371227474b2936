//! Client and trainer profile services.

use fitbook_core::error::FitbookResult;
use fitbook_core::id;
use fitbook_core::models::client::{Client, CreateClient};
use fitbook_core::models::trainer::{CreateTrainer, Trainer};
use fitbook_core::repository::{ClientRepository, TrainerRepository};
use tracing::info;

/// Manages client profile records.
#[derive(Clone)]
pub struct ClientService<C> {
    clients: C,
}

impl<C: ClientRepository> ClientService<C> {
    pub fn new(clients: C) -> Self {
        Self { clients }
    }

    /// Create a client profile with generated client and user ids.
    pub async fn create_client(&self, input: CreateClient) -> FitbookResult<Client> {
        let client = Client {
            client_id: id::client_id(),
            user_id: id::user_id(),
            name: input.name,
            email: input.email,
            phone: input.phone,
            fitness_goals: input.fitness_goals,
        };
        info!(client_id = %client.client_id, "client created");
        self.clients.save(client).await
    }

    pub async fn get_client(&self, client_id: &str) -> FitbookResult<Option<Client>> {
        self.clients.find_by_id(client_id).await
    }

    pub async fn get_all_clients(&self) -> FitbookResult<Vec<Client>> {
        self.clients.find_all().await
    }
}

/// Manages trainer profile records.
#[derive(Clone)]
pub struct TrainerService<T> {
    trainers: T,
}

impl<T: TrainerRepository> TrainerService<T> {
    pub fn new(trainers: T) -> Self {
        Self { trainers }
    }

    /// Create a trainer profile with generated trainer and user ids.
    pub async fn create_trainer(&self, input: CreateTrainer) -> FitbookResult<Trainer> {
        let trainer = Trainer {
            trainer_id: id::trainer_id(),
            user_id: id::user_id(),
            name: input.name,
            email: input.email,
            phone: input.phone,
            specialty: input.specialty,
            certification: input.certification,
            experience_years: input.experience_years,
        };
        info!(trainer_id = %trainer.trainer_id, "trainer created");
        self.trainers.save(trainer).await
    }

    pub async fn get_trainer(&self, trainer_id: &str) -> FitbookResult<Option<Trainer>> {
        self.trainers.find_by_id(trainer_id).await
    }

    pub async fn get_all_trainers(&self) -> FitbookResult<Vec<Trainer>> {
        self.trainers.find_all().await
    }
}
