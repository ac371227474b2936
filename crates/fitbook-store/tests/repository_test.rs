//! Integration tests for the in-memory repositories.

use chrono::{NaiveDate, NaiveTime};
use fitbook_core::models::booking::{BookingSession, BookingStatus};
use fitbook_core::models::client::Client;
use fitbook_core::models::duration::SessionDuration;
use fitbook_core::models::slot::TimeSlot;
use fitbook_core::models::trainer::Trainer;
use fitbook_core::models::user::{User, UserRole};
use fitbook_core::repository::{
    BookingRepository, ClientRepository, SchedulingApi, TrainerRepository, UserRepository,
};
use fitbook_store::{
    MemoryBookingRepository, MemoryClientRepository, MemoryTrainerRepository,
    MemoryUserRepository, StubSchedulingApi,
};

fn slot(hour: u32) -> TimeSlot {
    TimeSlot::new(
        NaiveDate::from_ymd_opt(2025, 12, 20).unwrap(),
        NaiveTime::from_hms_opt(hour, 0, 0).unwrap(),
        NaiveTime::from_hms_opt(hour + 1, 0, 0).unwrap(),
    )
    .unwrap()
}

fn booking(id: &str, client_id: &str, trainer_id: &str, hour: u32) -> BookingSession {
    BookingSession::new(
        id.into(),
        client_id.into(),
        trainer_id.into(),
        slot(hour),
        SessionDuration::new(60).unwrap(),
    )
}

#[tokio::test]
async fn booking_save_and_find() {
    let repo = MemoryBookingRepository::new();

    let saved = repo.save(booking("BK1", "CL1", "TR1", 9)).await.unwrap();
    assert_eq!(saved.status, BookingStatus::Pending);

    let found = repo.find_by_id("BK1").await.unwrap().unwrap();
    assert_eq!(found.booking_id, "BK1");
    assert_eq!(found.client_id, "CL1");

    assert!(repo.find_by_id("BK-MISSING").await.unwrap().is_none());
}

#[tokio::test]
async fn booking_save_replaces_existing() {
    let repo = MemoryBookingRepository::new();
    repo.save(booking("BK1", "CL1", "TR1", 9)).await.unwrap();

    let mut updated = booking("BK1", "CL1", "TR1", 9);
    updated.confirm("TR1").unwrap();
    repo.save(updated).await.unwrap();

    let found = repo.find_by_id("BK1").await.unwrap().unwrap();
    assert_eq!(found.status, BookingStatus::Confirmed);
    assert_eq!(repo.find_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn booking_filters_by_party() {
    let repo = MemoryBookingRepository::new();
    repo.save(booking("BK1", "CL1", "TR1", 9)).await.unwrap();
    repo.save(booking("BK2", "CL1", "TR2", 10)).await.unwrap();
    repo.save(booking("BK3", "CL2", "TR1", 11)).await.unwrap();

    let for_client = repo.find_by_client_id("CL1").await.unwrap();
    assert_eq!(for_client.len(), 2);
    assert!(for_client.iter().all(|b| b.client_id == "CL1"));

    let for_trainer = repo.find_by_trainer_id("TR1").await.unwrap();
    assert_eq!(for_trainer.len(), 2);
    assert!(for_trainer.iter().all(|b| b.trainer_id == "TR1"));

    assert!(repo.find_by_trainer_id("TR9").await.unwrap().is_empty());
}

#[tokio::test]
async fn booking_delete() {
    let repo = MemoryBookingRepository::new();
    repo.save(booking("BK1", "CL1", "TR1", 9)).await.unwrap();

    assert!(repo.delete("BK1").await.unwrap());
    assert!(!repo.delete("BK1").await.unwrap());
    assert!(repo.find_by_id("BK1").await.unwrap().is_none());
}

#[tokio::test]
async fn clones_share_storage() {
    let repo = MemoryBookingRepository::new();
    let other = repo.clone();

    repo.save(booking("BK1", "CL1", "TR1", 9)).await.unwrap();
    assert!(other.find_by_id("BK1").await.unwrap().is_some());
}

#[tokio::test]
async fn client_repository_roundtrip() {
    let repo = MemoryClientRepository::new();
    repo.save(Client {
        client_id: "CL1".into(),
        user_id: "USR1".into(),
        name: "John Doe".into(),
        email: "john@example.com".into(),
        phone: "+6281234567890".into(),
        fitness_goals: Some("Weight loss".into()),
    })
    .await
    .unwrap();

    let found = repo.find_by_id("CL1").await.unwrap().unwrap();
    assert_eq!(found.name, "John Doe");
    assert!(repo.find_by_id("CL9").await.unwrap().is_none());
    assert_eq!(repo.find_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn trainer_repository_roundtrip() {
    let repo = MemoryTrainerRepository::new();
    repo.save(Trainer {
        trainer_id: "TR1".into(),
        user_id: "USR2".into(),
        name: "Jane Smith".into(),
        email: "jane@example.com".into(),
        phone: "+6281234567891".into(),
        specialty: Some("Strength training".into()),
        certification: None,
        experience_years: Some(5),
    })
    .await
    .unwrap();

    let found = repo.find_by_id("TR1").await.unwrap().unwrap();
    assert_eq!(found.experience_years, Some(5));
    assert!(repo.find_all().await.unwrap().iter().any(|t| t.trainer_id == "TR1"));
}

#[tokio::test]
async fn user_repository_finds_by_email() {
    let repo = MemoryUserRepository::new();
    repo.save(User::new(
        "USR1".into(),
        "alice@example.com".into(),
        "$argon2id$fake".into(),
        UserRole::Client,
    ))
    .await
    .unwrap();

    let by_email = repo.find_by_email("alice@example.com").await.unwrap();
    assert_eq!(by_email.unwrap().user_id, "USR1");
    assert!(repo.find_by_email("bob@example.com").await.unwrap().is_none());
}

#[tokio::test]
async fn stub_scheduling_defaults_to_available() {
    let api = StubSchedulingApi::new();
    assert!(api.check_availability("TR1", &slot(9)).await.unwrap());
}

#[tokio::test]
async fn stub_scheduling_honors_unavailable_mark() {
    let api = StubSchedulingApi::new();
    api.mark_unavailable("TR1").await;

    assert!(!api.check_availability("TR1", &slot(9)).await.unwrap());
    assert!(api.check_availability("TR2", &slot(9)).await.unwrap());

    api.mark_available("TR1").await;
    assert!(api.check_availability("TR1", &slot(9)).await.unwrap());
}
