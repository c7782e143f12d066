//! Integration tests for the in-memory repositories

use chrono::{Duration, Utc};
use uuid::Uuid;

use le_core::domain::entities::{Consultation, ConsultationStatus, Lawyer, User, UserRole};
use le_core::errors::DomainError;
use le_core::repositories::{ConsultationRepository, LawyerRepository, UserRepository};
use le_infra::repositories::{
    InMemoryConsultationRepository, InMemoryLawyerRepository, InMemoryUserRepository,
};

#[tokio::test]
async fn test_user_lookup_by_id_and_email() {
    let repo = InMemoryUserRepository::new();
    let user = User::new("Alice", "alice@example.com", UserRole::Client).unwrap();
    repo.create(user.clone()).await.unwrap();

    assert_eq!(repo.find_by_id(user.id).await.unwrap(), Some(user.clone()));
    assert_eq!(
        repo.find_by_email(" ALICE@example.com").await.unwrap(),
        Some(user)
    );
    assert_eq!(repo.find_by_email("bob@example.com").await.unwrap(), None);
    assert_eq!(repo.find_by_id(Uuid::new_v4()).await.unwrap(), None);
}

#[tokio::test]
async fn test_duplicate_email_rejected() {
    let repo = InMemoryUserRepository::new();
    repo.create(User::new("Alice", "alice@example.com", UserRole::Client).unwrap())
        .await
        .unwrap();

    let result = repo
        .create(User::new("Alice Again", "alice@example.com", UserRole::Lawyer).unwrap())
        .await;
    assert!(matches!(result, Err(DomainError::BusinessRule { .. })));
}

#[tokio::test]
async fn test_lawyer_search_and_update() {
    let repo = InMemoryLawyerRepository::new();
    let family = Lawyer::new(Uuid::new_v4(), "Jane Counsel", "jane@lawfirm.com")
        .with_specialization("Family Law");
    let tax = Lawyer::new(Uuid::new_v4(), "Tom Ledger", "tom@lawfirm.com")
        .with_specialization("Tax Law");
    repo.create(tax.clone()).await.unwrap();
    repo.create(family.clone()).await.unwrap();

    let all = repo.list().await.unwrap();
    assert_eq!(
        all.iter().map(|l| l.name.as_str()).collect::<Vec<_>>(),
        vec!["Jane Counsel", "Tom Ledger"]
    );

    let found = repo.search("law").await.unwrap();
    assert_eq!(found.len(), 2);
    let found = repo.search("FAMILY").await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, family.id);

    let mut changed = family.clone();
    changed.is_available = false;
    repo.update(changed).await.unwrap();
    assert!(!repo.find_by_id(family.id).await.unwrap().unwrap().is_available);

    let missing = Lawyer::new(Uuid::new_v4(), "Nobody", "nobody@lawfirm.com");
    assert!(matches!(
        repo.update(missing).await,
        Err(DomainError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_consultation_queries() {
    let repo = InMemoryConsultationRepository::new();
    let client_id = Uuid::new_v4();
    let lawyer_id = Uuid::new_v4();

    let first = Consultation::new(client_id, lawyer_id, Utc::now() + Duration::days(1));
    let second = Consultation::new(client_id, Uuid::new_v4(), Utc::now() + Duration::days(2));
    let other = Consultation::new(Uuid::new_v4(), lawyer_id, Utc::now() + Duration::days(3));
    for c in [&first, &second, &other] {
        repo.create(c.clone()).await.unwrap();
    }

    assert_eq!(repo.find_by_client(client_id).await.unwrap().len(), 2);
    assert_eq!(repo.find_by_lawyer(lawyer_id).await.unwrap().len(), 2);

    let mut confirmed = first.clone();
    assert!(confirmed.transition_to(ConsultationStatus::Confirmed));
    repo.update(confirmed).await.unwrap();
    assert_eq!(
        repo.find_by_id(first.id).await.unwrap().unwrap().status,
        ConsultationStatus::Confirmed
    );

    assert!(matches!(
        repo.create(first.clone()).await,
        Err(DomainError::BusinessRule { .. })
    ));
}
