//! Unit tests for the in-memory user repository

use std::sync::Arc;

use crate::domain::entities::user::{NewUser, UserType};
use crate::errors::{AuthError, DomainError};
use crate::repositories::user::{InMemoryUserRepository, UserRepository};

fn new_user(email: &str) -> NewUser {
    NewUser {
        email: email.to_string(),
        name: "Hanako".to_string(),
        phone: "090-1234-5678".to_string(),
        password_hash: "hash".to_string(),
        user_type: UserType::Buyer,
    }
}

#[tokio::test]
async fn test_create_assigns_sequential_ids() {
    let repo = InMemoryUserRepository::new();

    let first = repo.create(new_user("a@example.com")).await.unwrap();
    let second = repo.create(new_user("b@example.com")).await.unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(repo.len().await, 2);
}

#[tokio::test]
async fn test_find_by_email_and_id() {
    let repo = InMemoryUserRepository::new();
    let created = repo.create(new_user("a@example.com")).await.unwrap();

    let by_email = repo.find_by_email("a@example.com").await.unwrap();
    assert_eq!(by_email.as_ref().map(|u| u.id), Some(created.id));

    let by_id = repo.find_by_id(created.id).await.unwrap();
    assert_eq!(by_id.map(|u| u.email), Some("a@example.com".to_string()));

    assert!(repo.find_by_email("missing@example.com").await.unwrap().is_none());
    assert!(repo.find_by_id(99).await.unwrap().is_none());
}

#[tokio::test]
async fn test_duplicate_email_is_rejected() {
    let repo = InMemoryUserRepository::new();
    repo.create(new_user("a@example.com")).await.unwrap();

    let result = repo.create(new_user("a@example.com")).await;

    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::UserAlreadyExists))
    ));
    assert_eq!(repo.len().await, 1);
}

#[tokio::test]
async fn test_email_lookup_ignores_ascii_case() {
    let repo = InMemoryUserRepository::new();
    let created = repo.create(new_user("Hanako@Example.com")).await.unwrap();

    let found = repo.find_by_email("hanako@example.COM").await.unwrap();

    assert_eq!(found.map(|u| u.id), Some(created.id));
}

#[tokio::test]
async fn test_duplicate_email_differing_in_case_is_rejected() {
    let repo = InMemoryUserRepository::new();
    repo.create(new_user("a@example.com")).await.unwrap();

    let result = repo.create(new_user("A@EXAMPLE.com")).await;

    assert!(matches!(
        result,
        Err(DomainError::Auth(AuthError::UserAlreadyExists))
    ));
    assert_eq!(repo.len().await, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_racing_creates_leave_one_user() {
    let repo = Arc::new(InMemoryUserRepository::new());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let repo = Arc::clone(&repo);
            tokio::spawn(async move { repo.create(new_user("race@example.com")).await })
        })
        .collect();

    let mut created = 0;
    for handle in handles {
        if handle.await.unwrap().is_ok() {
            created += 1;
        }
    }

    assert_eq!(created, 1);
    assert_eq!(repo.len().await, 1);
}
