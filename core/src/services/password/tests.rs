use super::*;

#[tokio::test]
async fn test_hash_then_verify() {
    let hasher = BcryptPasswordHasher::new(4);

    let hash = hasher.hash("secret-password").await.unwrap();

    assert_ne!(hash, "secret-password");
    assert!(hasher.verify("secret-password", &hash).await.unwrap());
    assert!(!hasher.verify("wrong-password", &hash).await.unwrap());
}

#[tokio::test]
async fn test_hashes_are_salted() {
    let hasher = BcryptPasswordHasher::new(4);

    let first = hasher.hash("same input").await.unwrap();
    let second = hasher.hash("same input").await.unwrap();

    assert_ne!(first, second);
}

#[tokio::test]
async fn test_default_cost_is_ten() {
    let hasher = BcryptPasswordHasher::default();
    assert_eq!(hasher.cost(), 10);

    let hash = hasher.hash("pw").await.unwrap();
    assert!(hash.starts_with("$2b$10$"));
}

#[tokio::test]
async fn test_malformed_hash_is_an_error() {
    let hasher = BcryptPasswordHasher::new(4);

    let result = hasher.verify("pw", "not-a-bcrypt-hash").await;

    assert!(matches!(result, Err(DomainError::Internal { .. })));
}
