//! Unit tests for user entities

use crate::domain::entities::user::{NewUser, User, UserType};

fn new_user(user_type: UserType) -> NewUser {
    NewUser {
        email: "taro@example.com".to_string(),
        name: "Taro".to_string(),
        phone: "090-1234-5678".to_string(),
        password_hash: "$2b$10$hash".to_string(),
        user_type,
    }
}

#[test]
fn test_from_new_copies_fields() {
    let user = User::from_new(7, new_user(UserType::Seller));

    assert_eq!(user.id, 7);
    assert_eq!(user.email, "taro@example.com");
    assert_eq!(user.name, "Taro");
    assert_eq!(user.user_type, UserType::Seller);
    assert_eq!(user.created_at, user.updated_at);
    assert!(!user.is_admin());
}

#[test]
fn test_password_hash_is_never_serialized() {
    let user = User::from_new(1, new_user(UserType::Buyer));
    let json = serde_json::to_value(&user).unwrap();

    assert!(json.get("password_hash").is_none());
    assert_eq!(json["email"], "taro@example.com");
}

#[test]
fn test_user_type_serialization() {
    assert_eq!(serde_json::to_string(&UserType::Buyer).unwrap(), "\"BUYER\"");
    assert_eq!(serde_json::to_string(&UserType::Seller).unwrap(), "\"SELLER\"");
    assert_eq!(serde_json::to_string(&UserType::Admin).unwrap(), "\"ADMIN\"");

    let parsed: UserType = serde_json::from_str("\"ADMIN\"").unwrap();
    assert_eq!(parsed, UserType::Admin);
}

#[test]
fn test_user_type_from_str() {
    assert_eq!("seller".parse::<UserType>().unwrap(), UserType::Seller);
    assert_eq!("BUYER".parse::<UserType>().unwrap(), UserType::Buyer);
    assert!("realtor".parse::<UserType>().is_err());
}

#[test]
fn test_privileged_user_types() {
    assert!(!UserType::Buyer.is_privileged());
    assert!(UserType::Seller.is_privileged());
    assert!(UserType::Admin.is_privileged());
}
