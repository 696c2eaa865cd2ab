//! End-to-end flow through the public core API

use std::sync::Arc;

use realtor_core::{
    AuthError, AuthService, AuthServiceConfig, BcryptPasswordHasher, DomainError,
    InMemoryUserRepository, SigninParams, SignupParams, TokenService, TokenServiceConfig,
    UserType,
};

fn service() -> AuthService<InMemoryUserRepository> {
    AuthService::new(
        Arc::new(InMemoryUserRepository::new()),
        Arc::new(BcryptPasswordHasher::new(4)),
        Arc::new(TokenService::new(TokenServiceConfig {
            jwt_secret: "integration-secret".to_string(),
            expires_in_seconds: 600,
        })),
        AuthServiceConfig {
            product_key_secret: "integration-product-key".to_string(),
        },
    )
}

#[tokio::test]
async fn test_admin_bootstraps_seller() {
    let service = service();

    let admin_key = service
        .generate_product_key("admin@example.com", UserType::Admin)
        .await
        .unwrap();
    let admin_token = service
        .register(
            SignupParams {
                email: "admin@example.com".to_string(),
                password: "admin-password".to_string(),
                name: "Admin".to_string(),
                phone: "03-0000-0000".to_string(),
            },
            UserType::Admin,
            Some(&admin_key),
        )
        .await
        .unwrap();

    let admin_id = service.token_service().verify_token(&admin_token).unwrap().id;
    service.require_admin(admin_id).await.unwrap();

    let seller_key = service
        .generate_product_key("seller@example.com", UserType::Seller)
        .await
        .unwrap();
    service
        .register(
            SignupParams {
                email: "seller@example.com".to_string(),
                password: "seller-password".to_string(),
                name: "Seller".to_string(),
                phone: "03-1111-1111".to_string(),
            },
            UserType::Seller,
            Some(&seller_key),
        )
        .await
        .unwrap();

    let token = service
        .signin(SigninParams {
            email: "seller@example.com".to_string(),
            password: "seller-password".to_string(),
        })
        .await
        .unwrap();
    let seller_id = service.token_service().verify_token(&token).unwrap().id;

    assert!(matches!(
        service.require_admin(seller_id).await,
        Err(DomainError::Auth(AuthError::InsufficientPermissions))
    ));
}
