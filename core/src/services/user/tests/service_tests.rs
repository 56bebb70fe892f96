use std::sync::Arc;

use crate::domain::entities::{Account, ProfileUpdate};
use crate::errors::{AuthError, DomainError, ValidationError};
use crate::repositories::{AccountRepository, MockAccountRepository, MockAddressRepository};
use crate::services::user::UserService;

struct Fixture {
    service: UserService<MockAccountRepository, MockAddressRepository>,
    accounts: MockAccountRepository,
    alice: Account,
    bob: Account,
}

async fn fixture() -> Fixture {
    let accounts = MockAccountRepository::new();
    let alice = accounts
        .create(Account::new("Alice", None, "alice@example.com", "hash"))
        .await
        .unwrap();
    let bob = accounts
        .create(Account::new("Bob", None, "bob@example.com", "hash"))
        .await
        .unwrap();
    let service = UserService::new(Arc::new(accounts.clone()), Arc::new(MockAddressRepository::new()));

    Fixture {
        service,
        accounts,
        alice,
        bob,
    }
}

#[tokio::test]
async fn test_update_profile_returns_fresh_account() {
    let f = fixture().await;
    let profile = ProfileUpdate {
        first_name: "Alicia".to_string(),
        last_name: Some("Liddell".to_string()),
        description: Some("Explorer".to_string()),
        avatar_url: None,
    };

    let account = f
        .service
        .update_profile(&f.alice.user_identifier, profile)
        .await
        .unwrap();

    assert_eq!(account.first_name, "Alicia");
    assert_eq!(account.description.as_deref(), Some("Explorer"));
}

#[tokio::test]
async fn test_update_profile_requires_first_name() {
    let f = fixture().await;
    let result = f
        .service
        .update_profile(&f.alice.user_identifier, ProfileUpdate::default())
        .await;

    assert!(matches!(
        result,
        Err(DomainError::ValidationErr(ValidationError::RequiredField { .. }))
    ));
}

#[tokio::test]
async fn test_update_email() {
    let f = fixture().await;

    let taken = f
        .service
        .update_email(&f.alice.user_identifier, "bob@example.com")
        .await;
    assert!(matches!(taken, Err(DomainError::Auth(AuthError::EmailAlreadyRegistered))));

    let account = f
        .service
        .update_email(&f.alice.user_identifier, "alice@new.example.com")
        .await
        .unwrap();
    assert_eq!(account.email, "alice@new.example.com");
    assert!(f.accounts.find_by_email("alice@example.com").await.unwrap().is_none());
}

#[tokio::test]
async fn test_update_email_rejects_malformed_address() {
    let f = fixture().await;

    let result = f.service.update_email(&f.alice.user_identifier, "not-an-email").await;

    assert!(matches!(
        result,
        Err(DomainError::ValidationErr(ValidationError::InvalidEmail))
    ));
}

#[tokio::test]
async fn test_address_lifecycle() {
    let f = fixture().await;
    let user = &f.alice.user_identifier;

    let home = f
        .service
        .add_address(user, Some("Home".to_string()), "1 Rabbit Hole")
        .await
        .unwrap();
    assert!(home.address_identifier.starts_with("USRADR"));

    let updated = f
        .service
        .update_address(user, &home.address_identifier, None, "2 Tea Party Lane")
        .await
        .unwrap();
    assert_eq!(updated.full_address, "2 Tea Party Lane");
    assert_eq!(updated.title, None);

    assert_eq!(f.service.list_addresses(user).await.unwrap().len(), 1);

    f.service.delete_address(user, &home.address_identifier).await.unwrap();
    assert!(f.service.list_addresses(user).await.unwrap().is_empty());

    let again = f.service.delete_address(user, &home.address_identifier).await;
    assert!(matches!(again, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_addresses_of_other_users_are_not_found() {
    let f = fixture().await;
    let home = f
        .service
        .add_address(&f.alice.user_identifier, None, "1 Rabbit Hole")
        .await
        .unwrap();

    let get = f.service.get_address(&f.bob.user_identifier, &home.address_identifier).await;
    let update = f
        .service
        .update_address(&f.bob.user_identifier, &home.address_identifier, None, "Hijacked")
        .await;
    let delete = f
        .service
        .delete_address(&f.bob.user_identifier, &home.address_identifier)
        .await;

    assert!(matches!(get, Err(DomainError::NotFound { .. })));
    assert!(matches!(update, Err(DomainError::NotFound { .. })));
    assert!(matches!(delete, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn test_blank_address_is_rejected() {
    let f = fixture().await;
    let result = f.service.add_address(&f.alice.user_identifier, None, "  ").await;
    assert!(matches!(result, Err(DomainError::ValidationErr(_))));
}
