use crate::domain::entities::UserAddress;
use crate::repositories::address::{AddressRepository, MockAddressRepository};

#[tokio::test]
async fn test_addresses_are_scoped_to_owner() {
    let repo = MockAddressRepository::new();
    let home = repo
        .insert(UserAddress::new(1, Some("Home".to_string()), "1 Main Street"))
        .await
        .unwrap();
    repo.insert(UserAddress::new(2, None, "9 Side Road")).await.unwrap();

    assert_eq!(repo.list_by_user(1).await.unwrap().len(), 1);
    assert!(repo.find_by_identifier(2, &home.address_identifier).await.unwrap().is_none());
    assert!(!repo.update(2, &home.address_identifier, None, "stolen").await.unwrap());
}

#[tokio::test]
async fn test_soft_delete_hides_address() {
    let repo = MockAddressRepository::new();
    let home = repo
        .insert(UserAddress::new(1, None, "1 Main Street"))
        .await
        .unwrap();

    assert!(repo.soft_delete(1, &home.address_identifier).await.unwrap());
    assert!(repo.list_by_user(1).await.unwrap().is_empty());
    assert!(!repo.soft_delete(1, &home.address_identifier).await.unwrap());
    assert!(repo.get(&home.address_identifier).await.unwrap().deleted_at.is_some());
}
