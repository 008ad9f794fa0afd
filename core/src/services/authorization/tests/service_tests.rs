//! Business service tests over the in-memory stores

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::business::BusinessRole;
use crate::errors::{DomainError, RoleError};
use crate::repositories::{
    BusinessRepository, MockBusinessRepository, MockUserRepository, UserRepository,
};
use crate::services::authorization::{BusinessService, CreateBusinessData};

struct Fixture {
    users: Arc<MockUserRepository>,
    businesses: Arc<MockBusinessRepository>,
    service: BusinessService<MockBusinessRepository, MockUserRepository>,
}

fn fixture() -> Fixture {
    let users = Arc::new(MockUserRepository::new());
    let businesses = Arc::new(MockBusinessRepository::new(Arc::clone(&users)));
    let service = BusinessService::new(Arc::clone(&businesses), Arc::clone(&users));
    Fixture {
        users,
        businesses,
        service,
    }
}

fn business_data(name: &str) -> CreateBusinessData {
    CreateBusinessData {
        name: name.to_string(),
        description: String::new(),
        address: String::new(),
        phone: String::new(),
        email: format!("{}@x.com", name.to_lowercase()),
    }
}

impl Fixture {
    async fn user(&self, username: &str) -> Uuid {
        self.users
            .create_user(username, &format!("{username}@x.com"), "pw")
            .await
            .unwrap()
            .id
    }

    /// Create a business owned by `creator` and enroll `members`
    async fn business_with(
        &self,
        creator: Uuid,
        members: &[(Uuid, BusinessRole)],
    ) -> Uuid {
        let business = self
            .service
            .create_business(creator, business_data("Acme"))
            .await
            .unwrap();
        for (user_id, role) in members {
            self.businesses
                .insert_membership(crate::domain::entities::business::Membership::new(
                    *user_id,
                    business.id,
                    *role,
                ))
                .await
                .unwrap();
        }
        business.id
    }
}

#[tokio::test]
async fn test_create_business_grants_super_owner_and_active_pointer() {
    let f = fixture();
    let alice = f.user("alice").await;

    let business = f
        .service
        .create_business(alice, business_data("Acme"))
        .await
        .unwrap();

    let membership = f
        .businesses
        .find_membership(alice, business.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(membership.role, BusinessRole::SuperOwner);

    let alice_row = f.users.find_by_id(alice).await.unwrap().unwrap();
    assert_eq!(alice_row.active_business_id, Some(business.id));
}

#[tokio::test]
async fn test_super_owner_cannot_mint_a_second_super_owner() {
    let f = fixture();
    let alice = f.user("alice").await;
    let bob = f.user("bob").await;
    let business_id = f.business_with(alice, &[]).await;

    let err = f
        .service
        .add_member(alice, business_id, bob, BusinessRole::SuperOwner)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Role(RoleError::DuplicateSuperOwner)
    ));
}

#[tokio::test]
async fn test_add_member_rejects_duplicates() {
    let f = fixture();
    let alice = f.user("alice").await;
    let bob = f.user("bob").await;
    let business_id = f
        .business_with(alice, &[(bob, BusinessRole::Employee)])
        .await;

    let err = f
        .service
        .add_member(alice, business_id, bob, BusinessRole::Owner)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Role(RoleError::AlreadyMember)));
}

#[tokio::test]
async fn test_non_member_actions_fail_with_not_associated() {
    let f = fixture();
    let alice = f.user("alice").await;
    let outsider = f.user("mallory").await;
    let business_id = f.business_with(alice, &[]).await;

    let err = f
        .service
        .list_members(outsider, business_id)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Role(RoleError::NotAssociated)));

    let target = f.user("bob").await;
    let err = f
        .service
        .add_member(outsider, business_id, target, BusinessRole::Employee)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Role(RoleError::NotAssociated)));
}

#[tokio::test]
async fn test_employee_cannot_view_member_list() {
    let f = fixture();
    let alice = f.user("alice").await;
    let eve = f.user("eve").await;
    let business_id = f
        .business_with(alice, &[(eve, BusinessRole::Employee)])
        .await;

    let err = f.service.list_members(eve, business_id).await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Role(RoleError::InsufficientRole)
    ));
}

#[tokio::test]
async fn test_member_list_is_filtered_by_acting_role() {
    let f = fixture();
    let alice = f.user("alice").await; // SuperOwner
    let olive = f.user("olive").await; // Owner
    let adam = f.user("adam").await; // AdminEmployee
    let eve = f.user("eve").await; // Employee
    let business_id = f
        .business_with(
            alice,
            &[
                (olive, BusinessRole::Owner),
                (adam, BusinessRole::AdminEmployee),
                (eve, BusinessRole::Employee),
            ],
        )
        .await;

    // SuperOwner sees everyone except themselves
    let mut seen: Vec<Uuid> = f
        .service
        .list_members(alice, business_id)
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.user_id)
        .collect();
    seen.sort();
    let mut expected = vec![olive, adam, eve];
    expected.sort();
    assert_eq!(seen, expected);

    // Owner sees neither the SuperOwner nor other Owners
    let seen: Vec<Uuid> = f
        .service
        .list_members(olive, business_id)
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.user_id)
        .collect();
    assert!(!seen.contains(&alice));
    assert!(!seen.contains(&olive));
    assert!(seen.contains(&adam));
    assert!(seen.contains(&eve));

    // AdminEmployee sees only Employees
    let seen: Vec<Uuid> = f
        .service
        .list_members(adam, business_id)
        .await
        .unwrap()
        .into_iter()
        .map(|m| m.user_id)
        .collect();
    assert_eq!(seen, vec![eve]);
}

#[tokio::test]
async fn test_super_owner_cannot_remove_self() {
    let f = fixture();
    let alice = f.user("alice").await;
    let business_id = f.business_with(alice, &[]).await;

    let err = f
        .service
        .remove_member(alice, business_id, alice)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Role(RoleError::CannotRemoveSuperOwner)
    ));
}

#[tokio::test]
async fn test_nobody_can_remove_the_super_owner() {
    let f = fixture();
    let alice = f.user("alice").await;
    let olive = f.user("olive").await;
    let adam = f.user("adam").await;
    let eve = f.user("eve").await;
    let business_id = f
        .business_with(
            alice,
            &[
                (olive, BusinessRole::Owner),
                (adam, BusinessRole::AdminEmployee),
                (eve, BusinessRole::Employee),
            ],
        )
        .await;

    for actor in [olive, adam, eve] {
        let err = f
            .service
            .remove_member(actor, business_id, alice)
            .await
            .unwrap_err();
        assert!(
            matches!(err, DomainError::Role(RoleError::InsufficientRole)),
            "actor {actor} removing the SuperOwner"
        );
    }
}

#[tokio::test]
async fn test_super_owner_cannot_remove_an_owner() {
    let f = fixture();
    let alice = f.user("alice").await;
    let olive = f.user("olive").await;
    let business_id = f
        .business_with(alice, &[(olive, BusinessRole::Owner)])
        .await;

    let err = f
        .service
        .remove_member(alice, business_id, olive)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Role(RoleError::InsufficientRole)
    ));
}

#[tokio::test]
async fn test_allowed_removal_deletes_membership() {
    let f = fixture();
    let alice = f.user("alice").await;
    let eve = f.user("eve").await;
    let business_id = f
        .business_with(alice, &[(eve, BusinessRole::Employee)])
        .await;

    f.service
        .remove_member(alice, business_id, eve)
        .await
        .unwrap();
    assert!(f
        .businesses
        .find_membership(eve, business_id)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_update_business_restricted_to_owners() {
    let f = fixture();
    let alice = f.user("alice").await;
    let adam = f.user("adam").await;
    let business_id = f
        .business_with(alice, &[(adam, BusinessRole::AdminEmployee)])
        .await;

    let err = f
        .service
        .update_business(adam, business_id, business_data("Renamed"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Role(RoleError::InsufficientRole)
    ));

    let updated = f
        .service
        .update_business(alice, business_id, business_data("Renamed"))
        .await
        .unwrap();
    assert_eq!(updated.name, "Renamed");
}

#[tokio::test]
async fn test_delete_business_restricted_to_super_owner() {
    let f = fixture();
    let alice = f.user("alice").await;
    let olive = f.user("olive").await;
    let business_id = f
        .business_with(alice, &[(olive, BusinessRole::Owner)])
        .await;

    let err = f
        .service
        .delete_business(olive, business_id)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Role(RoleError::InsufficientRole)
    ));

    f.service.delete_business(alice, business_id).await.unwrap();
    assert!(f
        .businesses
        .find_business(business_id)
        .await
        .unwrap()
        .is_none());
    // Memberships cascade with the business
    assert!(f
        .businesses
        .find_membership(olive, business_id)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_list_user_businesses_reports_roles() {
    let f = fixture();
    let alice = f.user("alice").await;
    f.business_with(alice, &[]).await;

    let summaries = f.service.list_user_businesses(alice).await.unwrap();
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].role, BusinessRole::SuperOwner);
    assert_eq!(summaries[0].business_name, "Acme");

    let stranger = f.user("bob").await;
    assert!(f.service.list_user_businesses(stranger).await.is_err());
}

#[tokio::test]
async fn test_get_business_distinguishes_missing_from_unassociated() {
    let f = fixture();
    let alice = f.user("alice").await;
    let outsider = f.user("bob").await;
    let business_id = f.business_with(alice, &[]).await;

    let err = f
        .service
        .get_business(alice, Uuid::new_v4())
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));

    let err = f
        .service
        .get_business(outsider, business_id)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Role(RoleError::NotAssociated)));

    let details = f.service.get_business(alice, business_id).await.unwrap();
    assert_eq!(details.role, BusinessRole::SuperOwner);
}
