//! Business service: store-backed evaluation of the authorization policy
//! plus business and membership operations.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::business::{Business, BusinessRole, Membership};
use crate::errors::{AuthError, DomainError, DomainResult, RoleError};
use crate::repositories::{BusinessRepository, UserRepository};

use super::policy;

/// Fields supplied when creating or updating a business
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreateBusinessData {
    pub name: String,
    pub description: String,
    pub address: String,
    pub phone: String,
    pub email: String,
}

/// One row of the caller's business list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessSummary {
    pub business_id: Uuid,
    pub business_name: String,
    pub role: BusinessRole,
}

/// A business together with the caller's role in it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessDetails {
    pub business: Business,
    pub role: BusinessRole,
}

/// One row of a business's member list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberView {
    pub user_id: Uuid,
    pub username: String,
    pub role: BusinessRole,
}

/// Service for business lifecycle and membership management
pub struct BusinessService<B: BusinessRepository, U: UserRepository> {
    businesses: Arc<B>,
    users: Arc<U>,
}

impl<B: BusinessRepository, U: UserRepository> BusinessService<B, U> {
    /// Create a new business service
    pub fn new(businesses: Arc<B>, users: Arc<U>) -> Self {
        Self { businesses, users }
    }

    /// Resolve the caller's role in a business; no membership row means
    /// "not associated", which callers surface distinctly from an
    /// insufficient role
    async fn acting_role(&self, user_id: Uuid, business_id: Uuid) -> DomainResult<BusinessRole> {
        self.businesses
            .find_membership(user_id, business_id)
            .await?
            .map(|m| m.role)
            .ok_or(DomainError::Role(RoleError::NotAssociated))
    }

    /// Create a business; the creator becomes its SuperOwner and the
    /// business becomes the creator's active business, atomically
    pub async fn create_business(
        &self,
        creator_id: Uuid,
        data: CreateBusinessData,
    ) -> DomainResult<Business> {
        self.users
            .find_by_id(creator_id)
            .await?
            .ok_or(DomainError::Auth(AuthError::UserNotFound))?;

        let business = Business::new(data.name, data.description, data.address, data.phone, data.email);
        let business = self
            .businesses
            .create_with_super_owner(business, creator_id)
            .await?;

        tracing::info!(
            business_id = %business.id,
            creator_id = %creator_id,
            event = "business_created",
            "Business created with creator as SuperOwner"
        );
        Ok(business)
    }

    /// List the businesses the caller belongs to, with their role in each
    pub async fn list_user_businesses(&self, user_id: Uuid) -> DomainResult<Vec<BusinessSummary>> {
        let memberships = self.businesses.list_for_user(user_id).await?;
        if memberships.is_empty() {
            return Err(DomainError::not_found("Businesses for the user"));
        }

        let mut summaries = Vec::with_capacity(memberships.len());
        for membership in memberships {
            if let Some(business) = self.businesses.find_business(membership.business_id).await? {
                summaries.push(BusinessSummary {
                    business_id: business.id,
                    business_name: business.name,
                    role: membership.role,
                });
            }
        }
        Ok(summaries)
    }

    /// Fetch one business's details together with the caller's role
    pub async fn get_business(
        &self,
        user_id: Uuid,
        business_id: Uuid,
    ) -> DomainResult<BusinessDetails> {
        let business = self
            .businesses
            .find_business(business_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Business"))?;

        let role = self.acting_role(user_id, business_id).await?;
        Ok(BusinessDetails { business, role })
    }

    /// List a business's members as visible to the caller's role
    pub async fn list_members(
        &self,
        user_id: Uuid,
        business_id: Uuid,
    ) -> DomainResult<Vec<MemberView>> {
        let acting = self.acting_role(user_id, business_id).await?;

        if !policy::can_view_members(acting) {
            return Err(DomainError::Role(RoleError::InsufficientRole));
        }

        let mut views = Vec::new();
        for membership in self.businesses.list_members(business_id).await? {
            if !policy::member_visible_to(acting, membership.role) {
                continue;
            }
            if let Some(member) = self.users.find_by_id(membership.user_id).await? {
                views.push(MemberView {
                    user_id: member.id,
                    username: member.username,
                    role: membership.role,
                });
            }
        }
        Ok(views)
    }

    /// Update a business's details; restricted to SuperOwner and Owner.
    /// The business also becomes the caller's active business.
    pub async fn update_business(
        &self,
        user_id: Uuid,
        business_id: Uuid,
        data: CreateBusinessData,
    ) -> DomainResult<Business> {
        let mut user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::Auth(AuthError::UserNotFound))?;

        let mut business = self
            .businesses
            .find_business(business_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Business"))?;

        let acting = self.acting_role(user_id, business_id).await?;
        if !policy::can_update_business(acting) {
            return Err(DomainError::Role(RoleError::InsufficientRole));
        }

        business.name = data.name;
        business.description = data.description;
        business.address = data.address;
        business.phone = data.phone;
        business.email = data.email;
        business.updated_at = Utc::now();
        self.businesses.update_business(&business).await?;

        user.set_active_business(business_id);
        self.users.update(&user).await?;

        tracing::info!(business_id = %business_id, event = "business_updated", "Business updated");
        Ok(business)
    }

    /// Add a user to a business with a role, subject to the add table
    pub async fn add_member(
        &self,
        acting_user_id: Uuid,
        business_id: Uuid,
        new_user_id: Uuid,
        role: BusinessRole,
    ) -> DomainResult<()> {
        self.users
            .find_by_id(acting_user_id)
            .await?
            .ok_or(DomainError::Auth(AuthError::UserNotFound))?;

        let acting = self.acting_role(acting_user_id, business_id).await?;

        let decision = policy::add_member(acting, role);
        if decision == policy::AddDecision::Denied {
            return Err(DomainError::Role(RoleError::InsufficientRole));
        }

        let new_user = self
            .users
            .find_by_id(new_user_id)
            .await?
            .ok_or(DomainError::Auth(AuthError::UserNotFound))?;

        if self
            .businesses
            .find_membership(new_user_id, business_id)
            .await?
            .is_some()
        {
            return Err(DomainError::Role(RoleError::AlreadyMember));
        }

        if decision == policy::AddDecision::DuplicateSuperOwner {
            return Err(DomainError::Role(RoleError::DuplicateSuperOwner));
        }

        self.businesses
            .insert_membership(Membership::new(new_user.id, business_id, role))
            .await?;

        tracing::info!(
            business_id = %business_id,
            member_id = %new_user_id,
            role = %role,
            event = "member_added",
            "User added to business"
        );
        Ok(())
    }

    /// Remove a user from a business, subject to the remove table
    pub async fn remove_member(
        &self,
        acting_user_id: Uuid,
        business_id: Uuid,
        target_user_id: Uuid,
    ) -> DomainResult<()> {
        self.users
            .find_by_id(acting_user_id)
            .await?
            .ok_or(DomainError::Auth(AuthError::UserNotFound))?;

        let acting = self.acting_role(acting_user_id, business_id).await?;

        let target = self
            .businesses
            .find_membership(target_user_id, business_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Membership"))?;

        match policy::remove_member(acting, target.role) {
            policy::RemoveDecision::SuperOwnerImmune => {
                Err(DomainError::Role(RoleError::CannotRemoveSuperOwner))
            }
            policy::RemoveDecision::Denied => {
                Err(DomainError::Role(RoleError::InsufficientRole))
            }
            policy::RemoveDecision::Allow => {
                self.businesses
                    .delete_membership(target_user_id, business_id)
                    .await?;
                tracing::info!(
                    business_id = %business_id,
                    member_id = %target_user_id,
                    event = "member_removed",
                    "User removed from business"
                );
                Ok(())
            }
        }
    }

    /// Delete a business and its memberships; SuperOwner only
    pub async fn delete_business(&self, user_id: Uuid, business_id: Uuid) -> DomainResult<Business> {
        let acting = self.acting_role(user_id, business_id).await?;
        if !policy::can_delete_business(acting) {
            return Err(DomainError::Role(RoleError::InsufficientRole));
        }

        let business = self
            .businesses
            .find_business(business_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Business"))?;

        self.businesses.delete_business(business_id).await?;

        tracing::info!(business_id = %business_id, event = "business_deleted", "Business deleted");
        Ok(business)
    }
}
