//! Per-action authorization decision tables.
//!
//! Every rule is written out as an explicit (acting, target) table. The
//! role set has a display ordering, but permissions here are deliberately
//! not derived from it: several rules are lateral or asymmetric (an Owner
//! may be added by an Owner yet removed by no one, SuperOwner included),
//! and a rank comparison would silently get them wrong.

use crate::domain::entities::business::BusinessRole;

/// Outcome of an add-member check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddDecision {
    /// The acting role may grant the target role
    Allow,
    /// A second SuperOwner was requested; each business has exactly one
    DuplicateSuperOwner,
    /// The acting role may not grant the target role
    Denied,
}

/// Outcome of a remove-member check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveDecision {
    /// The acting role may remove a member holding the target role
    Allow,
    /// The target is the SuperOwner, who can never be removed
    SuperOwnerImmune,
    /// The acting role may not remove the target role
    Denied,
}

/// Whether the acting role may see the member list at all
pub fn can_view_members(acting: BusinessRole) -> bool {
    !matches!(acting, BusinessRole::Employee)
}

/// Whether a member holding `target` appears in the list shown to `acting`.
///
/// AdminEmployees see only Employees; Owners see everyone below
/// Owner; the SuperOwner sees everyone but a SuperOwner (there is no
/// other).
pub fn member_visible_to(acting: BusinessRole, target: BusinessRole) -> bool {
    use BusinessRole::*;
    match acting {
        Employee => false,
        AdminEmployee => matches!(target, Employee),
        Owner => !matches!(target, SuperOwner | Owner),
        SuperOwner => !matches!(target, SuperOwner),
    }
}

/// Add-member decision table.
pub fn add_member(acting: BusinessRole, target: BusinessRole) -> AddDecision {
    use BusinessRole::*;
    match (acting, target) {
        (SuperOwner, SuperOwner) => AddDecision::DuplicateSuperOwner,
        (Owner, SuperOwner) | (AdminEmployee, SuperOwner) => AddDecision::Denied,
        (Employee, target) if target != Employee => AddDecision::Denied,
        _ => AddDecision::Allow,
    }
}

/// Remove-member decision table; anything not explicitly allowed is denied.
pub fn remove_member(acting: BusinessRole, target: BusinessRole) -> RemoveDecision {
    use BusinessRole::*;
    match (acting, target) {
        (SuperOwner, SuperOwner) => RemoveDecision::SuperOwnerImmune,
        (SuperOwner, AdminEmployee) | (SuperOwner, Employee) => RemoveDecision::Allow,
        (Owner, AdminEmployee) | (Owner, Employee) => RemoveDecision::Allow,
        (AdminEmployee, Owner) | (AdminEmployee, AdminEmployee) | (AdminEmployee, Employee) => {
            RemoveDecision::Allow
        }
        _ => RemoveDecision::Denied,
    }
}

/// Whether the acting role may update the business's details
pub fn can_update_business(acting: BusinessRole) -> bool {
    matches!(acting, BusinessRole::SuperOwner | BusinessRole::Owner)
}

/// Whether the acting role may delete the business
pub fn can_delete_business(acting: BusinessRole) -> bool {
    matches!(acting, BusinessRole::SuperOwner)
}
