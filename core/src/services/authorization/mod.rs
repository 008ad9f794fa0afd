//! Role authorization engine for business-scoped actions
//!
//! `policy` holds the pure per-action decision tables over
//! (acting role, target role) pairs; `BusinessService` combines them with
//! the tenant store to evaluate and execute membership and business
//! operations.

pub mod policy;
mod service;

#[cfg(test)]
mod tests;

pub use service::{
    BusinessDetails, BusinessService, BusinessSummary, CreateBusinessData, MemberView,
};
