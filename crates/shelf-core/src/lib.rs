//! # shelf-core
//!
//! Policy engine for STL Shelf organizations.
//! Answers who may do what inside an organization, where an account sits in
//! its cancellation lifecycle, and whether its usage exceeds the plan.
//!
//! Everything here is pure: callers pass the actor role, the current time and
//! the usage snapshot explicitly, and get plain values back.

pub mod config;
pub mod entitlements;
pub mod errors;
pub mod lifecycle;
pub mod permissions;
pub mod roles;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::ShelfConfig;
pub use entitlements::{compute_overage, EntitlementSnapshot, Overage, PlanLimits, Usage};
pub use errors::{PolicyError, PolicyResult, ShelfErrorCode};
pub use lifecycle::{compute_phase, Deadlines, LifecycleClock, LifecyclePhase, LifecycleStatus};
pub use permissions::{authorize, require, AccessDecision, Action};
pub use roles::{at_least, Role};
