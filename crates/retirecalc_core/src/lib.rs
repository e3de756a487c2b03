//! Retirement asset requirement engine
//!
//! This crate answers one question: how much must a client hold at
//! retirement for their plan to succeed at a target confidence level?
//! It supports:
//! - Progressive federal tax with Social Security taxability and an
//!   age-gated state retirement exclusion
//! - Social Security benefit pricing by claiming age from statement values
//! - Year-by-year cash-flow projection with a short/long inflation regime
//!   and phased long-term care costs
//! - Per-year gross-up from after-tax funding gap to pre-tax withdrawal
//! - A seeded Monte Carlo sweep over candidate asset levels with a
//!   deterministic present-value baseline anchoring the search range
//! - Interpolation of the asset level hitting the target success rate
//!
//! # Usage
//!
//! ```ignore
//! use retirecalc_core::{ClientProfile, PlanAssumptions, calculate_requirement};
//!
//! let profile = ClientProfile { /* ... */ };
//! let assumptions = PlanAssumptions::default();
//! let requirement = calculate_requirement(&profile, &assumptions, 42)?;
//! println!("need {} at retirement", requirement.assets_at_retirement);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod benefits;
pub mod error;
pub mod projection;
pub mod simulation;
pub mod solver;
pub mod taxes;
pub mod withdrawals;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use error::{EngineError, ProfileError};
pub use model::{
    ClientProfile, PlanAssumptions, RetirementRequirement, SuccessCurve, SuccessPoint,
};
pub use simulation::SweepProgress;
pub use solver::{calculate_requirement, calculate_requirement_with_progress};
