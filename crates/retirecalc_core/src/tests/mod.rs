//! Integration tests for the requirement engine
//!
//! Tests are organized by topic:
//! - `requirement` - End-to-end requirement solving from a client profile
//! - `sweep` - Monte Carlo sweep determinism, monotonicity, cancellation


use crate::model::{ClientProfile, FilingStatus, SocialSecurityBenefits};

/// The reference client used across the integration tests: age 50,
/// retiring at 65, claiming at 67, planning to 120.
pub fn reference_profile() -> ClientProfile {
    ClientProfile {
        current_age: 50,
        years_to_retirement: 15,
        years_to_social_security: 17,
        monthly_income: 5_000.0,
        legacy_desired: 0.0,
        benefits: SocialSecurityBenefits {
            at_62: 20_000.0,
            at_fra: 30_000.0,
            at_70: 40_000.0,
            fra_age: 67,
        },
        ltc_insurance: 50_000.0,
        pension_income: 10_000.0,
        other_income: 5_000.0,
        filing_status: FilingStatus::Single,
    }
}
