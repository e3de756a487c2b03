//! Client profile input types
//!
//! A `ClientProfile` is the single input record for one requirement
//! calculation. It is immutable once validated; all ages and year offsets
//! are unsigned, so negative values are unrepresentable.

use serde::{Deserialize, Serialize};

use crate::error::ProfileError;

use super::assumptions::PlanAssumptions;

/// Federal filing status. Married filing doubles every bracket threshold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilingStatus {
    #[default]
    Single,
    Married,
}

/// Reference Social Security benefits from the client's statement
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SocialSecurityBenefits {
    /// Annual benefit when claiming at age 62
    pub at_62: f64,
    /// Annual benefit when claiming at full retirement age
    pub at_fra: f64,
    /// Annual benefit when claiming at age 70
    pub at_70: f64,
    /// Full retirement age (must lie in 62..=70)
    pub fra_age: u32,
}

/// Input record for one requirement calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientProfile {
    pub current_age: u32,
    pub years_to_retirement: u32,
    pub years_to_social_security: u32,
    /// Desired monthly income in today's dollars
    pub monthly_income: f64,
    /// Desired amount remaining at the end of the plan
    #[serde(default)]
    pub legacy_desired: f64,
    pub benefits: SocialSecurityBenefits,
    /// Annual long-term-care insurance coverage
    #[serde(default)]
    pub ltc_insurance: f64,
    /// Annual pension income in today's dollars
    #[serde(default)]
    pub pension_income: f64,
    /// Other annual income in today's dollars
    #[serde(default)]
    pub other_income: f64,
    #[serde(default)]
    pub filing_status: FilingStatus,
}

impl ClientProfile {
    pub fn retirement_age(&self) -> u32 {
        self.current_age.saturating_add(self.years_to_retirement)
    }

    pub fn claiming_age(&self) -> u32 {
        self.current_age.saturating_add(self.years_to_social_security)
    }

    /// Number of retirement years in the plan (retirement through the
    /// terminal planning age)
    pub fn retirement_years(&self, terminal_age: u32) -> usize {
        terminal_age.saturating_sub(self.retirement_age()) as usize
    }

    /// Retirement years before Social Security starts. Claiming before
    /// retirement clamps to zero: benefits are simply already flowing in
    /// year 0.
    pub fn pre_social_security_years(&self) -> usize {
        self.claiming_age().saturating_sub(self.retirement_age()) as usize
    }

    /// Fail-fast validation, run before any projection
    pub fn validate(&self, assumptions: &PlanAssumptions) -> Result<(), ProfileError> {
        let retirement_age = self.current_age as u64 + self.years_to_retirement as u64;
        if retirement_age > assumptions.terminal_age as u64 {
            return Err(ProfileError::RetirementBeyondTerminalAge {
                retirement_age: retirement_age.min(u32::MAX as u64) as u32,
                terminal_age: assumptions.terminal_age,
            });
        }
        if !(62..=70).contains(&self.benefits.fra_age) {
            return Err(ProfileError::FullRetirementAgeOutOfRange(
                self.benefits.fra_age,
            ));
        }

        let amounts = [
            ("monthly_income", self.monthly_income),
            ("legacy_desired", self.legacy_desired),
            ("ltc_insurance", self.ltc_insurance),
            ("pension_income", self.pension_income),
            ("other_income", self.other_income),
            ("benefits.at_62", self.benefits.at_62),
            ("benefits.at_fra", self.benefits.at_fra),
            ("benefits.at_70", self.benefits.at_70),
        ];
        for (field, value) in amounts {
            if !value.is_finite() || value < 0.0 {
                return Err(ProfileError::InvalidAmount { field, value });
            }
        }

        Ok(())
    }
}
