use std::fmt;

/// Validation failures detected before any projection runs
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileError {
    /// Retirement age (current age + years to retirement) is past the
    /// terminal planning age
    RetirementBeyondTerminalAge {
        retirement_age: u32,
        terminal_age: u32,
    },
    /// Full retirement age must lie between 62 and 70 for the claiming-age
    /// reduction/credit formulas to be defined
    FullRetirementAgeOutOfRange(u32),
    /// A currency input was negative or not finite
    InvalidAmount { field: &'static str, value: f64 },
}

impl fmt::Display for ProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileError::RetirementBeyondTerminalAge {
                retirement_age,
                terminal_age,
            } => {
                write!(
                    f,
                    "retirement age {retirement_age} exceeds terminal planning age {terminal_age}"
                )
            }
            ProfileError::FullRetirementAgeOutOfRange(age) => {
                write!(f, "full retirement age {age} is outside 62..=70")
            }
            ProfileError::InvalidAmount { field, value } => {
                write!(f, "{field} must be a non-negative finite amount, got {value}")
            }
        }
    }
}

impl std::error::Error for ProfileError {}

/// Errors reported by the requirement engine
#[derive(Debug, Clone)]
pub enum EngineError {
    Profile(ProfileError),
    InvalidDistributionParameters {
        profile_type: &'static str,
        mean: f64,
        std_dev: f64,
        reason: &'static str,
    },
    /// Monte Carlo sweep was cancelled by user request
    Cancelled,
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Profile(e) => write!(f, "{e}"),
            EngineError::InvalidDistributionParameters {
                profile_type,
                mean,
                std_dev,
                reason,
            } => {
                write!(
                    f,
                    "invalid {profile_type} parameters (mean={mean}, std_dev={std_dev}): {reason}"
                )
            }
            EngineError::Cancelled => write!(f, "simulation cancelled"),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::Profile(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ProfileError> for EngineError {
    fn from(e: ProfileError) -> Self {
        EngineError::Profile(e)
    }
}
