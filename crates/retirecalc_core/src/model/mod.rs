mod assumptions;
mod profile;
mod results;
mod tax_config;

pub use assumptions::{
    LtcAssumptions, MarketAssumptions, PlanAssumptions, SimulationSettings,
};
pub use profile::{ClientProfile, FilingStatus, SocialSecurityBenefits};
pub use results::{
    CashFlowSeries, RetirementRequirement, SuccessCurve, SuccessPoint, WithdrawalSeries,
};
pub use tax_config::{StateTaxConfig, TaxBracket, TaxConfig};
