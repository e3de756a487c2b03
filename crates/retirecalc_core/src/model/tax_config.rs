//! Tax configuration types
//!
//! Defines tax brackets and configuration for the requirement engine.
//! The actual tax calculation logic is in the `taxes` module.

use serde::{Deserialize, Serialize};

/// A single bracket in a progressive tax system
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Income threshold where this bracket begins
    pub threshold: f64,
    /// Marginal tax rate for income in this bracket (e.g., 0.22 for 22%)
    pub rate: f64,
}

/// Flat state income tax with an age-based retirement exclusion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateTaxConfig {
    /// Whether the client is a resident subject to this state's tax
    pub resident: bool,
    /// Age at which the retirement income exclusion begins
    pub exclusion_age: u32,
    /// Amount excluded from taxable income once eligible
    pub exclusion_amount: f64,
    /// Flat state income tax rate (e.g., 0.0549 for 5.49%)
    pub rate: f64,
}

impl Default for StateTaxConfig {
    /// Georgia resident defaults: $65,000 exclusion from age 65 at 5.49%
    fn default() -> Self {
        Self {
            resident: true,
            exclusion_age: 65,
            exclusion_amount: 65_000.0,
            rate: 0.0549,
        }
    }
}

/// Tax configuration for the requirement engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxConfig {
    /// Federal income tax brackets for a single filer, sorted by threshold
    /// ascending. Married filing doubles every threshold.
    pub federal_brackets: Vec<TaxBracket>,
    /// State tax treatment
    pub state: StateTaxConfig,
}

impl Default for TaxConfig {
    /// Returns a reasonable default based on 2024 US federal brackets (single filer)
    fn default() -> Self {
        Self {
            federal_brackets: vec![
                TaxBracket {
                    threshold: 0.0,
                    rate: 0.10,
                },
                TaxBracket {
                    threshold: 11_600.0,
                    rate: 0.12,
                },
                TaxBracket {
                    threshold: 47_150.0,
                    rate: 0.22,
                },
                TaxBracket {
                    threshold: 100_525.0,
                    rate: 0.24,
                },
                TaxBracket {
                    threshold: 191_950.0,
                    rate: 0.32,
                },
                TaxBracket {
                    threshold: 243_725.0,
                    rate: 0.35,
                },
                TaxBracket {
                    threshold: 609_350.0,
                    rate: 0.37,
                },
            ],
            state: StateTaxConfig::default(),
        }
    }
}
