//! Social Security benefit by claiming age
//!
//! Converts the three statement reference amounts (62 / FRA / 70) and a
//! chosen claiming age into an annual benefit. The three reference ages
//! return their statement values directly; every other age applies the
//! early-claim reduction or delayed-claim credit to the FRA amount, so the
//! curve is intentionally discontinuous at the reference ages.

use crate::model::SocialSecurityBenefits;

/// Annual benefit for the given claiming age.
///
/// Early claiming reduces the FRA benefit by 5/9 of 1% per month for the
/// first 36 months and 5/12 of 1% per month beyond that. Delayed claiming
/// credits 2/3 of 1% per month, capped at age 70.
pub fn annual_benefit(claiming_age: u32, benefits: &SocialSecurityBenefits) -> f64 {
    if claiming_age == 62 {
        return benefits.at_62;
    }
    if claiming_age == benefits.fra_age {
        return benefits.at_fra;
    }
    if claiming_age == 70 {
        return benefits.at_70;
    }

    let months_from_fra = (claiming_age as i64 - benefits.fra_age as i64) * 12;
    if months_from_fra < 0 {
        let months_early = (-months_from_fra) as f64;
        let reduction = months_early.min(36.0) * (5.0 / 9.0) / 100.0
            + (months_early - 36.0).max(0.0) * (5.0 / 12.0) / 100.0;
        benefits.at_fra * (1.0 - reduction)
    } else {
        let creditable_months = (70 - benefits.fra_age as i64) * 12;
        let credit = (months_from_fra.min(creditable_months).max(0) as f64) * (2.0 / 3.0) / 100.0;
        benefits.at_fra * (1.0 + credit)
    }
}
