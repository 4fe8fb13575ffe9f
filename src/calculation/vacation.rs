//! Proportional vacation and vacation bonus calculation.
//!
//! Vacation accrues at one twelfth of the monthly salary per month of the
//! current anniversary period; the statutory bonus adds one third on top.

use rust_decimal::Decimal;

use super::rounding::round_currency;
use super::service_period::ServicePeriod;
use crate::config::AccrualRules;
use crate::models::AuditStep;

/// The result of the vacation calculation, including both audit steps.
#[derive(Debug, Clone)]
pub struct VacationResult {
    /// Months accrued in the current anniversary period (0 to 12).
    pub months_in_period: u32,
    /// Proportional vacation pay.
    pub proportional_vacation: Decimal,
    /// One third of `proportional_vacation`.
    pub vacation_bonus: Decimal,
    /// Audit steps for the vacation and the bonus, in that order.
    pub audit_steps: Vec<AuditStep>,
}

/// Calculates proportional vacation and its one-third bonus.
///
/// The anniversary period restarts every 12 whole months of service. The
/// months accrued in it are the whole months since the last anniversary plus
/// one when the trailing fraction reaches the threshold, so 11 months and 20
/// days accrue the full 12/12.
///
/// The bonus is derived from the rounded vacation amount, never recomputed
/// from the salary.
///
/// # Examples
///
/// ```
/// use severance_engine::calculation::{calculate_vacation, ServicePeriod};
/// use severance_engine::config::AccrualRules;
/// use rust_decimal::Decimal;
///
/// let period = ServicePeriod { whole_months: 18, remainder_days: 0 };
/// let result = calculate_vacation(Decimal::from(3000), &period, &AccrualRules::default(), 1);
/// assert_eq!(result.proportional_vacation, Decimal::from(1500));
/// assert_eq!(result.vacation_bonus, Decimal::from(500));
/// ```
pub fn calculate_vacation(
    base_salary: Decimal,
    period: &ServicePeriod,
    rules: &AccrualRules,
    step_number: u32,
) -> VacationResult {
    let threshold = rules.month_fraction_threshold_days;
    let months_in_period =
        (period.whole_months % 12 + u32::from(period.fraction_counts(threshold))).min(12);

    let proportional_vacation =
        round_currency(base_salary * Decimal::from(months_in_period) / Decimal::from(12));
    let vacation_bonus = round_currency(proportional_vacation / Decimal::from(3));

    let vacation_step = AuditStep {
        step_number,
        rule_id: "proportional_vacation".to_string(),
        rule_name: "Proportional Vacation".to_string(),
        clause_ref: rules.vacation_clause.clone(),
        input: serde_json::json!({
            "base_salary": base_salary.to_string(),
            "months_worked": period.whole_months,
            "remainder_days": period.remainder_days
        }),
        output: serde_json::json!({
            "months_in_period": months_in_period,
            "amount": proportional_vacation.to_string()
        }),
        reasoning: format!(
            "R${} / 12 x {} months in the current period = R${}",
            base_salary.normalize(),
            months_in_period,
            proportional_vacation
        ),
    };

    let bonus_step = AuditStep {
        step_number: step_number + 1,
        rule_id: "vacation_bonus".to_string(),
        rule_name: "Vacation One-Third Bonus".to_string(),
        clause_ref: rules.vacation_bonus_clause.clone(),
        input: serde_json::json!({
            "proportional_vacation": proportional_vacation.to_string()
        }),
        output: serde_json::json!({
            "amount": vacation_bonus.to_string()
        }),
        reasoning: format!(
            "R${} / 3 = R${}",
            proportional_vacation, vacation_bonus
        ),
    };

    VacationResult {
        months_in_period,
        proportional_vacation,
        vacation_bonus,
        audit_steps: vec![vacation_step, bonus_step],
    }
}
