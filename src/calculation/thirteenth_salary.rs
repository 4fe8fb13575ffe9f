//! Proportional 13th salary calculation.
//!
//! The year-end bonus accrues one twelfth of the monthly salary per month
//! worked in the calendar year of the end date.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use super::rounding::round_currency;
use super::service_period::ServicePeriod;
use crate::config::AccrualRules;
use crate::error::{EngineError, EngineResult};
use crate::models::AuditStep;

/// The result of the 13th salary calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct ThirteenthSalaryResult {
    /// Months accrued in the current calendar year (0 to 12).
    pub months_in_year: u32,
    /// Proportional 13th salary.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the proportional 13th salary.
///
/// Counting starts on 1 January of the end date's year, or on the admission
/// date for employees admitted during that year, and uses the same
/// month-fraction rule as vacation.
///
/// # Examples
///
/// ```
/// use severance_engine::calculation::calculate_thirteenth_salary;
/// use severance_engine::config::AccrualRules;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let result = calculate_thirteenth_salary(
///     Decimal::from(3000),
///     NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 7, 1).unwrap(),
///     &AccrualRules::default(),
///     1,
/// ).unwrap();
/// assert_eq!(result.months_in_year, 6);
/// assert_eq!(result.amount, Decimal::from(1500));
/// ```
pub fn calculate_thirteenth_salary(
    base_salary: Decimal,
    admission_date: NaiveDate,
    end_date: NaiveDate,
    rules: &AccrualRules,
    step_number: u32,
) -> EngineResult<ThirteenthSalaryResult> {
    let year_start = NaiveDate::from_ymd_opt(end_date.year(), 1, 1).ok_or_else(|| {
        EngineError::CalculationError {
            message: format!("no 1 January in the year of {}", end_date),
        }
    })?;
    let count_from = admission_date.max(year_start);

    let period = ServicePeriod::between(count_from, end_date)?;
    let months_in_year = period
        .accrual_months(rules.month_fraction_threshold_days)
        .min(12);
    let amount = round_currency(base_salary * Decimal::from(months_in_year) / Decimal::from(12));

    let audit_step = AuditStep {
        step_number,
        rule_id: "proportional_13th".to_string(),
        rule_name: "Proportional 13th Salary".to_string(),
        clause_ref: rules.thirteenth_clause.clone(),
        input: serde_json::json!({
            "base_salary": base_salary.to_string(),
            "count_from": count_from.to_string(),
            "end_date": end_date.to_string()
        }),
        output: serde_json::json!({
            "months_in_year": months_in_year,
            "amount": amount.to_string()
        }),
        reasoning: format!(
            "R${} / 12 x {} months worked in {} = R${}",
            base_salary.normalize(),
            months_in_year,
            end_date.year(),
            amount
        ),
    };

    Ok(ThirteenthSalaryResult {
        months_in_year,
        amount,
        audit_step,
    })
}
