//! Severance breakdown calculation.
//!
//! This module ties the component calculations together: it validates an
//! employment record, measures the service span, computes every component
//! and sums them into a [`SeveranceBreakdown`].
//!
//! The calculation is a pure function of its inputs. The reference date that
//! stands in for a missing termination date is always supplied by the caller.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::notice_pay::calculate_notice_pay;
use super::rounding::format_currency;
use super::service_period::measure_service_period;
use super::severance_fund::calculate_severance_fund;
use super::thirteenth_salary::calculate_thirteenth_salary;
use super::vacation::calculate_vacation;
use crate::config::SeverancePolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, AuditTrace, AuditWarning, EmploymentRecord, SeveranceBreakdown};

/// Warning code for estimates that run to the reference date.
pub const OPEN_ENDED_ESTIMATE: &str = "OPEN_ENDED_ESTIMATE";

/// Warning code for the no-cause termination assumption.
pub const NO_CAUSE_ASSUMED: &str = "NO_CAUSE_ASSUMED";

/// Warning code for records with a zero base salary.
pub const ZERO_SALARY: &str = "ZERO_SALARY";

/// Largest accepted monthly base salary, in whole currency units.
///
/// Every component stays far inside `Decimal`'s range below this bound.
pub const MAX_BASE_SALARY: i64 = 1_000_000_000_000;

/// Calculates the severance breakdown under the statutory default policy.
///
/// `reference_date` closes the service span when the record has no
/// termination date. Callers that want "as of today" pass today's date.
///
/// # Errors
///
/// - `InvalidEmployee` if the admission date or base salary is missing, or
///   the salary is negative or above [`MAX_BASE_SALARY`]
/// - `InconsistentDates` if the end of the span precedes the admission date
///
/// # Examples
///
/// ```
/// use severance_engine::calculation::calculate_severance;
/// use severance_engine::models::{ContractType, EmploymentRecord};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let employee = EmploymentRecord {
///     id: "emp_001".to_string(),
///     admission_date: NaiveDate::from_ymd_opt(2023, 1, 1),
///     termination_date: NaiveDate::from_ymd_opt(2024, 7, 1),
///     contract_type: ContractType::Clt,
///     base_salary: Some(Decimal::new(300000, 2)),
///     benefits: Default::default(),
/// };
///
/// let reference = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// let breakdown = calculate_severance(&employee, reference).unwrap();
/// assert_eq!(breakdown.months_worked, 18);
/// assert_eq!(breakdown.total_estimated, "12848.00");
/// ```
pub fn calculate_severance(
    employee: &EmploymentRecord,
    reference_date: NaiveDate,
) -> EngineResult<SeveranceBreakdown> {
    calculate_severance_with_policy(employee, reference_date, &SeverancePolicy::default())
}

/// Calculates the severance breakdown under an explicit policy.
pub fn calculate_severance_with_policy(
    employee: &EmploymentRecord,
    reference_date: NaiveDate,
    policy: &SeverancePolicy,
) -> EngineResult<SeveranceBreakdown> {
    let (admission_date, base_salary) = validate_record(employee)?;
    let end_date = employee.end_date(reference_date);
    let contract_type = employee.contract_type;

    let mut steps: Vec<AuditStep> = Vec::new();
    let mut warnings: Vec<AuditWarning> = Vec::new();
    let mut step_number: u32 = 1;

    let service = measure_service_period(admission_date, end_date, &policy.accrual, step_number)?;
    let period = service.period;
    steps.push(service.audit_step);
    step_number += 1;

    let vacation = calculate_vacation(base_salary, &period, &policy.accrual, step_number);
    step_number += vacation.audit_steps.len() as u32;
    steps.extend(vacation.audit_steps);

    let thirteenth = calculate_thirteenth_salary(
        base_salary,
        admission_date,
        end_date,
        &policy.accrual,
        step_number,
    )?;
    steps.push(thirteenth.audit_step);
    step_number += 1;

    let notice = calculate_notice_pay(
        base_salary,
        contract_type,
        &period,
        &policy.notice,
        step_number,
    );
    steps.push(notice.audit_step);
    step_number += 1;

    let fund = calculate_severance_fund(
        base_salary,
        contract_type,
        period.whole_months,
        &policy.severance_fund,
        step_number,
    );
    step_number += fund.audit_steps.len() as u32;
    steps.extend(fund.audit_steps);

    let components = [
        ("proportional_vacation", vacation.proportional_vacation),
        ("vacation_bonus", vacation.vacation_bonus),
        ("proportional_13th", thirteenth.amount),
        ("notice_pay", notice.amount),
        ("severance_fund", fund.balance),
        ("severance_fund_penalty", fund.penalty),
    ];
    let total: Decimal = components.iter().map(|(_, amount)| *amount).sum();
    let total_estimated = format_currency(total);

    let component_json: serde_json::Map<String, serde_json::Value> = components
        .iter()
        .map(|(name, amount)| (name.to_string(), serde_json::json!(amount.to_string())))
        .collect();
    steps.push(AuditStep {
        step_number,
        rule_id: "total_estimated".to_string(),
        rule_name: "Total Estimate".to_string(),
        clause_ref: String::new(),
        input: serde_json::Value::Object(component_json),
        output: serde_json::json!({ "total_estimated": total_estimated }),
        reasoning: format!(
            "Sum of {} components for a {} contract = R${}",
            components.len(),
            contract_type.as_str(),
            total_estimated
        ),
    });

    if employee.is_open_ended() {
        warnings.push(AuditWarning {
            code: OPEN_ENDED_ESTIMATE.to_string(),
            message: format!(
                "No termination date recorded; estimate runs to {}",
                reference_date
            ),
            severity: "low".to_string(),
        });
    }
    if contract_type.is_statutory() {
        warnings.push(AuditWarning {
            code: NO_CAUSE_ASSUMED.to_string(),
            message: "Employer-initiated termination without cause assumed; notice pay and FGTS penalty included".to_string(),
            severity: "low".to_string(),
        });
    }
    if base_salary.is_zero() {
        warnings.push(AuditWarning {
            code: ZERO_SALARY.to_string(),
            message: "Base salary is zero; every component is zero".to_string(),
            severity: "medium".to_string(),
        });
    }

    Ok(SeveranceBreakdown {
        contract_type,
        admission_date,
        end_date,
        months_worked: period.whole_months,
        proportional_vacation: vacation.proportional_vacation,
        vacation_bonus: vacation.vacation_bonus,
        proportional_13th: thirteenth.amount,
        notice_days: notice.notice_days,
        notice_pay: notice.amount,
        severance_fund: fund.balance,
        severance_fund_penalty: fund.penalty,
        total_estimated,
        audit_trace: AuditTrace { steps, warnings },
    })
}

/// Checks the fields the calculation cannot do without.
fn validate_record(employee: &EmploymentRecord) -> EngineResult<(NaiveDate, Decimal)> {
    let admission_date = employee
        .admission_date
        .ok_or_else(|| EngineError::invalid_employee("admission_date", "is required"))?;

    let base_salary = employee
        .base_salary
        .ok_or_else(|| EngineError::invalid_employee("base_salary", "is required"))?;

    if base_salary < Decimal::ZERO {
        return Err(EngineError::invalid_employee(
            "base_salary",
            format!("must not be negative, got {}", base_salary),
        ));
    }

    if base_salary > Decimal::from(MAX_BASE_SALARY) {
        return Err(EngineError::invalid_employee(
            "base_salary",
            format!("must not exceed {}, got {}", MAX_BASE_SALARY, base_salary),
        ));
    }

    Ok((admission_date, base_salary))
}
