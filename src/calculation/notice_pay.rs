//! Notice pay (aviso prévio indenizado) calculation.

use rust_decimal::Decimal;

use super::rounding::round_currency;
use super::service_period::ServicePeriod;
use crate::config::NoticeRules;
use crate::models::{AuditStep, ContractType};

/// Days in the commercial month used to derive a daily rate from a monthly salary.
pub const COMMERCIAL_MONTH_DAYS: u32 = 30;

/// The result of the notice pay calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct NoticePayResult {
    /// Notice days paid.
    pub notice_days: u32,
    /// Pay in lieu of notice.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Returns the notice days owed for a service span under the given rules.
///
/// Base days plus `days_per_year` for every complete year, with the extra
/// days capped at `max_extra_days`.
pub fn notice_days(period: &ServicePeriod, rules: &NoticeRules) -> u32 {
    let extra = period
        .complete_years()
        .saturating_mul(rules.days_per_year)
        .min(rules.max_extra_days);
    rules.base_days + extra
}

/// Calculates pay in lieu of notice.
///
/// Only CLT contracts carry notice pay; PJ and PF always yield zero days and
/// a zero amount. An empty service span (admission on the end date) carries
/// no notice either.
///
/// # Examples
///
/// ```
/// use severance_engine::calculation::{calculate_notice_pay, ServicePeriod};
/// use severance_engine::config::NoticeRules;
/// use severance_engine::models::ContractType;
/// use rust_decimal::Decimal;
///
/// let period = ServicePeriod { whole_months: 18, remainder_days: 0 };
/// let result = calculate_notice_pay(
///     Decimal::from(3000),
///     ContractType::Clt,
///     &period,
///     &NoticeRules::default(),
///     1,
/// );
/// assert_eq!(result.notice_days, 33);
/// assert_eq!(result.amount, Decimal::from(3300));
/// ```
pub fn calculate_notice_pay(
    base_salary: Decimal,
    contract_type: ContractType,
    period: &ServicePeriod,
    rules: &NoticeRules,
    step_number: u32,
) -> NoticePayResult {
    if !contract_type.is_statutory() || period.is_empty() {
        let reason = if contract_type.is_statutory() {
            "No notice pay - empty service span".to_string()
        } else {
            format!(
                "No notice pay - {} contracts carry no notice entitlement",
                contract_type.as_str()
            )
        };

        let audit_step = AuditStep {
            step_number,
            rule_id: "notice_pay".to_string(),
            rule_name: "Notice Pay".to_string(),
            clause_ref: rules.clause.clone(),
            input: serde_json::json!({
                "base_salary": base_salary.to_string(),
                "contract_type": contract_type.as_str(),
                "complete_years": period.complete_years()
            }),
            output: serde_json::json!({
                "notice_days": 0,
                "amount": "0.00",
                "applied": false
            }),
            reasoning: reason,
        };

        return NoticePayResult {
            notice_days: 0,
            amount: round_currency(Decimal::ZERO),
            audit_step,
        };
    }

    let days = notice_days(period, rules);
    let amount =
        round_currency(base_salary * Decimal::from(days) / Decimal::from(COMMERCIAL_MONTH_DAYS));

    let audit_step = AuditStep {
        step_number,
        rule_id: "notice_pay".to_string(),
        rule_name: "Notice Pay".to_string(),
        clause_ref: rules.clause.clone(),
        input: serde_json::json!({
            "base_salary": base_salary.to_string(),
            "contract_type": contract_type.as_str(),
            "complete_years": period.complete_years()
        }),
        output: serde_json::json!({
            "notice_days": days,
            "amount": amount.to_string(),
            "applied": true
        }),
        reasoning: format!(
            "{} base days + {} per year x {} years (extra capped at {}) = {} days; R${} / {} x {} = R${}",
            rules.base_days,
            rules.days_per_year,
            period.complete_years(),
            rules.max_extra_days,
            days,
            base_salary.normalize(),
            COMMERCIAL_MONTH_DAYS,
            days,
            amount
        ),
    };

    NoticePayResult {
        notice_days: days,
        amount,
        audit_step,
    }
}
