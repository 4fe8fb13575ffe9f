//! FGTS balance and termination penalty calculation.
//!
//! The fund balance is estimated from monthly deposits of a fixed share of the
//! base salary. The deposit is rounded to cents per month before being
//! multiplied by the months worked, as a payroll would deposit it.

use rust_decimal::Decimal;

use super::rounding::round_currency;
use crate::config::SeveranceFundRules;
use crate::models::{AuditStep, ContractType};

/// The result of the FGTS calculation, including both audit steps.
#[derive(Debug, Clone)]
pub struct SeveranceFundResult {
    /// The rounded monthly deposit (zero when not applicable).
    pub monthly_deposit: Decimal,
    /// Accumulated deposits.
    pub balance: Decimal,
    /// Penalty on termination without cause.
    pub penalty: Decimal,
    /// Audit steps for the balance and the penalty, in that order.
    pub audit_steps: Vec<AuditStep>,
}

/// Calculates the FGTS balance and its 40% penalty.
///
/// The penalty always assumes an employer-initiated termination without
/// cause, since employment records carry no termination cause. PJ and PF
/// contracts yield zero for both amounts.
///
/// # Examples
///
/// ```
/// use severance_engine::calculation::calculate_severance_fund;
/// use severance_engine::config::SeveranceFundRules;
/// use severance_engine::models::ContractType;
/// use rust_decimal::Decimal;
///
/// let result = calculate_severance_fund(
///     Decimal::from(3000),
///     ContractType::Clt,
///     18,
///     &SeveranceFundRules::default(),
///     1,
/// );
/// assert_eq!(result.balance, Decimal::from(4320));
/// assert_eq!(result.penalty, Decimal::from(1728));
/// ```
pub fn calculate_severance_fund(
    base_salary: Decimal,
    contract_type: ContractType,
    months_worked: u32,
    rules: &SeveranceFundRules,
    step_number: u32,
) -> SeveranceFundResult {
    let applies = contract_type.is_statutory();

    let monthly_deposit = if applies {
        round_currency(base_salary * rules.monthly_rate)
    } else {
        round_currency(Decimal::ZERO)
    };
    let balance = round_currency(monthly_deposit * Decimal::from(months_worked));
    let penalty = round_currency(balance * rules.penalty_rate);

    let balance_reasoning = if applies {
        format!(
            "R${} x {} = R${} per month; x {} months = R${}",
            base_salary.normalize(),
            rules.monthly_rate.normalize(),
            monthly_deposit,
            months_worked,
            balance
        )
    } else {
        format!(
            "No FGTS - {} contracts carry no severance fund",
            contract_type.as_str()
        )
    };

    let penalty_reasoning = if applies {
        format!(
            "R${} x {} = R${} (termination without cause assumed)",
            balance,
            rules.penalty_rate.normalize(),
            penalty
        )
    } else {
        format!(
            "No FGTS penalty - {} contracts carry no severance fund",
            contract_type.as_str()
        )
    };

    let balance_step = AuditStep {
        step_number,
        rule_id: "severance_fund".to_string(),
        rule_name: "FGTS Balance".to_string(),
        clause_ref: rules.clause.clone(),
        input: serde_json::json!({
            "base_salary": base_salary.to_string(),
            "contract_type": contract_type.as_str(),
            "months_worked": months_worked,
            "monthly_rate": rules.monthly_rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "monthly_deposit": monthly_deposit.to_string(),
            "amount": balance.to_string(),
            "applied": applies
        }),
        reasoning: balance_reasoning,
    };

    let penalty_step = AuditStep {
        step_number: step_number + 1,
        rule_id: "severance_fund_penalty".to_string(),
        rule_name: "FGTS Termination Penalty".to_string(),
        clause_ref: rules.penalty_clause.clone(),
        input: serde_json::json!({
            "severance_fund": balance.to_string(),
            "penalty_rate": rules.penalty_rate.normalize().to_string()
        }),
        output: serde_json::json!({
            "amount": penalty.to_string(),
            "applied": applies
        }),
        reasoning: penalty_reasoning,
    };

    SeveranceFundResult {
        monthly_deposit,
        balance,
        penalty,
        audit_steps: vec![balance_step, penalty_step],
    }
}
