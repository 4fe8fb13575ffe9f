//! Severance result models.
//!
//! This module contains the [`SeveranceBreakdown`] type produced by a successful
//! severance calculation, the [`PredictedBand`] derived from its total, and the
//! audit structures recording how every component was reached.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ContractType;

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// Reference to the statute backing this rule.
    pub clause_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag assumptions the estimate rests on; they never block it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a severance calculation.
///
/// # Example
///
/// ```
/// use severance_engine::models::AuditTrace;
///
/// let trace = AuditTrace::default();
/// assert!(trace.steps.is_empty());
/// assert!(!trace.has_warning("NO_CAUSE_ASSUMED"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
}

impl AuditTrace {
    /// Returns true if a warning with the given code was recorded.
    pub fn has_warning(&self, code: &str) -> bool {
        self.warnings.iter().any(|w| w.code == code)
    }

    /// Returns the step produced by the given rule, if any.
    pub fn step(&self, rule_id: &str) -> Option<&AuditStep> {
        self.steps.iter().find(|s| s.rule_id == rule_id)
    }
}

/// The itemised cost of terminating one employee.
///
/// Every monetary field is rounded to cents and non-negative. Fields that only
/// apply to CLT contracts (`notice_pay`, `severance_fund`,
/// `severance_fund_penalty`) are always present and zero for PJ and PF, so
/// consumers can read the same shape for every contract type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeveranceBreakdown {
    /// The contract type the breakdown was computed for.
    pub contract_type: ContractType,
    /// The admission date used.
    pub admission_date: NaiveDate,
    /// The termination date, or the reference date for open-ended estimates.
    pub end_date: NaiveDate,
    /// Whole calendar months between admission and end date.
    pub months_worked: u32,
    /// Vacation accrued in the current anniversary period.
    pub proportional_vacation: Decimal,
    /// Statutory one-third bonus on the proportional vacation.
    pub vacation_bonus: Decimal,
    /// Year-end bonus accrued in the calendar year of the end date.
    pub proportional_13th: Decimal,
    /// Number of notice days paid in lieu of notice.
    pub notice_days: u32,
    /// Pay in lieu of notice.
    pub notice_pay: Decimal,
    /// Accumulated FGTS deposits.
    pub severance_fund: Decimal,
    /// 40% FGTS penalty on termination without cause.
    pub severance_fund_penalty: Decimal,
    /// Sum of all components, formatted with two fraction digits.
    pub total_estimated: String,
    /// How each component was derived.
    pub audit_trace: AuditTrace,
}

impl SeveranceBreakdown {
    /// Returns the sum of every monetary component.
    ///
    /// This is the numeric value behind `total_estimated`.
    pub fn total(&self) -> Decimal {
        self.proportional_vacation
            + self.vacation_bonus
            + self.proportional_13th
            + self.notice_pay
            + self.severance_fund
            + self.severance_fund_penalty
    }
}

/// The "likely realized" band around a severance total.
///
/// This is a negotiation and forecasting aid with no legal meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictedBand {
    /// Lower edge of the band.
    pub low: Decimal,
    /// Single point estimate shown by default.
    pub point: Decimal,
    /// Upper edge of the band.
    pub high: Decimal,
}
