//! Service period measurement.
//!
//! This module measures the span between two dates in whole calendar months
//! plus a trailing fraction of days, and applies the month-fraction rule used
//! by vacation and 13th salary accrual.

use chrono::{Datelike, Months, NaiveDate};

use crate::config::AccrualRules;
use crate::error::{EngineError, EngineResult};
use crate::models::AuditStep;

/// A span of service measured in calendar months.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServicePeriod {
    /// Whole calendar months in the span.
    pub whole_months: u32,
    /// Days left over after the last whole month.
    pub remainder_days: u32,
}

impl ServicePeriod {
    /// Measures the span from `start` to `end`.
    ///
    /// A whole month is counted each time `start` advanced by one calendar
    /// month (clamped to the end of shorter months) stays on or before `end`.
    ///
    /// # Errors
    ///
    /// Returns `InconsistentDates` if `end` precedes `start`.
    ///
    /// # Examples
    ///
    /// ```
    /// use severance_engine::calculation::ServicePeriod;
    /// use chrono::NaiveDate;
    ///
    /// let period = ServicePeriod::between(
    ///     NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
    ///     NaiveDate::from_ymd_opt(2024, 7, 20).unwrap(),
    /// ).unwrap();
    /// assert_eq!(period.whole_months, 18);
    /// assert_eq!(period.remainder_days, 19);
    /// ```
    pub fn between(start: NaiveDate, end: NaiveDate) -> EngineResult<Self> {
        if end < start {
            return Err(EngineError::InconsistentDates {
                admission_date: start,
                end_date: end,
            });
        }

        let span = (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32;
        let mut whole_months = span.max(0) as u32;
        let mut anchor = add_months(start, whole_months)?;
        if anchor > end {
            whole_months -= 1;
            anchor = add_months(start, whole_months)?;
        }

        let remainder_days = (end - anchor).num_days() as u32;

        Ok(Self {
            whole_months,
            remainder_days,
        })
    }

    /// Returns true if the span has no length at all.
    pub fn is_empty(&self) -> bool {
        self.whole_months == 0 && self.remainder_days == 0
    }

    /// Returns the number of complete years of service.
    pub fn complete_years(&self) -> u32 {
        self.whole_months / 12
    }

    /// Returns true if the trailing fraction counts as a full month.
    pub fn fraction_counts(&self, threshold_days: u32) -> bool {
        self.remainder_days >= threshold_days
    }

    /// Whole months plus one for a qualifying trailing fraction.
    pub fn accrual_months(&self, threshold_days: u32) -> u32 {
        self.whole_months + u32::from(self.fraction_counts(threshold_days))
    }
}

fn add_months(date: NaiveDate, months: u32) -> EngineResult<NaiveDate> {
    date.checked_add_months(Months::new(months))
        .ok_or_else(|| EngineError::CalculationError {
            message: format!("date out of range adding {} months to {}", months, date),
        })
}

/// The result of measuring the service span, including the audit step.
#[derive(Debug, Clone)]
pub struct ServicePeriodResult {
    /// The measured span.
    pub period: ServicePeriod,
    /// The audit step recording this measurement.
    pub audit_step: AuditStep,
}

/// Measures the service span and records how it was counted.
pub fn measure_service_period(
    admission_date: NaiveDate,
    end_date: NaiveDate,
    rules: &AccrualRules,
    step_number: u32,
) -> EngineResult<ServicePeriodResult> {
    let period = ServicePeriod::between(admission_date, end_date)?;
    let threshold = rules.month_fraction_threshold_days;

    let audit_step = AuditStep {
        step_number,
        rule_id: "service_period".to_string(),
        rule_name: "Service Period".to_string(),
        clause_ref: rules.vacation_clause.clone(),
        input: serde_json::json!({
            "admission_date": admission_date.to_string(),
            "end_date": end_date.to_string(),
            "month_fraction_threshold_days": threshold
        }),
        output: serde_json::json!({
            "months_worked": period.whole_months,
            "remainder_days": period.remainder_days,
            "complete_years": period.complete_years(),
            "fraction_counts": period.fraction_counts(threshold)
        }),
        reasoning: format!(
            "{} to {}: {} whole months and {} days ({} counts as a month at {}+ days)",
            admission_date,
            end_date,
            period.whole_months,
            period.remainder_days,
            if period.fraction_counts(threshold) {
                "fraction"
            } else {
                "no fraction"
            },
            threshold
        ),
    };

    Ok(ServicePeriodResult { period, audit_step })
}
