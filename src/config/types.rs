//! Configuration types for severance estimation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// Metadata about the jurisdiction whose rules are loaded.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct JurisdictionMetadata {
    /// Short code of the rule set (e.g., "CLT").
    pub code: String,
    /// The human-readable name of the rule set.
    pub name: String,
    /// The version or effective date of the rules.
    pub version: String,
    /// URL to the official legislation.
    pub source_url: String,
}

impl Default for JurisdictionMetadata {
    fn default() -> Self {
        Self {
            code: "CLT".to_string(),
            name: "Consolidação das Leis do Trabalho".to_string(),
            version: "2024-01-01".to_string(),
            source_url: "https://www.planalto.gov.br/ccivil_03/decreto-lei/del5452.htm"
                .to_string(),
        }
    }
}

/// FGTS deposit and penalty rates.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeveranceFundRules {
    /// Reference to the statute defining the monthly deposit.
    pub clause: String,
    /// Share of the monthly salary deposited (e.g., 0.08).
    pub monthly_rate: Decimal,
    /// Reference to the statute defining the penalty.
    pub penalty_clause: String,
    /// Penalty share of the fund balance on no-cause termination (e.g., 0.40).
    pub penalty_rate: Decimal,
}

impl Default for SeveranceFundRules {
    fn default() -> Self {
        Self {
            clause: "Lei 8.036/1990, art. 15".to_string(),
            monthly_rate: Decimal::new(8, 2),
            penalty_clause: "Lei 8.036/1990, art. 18, §1º".to_string(),
            penalty_rate: Decimal::new(40, 2),
        }
    }
}

/// Notice-pay scaling.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NoticeRules {
    /// Reference to the statute defining proportional notice.
    pub clause: String,
    /// Notice days granted to every CLT employee.
    pub base_days: u32,
    /// Extra notice days per complete year of service.
    pub days_per_year: u32,
    /// Cap on the extra days.
    pub max_extra_days: u32,
}

impl Default for NoticeRules {
    fn default() -> Self {
        Self {
            clause: "Lei 12.506/2011, art. 1º".to_string(),
            base_days: 30,
            days_per_year: 3,
            max_extra_days: 60,
        }
    }
}

/// Month-counting rules for vacation and 13th salary accrual.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AccrualRules {
    /// Reference to the statute defining proportional vacation.
    pub vacation_clause: String,
    /// Reference to the statute defining the one-third vacation bonus.
    pub vacation_bonus_clause: String,
    /// Reference to the statute defining the 13th salary.
    pub thirteenth_clause: String,
    /// Days in a trailing partial month that make it count as a full month.
    pub month_fraction_threshold_days: u32,
}

impl Default for AccrualRules {
    fn default() -> Self {
        Self {
            vacation_clause: "CLT art. 146, parágrafo único".to_string(),
            vacation_bonus_clause: "CF art. 7º, XVII".to_string(),
            thirteenth_clause: "Lei 4.090/1962, art. 1º, §2º".to_string(),
            month_fraction_threshold_days: 15,
        }
    }
}

/// The band used by the predicted-value heuristic.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PredictedValueRules {
    /// Lower share of the total (e.g., 0.40).
    pub low: Decimal,
    /// Upper share of the total (e.g., 0.70).
    pub high: Decimal,
}

impl Default for PredictedValueRules {
    fn default() -> Self {
        Self {
            low: Decimal::new(40, 2),
            high: Decimal::new(70, 2),
        }
    }
}

impl PredictedValueRules {
    /// Returns the share used for the single point estimate.
    pub fn midpoint(&self) -> Decimal {
        (self.low + self.high) / Decimal::TWO
    }
}

/// Statutory parameters from rules.yaml.
///
/// `SeverancePolicy::default()` carries the same values as `config/clt`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SeverancePolicy {
    /// FGTS rates.
    pub severance_fund: SeveranceFundRules,
    /// Notice-pay scaling.
    pub notice: NoticeRules,
    /// Month-counting rules.
    pub accrual: AccrualRules,
    /// Predicted-value band.
    pub predicted_value: PredictedValueRules,
}

impl SeverancePolicy {
    /// Checks that every rate and day count is within a meaningful range.
    ///
    /// # Example
    ///
    /// ```
    /// use severance_engine::config::SeverancePolicy;
    ///
    /// assert!(SeverancePolicy::default().validate().is_ok());
    /// ```
    pub fn validate(&self) -> EngineResult<()> {
        check_share("severance_fund.monthly_rate", self.severance_fund.monthly_rate)?;
        check_share("severance_fund.penalty_rate", self.severance_fund.penalty_rate)?;
        check_share("predicted_value.low", self.predicted_value.low)?;
        check_share("predicted_value.high", self.predicted_value.high)?;

        if self.predicted_value.low > self.predicted_value.high {
            return Err(EngineError::InvalidPolicy {
                field: "predicted_value".to_string(),
                message: format!(
                    "low ({}) must not exceed high ({})",
                    self.predicted_value.low, self.predicted_value.high
                ),
            });
        }

        let threshold = self.accrual.month_fraction_threshold_days;
        if !(1..=31).contains(&threshold) {
            return Err(EngineError::InvalidPolicy {
                field: "accrual.month_fraction_threshold_days".to_string(),
                message: format!("must be between 1 and 31, got {}", threshold),
            });
        }

        Ok(())
    }
}

fn check_share(field: &str, value: Decimal) -> EngineResult<()> {
    if value < Decimal::ZERO || value > Decimal::ONE {
        return Err(EngineError::InvalidPolicy {
            field: field.to_string(),
            message: format!("must be between 0 and 1, got {}", value),
        });
    }
    Ok(())
}

/// The complete configuration loaded from a jurisdiction directory.
#[derive(Debug, Clone, Default)]
pub struct SeveranceConfig {
    metadata: JurisdictionMetadata,
    policy: SeverancePolicy,
}

impl SeveranceConfig {
    /// Creates a new SeveranceConfig from its component parts.
    pub fn new(metadata: JurisdictionMetadata, policy: SeverancePolicy) -> Self {
        Self { metadata, policy }
    }

    /// Returns the jurisdiction metadata.
    pub fn jurisdiction(&self) -> &JurisdictionMetadata {
        &self.metadata
    }

    /// Returns the statutory parameters.
    pub fn policy(&self) -> &SeverancePolicy {
        &self.policy
    }
}
