//! Employment record model and related types.
//!
//! This module defines the [`EmploymentRecord`] struct and [`ContractType`] enum
//! describing the contract data the severance estimator reads.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// The kind of engagement between the company and the worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ContractType {
    /// Formal salaried employment with full statutory severance entitlements.
    Clt,
    /// Contractor engaged through a legal entity.
    Pj,
    /// Informal engagement of an individual.
    Pf,
}

impl ContractType {
    /// Returns the wire representation of the contract type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContractType::Clt => "CLT",
            ContractType::Pj => "PJ",
            ContractType::Pf => "PF",
        }
    }

    /// Returns true for contracts carrying notice pay and the severance fund.
    ///
    /// # Examples
    ///
    /// ```
    /// use severance_engine::models::ContractType;
    ///
    /// assert!(ContractType::Clt.is_statutory());
    /// assert!(!ContractType::Pj.is_statutory());
    /// ```
    pub fn is_statutory(&self) -> bool {
        *self == ContractType::Clt
    }
}

impl FromStr for ContractType {
    type Err = EngineError;

    /// Parses a contract type as stored, ignoring case and surrounding blanks.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "CLT" => Ok(ContractType::Clt),
            "PJ" => Ok(ContractType::Pj),
            "PF" => Ok(ContractType::Pf),
            _ => Err(EngineError::invalid_employee(
                "contract_type",
                format!("unknown contract type '{}'", s),
            )),
        }
    }
}

/// Benefit amounts attached to an employee, kept for display only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Benefits {
    /// Monthly meal voucher amount.
    #[serde(default)]
    pub meal_voucher: Option<Decimal>,
    /// Monthly transport voucher amount.
    #[serde(default)]
    pub transport_voucher: Option<Decimal>,
}

/// Represents the contract data of one employee.
///
/// Fields the record store may leave empty are optional here; the estimator
/// rejects records missing the admission date or base salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmploymentRecord {
    /// Identifier of the employee in the record store.
    pub id: String,
    /// The date the contract started.
    #[serde(default)]
    pub admission_date: Option<NaiveDate>,
    /// The date the contract ended, if it has.
    #[serde(default)]
    pub termination_date: Option<NaiveDate>,
    /// The kind of engagement.
    pub contract_type: ContractType,
    /// Monthly base salary.
    #[serde(default)]
    pub base_salary: Option<Decimal>,
    /// Benefits attached to the contract.
    #[serde(default)]
    pub benefits: Benefits,
}

impl EmploymentRecord {
    /// Returns the date that closes the service span.
    ///
    /// The termination date wins when present; otherwise `reference_date`
    /// stands in for an open-ended estimate.
    ///
    /// # Examples
    ///
    /// ```
    /// use severance_engine::models::{ContractType, EmploymentRecord};
    /// use chrono::NaiveDate;
    ///
    /// let record = EmploymentRecord {
    ///     id: "emp_001".to_string(),
    ///     admission_date: NaiveDate::from_ymd_opt(2023, 1, 1),
    ///     termination_date: None,
    ///     contract_type: ContractType::Clt,
    ///     base_salary: None,
    ///     benefits: Default::default(),
    /// };
    /// let today = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
    /// assert_eq!(record.end_date(today), today);
    /// ```
    pub fn end_date(&self, reference_date: NaiveDate) -> NaiveDate {
        self.termination_date.unwrap_or(reference_date)
    }

    /// Returns true if no termination date is recorded.
    pub fn is_open_ended(&self) -> bool {
        self.termination_date.is_none()
    }
}
