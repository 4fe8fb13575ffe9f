//! Request types for the severance engine API.
//!
//! Employee rows arrive the way the record store keeps them: dates as text,
//! salaries as either JSON numbers or numeric strings and contract types as
//! free text. This module parses them into [`EmploymentRecord`] values.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{EngineError, EngineResult};
use crate::models::{Benefits, ContractType, EmploymentRecord};

/// Request body for the `/severance` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeveranceRequest {
    /// The employee to estimate.
    pub employee: EmployeeRequest,
    /// Date closing open-ended contracts; today (UTC) when omitted.
    #[serde(default)]
    pub reference_date: Option<NaiveDate>,
}

/// Request body for the `/severance/company` endpoint.
///
/// Rows are kept as raw JSON so that one malformed row is excluded from the
/// rollup instead of rejecting the whole request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanySeveranceRequest {
    /// Every employee of the company, one JSON object per row.
    pub employees: Vec<Value>,
    /// Date closing open-ended contracts; today (UTC) when omitted.
    #[serde(default)]
    pub reference_date: Option<NaiveDate>,
}

/// One company row after parsing.
#[derive(Debug)]
pub struct EmployeeRow {
    /// Identifier to report the row under.
    pub employee_id: String,
    /// The parsed record, or why the row could not be parsed.
    pub record: EngineResult<EmploymentRecord>,
}

impl CompanySeveranceRequest {
    /// Parses every row in input order.
    ///
    /// Rows without a usable `id` are reported as `employees[<index>]`.
    pub fn into_rows(self) -> Vec<EmployeeRow> {
        self.employees
            .into_iter()
            .enumerate()
            .map(|(index, row)| EmployeeRow {
                employee_id: row_id(index, &row),
                record: parse_row(row),
            })
            .collect()
    }
}

fn row_id(index: usize, row: &Value) -> String {
    match row.get("id") {
        Some(Value::String(id)) if !id.trim().is_empty() => id.clone(),
        Some(Value::Number(id)) => id.to_string(),
        _ => format!("employees[{}]", index),
    }
}

fn parse_row(row: Value) -> EngineResult<EmploymentRecord> {
    let request: EmployeeRequest = serde_json::from_value(row)
        .map_err(|e| EngineError::invalid_employee("employee", e.to_string()))?;
    request.try_into()
}

/// Employee information as supplied by the record store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Identifier of the employee.
    pub id: String,
    /// Admission date as `YYYY-MM-DD` or an RFC 3339 timestamp.
    #[serde(default)]
    pub admission_date: Option<Value>,
    /// Termination date as `YYYY-MM-DD` or an RFC 3339 timestamp.
    #[serde(default)]
    pub termination_date: Option<Value>,
    /// The kind of engagement: `CLT`, `PJ` or `PF`.
    pub contract_type: String,
    /// Monthly base salary as a JSON number or numeric string.
    #[serde(default)]
    pub base_salary: Option<Value>,
    /// Benefits attached to the contract.
    #[serde(default)]
    pub benefits: Benefits,
}

impl TryFrom<EmployeeRequest> for EmploymentRecord {
    type Error = EngineError;

    fn try_from(req: EmployeeRequest) -> Result<Self, Self::Error> {
        Ok(EmploymentRecord {
            admission_date: parse_date("admission_date", req.admission_date.as_ref())?,
            termination_date: parse_date("termination_date", req.termination_date.as_ref())?,
            contract_type: ContractType::from_str(&req.contract_type)?,
            base_salary: parse_salary(req.base_salary.as_ref())?,
            id: req.id,
            benefits: req.benefits,
        })
    }
}

/// Parses a stored date; `null` and blank text count as absent.
fn parse_date(field: &str, value: Option<&Value>) -> EngineResult<Option<NaiveDate>> {
    let text = match value {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::String(s)) => s.trim(),
        Some(other) => {
            return Err(EngineError::invalid_employee(
                field,
                format!("unparseable date {}", other),
            ));
        }
    };
    if text.is_empty() {
        return Ok(None);
    }

    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Ok(Some(date));
    }
    DateTime::parse_from_rfc3339(text)
        .map(|dt| Some(dt.date_naive()))
        .map_err(|_| EngineError::invalid_employee(field, format!("unparseable date '{}'", text)))
}

/// Parses a stored salary; `null` counts as absent.
fn parse_salary(value: Option<&Value>) -> EngineResult<Option<Decimal>> {
    let not_numeric = |shown: &str| {
        EngineError::invalid_employee("base_salary", format!("must be numeric, got {}", shown))
    };

    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => {
            let text = n.to_string();
            Decimal::from_str(&text)
                .or_else(|_| Decimal::from_scientific(&text))
                .map(Some)
                .map_err(|_| not_numeric(&text))
        }
        Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
        Some(Value::String(s)) => Decimal::from_str(s.trim())
            .map(Some)
            .map_err(|_| not_numeric(&format!("'{}'", s))),
        Some(other) => Err(not_numeric(&other.to_string())),
    }
}
