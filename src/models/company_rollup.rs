//! Company-wide severance rollup model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// An employee left out of a rollup because their calculation failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExcludedEmployee {
    /// Identifier of the excluded employee.
    pub employee_id: String,
    /// Machine-readable error code.
    pub code: String,
    /// The error message that would be shown for this employee alone.
    pub reason: String,
}

/// Summed severance exposure across a set of employees.
///
/// Employees whose calculation fails are listed in `excluded` instead of
/// failing the whole rollup, so a caller can flag incomplete data.
///
/// # Example
///
/// ```
/// use severance_engine::models::CompanyRollup;
///
/// let rollup = CompanyRollup::default();
/// assert!(rollup.is_complete());
/// assert_eq!(rollup.excluded_count(), 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRollup {
    /// Sum of `total_estimated` over included employees.
    pub total_severance: Decimal,
    /// Sum of the per-employee predicted values.
    pub total_predicted: Decimal,
    /// Number of employees whose figures are in the totals.
    pub employees_included: usize,
    /// Employees left out of the totals.
    pub excluded: Vec<ExcludedEmployee>,
}

impl CompanyRollup {
    /// Adds one successful employee result to the totals.
    ///
    /// # Errors
    ///
    /// Returns `CalculationError` and leaves the totals untouched if either
    /// sum would overflow.
    pub fn include(&mut self, total: Decimal, predicted: Decimal) -> EngineResult<()> {
        let overflow = || EngineError::CalculationError {
            message: "company totals overflowed".to_string(),
        };
        let total_severance = self.total_severance.checked_add(total).ok_or_else(overflow)?;
        let total_predicted = self
            .total_predicted
            .checked_add(predicted)
            .ok_or_else(overflow)?;

        self.total_severance = total_severance;
        self.total_predicted = total_predicted;
        self.employees_included += 1;
        Ok(())
    }

    /// Records an employee whose figures could not be computed.
    pub fn exclude(&mut self, employee_id: impl Into<String>, error: &EngineError) {
        self.excluded.push(ExcludedEmployee {
            employee_id: employee_id.into(),
            code: error.code().to_string(),
            reason: error.to_string(),
        });
    }

    /// Returns the number of excluded employees.
    pub fn excluded_count(&self) -> usize {
        self.excluded.len()
    }

    /// Returns true if no employee was excluded.
    pub fn is_complete(&self) -> bool {
        self.excluded.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_include_accumulates_totals() {
        let mut rollup = CompanyRollup::default();
        rollup.include(Decimal::new(100000, 2), Decimal::new(55000, 2)).unwrap();
        rollup.include(Decimal::new(50050, 2), Decimal::new(27528, 2)).unwrap();

        assert_eq!(rollup.total_severance, Decimal::new(150050, 2));
        assert_eq!(rollup.total_predicted, Decimal::new(82528, 2));
        assert_eq!(rollup.employees_included, 2);
        assert!(rollup.is_complete());
    }

    #[test]
    fn test_exclude_records_code_and_reason() {
        let mut rollup = CompanyRollup::default();
        let error = EngineError::invalid_employee("base_salary", "must not be negative");
        rollup.exclude("emp_404", &error);

        assert_eq!(rollup.excluded_count(), 1);
        assert!(!rollup.is_complete());
        assert_eq!(rollup.excluded[0].employee_id, "emp_404");
        assert_eq!(rollup.excluded[0].code, "INVALID_EMPLOYEE");
        assert!(rollup.excluded[0].reason.contains("base_salary"));
    }

    #[test]
    fn test_include_overflow_leaves_totals_untouched() {
        let mut rollup = CompanyRollup::default();
        rollup.include(Decimal::MAX, Decimal::ONE).unwrap();

        let result = rollup.include(Decimal::ONE, Decimal::ONE);

        assert!(matches!(result, Err(EngineError::CalculationError { .. })));
        assert_eq!(rollup.total_severance, Decimal::MAX);
        assert_eq!(rollup.total_predicted, Decimal::ONE);
        assert_eq!(rollup.employees_included, 1);
    }
}
