//! Company-wide severance rollup.
//!
//! Applies the severance calculation and the predicted-value heuristic to
//! every employee and sums the results. A failing employee is excluded and
//! reported; it never fails the rollup.

use chrono::NaiveDate;

use super::predicted_value::predicted_value_with_rules;
use super::severance::calculate_severance_with_policy;
use crate::config::SeverancePolicy;
use crate::models::{CompanyRollup, EmploymentRecord};

/// Sums severance exposure across employees under the default policy.
///
/// # Examples
///
/// ```
/// use severance_engine::calculation::total_severance_for_company;
/// use severance_engine::models::{ContractType, EmploymentRecord};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let employees = vec![
///     EmploymentRecord {
///         id: "emp_001".to_string(),
///         admission_date: NaiveDate::from_ymd_opt(2023, 1, 1),
///         termination_date: NaiveDate::from_ymd_opt(2024, 7, 1),
///         contract_type: ContractType::Clt,
///         base_salary: Some(Decimal::new(300000, 2)),
///         benefits: Default::default(),
///     },
///     EmploymentRecord {
///         id: "emp_002".to_string(),
///         admission_date: None,
///         termination_date: None,
///         contract_type: ContractType::Pj,
///         base_salary: Some(Decimal::new(500000, 2)),
///         benefits: Default::default(),
///     },
/// ];
///
/// let rollup = total_severance_for_company(&employees, NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
/// assert_eq!(rollup.employees_included, 1);
/// assert_eq!(rollup.excluded_count(), 1);
/// assert_eq!(rollup.excluded[0].employee_id, "emp_002");
/// ```
pub fn total_severance_for_company(
    employees: &[EmploymentRecord],
    reference_date: NaiveDate,
) -> CompanyRollup {
    total_severance_for_company_with_policy(employees, reference_date, &SeverancePolicy::default())
}

/// Sums severance exposure across employees under an explicit policy.
pub fn total_severance_for_company_with_policy(
    employees: &[EmploymentRecord],
    reference_date: NaiveDate,
    policy: &SeverancePolicy,
) -> CompanyRollup {
    employees
        .iter()
        .fold(CompanyRollup::default(), |mut rollup, employee| {
            add_to_company_rollup(&mut rollup, employee, reference_date, policy);
            rollup
        })
}

/// Calculates one employee and folds the result into `rollup`.
///
/// A failed calculation, or totals that would overflow, become an exclusion
/// for that employee.
pub fn add_to_company_rollup(
    rollup: &mut CompanyRollup,
    employee: &EmploymentRecord,
    reference_date: NaiveDate,
    policy: &SeverancePolicy,
) {
    let included = calculate_severance_with_policy(employee, reference_date, policy)
        .and_then(|breakdown| {
            let total = breakdown.total();
            let predicted = predicted_value_with_rules(total, &policy.predicted_value);
            rollup.include(total, predicted)
        });

    if let Err(error) = included {
        rollup.exclude(employee.id.clone(), &error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::calculate_severance;
    use crate::models::{Benefits, ContractType};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn reference() -> NaiveDate {
        date(2025, 1, 1)
    }

    fn record(id: &str, contract_type: ContractType, salary: &str) -> EmploymentRecord {
        EmploymentRecord {
            id: id.to_string(),
            admission_date: Some(date(2023, 1, 1)),
            termination_date: Some(date(2024, 7, 1)),
            contract_type,
            base_salary: Some(dec(salary)),
            benefits: Benefits::default(),
        }
    }

    /// RU-001: one invalid employee out of five is excluded
    #[test]
    fn test_one_invalid_employee_is_excluded() {
        let employees = vec![
            record("emp_001", ContractType::Clt, "3000.00"),
            record("emp_002", ContractType::Pj, "3000.00"),
            record("emp_003", ContractType::Clt, "-10.00"),
            record("emp_004", ContractType::Pf, "3000.00"),
            record("emp_005", ContractType::Clt, "3000.00"),
        ];

        let rollup = total_severance_for_company(&employees, reference());

        // CLT 12848.00 x 2 + PJ 3500.00 + PF 3500.00
        assert_eq!(rollup.employees_included, 4);
        assert_eq!(rollup.excluded_count(), 1);
        assert_eq!(rollup.excluded[0].employee_id, "emp_003");
        assert_eq!(rollup.excluded[0].code, "INVALID_EMPLOYEE");
        assert_eq!(rollup.total_severance, dec("32696.00"));
        // 7066.40 x 2 + 1925.00 x 2
        assert_eq!(rollup.total_predicted, dec("17982.80"));
    }

    /// RU-002: empty input yields an empty, complete rollup
    #[test]
    fn test_empty_input() {
        let rollup = total_severance_for_company(&[], reference());

        assert_eq!(rollup.total_severance, Decimal::ZERO);
        assert_eq!(rollup.total_predicted, Decimal::ZERO);
        assert_eq!(rollup.employees_included, 0);
        assert!(rollup.is_complete());
    }

    /// RU-003: every employee failing still returns a rollup
    #[test]
    fn test_all_failing_still_returns() {
        let mut bad = record("emp_001", ContractType::Clt, "3000.00");
        bad.termination_date = Some(date(2022, 1, 1));
        let mut missing = record("emp_002", ContractType::Clt, "3000.00");
        missing.base_salary = None;

        let rollup = total_severance_for_company(&[bad, missing], reference());

        assert_eq!(rollup.employees_included, 0);
        assert_eq!(rollup.excluded_count(), 2);
        assert_eq!(rollup.excluded[0].code, "INCONSISTENT_DATES");
        assert_eq!(rollup.excluded[1].code, "INVALID_EMPLOYEE");
    }

    #[test]
    fn test_totals_match_individual_calculations() {
        let employees = vec![
            record("emp_001", ContractType::Clt, "4123.45"),
            record("emp_002", ContractType::Pf, "1999.99"),
        ];

        let rollup = total_severance_for_company(&employees, reference());
        let expected: Decimal = employees
            .iter()
            .map(|e| calculate_severance(e, reference()).unwrap().total())
            .sum();

        assert_eq!(rollup.total_severance, expected);
    }

    /// RU-004: exclusions keep input order
    #[test]
    fn test_exclusions_keep_input_order() {
        let mut late = record("emp_001", ContractType::Clt, "3000.00");
        late.termination_date = Some(date(2022, 1, 1));
        let employees = vec![
            late,
            record("emp_002", ContractType::Pj, "3000.00"),
            record("emp_003", ContractType::Clt, "-1.00"),
        ];

        let rollup = total_severance_for_company(&employees, reference());

        let ids: Vec<&str> = rollup
            .excluded
            .iter()
            .map(|e| e.employee_id.as_str())
            .collect();
        assert_eq!(ids, vec!["emp_001", "emp_003"]);
        assert_eq!(rollup.employees_included, 1);
    }

    /// RU-005: an oversized salary is excluded, the rest still sum
    #[test]
    fn test_oversized_salary_is_excluded() {
        let mut huge = record("emp_002", ContractType::Clt, "3000.00");
        huge.base_salary = Some(Decimal::MAX);
        let employees = vec![record("emp_001", ContractType::Clt, "3000.00"), huge];

        let rollup = total_severance_for_company(&employees, reference());

        assert_eq!(rollup.employees_included, 1);
        assert_eq!(rollup.total_severance, dec("12848.00"));
        assert_eq!(rollup.excluded[0].employee_id, "emp_002");
        assert_eq!(rollup.excluded[0].code, "INVALID_EMPLOYEE");
    }
}
