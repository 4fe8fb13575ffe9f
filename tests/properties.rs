//! Property tests for the severance calculation.

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use proptest::test_runner::Config;
use rust_decimal::Decimal;

use severance_engine::calculation::{
    MAX_BASE_SALARY, calculate_severance, format_currency, predicted_band, predicted_value,
    round_currency, total_severance_for_company,
};
use severance_engine::error::EngineError;
use severance_engine::models::{Benefits, ContractType, EmploymentRecord};

fn reference() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
}

fn contract_type() -> impl Strategy<Value = ContractType> {
    prop_oneof![
        Just(ContractType::Clt),
        Just(ContractType::Pj),
        Just(ContractType::Pf),
    ]
}

fn record(
    contract_type: ContractType,
    admission_offset: i64,
    span_days: i64,
    salary_cents: i64,
) -> EmploymentRecord {
    let admission = NaiveDate::from_ymd_opt(1990, 1, 1).unwrap() + Duration::days(admission_offset);
    EmploymentRecord {
        id: "emp_prop".to_string(),
        admission_date: Some(admission),
        termination_date: Some(admission + Duration::days(span_days)),
        contract_type,
        base_salary: Some(Decimal::new(salary_cents, 2)),
        benefits: Benefits::default(),
    }
}

proptest! {
    #![proptest_config(Config::with_cases(256))]

    #[test]
    fn total_is_sum_of_rounded_components(
        contract in contract_type(),
        offset in 0_i64..12_000,
        span in 0_i64..18_300,
        cents in 0_i64..=100_000_000,
    ) {
        let breakdown = calculate_severance(&record(contract, offset, span, cents), reference())
            .expect("valid record");

        let components = [
            breakdown.proportional_vacation,
            breakdown.vacation_bonus,
            breakdown.proportional_13th,
            breakdown.notice_pay,
            breakdown.severance_fund,
            breakdown.severance_fund_penalty,
        ];
        for amount in components {
            prop_assert!(amount >= Decimal::ZERO);
            prop_assert_eq!(amount, round_currency(amount));
        }
        let sum: Decimal = components.iter().sum();
        prop_assert_eq!(breakdown.total(), sum);
        prop_assert_eq!(breakdown.total_estimated, format_currency(sum));
    }

    #[test]
    fn vacation_bonus_is_a_third_of_vacation(
        contract in contract_type(),
        span in 0_i64..18_300,
        cents in 0_i64..=100_000_000,
    ) {
        let breakdown = calculate_severance(&record(contract, 0, span, cents), reference())
            .expect("valid record");

        prop_assert_eq!(
            breakdown.vacation_bonus,
            round_currency(breakdown.proportional_vacation / Decimal::from(3))
        );
    }

    #[test]
    fn non_statutory_contracts_carry_no_notice_or_fund(
        contract in prop_oneof![Just(ContractType::Pj), Just(ContractType::Pf)],
        span in 0_i64..18_300,
        cents in 0_i64..=100_000_000,
    ) {
        let breakdown = calculate_severance(&record(contract, 0, span, cents), reference())
            .expect("valid record");

        prop_assert_eq!(breakdown.notice_days, 0);
        prop_assert!(breakdown.notice_pay.is_zero());
        prop_assert!(breakdown.severance_fund.is_zero());
        prop_assert!(breakdown.severance_fund_penalty.is_zero());
    }

    #[test]
    fn clt_notice_days_stay_within_statutory_range(
        span in 1_i64..18_300,
        cents in 0_i64..=100_000_000,
    ) {
        let breakdown = calculate_severance(&record(ContractType::Clt, 0, span, cents), reference())
            .expect("valid record");

        prop_assert!((30..=90).contains(&breakdown.notice_days));
    }

    #[test]
    fn end_before_admission_is_rejected(
        contract in contract_type(),
        offset in 0_i64..12_000,
        back in 1_i64..5_000,
    ) {
        let result = calculate_severance(&record(contract, offset, -back, 300_000), reference());
        let is_inconsistent = matches!(result, Err(EngineError::InconsistentDates { .. }));
        prop_assert!(is_inconsistent);
    }

    #[test]
    fn predicted_value_is_bounded_and_monotonic(
        a in 0_i64..=1_000_000_000,
        b in 0_i64..=1_000_000_000,
    ) {
        let (low, high) = (Decimal::new(a.min(b), 2), Decimal::new(a.max(b), 2));

        let point = predicted_value(low);
        prop_assert!(point >= Decimal::ZERO);
        prop_assert!(point <= low);
        prop_assert!(predicted_value(low) <= predicted_value(high));

        let band = predicted_band(high);
        prop_assert!(band.low <= band.point);
        prop_assert!(band.point <= band.high);
        prop_assert!(band.high <= high);
    }

    #[test]
    fn rollup_total_matches_individual_totals(
        rows in prop::collection::vec(
            (contract_type(), 0_i64..12_000, 0_i64..18_300, -1_000_i64..=10_000_000),
            0..20,
        ),
    ) {
        let employees: Vec<EmploymentRecord> = rows
            .iter()
            .map(|&(contract, offset, span, cents)| record(contract, offset, span, cents))
            .collect();

        let rollup = total_severance_for_company(&employees, reference());

        let mut expected = Decimal::ZERO;
        let mut failures = 0;
        for employee in &employees {
            match calculate_severance(employee, reference()) {
                Ok(breakdown) => expected += breakdown.total(),
                Err(_) => failures += 1,
            }
        }
        prop_assert_eq!(rollup.total_severance, expected);
        prop_assert_eq!(rollup.excluded_count(), failures);
        prop_assert_eq!(rollup.employees_included + failures, employees.len());
    }

    #[test]
    fn any_representable_salary_is_answered_without_panicking(
        contract in contract_type(),
        span in 0_i64..18_300,
        mantissa in 0_i128..=79_228_162_514_264_337_593_543_950_335_i128,
        scale in 0_u32..=4,
    ) {
        let salary = Decimal::from_i128_with_scale(mantissa, scale);
        let mut employee = record(contract, 0, span, 0);
        employee.base_salary = Some(salary);

        let result = calculate_severance(&employee, reference());

        if salary <= Decimal::from(MAX_BASE_SALARY) {
            prop_assert!(result.is_ok());
        } else {
            let is_invalid = matches!(result, Err(EngineError::InvalidEmployee { .. }));
            prop_assert!(is_invalid);
        }
    }

    #[test]
    fn rollup_excludes_oversized_salaries(
        huge in (MAX_BASE_SALARY as i128 + 1)..=79_228_162_514_264_337_593_543_950_335_i128,
    ) {
        let mut oversized = record(ContractType::Clt, 0, 548, 0);
        oversized.base_salary = Some(Decimal::from_i128_with_scale(huge, 0));
        let employees = vec![record(ContractType::Clt, 0, 548, 300_000), oversized];

        let rollup = total_severance_for_company(&employees, reference());

        prop_assert_eq!(rollup.employees_included, 1);
        prop_assert_eq!(rollup.excluded_count(), 1);
        prop_assert_eq!(rollup.excluded[0].code.as_str(), "INVALID_EMPLOYEE");
    }
}
