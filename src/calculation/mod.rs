//! Calculation logic for the severance engine.
//!
//! This module contains the service period measurement, the individual
//! severance components (proportional vacation and its bonus, proportional
//! 13th salary, notice pay, FGTS balance and penalty), the breakdown that
//! sums them, the predicted-value heuristic and the company rollup.

mod notice_pay;
mod predicted_value;
mod rollup;
mod rounding;
mod service_period;
mod severance;
mod severance_fund;
mod thirteenth_salary;
mod vacation;

pub use notice_pay::{COMMERCIAL_MONTH_DAYS, NoticePayResult, calculate_notice_pay, notice_days};
pub use predicted_value::{
    predicted_band, predicted_band_with_rules, predicted_value, predicted_value_with_rules,
};
pub use rollup::{
    add_to_company_rollup, total_severance_for_company, total_severance_for_company_with_policy,
};
pub use rounding::{CURRENCY_SCALE, format_currency, round_currency};
pub use service_period::{ServicePeriod, ServicePeriodResult, measure_service_period};
pub use severance::{
    MAX_BASE_SALARY, NO_CAUSE_ASSUMED, OPEN_ENDED_ESTIMATE, ZERO_SALARY, calculate_severance,
    calculate_severance_with_policy,
};
pub use severance_fund::{SeveranceFundResult, calculate_severance_fund};
pub use thirteenth_salary::{ThirteenthSalaryResult, calculate_thirteenth_salary};
pub use vacation::{VacationResult, calculate_vacation};
