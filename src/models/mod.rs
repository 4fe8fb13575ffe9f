//! Core data models for the severance engine.
//!
//! This module contains the employment record the estimator reads and the
//! breakdown, band and rollup types it produces.

mod company_rollup;
mod employee;
mod severance_result;

pub use company_rollup::{CompanyRollup, ExcludedEmployee};
pub use employee::{Benefits, ContractType, EmploymentRecord};
pub use severance_result::{
    AuditStep, AuditTrace, AuditWarning, PredictedBand, SeveranceBreakdown,
};
