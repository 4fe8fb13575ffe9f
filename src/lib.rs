//! Severance estimation engine for Brazilian employment contracts
//!
//! This crate estimates the termination cost ("rescisão") of an employment
//! record under CLT, PJ or PF contracts: proportional vacation and its
//! one-third bonus, proportional 13th salary, notice pay, the FGTS balance
//! and its termination penalty. It also derives a predicted realized value
//! and sums exposure across a company.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
