//! Labor Pricing Engine for government contracting
//!
//! This crate derives government-compliant burdened rates, company-internal
//! minimum viable rates, multi-year escalation projections, and rate-ceiling
//! validation for priced labor categories.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod settings;
pub mod validation;
