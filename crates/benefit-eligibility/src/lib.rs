//! Eligibility decision engine for the Old Age Security family of benefits.
//!
//! The [`eligibility`] module holds the engine itself; `config`, `error` and
//! `telemetry` carry the ambient concerns shared with the HTTP service.

pub mod config;
pub mod eligibility;
pub mod error;
pub mod telemetry;
