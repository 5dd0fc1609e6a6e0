//! InHand: take-home salary engine for the Indian new tax regime.
//!
//! This crate computes net take-home pay from five annual salary components
//! under a configurable progressive slab regime, and serves the result over
//! HTTP together with a text payslip, a take-home comparison and optional
//! advice from an external text-generation service.

#![warn(missing_docs)]

pub mod advisor;
pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
