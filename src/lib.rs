//! Decision Matrix - Classical decision criteria over payoff matrices
//!
//! Evaluates a table of alternatives by states of nature under uncertainty
//! (optimism, pessimism, Laplace, Hurwicz, Savage) and under risk
//! (expected value, maximum likelihood, expected opportunity loss, value
//! of perfect information).

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
