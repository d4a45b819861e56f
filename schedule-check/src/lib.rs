//! Schedule checker.
//!
//! Lints schedule files against the route database: every entry must have
//! a plan, and every phase that names a route must name one that exists.

pub mod check;
pub mod config;
pub mod discover;
pub mod report;
pub mod routes;
pub mod schedule;
