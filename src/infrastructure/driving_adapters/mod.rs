//! Driving Adapters
//!
//! Entry points that drive the application:
//! - Dry-run planning from configuration
//! - DTOs for requests and reports

pub mod plan;
