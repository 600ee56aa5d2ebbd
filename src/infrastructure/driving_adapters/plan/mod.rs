//! Plan Module
//!
//! Dry-run planning of a topology: request DTOs, the report, and the handler
//! tying them to the build use case.

pub mod dto;
pub mod handler;

pub use dto::{PlanReportDto, TopologyRequestDto};
pub use handler::PlanHandler;
