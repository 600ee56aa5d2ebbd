//! Shared Module
//!
//! The error taxonomy shared by every layer, from provisioner failures up to
//! process exit codes.

pub mod errors;

pub use errors::{AppError, ProvisionerError, ResourceCreationError, UseCaseError, ValidationError};
