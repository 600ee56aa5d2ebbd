//! Error Types
//!
//! Layered error types: provisioner failures, domain validation failures,
//! use case failures, and the application-level error surfaced by the binary.

use thiserror::Error;

use crate::domain::models::resource::{ResourceId, ResourceKind};

/// Pre-flight contract violations of a topology request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error(
        "not enough availability zones provided: {requested} subnets requested but only {available} zones available"
    )]
    InsufficientAvailabilityZones { requested: usize, available: usize },
}

/// Provisioner-level errors for resource creation failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProvisionerError {
    #[error("provider rejected {kind} '{name}': {reason}")]
    Rejected {
        kind: ResourceKind,
        name: String,
        reason: String,
    },

    #[error("{kind} '{name}' already exists")]
    Duplicate { kind: ResourceKind, name: String },

    #[error("{kind} '{name}' references unknown resource '{reference}'")]
    UnknownReference {
        kind: ResourceKind,
        name: String,
        reference: ResourceId,
    },
}

/// A provisioner failure annotated with the build step it happened in
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{context}: failed to create {kind} '{name}': {source}")]
pub struct ResourceCreationError {
    pub context: &'static str,
    pub kind: ResourceKind,
    pub name: String,
    #[source]
    pub source: ProvisionerError,
}

impl ResourceCreationError {
    /// Wrap a provisioner error with its step context
    #[must_use]
    pub fn new(context: &'static str, kind: ResourceKind, name: impl Into<String>, source: ProvisionerError) -> Self {
        Self {
            context,
            kind,
            name: name.into(),
            source,
        }
    }
}

/// Use case-level errors for topology construction failures
#[derive(Debug, Error)]
pub enum UseCaseError {
    #[error("while validating input: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    ResourceCreation(#[from] ResourceCreationError),
}

impl UseCaseError {
    /// Get the error code for this error
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(ValidationError::InsufficientAvailabilityZones { .. }) => "INSUFFICIENT_AVAILABILITY_ZONES",
            Self::ResourceCreation(err) => match err.source {
                ProvisionerError::Rejected { .. } => "RESOURCE_REJECTED",
                ProvisionerError::Duplicate { .. } => "RESOURCE_DUPLICATE",
                ProvisionerError::UnknownReference { .. } => "UNKNOWN_REFERENCE",
            },
        }
    }

    /// The step context of a resource creation failure, if any
    #[must_use]
    pub fn context(&self) -> Option<&'static str> {
        match self {
            Self::Validation(_) => None,
            Self::ResourceCreation(err) => Some(err.context),
        }
    }
}

/// Application-level errors surfaced by the driving adapters
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    UseCase(#[from] UseCaseError),

    #[error("Invalid request: {0:?}")]
    InvalidRequest(Vec<String>),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Get the error code for this error
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UseCase(err) => err.error_code(),
            Self::InvalidRequest(_) => "INVALID_REQUEST",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get the process exit code for this error
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::InvalidRequest(_) | Self::UseCase(UseCaseError::Validation(_)) => 2,
            Self::Config(_) => 3,
            Self::UseCase(UseCaseError::ResourceCreation(_)) => 4,
            Self::Internal(_) => 1,
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = err
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| {
                    format!(
                        "{}: {}",
                        field,
                        e.message.as_ref().map_or("invalid", |m| m.as_ref())
                    )
                })
            })
            .collect();
        messages.sort();
        AppError::InvalidRequest(messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rejected() -> ProvisionerError {
        ProvisionerError::Rejected {
            kind: ResourceKind::Subnet,
            name: "demo-public-subnet-1".to_string(),
            reason: "InvalidSubnet.Conflict".to_string(),
        }
    }

    #[test]
    fn validation_error_is_prefixed_with_step() {
        let err = UseCaseError::from(ValidationError::InsufficientAvailabilityZones {
            requested: 3,
            available: 2,
        });

        assert!(err.to_string().starts_with("while validating input: not enough availability zones provided"));
        assert_eq!(err.error_code(), "INSUFFICIENT_AVAILABILITY_ZONES");
        assert_eq!(err.context(), None);
    }

    #[test]
    fn resource_creation_error_names_context_and_resource() {
        let err = ResourceCreationError::new(
            "while creating public subnets",
            ResourceKind::Subnet,
            "demo-public-subnet-1",
            rejected(),
        );

        let message = err.to_string();
        assert!(message.starts_with("while creating public subnets: failed to create subnet 'demo-public-subnet-1'"));
        assert!(message.ends_with("InvalidSubnet.Conflict"));

        let err = UseCaseError::from(err);
        assert_eq!(err.context(), Some("while creating public subnets"));
        assert_eq!(err.error_code(), "RESOURCE_REJECTED");
    }

    #[test]
    fn app_error_exit_codes() {
        let validation = AppError::from(UseCaseError::from(ValidationError::InsufficientAvailabilityZones {
            requested: 2,
            available: 1,
        }));
        assert_eq!(validation.exit_code(), 2);

        let creation = AppError::from(UseCaseError::from(ResourceCreationError::new(
            "while creating flow log",
            ResourceKind::FlowLog,
            "demo",
            rejected(),
        )));
        assert_eq!(creation.exit_code(), 4);
        assert_eq!(creation.error_code(), "RESOURCE_REJECTED");

        assert_eq!(AppError::InvalidRequest(vec![]).error_code(), "INVALID_REQUEST");
    }
}
