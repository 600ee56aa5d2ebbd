//! Create Security Group Use Case

use std::sync::Arc;

use crate::domain::gateways::ResourceProvisioner;
use crate::domain::models::args::SecurityGroupArgs;
use crate::domain::models::{with_name_tag, CreatedResource, ResourceKind, SecurityGroupRequest};
use crate::shared::errors::{ResourceCreationError, UseCaseError};

pub const SECURITY_GROUP_CONTEXT: &str = "while creating security group";

/// Use case for creating a security group
pub struct CreateSecurityGroupUseCase {
    provisioner: Arc<dyn ResourceProvisioner>,
}

impl CreateSecurityGroupUseCase {
    /// Create a new CreateSecurityGroupUseCase
    #[must_use]
    pub fn new(provisioner: Arc<dyn ResourceProvisioner>) -> Self {
        Self { provisioner }
    }

    /// Execute the use case
    ///
    /// The group name and description are both the request name.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::ResourceCreation` if the provisioner rejects the group.
    pub async fn execute(&self, request: &SecurityGroupRequest) -> Result<CreatedResource, UseCaseError> {
        tracing::info!(
            name = %request.name,
            ingress_rules = request.ingress.len(),
            egress_rules = request.egress.len(),
            "Creating security group"
        );

        let args = SecurityGroupArgs {
            name: request.name.clone(),
            description: request.name.clone(),
            vpc_id: request.vpc_id.clone(),
            ingress: request.ingress.clone(),
            egress: request.egress.clone(),
            tags: with_name_tag(&request.tags, &request.name),
        };

        let group = self
            .provisioner
            .create_security_group(&request.name, &args)
            .await
            .map_err(|e| {
                tracing::warn!(name = %request.name, error = %e, "Security group creation failed");
                ResourceCreationError::new(SECURITY_GROUP_CONTEXT, ResourceKind::SecurityGroup, &request.name, e)
            })?;

        tracing::info!(security_group_id = %group.id, "Security group created successfully");
        Ok(group)
    }
}
