//! Create Classic Load Balancer Use Case

use std::sync::Arc;

use crate::domain::gateways::ResourceProvisioner;
use crate::domain::models::args::LoadBalancerArgs;
use crate::domain::models::{ClassicLoadBalancerRequest, CreatedResource, ResourceKind};
use crate::shared::errors::{ResourceCreationError, UseCaseError};

pub const LOAD_BALANCER_CONTEXT: &str = "while creating load balancer";

/// Use case for creating a classic load balancer
pub struct CreateClassicLoadBalancerUseCase {
    provisioner: Arc<dyn ResourceProvisioner>,
}

impl CreateClassicLoadBalancerUseCase {
    /// Create a new CreateClassicLoadBalancerUseCase
    #[must_use]
    pub fn new(provisioner: Arc<dyn ResourceProvisioner>) -> Self {
        Self { provisioner }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::ResourceCreation` if the provisioner rejects the load balancer.
    pub async fn execute(&self, request: &ClassicLoadBalancerRequest) -> Result<CreatedResource, UseCaseError> {
        tracing::info!(
            name = %request.name,
            listeners = request.listeners.len(),
            access_logs = request.access_logs.is_some(),
            "Creating classic load balancer"
        );

        let args = LoadBalancerArgs {
            name: request.name.clone(),
            subnets: request.subnet_ids.clone(),
            listeners: request.listeners.clone(),
            security_groups: request.security_group_ids.clone(),
            access_logs: request.access_logs.clone(),
            tags: request.tags.clone(),
        };

        let load_balancer = self
            .provisioner
            .create_load_balancer(&request.name, &args)
            .await
            .map_err(|e| {
                tracing::warn!(name = %request.name, error = %e, "Load balancer creation failed");
                ResourceCreationError::new(LOAD_BALANCER_CONTEXT, ResourceKind::LoadBalancer, &request.name, e)
            })?;

        tracing::info!(load_balancer_id = %load_balancer.id, "Classic load balancer created successfully");
        Ok(load_balancer)
    }
}
