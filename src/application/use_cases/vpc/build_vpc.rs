//! Build VPC Use Case
//!
//! Validates a topology request and creates the VPC, the public and private
//! partitions and the flow log, strictly in that order.

use std::sync::Arc;

use crate::domain::gateways::ResourceProvisioner;
use crate::domain::models::{TopologyRequest, TopologyResult};
use crate::shared::errors::UseCaseError;

use super::build_phase::{BuildPhase, BuildProgress};
use super::flow_log::bind_flow_log;
use super::network_container::create_network_container;
use super::private_partition::build_private_partition;
use super::public_partition::build_public_partition;

/// Use case for building a complete VPC topology
pub struct BuildVpcUseCase {
    provisioner: Arc<dyn ResourceProvisioner>,
}

impl BuildVpcUseCase {
    /// Create a new BuildVpcUseCase
    #[must_use]
    pub fn new(provisioner: Arc<dyn ResourceProvisioner>) -> Self {
        Self { provisioner }
    }

    /// Execute the use case
    ///
    /// Resources created before a failing step are left in place.
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::Validation` before any resource is created if there
    /// are fewer availability zones than requested subnets.
    /// Returns `UseCaseError::ResourceCreation` for the first rejected resource.
    pub async fn execute(&self, request: &TopologyRequest) -> Result<TopologyResult, UseCaseError> {
        tracing::info!(
            name = %request.name,
            cidr_block = %request.cidr_block,
            availability_zones = request.availability_zones.len(),
            public_subnets = request.public_subnet_cidr_blocks.len(),
            private_subnets = request.private_subnet_cidr_blocks.len(),
            "Building VPC topology"
        );

        let mut progress = BuildProgress::new(&request.name);
        match self.build(request, &mut progress).await {
            Ok(result) => {
                progress.advance(BuildPhase::Done);
                tracing::info!(
                    name = %request.name,
                    vpc_id = %result.vpc.id,
                    public_subnets = result.public_subnets().len(),
                    private_subnets = result.private_subnets().len(),
                    nat_gateway = result.nat_gateway().is_some(),
                    flow_log = result.flow_log.is_some(),
                    "VPC topology built successfully"
                );
                Ok(result)
            }
            Err(err) => {
                let failed_in = progress.fail();
                tracing::warn!(
                    name = %request.name,
                    phase = %failed_in,
                    code = err.error_code(),
                    error = %err,
                    "VPC topology build failed"
                );
                Err(err)
            }
        }
    }

    async fn build(
        &self,
        request: &TopologyRequest,
        progress: &mut BuildProgress<'_>,
    ) -> Result<TopologyResult, UseCaseError> {
        let provisioner = self.provisioner.as_ref();

        request.validate()?;

        let vpc = create_network_container(provisioner, request).await?;
        progress.advance(BuildPhase::ContainerCreated);

        let public = if request.has_public_partition() {
            let partition = build_public_partition(provisioner, request, &vpc.id).await?;
            progress.advance(BuildPhase::PublicBuilt);
            Some(partition)
        } else {
            None
        };

        let private = if request.has_private_partition() {
            let public_subnets = public.as_ref().map_or(&[][..], |partition| partition.subnets.as_slice());
            let partition = build_private_partition(provisioner, request, &vpc.id, public_subnets).await?;
            progress.advance(BuildPhase::PrivateBuilt);
            Some(partition)
        } else {
            None
        };

        let flow_log = match request.enabled_flow_log() {
            Some(config) => {
                let flow_log = bind_flow_log(provisioner, request, &vpc.id, config).await?;
                progress.advance(BuildPhase::LogBound);
                Some(flow_log)
            }
            None => None,
        };

        tracing::debug!(name = %request.name, phase = %progress.phase(), "All requested resources created");

        Ok(TopologyResult {
            vpc,
            public,
            private,
            flow_log,
        })
    }
}
