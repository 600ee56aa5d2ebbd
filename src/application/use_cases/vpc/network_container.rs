//! Network Container Builder

use crate::domain::gateways::ResourceProvisioner;
use crate::domain::models::args::VpcArgs;
use crate::domain::models::{with_name_tag, CreatedResource, ResourceKind, TopologyRequest};
use crate::shared::errors::ResourceCreationError;

use super::NETWORK_CONTAINER_CONTEXT;

/// Create the VPC named after the request, tagged with that name
///
/// # Errors
///
/// Returns `ResourceCreationError` if the provisioner rejects the VPC.
pub async fn create_network_container(
    provisioner: &dyn ResourceProvisioner,
    request: &TopologyRequest,
) -> Result<CreatedResource, ResourceCreationError> {
    let args = VpcArgs {
        cidr_block: request.cidr_block.clone(),
        tags: with_name_tag(&request.tags, &request.name),
    };

    let vpc = provisioner.create_vpc(&request.name, &args).await.map_err(|e| {
        tracing::warn!(name = %request.name, error = %e, "VPC creation failed");
        ResourceCreationError::new(NETWORK_CONTAINER_CONTEXT, ResourceKind::Vpc, &request.name, e)
    })?;

    tracing::debug!(vpc_id = %vpc.id, cidr_block = %args.cidr_block, "VPC created");
    Ok(vpc)
}
