//! Subnet creation shared by both partitions

use crate::domain::gateways::ResourceProvisioner;
use crate::domain::models::args::{RouteTableAssociationArgs, SubnetArgs};
use crate::domain::models::{with_name_tag, CreatedResource, ResourceId, ResourceKind, TopologyRequest};
use crate::shared::errors::ResourceCreationError;

use super::{PRIVATE_SUBNETS_CONTEXT, PUBLIC_SUBNETS_CONTEXT};

/// Exposure of a partition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exposure {
    Public,
    Private,
}

impl Exposure {
    fn as_str(self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Private => "private",
        }
    }

    fn context(self) -> &'static str {
        match self {
            Self::Public => PUBLIC_SUBNETS_CONTEXT,
            Self::Private => PRIVATE_SUBNETS_CONTEXT,
        }
    }
}

/// Logical name of the subnet at `index` (also used for its association)
#[must_use]
pub fn subnet_name(base: &str, exposure: Exposure, index: usize) -> String {
    format!("{base}-{}-subnet-{index}", exposure.as_str())
}

/// Create one subnet per CIDR block, each in the zone at the same position,
/// and associate each with `route_table_id` before creating the next one
pub(super) async fn create_associated_subnets(
    provisioner: &dyn ResourceProvisioner,
    request: &TopologyRequest,
    vpc_id: &ResourceId,
    route_table_id: &ResourceId,
    exposure: Exposure,
    cidr_blocks: &[String],
) -> Result<Vec<CreatedResource>, ResourceCreationError> {
    let mut subnets = Vec::with_capacity(cidr_blocks.len());

    // Validation guarantees a zone for every position.
    for (index, (cidr_block, zone)) in cidr_blocks.iter().zip(&request.availability_zones).enumerate() {
        let name = subnet_name(&request.name, exposure, index);

        let subnet_args = SubnetArgs {
            vpc_id: vpc_id.clone(),
            cidr_block: cidr_block.clone(),
            availability_zone: zone.clone(),
            tags: with_name_tag(&request.tags, &name),
        };
        let subnet = provisioner.create_subnet(&name, &subnet_args).await.map_err(|e| {
            tracing::warn!(name = %name, cidr_block = %cidr_block, error = %e, "Subnet creation failed");
            ResourceCreationError::new(exposure.context(), ResourceKind::Subnet, &name, e)
        })?;

        let association_args = RouteTableAssociationArgs {
            route_table_id: route_table_id.clone(),
            subnet_id: subnet.id.clone(),
        };
        provisioner
            .create_route_table_association(&name, &association_args)
            .await
            .map_err(|e| {
                tracing::warn!(name = %name, error = %e, "Route table association failed");
                ResourceCreationError::new(exposure.context(), ResourceKind::RouteTableAssociation, &name, e)
            })?;

        tracing::debug!(
            subnet_id = %subnet.id,
            availability_zone = %zone,
            cidr_block = %cidr_block,
            "{} subnet created",
            exposure.as_str()
        );
        subnets.push(subnet);
    }

    Ok(subnets)
}
