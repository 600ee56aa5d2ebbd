//! Private Partition Builder
//!
//! A route table and one subnet per private CIDR block. When a public
//! partition exists, egress goes through a NAT gateway placed in the first
//! public subnet; otherwise the route table has no routes and the subnets
//! are fully isolated.

use crate::domain::gateways::ResourceProvisioner;
use crate::domain::models::args::{EipArgs, NatGatewayArgs, Route, RouteTableArgs, RouteTarget};
use crate::domain::models::{
    with_name_tag, CreatedResource, NatEgress, PrivatePartition, ResourceId, ResourceKind, TopologyRequest,
};
use crate::shared::errors::ResourceCreationError;

use super::subnets::{create_associated_subnets, Exposure};
use super::{NAT_GATEWAY_CONTEXT, PRIVATE_SUBNETS_CONTEXT};

/// Logical name of the private route table
#[must_use]
pub fn private_route_table_name(base: &str) -> String {
    format!("{base}-private")
}

/// Logical name of the elastic IP backing the NAT gateway
#[must_use]
pub fn nat_eip_name(base: &str) -> String {
    format!("{base}-nat-eip")
}

/// Logical name of the NAT gateway
#[must_use]
pub fn nat_gateway_name(base: &str) -> String {
    format!("{base}-nat-gateway")
}

/// Build the private partition inside `vpc_id`
///
/// `public_subnets` are the subnets of the public partition, empty when there
/// is none. Only the first one is used, as the home of the NAT gateway.
///
/// # Errors
///
/// Returns `ResourceCreationError` for the first resource the provisioner
/// rejects; nothing after it is created.
pub async fn build_private_partition(
    provisioner: &dyn ResourceProvisioner,
    request: &TopologyRequest,
    vpc_id: &ResourceId,
    public_subnets: &[CreatedResource],
) -> Result<PrivatePartition, ResourceCreationError> {
    let nat = match public_subnets.first() {
        Some(subnet) => Some(create_nat_egress(provisioner, request, &subnet.id).await?),
        None => {
            tracing::debug!(name = %request.name, "No public partition, private subnets are isolated");
            None
        }
    };

    let routes = nat
        .iter()
        .map(|nat| Route::default_via(RouteTarget::NatGateway(nat.gateway.id.clone())))
        .collect();

    let route_table_name = private_route_table_name(&request.name);
    let route_table_args = RouteTableArgs {
        vpc_id: vpc_id.clone(),
        routes,
        tags: with_name_tag(&request.tags, &route_table_name),
    };
    let route_table = provisioner
        .create_route_table(&route_table_name, &route_table_args)
        .await
        .map_err(|e| {
            tracing::warn!(name = %route_table_name, error = %e, "Private route table creation failed");
            ResourceCreationError::new(PRIVATE_SUBNETS_CONTEXT, ResourceKind::RouteTable, &route_table_name, e)
        })?;

    let subnets = create_associated_subnets(
        provisioner,
        request,
        vpc_id,
        &route_table.id,
        Exposure::Private,
        &request.private_subnet_cidr_blocks,
    )
    .await?;

    tracing::debug!(
        route_table_id = %route_table.id,
        nat = nat.is_some(),
        subnets = subnets.len(),
        "Private partition built"
    );

    Ok(PrivatePartition {
        nat,
        route_table,
        subnets,
    })
}

async fn create_nat_egress(
    provisioner: &dyn ResourceProvisioner,
    request: &TopologyRequest,
    subnet_id: &ResourceId,
) -> Result<NatEgress, ResourceCreationError> {
    let eip_name = nat_eip_name(&request.name);
    let eip_args = EipArgs {
        vpc: true,
        tags: with_name_tag(&request.tags, &eip_name),
    };
    let eip = provisioner.create_eip(&eip_name, &eip_args).await.map_err(|e| {
        tracing::warn!(name = %eip_name, error = %e, "Elastic IP allocation failed");
        ResourceCreationError::new(NAT_GATEWAY_CONTEXT, ResourceKind::Eip, &eip_name, e)
    })?;

    let gateway_name = nat_gateway_name(&request.name);
    let gateway_args = NatGatewayArgs {
        subnet_id: subnet_id.clone(),
        allocation_id: eip.id.clone(),
        tags: with_name_tag(&request.tags, &gateway_name),
    };
    let gateway = provisioner
        .create_nat_gateway(&gateway_name, &gateway_args)
        .await
        .map_err(|e| {
            tracing::warn!(name = %gateway_name, error = %e, "NAT gateway creation failed");
            ResourceCreationError::new(NAT_GATEWAY_CONTEXT, ResourceKind::NatGateway, &gateway_name, e)
        })?;

    tracing::debug!(
        nat_gateway_id = %gateway.id,
        allocation_id = %eip.id,
        subnet_id = %subnet_id,
        "NAT gateway created"
    );
    Ok(NatEgress { eip, gateway })
}
