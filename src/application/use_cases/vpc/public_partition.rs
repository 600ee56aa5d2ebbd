//! Public Partition Builder
//!
//! Internet gateway, a route table with a default route to it, and one
//! subnet per public CIDR block associated with that route table.

use crate::domain::gateways::ResourceProvisioner;
use crate::domain::models::args::{InternetGatewayArgs, Route, RouteTableArgs, RouteTarget};
use crate::domain::models::{with_name_tag, CreatedResource, PublicPartition, ResourceId, ResourceKind, TopologyRequest};
use crate::shared::errors::ResourceCreationError;

use super::subnets::{create_associated_subnets, Exposure};
use super::PUBLIC_SUBNETS_CONTEXT;

/// Logical name of the public route table
#[must_use]
pub fn public_route_table_name(base: &str) -> String {
    format!("{base}-public")
}

/// Build the public partition inside `vpc_id`
///
/// Must only be called when the request has public subnet CIDR blocks.
///
/// # Errors
///
/// Returns `ResourceCreationError` for the first resource the provisioner
/// rejects; nothing after it is created.
pub async fn build_public_partition(
    provisioner: &dyn ResourceProvisioner,
    request: &TopologyRequest,
    vpc_id: &ResourceId,
) -> Result<PublicPartition, ResourceCreationError> {
    let internet_gateway = create_internet_gateway(provisioner, request, vpc_id).await?;

    let route_table_name = public_route_table_name(&request.name);
    let route_table_args = RouteTableArgs {
        vpc_id: vpc_id.clone(),
        routes: vec![Route::default_via(RouteTarget::InternetGateway(internet_gateway.id.clone()))],
        tags: with_name_tag(&request.tags, &route_table_name),
    };
    let route_table = provisioner
        .create_route_table(&route_table_name, &route_table_args)
        .await
        .map_err(|e| {
            tracing::warn!(name = %route_table_name, error = %e, "Public route table creation failed");
            ResourceCreationError::new(PUBLIC_SUBNETS_CONTEXT, ResourceKind::RouteTable, &route_table_name, e)
        })?;

    let subnets = create_associated_subnets(
        provisioner,
        request,
        vpc_id,
        &route_table.id,
        Exposure::Public,
        &request.public_subnet_cidr_blocks,
    )
    .await?;

    tracing::debug!(
        internet_gateway_id = %internet_gateway.id,
        route_table_id = %route_table.id,
        subnets = subnets.len(),
        "Public partition built"
    );

    Ok(PublicPartition {
        internet_gateway,
        route_table,
        subnets,
    })
}

async fn create_internet_gateway(
    provisioner: &dyn ResourceProvisioner,
    request: &TopologyRequest,
    vpc_id: &ResourceId,
) -> Result<CreatedResource, ResourceCreationError> {
    let args = InternetGatewayArgs {
        vpc_id: vpc_id.clone(),
        tags: with_name_tag(&request.tags, &request.name),
    };

    provisioner
        .create_internet_gateway(&request.name, &args)
        .await
        .map_err(|e| {
            tracing::warn!(name = %request.name, error = %e, "Internet gateway creation failed");
            ResourceCreationError::new(PUBLIC_SUBNETS_CONTEXT, ResourceKind::InternetGateway, &request.name, e)
        })
}
