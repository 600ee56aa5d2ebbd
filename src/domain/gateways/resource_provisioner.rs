//! Resource Provisioner Gateway
//!
//! Abstract trait defining the create-resource capability the builders call into.
//! Every call is awaited before the next one is issued, so identifiers passed
//! into later calls always refer to resources the provisioner has already returned.

use async_trait::async_trait;

use crate::domain::models::args::{
    AutoScalingGroupArgs, EipArgs, FlowLogArgs, InternetGatewayArgs, LaunchTemplateArgs, LoadBalancerArgs,
    NatGatewayArgs, RouteTableArgs, RouteTableAssociationArgs, SecurityGroupArgs, SubnetArgs, VpcArgs,
};
use crate::domain::models::resource::CreatedResource;
use crate::shared::errors::ProvisionerError;

/// Provisioner trait, one creation operation per resource kind
///
/// `name` is the stable logical name of the resource; it must be unique per kind.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResourceProvisioner: Send + Sync {
    /// Create the network container
    async fn create_vpc(&self, name: &str, args: &VpcArgs) -> Result<CreatedResource, ProvisionerError>;

    /// Create an internet gateway attached to a VPC
    async fn create_internet_gateway(
        &self,
        name: &str,
        args: &InternetGatewayArgs,
    ) -> Result<CreatedResource, ProvisionerError>;

    /// Create a route table with its inline routes
    async fn create_route_table(&self, name: &str, args: &RouteTableArgs) -> Result<CreatedResource, ProvisionerError>;

    /// Associate a subnet with a route table
    async fn create_route_table_association(
        &self,
        name: &str,
        args: &RouteTableAssociationArgs,
    ) -> Result<CreatedResource, ProvisionerError>;

    /// Create a subnet
    async fn create_subnet(&self, name: &str, args: &SubnetArgs) -> Result<CreatedResource, ProvisionerError>;

    /// Allocate a static (elastic) address
    async fn create_eip(&self, name: &str, args: &EipArgs) -> Result<CreatedResource, ProvisionerError>;

    /// Create a NAT gateway bound to a subnet and an allocated address
    async fn create_nat_gateway(&self, name: &str, args: &NatGatewayArgs) -> Result<CreatedResource, ProvisionerError>;

    /// Attach flow logging to a VPC
    async fn create_flow_log(&self, name: &str, args: &FlowLogArgs) -> Result<CreatedResource, ProvisionerError>;

    /// Create a security group
    async fn create_security_group(
        &self,
        name: &str,
        args: &SecurityGroupArgs,
    ) -> Result<CreatedResource, ProvisionerError>;

    /// Create a launch template
    async fn create_launch_template(
        &self,
        name: &str,
        args: &LaunchTemplateArgs,
    ) -> Result<CreatedResource, ProvisionerError>;

    /// Create an autoscaling group
    async fn create_autoscaling_group(
        &self,
        name: &str,
        args: &AutoScalingGroupArgs,
    ) -> Result<CreatedResource, ProvisionerError>;

    /// Create a classic load balancer
    async fn create_load_balancer(
        &self,
        name: &str,
        args: &LoadBalancerArgs,
    ) -> Result<CreatedResource, ProvisionerError>;
}
