//! Resource Argument Records
//!
//! One structured argument record per resource kind, passed to the provisioner.
//! Identifiers returned by earlier calls appear here as `ResourceId` references.

use serde::Serialize;

use super::resource::ResourceId;
use super::tags::Tags;

/// Destination of the default route for every partition with egress
pub const DEFAULT_ROUTE_CIDR: &str = "0.0.0.0/0";

/// Launch template version used by autoscaling groups
pub const LATEST_LAUNCH_TEMPLATE_VERSION: &str = "$Latest";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VpcArgs {
    pub cidr_block: String,
    pub tags: Tags,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InternetGatewayArgs {
    pub vpc_id: ResourceId,
    pub tags: Tags,
}

/// Where a route sends matching traffic
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "type", content = "id")]
pub enum RouteTarget {
    InternetGateway(ResourceId),
    NatGateway(ResourceId),
}

impl RouteTarget {
    #[must_use]
    pub fn id(&self) -> &ResourceId {
        match self {
            Self::InternetGateway(id) | Self::NatGateway(id) => id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub cidr_block: String,
    pub target: RouteTarget,
}

impl Route {
    /// A `0.0.0.0/0` route towards `target`
    #[must_use]
    pub fn default_via(target: RouteTarget) -> Self {
        Self {
            cidr_block: DEFAULT_ROUTE_CIDR.to_string(),
            target,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteTableArgs {
    pub vpc_id: ResourceId,
    pub routes: Vec<Route>,
    pub tags: Tags,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteTableAssociationArgs {
    pub route_table_id: ResourceId,
    pub subnet_id: ResourceId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubnetArgs {
    pub vpc_id: ResourceId,
    pub cidr_block: String,
    pub availability_zone: String,
    pub tags: Tags,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EipArgs {
    /// Allocate the address for use in a VPC
    pub vpc: bool,
    pub tags: Tags,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NatGatewayArgs {
    pub subnet_id: ResourceId,
    pub allocation_id: ResourceId,
    pub tags: Tags,
}

/// File format and partitioning of flow log records delivered to object storage
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FlowLogDestinationOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hive_compatible_partitions: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_hour_partition: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowLogArgs {
    pub vpc_id: ResourceId,
    pub traffic_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_destination_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_destination: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_options: Option<FlowLogDestinationOptions>,
    pub tags: Tags,
}

/// A single ingress or egress rule of a security group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SecurityGroupRule {
    pub protocol: String,
    pub from_port: u16,
    pub to_port: u16,
    pub cidr_blocks: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SecurityGroupArgs {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_id: Option<ResourceId>,
    pub ingress: Vec<SecurityGroupRule>,
    pub egress: Vec<SecurityGroupRule>,
    pub tags: Tags,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchTemplateArgs {
    pub name_prefix: String,
    pub image_id: String,
    pub instance_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_data: Option<String>,
    pub vpc_security_group_ids: Vec<ResourceId>,
    pub tags: Tags,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchTemplateSpec {
    pub id: ResourceId,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AutoScalingGroupArgs {
    pub desired_capacity: u32,
    pub min_size: u32,
    pub max_size: u32,
    pub vpc_zone_identifiers: Vec<ResourceId>,
    pub load_balancers: Vec<ResourceId>,
    pub launch_template: LaunchTemplateSpec,
}

/// A classic load balancer listener
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Listener {
    pub instance_port: u16,
    pub instance_protocol: String,
    pub lb_port: u16,
    pub lb_protocol: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssl_certificate_id: Option<String>,
}

/// Access log delivery for a classic load balancer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessLogsConfig {
    pub bucket: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket_prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadBalancerArgs {
    pub name: String,
    pub subnets: Vec<ResourceId>,
    pub listeners: Vec<Listener>,
    pub security_groups: Vec<ResourceId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_logs: Option<AccessLogsConfig>,
    pub tags: Tags,
}

/// Any argument record, as recorded by provisioners that keep a call log
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ResourceArgs {
    Vpc(VpcArgs),
    InternetGateway(InternetGatewayArgs),
    RouteTable(RouteTableArgs),
    RouteTableAssociation(RouteTableAssociationArgs),
    Subnet(SubnetArgs),
    Eip(EipArgs),
    NatGateway(NatGatewayArgs),
    FlowLog(FlowLogArgs),
    SecurityGroup(SecurityGroupArgs),
    LaunchTemplate(LaunchTemplateArgs),
    AutoScalingGroup(AutoScalingGroupArgs),
    LoadBalancer(LoadBalancerArgs),
}

impl ResourceArgs {
    /// Identifiers of other resources this record refers to
    #[must_use]
    pub fn references(&self) -> Vec<&ResourceId> {
        match self {
            Self::Vpc(_) | Self::Eip(_) => Vec::new(),
            Self::InternetGateway(args) => vec![&args.vpc_id],
            Self::RouteTable(args) => std::iter::once(&args.vpc_id)
                .chain(args.routes.iter().map(|route| route.target.id()))
                .collect(),
            Self::RouteTableAssociation(args) => vec![&args.route_table_id, &args.subnet_id],
            Self::Subnet(args) => vec![&args.vpc_id],
            Self::NatGateway(args) => vec![&args.subnet_id, &args.allocation_id],
            Self::FlowLog(args) => vec![&args.vpc_id],
            Self::SecurityGroup(args) => args.vpc_id.iter().collect(),
            Self::LaunchTemplate(args) => args.vpc_security_group_ids.iter().collect(),
            Self::AutoScalingGroup(args) => args
                .vpc_zone_identifiers
                .iter()
                .chain(args.load_balancers.iter())
                .chain(std::iter::once(&args.launch_template.id))
                .collect(),
            Self::LoadBalancer(args) => args.subnets.iter().chain(args.security_groups.iter()).collect(),
        }
    }

    /// Tags carried by the record; associations and autoscaling groups carry none
    #[must_use]
    pub fn tags(&self) -> Option<&Tags> {
        match self {
            Self::Vpc(args) => Some(&args.tags),
            Self::InternetGateway(args) => Some(&args.tags),
            Self::RouteTable(args) => Some(&args.tags),
            Self::Subnet(args) => Some(&args.tags),
            Self::Eip(args) => Some(&args.tags),
            Self::NatGateway(args) => Some(&args.tags),
            Self::FlowLog(args) => Some(&args.tags),
            Self::SecurityGroup(args) => Some(&args.tags),
            Self::LaunchTemplate(args) => Some(&args.tags),
            Self::LoadBalancer(args) => Some(&args.tags),
            Self::RouteTableAssociation(_) | Self::AutoScalingGroup(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_table_references_include_route_targets() {
        let args = ResourceArgs::RouteTable(RouteTableArgs {
            vpc_id: ResourceId::from("vpc-1"),
            routes: vec![Route::default_via(RouteTarget::NatGateway(ResourceId::from("nat-1")))],
            tags: Tags::new(),
        });

        let refs: Vec<&str> = args.references().into_iter().map(ResourceId::as_str).collect();
        assert_eq!(refs, vec!["vpc-1", "nat-1"]);
    }

    #[test]
    fn test_default_route_cidr() {
        let route = Route::default_via(RouteTarget::InternetGateway(ResourceId::from("igw-1")));
        assert_eq!(route.cidr_block, "0.0.0.0/0");
        assert_eq!(route.target.id().as_str(), "igw-1");
    }

    #[test]
    fn test_association_carries_no_tags() {
        let args = ResourceArgs::RouteTableAssociation(RouteTableAssociationArgs {
            route_table_id: ResourceId::from("rtb-1"),
            subnet_id: ResourceId::from("subnet-1"),
        });
        assert!(args.tags().is_none());
    }
}
