//! In-Memory Provisioner Implementation
//!
//! Implements the ResourceProvisioner trait without talking to any cloud.
//! Every call is recorded in order, which makes it a dry-run planner for the
//! binary and a faithful fake for tests.

use std::collections::{BTreeMap, HashMap, HashSet};

use async_trait::async_trait;
use serde::Serialize;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::domain::gateways::ResourceProvisioner;
use crate::domain::models::args::{
    AutoScalingGroupArgs, EipArgs, FlowLogArgs, InternetGatewayArgs, LaunchTemplateArgs, LoadBalancerArgs,
    NatGatewayArgs, ResourceArgs, RouteTableArgs, RouteTableAssociationArgs, SecurityGroupArgs, SubnetArgs, VpcArgs,
};
use crate::domain::models::{CreatedResource, ResourceId, ResourceKind};
use crate::shared::errors::ProvisionerError;

/// Length of the hexadecimal part of generated identifiers
const ID_HEX_LEN: usize = 17;

/// One recorded creation call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProvisionRecord {
    pub kind: ResourceKind,
    pub name: String,
    pub id: ResourceId,
    pub args: ResourceArgs,
}

#[derive(Debug, Default)]
struct ProvisionState {
    records: Vec<ProvisionRecord>,
    issued: HashMap<ResourceId, ResourceKind>,
    names: HashSet<(ResourceKind, String)>,
}

/// Dry-run implementation of ResourceProvisioner
#[derive(Debug, Default)]
pub struct InMemoryProvisioner {
    state: Mutex<ProvisionState>,
    failures: HashMap<(ResourceKind, String), String>,
}

impl InMemoryProvisioner {
    /// Create a new InMemoryProvisioner
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject the creation of `name` of the given kind
    #[must_use]
    pub fn with_failure(mut self, kind: ResourceKind, name: impl Into<String>, reason: impl Into<String>) -> Self {
        self.failures.insert((kind, name.into()), reason.into());
        self
    }

    /// All successful creation calls, in the order they were made
    pub async fn records(&self) -> Vec<ProvisionRecord> {
        self.state.lock().await.records.clone()
    }

    /// Number of resources of `kind` created so far
    pub async fn count(&self, kind: ResourceKind) -> usize {
        self.state
            .lock()
            .await
            .records
            .iter()
            .filter(|record| record.kind == kind)
            .count()
    }

    async fn provision(
        &self,
        kind: ResourceKind,
        name: &str,
        args: ResourceArgs,
    ) -> Result<CreatedResource, ProvisionerError> {
        if let Some(reason) = self.failures.get(&(kind, name.to_string())) {
            return Err(ProvisionerError::Rejected {
                kind,
                name: name.to_string(),
                reason: reason.clone(),
            });
        }

        let mut state = self.state.lock().await;

        if state.names.contains(&(kind, name.to_string())) {
            return Err(ProvisionerError::Duplicate {
                kind,
                name: name.to_string(),
            });
        }

        if let Some(unknown) = args.references().into_iter().find(|id| !state.issued.contains_key(*id)) {
            return Err(ProvisionerError::UnknownReference {
                kind,
                name: name.to_string(),
                reference: unknown.clone(),
            });
        }

        let id = generate_id(kind);
        let mut resource = CreatedResource::new(kind, name, id.clone())
            .with_output("arn", format!("arn:aws:ec2:::{}/{}", kind.id_prefix(), id));
        if kind == ResourceKind::Eip {
            resource = resource.with_output("public_ip", documentation_address(state.records.len()));
        }

        state.issued.insert(id.clone(), kind);
        state.names.insert((kind, name.to_string()));
        state.records.push(ProvisionRecord {
            kind,
            name: name.to_string(),
            id,
            args,
        });

        tracing::trace!(kind = %kind, name = %name, id = %resource.id, "Resource recorded");
        Ok(resource)
    }
}

fn generate_id(kind: ResourceKind) -> ResourceId {
    let hex = Uuid::new_v4().simple().to_string();
    ResourceId::new(format!("{}-{}", kind.id_prefix(), &hex[..ID_HEX_LEN]))
}

/// An address from the 203.0.113.0/24 documentation range
fn documentation_address(seed: usize) -> String {
    format!("203.0.113.{}", seed % 254 + 1)
}

#[async_trait]
impl ResourceProvisioner for InMemoryProvisioner {
    async fn create_vpc(&self, name: &str, args: &VpcArgs) -> Result<CreatedResource, ProvisionerError> {
        self.provision(ResourceKind::Vpc, name, ResourceArgs::Vpc(args.clone())).await
    }

    async fn create_internet_gateway(
        &self,
        name: &str,
        args: &InternetGatewayArgs,
    ) -> Result<CreatedResource, ProvisionerError> {
        self.provision(ResourceKind::InternetGateway, name, ResourceArgs::InternetGateway(args.clone()))
            .await
    }

    async fn create_route_table(&self, name: &str, args: &RouteTableArgs) -> Result<CreatedResource, ProvisionerError> {
        self.provision(ResourceKind::RouteTable, name, ResourceArgs::RouteTable(args.clone()))
            .await
    }

    async fn create_route_table_association(
        &self,
        name: &str,
        args: &RouteTableAssociationArgs,
    ) -> Result<CreatedResource, ProvisionerError> {
        self.provision(
            ResourceKind::RouteTableAssociation,
            name,
            ResourceArgs::RouteTableAssociation(args.clone()),
        )
        .await
    }

    async fn create_subnet(&self, name: &str, args: &SubnetArgs) -> Result<CreatedResource, ProvisionerError> {
        self.provision(ResourceKind::Subnet, name, ResourceArgs::Subnet(args.clone())).await
    }

    async fn create_eip(&self, name: &str, args: &EipArgs) -> Result<CreatedResource, ProvisionerError> {
        self.provision(ResourceKind::Eip, name, ResourceArgs::Eip(args.clone())).await
    }

    async fn create_nat_gateway(&self, name: &str, args: &NatGatewayArgs) -> Result<CreatedResource, ProvisionerError> {
        self.provision(ResourceKind::NatGateway, name, ResourceArgs::NatGateway(args.clone()))
            .await
    }

    async fn create_flow_log(&self, name: &str, args: &FlowLogArgs) -> Result<CreatedResource, ProvisionerError> {
        self.provision(ResourceKind::FlowLog, name, ResourceArgs::FlowLog(args.clone())).await
    }

    async fn create_security_group(
        &self,
        name: &str,
        args: &SecurityGroupArgs,
    ) -> Result<CreatedResource, ProvisionerError> {
        self.provision(ResourceKind::SecurityGroup, name, ResourceArgs::SecurityGroup(args.clone()))
            .await
    }

    async fn create_launch_template(
        &self,
        name: &str,
        args: &LaunchTemplateArgs,
    ) -> Result<CreatedResource, ProvisionerError> {
        self.provision(ResourceKind::LaunchTemplate, name, ResourceArgs::LaunchTemplate(args.clone()))
            .await
    }

    async fn create_autoscaling_group(
        &self,
        name: &str,
        args: &AutoScalingGroupArgs,
    ) -> Result<CreatedResource, ProvisionerError> {
        self.provision(ResourceKind::AutoScalingGroup, name, ResourceArgs::AutoScalingGroup(args.clone()))
            .await
    }

    async fn create_load_balancer(
        &self,
        name: &str,
        args: &LoadBalancerArgs,
    ) -> Result<CreatedResource, ProvisionerError> {
        self.provision(ResourceKind::LoadBalancer, name, ResourceArgs::LoadBalancer(args.clone()))
            .await
    }
}

/// Group recorded calls by kind, for summaries
#[must_use]
pub fn count_by_kind(records: &[ProvisionRecord]) -> BTreeMap<ResourceKind, usize> {
    records.iter().fold(BTreeMap::new(), |mut counts, record| {
        *counts.entry(record.kind).or_insert(0) += 1;
        counts
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::Tags;

    fn vpc_args() -> VpcArgs {
        VpcArgs {
            cidr_block: "10.0.0.0/16".to_string(),
            tags: Tags::new(),
        }
    }

    #[tokio::test]
    async fn should_issue_prefixed_ids() {
        let provisioner = InMemoryProvisioner::new();

        let vpc = provisioner.create_vpc("demo", &vpc_args()).await.unwrap();

        assert!(vpc.id.as_str().starts_with("vpc-"));
        assert_eq!(vpc.id.as_str().len(), "vpc-".len() + ID_HEX_LEN);
        assert!(vpc.output("arn").is_some());
    }

    #[tokio::test]
    async fn should_reject_duplicate_names_per_kind() {
        let provisioner = InMemoryProvisioner::new();
        let vpc = provisioner.create_vpc("demo", &vpc_args()).await.unwrap();

        let err = provisioner.create_vpc("demo", &vpc_args()).await.unwrap_err();
        assert!(matches!(err, ProvisionerError::Duplicate { kind: ResourceKind::Vpc, .. }));

        // Same name, different kind is fine.
        let igw = provisioner
            .create_internet_gateway(
                "demo",
                &InternetGatewayArgs {
                    vpc_id: vpc.id.clone(),
                    tags: Tags::new(),
                },
            )
            .await;
        assert!(igw.is_ok());
    }

    #[tokio::test]
    async fn should_reject_references_to_unknown_resources() {
        let provisioner = InMemoryProvisioner::new();

        let err = provisioner
            .create_subnet(
                "demo-public-subnet-0",
                &SubnetArgs {
                    vpc_id: ResourceId::from("vpc-missing"),
                    cidr_block: "10.0.1.0/24".to_string(),
                    availability_zone: "a".to_string(),
                    tags: Tags::new(),
                },
            )
            .await
            .unwrap_err();

        assert_eq!(
            err,
            ProvisionerError::UnknownReference {
                kind: ResourceKind::Subnet,
                name: "demo-public-subnet-0".to_string(),
                reference: ResourceId::from("vpc-missing"),
            }
        );
        assert!(provisioner.records().await.is_empty());
    }

    #[tokio::test]
    async fn should_inject_configured_failures() {
        let provisioner = InMemoryProvisioner::new().with_failure(ResourceKind::Vpc, "demo", "VpcLimitExceeded");

        let err = provisioner.create_vpc("demo", &vpc_args()).await.unwrap_err();

        assert!(err.to_string().contains("VpcLimitExceeded"));
        assert_eq!(provisioner.count(ResourceKind::Vpc).await, 0);
    }

    #[tokio::test]
    async fn should_assign_public_ip_to_eips() {
        let provisioner = InMemoryProvisioner::new();

        let eip = provisioner
            .create_eip(
                "demo-nat-eip",
                &EipArgs {
                    vpc: true,
                    tags: Tags::new(),
                },
            )
            .await
            .unwrap();

        assert_eq!(eip.output("public_ip"), Some("203.0.113.1"));
        assert_eq!(count_by_kind(&provisioner.records().await).get(&ResourceKind::Eip), Some(&1));
    }
}
