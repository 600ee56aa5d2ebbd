//! Resource Domain Model
//!
//! Identifiers and kinds of the resources a provisioner can create.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Newtype wrapper for a provider-assigned resource identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(String);

impl ResourceId {
    /// Create a ResourceId from a provider-assigned identifier
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the identifier as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ResourceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for ResourceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ResourceId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// The kinds of resources the provisioning capability offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Vpc,
    InternetGateway,
    RouteTable,
    RouteTableAssociation,
    Subnet,
    Eip,
    NatGateway,
    FlowLog,
    SecurityGroup,
    LaunchTemplate,
    AutoScalingGroup,
    LoadBalancer,
}

impl ResourceKind {
    /// Prefix used for identifiers of this kind (`vpc-…`, `subnet-…`)
    #[must_use]
    pub fn id_prefix(self) -> &'static str {
        match self {
            Self::Vpc => "vpc",
            Self::InternetGateway => "igw",
            Self::RouteTable => "rtb",
            Self::RouteTableAssociation => "rtbassoc",
            Self::Subnet => "subnet",
            Self::Eip => "eipalloc",
            Self::NatGateway => "nat",
            Self::FlowLog => "fl",
            Self::SecurityGroup => "sg",
            Self::LaunchTemplate => "lt",
            Self::AutoScalingGroup => "asg",
            Self::LoadBalancer => "elb",
        }
    }

    /// Human readable label
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Vpc => "VPC",
            Self::InternetGateway => "internet gateway",
            Self::RouteTable => "route table",
            Self::RouteTableAssociation => "route table association",
            Self::Subnet => "subnet",
            Self::Eip => "elastic IP",
            Self::NatGateway => "NAT gateway",
            Self::FlowLog => "flow log",
            Self::SecurityGroup => "security group",
            Self::LaunchTemplate => "launch template",
            Self::AutoScalingGroup => "autoscaling group",
            Self::LoadBalancer => "load balancer",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A resource returned by the provisioner, with any provider-assigned outputs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatedResource {
    pub kind: ResourceKind,
    pub name: String,
    pub id: ResourceId,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub outputs: BTreeMap<String, String>,
}

impl CreatedResource {
    #[must_use]
    pub fn new(kind: ResourceKind, name: impl Into<String>, id: ResourceId) -> Self {
        Self {
            kind,
            name: name.into(),
            id,
            outputs: BTreeMap::new(),
        }
    }

    /// Attach a provider-assigned output attribute
    #[must_use]
    pub fn with_output(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.outputs.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn id(&self) -> &ResourceId {
        &self.id
    }

    #[must_use]
    pub fn output(&self, key: &str) -> Option<&str> {
        self.outputs.get(key).map(String::as_str)
    }
}
