//! Topology Domain Model
//!
//! The request describing a virtual network and the result of building it.

use serde::Serialize;

use super::args::FlowLogDestinationOptions;
use super::resource::CreatedResource;
use super::tags::Tags;
use crate::shared::errors::ValidationError;

/// Traffic logging attached to the network container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowLogConfig {
    pub enabled: bool,
    pub traffic_type: String,
    pub log_destination_type: Option<String>,
    pub log_destination: Option<String>,
    pub destination_options: Option<FlowLogDestinationOptions>,
}

/// Data required to build a network topology
///
/// The subnet CIDR at position `i` of either list is placed in
/// `availability_zones[i]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopologyRequest {
    pub name: String,
    pub cidr_block: String,
    pub availability_zones: Vec<String>,
    pub public_subnet_cidr_blocks: Vec<String>,
    pub private_subnet_cidr_blocks: Vec<String>,
    pub flow_log: Option<FlowLogConfig>,
    pub tags: Tags,
}

impl TopologyRequest {
    /// Check that every requested subnet has an availability zone to land in
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InsufficientAvailabilityZones` if either subnet
    /// list is longer than the list of availability zones.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let available = self.availability_zones.len();
        let requested = self
            .public_subnet_cidr_blocks
            .len()
            .max(self.private_subnet_cidr_blocks.len());

        if requested > available {
            return Err(ValidationError::InsufficientAvailabilityZones { requested, available });
        }
        Ok(())
    }

    #[must_use]
    pub fn has_public_partition(&self) -> bool {
        !self.public_subnet_cidr_blocks.is_empty()
    }

    #[must_use]
    pub fn has_private_partition(&self) -> bool {
        !self.private_subnet_cidr_blocks.is_empty()
    }

    /// The flow log configuration, only when logging is enabled
    #[must_use]
    pub fn enabled_flow_log(&self) -> Option<&FlowLogConfig> {
        self.flow_log.as_ref().filter(|config| config.enabled)
    }
}

/// Resources making up the public partition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublicPartition {
    pub internet_gateway: CreatedResource,
    pub route_table: CreatedResource,
    pub subnets: Vec<CreatedResource>,
}

/// Resources making up the private partition
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrivatePartition {
    pub nat: Option<NatEgress>,
    pub route_table: CreatedResource,
    pub subnets: Vec<CreatedResource>,
}

/// NAT gateway and the elastic IP it is bound to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NatEgress {
    pub eip: CreatedResource,
    pub gateway: CreatedResource,
}

/// The built topology, owned by the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopologyResult {
    pub vpc: CreatedResource,
    pub public: Option<PublicPartition>,
    pub private: Option<PrivatePartition>,
    pub flow_log: Option<CreatedResource>,
}

impl TopologyResult {
    #[must_use]
    pub fn public_subnets(&self) -> &[CreatedResource] {
        self.public.as_ref().map_or(&[], |partition| partition.subnets.as_slice())
    }

    #[must_use]
    pub fn private_subnets(&self) -> &[CreatedResource] {
        self.private.as_ref().map_or(&[], |partition| partition.subnets.as_slice())
    }

    #[must_use]
    pub fn internet_gateway(&self) -> Option<&CreatedResource> {
        self.public.as_ref().map(|partition| &partition.internet_gateway)
    }

    #[must_use]
    pub fn nat_gateway(&self) -> Option<&CreatedResource> {
        self.private
            .as_ref()
            .and_then(|partition| partition.nat.as_ref())
            .map(|nat| &nat.gateway)
    }
}
