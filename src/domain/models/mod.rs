//! Domain Models
//!
//! Pure domain entities and value objects describing network topologies
//! and the resources they are built from.

pub mod args;
pub mod resource;
pub mod tags;
pub mod topology;
pub mod workload;

pub use resource::{CreatedResource, ResourceId, ResourceKind};
pub use tags::{with_name_tag, Tags, NAME_TAG};
pub use topology::{FlowLogConfig, NatEgress, PrivatePartition, PublicPartition, TopologyRequest, TopologyResult};
pub use workload::{AutoScalingGroupOutput, AutoScalingGroupRequest, ClassicLoadBalancerRequest, SecurityGroupRequest};
