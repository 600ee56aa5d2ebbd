//! Domain Layer
//!
//! Contains the topology models, resource argument records, and the
//! provisioner gateway trait (port).
//! This layer has no dependencies on infrastructure.

pub mod gateways;
pub mod models;

pub use gateways::ResourceProvisioner;
pub use models::{CreatedResource, ResourceId, ResourceKind, Tags, TopologyRequest, TopologyResult};
