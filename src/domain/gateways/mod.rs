//! Gateway Traits (Ports)
//!
//! Abstract interfaces defining contracts for external dependencies.
//! These are implemented by driven adapters in the infrastructure layer.

pub mod resource_provisioner;

pub use resource_provisioner::ResourceProvisioner;
#[cfg(test)]
pub use resource_provisioner::MockResourceProvisioner;
