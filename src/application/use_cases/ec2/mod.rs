//! EC2 Use Cases
//!
//! Security groups and autoscaling groups placed inside a built topology.

mod auto_scaling_group;
mod security_group;

pub use auto_scaling_group::{CreateAutoScalingGroupUseCase, AUTOSCALING_GROUP_CONTEXT, LAUNCH_TEMPLATE_CONTEXT};
pub use security_group::{CreateSecurityGroupUseCase, SECURITY_GROUP_CONTEXT};
