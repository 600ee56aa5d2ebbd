//! Use Cases
//!
//! Application-specific business rules.
//! Each use case is a single-purpose struct with an execute() method.

pub mod ec2;
pub mod elb;
pub mod vpc;

pub use ec2::{CreateAutoScalingGroupUseCase, CreateSecurityGroupUseCase};
pub use elb::CreateClassicLoadBalancerUseCase;
pub use vpc::BuildVpcUseCase;
