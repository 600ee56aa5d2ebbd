//! Workload Domain Models
//!
//! Requests for the single-shot resources placed inside a built topology:
//! security groups, autoscaling groups and classic load balancers.

use serde::Serialize;

use super::args::{AccessLogsConfig, Listener, SecurityGroupRule};
use super::resource::{CreatedResource, ResourceId};
use super::tags::Tags;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityGroupRequest {
    pub name: String,
    pub vpc_id: Option<ResourceId>,
    pub ingress: Vec<SecurityGroupRule>,
    pub egress: Vec<SecurityGroupRule>,
    pub tags: Tags,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoScalingGroupRequest {
    pub name: String,
    pub ami_id: String,
    pub instance_type: String,
    pub user_data: Option<String>,
    pub subnet_ids: Vec<ResourceId>,
    pub load_balancer_id: Option<ResourceId>,
    pub security_group_ids: Vec<ResourceId>,
    pub tags: Tags,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AutoScalingGroupOutput {
    pub launch_template: CreatedResource,
    pub group: CreatedResource,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassicLoadBalancerRequest {
    pub name: String,
    pub subnet_ids: Vec<ResourceId>,
    pub listeners: Vec<Listener>,
    pub security_group_ids: Vec<ResourceId>,
    pub tags: Tags,
    pub access_logs: Option<AccessLogsConfig>,
}
