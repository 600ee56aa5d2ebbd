//! Create Auto Scaling Group Use Case
//!
//! A launch template followed by a single-instance autoscaling group that
//! always runs its latest version.

use std::sync::Arc;

use crate::domain::gateways::ResourceProvisioner;
use crate::domain::models::args::{
    AutoScalingGroupArgs, LaunchTemplateArgs, LaunchTemplateSpec, LATEST_LAUNCH_TEMPLATE_VERSION,
};
use crate::domain::models::{AutoScalingGroupOutput, AutoScalingGroupRequest, ResourceKind};
use crate::shared::errors::{ResourceCreationError, UseCaseError};

pub const LAUNCH_TEMPLATE_CONTEXT: &str = "while creating launch template";
pub const AUTOSCALING_GROUP_CONTEXT: &str = "while creating autoscaling group";

/// Fixed capacity of the group
const GROUP_CAPACITY: u32 = 1;

/// Use case for creating an autoscaling group with its launch template
pub struct CreateAutoScalingGroupUseCase {
    provisioner: Arc<dyn ResourceProvisioner>,
}

impl CreateAutoScalingGroupUseCase {
    /// Create a new CreateAutoScalingGroupUseCase
    #[must_use]
    pub fn new(provisioner: Arc<dyn ResourceProvisioner>) -> Self {
        Self { provisioner }
    }

    /// Execute the use case
    ///
    /// # Errors
    ///
    /// Returns `UseCaseError::ResourceCreation` if either resource is rejected;
    /// the group is not attempted when the launch template fails.
    pub async fn execute(&self, request: &AutoScalingGroupRequest) -> Result<AutoScalingGroupOutput, UseCaseError> {
        tracing::info!(
            name = %request.name,
            instance_type = %request.instance_type,
            subnets = request.subnet_ids.len(),
            "Creating autoscaling group"
        );

        let template_args = LaunchTemplateArgs {
            name_prefix: request.name.clone(),
            image_id: request.ami_id.clone(),
            instance_type: request.instance_type.clone(),
            user_data: request.user_data.clone(),
            vpc_security_group_ids: request.security_group_ids.clone(),
            tags: request.tags.clone(),
        };
        let launch_template = self
            .provisioner
            .create_launch_template(&request.name, &template_args)
            .await
            .map_err(|e| {
                tracing::warn!(name = %request.name, error = %e, "Launch template creation failed");
                ResourceCreationError::new(LAUNCH_TEMPLATE_CONTEXT, ResourceKind::LaunchTemplate, &request.name, e)
            })?;

        let group_args = AutoScalingGroupArgs {
            desired_capacity: GROUP_CAPACITY,
            min_size: GROUP_CAPACITY,
            max_size: GROUP_CAPACITY,
            vpc_zone_identifiers: request.subnet_ids.clone(),
            load_balancers: request.load_balancer_id.iter().cloned().collect(),
            launch_template: LaunchTemplateSpec {
                id: launch_template.id.clone(),
                version: LATEST_LAUNCH_TEMPLATE_VERSION.to_string(),
            },
        };
        let group = self
            .provisioner
            .create_autoscaling_group(&request.name, &group_args)
            .await
            .map_err(|e| {
                tracing::warn!(name = %request.name, error = %e, "Autoscaling group creation failed");
                ResourceCreationError::new(AUTOSCALING_GROUP_CONTEXT, ResourceKind::AutoScalingGroup, &request.name, e)
            })?;

        tracing::info!(
            launch_template_id = %launch_template.id,
            autoscaling_group_id = %group.id,
            "Autoscaling group created successfully"
        );
        Ok(AutoScalingGroupOutput { launch_template, group })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gateways::MockResourceProvisioner;
    use crate::domain::models::{CreatedResource, ResourceId, Tags};
    use crate::shared::errors::ProvisionerError;

    fn create_test_request() -> AutoScalingGroupRequest {
        AutoScalingGroupRequest {
            name: "api".to_string(),
            ami_id: "ami-0abcdef1234567890".to_string(),
            instance_type: "t3.micro".to_string(),
            user_data: None,
            subnet_ids: vec![ResourceId::from("subnet-1"), ResourceId::from("subnet-2")],
            load_balancer_id: Some(ResourceId::from("elb-1")),
            security_group_ids: vec![ResourceId::from("sg-1")],
            tags: Tags::from([("team".to_string(), "api".to_string())]),
        }
    }

    #[tokio::test]
    async fn should_create_group_from_launch_template() {
        let mut mock = MockResourceProvisioner::new();
        mock.expect_create_launch_template()
            .withf(|_, args| args.name_prefix == "api" && !args.tags.contains_key("Name"))
            .times(1)
            .returning(|name, _| Ok(CreatedResource::new(ResourceKind::LaunchTemplate, name, ResourceId::from("lt-1"))));
        mock.expect_create_autoscaling_group()
            .withf(|_, args| {
                args.launch_template.id == ResourceId::from("lt-1")
                    && args.launch_template.version == "$Latest"
                    && args.desired_capacity == 1
                    && args.min_size == 1
                    && args.max_size == 1
                    && args.vpc_zone_identifiers.len() == 2
                    && args.load_balancers == vec![ResourceId::from("elb-1")]
            })
            .times(1)
            .returning(|name, _| {
                Ok(CreatedResource::new(ResourceKind::AutoScalingGroup, name, ResourceId::from("asg-1")))
            });

        let use_case = CreateAutoScalingGroupUseCase::new(Arc::new(mock));
        let output = use_case.execute(&create_test_request()).await.unwrap();

        assert_eq!(output.launch_template.id.as_str(), "lt-1");
        assert_eq!(output.group.id.as_str(), "asg-1");
    }

    #[tokio::test]
    async fn should_not_create_group_when_template_fails() {
        let mut mock = MockResourceProvisioner::new();
        mock.expect_create_launch_template().returning(|name, _| {
            Err(ProvisionerError::Rejected {
                kind: ResourceKind::LaunchTemplate,
                name: name.to_string(),
                reason: "InvalidAMIID.NotFound".to_string(),
            })
        });
        mock.expect_create_autoscaling_group().never();

        let use_case = CreateAutoScalingGroupUseCase::new(Arc::new(mock));
        let err = use_case.execute(&create_test_request()).await.unwrap_err();

        assert_eq!(err.context(), Some(LAUNCH_TEMPLATE_CONTEXT));
    }
}
