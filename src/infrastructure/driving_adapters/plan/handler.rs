//! Plan Handler
//!
//! Validates a topology request, builds it against the in-memory provisioner
//! and renders the resulting plan.

use std::sync::Arc;

use anyhow::Context;
use validator::Validate;

use crate::application::use_cases::vpc::BuildVpcUseCase;
use crate::domain::models::TopologyRequest;
use crate::infrastructure::driven_adapters::config::OutputConfig;
use crate::infrastructure::driven_adapters::in_memory_provisioner::InMemoryProvisioner;
use crate::shared::errors::AppError;

use super::dto::{PlanReportDto, TopologyRequestDto};

/// Handler producing a dry-run plan of a topology
///
/// Each plan runs against its own in-memory provisioner, so plans never see
/// each other's resources.
pub struct PlanHandler {
    output: OutputConfig,
}

impl PlanHandler {
    /// Create a new PlanHandler
    #[must_use]
    pub fn new(output: OutputConfig) -> Self {
        Self { output }
    }

    /// Plan the topology described by `dto`
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidRequest` if the DTO fails validation.
    /// Returns `AppError::UseCase` if the topology cannot be built.
    pub async fn plan(&self, dto: TopologyRequestDto) -> Result<PlanReportDto, AppError> {
        dto.validate()?;

        let provisioner = Arc::new(InMemoryProvisioner::new());
        let build_vpc_use_case = BuildVpcUseCase::new(provisioner.clone());

        let request = TopologyRequest::from(dto);
        let result = build_vpc_use_case.execute(&request).await?;
        let records = provisioner.records().await;

        let report = PlanReportDto::new(&request, &result, records);
        if self.output.include_calls {
            Ok(report)
        } else {
            Ok(report.without_calls())
        }
    }

    /// Serialize a report as configured
    ///
    /// # Errors
    ///
    /// Returns `AppError::Internal` if the report cannot be serialized.
    pub fn render(&self, report: &PlanReportDto) -> Result<String, AppError> {
        let rendered = if self.output.pretty {
            serde_json::to_string_pretty(report)
        } else {
            serde_json::to_string(report)
        };
        rendered.context("serializing plan report").map_err(AppError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::ResourceKind;
    use std::collections::BTreeMap;

    fn create_test_dto(zones: &[&str], public: &[&str], private: &[&str]) -> TopologyRequestDto {
        let to_vec = |items: &[&str]| items.iter().map(ToString::to_string).collect();
        TopologyRequestDto {
            name: "demo".to_string(),
            cidr_block: "10.0.0.0/16".to_string(),
            availability_zones: to_vec(zones),
            public_subnet_cidr_blocks: to_vec(public),
            private_subnet_cidr_blocks: to_vec(private),
            flow_log: None,
            tags: BTreeMap::new(),
        }
    }

    #[tokio::test]
    async fn should_plan_valid_topology() {
        let handler = PlanHandler::new(OutputConfig::default());

        let report = handler
            .plan(create_test_dto(&["a", "b"], &["10.0.1.0/24"], &["10.0.3.0/24"]))
            .await
            .unwrap();

        assert!(report.nat_gateway_id.is_some());
        assert!(report.nat_public_ip.is_some());
        assert_eq!(report.public_subnets[0].availability_zone, "a");
        assert_eq!(report.private_subnets[0].cidr_block, "10.0.3.0/24");
        assert_eq!(report.resource_counts.get(&ResourceKind::Subnet), Some(&2));
        assert_eq!(report.calls.len(), 10);
    }

    #[tokio::test]
    async fn should_reject_invalid_dto_before_building() {
        let handler = PlanHandler::new(OutputConfig::default());

        let mut dto = create_test_dto(&["a"], &["10.0.1.0/24"], &[]);
        dto.cidr_block = "not-a-cidr".to_string();
        let err = handler.plan(dto).await.unwrap_err();

        assert!(matches!(err, AppError::InvalidRequest(_)));
    }

    #[tokio::test]
    async fn should_plan_same_topology_repeatedly() {
        let handler = PlanHandler::new(OutputConfig::default());
        let dto = create_test_dto(&["a", "b"], &["10.0.1.0/24"], &["10.0.3.0/24"]);

        let first = handler.plan(dto.clone()).await.unwrap();
        let second = handler.plan(dto).await.unwrap();

        assert_eq!(second.resource_counts.get(&ResourceKind::Vpc), Some(&1));
        assert_eq!(second.calls.len(), first.calls.len());
        assert_ne!(second.vpc_id, first.vpc_id);
    }

    #[tokio::test]
    async fn should_render_compact_report_without_calls() {
        let output = OutputConfig {
            pretty: false,
            include_calls: false,
        };
        let handler = PlanHandler::new(output);

        let report = handler.plan(create_test_dto(&["a"], &["10.0.1.0/24"], &[])).await.unwrap();
        let rendered = handler.render(&report).unwrap();

        assert!(!rendered.contains('\n'));
        assert!(!rendered.contains("\"calls\""));
        assert!(rendered.contains("\"internetGatewayId\""));
    }
}
