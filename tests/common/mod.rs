//! Common test utilities for e2e tests
//!
//! Provides a test application wired to the in-memory provisioner and
//! configuration built from inline TOML.

#![allow(dead_code)]

use std::sync::Arc;

use vpc_topology_builder::application::use_cases::vpc::BuildVpcUseCase;
use vpc_topology_builder::domain::models::args::ResourceArgs;
use vpc_topology_builder::domain::models::{FlowLogConfig, ResourceKind, Tags, TopologyRequest};
use vpc_topology_builder::infrastructure::driven_adapters::config::AppConfig;
use vpc_topology_builder::infrastructure::driven_adapters::in_memory_provisioner::{
    InMemoryProvisioner, ProvisionRecord,
};
use vpc_topology_builder::infrastructure::driving_adapters::plan::PlanHandler;

/// Test application context
pub struct TestApp {
    pub provisioner: Arc<InMemoryProvisioner>,
    pub build_vpc: BuildVpcUseCase,
}

impl TestApp {
    /// Create a new test application with an empty provisioner
    pub fn new() -> Self {
        Self::with_provisioner(InMemoryProvisioner::new())
    }

    /// Create a test application around a preconfigured provisioner
    pub fn with_provisioner(provisioner: InMemoryProvisioner) -> Self {
        let provisioner = Arc::new(provisioner);
        let build_vpc = BuildVpcUseCase::new(provisioner.clone());
        Self { provisioner, build_vpc }
    }

    /// A plan handler configured like the binary
    pub fn plan_handler(&self, config: &AppConfig) -> PlanHandler {
        PlanHandler::new(config.output.clone())
    }

    pub async fn records(&self) -> Vec<ProvisionRecord> {
        self.provisioner.records().await
    }

    pub async fn records_of(&self, kind: ResourceKind) -> Vec<ProvisionRecord> {
        self.records()
            .await
            .into_iter()
            .filter(|record| record.kind == kind)
            .collect()
    }

    pub async fn count(&self, kind: ResourceKind) -> usize {
        self.provisioner.count(kind).await
    }
}

/// Builder for topology requests
pub struct RequestBuilder {
    request: TopologyRequest,
}

impl RequestBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            request: TopologyRequest {
                name: name.to_string(),
                cidr_block: "10.0.0.0/16".to_string(),
                availability_zones: vec![],
                public_subnet_cidr_blocks: vec![],
                private_subnet_cidr_blocks: vec![],
                flow_log: None,
                tags: Tags::new(),
            },
        }
    }

    pub fn zones(mut self, zones: &[&str]) -> Self {
        self.request.availability_zones = zones.iter().map(ToString::to_string).collect();
        self
    }

    pub fn public(mut self, cidrs: &[&str]) -> Self {
        self.request.public_subnet_cidr_blocks = cidrs.iter().map(ToString::to_string).collect();
        self
    }

    pub fn private(mut self, cidrs: &[&str]) -> Self {
        self.request.private_subnet_cidr_blocks = cidrs.iter().map(ToString::to_string).collect();
        self
    }

    pub fn tag(mut self, key: &str, value: &str) -> Self {
        self.request.tags.insert(key.to_string(), value.to_string());
        self
    }

    pub fn flow_log(mut self, config: FlowLogConfig) -> Self {
        self.request.flow_log = Some(config);
        self
    }

    pub fn build(self) -> TopologyRequest {
        self.request
    }
}

/// Create a test configuration from inline TOML
pub fn create_test_config(topology: &str) -> AppConfig {
    let config_str = format!(
        r#"
{topology}

[output]
pretty = false
include_calls = true

[log]
format = "text"
"#
    );

    AppConfig::from_toml(&config_str).expect("Failed to build test config")
}

/// Extract the subnet argument records, in creation order
pub fn subnet_records(records: &[ProvisionRecord]) -> Vec<(String, String, String)> {
    records
        .iter()
        .filter_map(|record| match &record.args {
            ResourceArgs::Subnet(args) => Some((
                record.name.clone(),
                args.cidr_block.clone(),
                args.availability_zone.clone(),
            )),
            _ => None,
        })
        .collect()
}
