//! Plan DTOs
//!
//! Data transfer objects for the topology request read from configuration
//! and the plan report written to stdout.

use std::collections::BTreeMap;
use std::net::Ipv4Addr;

use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::models::args::FlowLogDestinationOptions;
use crate::domain::models::{CreatedResource, FlowLogConfig, ResourceKind, TopologyRequest, TopologyResult};
use crate::infrastructure::driven_adapters::in_memory_provisioner::{count_by_kind, ProvisionRecord};

lazy_static! {
    /// Regex for IPv4 CIDR notation, octet ranges are checked separately
    static ref CIDR_REGEX: Regex = Regex::new(r"^(\d{1,3}\.){3}\d{1,3}/\d{1,2}$").expect("valid regex");

    /// Regex for names used as the base of every derived resource name
    static ref RESOURCE_NAME_REGEX: Regex = Regex::new(r"^[A-Za-z0-9][A-Za-z0-9-]*$").expect("valid regex");
}

const TRAFFIC_TYPES: [&str; 3] = ["ACCEPT", "REJECT", "ALL"];

/// Validates IPv4 CIDR notation (`10.0.0.0/16`)
fn validate_cidr(cidr: &str) -> Result<(), validator::ValidationError> {
    let well_formed = CIDR_REGEX.is_match(cidr)
        && cidr.split_once('/').is_some_and(|(address, prefix)| {
            address.parse::<Ipv4Addr>().is_ok() && prefix.parse::<u8>().is_ok_and(|p| p <= 32)
        });

    if well_formed {
        Ok(())
    } else {
        let mut error = validator::ValidationError::new("cidr");
        error.message = Some(format!("'{cidr}' is not valid IPv4 CIDR notation").into());
        Err(error)
    }
}

/// Validates a list of CIDR blocks
fn validate_cidr_list(cidrs: &[String]) -> Result<(), validator::ValidationError> {
    for cidr in cidrs {
        validate_cidr(cidr)?;
    }
    Ok(())
}

/// Validates the topology base name
fn validate_resource_name(name: &str) -> Result<(), validator::ValidationError> {
    if RESOURCE_NAME_REGEX.is_match(name) {
        Ok(())
    } else {
        let mut error = validator::ValidationError::new("resource_name");
        error.message = Some("name must start with a letter or digit and contain only letters, digits and '-'".into());
        Err(error)
    }
}

/// Validates that no availability zone is blank
fn validate_zone_list(zones: &[String]) -> Result<(), validator::ValidationError> {
    if zones.iter().any(|zone| zone.trim().is_empty()) {
        let mut error = validator::ValidationError::new("availability_zone");
        error.message = Some("availability zones must not be blank".into());
        return Err(error);
    }
    Ok(())
}

/// Validates the traffic type of an enabled flow log; disabled ones are never bound
fn validate_flow_log(flow_log: &FlowLogConfigDto) -> Result<(), validator::ValidationError> {
    if !flow_log.enabled || TRAFFIC_TYPES.contains(&flow_log.traffic_type.as_str()) {
        Ok(())
    } else {
        let mut error = validator::ValidationError::new("traffic_type");
        error.message = Some("traffic_type must be one of ACCEPT, REJECT or ALL".into());
        Err(error)
    }
}

/// DTO for flow log destination options
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FlowLogDestinationOptionsDto {
    pub file_format: Option<String>,
    pub hive_compatible_partitions: Option<bool>,
    pub per_hour_partition: Option<bool>,
}

impl From<FlowLogDestinationOptionsDto> for FlowLogDestinationOptions {
    fn from(dto: FlowLogDestinationOptionsDto) -> Self {
        Self {
            file_format: dto.file_format,
            hive_compatible_partitions: dto.hive_compatible_partitions,
            per_hour_partition: dto.per_hour_partition,
        }
    }
}

/// DTO for flow log configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FlowLogConfigDto {
    #[serde(default)]
    pub enabled: bool,

    pub traffic_type: String,

    pub log_destination_type: Option<String>,

    pub log_destination: Option<String>,

    pub destination_options: Option<FlowLogDestinationOptionsDto>,
}

impl From<FlowLogConfigDto> for FlowLogConfig {
    fn from(dto: FlowLogConfigDto) -> Self {
        Self {
            enabled: dto.enabled,
            traffic_type: dto.traffic_type,
            log_destination_type: dto.log_destination_type,
            log_destination: dto.log_destination,
            destination_options: dto.destination_options.map(Into::into),
        }
    }
}

/// DTO for a topology request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TopologyRequestDto {
    #[validate(
        length(min = 1, max = 64, message = "name must be between 1 and 64 characters"),
        custom(function = "validate_resource_name")
    )]
    pub name: String,

    #[validate(custom(function = "validate_cidr"))]
    pub cidr_block: String,

    #[serde(default)]
    #[validate(custom(function = "validate_zone_list"))]
    pub availability_zones: Vec<String>,

    #[serde(default)]
    #[validate(custom(function = "validate_cidr_list"))]
    pub public_subnet_cidr_blocks: Vec<String>,

    #[serde(default)]
    #[validate(custom(function = "validate_cidr_list"))]
    pub private_subnet_cidr_blocks: Vec<String>,

    #[serde(default)]
    #[validate(custom(function = "validate_flow_log"))]
    pub flow_log: Option<FlowLogConfigDto>,

    #[serde(default)]
    pub tags: BTreeMap<String, String>,
}

impl From<TopologyRequestDto> for TopologyRequest {
    fn from(dto: TopologyRequestDto) -> Self {
        Self {
            name: dto.name,
            cidr_block: dto.cidr_block,
            availability_zones: dto.availability_zones,
            public_subnet_cidr_blocks: dto.public_subnet_cidr_blocks,
            private_subnet_cidr_blocks: dto.private_subnet_cidr_blocks,
            flow_log: dto.flow_log.map(Into::into),
            tags: dto.tags,
        }
    }
}

/// Subnet entry of the plan report
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubnetDto {
    pub name: String,
    pub id: String,
    pub cidr_block: String,
    pub availability_zone: String,
}

impl SubnetDto {
    /// Pair built subnets with the CIDR blocks and zones they were requested with
    fn from_positional(subnets: &[CreatedResource], cidr_blocks: &[String], zones: &[String]) -> Vec<Self> {
        subnets
            .iter()
            .zip(cidr_blocks)
            .zip(zones)
            .map(|((subnet, cidr_block), zone)| Self {
                name: subnet.name.clone(),
                id: subnet.id.to_string(),
                cidr_block: cidr_block.clone(),
                availability_zone: zone.clone(),
            })
            .collect()
    }
}

/// Plan report DTO
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanReportDto {
    pub name: String,
    pub vpc_id: String,
    pub cidr_block: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internet_gateway_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nat_gateway_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nat_public_ip: Option<String>,
    pub public_subnets: Vec<SubnetDto>,
    pub private_subnets: Vec<SubnetDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flow_log_id: Option<String>,
    pub resource_counts: BTreeMap<ResourceKind, usize>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub calls: Vec<ProvisionRecord>,
    pub generated_at: DateTime<Utc>,
}

impl PlanReportDto {
    /// Render a built topology and the calls that produced it
    #[must_use]
    pub fn new(request: &TopologyRequest, result: &TopologyResult, records: Vec<ProvisionRecord>) -> Self {
        let nat = result.private.as_ref().and_then(|partition| partition.nat.as_ref());

        Self {
            name: request.name.clone(),
            vpc_id: result.vpc.id.to_string(),
            cidr_block: request.cidr_block.clone(),
            internet_gateway_id: result.internet_gateway().map(|igw| igw.id.to_string()),
            nat_gateway_id: nat.map(|nat| nat.gateway.id.to_string()),
            nat_public_ip: nat.and_then(|nat| nat.eip.output("public_ip")).map(ToString::to_string),
            public_subnets: SubnetDto::from_positional(
                result.public_subnets(),
                &request.public_subnet_cidr_blocks,
                &request.availability_zones,
            ),
            private_subnets: SubnetDto::from_positional(
                result.private_subnets(),
                &request.private_subnet_cidr_blocks,
                &request.availability_zones,
            ),
            flow_log_id: result.flow_log.as_ref().map(|flow_log| flow_log.id.to_string()),
            resource_counts: count_by_kind(&records),
            calls: records,
            generated_at: Utc::now(),
        }
    }

    /// Drop the per-call log, keeping only the summary
    #[must_use]
    pub fn without_calls(mut self) -> Self {
        self.calls.clear();
        self
    }
}
