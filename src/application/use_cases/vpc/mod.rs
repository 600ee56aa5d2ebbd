//! VPC Use Cases
//!
//! Building a network topology: the entry point and the builder steps it
//! chains together. Each builder takes the results of earlier steps as
//! plain parameters.

mod build_phase;
mod build_vpc;
mod flow_log;
mod network_container;
mod private_partition;
mod public_partition;
mod subnets;

pub use build_phase::BuildPhase;
pub use build_vpc::BuildVpcUseCase;
pub use flow_log::bind_flow_log;
pub use network_container::create_network_container;
pub use private_partition::{build_private_partition, nat_eip_name, nat_gateway_name, private_route_table_name};
pub use public_partition::{build_public_partition, public_route_table_name};
pub use subnets::{subnet_name, Exposure};

pub const NETWORK_CONTAINER_CONTEXT: &str = "while creating network container";
pub const PUBLIC_SUBNETS_CONTEXT: &str = "while creating public subnets";
pub const NAT_GATEWAY_CONTEXT: &str = "while creating NAT gateway";
pub const PRIVATE_SUBNETS_CONTEXT: &str = "while creating private subnets";
pub const FLOW_LOG_CONTEXT: &str = "while creating flow log";
