//! VPC Topology Builder
//!
//! Derives a complete virtual network topology (VPC, public and private
//! subnets, gateways, route tables and flow logs) from a handful of inputs,
//! following Clean/Hexagonal Architecture principles.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod shared;
