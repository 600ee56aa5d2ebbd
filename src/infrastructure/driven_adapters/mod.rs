//! Driven Adapters
//!
//! Implementations of gateway traits for external systems:
//! - In-memory provisioner
//! - Configuration

pub mod config;
pub mod in_memory_provisioner;

pub use config::AppConfig;
pub use in_memory_provisioner::InMemoryProvisioner;
