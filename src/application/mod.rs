//! Application Layer
//!
//! Use cases that turn topology and workload requests into ordered calls on
//! the resource provisioner port.

pub mod use_cases;
