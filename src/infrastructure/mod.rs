//! Infrastructure Layer
//!
//! Contains all external concerns: driving adapters (planning entry points) and
//! driven adapters (provisioners, configuration).

pub mod driven_adapters;
pub mod driving_adapters;
