//! Load Balancer Use Cases

mod classic_load_balancer;

pub use classic_load_balancer::{CreateClassicLoadBalancerUseCase, LOAD_BALANCER_CONTEXT};
